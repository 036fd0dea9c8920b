use tracing_appender::non_blocking::WorkerGuard;

/// Держатель ресурсов логирования.
///
/// Владеет guard'ом фонового писателя файлового sink'а: пока handle жив,
/// буферизованные записи гарантированно доедут до файла. Ронять его стоит
/// последним, на выходе из процесса.
pub struct LoggingHandle {
    file_guard: Option<WorkerGuard>,
}

impl LoggingHandle {
    pub(crate) fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self { file_guard }
    }

    /// Активен ли файловый sink.
    pub fn file_logging_active(&self) -> bool {
        self.file_guard.is_some()
    }
}
