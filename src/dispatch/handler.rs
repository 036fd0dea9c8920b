use std::{
    any::{Any, TypeId},
    fmt,
    sync::Arc,
};

/// Идентичность обработчика.
///
/// Используется только для проверки на дубликаты при подписке и для
/// снятия подписки. Клоны одного [`Handler`] разделяют одну идентичность;
/// два независимо созданных обработчика различимы всегда, даже если их
/// замыкания ведут себя одинаково.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(usize);

/// Типизированный обработчик уведомлений одного конкретного типа `T`.
///
/// Тонкая клонируемая обёртка над `Arc<dyn Fn(&T)>`. Подписчик сохраняет
/// у себя клон, чтобы потом отписаться по той же идентичности.
pub struct Handler<T> {
    callback: Arc<dyn Fn(&T) + Send + Sync>,
}

impl<T: Any> Handler<T> {
    /// Оборачивает замыкание в обработчик.
    pub fn new(callback: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Стабильная идентичность обработчика: адрес данных внутри `Arc`.
    ///
    /// Реестр держит клон обработчика, поэтому аллокация не может быть
    /// освобождена и переиспользована, пока подписка жива.
    pub fn id(&self) -> HandlerId {
        HandlerId(Arc::as_ptr(&self.callback) as *const () as usize)
    }

    pub(crate) fn call(&self, payload: &T) {
        (self.callback)(payload)
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<T: Any> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("payload", &std::any::type_name::<T>())
            .field("id", &self.id())
            .finish()
    }
}

/// Стёртый адаптер: связывает типизированный обработчик с единообразной
/// формой вызова `Fn(&dyn Any)`.
///
/// Хранит `TypeId`, под которым был создан; реестр кладёт и достаёт адаптер
/// только под этим ключом, поэтому даункаст внутри провалиться не может.
pub(crate) struct Adapter {
    id: HandlerId,
    type_id: TypeId,
    type_name: &'static str,
    call: Box<dyn Fn(&dyn Any) + Send + Sync>,
}

impl Adapter {
    pub(crate) fn new<T: Any>(handler: &Handler<T>) -> Self {
        let typed = handler.clone();
        Self {
            id: handler.id(),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            call: Box::new(move |payload| {
                let payload = payload
                    .downcast_ref::<T>()
                    .expect("adapter invoked with a payload of a foreign type");
                typed.call(payload);
            }),
        }
    }

    pub(crate) fn id(&self) -> HandlerId {
        self.id
    }

    /// `TypeId` нагрузки, под которым адаптер был создан.
    ///
    /// Намеренно не называется `type_id`: адаптеры живут в `Arc`, а у
    /// `Arc<Adapter>` разрешение методов нашло бы `Any::type_id` ещё на
    /// шаге умного указателя и вернуло бы `TypeId` самого `Arc`.
    pub(crate) fn payload_type_id(&self) -> TypeId {
        self.type_id
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn invoke(&self, payload: &dyn Any) {
        debug_assert_eq!(
            self.type_id,
            payload.type_id(),
            "adapter for `{}` fetched under a foreign type key",
            self.type_name
        );
        (self.call)(payload);
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("payload", &self.type_name)
            .field("id", &self.id)
            .finish()
    }
}
