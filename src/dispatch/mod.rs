//! Обобщённый движок диспетчеризации по типу полезной нагрузки.
//!
//! Этот модуль реализует ядро, общее для обоих семейств уведомлений:
//!
//! - `dispatcher`: реестр адаптеров по `TypeId`, индекс идентичностей,
//!   подписка/отписка/рассылка.
//! - `handler`: типизированный обработчик, его идентичность и стёртый
//!   адаптер с даункастом внутри.
//!
//! Семейственные обёртки над движком живут в [`crate::events`] и
//! [`crate::messages`]; сам движок о семействах ничего не знает.

pub mod dispatcher;
pub mod handler;

pub use dispatcher::Dispatcher;
pub(crate) use handler::Adapter;
pub use handler::{Handler, HandlerId};
