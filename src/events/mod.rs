//! Семейство транзиентных "событийных" уведомлений.
//!
//! - `EventBus`: типизированная обёртка движка с глаголами семейства
//!   (`add_listener` / `remove_listener` / `raise`).
//! - `catalog`: конкретные формы событийных нагрузок.
//!
//! Глобальный экземпляр создаётся лениво при первом обращении к
//! [`EventBus::global`] и живёт до конца процесса. Для изолированного и
//! тестируемого использования шину можно создать через [`EventBus::new`]
//! и передавать по ссылке.

pub mod catalog;

use std::any::Any;

use once_cell::sync::Lazy;

pub use catalog::*;

use crate::dispatch::{Dispatcher, Handler};

/// Маркер принадлежности к событийному семейству.
///
/// Каждая конкретная форма события объявляет `impl Event for ...`;
/// никаких требований сверх стабильной идентичности типа у маркера нет.
pub trait Event: Any {}

static EVENTS: Lazy<EventBus> = Lazy::new(EventBus::new);

/// Шина событийного семейства: независимый экземпляр движка, ничего не
/// разделяющий с шиной сообщений.
#[derive(Debug)]
pub struct EventBus {
    core: Dispatcher,
}

impl EventBus {
    /// Создаёт изолированную шину событий.
    pub fn new() -> Self {
        Self {
            core: Dispatcher::new("events"),
        }
    }

    /// Глобальная шина процесса. Первое обращение создаёт экземпляр,
    /// все последующие возвращают его же.
    pub fn global() -> &'static EventBus {
        &EVENTS
    }

    /// Подписывает слушателя на события типа `E`. Повторная подписка той
    /// же идентичности — no-op.
    pub fn add_listener<E: Event>(&self, handler: &Handler<E>) {
        self.core.subscribe(handler);
    }

    /// Снимает слушателя. Можно звать повторно и для незнакомых
    /// обработчиков.
    pub fn remove_listener<E: Event>(&self, handler: &Handler<E>) {
        self.core.unsubscribe(handler);
    }

    /// Поднимает событие: синхронно вызывает всех слушателей его точного
    /// типа в порядке регистрации.
    pub fn raise<E: Event>(&self, event: &E) {
        self.core.publish(event);
    }

    /// Число уникальных слушателей по всем типам событий.
    pub fn listener_count(&self) -> usize {
        self.core.handler_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Подсистема, которая слушает события. Пара методов связывает и
/// развязывает все её подписки разом; шина передаётся явно, чтобы
/// подсистему можно было проверять на изолированном экземпляре.
pub trait EventSubscriber {
    fn subscribe_events(&self, bus: &EventBus);
    fn unsubscribe_events(&self, bus: &EventBus);
}
