//! Семейство "сообщений" — командных уведомлений.
//!
//! Структурно идентично событийному семейству, но это независимый
//! экземпляр движка со своими глаголами (`subscribe` / `unsubscribe` /
//! `send`) и своим каталогом нагрузок. Реестры семейств не пересекаются:
//! подписка на тип в одной шине не слышит публикаций той же формы через
//! другую.

pub mod catalog;

use std::any::Any;

use once_cell::sync::Lazy;

pub use catalog::*;

use crate::dispatch::{Dispatcher, Handler};

/// Маркер принадлежности к семейству сообщений.
pub trait Message: Any {}

static MESSAGES: Lazy<MessageBus> = Lazy::new(MessageBus::new);

/// Шина семейства сообщений.
#[derive(Debug)]
pub struct MessageBus {
    core: Dispatcher,
}

impl MessageBus {
    /// Создаёт изолированную шину сообщений.
    pub fn new() -> Self {
        Self {
            core: Dispatcher::new("messages"),
        }
    }

    /// Глобальная шина процесса, лениво создаваемая при первом обращении.
    pub fn global() -> &'static MessageBus {
        &MESSAGES
    }

    /// Подписывает обработчик на сообщения типа `M`. Идемпотентно.
    pub fn subscribe<M: Message>(&self, handler: &Handler<M>) {
        self.core.subscribe(handler);
    }

    /// Снимает подписку; повторные и незнакомые вызовы безвредны.
    pub fn unsubscribe<M: Message>(&self, handler: &Handler<M>) {
        self.core.unsubscribe(handler);
    }

    /// Отправляет сообщение всем обработчикам его точного типа, синхронно
    /// и в порядке регистрации.
    pub fn send<M: Message>(&self, message: &M) {
        self.core.publish(message);
    }

    /// Число уникальных обработчиков по всем типам сообщений.
    pub fn subscriber_count(&self) -> usize {
        self.core.handler_count()
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Подсистема, принимающая сообщения; связывает и развязывает свои
/// подписки разом.
pub trait MessageSubscriber {
    fn subscribe_messages(&self, bus: &MessageBus);
    fn unsubscribe_messages(&self, bus: &MessageBus);
}
