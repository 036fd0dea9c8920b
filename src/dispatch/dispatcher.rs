use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::Arc,
};

use parking_lot::RwLock;
use tracing::{debug, trace};

use super::{Adapter, Handler, HandlerId};

/// Оба отображения живут под одним замком, поэтому реестр и индекс
/// идентичностей не могут разъехаться.
#[derive(Default)]
struct Inner {
    /// Тип полезной нагрузки → упорядоченная цепочка адаптеров.
    /// Порядок вставки определяет порядок доставки.
    registry: HashMap<TypeId, Vec<Arc<Adapter>>>,
    /// Идентичность обработчика → его адаптер. Используется только для
    /// проверки на дубликаты и для снятия подписки, при доставке не читается.
    index: HashMap<HandlerId, Arc<Adapter>>,
}

/// Обобщённый движок диспетчеризации по типу полезной нагрузки.
///
/// Поддерживает:
/// - Идемпотентную подписку (повторная подписка той же идентичности — no-op)
/// - Снятие подписки по точной идентичности, безопасное при повторах
/// - Синхронную рассылку строго в порядке регистрации
/// - Автоматическое удаление опустевших записей реестра
///
/// Доставка идёт по снимку цепочки: изменения, сделанные обработчиком во
/// время рассылки, действуют только на последующие публикации.
pub struct Dispatcher {
    /// Имя экземпляра для диагностики и трассировки ("events", "messages").
    name: &'static str,
    inner: RwLock<Inner>,
}

impl Dispatcher {
    /// Создаёт пустой диспетчер с данным именем.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Подписывает обработчик на полезную нагрузку типа `T`.
    ///
    /// Если обработчик с той же идентичностью уже зарегистрирован, вызов
    /// ничего не делает: подписка не дублируется и НЕ переносится в конец
    /// порядка доставки.
    pub fn subscribe<T: Any>(&self, handler: &Handler<T>) {
        let mut inner = self.inner.write();
        if inner.index.contains_key(&handler.id()) {
            trace!(
                bus = self.name,
                handler = ?handler.id(),
                "duplicate subscribe ignored"
            );
            return;
        }

        let adapter = Arc::new(Adapter::new(handler));
        inner.index.insert(handler.id(), Arc::clone(&adapter));
        inner
            .registry
            .entry(TypeId::of::<T>())
            .or_default()
            .push(adapter);

        trace!(
            bus = self.name,
            payload = std::any::type_name::<T>(),
            handler = ?handler.id(),
            "handler subscribed"
        );
    }

    /// Снимает подписку обработчика. Неизвестные идентичности молча
    /// игнорируются, повторный вызов безопасен.
    ///
    /// Тип снимаемой подписки берётся из самого адаптера, а не из параметра
    /// вызова, поэтому реестр и индекс остаются согласованными даже при
    /// ошибочном параметре типа (расхождение ловит debug-ассерт).
    pub fn unsubscribe<T: Any>(&self, handler: &Handler<T>) {
        let mut inner = self.inner.write();
        let Some(adapter) = inner.index.remove(&handler.id()) else {
            return;
        };
        debug_assert_eq!(
            adapter.payload_type_id(),
            TypeId::of::<T>(),
            "handler registered under `{}` unsubscribed as `{}`",
            adapter.type_name(),
            std::any::type_name::<T>()
        );

        let type_id = adapter.payload_type_id();
        if let Some(chain) = inner.registry.get_mut(&type_id) {
            chain.retain(|a| a.id() != adapter.id());
            if chain.is_empty() {
                inner.registry.remove(&type_id);
            }
        }

        trace!(
            bus = self.name,
            payload = adapter.type_name(),
            handler = ?adapter.id(),
            "handler unsubscribed"
        );
    }

    /// Рассылает полезную нагрузку всем обработчикам её точного типа,
    /// синхронно и в порядке регистрации.
    ///
    /// Работает по снимку цепочки, снятому в начале рассылки: обработчик
    /// может во время вызова подписываться, отписываться (в том числе сам)
    /// и публиковать дальше — замок к этому моменту уже отпущен, а текущая
    /// рассылка изменений не видит.
    ///
    /// Публикация без единого подписчика — задокументированный no-op.
    pub fn publish<T: Any>(&self, payload: &T) {
        let chain = {
            let inner = self.inner.read();
            match inner.registry.get(&TypeId::of::<T>()) {
                Some(chain) => chain.clone(),
                None => {
                    debug!(
                        bus = self.name,
                        payload = std::any::type_name::<T>(),
                        "publish without listeners"
                    );
                    return;
                }
            }
        };

        trace!(
            bus = self.name,
            payload = std::any::type_name::<T>(),
            listeners = chain.len(),
            "dispatching"
        );
        for adapter in &chain {
            adapter.invoke(payload);
        }
    }

    /// Число различных зарегистрированных обработчиков по всем типам.
    /// Растёт на единицу на каждую уникальную подписку; полезно для
    /// отладки и почти ни для чего больше.
    pub fn handler_count(&self) -> usize {
        self.inner.read().index.len()
    }

    /// Число типов полезной нагрузки, у которых сейчас есть хотя бы один
    /// обработчик. Опустевшие записи удаляются, поэтому ноль подписок —
    /// ноль типов.
    pub fn type_count(&self) -> usize {
        self.inner.read().registry.len()
    }

    /// Проверяет, что не зарегистрировано ни одного обработчика.
    pub fn is_empty(&self) -> bool {
        self.handler_count() == 0
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("name", &self.name)
            .field("handlers", &self.handler_count())
            .field("types", &self.type_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    use super::*;

    struct Ping(u32);
    struct Pong;

    fn counting_handler(hits: &Arc<AtomicUsize>) -> Handler<Ping> {
        let hits = Arc::clone(hits);
        Handler::new(move |_: &Ping| {
            hits.fetch_add(1, Ordering::Relaxed);
        })
    }

    /// Тест проверяет, что повторная подписка той же идентичности — no-op:
    /// на одну публикацию приходится ровно один вызов.
    #[test]
    fn test_subscribe_is_idempotent() {
        let bus = Dispatcher::new("test");
        let hits = Arc::new(AtomicUsize::new(0));
        let h = counting_handler(&hits);

        bus.subscribe(&h);
        bus.subscribe(&h);
        bus.subscribe(&h.clone());

        assert_eq!(bus.handler_count(), 1);
        bus.publish(&Ping(1));
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    /// Тест проверяет доставку строго по точному типу: подписчик `Ping`
    /// не видит публикаций `Pong`.
    #[test]
    fn test_exact_type_delivery() {
        let bus = Dispatcher::new("test");
        let hits = Arc::new(AtomicUsize::new(0));
        let h = counting_handler(&hits);

        bus.subscribe(&h);
        bus.publish(&Pong);
        assert_eq!(hits.load(Ordering::Relaxed), 0);

        bus.publish(&Ping(0));
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    /// Тест проверяет, что обработчики вызываются в порядке регистрации.
    #[test]
    fn test_registration_order_preserved() {
        let bus = Dispatcher::new("test");
        let order = Arc::new(Mutex::new(Vec::new()));

        let handlers: Vec<Handler<Ping>> = (0..3)
            .map(|i| {
                let order = Arc::clone(&order);
                Handler::new(move |_: &Ping| order.lock().unwrap().push(i))
            })
            .collect();
        for h in &handlers {
            bus.subscribe(h);
        }

        bus.publish(&Ping(0));
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    /// Тест проверяет снятие подписки из середины цепочки и то, что
    /// повторная отписка — безвредный no-op.
    #[test]
    fn test_unsubscribe_middle_and_redundant() {
        let bus = Dispatcher::new("test");
        let order = Arc::new(Mutex::new(Vec::new()));

        let handlers: Vec<Handler<Ping>> = (0..3)
            .map(|i| {
                let order = Arc::clone(&order);
                Handler::new(move |_: &Ping| order.lock().unwrap().push(i))
            })
            .collect();
        for h in &handlers {
            bus.subscribe(h);
        }

        bus.unsubscribe(&handlers[1]);
        bus.unsubscribe(&handlers[1]);
        assert_eq!(bus.handler_count(), 2);

        bus.publish(&Ping(0));
        assert_eq!(*order.lock().unwrap(), vec![0, 2]);
    }

    /// Тест проверяет, что отписка никогда не подписанного обработчика
    /// молча игнорируется.
    #[test]
    fn test_unsubscribe_unknown_is_noop() {
        let bus = Dispatcher::new("test");
        let stranger: Handler<Ping> = Handler::new(|_| {});
        bus.unsubscribe(&stranger);
        assert!(bus.is_empty());
    }

    /// Тест проверяет, что публикация без подписчиков — no-op, а не ошибка.
    #[test]
    fn test_publish_without_listeners() {
        let bus = Dispatcher::new("test");
        bus.publish(&Ping(7));
        assert!(bus.is_empty());
    }

    /// Тест проверяет, что отписка действительно вычищает адаптер из
    /// реестра: запись типа исчезает, а бывший подписчик не получает
    /// последующих публикаций.
    #[test]
    fn test_unsubscribe_removes_from_registry() {
        let bus = Dispatcher::new("test");
        let hits = Arc::new(AtomicUsize::new(0));
        let h = counting_handler(&hits);

        bus.subscribe(&h);
        assert_eq!(bus.type_count(), 1);

        bus.unsubscribe(&h);
        assert_eq!(bus.type_count(), 0);
        assert_eq!(bus.handler_count(), 0);

        bus.publish(&Ping(0));
        assert_eq!(hits.load(Ordering::Relaxed), 0);
    }

    /// Тест проверяет, что запись реестра живёт ровно столько, сколько
    /// есть хотя бы один адаптер: последняя отписка удаляет запись.
    #[test]
    fn test_empty_registry_entry_removed() {
        let bus = Dispatcher::new("test");
        let hits = Arc::new(AtomicUsize::new(0));
        let a = counting_handler(&hits);
        let b = counting_handler(&hits);

        bus.subscribe(&a);
        bus.subscribe(&b);
        assert_eq!(bus.type_count(), 1);

        bus.unsubscribe(&a);
        assert_eq!(bus.type_count(), 1);
        bus.unsubscribe(&b);
        assert_eq!(bus.type_count(), 0);
        assert!(bus.is_empty());
    }

    /// Тест проверяет, что повторная подписка НЕ переносит обработчик в
    /// конец порядка доставки.
    #[test]
    fn test_resubscribe_does_not_reorder() {
        let bus = Dispatcher::new("test");
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = {
            let order = Arc::clone(&order);
            Handler::new(move |_: &Ping| order.lock().unwrap().push("first"))
        };
        let second = {
            let order = Arc::clone(&order);
            Handler::new(move |_: &Ping| order.lock().unwrap().push("second"))
        };

        bus.subscribe(&first);
        bus.subscribe(&second);
        // Попытка "продвинуть" first в конец порядком ничего не меняет.
        bus.subscribe(&first);

        bus.publish(&Ping(0));
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    /// Тест проверяет учёт обработчиков разных типов в `handler_count`
    /// и `type_count`.
    #[test]
    fn test_counts_across_types() {
        let bus = Dispatcher::new("test");
        let ping: Handler<Ping> = Handler::new(|_| {});
        let pong: Handler<Pong> = Handler::new(|_| {});

        bus.subscribe(&ping);
        bus.subscribe(&pong);
        assert_eq!(bus.handler_count(), 2);
        assert_eq!(bus.type_count(), 2);

        bus.unsubscribe(&pong);
        assert_eq!(bus.handler_count(), 1);
        assert_eq!(bus.type_count(), 1);
    }
}
