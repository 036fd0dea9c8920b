/// Process settings loading.
pub mod config;
/// Generic type-keyed dispatch engine: Dispatcher, Handler, Adapter.
pub mod dispatch;
/// Ambient error types: settings, logging.
pub mod error;
/// The "event" notification family: EventBus, payload catalog, wiring.
pub mod events;
/// Flexible logging (filters, console and file sinks).
pub mod logging;
/// The "message" notification family: MessageBus, payload catalog, wiring.
pub mod messages;
/// Shared value types for payload catalogs.
pub mod types;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Process settings.
pub use config::Settings;
/// Dispatch engine surface.
pub use dispatch::{Dispatcher, Handler, HandlerId};
/// Ambient error types.
pub use error::{LoggingError, SettingsError};
/// Event family: bus, marker, wiring trait.
pub use events::{Event, EventBus, EventSubscriber};
/// Logging setup.
pub use logging::{init_logging, LoggingConfig, LoggingHandle};
/// Message family: bus, marker, wiring trait.
pub use messages::{Message, MessageBus, MessageSubscriber};
/// Catalog value types.
pub use types::{EntityId, Vec2};
