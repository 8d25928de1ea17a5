//! `aurum-events` — event plumbing between the host platform and the
//! pricing engine.
//!
//! The host publishes catalog notifications (product saves) onto an
//! [`EventBus`]; the pricing engine consumes them through a
//! [`Subscription`]. Everything here is synchronous and in-process — the
//! engine runs inside the platform's request lifecycle.

pub mod bus;
pub mod event;

pub use bus::{EventBus, InMemoryBusError, InMemoryEventBus, Subscription};
pub use event::Event;
