//! Per-page state and the single dispatch point for user and viewport
//! events. Handlers run to completion and hand side effects back to the
//! caller as [`Effect`]s.

mod controller;
mod event;
mod targets;

pub use controller::PageController;
pub use event::{ Effect, ObserverKind, PageEvent };
pub use targets::BindingTargets;
