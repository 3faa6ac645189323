//! Thin wrappers over the browser APIs the pages need. Everything here
//! turns DOM callbacks into [`PageEvent`](crate::page::PageEvent)s sent over
//! a channel, so no page state is touched from inside a JS callback.
//!
//! Browser builds get the real bindings. Desktop and mobile shells have no
//! DOM to observe, so they get the same API backed by native stand-ins.

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::{ scroll_into_view, scroll_to_top, sleep_ms, PageBindings };

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(not(target_arch = "wasm32"))]
pub use native::{ scroll_into_view, scroll_to_top, sleep_ms, PageBindings };
