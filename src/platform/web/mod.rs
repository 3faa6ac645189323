mod bindings;
mod observer;
mod window;

pub use bindings::PageBindings;
pub use window::{ scroll_into_view, scroll_to_top };

pub async fn sleep_ms(ms: u32) {
    gloo::timers::future::TimeoutFuture::new(ms).await;
}
