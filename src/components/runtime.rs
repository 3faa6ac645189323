use dioxus::prelude::*;
use futures::channel::mpsc::{ self, UnboundedReceiver, UnboundedSender };
use futures_util::StreamExt;

use crate::configs::AppConfig;
use crate::content::PageProfile;
use crate::page::{ BindingTargets, Effect, PageController, PageEvent };
use crate::platform::{ self, PageBindings };
use crate::storage;
use crate::utils::count_up_value;

const FRAME_MS: u32 = 16;

/// What every page component gets from context: the page state and a way
/// to queue events for it.
#[derive(Clone, Copy)]
pub struct PageHandle {
    pub page: Signal<PageController>,
    tx: CopyValue<UnboundedSender<PageEvent>>,
}

impl PageHandle {
    pub fn send(&self, event: PageEvent) {
        if let Err(e) = self.tx.peek().unbounded_send(event) {
            log::warn!("Page event dropped: {}", e);
        }
    }
}

pub fn use_page_handle() -> PageHandle {
    use_context::<PageHandle>()
}

/// Creates the page state, provides it to children and starts the event
/// loop once the page is mounted. Events are handled one at a time, in
/// arrival order.
pub fn use_page(profile: &'static PageProfile) -> PageHandle {
    let page = use_signal(|| {
        let config = AppConfig::from_env();
        PageController::new(profile, storage::default_store(&config))
    });
    let (tx, mut inbox) = use_hook(|| {
        let (tx, rx) = mpsc::unbounded::<PageEvent>();
        (CopyValue::new(tx), CopyValue::new(Some(rx)))
    });
    let handle = use_context_provider(|| PageHandle { page, tx });

    use_effect(move || {
        let Some(rx) = inbox.write().take() else {
            return;
        };
        let targets = page.peek().binding_targets();
        spawn(run_page(handle, rx, targets));
    });

    handle
}

async fn run_page(
    handle: PageHandle,
    mut rx: UnboundedReceiver<PageEvent>,
    mut targets: BindingTargets
) {
    let tx = handle.tx.peek().clone();
    let bindings = match PageBindings::attach(&targets, tx.clone()) {
        Ok(bindings) => Some(bindings),
        Err(e) => {
            log::warn!("Page runs without browser bindings: {}", e);
            None
        }
    };
    let mut page = handle.page;
    let mut pending_toast: Option<Task> = None;

    while let Some(event) = rx.next().await {
        // no-op events never take a write borrow
        if !page.peek().needs_dispatch(&event) {
            continue;
        }
        let effects = page.write().dispatch(event);
        for effect in effects {
            match effect {
                Effect::ScheduleToastExpiry { generation, after_ms } => {
                    if let Some(task) = pending_toast.take() {
                        task.cancel();
                    }
                    let tx = tx.clone();
                    pending_toast = Some(
                        spawn(async move {
                            platform::sleep_ms(after_ms).await;
                            let _ = tx.unbounded_send(PageEvent::ToastExpired(generation));
                        })
                    );
                }
                Effect::ScrollToTop => platform::scroll_to_top(),
                Effect::ScrollIntoView(id) => {
                    // the marks only exist once the next render has landed
                    spawn(async move {
                        platform::sleep_ms(FRAME_MS).await;
                        platform::scroll_into_view(&id);
                    });
                }
                Effect::AnimateCounter { counter, target, duration_ms } => {
                    spawn(animate_counter(tx.clone(), counter, target, duration_ms));
                }
                Effect::Unobserve { observer, ids } => {
                    targets.unobserve(observer, &ids);
                    log::debug!("{:?} still watching {} element(s)", observer, targets.ids(observer).len());
                    if let Some(bindings) = &bindings {
                        bindings.unobserve(observer, &ids);
                    }
                }
            }
        }
    }
}

async fn animate_counter(
    tx: UnboundedSender<PageEvent>,
    counter: usize,
    target: u32,
    duration_ms: u32
) {
    let started = chrono::Utc::now();
    loop {
        let elapsed = (chrono::Utc::now() - started).num_milliseconds() as f64;
        let value = count_up_value(f64::from(target), elapsed, f64::from(duration_ms));
        if tx.unbounded_send(PageEvent::CounterTick { counter, value }).is_err() {
            break;
        }
        if elapsed >= f64::from(duration_ms) {
            break;
        }
        platform::sleep_ms(FRAME_MS).await;
    }
}
