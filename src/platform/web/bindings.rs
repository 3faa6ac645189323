use futures::channel::mpsc::UnboundedSender;
use gloo::events::{ EventListener, EventListenerOptions, EventListenerPhase };
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use super::observer::{ ObserverOptions, ViewportObserver };
use super::window::scroll_metrics;
use crate::error::PlatformError;
use crate::page::{ BindingTargets, ObserverKind, PageEvent };
use crate::scroll::{ IntersectionEntry, REVEAL_THRESHOLD, SPY_ROOT_MARGIN, SPY_THRESHOLD };

const COUNTER_THRESHOLD: f64 = 0.6;

/// Every document-level listener and observer of one mounted page. All of
/// them detach when this is dropped.
#[derive(Default)]
pub struct PageBindings {
    listeners: Vec<EventListener>,
    observers: Vec<(ObserverKind, ViewportObserver)>,
}

impl PageBindings {
    pub fn attach(
        targets: &BindingTargets,
        tx: UnboundedSender<PageEvent>
    ) -> Result<Self, PlatformError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PlatformError::Missing("document".to_string()))?;
        let mut bindings = Self::default();

        let scroll_tx = tx.clone();
        bindings.listeners.push(
            EventListener::new_with_options(
                &document,
                "scroll",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: true,
                },
                move |_| {
                    if let Some(metrics) = scroll_metrics() {
                        let _ = scroll_tx.unbounded_send(PageEvent::Scrolled(metrics));
                    }
                }
            )
        );

        let key_tx = tx.clone();
        bindings.listeners.push(
            EventListener::new(&document, "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    let _ = key_tx.unbounded_send(PageEvent::KeyDown(event.key()));
                }
            })
        );

        let observers: [(ObserverKind, ObserverOptions, fn(Vec<IntersectionEntry>) -> PageEvent); 3] = [
            (
                ObserverKind::Spy,
                ObserverOptions { root_margin: SPY_ROOT_MARGIN, threshold: SPY_THRESHOLD },
                PageEvent::SectionsIntersected,
            ),
            (
                ObserverKind::Reveal,
                ObserverOptions { root_margin: "0px", threshold: REVEAL_THRESHOLD },
                PageEvent::RevealIntersected,
            ),
            (
                ObserverKind::Counters,
                ObserverOptions { root_margin: "0px", threshold: COUNTER_THRESHOLD },
                PageEvent::CountersIntersected,
            ),
        ];
        for (kind, options, into_event) in observers {
            let ids = targets.ids(kind);
            if ids.is_empty() {
                continue;
            }
            match ViewportObserver::new(options, tx.clone(), into_event) {
                Ok(observer) => {
                    let observed = observer.observe_ids(ids);
                    log::debug!("{:?} observing {}/{} element(s)", kind, observed, ids.len());
                    bindings.observers.push((kind, observer));
                }
                Err(e) => log::warn!("IntersectionObserver unavailable: {}", e),
            }
        }

        // initial paint of the progress bar and back-to-top button
        if let Some(metrics) = scroll_metrics() {
            let _ = tx.unbounded_send(PageEvent::Scrolled(metrics));
        }

        Ok(bindings)
    }

    pub fn unobserve(&self, kind: ObserverKind, ids: &[String]) {
        for (_, observer) in self.observers.iter().filter(|(k, _)| *k == kind) {
            observer.unobserve_ids(ids);
        }
    }
}
