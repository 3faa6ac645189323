use futures::channel::mpsc::UnboundedSender;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit };

use crate::error::PlatformError;
use crate::page::PageEvent;
use crate::scroll::IntersectionEntry;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` whose notifications are forwarded as page
/// events. Disconnects on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl ViewportObserver {
    pub fn new(
        options: ObserverOptions,
        tx: UnboundedSender<PageEvent>,
        into_event: fn(Vec<IntersectionEntry>) -> PageEvent
    ) -> Result<Self, PlatformError> {
        let callback: EntriesCallback = Closure::wrap(
            Box::new(move |entries: Array, _observer: IntersectionObserver| {
                let batch: Vec<IntersectionEntry> = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionEntry::new(entry.target().id(), entry.is_intersecting()))
                    .collect();
                if batch.is_empty() {
                    return;
                }
                if let Err(e) = tx.unbounded_send(into_event(batch)) {
                    log::warn!("Dropping intersection batch: {}", e);
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Returns how many of the ids were found and observed.
    pub fn observe_ids<S: AsRef<str>>(&self, ids: &[S]) -> usize {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return 0;
        };
        ids.iter()
            .filter_map(|id| document.get_element_by_id(id.as_ref()))
            .map(|element| self.observer.observe(&element))
            .count()
    }

    pub fn unobserve_ids<S: AsRef<str>>(&self, ids: &[S]) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for element in ids.iter().filter_map(|id| document.get_element_by_id(id.as_ref())) {
            self.observer.unobserve(&element);
        }
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
