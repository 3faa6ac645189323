use std::thread;
use std::time::Duration;

use futures::channel::{ mpsc::UnboundedSender, oneshot };

use crate::error::PlatformError;
use crate::page::{ BindingTargets, ObserverKind, PageEvent };
use crate::scroll::IntersectionEntry;

/// Native shells have no viewport observers. The whole page counts as in
/// view: every section is revealed, every counter starts and the first TOC
/// entry is the active one.
#[derive(Default)]
pub struct PageBindings;

impl PageBindings {
    pub fn attach(
        targets: &BindingTargets,
        tx: UnboundedSender<PageEvent>
    ) -> Result<Self, PlatformError> {
        let all_visible = |kind: ObserverKind| -> Vec<IntersectionEntry> {
            targets
                .ids(kind)
                .iter()
                .map(|id| IntersectionEntry::new(id.clone(), true))
                .collect()
        };
        let mut initial = vec![
            PageEvent::RevealIntersected(all_visible(ObserverKind::Reveal)),
            PageEvent::CountersIntersected(all_visible(ObserverKind::Counters)),
        ];
        if let Some(first) = targets.spy.first() {
            initial.push(PageEvent::SectionsIntersected(vec![IntersectionEntry::new(first.clone(), true)]));
        }
        for event in initial {
            if let Err(e) = tx.unbounded_send(event) {
                log::warn!("Page closed before mount events were delivered: {}", e);
                break;
            }
        }
        log::debug!("No viewport observers on this target; page treated as fully visible");
        Ok(Self)
    }

    pub fn unobserve(&self, _kind: ObserverKind, _ids: &[String]) {}
}

pub fn scroll_to_top() {
    log::debug!("Scrolling is handled by the native webview");
}

pub fn scroll_into_view(id: &str) {
    log::debug!("Not scrolling to #{} on this target", id);
}

/// Timer that does not depend on which executor polls it.
pub async fn sleep_ms(ms: u32) {
    let (done, wait) = oneshot::channel::<()>();
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(u64::from(ms)));
        let _ = done.send(());
    });
    let _ = wait.await;
}
