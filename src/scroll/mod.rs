//! Everything driven by the page scroll position: the progress bar, the
//! back-to-top button, the table-of-contents spy and reveal-on-scroll.

mod progress;
mod reveal;
mod toc_spy;

pub use progress::{ progress_percent, ScrollMetrics, ScrollTelemetry, BACK_TO_TOP_THRESHOLD };
pub use reveal::{ RevealTracker, REVEAL_THRESHOLD };
pub use toc_spy::{ TocSpy, SPY_ROOT_MARGIN, SPY_THRESHOLD };

/// One observer notification for one element, identified by DOM id.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            target: target.into(),
            is_intersecting,
        }
    }
}
