use crate::scroll::{ IntersectionEntry, ScrollMetrics };

#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    ToggleTheme,
    Scrolled(ScrollMetrics),
    BackToTop,
    SectionsIntersected(Vec<IntersectionEntry>),
    RevealIntersected(Vec<IntersectionEntry>),
    CountersIntersected(Vec<IntersectionEntry>),
    CounterTick {
        counter: usize,
        value: i64,
    },
    QueryChanged(String),
    CardClicked(&'static str),
    CardHovered(&'static str),
    OpenModal(String),
    OpenCheatSheet,
    CloseModal,
    KeyDown(String),
    SelectAnswer {
        question: usize,
        option: usize,
    },
    CheckQuiz,
    ResetQuiz,
    ToastExpired(u64),
}

/// Work the UI layer performs after a handler returns.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Hide the toast of this generation after `after_ms`, cancelling any
    /// earlier pending hide.
    ScheduleToastExpiry {
        generation: u64,
        after_ms: u32,
    },
    ScrollToTop,
    ScrollIntoView(String),
    AnimateCounter {
        counter: usize,
        target: u32,
        duration_ms: u32,
    },
    /// Stop observing these element ids, on that observer only.
    Unobserve {
        observer: ObserverKind,
        ids: Vec<String>,
    },
}

/// The three viewport observers a page runs. Their target lists overlap
/// (sections are both spied and revealed), so every unobserve names one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObserverKind {
    Spy,
    Reveal,
    Counters,
}
