use crate::content::{
    ContentTree,
    ModalState,
    PageProfile,
    QUIZ_CHECKED_MESSAGE,
    QUIZ_RESET_MESSAGE,
    QUIZ_SECTION_ID,
    NO_RESULTS_MESSAGE,
};
use crate::quiz::QuizEngine;
use crate::scroll::{ IntersectionEntry, RevealTracker, ScrollTelemetry, TocSpy };
use crate::search::{ HighlightMark, SearchHighlighter, SearchOutcome };
use crate::storage::PreferenceStore;
use crate::utils::{ CounterState, ThemeController, ToastState };

use super::{ BindingTargets, Effect, ObserverKind, PageEvent };

pub const COUNTER_ID_PREFIX: &str = "stat-";

pub struct PageController {
    pub profile: &'static PageProfile,
    pub theme: ThemeController,
    pub telemetry: ScrollTelemetry,
    pub toc: TocSpy,
    pub reveal: RevealTracker,
    pub content: ContentTree,
    pub search: SearchHighlighter,
    pub counters: Vec<CounterState>,
    pub modal: ModalState,
    pub quiz: QuizEngine,
    pub toast: ToastState,
    pub query: String,
}

impl PageController {
    pub fn new(profile: &'static PageProfile, store: Box<dyn PreferenceStore>) -> Self {
        let content = ContentTree::from_sections(profile.sections);
        let has_quiz = !profile.quiz.is_empty();
        let toc = TocSpy::new(
            profile.toc_links().into_iter().map(|(id, _)| id),
            |id| content.has_section(id) || (has_quiz && id == QUIZ_SECTION_ID)
        );
        let counters = content.counter_targets().iter().copied().map(CounterState::new).collect();

        let mut theme = ThemeController::new(profile.theme_key, store);
        theme.init_theme();

        let mut quiz = QuizEngine::new(profile.quiz);
        quiz.render();

        log::info!("Page {} ready ({} text nodes)", profile.slug, content.nodes().len());
        Self {
            profile,
            theme,
            telemetry: ScrollTelemetry::default(),
            toc,
            reveal: RevealTracker::default(),
            content,
            search: SearchHighlighter::default(),
            counters,
            modal: ModalState::default(),
            quiz,
            toast: ToastState::default(),
            query: String::new(),
        }
    }

    pub fn counter_dom_id(counter: usize) -> String {
        format!("{}{}", COUNTER_ID_PREFIX, counter)
    }

    /// What the viewport observers should watch once the page is mounted.
    pub fn binding_targets(&self) -> BindingTargets {
        let mut reveal: Vec<String> = self.content
            .sections()
            .iter()
            .map(|s| s.id.to_string())
            .collect();
        if !self.quiz.questions().is_empty() {
            reveal.push(QUIZ_SECTION_ID.to_string());
        }
        BindingTargets {
            spy: self.toc.sections().to_vec(),
            reveal,
            counters: (0..self.counters.len()).map(Self::counter_dom_id).collect(),
        }
    }

    /// False for events that would neither change a field nor produce an
    /// effect, so the caller can drop them without a write borrow.
    pub fn needs_dispatch(&self, event: &PageEvent) -> bool {
        match event {
            PageEvent::Scrolled(metrics) => {
                let mut telemetry = self.telemetry;
                telemetry.update(metrics);
                telemetry != self.telemetry
            }
            PageEvent::KeyDown(key) => key == "Escape" && self.modal.is_open(),
            PageEvent::CounterTick { counter, value } =>
                self.counters.get(*counter).is_some_and(|c| c.shown != *value),
            PageEvent::ToastExpired(generation) => self.toast.is_current(*generation),
            _ => true,
        }
    }

    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            PageEvent::ToggleTheme => self.theme.on_toggle_click(),
            PageEvent::Scrolled(metrics) => self.telemetry.update(&metrics),
            PageEvent::BackToTop => effects.push(Effect::ScrollToTop),
            PageEvent::SectionsIntersected(entries) => self.toc.on_intersection(&entries),
            PageEvent::RevealIntersected(entries) => {
                let fresh = self.reveal.on_intersection(&entries);
                if !fresh.is_empty() {
                    effects.push(Effect::Unobserve { observer: ObserverKind::Reveal, ids: fresh });
                }
            }
            PageEvent::CountersIntersected(entries) => self.start_counters(&entries, &mut effects),
            PageEvent::CounterTick { counter, value } => {
                if let Some(state) = self.counters.get_mut(counter) {
                    state.shown = value;
                }
            }
            PageEvent::QueryChanged(term) => self.on_query_change(term, &mut effects),
            PageEvent::CardClicked(message) | PageEvent::CardHovered(message) =>
                self.notify(message, &mut effects),
            PageEvent::OpenModal(key) => self.open_modal(&key),
            PageEvent::OpenCheatSheet => {
                if let Some(key) = self.profile.cheat_sheet {
                    self.open_modal(key);
                }
            }
            PageEvent::CloseModal => self.modal.close(),
            PageEvent::KeyDown(key) => {
                if key == "Escape" && self.modal.is_open() {
                    self.modal.close();
                }
            }
            PageEvent::SelectAnswer { question, option } => self.quiz.select(question, option),
            PageEvent::CheckQuiz => {
                self.quiz.check();
                self.notify(QUIZ_CHECKED_MESSAGE, &mut effects);
            }
            PageEvent::ResetQuiz => {
                self.quiz.reset();
                self.notify(QUIZ_RESET_MESSAGE, &mut effects);
            }
            PageEvent::ToastExpired(generation) => {
                self.toast.expire(generation);
            }
        }
        effects
    }

    fn notify(&mut self, message: impl Into<String>, effects: &mut Vec<Effect>) {
        let generation = self.toast.show(message);
        effects.push(Effect::ScheduleToastExpiry {
            generation,
            after_ms: self.profile.toast_ms,
        });
    }

    fn open_modal(&mut self, key: &str) {
        if !self.modal.open(self.profile.modal(key)) {
            log::debug!("No modal content for key {:?}", key);
        }
    }

    fn on_query_change(&mut self, term: String, effects: &mut Vec<Effect>) {
        let outcome = self.search.on_query_change(&self.content, &term);
        self.query = term;
        match outcome {
            SearchOutcome::Cleared => {}
            SearchOutcome::NoResults => self.notify(NO_RESULTS_MESSAGE, effects),
            SearchOutcome::Found { count, .. } => {
                effects.push(Effect::ScrollIntoView(HighlightMark::dom_id(0)));
                self.notify(self.profile.found_message(count), effects);
            }
        }
    }

    fn start_counters(&mut self, entries: &[IntersectionEntry], effects: &mut Vec<Effect>) {
        let mut done = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Some(counter) = entry.target
                .strip_prefix(COUNTER_ID_PREFIX)
                .and_then(|idx| idx.parse::<usize>().ok()) else {
                continue;
            };
            let Some(state) = self.counters.get_mut(counter) else {
                continue;
            };
            if state.start() {
                effects.push(Effect::AnimateCounter {
                    counter,
                    target: state.target,
                    duration_ms: self.profile.counter_ms,
                });
                done.push(entry.target.clone());
            }
        }
        if !done.is_empty() {
            effects.push(Effect::Unobserve { observer: ObserverKind::Counters, ids: done });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ CANCER, TABAC };
    use crate::scroll::ScrollMetrics;
    use crate::storage::MemoryStore;

    #[test]
    fn test_search_effects() {
        let mut page = PageController::new(&CANCER, Box::new(MemoryStore::new()));
        let effects = page.dispatch(PageEvent::QueryChanged("cellule".to_string()));

        let count = page.search.marks().len();
        assert!(count > 0);
        assert_eq!(effects[0], Effect::ScrollIntoView("search-mark-0".to_string()));
        assert_eq!(page.toast.message, format!("Trouvé: {} occurrence(s)", count));
        assert!(matches!(effects[1], Effect::ScheduleToastExpiry { after_ms: 1600, .. }));
    }

    #[test]
    fn test_short_query_is_silent() {
        let mut page = PageController::new(&TABAC, Box::new(MemoryStore::new()));
        page.dispatch(PageEvent::QueryChanged("tabac".to_string()));
        let effects = page.dispatch(PageEvent::QueryChanged("t".to_string()));

        assert!(effects.is_empty());
        assert!(page.search.marks().is_empty());
    }

    #[test]
    fn test_escape_closes_modal() {
        let mut page = PageController::new(&TABAC, Box::new(MemoryStore::new()));
        page.dispatch(PageEvent::OpenCheatSheet);
        assert_eq!(page.modal.current().map(|m| m.title), Some("Pourquoi c’est dangereux ? (🧯)"));

        page.dispatch(PageEvent::KeyDown("Enter".to_string()));
        assert!(page.modal.is_open());
        page.dispatch(PageEvent::KeyDown("Escape".to_string()));
        assert!(!page.modal.is_open());
    }

    #[test]
    fn test_unknown_modal_key_is_noop() {
        let mut page = PageController::new(&CANCER, Box::new(MemoryStore::new()));
        let effects = page.dispatch(PageEvent::OpenModal("poumon".to_string()));
        assert!(effects.is_empty());
        assert!(!page.modal.is_open());
    }

    #[test]
    fn test_counters_start_once() {
        let mut page = PageController::new(&TABAC, Box::new(MemoryStore::new()));
        let entry = IntersectionEntry::new(PageController::counter_dom_id(0), true);

        let effects = page.dispatch(PageEvent::CountersIntersected(vec![entry.clone()]));
        assert!(matches!(effects[0], Effect::AnimateCounter { counter: 0, duration_ms: 650, .. }));
        assert_eq!(effects[1], Effect::Unobserve {
            observer: ObserverKind::Counters,
            ids: vec!["stat-0".to_string()],
        });

        let effects = page.dispatch(PageEvent::CountersIntersected(vec![entry]));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_idle_events_do_not_change_state() {
        let mut page = PageController::new(&CANCER, Box::new(MemoryStore::new()));
        let top = ScrollMetrics { scroll_top: 0.0, scroll_height: 3000.0, client_height: 800.0 };
        assert!(!page.needs_dispatch(&PageEvent::Scrolled(top)));
        assert!(!page.needs_dispatch(&PageEvent::KeyDown("Escape".to_string())));
        assert!(!page.needs_dispatch(&PageEvent::ToastExpired(7)));
        assert!(page.needs_dispatch(&PageEvent::BackToTop));

        let further = ScrollMetrics { scroll_top: 600.0, ..top };
        assert!(page.needs_dispatch(&PageEvent::Scrolled(further)));
        page.dispatch(PageEvent::OpenCheatSheet);
        assert!(page.needs_dispatch(&PageEvent::KeyDown("Escape".to_string())));
        assert!(!page.needs_dispatch(&PageEvent::KeyDown("a".to_string())));
    }

    #[test]
    fn test_toc_tracks_quiz_section() {
        let mut page = PageController::new(&CANCER, Box::new(MemoryStore::new()));
        assert!(page.toc.sections().iter().any(|s| s == QUIZ_SECTION_ID));
        page.dispatch(PageEvent::SectionsIntersected(vec![IntersectionEntry::new(QUIZ_SECTION_ID, true)]));
        assert!(page.toc.is_active(QUIZ_SECTION_ID));
    }
}
