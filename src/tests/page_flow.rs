use super::common;
use crate::content::{ CANCER, HOME, TABAC };
use crate::page::{ Effect, ObserverKind, PageController, PageEvent };
use crate::scroll::{ IntersectionEntry, ScrollMetrics };

#[test]
fn test_toc_has_one_active_link() {
    let mut page = common::page(&CANCER);
    let sections = page.toc.sections().to_vec();
    assert!(sections.len() >= 2);

    for current in &sections[..2] {
        let entries = sections[..2]
            .iter()
            .map(|s| IntersectionEntry::new(s.clone(), s == current))
            .collect();
        page.dispatch(PageEvent::SectionsIntersected(entries));

        let active: Vec<_> = sections.iter().filter(|s| page.toc.is_active(s)).collect();
        assert_eq!(active, vec![current]);
    }
}

#[test]
fn test_scroll_updates_telemetry() {
    let mut page = common::page(&TABAC);
    page.dispatch(PageEvent::Scrolled(ScrollMetrics {
        scroll_top: 600.0,
        scroll_height: 2200.0,
        client_height: 1000.0,
    }));
    assert_eq!(page.telemetry.bar_width(), "50%");
    assert!(page.telemetry.back_to_top);

    let effects = page.dispatch(PageEvent::BackToTop);
    assert_eq!(effects, vec![Effect::ScrollToTop]);
}

#[test]
fn test_toasts_supersede_each_other() {
    let mut page = common::page(&HOME);
    let first = page.dispatch(PageEvent::CardHovered(HOME.projects[0].hover_toast));
    let second = page.dispatch(PageEvent::CardHovered(HOME.projects[1].hover_toast));

    let generation = |effects: &[Effect]| match effects {
        [Effect::ScheduleToastExpiry { generation, after_ms: 1400 }] => *generation,
        other => panic!("unexpected effects {:?}", other),
    };
    let (first, second) = (generation(&first), generation(&second));

    page.dispatch(PageEvent::ToastExpired(first));
    assert!(page.toast.visible);
    assert_eq!(page.toast.message, "Ouvrir le projet : Tabac 🚬");

    page.dispatch(PageEvent::ToastExpired(second));
    assert!(!page.toast.visible);
}

#[test]
fn test_no_results_notifies() {
    let mut page = common::page(&TABAC);
    let effects = page.dispatch(PageEvent::QueryChanged("zzzz".to_string()));
    assert_eq!(page.toast.message, "Aucun résultat");
    assert!(matches!(effects.as_slice(), [Effect::ScheduleToastExpiry { .. }]));
}

#[test]
fn test_search_skips_code_runs() {
    let mut page = common::page(&TABAC);
    page.dispatch(PageEvent::QueryChanged("C10H14N2".to_string()));
    assert!(page.search.marks().is_empty());
}

#[test]
fn test_reveal_unobserves_once() {
    let mut page = common::page(&CANCER);
    let entry = IntersectionEntry::new("adn", true);
    let effects = page.dispatch(PageEvent::RevealIntersected(vec![entry.clone()]));
    assert_eq!(effects, vec![Effect::Unobserve {
        observer: ObserverKind::Reveal,
        ids: vec!["adn".to_string()],
    }]);
    assert!(page.reveal.is_revealed("adn"));

    assert!(page.dispatch(PageEvent::RevealIntersected(vec![entry])).is_empty());
}

#[test]
fn test_counter_ticks_are_stored() {
    let mut page = common::page(&CANCER);
    page.dispatch(PageEvent::CounterTick { counter: 0, value: 120 });
    assert_eq!(page.counters[0].shown, 120);
    page.dispatch(PageEvent::CounterTick { counter: 99, value: 1 });
}

fn apply_unobserves(page: &PageController, effects: &[Effect], targets: &mut crate::page::BindingTargets) {
    for effect in effects {
        if let Effect::Unobserve { observer, ids } = effect {
            assert_ne!(*observer, ObserverKind::Spy);
            targets.unobserve(*observer, ids);
        }
    }
    assert_eq!(targets.spy, page.toc.sections());
}

#[test]
fn test_revealed_section_stays_spied() {
    let mut page = common::page(&CANCER);
    let mut targets = page.binding_targets();
    assert!(targets.spy.contains(&"adn".to_string()));
    assert!(targets.reveal.contains(&"adn".to_string()));

    let effects = page.dispatch(PageEvent::RevealIntersected(vec![IntersectionEntry::new("adn", true)]));
    apply_unobserves(&page, &effects, &mut targets);
    assert!(!targets.reveal.contains(&"adn".to_string()));
    assert!(targets.ids(ObserverKind::Spy).contains(&"adn".to_string()));

    page.dispatch(PageEvent::SectionsIntersected(vec![IntersectionEntry::new("adn", true)]));
    assert!(page.toc.is_active("adn"));
}

#[test]
fn test_started_counter_leaves_other_observers() {
    let mut page = common::page(&TABAC);
    let mut targets = page.binding_targets();
    let before = targets.clone();

    let counter = PageController::counter_dom_id(1);
    let effects = page.dispatch(PageEvent::CountersIntersected(vec![IntersectionEntry::new(counter.clone(), true)]));
    apply_unobserves(&page, &effects, &mut targets);

    assert!(!targets.counters.contains(&counter));
    assert_eq!(targets.counters.len(), before.counters.len() - 1);
    assert_eq!(targets.reveal, before.reveal);
    assert_eq!(targets.spy, before.spy);
}
