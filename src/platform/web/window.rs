use web_sys::{ ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions };

use crate::scroll::ScrollMetrics;

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let scroll_top = window
        .scroll_y()
        .ok()
        .filter(|y| *y > 0.0)
        .unwrap_or_else(|| f64::from(root.scroll_top()));
    Some(ScrollMetrics {
        scroll_top,
        scroll_height: f64::from(root.scroll_height()),
        client_height: f64::from(root.client_height()),
    })
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scrolls the element so it sits in the vertical middle.
pub fn scroll_into_view(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("Nothing to scroll to: #{} not found", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
