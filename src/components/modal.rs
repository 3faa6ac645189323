use dioxus::prelude::*;

use super::runtime::use_page_handle;
use crate::page::PageEvent;

#[component]
pub fn Modal() -> Element {
    let handle = use_page_handle();
    let page = handle.page.read();
    let modal = page.modal;
    let (title, body) = modal
        .current()
        .map(|entry| (entry.title, entry.body))
        .unwrap_or_default();

    rsx! {
        div {
            id: "modal",
            class: if modal.is_open() { "modal open" } else { "modal" },
            "aria-hidden": modal.aria_hidden(),
            div {
                class: "modal__backdrop",
                "data-close": "true",
                onclick: move |_| handle.send(PageEvent::CloseModal),
            }
            div { class: "modal__dialog", role: "dialog", "aria-modal": "true",
                button {
                    class: "modal__close",
                    "data-close": "true",
                    "aria-label": "Fermer",
                    onclick: move |_| handle.send(PageEvent::CloseModal),
                    "✕"
                }
                h3 { id: "modalTitle", "{title}" }
                div { id: "modalBody", dangerous_inner_html: body }
            }
        }
    }
}

/// Opens the page's summary diagram, when it has one.
#[component]
pub fn CheatSheetButton() -> Element {
    let handle = use_page_handle();
    if handle.page.read().profile.cheat_sheet.is_none() {
        return rsx! {};
    }

    rsx! {
        button {
            id: "openCheat",
            class: "btn",
            onclick: move |_| handle.send(PageEvent::OpenCheatSheet),
            "📌 Schéma"
        }
    }
}
