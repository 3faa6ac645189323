use dioxus::prelude::*;

use super::runtime::use_page_handle;
use crate::page::PageEvent;

#[component]
pub fn ThemeToggle() -> Element {
    let handle = use_page_handle();
    let label = handle.page.read().theme.state().label();

    rsx! {
        button {
            id: "toggleTheme",
            class: "btn btn--ghost",
            onclick: move |_| handle.send(PageEvent::ToggleTheme),
            "{label}"
        }
    }
}

#[component]
pub fn ScrollProgress() -> Element {
    let handle = use_page_handle();
    let width = handle.page.read().telemetry.bar_width();

    rsx! {
        div { class: "progress",
            div { id: "scrollBar", class: "progress__bar", style: "width: {width}" }
        }
    }
}

#[component]
pub fn BackToTop() -> Element {
    let handle = use_page_handle();
    let shown = handle.page.read().telemetry.back_to_top;

    rsx! {
        button {
            id: "toTop",
            class: if shown { "to-top show" } else { "to-top" },
            "aria-label": "Revenir en haut",
            onclick: move |_| handle.send(PageEvent::BackToTop),
            "↑"
        }
    }
}

#[component]
pub fn Toast() -> Element {
    let handle = use_page_handle();
    let page = handle.page.read();
    let toast = &page.toast;

    rsx! {
        div {
            id: "toast",
            class: if toast.visible { "toast show" } else { "toast" },
            role: "status",
            "{toast.message}"
        }
    }
}

#[component]
pub fn SearchBox() -> Element {
    let handle = use_page_handle();
    let query = handle.page.read().query.clone();

    rsx! {
        input {
            id: "searchInput",
            class: "search",
            r#type: "search",
            placeholder: "Rechercher dans la page…",
            value: "{query}",
            oninput: move |evt: FormEvent| handle.send(PageEvent::QueryChanged(evt.value())),
        }
    }
}

#[component]
pub fn Toc() -> Element {
    let handle = use_page_handle();
    let page = handle.page.read();
    let links = page.profile.toc_links();

    rsx! {
        nav { id: "toc", class: "toc",
            for (section, label) in links {
                a {
                    key: "{section}",
                    href: "#{section}",
                    "data-section": "{section}",
                    class: if page.toc.is_active(section) { "active" } else { "" },
                    "{label}"
                }
            }
        }
    }
}
