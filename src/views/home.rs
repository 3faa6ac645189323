use dioxus::prelude::*;

use crate::components::{ use_page, ThemeToggle, Toast };
use crate::content::HOME;
use crate::page::PageEvent;
use crate::routes::Route;

fn route_for(slug: &str) -> Route {
    match slug {
        "cancer" => Route::Cancer,
        "tabac" => Route::Tabac,
        _ => Route::Home,
    }
}

#[component]
pub fn Home() -> Element {
    let handle = use_page(&HOME);
    let root_class = handle.page.read().theme.state().root_class();

    rsx! {
        div { class: "page home {root_class}",
            header { class: "hero",
                div { class: "hero__text",
                    h1 { "{HOME.title}" }
                    p { class: "muted", "{HOME.subtitle}" }
                }
                div { class: "hero__actions", ThemeToggle {} }
            }
            div { class: "grid",
                for card in HOME.projects.iter() {
                    div {
                        key: "{card.id}",
                        id: card.id,
                        class: "card project",
                        onmouseenter: move |_| handle.send(PageEvent::CardHovered(card.hover_toast)),
                        Link { to: route_for(card.slug),
                            h2 { "{card.title}" }
                            p { class: "muted", "{card.text}" }
                        }
                    }
                }
            }
            Toast {}
        }
    }
}
