use dioxus::prelude::*;

use crate::components::{
    use_page,
    BackToTop,
    CheatSheetButton,
    ContentRoot,
    Modal,
    Quiz,
    ScrollProgress,
    SearchBox,
    ThemeToggle,
    Toast,
    Toc,
};
use crate::content::PageProfile;

/// Layout shared by every awareness page.
#[component]
pub fn AwarenessPage(profile: &'static PageProfile) -> Element {
    let handle = use_page(profile);
    let root_class = handle.page.read().theme.state().root_class();

    rsx! {
        div { class: "page {root_class}",
            ScrollProgress {}
            header { class: "hero",
                div { class: "hero__text",
                    h1 { "{profile.title}" }
                    p { class: "muted", "{profile.subtitle}" }
                }
                div { class: "hero__actions",
                    SearchBox {}
                    CheatSheetButton {}
                    ThemeToggle {}
                }
            }
            div { class: "layout",
                aside { class: "layout__side", Toc {} }
                div { class: "layout__main",
                    ContentRoot {}
                    Quiz {}
                }
            }
            Modal {}
            BackToTop {}
            Toast {}
        }
    }
}
