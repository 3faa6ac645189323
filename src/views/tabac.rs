use dioxus::prelude::*;

use super::AwarenessPage;
use crate::content::TABAC;

#[component]
pub fn Tabac() -> Element {
    rsx! {
        AwarenessPage { profile: &TABAC }
    }
}
