use dioxus::prelude::*;

use super::AwarenessPage;
use crate::content::CANCER;

#[component]
pub fn Cancer() -> Element {
    rsx! {
        AwarenessPage { profile: &CANCER }
    }
}
