use dioxus::prelude::*;
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav { id: "navbar",
                div { class: "navbar__links",
                    Link { to: Route::Home, "Accueil" }
                    Link { to: Route::Cancer, "Cancer 🧬" }
                    Link { to: Route::Tabac, "Tabac 🚬" }
                }
            }
            Outlet::<Route> {}
        }
    }
}
