use dioxus::prelude::*;
use crate::views::{ Cancer, Home, Navbar, Tabac };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
    #[route("/cancer")]
    Cancer,
    #[route("/tabac")]
    Tabac,
}
