use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Dashboard, Home, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    /// Guarded on the server by the session cookie middleware
    #[route("/dashboard")]
    Dashboard {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
