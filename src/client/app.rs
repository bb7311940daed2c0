use dioxus::prelude::*;

use crate::client::{
    components::code_editor::MONACO_LOADER_URL, router::Route, store::theme::use_theme_provider,
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    use_theme_provider();

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Script { src: MONACO_LOADER_URL }

        Router::<Route> {}
    }
}
