use dioxus::prelude::*;

use crate::client::{components::ThemeToggle, router::Route};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "btn btn-ghost text-xl",
                    "devpad"
                }
            }
            div {
                class: "navbar-end",
                ThemeToggle {}
            }
        }

        Outlet::<Route> {}
    }
}
