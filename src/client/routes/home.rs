use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::{auth::SignInButton, CodeEditor, Page};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "devpad" }
        Meta {
            name: "description",
            content: "A code scratchpad with GitHub sign-in."
        }
        Page { class: "flex flex-col gap-4 pb-20",
            div {
                SignInButton {}
            }
            CodeEditor {}
        }
    )
}
