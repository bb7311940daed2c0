use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::{auth::SignOutButton, Page};

#[component]
pub fn Dashboard() -> Element {
    rsx!(
        Title { "Dashboard | devpad" }
        Page { class: "flex flex-col items-start gap-4 text-2xl",
            p { "Hello!!" }
            SignOutButton {}
        }
    )
}
