use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaSun};
use dioxus_free_icons::Icon;

use crate::client::store::theme::{use_theme, Theme};

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    rsx!(
        button {
            class: "btn btn-ghost btn-circle",
            aria_label: "Toggle theme",
            onclick: move |_| {
                let next = theme().toggled();
                theme.set(next);
            },
            if theme() == Theme::Dark {
                Icon { width: 20, height: 20, icon: FaSun }
            } else {
                Icon { width: 20, height: 20, icon: FaMoon }
            }
        }
    )
}
