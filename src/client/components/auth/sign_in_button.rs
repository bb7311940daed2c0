use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGithub;
use dioxus_free_icons::Icon;

use crate::model::action::DEFAULT_SIGN_IN_CALLBACK_URL;

/// Starts signing in with GitHub.
///
/// Submits the sign-in action as a form so the server's redirect to GitHub is followed by
/// the browser. After signing in the browser returns to `callback_url`.
#[component]
pub fn SignInButton(
    #[props(into, default = DEFAULT_SIGN_IN_CALLBACK_URL.to_string())] callback_url: String,
) -> Element {
    let mut submitting = use_signal(|| false);

    rsx!(
        form {
            method: "post",
            action: "/api/actions/sign-in",
            onsubmit: move |_| submitting.set(true),
            input { r#type: "hidden", name: "callbackURL", value: "{callback_url}" }
            button {
                r#type: "submit",
                class: "btn btn-primary flex gap-2",
                disabled: submitting(),
                Icon { width: 20, height: 20, icon: FaGithub }
                "Sign In with GitHub"
            }
        }
    )
}
