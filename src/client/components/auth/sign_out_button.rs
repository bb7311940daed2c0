use dioxus::prelude::*;

#[component]
pub fn SignOutButton() -> Element {
    let mut submitting = use_signal(|| false);

    rsx!(
        form {
            method: "post",
            action: "/api/actions/sign-out",
            onsubmit: move |_| submitting.set(true),
            button {
                r#type: "submit",
                class: "btn btn-outline",
                disabled: submitting(),
                "Sign Out"
            }
        }
    )
}
