//! Monaco editor embedded in the page.
//!
//! The editor itself is loaded from a CDN through the AMD loader included by
//! [`App`](crate::client::App); this component only mounts it, follows the app theme and
//! mirrors the editor contents into a signal.

use dioxus::prelude::*;

use crate::client::store::theme::use_theme;

/// AMD loader of the Monaco editor
pub const MONACO_LOADER_URL: &str =
    "https://cdn.jsdelivr.net/npm/monaco-editor@0.52.2/min/vs/loader.js";
const MONACO_BASE_URL: &str = "https://cdn.jsdelivr.net/npm/monaco-editor@0.52.2/min/vs";

const EDITOR_ID: &str = "code-editor";
const DEFAULT_LANGUAGE: &str = "javascript";
const DEFAULT_VALUE: &str = "// Write your code here";

/// Waits for the loader, creates the editor and streams its contents back with every edit
const MOUNT_EDITOR_JS: &str = r#"
const mount = () => {
    if (typeof window.require === "undefined" || typeof window.require.config !== "function") {
        setTimeout(mount, 50);
        return;
    }

    window.require.config({ paths: { vs: "__BASE_URL__" } });
    window.require(["vs/editor/editor.main"], () => {
        const container = document.getElementById("__EDITOR_ID__");
        if (!container || container.dataset.mounted) {
            return;
        }
        container.dataset.mounted = "true";

        const editor = monaco.editor.create(container, {
            value: "__DEFAULT_VALUE__",
            language: "__LANGUAGE__",
            theme: "__THEME__",
            minimap: { enabled: false },
            automaticLayout: true,
        });
        window.devpadEditor = editor;
        editor.focus();
        editor.onDidChangeModelContent(() => dioxus.send(editor.getValue()));
    });
};
mount();
"#;

#[component]
pub fn CodeEditor() -> Element {
    let theme = use_theme();
    let mut code = use_signal(|| DEFAULT_VALUE.to_string());

    use_effect(move || {
        let script = MOUNT_EDITOR_JS
            .replace("__BASE_URL__", MONACO_BASE_URL)
            .replace("__EDITOR_ID__", EDITOR_ID)
            .replace("__DEFAULT_VALUE__", DEFAULT_VALUE)
            .replace("__LANGUAGE__", DEFAULT_LANGUAGE)
            .replace("__THEME__", theme.peek().editor_theme());

        let mut editor = document::eval(&script);
        spawn(async move {
            while let Ok(value) = editor.recv::<String>().await {
                code.set(value);
            }
        });
    });

    use_effect(move || {
        let editor_theme = theme().editor_theme();
        document::eval(&format!(
            r#"if (window.monaco) {{ window.monaco.editor.setTheme("{editor_theme}"); }}"#
        ));
    });

    use_drop(|| {
        document::eval("window.devpadEditor?.dispose(); window.devpadEditor = undefined;");
    });

    rsx!(
        div {
            class: "w-full flex flex-col gap-1",
            div {
                id: EDITOR_ID,
                class: "w-full h-[30vh] border border-base-300",
            }
            p { class: "text-xs opacity-60 self-end",
                "{code.read().lines().count()} lines"
            }
        }
    )
}
