use leptos::prelude::*;

use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;

/// Code block with a title bar and a copy-to-clipboard button. The button
/// label flips to a check mark briefly after a successful copy.
#[component]
pub fn CodeDisplay(
    #[prop(into)] title: String,
    #[prop(into)] code: String,
    #[prop(optional, into)] language: String,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let code_for_copy = code.clone();

    let handle_copy = move |_| {
        copy_to_clipboard_with_callback(&code_for_copy, move || {
            set_copied.set(true);
        });
    };

    // Reset the check mark on the next render of the copied state.
    Effect::new(move |_| {
        if copied.get() {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(1500).await;
                set_copied.set(false);
            });
        }
    });

    let language = if language.is_empty() {
        "javascript".to_string()
    } else {
        language
    };

    view! {
        <div class="code-display">
            <div class="code-display__header">
                <span class="code-display__title">{title}</span>
                <span class="code-display__language">{language}</span>
                <button class="code-display__copy" title="Copy code" on:click=handle_copy>
                    {move || if copied.get() { icon("check") } else { icon("copy") }}
                </button>
            </div>
            <pre class="code-display__body">
                <code>{code}</code>
            </pre>
        </div>
    }
}
