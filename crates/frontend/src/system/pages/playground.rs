use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

use crate::shared::icons::icon;

/// The three playground panes. Panes can be rearranged by dragging a pane
/// header onto another pane; the two swap slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Widget {
    Questions,
    Editor,
    Output,
}

impl Widget {
    fn label(&self) -> &'static str {
        match self {
            Widget::Questions => "Questions",
            Widget::Editor => "Editor",
            Widget::Output => "Output",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Widget::Questions => "questions",
            Widget::Editor => "editor",
            Widget::Output => "output",
        }
    }

    fn from_key(key: &str) -> Option<Widget> {
        match key {
            "questions" => Some(Widget::Questions),
            "editor" => Some(Widget::Editor),
            "output" => Some(Widget::Output),
            _ => None,
        }
    }
}

struct Snippet {
    id: u32,
    title: &'static str,
    code: &'static str,
}

const SNIPPETS: [Snippet; 4] = [
    Snippet {
        id: 1,
        title: "Sum two numbers",
        code: "function sum(a, b) { return a + b; }\nsum(2, 3);",
    },
    Snippet {
        id: 2,
        title: "Reverse a string",
        code: "const reverse = (s) => s.split(\"\").reverse().join(\"\");\nreverse(\"playground\");",
    },
    Snippet {
        id: 3,
        title: "Filter even numbers",
        code: "[1, 2, 3, 4, 5, 6].filter((n) => n % 2 === 0);",
    },
    Snippet {
        id: 4,
        title: "Object to entries",
        code: "Object.entries({ a: 1, b: 2 }).map(([k, v]) => `${k}=${v}`);",
    },
];

/// Evaluate the editor content and render the result (or the thrown
/// error) as output text.
fn eval_snippet(code: &str) -> String {
    match js_sys::eval(code) {
        Ok(value) => {
            if value.is_undefined() {
                "undefined".to_string()
            } else if let Some(s) = value.as_string() {
                s
            } else {
                js_sys::JSON::stringify(&value)
                    .ok()
                    .and_then(|s| s.as_string())
                    .unwrap_or_else(|| format!("{:?}", value))
            }
        }
        Err(err) => {
            let message = err
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
                .or_else(|| err.as_string())
                .unwrap_or_else(|| "unknown error".to_string());
            format!("Error: {}", message)
        }
    }
}

#[component]
pub fn PlaygroundPage() -> impl IntoView {
    // Slot order: [left, right-top, right-bottom].
    let layout = RwSignal::new([Widget::Questions, Widget::Editor, Widget::Output]);
    let code = RwSignal::new(SNIPPETS[0].code.to_string());
    let output = RwSignal::new(String::new());

    let run_code = move |_| {
        let result = eval_snippet(&code.get_untracked());
        output.set(result);
    };

    let on_drag_start = move |ev: DragEvent, source: Widget| {
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", source.key());
        }
    };

    let on_drop = move |ev: DragEvent, target: Widget| {
        ev.prevent_default();
        let Some(dt) = ev.data_transfer() else {
            return;
        };
        let Ok(raw) = dt.get_data("text/plain") else {
            return;
        };
        let Some(source) = Widget::from_key(&raw) else {
            return;
        };
        if source == target {
            return;
        }
        layout.update(|slots| {
            let from = slots.iter().position(|w| *w == source);
            let to = slots.iter().position(|w| *w == target);
            if let (Some(from), Some(to)) = (from, to) {
                slots.swap(from, to);
            }
        });
    };

    let render_widget = move |widget: Widget| -> AnyView {
        match widget {
            Widget::Questions => view! {
                <div class="playground-pane__body playground-questions">
                    {SNIPPETS
                        .iter()
                        .map(|snippet| {
                            let snippet_code = snippet.code;
                            view! {
                                <div
                                    class="playground-questions__item"
                                    on:click=move |_| code.set(snippet_code.to_string())
                                >
                                    <span class="playground-questions__id">
                                        {format!("#{}", snippet.id)}
                                    </span>
                                    <span class="playground-questions__label">{snippet.title}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any(),
            Widget::Editor => view! {
                <div class="playground-pane__body playground-editor">
                    <textarea
                        class="playground-editor__textarea"
                        spellcheck="false"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn-primary playground-editor__run" on:click=run_code>
                        {icon("play")}
                        " Run"
                    </button>
                </div>
            }
            .into_any(),
            Widget::Output => view! {
                <div class="playground-pane__body playground-output">
                    <pre class="playground-output__pre">
                        {move || {
                            let text = output.get();
                            if text.is_empty() {
                                "Run a snippet to see its result here.".to_string()
                            } else {
                                text
                            }
                        }}
                    </pre>
                </div>
            }
            .into_any(),
        }
    };

    let pane = move |slot: usize| {
        view! {
            <div
                class="playground-pane"
                on:dragover=move |ev: DragEvent| ev.prevent_default()
                on:drop=move |ev: DragEvent| on_drop(ev, layout.get_untracked()[slot])
            >
                <div
                    class="playground-pane__header"
                    draggable="true"
                    on:dragstart=move |ev: DragEvent| on_drag_start(ev, layout.get_untracked()[slot])
                >
                    {move || layout.get()[slot].label()}
                </div>
                {move || render_widget(layout.get()[slot])}
            </div>
        }
    };

    view! {
        <div class="page page--playground">
            <div class="playground-layout">
                <div class="playground-layout__left">{pane(0)}</div>
                <div class="playground-layout__right">
                    <div class="playground-layout__right-top">{pane(1)}</div>
                    <div class="playground-layout__right-bottom">{pane(2)}</div>
                </div>
            </div>
        </div>
    }
}
