use std::collections::BTreeMap;

use contracts::forms::{initial_values, validate_required, FieldSchema, FormValues};
use contracts::system::auth::SignupRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::form_field::FormField;
use crate::shared::config::APP_CONFIG;
use crate::shared::icons::icon;
use crate::system::auth::{api, context::do_login, context::use_auth};

#[derive(Clone, Copy, PartialEq)]
enum Banner {
    Success,
    Error,
    Info,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let (is_login, set_is_login) = signal(true);
    let banner = RwSignal::new(Option::<(Banner, String)>::None);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">{APP_CONFIG.name}</h1>
                <p class="auth-card__tagline">{APP_CONFIG.tagline}</p>

                <div class="auth-card__tabs">
                    <button
                        class=move || {
                            if is_login.get() {
                                "auth-card__tab auth-card__tab--active"
                            } else {
                                "auth-card__tab"
                            }
                        }
                        on:click=move |_| {
                            set_is_login.set(true);
                            banner.set(None);
                        }
                    >
                        "Login"
                    </button>
                    <button
                        class=move || {
                            if is_login.get() {
                                "auth-card__tab"
                            } else {
                                "auth-card__tab auth-card__tab--active"
                            }
                        }
                        on:click=move |_| {
                            set_is_login.set(false);
                            banner.set(None);
                        }
                    >
                        "Sign up"
                    </button>
                </div>

                {move || {
                    banner
                        .get()
                        .map(|(kind, message)| {
                            let class = match kind {
                                Banner::Success => "alert alert--success",
                                Banner::Error => "alert alert--error",
                                Banner::Info => "alert alert--info",
                            };
                            view! { <div class=class>{message}</div> }
                        })
                }}

                <Show
                    when=move || is_login.get()
                    fallback=move || view! { <SignupForm banner=banner on_done=move || set_is_login.set(true) /> }
                >
                    <LoginForm banner=banner />
                </Show>

                <div class="auth-card__divider">"or continue with"</div>
                <div class="auth-card__social">
                    <SocialLoginButton provider="google" label="Google" icon_name="globe" banner=banner />
                    <SocialLoginButton provider="github" label="GitHub" icon_name="github" banner=banner />
                </div>
            </div>
        </div>
    }
}

#[component]
fn LoginForm(banner: RwSignal<Option<(Banner, String)>>) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let errors = RwSignal::new(BTreeMap::<&'static str, String>::new());

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        banner.set(None);

        let mut found = BTreeMap::new();
        if username.get_untracked().trim().is_empty() {
            found.insert("username", "Username is required".to_string());
        }
        if password.get_untracked().trim().is_empty() {
            found.insert("password", "Password is required".to_string());
        }
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(BTreeMap::new());

        // Demo login: any validated credentials pass.
        do_login(set_auth_state, username.get_untracked().trim());
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <div class="form-field">
                <label class="form-field__label" for="username">"Username"</label>
                <input
                    type="text"
                    id="username"
                    class="form-field__input"
                    placeholder="Your username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                {move || {
                    errors
                        .get()
                        .get("username")
                        .cloned()
                        .map(|e| view! { <span class="form-field__error">{e}</span> })
                }}
            </div>

            <div class="form-field">
                <label class="form-field__label" for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    class="form-field__input"
                    placeholder="Your password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || {
                    errors
                        .get()
                        .get("password")
                        .cloned()
                        .map(|e| view! { <span class="form-field__error">{e}</span> })
                }}
            </div>

            <button type="submit" class="btn-primary auth-form__submit">
                "Login"
            </button>
        </form>
    }
}

#[component]
fn SignupForm<F>(banner: RwSignal<Option<(Banner, String)>>, on_done: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let fields = RwSignal::new(Vec::<FieldSchema>::new());
    let values = RwSignal::new(FormValues::new());
    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let (loading, set_loading) = signal(false);

    // The schema comes from a placeholder endpoint; the built-in schema is
    // the fallback, mirroring how the rest of the demo degrades offline.
    Effect::new(move |_| {
        if !fields.get_untracked().is_empty() {
            return;
        }
        spawn_local(async move {
            let loaded = match api::fetch_signup_fields().await {
                Ok(loaded) if !loaded.is_empty() => loaded,
                Ok(_) | Err(_) => api::mock_signup_fields(),
            };
            values.set(initial_values(&loaded));
            fields.set(loaded);
        });
    });

    let handle_change = Callback::new(move |(name, value): (String, String)| {
        values.update(|v| {
            v.insert(name.clone(), value);
        });
        errors.update(|e| {
            e.remove(&name);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        banner.set(None);

        let schema = fields.get_untracked();
        let current = values.get_untracked();
        let found = validate_required(&schema, &current);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(BTreeMap::new());
        set_loading.set(true);

        let request = SignupRequest {
            fields: current.into_iter().collect(),
        };
        spawn_local(async move {
            match api::signup(&request).await {
                Ok(()) => {
                    banner.set(Some((Banner::Success, "Signup successful".to_string())));
                    on_done();
                }
                Err(e) => {
                    log::warn!("signup failed: {}", e);
                    banner.set(Some((
                        Banner::Error,
                        "Signup failed. Please try again.".to_string(),
                    )));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <div class="auth-form__grid">
                {move || {
                    fields
                        .get()
                        .into_iter()
                        .map(|field| {
                            let name = field.name.clone();
                            let name_for_error = field.name.clone();
                            let field_value = Signal::derive(move || {
                                values.get().get(&name).cloned().unwrap_or_default()
                            });
                            let field_error = Signal::derive(move || {
                                errors.get().get(&name_for_error).cloned()
                            });
                            view! {
                                <FormField
                                    field=field
                                    value=field_value
                                    on_change=handle_change
                                    error=field_error
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <button type="submit" class="btn-primary auth-form__submit" disabled=move || loading.get()>
                {move || if loading.get() { "Signing up..." } else { "Sign up" }}
            </button>
        </form>
    }
}

#[component]
fn SocialLoginButton(
    provider: &'static str,
    label: &'static str,
    icon_name: &'static str,
    banner: RwSignal<Option<(Banner, String)>>,
) -> impl IntoView {
    let on_click = move |_| {
        if let Err(e) = api::start_social_login(provider) {
            log::warn!("social login failed: {}", e);
            banner.set(Some((
                Banner::Info,
                format!("Social login for {} is not configured on this demo.", label),
            )));
        }
    };

    view! {
        <Button appearance=ButtonAppearance::Secondary on_click=on_click>
            {icon(icon_name)}
            {format!(" {}", label)}
        </Button>
    }
}
