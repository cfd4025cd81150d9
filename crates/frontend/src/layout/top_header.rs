use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_context;
use crate::shared::config::APP_CONFIG;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelect;
use crate::system::auth::context::{do_logout, use_auth};

struct Notification {
    title: &'static str,
    detail: &'static str,
}

/// Sample notifications shown in the bell dropdown. A real deployment
/// would stream these from the server.
const NOTIFICATIONS: [Notification; 3] = [
    Notification {
        title: "New course published",
        detail: "Advanced JavaScript is now available",
    },
    Notification {
        title: "Assignment due",
        detail: "DOM exercises close on Friday",
    },
    Notification {
        title: "Profile reminder",
        detail: "Add a mobile number to enable alerts",
    },
];

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, set_auth_state) = use_auth();

    let username = Signal::derive(move || {
        auth_state
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    });

    let on_logout = move |_| do_logout(set_auth_state);

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    class="top-header__burger"
                    title="Toggle navigation"
                    on:click=move |_| ctx.sidebar_open.update(|open| *open = !*open)
                >
                    {icon("menu")}
                </button>
                <span class="top-header__brand">{APP_CONFIG.name}</span>
                <span class="top-header__page">
                    {move || ctx.current_page.get().title()}
                </span>
            </div>

            <div class="top-header__right">
                <div class="notifications">
                    <button
                        class="top-header__icon-btn"
                        title="Notifications"
                        on:click=move |_| ctx.notifications_open.update(|open| *open = !*open)
                    >
                        {icon("bell")}
                        <span class="notifications__badge">{NOTIFICATIONS.len()}</span>
                    </button>
                    <Show when=move || ctx.notifications_open.get()>
                        <div class="notifications__menu">
                            {NOTIFICATIONS
                                .iter()
                                .map(|n| {
                                    view! {
                                        <div class="notifications__item">
                                            <div class="notifications__title">{n.title}</div>
                                            <div class="notifications__detail">{n.detail}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>

                <ThemeSelect />

                <span class="top-header__user">
                    {icon("user")}
                    {move || username.get()}
                </span>
                <Button appearance=ButtonAppearance::Subtle on_click=on_logout>
                    {icon("logout")}
                    " Sign out"
                </Button>
            </div>
        </header>
    }
}
