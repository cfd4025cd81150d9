use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::config::APP_CONFIG;
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class=move || {
            if ctx.sidebar_open.get() {
                "sidebar sidebar--open"
            } else {
                "sidebar sidebar--collapsed"
            }
        }>
            <ul class="sidebar__list">
                {Page::all()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <li
                                class=move || {
                                    if ctx.current_page.get() == page {
                                        "sidebar__item sidebar__item--active"
                                    } else {
                                        "sidebar__item"
                                    }
                                }
                                on:click=move |_| ctx.navigate(page)
                            >
                                {icon(page.icon_name())}
                                <Show when=move || ctx.sidebar_open.get()>
                                    <span class="sidebar__label">{page.title()}</span>
                                </Show>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <Show when=move || ctx.sidebar_open.get()>
                <div class="sidebar__footer">
                    <span class="sidebar__tagline">{APP_CONFIG.tagline}</span>
                    <span class="sidebar__version">{format!("v{}", APP_CONFIG.version)}</span>
                </div>
            </Show>
        </nav>
    }
}
