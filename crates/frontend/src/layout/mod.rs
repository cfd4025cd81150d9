pub mod global_context;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;

use crate::domain::users::ui::list::UsersListPage;
use crate::layout::global_context::{use_app_context, Page};
use crate::system::pages::about::AboutPage;
use crate::system::pages::courses::CoursesPage;
use crate::system::pages::playground::PlaygroundPage;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |               TopHeader                  |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <top_header::TopHeader />

            <div class="app-body">
                <sidebar::Sidebar />

                <main class="app-main">
                    {move || match ctx.current_page.get() {
                        Page::Dashboard => view! { <UsersListPage /> }.into_any(),
                        Page::Courses => view! { <CoursesPage /> }.into_any(),
                        Page::Playground => view! { <PlaygroundPage /> }.into_any(),
                        Page::About => view! { <AboutPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
