use leptos::prelude::*;

use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::auth::AuthPage;

/// Auth gate: anything behind the shell requires a token; everyone else
/// lands on the combined login/signup page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <AuthPage /> }
        >
            <Shell />
        </Show>
    }
}
