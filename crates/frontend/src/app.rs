use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProviderCtx;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Navigation/shell state is shared through context with the whole app.
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProviderCtx>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
        </ThemeProviderCtx>
    }
}
