use crate::layout::global_context::AppGlobalContext;
use crate::layout::loading_screen::LoadingScreen;
use crate::layout::{Footer, Header};
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    let (is_loading, set_is_loading) = signal(true);

    view! {
        <ThemeProvider>
            <Show
                when=move || !is_loading.get()
                fallback=move || view! {
                    <LoadingScreen on_complete=Callback::new(move |_| set_is_loading.set(false)) />
                }
            >
                <div class="site">
                    <Header />
                    <main class="site__main">
                        <AppRoutes />
                    </main>
                    <Footer />
                </div>
            </Show>
        </ThemeProvider>
    }
}
