//! Site header: brand, page navigation, theme toggle, mobile menu.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::theme::{use_theme, Theme};
use contracts::navigation::Page;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let theme = use_theme();
    let (mobile_open, set_mobile_open) = signal(false);

    let nav_click = move |page: Page| {
        ctx.go_to(page);
        set_mobile_open.set(false);
    };

    let toggle_theme = move |_| theme.toggle();

    view! {
        <header class="header">
            <div class="header__inner">
                <div class="header__brand" on:click=move |_| nav_click(Page::Home)>
                    <div class="header__logo">{icon("graduation-cap")}</div>
                    <div>
                        <h1 class="header__title">"PISES"</h1>
                        <p class="header__subtitle">"Pakistan International School"</p>
                    </div>
                </div>

                <nav class="header__nav">
                    {Page::ALL.into_iter().map(|page| {
                        let is_active = move || ctx.current_page.get() == page;
                        view! {
                            <button
                                class="header__nav-link"
                                class:active=is_active
                                on:click=move |_| nav_click(page)
                            >
                                {page.title()}
                            </button>
                        }
                    }).collect_view()}
                </nav>

                <div class="header__actions">
                    <button
                        class="header__icon-btn"
                        on:click=toggle_theme
                        title="Toggle theme"
                    >
                        {move || if theme.current.get() == Theme::Dark {
                            icon("sun")
                        } else {
                            icon("moon")
                        }}
                    </button>

                    <button
                        class="header__icon-btn header__menu-btn"
                        on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                        title="Menu"
                    >
                        {move || if mobile_open.get() { icon("x") } else { icon("menu") }}
                    </button>
                </div>
            </div>

            <Show when=move || mobile_open.get()>
                <nav class="header__mobile-menu">
                    {Page::ALL.into_iter().map(|page| {
                        let is_active = move || ctx.current_page.get() == page;
                        view! {
                            <button
                                class="header__mobile-link"
                                class:active=is_active
                                on:click=move |_| nav_click(page)
                            >
                                {page.title()}
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </Show>
        </header>
    }
}
