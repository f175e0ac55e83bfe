//! Application shell.
//!
//! ## Layout
//!
//! - **Desktop (> 768px)**: Fixed navigation sidebar on the left, page on the right
//! - **Mobile (<= 768px)**: Sidebar slides over the page, toggled from the top bar

mod banner;
mod header;

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::feed::FilterBar;
use crate::components::icons as ic;
use crate::components::nav::NavTree;
use crate::components::pages::PageContent;
use crate::config::{APP_NAME, MOBILE_MEDIA_QUERY};

pub use banner::StatusBanner;
pub use header::PageHeader;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Layout() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_mobile = use_media_query(MOBILE_MEDIA_QUERY);

    let sidebar_class = move || {
        if is_mobile.get() && !ctx.sidebar_open.get() {
            format!("{} {}", css::sidebar, css::sidebarHidden)
        } else {
            css::sidebar.to_string()
        }
    };
    let close_sidebar = move |_: leptos::ev::MouseEvent| ctx.sidebar_open.set(false);
    let toggle_sidebar = move |_: leptos::ev::MouseEvent| ctx.sidebar_open.update(|open| *open = !*open);

    view! {
        <div class=css::layout>
            <aside class=sidebar_class>
                <div class=css::brand>
                    <a href="/" data-route="home" class=css::brandName>{APP_NAME}</a>
                    <Show when=move || is_mobile.get()>
                        <button
                            class=css::iconButton
                            on:click=close_sidebar
                            aria-label="Close navigation"
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </Show>
                </div>
                <NavTree />
            </aside>

            // Backdrop behind the sliding sidebar (mobile only)
            <Show when=move || is_mobile.get() && ctx.sidebar_open.get()>
                <div class=css::backdrop on:click=close_sidebar></div>
            </Show>

            <main class=css::main>
                <header class=css::topbar>
                    <Show when=move || is_mobile.get()>
                        <button
                            class=css::iconButton
                            on:click=toggle_sidebar
                            aria-label="Open navigation"
                        >
                            <Icon icon=ic::MENU />
                        </button>
                    </Show>
                    <PageHeader />
                </header>

                <StatusBanner />

                <div class=css::content>
                    <FilterBar />
                    <PageContent />
                </div>
            </main>
        </div>
    }
}
