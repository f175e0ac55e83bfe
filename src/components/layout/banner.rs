//! Error banner and loading indicator.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let error = Memo::new(move |_| ctx.state.with(|s| s.error.clone()));
    let loading = Memo::new(move |_| ctx.state.with(|s| s.loading));

    view! {
        {move || error.get().map(|message| view! {
            <div class=css::banner role="alert">
                <span class=css::bannerIcon><Icon icon=ic::ALERT /></span>
                <span>{message}</span>
            </div>
        })}
        <Show when=move || loading.get()>
            <div class=css::loading role="status">"Loading..."</div>
        </Show>
    }
}
