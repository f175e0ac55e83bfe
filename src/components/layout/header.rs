//! Page heading shown in the top bar.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::{Heading, heading};

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Title block for the active route.
///
/// Detail pages show their entity once it is loaded; until then (and for
/// unknown states) the heading reads "Feed".
#[component]
pub fn PageHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let current = Memo::new(move |_| ctx.state.with(heading));

    move || match current.get() {
        Heading::Title(title) => view! {
            <div class=css::heading>
                <h1 class=css::headingTitle>{title}</h1>
            </div>
        }
        .into_any(),
        Heading::Company { name, logo_url } => {
            let logo = logo_url.map(|src| view! { <HeadingLogo src=src alt=name.clone() /> });
            view! {
                <div class=css::heading>
                    {logo}
                    <h1 class=css::headingTitle>{name}</h1>
                </div>
            }
            .into_any()
        }
        Heading::Product {
            name,
            company_name,
            company_path,
        } => view! {
            <div class=css::heading>
                <h1 class=css::headingTitle>{name}</h1>
                <a href=company_path class=css::headingByline data-route="company">
                    {format!("By {}", company_name)}
                </a>
            </div>
        }
        .into_any(),
    }
}

/// Company logo that hides itself when the image fails to load.
#[component]
fn HeadingLogo(src: String, alt: String) -> impl IntoView {
    let failed = RwSignal::new(false);

    view! {
        <Show when=move || !failed.get()>
            <img
                class=css::headingLogo
                src=src.clone()
                alt=alt.clone()
                on:error=move |_| failed.set(true)
            />
        </Show>
    }
}
