//! Feed components.
//!
//! - [`FilterBar`] - Company, product, category and post type filters
//! - [`PostList`] - Post cards with the empty-state message
//! - [`FeedPage`] - Filtered feed with the "load more" control

mod filters;
mod post_card;

use leptos::prelude::*;

use crate::app::AppContext;

pub use filters::FilterBar;
pub use post_card::{PostCard, PostList};

stylance::import_crate_style!(css, "src/components/feed/feed.module.css");

/// Chronological feed of the accumulated pages.
#[component]
pub fn FeedPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let posts = Signal::derive(move || ctx.state.with(|s| s.posts.clone()));

    view! {
        <PostList posts=posts />
        <LoadMore />
    }
}

#[component]
fn LoadMore() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let visible = Memo::new(move |_| ctx.state.with(|s| s.shows_load_more()));
    let busy = Memo::new(move |_| ctx.state.with(|s| s.loading));

    view! {
        <Show when=move || visible.get()>
            <div class=css::loadMore>
                <button
                    class=css::button
                    disabled=move || busy.get()
                    on:click=move |_| ctx.load_more()
                >
                    "Load More"
                </button>
            </div>
        </Show>
    }
}
