//! Post cards.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::Post;
use crate::utils::format::{format_post_date, tag_key};

stylance::import_crate_style!(css, "src/components/feed/feed.module.css");

/// List of post cards, or "No posts found." when empty.
///
/// Detail pages hide the company and/or product links that would point
/// back to the page itself.
#[component]
pub fn PostList(
    #[prop(into)] posts: Signal<Vec<Post>>,
    #[prop(optional)] hide_company: bool,
    #[prop(optional)] hide_product: bool,
) -> impl IntoView {
    view! {
        <Show
            when=move || posts.with(|p| !p.is_empty())
            fallback=|| view! { <div class=css::empty>"No posts found."</div> }
        >
            <div class=css::grid>
                <For
                    each=move || posts.get()
                    key=|post| post.id
                    children=move |post| {
                        view! {
                            <PostCard post=post hide_company=hide_company hide_product=hide_product />
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
pub fn PostCard(
    post: Post,
    #[prop(optional)] hide_company: bool,
    #[prop(optional)] hide_product: bool,
) -> impl IntoView {
    let date = format_post_date(&post.date);
    let category = post.category.label();
    let post_type = post.post_type.label();

    let company_link = (!hide_company).then(|| {
        let href = post.company.path();
        let name = post.company.name.clone();
        view! { <a href=href class=css::company data-route="company">{name}</a> }
    });
    let product_link = (!hide_product).then(|| {
        let href = post.product.path();
        let name = post.product.name.clone();
        view! { <a href=href class=css::product data-route="product">{name}</a> }
    });

    view! {
        <article class=css::card>
            <div class=css::cardHeader>
                <h2 class=css::cardTitle>
                    <a href=post.post_url target="_blank" rel="noopener noreferrer">
                        {post.title}
                        <span class=css::external aria-hidden="true">
                            <Icon icon=ic::EXTERNAL_LINK />
                        </span>
                    </a>
                </h2>
                <div class=css::meta>{company_link}{product_link}</div>
            </div>
            <p class=css::summary>{post.summary.unwrap_or_default()}</p>
            <div class=css::footer>
                <div class=css::tags>
                    <span class=css::tag data-kind="category" data-tag=tag_key(category)>
                        {category}
                    </span>
                    <span class=css::tag data-kind="type" data-tag=tag_key(post_type)>
                        {post_type}
                    </span>
                </div>
                <time class=css::date datetime=post.date>{date}</time>
            </div>
        </article>
    }
}
