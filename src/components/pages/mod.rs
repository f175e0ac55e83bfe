//! Main pane content for each [`Page`].

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::feed::{FeedPage, PostList};
use crate::components::icons as ic;
use crate::core::Page;
use crate::models::{Company, Post, Product, ProductGroup};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Render the displayed page.
///
/// The page only changes when a load commits, so a failed navigation keeps
/// the previous content on screen under the error banner.
#[component]
pub fn PageContent() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let page = Memo::new(move |_| ctx.state.with(|s| s.page.clone()));

    move || match page.get() {
        Page::Blank => ().into_any(),
        Page::Feed => view! { <FeedPage /> }.into_any(),
        Page::Companies(companies) => view! { <CompaniesPage companies=companies /> }.into_any(),
        Page::Company {
            company,
            products,
            posts,
        } => view! { <CompanyPage company=company products=products posts=posts /> }.into_any(),
        Page::Products(groups) => view! { <ProductsPage groups=groups /> }.into_any(),
        Page::Product { posts, .. } => view! { <ProductPage posts=posts /> }.into_any(),
    }
}

#[component]
fn CompaniesPage(companies: Vec<Company>) -> impl IntoView {
    view! {
        <div class=css::pageHeader>
            <h1 class=css::pageTitle>"All Companies"</h1>
        </div>
        <div class=css::list>
            {companies
                .into_iter()
                .map(|company| {
                    let href = company.path();
                    view! {
                        <div class=css::card>
                            <h2 class=css::cardTitle>
                                <a href=href data-route="company">{company.name}</a>
                            </h2>
                            {company
                                .summary
                                .map(|summary| view! { <p class=css::cardText>{summary}</p> })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CompanyPage(company: Company, products: Vec<Product>, posts: Vec<Post>) -> impl IntoView {
    let logo = company.logo_url.clone().map(|src| {
        let alt = format!("{} logo", company.name);
        view! { <img class=css::companyLogo src=src alt=alt /> }
    });

    view! {
        <div class=css::pageHeader>
            {logo}
            {company.summary.map(|summary| view! { <p class=css::pageSummary>{summary}</p> })}
            <div class=css::chips>
                {products
                    .into_iter()
                    .map(|product| {
                        let href = product.path();
                        view! {
                            <a href=href class=css::chip data-route="product">
                                <Icon icon=ic::PRODUCT />
                                {product.name}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
        <PostList posts=Signal::stored(posts) hide_company=true />
    }
}

#[component]
fn ProductsPage(groups: Vec<ProductGroup>) -> impl IntoView {
    view! {
        <div class=css::pageHeader>
            <h1 class=css::pageTitle>"All Products"</h1>
        </div>
        <div class=css::list>
            {groups
                .into_iter()
                .map(|group| view! {
                    <section class=css::section>
                        <h2 class=css::sectionTitle>{group.company.name}</h2>
                        <div class=css::productGrid>
                            {group
                                .products
                                .into_iter()
                                .map(|product| {
                                    let href = product.path();
                                    view! {
                                        <div class=css::card>
                                            <h3 class=css::cardTitle>
                                                <a href=href data-route="product">{product.name}</a>
                                            </h3>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductPage(posts: Vec<Post>) -> impl IntoView {
    view! { <PostList posts=Signal::stored(posts) hide_company=true hide_product=true /> }
}
