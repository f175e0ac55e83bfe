//! Feed filter controls.
//!
//! Any change rereads all four controls into a [`FilterSelection`] and
//! applies it. The selected options follow the stored selection, so
//! clearing resets every control.

use leptos::html::Select;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{Category, FilterSelection, PostType};

stylance::import_crate_style!(css, "src/components/feed/feed.module.css");

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let company_ref = NodeRef::<Select>::new();
    let product_ref = NodeRef::<Select>::new();
    let category_ref = NodeRef::<Select>::new();
    let post_type_ref = NodeRef::<Select>::new();

    let visible = Memo::new(move |_| ctx.state.with(|s| s.shows_filters()));
    let filters = Memo::new(move |_| ctx.state.with(|s| s.filters.clone()));
    let companies = Memo::new(move |_| ctx.state.with(|s| s.companies.clone()));
    let products = Memo::new(move |_| ctx.state.with(|s| s.products.clone()));

    let read_controls = move || {
        let value = |node: NodeRef<Select>| node.get_untracked().map(|el| el.value()).unwrap_or_default();
        FilterSelection::from_controls(
            &value(company_ref),
            &value(product_ref),
            &value(category_ref),
            &value(post_type_ref),
        )
    };
    let on_change = move |_: leptos::ev::Event| ctx.apply_filters(read_controls());
    let on_clear = move |_: leptos::ev::MouseEvent| ctx.clear_filters();

    let bar_class = move || {
        if visible.get() {
            css::filters.to_string()
        } else {
            format!("{} {}", css::filters, css::hidden)
        }
    };

    view! {
        <section class=bar_class aria-label="Filters">
            <select node_ref=company_ref class=css::select aria-label="Company" on:change=on_change>
                <option value="" prop:selected=move || filters.with(|f| f.company_id.is_none())>
                    "All Companies"
                </option>
                <For
                    each=move || companies.get()
                    key=|company| company.id
                    children=move |company| {
                        let id = company.id;
                        view! {
                            <option
                                value=id.to_string()
                                prop:selected=move || filters.with(|f| f.company_id == Some(id))
                            >
                                {company.name}
                            </option>
                        }
                    }
                />
            </select>

            <select node_ref=product_ref class=css::select aria-label="Product" on:change=on_change>
                <option value="" prop:selected=move || filters.with(|f| f.product_id.is_none())>
                    "All Products"
                </option>
                <For
                    each=move || products.get()
                    key=|product| product.id
                    children=move |product| {
                        let id = product.id;
                        view! {
                            <option
                                value=id.to_string()
                                prop:selected=move || filters.with(|f| f.product_id == Some(id))
                            >
                                {product.name}
                            </option>
                        }
                    }
                />
            </select>

            <select node_ref=category_ref class=css::select aria-label="Category" on:change=on_change>
                <option value="" prop:selected=move || filters.with(|f| f.category.is_none())>
                    "All Categories"
                </option>
                {Category::ALL
                    .iter()
                    .copied()
                    .map(|category| view! {
                        <option
                            value=category.label()
                            prop:selected=move || filters.with(|f| f.category == Some(category))
                        >
                            {category.label()}
                        </option>
                    })
                    .collect_view()}
            </select>

            <select node_ref=post_type_ref class=css::select aria-label="Post type" on:change=on_change>
                <option value="" prop:selected=move || filters.with(|f| f.post_type.is_none())>
                    "All Types"
                </option>
                {PostType::ALL
                    .iter()
                    .copied()
                    .map(|post_type| view! {
                        <option
                            value=post_type.label()
                            prop:selected=move || filters.with(|f| f.post_type == Some(post_type))
                        >
                            {post_type.label()}
                        </option>
                    })
                    .collect_view()}
            </select>

            <button class=css::clearButton on:click=on_clear>"Clear Filters"</button>
        </section>
    }
}
