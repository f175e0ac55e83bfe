//! Sidebar navigation tree.
//!
//! Rows come from [`nav_rows`] and are keyed on their item and depth, so a
//! row keeps its DOM node and handlers while its label, icon or highlight
//! change. A product can appear twice (under its company and under the
//! Products folder), at different depths.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{NavIcon, NavRow, nav_rows};
use crate::models::{ItemState, NavItem};

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

#[component]
pub fn NavTree() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let rows = Memo::new(move |_| ctx.state.with(nav_rows));

    view! {
        <nav class=css::tree role="tree" aria-label="Navigation">
            <For
                each=move || rows.get()
                key=|row| (row.item, row.depth)
                children=move |row| {
                    view! { <NavEntry item=row.item depth=row.depth rows=rows /> }
                }
            />
        </nav>
    }
}

fn icon_view(icon: &NavIcon) -> AnyView {
    let themed = match icon {
        NavIcon::Logo(src) => {
            return view! { <img class=css::logo src=src.clone() alt="" /> }.into_any();
        }
        NavIcon::Feed => ic::FEED,
        NavIcon::Folder { open: true } => ic::FOLDER_OPEN,
        NavIcon::Folder { open: false } => ic::FOLDER,
        NavIcon::Company => ic::COMPANY,
        NavIcon::Product => ic::PRODUCT,
    };
    view! { <Icon icon=themed /> }.into_any()
}

/// One row of the tree.
///
/// Clicking the row applies its activation rule and navigates; clicking the
/// chevron only toggles the folder.
#[component]
fn NavEntry(item: NavItem, depth: u8, rows: Memo<Vec<NavRow>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let row = Memo::new(move |_| {
        rows.with(|rows| {
            rows.iter()
                .find(|r| r.item == item && r.depth == depth)
                .cloned()
        })
    });
    let expanded = Signal::derive(move || row.with(|r| r.as_ref().is_some_and(|r| r.expanded)));
    let expandable = Signal::derive(move || row.with(|r| r.as_ref().is_some_and(|r| r.expandable)));

    let on_row = move |_: leptos::ev::MouseEvent| {
        if let Some(href) = row.with_untracked(|r| r.as_ref().map(|r| r.href.clone())) {
            ctx.open_row(item, &href);
        }
    };
    let on_chevron = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ctx.toggle_folder(item);
    };

    let item_class = move || {
        let state = row.with(|r| r.as_ref().map(|r| r.state).unwrap_or_default());
        match state {
            ItemState::Plain => css::item.to_string(),
            ItemState::Selected => format!("{} {}", css::item, css::selected),
            ItemState::SubSelected => format!("{} {}", css::item, css::subSelected),
        }
    };
    let chevron_icon = Signal::derive(move || {
        if expanded.get() {
            ic::CHEVRON_DOWN
        } else {
            ic::CHEVRON_RIGHT
        }
    });
    let indent = format!("padding-left: {}rem", 0.75 + f32::from(depth));

    view! {
        <div
            class=item_class
            style=indent
            role="treeitem"
            aria-expanded=move || expandable.get().then(|| expanded.get().to_string())
            on:click=on_row
        >
            <span class=css::icon aria-hidden="true">
                {move || row.with(|r| r.as_ref().map(|r| icon_view(&r.icon)))}
            </span>
            <span class=css::label>
                {move || row.with(|r| r.as_ref().map(|r| r.label.clone()).unwrap_or_default())}
            </span>
            <Show when=move || expandable.get()>
                <span class=css::chevron on:click=on_chevron aria-label="Toggle folder">
                    <Icon icon=chevron_icon />
                </span>
            </Show>
        </div>
    }
}
