//! View models derived from [`AppState`].
//!
//! The navigation tree and the page heading are computed here as plain data
//! so components only map them to markup.

use crate::core::state::AppState;
use crate::models::{ItemState, NavItem, RouteName};

/// Icon shown in front of a navigation row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Feed,
    Folder { open: bool },
    /// Company logo URL.
    Logo(String),
    Company,
    Product,
}

/// One row of the flattened navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavRow {
    pub item: NavItem,
    pub label: String,
    pub href: String,
    pub icon: NavIcon,
    /// Indentation level, 0 for top-level entries.
    pub depth: u8,
    /// Whether the row has an expand chevron.
    pub expandable: bool,
    pub expanded: bool,
    pub state: ItemState,
}

/// Flatten the navigation tree for the current state.
///
/// Feed, then the Companies folder with its companies (each followed by its
/// products when expanded), then the Products folder with every product.
pub fn nav_rows(state: &AppState) -> Vec<NavRow> {
    let route = state.route_name();
    let company_id = state.current_company_id();
    let product_id = state.current_product_id();
    let nav = &state.nav;
    let item_state = |item| nav.item_state(item, route, company_id, product_id);

    let mut rows = vec![NavRow {
        item: NavItem::Feed,
        label: "Feed".to_string(),
        href: "/".to_string(),
        icon: NavIcon::Feed,
        depth: 0,
        expandable: false,
        expanded: false,
        state: item_state(NavItem::Feed),
    }];

    rows.push(NavRow {
        item: NavItem::Companies,
        label: "Companies".to_string(),
        href: "/companies".to_string(),
        icon: NavIcon::Folder {
            open: nav.companies_expanded,
        },
        depth: 0,
        expandable: true,
        expanded: nav.companies_expanded,
        state: item_state(NavItem::Companies),
    });

    if nav.companies_expanded {
        for company in &state.companies {
            let item = NavItem::Company(company.id);
            let expanded = nav.is_company_expanded(company.id);
            let has_products = state.products_of(company.id).next().is_some();

            rows.push(NavRow {
                item,
                label: company.name.clone(),
                href: company.path(),
                icon: company
                    .logo_url
                    .clone()
                    .map_or(NavIcon::Company, NavIcon::Logo),
                depth: 1,
                expandable: has_products,
                expanded,
                state: item_state(item),
            });

            if expanded {
                rows.extend(state.products_of(company.id).map(|product| {
                    let item = NavItem::Product(product.id);
                    NavRow {
                        item,
                        label: product.name.clone(),
                        href: product.path(),
                        icon: NavIcon::Product,
                        depth: 2,
                        expandable: false,
                        expanded: false,
                        state: item_state(item),
                    }
                }));
            }
        }
    }

    rows.push(NavRow {
        item: NavItem::Products,
        label: "Products".to_string(),
        href: "/products".to_string(),
        icon: NavIcon::Folder {
            open: nav.products_expanded,
        },
        depth: 0,
        expandable: true,
        expanded: nav.products_expanded,
        state: item_state(NavItem::Products),
    });

    if nav.products_expanded {
        rows.extend(state.products.iter().map(|product| NavRow {
            item: NavItem::Product(product.id),
            label: product.name.clone(),
            href: product.path(),
            icon: NavIcon::Product,
            depth: 1,
            expandable: false,
            expanded: false,
            state: item_state(NavItem::Product(product.id)),
        }));
    }

    rows
}

/// Title block above the main pane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Heading {
    Title(&'static str),
    Company {
        name: String,
        logo_url: Option<String>,
    },
    Product {
        name: String,
        company_name: String,
        company_path: String,
    },
}

/// Heading for the active route. Detail routes fall back to "Feed" until
/// their entity is resolved.
pub fn heading(state: &AppState) -> Heading {
    match (
        state.route_name(),
        &state.current_company,
        &state.current_product,
    ) {
        (Some(RouteName::Company), Some(company), _) => Heading::Company {
            name: company.name.clone(),
            logo_url: company.logo_url.clone(),
        },
        (Some(RouteName::Product), Some(company), Some(product)) => Heading::Product {
            name: product.name.clone(),
            company_name: company.name.clone(),
            company_path: company.path(),
        },
        (Some(RouteName::Companies), _, _) => Heading::Title("Companies"),
        (Some(RouteName::Products), _, _) => Heading::Title("Products"),
        _ => Heading::Title("Feed"),
    }
}
