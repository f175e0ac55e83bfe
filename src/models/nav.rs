//! Navigation tree expansion and selection state.
//!
//! Expansion is UI-only state. It is toggled by the user and re-derived
//! whenever a route is entered, see [`NavState::expand_for_route`].

use std::collections::BTreeSet;

use crate::models::RouteName;

/// An entry of the navigation tree, keyed by a stable identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavItem {
    Feed,
    Companies,
    Products,
    Company(i64),
    Product(i64),
}

/// Highlight state of a navigation entry.
///
/// A single value per entry, so an entry is never both selected and
/// sub-selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemState {
    #[default]
    Plain,
    /// The entry is exactly the active page.
    Selected,
    /// The entry is an expanded folder leading towards the active page.
    SubSelected,
}

/// Folder expansion flags of the navigation tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub companies_expanded: bool,
    pub products_expanded: bool,
    pub expanded_companies: BTreeSet<i64>,
}

impl NavState {
    pub fn is_company_expanded(&self, id: i64) -> bool {
        self.expanded_companies.contains(&id)
    }

    /// Toggle a folder's expansion. Non-folder entries are ignored.
    pub fn toggle(&mut self, item: NavItem) {
        match item {
            NavItem::Companies => self.companies_expanded = !self.companies_expanded,
            NavItem::Products => self.products_expanded = !self.products_expanded,
            NavItem::Company(id) => {
                if !self.expanded_companies.remove(&id) {
                    self.expanded_companies.insert(id);
                }
            }
            NavItem::Feed | NavItem::Product(_) => {}
        }
    }

    /// Expansion applied when a row body is clicked, before navigating.
    pub fn activate(&mut self, item: NavItem) {
        match item {
            NavItem::Companies | NavItem::Products => self.toggle(item),
            NavItem::Company(id) => {
                self.expanded_companies.insert(id);
                self.companies_expanded = true;
            }
            NavItem::Feed | NavItem::Product(_) => {}
        }
    }

    /// Derive expansion from the entered route.
    ///
    /// `company_id` is the company of the detail page (the owner, for a
    /// product page). Detail routes without a resolved company leave the
    /// state untouched. Applying the same route twice is a no-op.
    pub fn expand_for_route(&mut self, route: RouteName, company_id: Option<i64>) {
        match (route, company_id) {
            (RouteName::Home, _) => self.reset(false, false),
            (RouteName::Companies, _) => self.reset(true, false),
            (RouteName::Products, _) => self.reset(false, true),
            (RouteName::Company | RouteName::Product, Some(id)) => {
                self.reset(true, false);
                self.expanded_companies.insert(id);
            }
            (RouteName::Company | RouteName::Product, None) => {}
        }
    }

    fn reset(&mut self, companies: bool, products: bool) {
        self.companies_expanded = companies;
        self.products_expanded = products;
        self.expanded_companies.clear();
    }

    /// Highlight state of `item` for the active route and entities.
    pub fn item_state(
        &self,
        item: NavItem,
        route: Option<RouteName>,
        current_company: Option<i64>,
        current_product: Option<i64>,
    ) -> ItemState {
        let selected = match item {
            NavItem::Feed => route == Some(RouteName::Home),
            NavItem::Companies => route == Some(RouteName::Companies),
            NavItem::Products => route == Some(RouteName::Products),
            NavItem::Company(id) => {
                route == Some(RouteName::Company) && current_company == Some(id)
            }
            NavItem::Product(id) => {
                route == Some(RouteName::Product) && current_product == Some(id)
            }
        };
        if selected {
            return ItemState::Selected;
        }

        let expanded = match item {
            NavItem::Companies => self.companies_expanded,
            NavItem::Products => self.products_expanded,
            NavItem::Company(id) => self.is_company_expanded(id),
            NavItem::Feed | NavItem::Product(_) => false,
        };
        if expanded {
            ItemState::SubSelected
        } else {
            ItemState::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_folders() {
        let mut nav = NavState::default();
        nav.toggle(NavItem::Companies);
        assert!(nav.companies_expanded);
        assert!(!nav.products_expanded);
        nav.toggle(NavItem::Companies);
        assert!(!nav.companies_expanded);

        nav.toggle(NavItem::Company(4));
        assert!(nav.is_company_expanded(4));
        nav.toggle(NavItem::Company(4));
        assert!(!nav.is_company_expanded(4));

        let before = nav.clone();
        nav.toggle(NavItem::Feed);
        nav.toggle(NavItem::Product(1));
        assert_eq!(nav, before);
    }

    #[test]
    fn test_activate_company_expands_parent() {
        let mut nav = NavState::default();
        nav.activate(NavItem::Company(2));
        assert!(nav.companies_expanded);
        assert!(nav.is_company_expanded(2));
        // Activating again keeps it expanded.
        nav.activate(NavItem::Company(2));
        assert!(nav.is_company_expanded(2));
    }

    #[test]
    fn test_expand_for_route() {
        let mut nav = NavState::default();
        nav.toggle(NavItem::Products);
        nav.toggle(NavItem::Company(9));

        nav.expand_for_route(RouteName::Company, Some(1));
        assert!(nav.companies_expanded);
        assert!(!nav.products_expanded);
        assert_eq!(nav.expanded_companies, BTreeSet::from([1]));

        nav.expand_for_route(RouteName::Products, None);
        assert!(!nav.companies_expanded);
        assert!(nav.products_expanded);
        assert!(nav.expanded_companies.is_empty());

        nav.expand_for_route(RouteName::Home, None);
        assert_eq!(nav, NavState::default());
    }

    #[test]
    fn test_expand_for_route_idempotent() {
        let mut once = NavState::default();
        once.expand_for_route(RouteName::Company, Some(1));
        let mut twice = once.clone();
        twice.expand_for_route(RouteName::Company, Some(1));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_item_state() {
        let mut nav = NavState::default();
        nav.expand_for_route(RouteName::Product, Some(1));
        let route = Some(RouteName::Product);

        assert_eq!(
            nav.item_state(NavItem::Product(10), route, Some(1), Some(10)),
            ItemState::Selected
        );
        assert_eq!(
            nav.item_state(NavItem::Product(11), route, Some(1), Some(10)),
            ItemState::Plain
        );
        assert_eq!(
            nav.item_state(NavItem::Company(1), route, Some(1), Some(10)),
            ItemState::SubSelected
        );
        assert_eq!(
            nav.item_state(NavItem::Companies, route, Some(1), Some(10)),
            ItemState::SubSelected
        );
        assert_eq!(
            nav.item_state(NavItem::Feed, route, Some(1), Some(10)),
            ItemState::Plain
        );
    }

    #[test]
    fn test_selected_wins_over_sub_selected() {
        let mut nav = NavState::default();
        nav.expand_for_route(RouteName::Company, Some(1));
        let route = Some(RouteName::Company);

        assert_eq!(
            nav.item_state(NavItem::Company(1), route, Some(1), None),
            ItemState::Selected
        );

        nav.expand_for_route(RouteName::Companies, None);
        assert_eq!(
            nav.item_state(NavItem::Companies, Some(RouteName::Companies), None, None),
            ItemState::Selected
        );
    }
}
