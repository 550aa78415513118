//! Role-conditioned navigation for the application shell.
//!
//! Menus are static tables selected by an exhaustive match on [`Role`]. The
//! first entry of every menu is that persona's home, so consumers that
//! highlight the active route must keep the order.

use serde::Serialize;
use utoipa::ToSchema;

use super::{Role, Session};

/// Icon shown next to a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    Cpu,
    Globe,
    Users,
    LayoutGrid,
    Box,
    Layers,
    Settings,
}

/// One destination in the shell menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct NavigationItem {
    #[schema(value_type = String, example = "/studio")]
    pub target: &'static str,
    #[schema(value_type = String, example = "Studio")]
    pub label: &'static str,
    #[schema(value_type = String, example = "Studio")]
    pub tooltip: &'static str,
    pub icon: NavIcon,
    /// Set on the persona's landing destination only.
    pub home: bool,
}

const fn item(
    target: &'static str,
    label: &'static str,
    tooltip: &'static str,
    icon: NavIcon,
    home: bool,
) -> NavigationItem {
    NavigationItem {
        target,
        label,
        tooltip,
        icon,
        home,
    }
}

/// Preview of every persona's home for visitors without a session.
pub const GUEST_NAVIGATION: &[NavigationItem] = &[
    item("/studio", "Studio", "Studio", NavIcon::Cpu, true),
    item("/customer", "Marketplace", "Marketplace", NavIcon::Globe, false),
    item("/supplier", "Network", "Supply Chain", NavIcon::Layers, false),
];

pub const ARCHITECT_NAVIGATION: &[NavigationItem] = &[
    item("/studio", "Studio", "Studio", NavIcon::Cpu, true),
    item("/customer", "Materials", "Materials", NavIcon::Globe, false),
    item("/software", "Agents", "Agents", NavIcon::Users, false),
];

pub const CUSTOMER_NAVIGATION: &[NavigationItem] = &[
    item("/customer", "Marketplace", "Marketplace", NavIcon::Globe, true),
    item("/studio", "Projects", "Saved Projects", NavIcon::LayoutGrid, false),
    item("/detail/order/123", "Orders", "Orders", NavIcon::Box, false),
];

pub const SUPPLIER_NAVIGATION: &[NavigationItem] = &[
    item("/supplier", "Network", "Supply Chain", NavIcon::Layers, true),
    item("/detail/inventory/all", "Inventory", "Inventory", NavIcon::Box, false),
    item(
        "/detail/analytics/main",
        "Analytics",
        "Analytics",
        NavIcon::LayoutGrid,
        false,
    ),
];

/// Trailing settings entry shown beneath every menu.
pub const SETTINGS_ITEM: NavigationItem = item(
    "/detail/settings/main",
    "Settings",
    "Settings",
    NavIcon::Settings,
    false,
);

/// Menu for `session`, or the guest menu when nobody is signed in.
///
/// # Examples
/// ```
/// use ecosystem_shell::domain::{navigation, Role, Session};
///
/// let session = Session::new(Role::Architect);
/// assert_eq!(navigation::resolve(Some(&session))[0].target, "/studio");
/// assert_eq!(navigation::resolve(None).len(), 3);
/// ```
#[must_use]
pub fn resolve(session: Option<&Session>) -> &'static [NavigationItem] {
    match session.map(Session::role) {
        None => GUEST_NAVIGATION,
        Some(Role::Architect) => ARCHITECT_NAVIGATION,
        Some(Role::Customer) => CUSTOMER_NAVIGATION,
        Some(Role::Supplier) => SUPPLIER_NAVIGATION,
    }
}

/// A navigation entry annotated with whether it matches the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct MenuEntry {
    #[serde(flatten)]
    pub item: NavigationItem,
    pub active: bool,
}

impl MenuEntry {
    fn new(item: NavigationItem, path: Option<&str>) -> Self {
        Self {
            item,
            active: path == Some(item.target),
        }
    }
}

/// Rendered menu: role entries in resolver order plus the settings entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NavigationMenu {
    pub items: Vec<MenuEntry>,
    pub settings: MenuEntry,
}

impl NavigationMenu {
    /// Mark the entry whose target equals `path` as active.
    #[must_use]
    pub fn for_path(items: &[NavigationItem], path: Option<&str>) -> Self {
        Self {
            items: items
                .iter()
                .map(|item| MenuEntry::new(*item, path))
                .collect(),
            settings: MenuEntry::new(SETTINGS_ITEM, path),
        }
    }
}
