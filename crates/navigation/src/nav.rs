use askama::Template;

use crate::{Route, RouteTable};

/// Placeholder target for links that cannot be followed.
pub const DISABLED_HREF: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Logo link back to the landing page. Never highlighted.
    Logo,
    /// Section link, highlighted when the current path contains its path.
    Section,
    /// Greyed-out entry with no target.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Option<Route>,
    pub kind: LinkKind,
}

impl NavItem {
    const fn logo(route: Route) -> Self {
        Self {
            label: "Home",
            route: Some(route),
            kind: LinkKind::Logo,
        }
    }

    const fn section(label: &'static str, route: Route) -> Self {
        Self {
            label,
            route: Some(route),
            kind: LinkKind::Section,
        }
    }

    const fn disabled(label: &'static str) -> Self {
        Self {
            label,
            route: None,
            kind: LinkKind::Disabled,
        }
    }
}

/// Items of the top bar, in display order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem::logo(Route::Home),
    NavItem::section("Projects", Route::Projects),
    NavItem::section("Contact", Route::Contact),
    NavItem::section("Log in", Route::Login),
    NavItem::disabled("Disabled"),
];

/// A nav item resolved against the route table and the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub kind: LinkKind,
    pub active: bool,
}

impl NavLink {
    pub fn is_disabled(&self) -> bool {
        self.kind == LinkKind::Disabled
    }
}

/// Section-level highlighting: `/projects/tictactoe` activates `/projects`.
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    current_path.contains(link_path)
}

pub struct NavBar<'a> {
    routes: &'a RouteTable,
}

impl<'a> NavBar<'a> {
    pub fn new(routes: &'a RouteTable) -> Self {
        Self { routes }
    }

    pub fn links(&self, current_path: &str) -> Vec<NavLink> {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let href = item
                    .route
                    .map(|route| self.routes.path(route).to_owned())
                    .unwrap_or_else(|| DISABLED_HREF.to_owned());

                let active = item.kind == LinkKind::Section && is_active(current_path, &href);

                NavLink {
                    label: item.label,
                    href,
                    kind: item.kind,
                    active,
                }
            })
            .collect()
    }

    pub fn render(&self, current_path: &str) -> askama::Result<String> {
        NavBarTemplate {
            links: self.links(current_path),
        }
        .render()
    }
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = "{% for link in links -%}
{% if link.active %}[{{ link.label }}]{% else if link.is_disabled() %}({{ link.label }}){% else %} {{ link.label }} {% endif %} {{ link.href }}
{% endfor -%}"
)]
struct NavBarTemplate {
    links: Vec<NavLink>,
}
