use askama::Template;

use crate::routes::{RouteTable, View};

/// One entry of the navigation bar.
pub(crate) struct NavLink {
    pub(crate) name: String,
    pub(crate) href: String,
    pub(crate) active: bool,
}

/// Shared by every page.
pub(crate) struct Layout {
    pub(crate) nav: Vec<NavLink>,
    pub(crate) assets_url: String,
}

impl Layout {
    pub(crate) fn new(routes: &RouteTable, current: Option<View>) -> Self {
        let nav = routes
            .routes()
            .iter()
            .map(|route| NavLink {
                name: route.name.to_string(),
                href: routes.history().join(route.path),
                active: Some(route.view) == current,
            })
            .collect();

        Self {
            nav,
            assets_url: routes.history().join("/assets"),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub(crate) struct HomeView {
    pub(crate) layout: Layout,
    pub(crate) converter_url: String,
}

#[derive(Template)]
#[template(path = "converter.html")]
pub(crate) struct ConverterView {
    pub(crate) layout: Layout,
    pub(crate) api_url: String,
    pub(crate) default_width: u32,
    pub(crate) max_width: u32,
    pub(crate) default_charset: String,
}

#[derive(Template)]
#[template(path = "404.html")]
pub(crate) struct NotFound {
    pub(crate) layout: Layout,
    pub(crate) home_url: String,
}
