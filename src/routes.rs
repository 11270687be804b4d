//! Route table of the site.
//!
//! Public pages, the two auth pages, and the admin panel. Unknown paths land
//! on the home page; `/admin` lands on the dashboard.

use crate::auth::{Requirement, Session};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminSection {
    Dashboard,
    Users,
    Projects,
    Events,
}

impl AdminSection {
    pub const ALL: [AdminSection; 4] = [
        AdminSection::Dashboard,
        AdminSection::Users,
        AdminSection::Projects,
        AdminSection::Events,
    ];

    fn segment(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "dashboard",
            AdminSection::Users => "users",
            AdminSection::Projects => "projects",
            AdminSection::Events => "events",
        }
    }

    /// Translation key of the admin menu entry.
    pub fn label_key(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "dashboard",
            AdminSection::Users => "userManagement",
            AdminSection::Projects => "projectManagement",
            AdminSection::Events => "eventManagement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Events,
    GetInvolved,
    Login,
    Register,
    Admin(AdminSection),
}

impl Route {
    /// Links shown in the public navigation bar, in order.
    pub const PUBLIC: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Projects,
        Route::Events,
        Route::GetInvolved,
    ];

    /// Map a location to a route. Query strings, fragments and trailing
    /// slashes are ignored.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["projects"] => Route::Projects,
            ["events"] => Route::Events,
            ["get-involved"] => Route::GetInvolved,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["admin"] => Route::Admin(AdminSection::Dashboard),
            ["admin", section] => AdminSection::ALL
                .into_iter()
                .find(|candidate| candidate.segment() == *section)
                .map(Route::Admin)
                .unwrap_or(Route::Home),
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::Events => "/events".to_string(),
            Route::GetInvolved => "/get-involved".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Admin(section) => format!("/admin/{}", section.segment()),
        }
    }

    pub fn requirement(&self) -> Requirement {
        match self {
            Route::Admin(_) => Requirement::Admin,
            _ => Requirement::Public,
        }
    }

    /// Translation key for the route's link label, if it has one.
    pub fn label_key(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("home"),
            Route::About => Some("about"),
            Route::Projects => Some("projects"),
            Route::Events => Some("events"),
            Route::GetInvolved => Some("getInvolved"),
            Route::Login => Some("login"),
            Route::Register => None,
            Route::Admin(section) => Some(section.label_key()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Where a successful login lands: admins go to the dashboard, everyone else
/// to the home page.
pub fn post_login_destination(session: &Session) -> Route {
    if session.is_admin() {
        Route::Admin(AdminSection::Dashboard)
    } else {
        Route::Home
    }
}
