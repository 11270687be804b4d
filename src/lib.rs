//! Client core for the Impact Society site.
//!
//! Holds the two pieces of client state with real rules behind them: the
//! session (who is logged in, and may they see the admin panel) and the
//! locale (which language, which text direction). A rendering layer builds an
//! [`app::AppContext`] once, calls [`app::AppContext::start`], and then only
//! reads state and invokes operations.

pub mod app;
pub mod auth;
pub mod config;
pub mod document;
pub mod i18n;
pub mod resource;
pub mod routes;
pub mod storage;

pub use app::{AppContext, NavItem, Navigation};
pub use auth::{AuthError, AuthGate, AuthState, GuardDecision, Requirement, Role, RouteGuard, Session};
pub use i18n::{Direction, Language, LocaleState, LocalizationEngine};
pub use routes::{AdminSection, Route};
