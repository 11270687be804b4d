//! Application context: the two stateful components built once at start-up
//! and handed to the presentation layer.

use crate::auth::{
    AuthApi, AuthError, AuthGate, AuthState, Credentials, GuardDecision, HttpAuthApi,
    RegistrationForm, RouteGuard,
};
use crate::config::Config;
use crate::document::DocumentEnvironment;
use crate::i18n::{Language, LocalizationEngine};
use crate::resource::Resource;
use crate::routes::{post_login_destination, AdminSection, Route};
use crate::storage::{FileStore, KeyValueStore};
use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// Outcome of navigating to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub decision: GuardDecision,
}

/// Entry of the navigation bar or admin menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link { route: Route, label: String },
    Logout { label: String },
}

pub struct AppContext {
    locale: LocalizationEngine,
    auth: Arc<AuthGate>,
    guard: RouteGuard,
}

impl AppContext {
    pub fn new(
        api: Arc<dyn AuthApi>,
        storage: Arc<dyn KeyValueStore>,
        document: Arc<dyn DocumentEnvironment>,
        default_language: Language,
    ) -> Self {
        let locale =
            LocalizationEngine::with_default_language(default_language, storage.clone(), document);
        let auth = Arc::new(AuthGate::new(api, storage));
        let guard = RouteGuard::new(auth.clone());
        Self { locale, auth, guard }
    }

    /// Wire the context to the HTTP API and file storage named in `config`.
    pub fn from_config(config: &Config, document: Arc<dyn DocumentEnvironment>) -> Result<Self> {
        let storage = FileStore::open(&config.storage_path).with_context(|| {
            format!("Failed to open storage at {}", config.storage_path.display())
        })?;
        let api = HttpAuthApi::new(&config.api_url, config.http_timeout)?;

        Ok(Self::new(
            Arc::new(api),
            Arc::new(storage),
            document,
            config.default_language,
        ))
    }

    /// Restore the language, then the session.
    pub async fn start(&self) -> AuthState {
        let language = self.locale.initialize();
        let state = self.auth.restore_session().await;
        info!(
            "Client ready: language={}, authenticated={}, admin={}",
            language,
            state.is_authenticated(),
            state.is_admin()
        );
        state
    }

    pub fn locale(&self) -> &LocalizationEngine {
        &self.locale
    }

    pub fn auth(&self) -> &AuthGate {
        &self.auth
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    // ==================== Navigation ====================

    /// Decide what a navigation to `path` shows right now.
    pub fn navigate(&self, path: &str) -> Navigation {
        let route = Route::parse(path);
        Navigation {
            route,
            decision: self.guard.check(route.requirement()),
        }
    }

    /// Like `navigate`, but waits for session restoration to settle.
    pub async fn resolve_navigation(&self, path: &str) -> Navigation {
        let route = Route::parse(path);
        Navigation {
            route,
            decision: self.guard.resolve(route.requirement()).await,
        }
    }

    /// Public links, then the dashboard for admins, then login or logout.
    pub fn nav_links(&self) -> Vec<NavItem> {
        let mut items: Vec<NavItem> = Route::PUBLIC
            .into_iter()
            .map(|route| self.link(route))
            .collect();

        if self.auth.is_authenticated() {
            if self.auth.is_admin() {
                items.push(self.link(Route::Admin(AdminSection::Dashboard)));
            }
            items.push(NavItem::Logout {
                label: self.locale.translate("logout"),
            });
        } else {
            items.push(self.link(Route::Login));
        }
        items
    }

    /// Sidebar of the admin panel.
    pub fn admin_menu(&self) -> Vec<NavItem> {
        let mut items: Vec<NavItem> = AdminSection::ALL
            .into_iter()
            .map(|section| self.link(Route::Admin(section)))
            .collect();
        items.push(NavItem::Logout {
            label: self.locale.translate("logout"),
        });
        items
    }

    fn link(&self, route: Route) -> NavItem {
        let label = route
            .label_key()
            .map(|key| self.locale.translate(key))
            .unwrap_or_else(|| route.path());
        NavItem::Link { route, label }
    }

    // ==================== Auth Flows ====================

    /// Log in and return where the user should land.
    pub async fn login(&self, credentials: &Credentials) -> Result<Route, AuthError> {
        let session = self.auth.login(credentials).await?;
        Ok(post_login_destination(&session))
    }

    /// Register and return the login page on success.
    pub async fn register(&self, form: &RegistrationForm) -> Result<Route, AuthError> {
        self.auth.register_form(form).await?;
        Ok(Route::Login)
    }

    /// Log out and return the home page.
    pub fn logout(&self) -> Route {
        self.auth.logout();
        Route::Home
    }

    /// Run an authenticated API call for a page. A rejected token ends the
    /// session.
    pub async fn fetch<T, F>(&self, request: F) -> Resource<T>
    where
        F: Future<Output = Result<T, AuthError>>,
    {
        Resource::load(async {
            let result = request.await;
            if let Err(e) = &result {
                if e.is_unauthorized() {
                    self.auth.invalidate();
                }
            }
            result
        })
        .await
    }
}
