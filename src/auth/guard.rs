//! Route guard: decides whether a protected subtree may render.
//!
//! The guard only reads the gate's state. While the persisted session is
//! still being restored it answers `Loading` for protected routes, so
//! neither the protected content nor a premature login redirect is shown.

use crate::auth::{AuthGate, AuthState};
use crate::routes::Route;
use std::sync::Arc;
use tracing::debug;

/// Authorization a route needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Public,
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
    Loading,
}

impl GuardDecision {
    /// Pure decision for a given auth state.
    pub fn for_state(requirement: Requirement, state: &AuthState) -> GuardDecision {
        match (requirement, state) {
            (Requirement::Public, _) => GuardDecision::Render,
            (_, AuthState::Restoring) => GuardDecision::Loading,
            (_, state) if !state.is_authenticated() => GuardDecision::Redirect(Route::Login),
            (Requirement::Admin, state) if !state.is_admin() => GuardDecision::Redirect(Route::Home),
            _ => GuardDecision::Render,
        }
    }
}

#[derive(Clone)]
pub struct RouteGuard {
    auth: Arc<AuthGate>,
}

impl RouteGuard {
    pub fn new(auth: Arc<AuthGate>) -> Self {
        Self { auth }
    }

    /// Decide from the current state without waiting.
    pub fn check(&self, requirement: Requirement) -> GuardDecision {
        let decision = GuardDecision::for_state(requirement, &self.auth.state());
        debug!("Guard {:?} -> {:?}", requirement, decision);
        decision
    }

    /// Wait until restoration has settled, then decide. Never returns
    /// `Loading`.
    pub async fn resolve(&self, requirement: Requirement) -> GuardDecision {
        let mut receiver = self.auth.subscribe();
        let settled = match receiver.wait_for(|state| !state.is_pending()).await {
            Ok(state) => state.clone(),
            // The gate owns the sender and we hold the gate, so this cannot close.
            Err(_) => AuthState::LoggedOut,
        };
        GuardDecision::for_state(requirement, &settled)
    }
}
