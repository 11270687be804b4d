//! Auth gate: owner of the one session in the process.
//!
//! The state lives in a `watch` channel so the route guard and presentation
//! code can read it synchronously or wait for a transition. Only the gate's
//! own operations write to it.
//!
//! The persisted token and role are written inside the same state update that
//! installs or drops the session, so storage always matches the state a
//! concurrent login or logout left behind.

use crate::auth::{
    AuthApi, AuthError, AuthState, Credentials, RegisterProfile, RegistrationForm, Role, Session,
};
use crate::storage::{KeyValueStore, ROLE_KEY, TOKEN_KEY};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Decrements the in-flight login counter when the attempt ends, including
/// when the future is dropped mid-flight.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct AuthGate {
    api: Arc<dyn AuthApi>,
    storage: Arc<dyn KeyValueStore>,
    state: watch::Sender<AuthState>,
    logins_in_flight: AtomicUsize,
}

impl AuthGate {
    /// Gate waiting for `restore_session`. Protected routes show a loading
    /// state until it completes.
    pub fn new(api: Arc<dyn AuthApi>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_state(api, storage, AuthState::Restoring)
    }

    /// Gate that skips restoration and starts logged out.
    pub fn logged_out(api: Arc<dyn AuthApi>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_state(api, storage, AuthState::LoggedOut)
    }

    fn with_state(api: Arc<dyn AuthApi>, storage: Arc<dyn KeyValueStore>, initial: AuthState) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            api,
            storage,
            state,
            logins_in_flight: AtomicUsize::new(0),
        }
    }

    // ==================== Queries ====================

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn session(&self) -> Option<Session> {
        self.state.borrow().session().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.borrow().is_admin()
    }

    /// True until `restore_session` has settled.
    pub fn is_restoring(&self) -> bool {
        self.state.borrow().is_pending()
    }

    /// True while a login request is in flight; the login form disables
    /// its submit button on this.
    pub fn is_loading(&self) -> bool {
        self.logins_in_flight.load(Ordering::SeqCst) > 0
    }

    // ==================== Operations ====================

    /// Authenticate against the API.
    ///
    /// On failure the current state is left untouched. When two attempts
    /// overlap, the last response to arrive wins.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        credentials.validate()?;

        let _in_flight = InFlight::start(&self.logins_in_flight);
        let response = match self.api.login(credentials).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Login failed for {}: {}", credentials.email, e);
                return Err(e);
            }
        };

        let session = Session::new(response.user.id, response.user.role, response.token);
        self.state.send_modify(|state| {
            self.persist(&session);
            *state = AuthState::LoggedIn(session.clone());
        });

        info!("User {} logged in as {}", session.user_id, session.role);
        Ok(session)
    }

    /// Create an account. Does not log in; the caller sends the user to the
    /// login page.
    pub async fn register(&self, profile: &RegisterProfile) -> Result<(), AuthError> {
        match self.api.register(profile).await {
            Ok(response) => {
                info!("Registered account {} for {}", response.id, profile.email);
                Ok(())
            }
            Err(e) => {
                warn!("Registration failed for {}: {}", profile.email, e);
                Err(e)
            }
        }
    }

    /// Validate the registration form, then register.
    pub async fn register_form(&self, form: &RegistrationForm) -> Result<(), AuthError> {
        let profile = form.validate()?;
        self.register(&profile).await
    }

    /// Forget the session and the persisted token. Safe to call when already
    /// logged out.
    pub fn logout(&self) {
        let mut previous = AuthState::LoggedOut;
        self.state.send_modify(|state| {
            previous = std::mem::replace(state, AuthState::LoggedOut);
            self.clear_persisted();
        });

        match previous.session() {
            Some(session) => info!("User {} logged out", session.user_id),
            None => debug!("Logout requested while not logged in"),
        }
    }

    /// Drop the session after a call reported the token as invalid or expired.
    pub fn invalidate(&self) {
        let was_logged_in = self.state.send_if_modified(|state| {
            if matches!(state, AuthState::LoggedIn(_)) {
                *state = AuthState::LoggedOut;
                self.clear_persisted();
                true
            } else {
                false
            }
        });

        if was_logged_in {
            warn!("Session token rejected by the server; logged out");
        }
    }

    /// Rebuild the session from the persisted token.
    ///
    /// The role is taken from the API, never from storage; the stored role is
    /// only compared against it. Every failure ends logged out. A login or
    /// logout that lands while this runs takes precedence over its result.
    pub async fn restore_session(&self) -> AuthState {
        if self.is_authenticated() {
            debug!("Session already established, skipping restore");
            return self.state();
        }

        let Some(token) = self.storage.get(TOKEN_KEY) else {
            debug!("No persisted session");
            self.settle(AuthState::LoggedOut, || {});
            return self.state();
        };

        self.state.send_replace(AuthState::Restoring);
        let role_hint = self.storage.get(ROLE_KEY);

        let applied = match self.api.current_user(&token).await {
            Ok(user) => {
                if let Some(hint) = role_hint.as_deref() {
                    if Role::parse(hint) != Some(user.role) {
                        warn!(
                            "Persisted role '{}' does not match server role '{}'; using server role",
                            hint, user.role
                        );
                    }
                }

                let session = Session::new(user.id, user.role, token);
                let applied =
                    self.settle(AuthState::LoggedIn(session.clone()), || self.persist(&session));
                if applied {
                    info!("Restored session for user {} as {}", session.user_id, session.role);
                }
                applied
            }
            Err(e) if e.is_unauthorized() => {
                warn!("Persisted session is no longer valid: {}", e);
                self.settle(AuthState::LoggedOut, || self.clear_persisted())
            }
            Err(e) => {
                warn!("Could not restore session, continuing logged out: {}", e);
                self.settle(AuthState::LoggedOut, || {})
            }
        };

        if !applied {
            debug!("Session changed while restoring; keeping the newer state");
        }
        self.state()
    }

    /// Re-check the current token with the API before an admin-only action.
    ///
    /// Refreshes the session role from the response. Fails with
    /// `InvalidCredentials` when not logged in, when the token was rejected
    /// (which also logs out), when the session was replaced or ended while the
    /// check ran, or when the server no longer reports admin.
    pub async fn reauthorize_admin(&self) -> Result<Session, AuthError> {
        let Some(token) = self.session().and_then(|session| session.token) else {
            return Err(AuthError::InvalidCredentials(
                "You need to sign in first".to_string(),
            ));
        };

        let user = match self.api.current_user(&token).await {
            Ok(user) => user,
            Err(e) => {
                if e.is_unauthorized() {
                    self.invalidate();
                }
                return Err(e);
            }
        };

        let session = Session::new(user.id, user.role, token);
        let mut still_current = false;
        let changed = self.state.send_if_modified(|state| match state {
            AuthState::LoggedIn(current) if current.token == session.token => {
                still_current = true;
                self.persist(&session);
                let changed = *current != session;
                *current = session.clone();
                changed
            }
            _ => false,
        });

        if !still_current {
            debug!("Session changed during admin check; discarding result");
            return Err(AuthError::InvalidCredentials(
                "You need to sign in first".to_string(),
            ));
        }
        if changed {
            info!("Session role refreshed to {}", session.role);
        }

        if session.is_admin() {
            Ok(session)
        } else {
            warn!("User {} is no longer an administrator", session.user_id);
            Err(AuthError::InvalidCredentials(
                "Administrator access required".to_string(),
            ))
        }
    }

    // ==================== Internals ====================

    /// Replace the state only if restoration is still pending, running
    /// `write_storage` in the same update. Returns whether it applied.
    fn settle(&self, next: AuthState, write_storage: impl FnOnce()) -> bool {
        self.state.send_if_modified(|state| {
            if state.is_pending() {
                write_storage();
                *state = next;
                true
            } else {
                false
            }
        })
    }

    fn persist(&self, session: &Session) {
        if let Some(token) = &session.token {
            if let Err(e) = self.storage.set(TOKEN_KEY, token) {
                warn!("Failed to persist session token: {}", e);
            }
        }
        if let Err(e) = self.storage.set(ROLE_KEY, session.role.as_str()) {
            warn!("Failed to persist role hint: {}", e);
        }
    }

    fn clear_persisted(&self) {
        for key in [TOKEN_KEY, ROLE_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!("Failed to clear '{}' from storage: {}", key, e);
            }
        }
    }
}
