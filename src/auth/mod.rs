//! Authentication: the session gate, the route guard and the client for the
//! external authentication API.
//!
//! - `session`: `Session`, `Role` and the observable `AuthState`
//! - `gate`: `AuthGate`, the only writer of the session
//! - `guard`: `RouteGuard`, render / redirect / loading decisions
//! - `client`: `AuthApi` and its HTTP implementation
//! - `forms`: login and registration payloads with client-side checks

mod client;
mod error;
mod forms;
mod gate;
mod guard;
mod session;

pub use client::{AuthApi, HttpAuthApi, LoginResponse, RegisterResponse, UserInfo};
pub use error::AuthError;
pub use forms::{Credentials, RegisterProfile, RegistrationForm, MIN_PASSWORD_LENGTH};
pub use gate::AuthGate;
pub use guard::{GuardDecision, Requirement, RouteGuard};
pub use session::{AuthState, Role, Session};

#[cfg(test)]
pub(crate) use gate::tests::FakeAuthApi;
