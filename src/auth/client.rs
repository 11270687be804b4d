//! Client for the external authentication API.

use crate::auth::{AuthError, Credentials, RegisterProfile, Role};
use anyhow::{Context, Result};
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use tracing::debug;

/// Authentication collaborator.
///
/// Object-safe so the gate can hold any implementation behind an `Arc`.
pub trait AuthApi: Send + Sync {
    /// `POST /login`
    fn login<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BoxFuture<'a, Result<LoginResponse, AuthError>>;

    /// `POST /register`
    fn register<'a>(
        &'a self,
        profile: &'a RegisterProfile,
    ) -> BoxFuture<'a, Result<RegisterResponse, AuthError>>;

    /// `GET /me`: the identity and role the server attaches to `token`.
    fn current_user<'a>(&'a self, token: &'a str) -> BoxFuture<'a, Result<UserInfo, AuthError>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CurrentUserResponse {
    Wrapped { user: UserInfo },
    Bare(UserInfo),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Ids come back as strings or numbers depending on the backend.
fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// Map a non-2xx response to an `AuthError`, preferring the server's `{message}`.
async fn error_from_response(response: reqwest::Response, unauthorized: &str) -> AuthError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.message)
        .filter(|message| !message.trim().is_empty());

    debug!("Authentication API returned {}", status);

    match status.as_u16() {
        401 | 403 => AuthError::InvalidCredentials(message.unwrap_or_else(|| unauthorized.to_string())),
        400..=499 => AuthError::ValidationFailure(
            message.unwrap_or_else(|| format!("Request rejected by server ({})", status)),
        ),
        _ => AuthError::NetworkFailure(
            message.unwrap_or_else(|| format!("Server error ({})", status)),
        ),
    }
}

/// `AuthApi` over HTTP + JSON.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl AuthApi for HttpAuthApi {
    fn login<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BoxFuture<'a, Result<LoginResponse, AuthError>> {
        async move {
            let response = self
                .client
                .post(self.url("login"))
                .json(credentials)
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(error_from_response(response, "Invalid email or password").await);
            }

            Ok(response.json::<LoginResponse>().await?)
        }
        .boxed()
    }

    fn register<'a>(
        &'a self,
        profile: &'a RegisterProfile,
    ) -> BoxFuture<'a, Result<RegisterResponse, AuthError>> {
        async move {
            let response = self
                .client
                .post(self.url("register"))
                .json(profile)
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(error_from_response(response, "Registration was refused").await);
            }

            Ok(response.json::<RegisterResponse>().await?)
        }
        .boxed()
    }

    fn current_user<'a>(&'a self, token: &'a str) -> BoxFuture<'a, Result<UserInfo, AuthError>> {
        async move {
            let response = self
                .client
                .get(self.url("me"))
                .bearer_auth(token)
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(error_from_response(response, "Your session has expired").await);
            }

            Ok(match response.json::<CurrentUserResponse>().await? {
                CurrentUserResponse::Wrapped { user } => user,
                CurrentUserResponse::Bare(user) => user,
            })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Helper Functions ====================

    fn create_api(server: &MockServer) -> HttpAuthApi {
        HttpAuthApi::new(&server.uri(), Duration::from_secs(5)).expect("client")
    }

    fn login_success(role: &str) -> serde_json::Value {
        serde_json::json!({
            "token": "token-123",
            "user": { "id": 42, "role": role, "name": "Amina" }
        })
    }

    // ==================== Deserialization Tests ====================

    #[test]
    fn test_user_info_accepts_string_and_numeric_ids() {
        let numeric: UserInfo = serde_json::from_str(r#"{"id": 7, "role": "user"}"#).unwrap();
        let text: UserInfo = serde_json::from_str(r#"{"id": "u-7", "role": "admin"}"#).unwrap();
        assert_eq!(numeric.id, "7");
        assert_eq!(text.id, "u-7");
        assert_eq!(text.role, Role::Admin);
    }

    #[test]
    fn test_user_info_rejects_unknown_role() {
        let result: std::result::Result<UserInfo, _> =
            serde_json::from_str(r#"{"id": 7, "role": "superuser"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = HttpAuthApi::new("https://api.example.org/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.base_url(), "https://api.example.org/api");
        assert_eq!(api.url("login"), "https://api.example.org/api/login");
    }

    // ==================== login Tests ====================

    #[tokio::test]
    async fn test_login_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(serde_json::json!({"email": "x@x.com", "password": "right"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_success("admin")))
            .expect(1)
            .mount(&server)
            .await;

        let api = create_api(&server);
        let response = api
            .login(&Credentials::new("x@x.com", "right"))
            .await
            .expect("login succeeds");

        assert_eq!(response.token, "token-123");
        assert_eq!(response.user.id, "42");
        assert_eq!(response.user.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_login_401_is_invalid_credentials_with_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(serde_json::json!({"message": "Wrong password"})),
            )
            .mount(&server)
            .await;

        let error = create_api(&server)
            .login(&Credentials::new("x@x.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(error, AuthError::InvalidCredentials("Wrong password".to_string()));
    }

    #[tokio::test]
    async fn test_login_401_without_body_uses_default_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let error = create_api(&server)
            .login(&Credentials::new("x@x.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(error.message(), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_login_500_is_network_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let error = create_api(&server)
            .login(&Credentials::new("x@x.com", "pw"))
            .await
            .unwrap_err();

        assert!(matches!(error, AuthError::NetworkFailure(_)));
    }

    #[tokio::test]
    async fn test_login_malformed_body_is_network_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let error = create_api(&server)
            .login(&Credentials::new("x@x.com", "pw"))
            .await
            .unwrap_err();

        assert!(matches!(error, AuthError::NetworkFailure(_)));
    }

    #[tokio::test]
    async fn test_login_unreachable_server_is_network_failure() {
        let api = HttpAuthApi::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let error = api.login(&Credentials::new("x@x.com", "pw")).await.unwrap_err();
        assert!(matches!(error, AuthError::NetworkFailure(_)));
    }

    // ==================== register Tests ====================

    #[tokio::test]
    async fn test_register_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .and(body_json(serde_json::json!({
                "name": "Amina",
                "email": "amina@example.org",
                "password": "secret1"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "u-1"})))
            .mount(&server)
            .await;

        let profile = RegisterProfile {
            name: "Amina".to_string(),
            email: "amina@example.org".to_string(),
            password: "secret1".to_string(),
        };
        let response = create_api(&server).register(&profile).await.expect("registered");
        assert_eq!(response.id, "u-1");
    }

    #[tokio::test]
    async fn test_register_conflict_is_validation_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(serde_json::json!({"message": "Email already registered"})),
            )
            .mount(&server)
            .await;

        let profile = RegisterProfile {
            name: "Amina".to_string(),
            email: "amina@example.org".to_string(),
            password: "secret1".to_string(),
        };
        let error = create_api(&server).register(&profile).await.unwrap_err();
        assert_eq!(
            error,
            AuthError::ValidationFailure("Email already registered".to_string())
        );
    }

    // ==================== current_user Tests ====================

    #[tokio::test]
    async fn test_current_user_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1, "role": "user"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let user = create_api(&server).current_user("abc").await.expect("user");
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn test_current_user_accepts_wrapped_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"user": {"id": "9", "role": "admin"}}),
            ))
            .mount(&server)
            .await;

        let user = create_api(&server).current_user("abc").await.expect("user");
        assert_eq!(user.id, "9");
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_current_user_expired_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let error = create_api(&server).current_user("stale").await.unwrap_err();
        assert_eq!(
            error,
            AuthError::InvalidCredentials("Your session has expired".to_string())
        );
    }
}
