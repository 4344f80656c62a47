//! HTTP client for the Users service.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use tracing::warn;

use crate::users::{errors::UsersClientError, models::UserResponse};

/// Users service connection settings.
#[derive(Debug, Clone)]
pub struct UsersClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

/// Looks users up in the external Users service.
///
/// Calls never fail: transport errors, timeouts and unexpected statuses are
/// replaced by [`UserResponse::fallback`].
#[automock]
#[async_trait]
pub trait UsersClient: Send + Sync {
    /// `None` when the Users service reports that the user does not exist.
    async fn get_user_by_user_id(&self, user_id: i32) -> Option<UserResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpUsersClient {
    client: Client,
    base_url: String,
}

impl HttpUsersClient {
    /// Build a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &UsersClientConfig) -> Result<Self, UsersClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(UsersClientError::Build)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_user(&self, user_id: i32) -> Result<Option<UserResponse>, UsersClientError> {
        let response = self
            .client
            .get(format!("{}/user/{user_id}", self.base_url))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(UsersClientError::Status(status)),
        }
    }
}

#[async_trait]
impl UsersClient for HttpUsersClient {
    async fn get_user_by_user_id(&self, user_id: i32) -> Option<UserResponse> {
        self.fetch_user(user_id).await.unwrap_or_else(|error| {
            warn!(user_id, error = %error, "users service lookup failed, using fallback");

            Some(UserResponse::fallback())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use testresult::TestResult;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    use super::*;

    fn client_for(base_url: String, timeout: Duration) -> Result<HttpUsersClient, UsersClientError> {
        HttpUsersClient::new(&UsersClientConfig { base_url, timeout })
    }

    #[tokio::test]
    async fn get_user_returns_user_on_success() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7,
                "name": "Grace",
                "lastName": "Hopper",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(server.uri(), Duration::from_secs(2))?;

        let user = client.get_user_by_user_id(7).await;

        assert_eq!(
            user,
            Some(UserResponse {
                id: 7,
                name: Some("Grace".to_string()),
                last_name: Some("Hopper".to_string()),
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_user_returns_none_when_user_is_missing() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/8"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(server.uri(), Duration::from_secs(2))?;

        assert_eq!(client.get_user_by_user_id(8).await, None);

        Ok(())
    }

    #[tokio::test]
    async fn get_user_server_error_returns_fallback() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/9"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(server.uri(), Duration::from_secs(2))?;

        let user = client.get_user_by_user_id(9).await;

        assert!(user.is_some_and(|user| user.is_fallback()));

        Ok(())
    }

    #[tokio::test]
    async fn get_user_timeout_returns_fallback() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/10"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "id": 10 }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = client_for(server.uri(), Duration::from_millis(50))?;

        let user = client.get_user_by_user_id(10).await;

        assert!(user.is_some_and(|user| user.is_fallback()));

        Ok(())
    }

    #[tokio::test]
    async fn get_user_unreachable_service_returns_fallback() -> TestResult {
        let client = client_for("http://127.0.0.1:1".to_string(), Duration::from_millis(200))?;

        let user = client.get_user_by_user_id(1).await;

        assert!(user.is_some_and(|user| user.is_fallback()));

        Ok(())
    }
}
