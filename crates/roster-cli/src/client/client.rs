use crate::{ClientError, ClientErrorResult};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use roster_core::{User, UserId};
use serde::de::DeserializeOwned;

/// HTTP client for the remote user REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client with reqwest defaults
    ///
    /// # Arguments
    /// * `base_url` - API root without the `/users` path (e.g., "https://jsonplaceholder.typicode.com")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientErrorResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.client.request(method, &url)
    }

    /// Send a request and return the body text of a 2xx response
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientErrorResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::status(status, &body));
        }

        Ok(body)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientErrorResult<T> {
        let body = self.execute(req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Fetch every user
    pub async fn list_users(&self) -> ClientErrorResult<Vec<User>> {
        let req = self.request(Method::GET, "/users");
        self.execute_json(req).await
    }

    /// Fetch one user by ID
    pub async fn get_user(&self, id: &UserId) -> ClientErrorResult<User> {
        let req = self.request(Method::GET, &format!("/users/{id}"));
        self.execute_json(req).await
    }

    /// Create a user. Any id on the draft is left out of the request.
    pub async fn create_user(&self, draft: &User) -> ClientErrorResult<User> {
        let body = User {
            id: None,
            ..draft.clone()
        };
        let req = self.request(Method::POST, "/users").json(&body);
        self.execute_json(req).await
    }

    /// Replace a user
    pub async fn update_user(&self, id: &UserId, user: &User) -> ClientErrorResult<User> {
        let req = self
            .request(Method::PUT, &format!("/users/{id}"))
            .json(user);
        self.execute_json(req).await
    }

    /// Delete a user. The response body is ignored.
    pub async fn delete_user(&self, id: &UserId) -> ClientErrorResult<()> {
        let req = self.request(Method::DELETE, &format!("/users/{id}"));
        self.execute(req).await?;
        Ok(())
    }
}
