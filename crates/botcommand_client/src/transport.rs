//! HTTP transport shared by every remote call.

use crate::ClientConfig;
use botcommand_core::{Session, Token};
use botcommand_error::{
    AuthError, AuthErrorKind, DashboardError, DashboardResult, TransportError, TransportErrorKind,
};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

/// Sends requests to the bot backend on behalf of the signed-in session.
///
/// Every request carries `Authorization: Bearer <token>` while the session
/// holds a token. A 401 response expires the session, which sends the
/// dashboard back to the login view.
#[derive(Debug, Clone)]
pub struct Transport {
    config: ClientConfig,
    client: reqwest::Client,
    session: Session,
}

impl Transport {
    /// Create a transport for `config` acting for `session`.
    #[instrument(skip_all, fields(base_url = %config.base_url()))]
    pub fn new(config: ClientConfig, session: Session) -> DashboardResult<Self> {
        debug!("Creating transport");

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(*config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                TransportError::new(TransportErrorKind::Request(format!(
                    "Failed to create HTTP client: {}",
                    e
                )))
            })?;

        Ok(Self {
            config,
            client,
            session,
        })
    }

    /// Connection settings.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Session whose token is attached to requests.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Send a request and decode the JSON response.
    #[instrument(skip(self, body))]
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> DashboardResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.url(path);
        debug!("Making request to {}", url);

        let mut req = self.client.request(method, &url);
        if let Some(bearer) = self.session.bearer_header() {
            req = req.header(AUTHORIZATION, bearer);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| self.send_error(e))?;
        self.read_response(response, true).await
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> DashboardResult<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    /// POST a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> DashboardResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// PUT a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> DashboardResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// DELETE a resource.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> DashboardResult<T> {
        self.request::<T, ()>(Method::DELETE, path, None).await
    }

    /// Exchange credentials for a token with a form-encoded `POST /token`.
    ///
    /// The token is stored in the session on success. A 401 here means the
    /// credentials were rejected, so it does not expire the session.
    #[instrument(skip(self, password))]
    pub async fn login_form(&self, username: &str, password: &str) -> DashboardResult<Token> {
        let url = self.config.url("/token");
        debug!("Attempting login to {}", url);

        let response = self
            .client
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        let token: Token = self.read_response(response, false).await?;
        self.session.store_token(token.access_token.clone())?;
        debug!("Login successful");
        Ok(token)
    }

    /// Message reported when the server cannot be reached.
    pub fn unreachable_message(&self) -> String {
        format!(
            "Cannot connect to the server at {}. Please check your internet connection or try again later.",
            self.config.base_url()
        )
    }

    fn send_error(&self, e: reqwest::Error) -> DashboardError {
        if e.is_builder() {
            error!("Error setting up request: {}", e);
            TransportError::new(TransportErrorKind::Request(e.to_string())).into()
        } else {
            error!("No response received: {}", e);
            TransportError::new(TransportErrorKind::NoResponse(self.unreachable_message())).into()
        }
    }

    async fn read_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        expire_on_unauthorized: bool,
    ) -> DashboardResult<T> {
        let status = response.status();
        debug!(status = status.as_u16(), "Received response");

        if status == StatusCode::UNAUTHORIZED && expire_on_unauthorized {
            warn!("Unauthorized, clearing session");
            self.session.expire()?;
            return Err(AuthError::new(AuthErrorKind::Unauthorized).into());
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Server returned error");
            return Err(TransportError::status(status.as_u16(), extract_detail(&body)).into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            TransportError::new(TransportErrorKind::Decode(e.to_string()))
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            error!("Failed to parse response: {}", e);
            TransportError::new(TransportErrorKind::Decode(e.to_string())).into()
        })
    }
}

/// The `detail` field of an error body, when the body is JSON and has one.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
