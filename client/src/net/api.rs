//! REST API helpers for the admin backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses carry the
//! backend `message` when the body has one so pages can surface it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    ListPayload, LoginRequest, LoginResponse, MessageResponse, Package, PackageDraft, PackageLookup, PackageUpdate,
    Service, ServiceDraft, ServiceUpdate, StatusChange, WhyUsDraft, WhyUsItem, WhyUsUpdate,
};
use crate::state::session::AuthCredentials;

/// Thin handle over the configured base URL. Cheap to clone into async tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminApi {
    base_url: String,
}

impl AdminApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path such as `/fetch-whyUs`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /admin-login`. A 2xx response without a token counts as a refusal.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when no token is issued, or the transport/status error.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthCredentials, ApiError> {
        let response: LoginResponse = self.post_json("/admin-login", request).await?;
        credentials_from_login(response)
    }

    // =========================================================================
    // WHY US
    // =========================================================================

    /// `GET /fetch-whyUs`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn list_why_us(&self) -> Result<Vec<WhyUsItem>, ApiError> {
        let list: ListPayload<WhyUsItem> = self.get_json("/fetch-whyUs", &[]).await?;
        Ok(list.into_vec())
    }

    /// `GET /fetch-whyUs-ById?_id=`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn fetch_why_us(&self, id: &str) -> Result<WhyUsItem, ApiError> {
        self.get_json("/fetch-whyUs-ById", &[("_id", id)]).await
    }

    /// `POST /add-whyus`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn create_why_us(&self, draft: &WhyUsDraft) -> Result<String, ApiError> {
        self.post_message("/add-whyus", draft).await
    }

    /// `POST /update-whyus`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn update_why_us(&self, update: &WhyUsUpdate) -> Result<String, ApiError> {
        self.post_message("/update-whyus", update).await
    }

    // =========================================================================
    // SERVICES
    // =========================================================================

    /// `GET /fetch-admin-app-services`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        let list: ListPayload<Service> = self.get_json("/fetch-admin-app-services", &[]).await?;
        Ok(list.into_vec())
    }

    /// `GET /fetch-service-by-id?id=`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn fetch_service(&self, id: &str) -> Result<Service, ApiError> {
        self.get_json("/fetch-service-by-id", &[("id", id)]).await
    }

    /// `POST /add-app-service`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn create_service(&self, draft: &ServiceDraft) -> Result<String, ApiError> {
        self.post_message("/add-app-service", draft).await
    }

    /// `POST /update-service-by-id`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn update_service(&self, update: &ServiceUpdate) -> Result<String, ApiError> {
        self.post_message("/update-service-by-id", update).await
    }

    /// `POST /change-service-status`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn change_service_status(&self, change: &StatusChange) -> Result<String, ApiError> {
        self.post_message("/change-service-status", change).await
    }

    // =========================================================================
    // PACKAGES
    // =========================================================================

    /// `GET /get-all-packages`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn list_packages(&self) -> Result<Vec<Package>, ApiError> {
        let list: ListPayload<Package> = self.get_json("/get-all-packages", &[]).await?;
        Ok(list.into_vec())
    }

    /// `POST /fetch-package-byID`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn fetch_package(&self, id: &str) -> Result<Package, ApiError> {
        self.post_json("/fetch-package-byID", &PackageLookup { id: id.to_owned() }).await
    }

    /// `POST /add-package`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn create_package(&self, draft: &PackageDraft) -> Result<String, ApiError> {
        self.post_message("/add-package", draft).await
    }

    /// `POST /edit-package`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error.
    pub async fn edit_package(&self, update: &PackageUpdate) -> Result<String, ApiError> {
        self.post_message("/edit-package", update).await
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    async fn post_message<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let response: MessageResponse = self.post_json(path, body).await?;
        Ok(response.message.unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint(path);
            log::debug!("GET {url}");
            let resp = gloo_net::http::Request::get(&url)
                .query(query.iter().copied())
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, query);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint(path);
            log::debug!("POST {url}");
            let resp = gloo_net::http::Request::post(&url)
                .header("Accept", "application/json")
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let message = resp.json::<MessageResponse>().await.ok().and_then(|body| body.message);
        log::warn!("request to {} failed with {status}", resp.url());
        return Err(ApiError::from_status(status, message));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Turn a login response into credentials, treating a missing token as a refusal.
fn credentials_from_login(response: LoginResponse) -> Result<AuthCredentials, ApiError> {
    match response.token {
        Some(token) if !token.trim().is_empty() => Ok(AuthCredentials {
            token,
            details: response.details.unwrap_or(serde_json::Value::Null),
        }),
        _ => Err(ApiError::Rejected(
            response.message.unwrap_or_else(|| "Invalid credentials".to_owned()),
        )),
    }
}
