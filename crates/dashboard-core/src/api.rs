//! Backend API Seam
//!
//! Abstract interface to the dashboard backend. The web build implements it
//! over `fetch`; tests script it.

use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::models::{Ack, DashboardSnapshot, Envelope, Issue, TrendsData};

/// Backend operations used by the dashboard
///
/// `?Send`: browser futures live on the single UI thread.
#[async_trait(?Send)]
pub trait DashboardApi {
    /// `POST /auth/login?password=...`
    async fn login(&self, password: &str) -> ApiResult<Ack>;

    /// `GET /dashboard`
    async fn dashboard(&self) -> ApiResult<Envelope<DashboardSnapshot>>;

    /// `GET /issues`
    async fn issues(&self) -> ApiResult<Envelope<Vec<Issue>>>;

    /// `GET /trends`
    async fn trends(&self) -> ApiResult<Envelope<TrendsData>>;

    /// `POST /refresh`, starts backend recomputation
    async fn trigger_refresh(&self) -> ApiResult<Ack>;
}

#[async_trait(?Send)]
impl<T: DashboardApi + ?Sized> DashboardApi for Rc<T> {
    async fn login(&self, password: &str) -> ApiResult<Ack> {
        (**self).login(password).await
    }

    async fn dashboard(&self) -> ApiResult<Envelope<DashboardSnapshot>> {
        (**self).dashboard().await
    }

    async fn issues(&self) -> ApiResult<Envelope<Vec<Issue>>> {
        (**self).issues().await
    }

    async fn trends(&self) -> ApiResult<Envelope<TrendsData>> {
        (**self).trends().await
    }

    async fn trigger_refresh(&self) -> ApiResult<Ack> {
        (**self).trigger_refresh().await
    }
}

/// Decode a response body after the transport reported `status`.
///
/// Non-2xx statuses are transport failures whatever the body says.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ok() {
        let ack: Ack = decode_response(200, r#"{"success": true, "message": "started"}"#).unwrap();
        assert!(ack.success);
        assert_eq!(ack.message.as_deref(), Some("started"));
    }

    #[test]
    fn test_decode_status_error_wins() {
        let result: ApiResult<Ack> = decode_response(503, r#"{"success": true}"#);
        assert_eq!(result, Err(ApiError::Status(503)));
    }

    #[test]
    fn test_decode_malformed_body() {
        let result: ApiResult<Ack> = decode_response(200, "<html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
