//! Backend HTTP Client
//!
//! `DashboardApi` over the browser's fetch, via gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use dashboard_core::api::{decode_response, DashboardApi};
use dashboard_core::models::{Ack, DashboardSnapshot, Envelope, Issue, TrendsData};
use dashboard_core::{ApiError, ApiResult, DashboardConfig};

#[derive(Debug, Clone)]
pub struct HttpApi {
    config: DashboardConfig,
}

impl HttpApi {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.config.endpoint(path);
        log::debug!("[API] GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_body(response).await
    }
}

async fn read_body<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_response(status, &body)
}

#[async_trait(?Send)]
impl DashboardApi for HttpApi {
    async fn login(&self, password: &str) -> ApiResult<Ack> {
        // URL carries the password, keep it out of the log
        log::debug!("[API] POST /auth/login");
        let response = Request::post(&self.config.login_url(password))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_body(response).await
    }

    async fn dashboard(&self) -> ApiResult<Envelope<DashboardSnapshot>> {
        self.get("/dashboard").await
    }

    async fn issues(&self) -> ApiResult<Envelope<Vec<Issue>>> {
        self.get("/issues").await
    }

    async fn trends(&self) -> ApiResult<Envelope<TrendsData>> {
        self.get("/trends").await
    }

    async fn trigger_refresh(&self) -> ApiResult<Ack> {
        let url = self.config.endpoint("/refresh");
        log::debug!("[API] POST {}", url);
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_body(response).await
    }
}
