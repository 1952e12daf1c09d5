//! HTTP client for the Auth & Analysis service.
//!
//! The workflows only see [`AuthApi`] and [`AnalysisApi`]; [`ServiceClient`]
//! is the browser implementation. Status and body interpretation lives in
//! plain functions so it behaves the same for every caller.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use url::form_urlencoded;
use web_sys::{File, FormData};

use crate::config::api_base_url;
use crate::types::{Credential, OperationFailure, OperationResult, ResultSet, UploadRequest};

/// Token and registration endpoints.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /token`, returning the bearer token.
    async fn request_token(&self, username: &str, password: &str) -> OperationResult<Credential>;

    /// `POST /register`.
    async fn register(&self, username: &str, password: &str) -> OperationResult<()>;
}

/// Analysis endpoint.
#[allow(async_fn_in_trait)]
pub trait AnalysisApi {
    /// File handle carried by an upload.
    type File;

    /// `POST /analyze` with the file and the credential captured at issue time.
    async fn analyze(&self, request: UploadRequest<Self::File>) -> OperationResult<ResultSet>;
}

/// `gloo-net` client bound to one base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceClient {
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the configured endpoint.
    pub fn from_config() -> Self {
        Self::new(api_base_url())
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(builder: Result<Request, gloo_net::Error>) -> OperationResult<(u16, String)> {
        let request =
            builder.map_err(|e| OperationFailure::transport(format!("Failed to build request: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| OperationFailure::transport(format!("HTTP request failed: {}", e)))?;
        read_response(response).await
    }
}

async fn read_response(response: Response) -> OperationResult<(u16, String)> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| OperationFailure::transport(format!("Failed to read response: {}", e)))?;
    Ok((status, body))
}

impl AuthApi for ServiceClient {
    async fn request_token(&self, username: &str, password: &str) -> OperationResult<Credential> {
        let body = encode_login_form(username, password);
        let builder = Request::post(&self.endpoint("/token"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body);
        let (status, body) = Self::send(builder).await?;
        interpret_token_response(status, &body)
    }

    async fn register(&self, username: &str, password: &str) -> OperationResult<()> {
        let builder = Request::post(&self.endpoint("/register"))
            .json(&json!({ "username": username, "password": password }));
        let (status, body) = Self::send(builder).await?;
        interpret_status(status, &body)
    }
}

impl AnalysisApi for ServiceClient {
    type File = File;

    async fn analyze(&self, request: UploadRequest<File>) -> OperationResult<ResultSet> {
        let form_data = FormData::new()
            .map_err(|e| OperationFailure::transport(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob_and_filename("file", &request.file, &request.file_name)
            .map_err(|e| OperationFailure::transport(format!("Failed to append file: {:?}", e)))?;

        let builder = authorize(Request::post(&self.endpoint("/analyze")), request.credential.as_ref());
        let (status, body) = Self::send(builder.body(form_data)).await?;
        interpret_analysis_response(status, &body)
    }
}

fn authorize(builder: RequestBuilder, credential: Option<&Credential>) -> RequestBuilder {
    match credential {
        Some(credential) => builder.header("Authorization", &credential.bearer_header()),
        None => builder,
    }
}

/// `application/x-www-form-urlencoded` body for `/token`.
pub fn encode_login_form(username: &str, password: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("username", username)
        .append_pair("password", password)
        .finish()
}

/// The service's `detail` message, if the body carries one.
///
/// Validation errors come as a list of objects; their `msg` fields are joined.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// Non-2xx statuses become [`OperationFailure::rejected`].
pub fn interpret_status(status: u16, body: &str) -> OperationResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(OperationFailure::rejected(status, extract_detail(body)))
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

pub fn interpret_token_response(status: u16, body: &str) -> OperationResult<Credential> {
    interpret_status(status, body)?;
    let token: TokenResponse = serde_json::from_str(body)
        .map_err(|e| OperationFailure::malformed(format!("token response: {}", e)))?;
    if token.access_token.trim().is_empty() {
        return Err(OperationFailure::malformed("token response: empty access_token"));
    }
    Ok(Credential::new(token.access_token))
}

pub fn interpret_analysis_response(status: u16, body: &str) -> OperationResult<ResultSet> {
    interpret_status(status, body)?;
    serde_json::from_str(body).map_err(|e| OperationFailure::malformed(format!("analysis response: {}", e)))
}
