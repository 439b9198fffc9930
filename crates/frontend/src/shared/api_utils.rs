//! HTTP access to the REST backend
//!
//! `ApiClient` is provided through context and is `Copy`, so handlers can
//! move it into `spawn_local` futures freely. Every call attaches the bearer
//! header when a token is given.

use contracts::domain::ResourceKind;
use contracts::shared::api_error::ApiError;
use contracts::shared::config::ConsoleConfig;
use contracts::shared::envelope::extract_list;
use contracts::shared::form::{FormPart, HttpMethod, RequestBody, SubmitRequest};
use contracts::shared::media::resolve_media_url;
use contracts::shared::record::Record;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

#[derive(Clone, Copy)]
pub struct ApiClient {
    config: StoredValue<ConsoleConfig>,
}

impl ApiClient {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Full URL of an API path
    pub fn url(&self, path: &str) -> String {
        self.config.with_value(|c| c.api_url(path))
    }

    /// Absolute URL of a media path returned by the API
    pub fn media_url(&self, path: &str) -> String {
        self.config
            .with_value(|c| resolve_media_url(&c.api.base_url, path))
    }

    /// GET the whole collection of a resource
    pub async fn fetch_list(
        &self,
        resource: ResourceKind,
        token: Option<String>,
    ) -> Result<Vec<Record>, ApiError> {
        let url = self.url(&resource.collection_path());
        log::debug!("GET {}", url);

        let response = with_bearer(Request::get(&url), token.as_deref())
            .send()
            .await
            .map_err(network_error)?;
        let (_, body) = checked_body(response).await?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        extract_list(resource.list_shape(), value)
    }

    /// POST a JSON body and decode the JSON answer
    pub async fn post_json<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("POST {}", url);

        let response = with_bearer(Request::post(&url), token)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        let (_, body) = checked_body(response).await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Sends a prepared create/update request; returns the 2xx status
    pub async fn send(&self, request: SubmitRequest<File>) -> Result<u16, ApiError> {
        let url = self.url(&request.path);
        log::debug!("{} {}", request.method.as_str(), url);

        let builder = with_bearer(builder_for(request.method, &url), Some(&request.bearer));
        let prepared = match &request.body {
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
        }
        .map_err(|e| ApiError::Decode(e.to_string()))?;

        let response = prepared.send().await.map_err(network_error)?;
        let (status, _) = checked_body(response).await?;
        Ok(status)
    }

    pub async fn delete(
        &self,
        resource: ResourceKind,
        id: i64,
        token: Option<String>,
    ) -> Result<(), ApiError> {
        let token = require_token(token)?;
        let url = self.url(&resource.item_path(id));
        log::debug!("DELETE {}", url);

        let response = with_bearer(Request::delete(&url), Some(&token))
            .send()
            .await
            .map_err(network_error)?;
        checked_body(response).await?;
        Ok(())
    }
}

pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

fn builder_for(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Post => Request::post(url),
        HttpMethod::Patch => Request::patch(url),
    }
}

fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token.filter(|t| !t.is_empty()) {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn require_token(token: Option<String>) -> Result<String, ApiError> {
    token
        .filter(|t| !t.trim().is_empty())
        .ok_or(ApiError::MissingSession)
}

/// Status and body text of a 2xx response; other statuses become errors
async fn checked_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await.unwrap_or_default();
    if ok {
        Ok((status, body))
    } else {
        Err(ApiError::from_status(status, &body))
    }
}

fn form_data(parts: &[FormPart<File>]) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => form.append_with_str(name, value),
            FormPart::File { name, file } => {
                form.append_with_blob_and_filename(name, file, &file.name())
            }
        }
        .map_err(js_error)?;
    }
    Ok(form)
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_token() {
        assert_eq!(require_token(None), Err(ApiError::MissingSession));
        assert_eq!(require_token(Some(" ".into())), Err(ApiError::MissingSession));
        assert_eq!(require_token(Some("abc".into())), Ok("abc".into()));
    }
}
