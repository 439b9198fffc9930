//! Network side of the entity form

use crate::shared::api_utils::ApiClient;
use contracts::shared::api_error::ApiError;
use contracts::shared::form::{collect_options, OptionsMap, SubmitMode, SubmitRequest};
use contracts::shared::metadata::ReferenceSource;
use futures::future::join_all;
use web_sys::File;

/// Fetches every reference collection in parallel; one failure fails all
pub async fn fetch_references(
    api: ApiClient,
    sources: Vec<ReferenceSource>,
    token: Option<String>,
) -> Result<OptionsMap, ApiError> {
    let requests = sources
        .iter()
        .map(|source| api.fetch_list(source.resource, token.clone()));
    let results = join_all(requests).await;
    collect_options(&sources, results)
}

/// Sends the request and applies the create/update success rule
pub async fn submit(
    api: ApiClient,
    mode: SubmitMode,
    request: SubmitRequest<File>,
) -> Result<(), ApiError> {
    let status = api.send(request).await?;
    if mode.is_success(status) {
        Ok(())
    } else {
        Err(ApiError::Http {
            status,
            message: format!("HTTP {}", status),
        })
    }
}
