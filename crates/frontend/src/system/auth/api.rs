use contracts::shared::api_error::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse, TokenPair, LOGIN_PATH};

use crate::shared::api_utils::ApiClient;

/// Login with login and password
pub async fn login(api: ApiClient, login: String, password: String) -> Result<TokenPair, ApiError> {
    let request = LoginRequest { login, password };
    let response: LoginResponse = api.post_json(LOGIN_PATH, &request, None).await?;

    if response.data.access_token.trim().is_empty() {
        return Err(ApiError::Decode("Login failed".to_string()));
    }
    Ok(response.data)
}
