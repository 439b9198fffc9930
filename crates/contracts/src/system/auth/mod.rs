use crate::shared::envelope::ApiEnvelope;
use serde::{Deserialize, Serialize};

/// localStorage key of the bearer token
pub const ACCESS_TOKEN_KEY: &str = "token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

pub const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub type LoginResponse = ApiEnvelope<TokenPair>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let body = r#"{"data":{"access_token":"a","refresh_token":"r"}}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.access_token, "a");
        assert_eq!(response.data.refresh_token, "r");
    }

    #[test]
    fn test_login_request_keys() {
        let request = LoginRequest {
            login: "admin".into(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["login"], "admin");
        assert_eq!(json["password"], "secret");
    }
}
