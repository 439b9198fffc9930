//! Error taxonomy for calls against the REST backend

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No access token in the session store; no request was issued
    #[error("Please login.")]
    MissingSession,
    /// 401 from the server
    #[error("Session expired. Please login again.")]
    Unauthorized,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-2xx response, taking the body's `message`
    /// field when there is one
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let message = crate::shared::envelope::error_message(body)
            .unwrap_or_else(|| format!("HTTP {}", status));
        Self::Http { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Toast body for this error: the server's message when it sent one,
    /// otherwise the caller's generic text
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::MissingSession => self.to_string(),
            Self::Http { message, .. } if !message.starts_with("HTTP ") => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(400, r#"{"message":"title_en should not be empty"}"#),
            ApiError::Http {
                status: 400,
                message: "title_en should not be empty".into()
            }
        );
        assert_eq!(
            ApiError::from_status(500, "<html>oops</html>"),
            ApiError::Http {
                status: 500,
                message: "HTTP 500".into()
            }
        );
    }

    #[test]
    fn test_user_message() {
        let server = ApiError::from_status(409, r#"{"message":"Category already exists"}"#);
        assert_eq!(server.user_message("Failed to add category"), "Category already exists");

        let bare = ApiError::from_status(500, "");
        assert_eq!(bare.user_message("Failed to add category"), "Failed to add category");

        let network = ApiError::Network("offline".into());
        assert_eq!(network.user_message("Failed to delete FAQ"), "Failed to delete FAQ");
        assert_eq!(ApiError::MissingSession.user_message("x"), "Please login.");
    }
}
