#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bridge discovery failed: {0}")]
    Discovery(String),

    #[error("Bridge returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Unexpected bridge response: {0}")]
    MalformedResponse(String),

    #[error("Light not found: {0}")]
    LightNotFound(String),

    #[error("{0}")]
    NotConfigured(String),

    #[error("Model request failed: {message}")]
    Llm {
        message: String,
        status: Option<u16>,
    },

    #[error("Keychain error: {0}")]
    Keychain(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::NotConfigured(_) | AppError::Keychain(_) => 2,
            AppError::LightNotFound(_) => 3,
            AppError::Discovery(_) | AppError::Upstream { .. } => 4,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Discovery(_) => "discovery",
            AppError::Upstream { .. } => "upstream",
            AppError::MalformedResponse(_) => "malformed_response",
            AppError::LightNotFound(_) => "light_not_found",
            AppError::NotConfigured(_) => "not_configured",
            AppError::Llm { .. } => "llm",
            AppError::Keychain(_) => "keychain",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Http(_) => "http",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        });
        if let Some(status) = self.status() {
            obj["status"] = serde_json::json!(status);
        }
        obj
    }

    fn status(&self) -> Option<u16> {
        match self {
            AppError::Upstream { status, .. } => Some(*status),
            AppError::Llm { status, .. } => *status,
            AppError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_json_carries_status() {
        let err = AppError::Upstream {
            status: 503,
            message: "bridge busy".into(),
        };
        let json = err.to_json();
        assert_eq!(json["error"], "upstream");
        assert_eq!(json["status"], 503);
        assert_eq!(json["message"], "Bridge returned 503: bridge busy");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::NotConfigured("x".into()).exit_code(), 2);
        assert_eq!(AppError::LightNotFound("x".into()).exit_code(), 3);
        assert_eq!(AppError::Discovery("x".into()).exit_code(), 4);
        assert_eq!(AppError::InvalidInput("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_json_without_status() {
        let json = AppError::MalformedResponse("light id 'abc'".into()).to_json();
        assert_eq!(json["error"], "malformed_response");
        assert!(json.get("status").is_none());
    }
}
