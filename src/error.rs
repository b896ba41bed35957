use crate::models::ProviderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunwareError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider error (status {status}): {}", render_provider_errors(.errors))]
    Provider {
        status: u16,
        errors: Vec<ProviderError>,
    },
}

impl RunwareError {
    pub fn is_config(&self) -> bool {
        matches!(self, RunwareError::Config(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, RunwareError::Transport(_))
    }

    /// Structured diagnostics returned by the provider, empty for local failures.
    pub fn provider_errors(&self) -> &[ProviderError] {
        match self {
            RunwareError::Provider { errors, .. } => errors,
            _ => &[],
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RunwareError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn render_provider_errors(errors: &[ProviderError]) -> String {
    let envelope = serde_json::json!({ "errors": errors });
    serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| format!("{:?}", errors))
}

pub type Result<T> = std::result::Result<T, RunwareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display_keeps_fields() {
        let err = RunwareError::Provider {
            status: 400,
            errors: vec![ProviderError {
                code: "invalidWidth".to_string(),
                message: "bad width".to_string(),
                parameter: Some("width".to_string()),
                error_type: Some("validation".to_string()),
                task_type: Some("imageInference".to_string()),
                task_uuid: None,
            }],
        };

        let rendered = err.to_string();
        assert!(rendered.starts_with("Provider error (status 400)"));
        assert!(rendered.contains("\"message\": \"bad width\""));
        assert!(rendered.contains("\"parameter\": \"width\""));
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.provider_errors().len(), 1);
    }

    #[test]
    fn test_local_errors_have_no_provider_details() {
        let err = RunwareError::Config("unsupported width".into());
        assert!(err.is_config());
        assert!(!err.is_transport());
        assert!(err.provider_errors().is_empty());
        assert_eq!(err.status(), None);
    }
}
