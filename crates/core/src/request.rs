use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body accepted by both generation endpoints.
///
/// `filename` is only meaningful for Markdown documentation; the comment
/// endpoint ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Code is required")]
    MissingCode,
}

impl CodeRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Return the source code to document, or fail if it is absent or empty.
    ///
    /// Whitespace-only code is accepted; only the empty string counts as missing.
    pub fn validate(&self) -> Result<&str, ValidationError> {
        match self.code.as_deref() {
            Some(code) if !code.is_empty() => Ok(code),
            _ => Err(ValidationError::MissingCode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_returns_code() {
        let request = CodeRequest::new("print(1)").with_language("python");
        assert_eq!(request.validate(), Ok("print(1)"));
    }

    #[test]
    fn test_missing_code_is_rejected() {
        let request = CodeRequest::default();
        assert_eq!(request.validate(), Err(ValidationError::MissingCode));
    }

    #[test]
    fn test_empty_code_is_rejected() {
        let request = CodeRequest::new("");
        assert_eq!(request.validate(), Err(ValidationError::MissingCode));
    }

    #[test]
    fn test_whitespace_code_passes() {
        let request = CodeRequest::new("  \n");
        assert_eq!(request.validate(), Ok("  \n"));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(ValidationError::MissingCode.to_string(), "Code is required");
    }

    #[test]
    fn test_deserialize_partial_body() {
        let request: CodeRequest = serde_json::from_str(r#"{"language": "rust"}"#).unwrap();
        assert_eq!(request.code, None);
        assert_eq!(request.language.as_deref(), Some("rust"));
        assert_eq!(request.filename, None);
    }

    #[test]
    fn test_deserialize_null_code() {
        let request: CodeRequest = serde_json::from_str(r#"{"code": null}"#).unwrap();
        assert_eq!(request.validate(), Err(ValidationError::MissingCode));
    }
}
