use serde::{Deserialize, Serialize};

/// Error body returned by the API on non-success responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable message
    #[serde(alias = "error")]
    pub title: String,

    #[serde(default)]
    pub status: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_accepts_both_shapes() {
        let a: ErrorResponse = serde_json::from_str(r#"{"title":"Game not found","status":404}"#).unwrap();
        assert_eq!(a.title, "Game not found");
        assert_eq!(a.status, Some(404));

        let b: ErrorResponse = serde_json::from_str(r#"{"error":"Forbidden"}"#).unwrap();
        assert_eq!(b.title, "Forbidden");
        assert_eq!(b.status, None);
    }
}
