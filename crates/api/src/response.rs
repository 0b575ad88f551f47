//! Shared response envelope for API handlers.
//!
//! Every response uses the `{ "success": bool, "data": ..., "message": ... }`
//! envelope. Handlers compose [`Envelope::success`] and [`Envelope::error`]
//! directly instead of inheriting from a shared controller; there is no other
//! way to build a response body.

use serde::Serialize;

/// Standard `{ success, data, message }` response envelope.
///
/// `data` is omitted from the serialized form on the error path.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a success payload with a human-readable message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }
}

impl Envelope<()> {
    /// Build an error envelope carrying only a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let envelope = Envelope::success(vec![1, 2], "Items retrieved successfully");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "data": [1, 2],
                "message": "Items retrieved successfully",
            })
        );
    }

    #[test]
    fn error_envelope_omits_data() {
        let envelope = Envelope::error("Products not found");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "message": "Products not found",
            })
        );
    }
}
