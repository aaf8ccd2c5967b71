use serde::{Deserialize, Serialize};

/// Envelope used by the reference server for everything except the catalog
/// listing endpoints, whose shapes are fixed by the storefront contract.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}
