use crate::models::ProductSummary;

/// Where the storefront should go next after a product action.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    ProductDetail { id: String },
    /// The product rides along as in-memory state, it is not persisted.
    Checkout { product: Box<ProductSummary> },
}

impl Navigation {
    pub fn path(&self) -> String {
        match self {
            Navigation::ProductDetail { id } => format!("/products/{id}"),
            Navigation::Checkout { .. } => "/checkout".to_string(),
        }
    }
}

/// Toast-style feedback for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}
