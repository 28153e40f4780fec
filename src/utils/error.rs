use thiserror::Error;

pub const PRODUCT_ALREADY_HAS_WARRANTY: &str = "El producto ya cuenta con una garantía extendida";
pub const PRODUCT_NOT_ELIGIBLE: &str = "Este producto no cuenta con garantía extendida";

#[derive(Error, Debug)]
pub enum WarrantyError {
    #[error("El producto ya cuenta con una garantía extendida")]
    DuplicateWarranty { code: String },

    #[error("Este producto no cuenta con garantía extendida")]
    IneligibleCode { code: String },

    #[error("Product not found: {code}")]
    ProductNotFound { code: String },

    #[error("Store error: {message}")]
    StoreError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML writing error: {0}")]
    TomlWriteError(#[from] toml::ser::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl WarrantyError {
    /// Rejections decided by the warranty rules themselves, as opposed to
    /// store or configuration failures.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            WarrantyError::DuplicateWarranty { .. } | WarrantyError::IneligibleCode { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WarrantyError>;
