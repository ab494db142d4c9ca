use thiserror::Error;

/// An asset id could not be resolved into a template.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssetLoadError {
    #[error("asset not found: {asset_id}")]
    NotFound { asset_id: String },

    #[error("failed to parse asset {asset_id}: {reason}")]
    Parse { asset_id: String, reason: String },
}

impl AssetLoadError {
    /// The asset id that was requested.
    pub fn asset_id(&self) -> &str {
        match self {
            AssetLoadError::NotFound { asset_id } | AssetLoadError::Parse { asset_id, .. } => {
                asset_id
            }
        }
    }
}

/// The host refused to create an instance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstantiationError {
    #[error("host rejected instance {name}: {reason}")]
    Rejected { name: String, reason: String },

    #[error("cannot create {name}: instance limit of {limit} reached")]
    CapacityExceeded { name: String, limit: usize },
}

/// Failure to provision a single descriptor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProvisionError {
    #[error(transparent)]
    AssetLoad(#[from] AssetLoadError),

    #[error(transparent)]
    Instantiation(#[from] InstantiationError),

    #[error("session ended while {asset_id} was loading")]
    SessionEnded { asset_id: String },
}
