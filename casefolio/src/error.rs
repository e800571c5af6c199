//! Error type of a generation run

use crate::fonts::FontError;
use crate::host::HostError;
use thiserror::Error;

/// Errors that abort a generation run
#[derive(Error, Debug)]
pub enum SyncError {
    /// No usable font; raised before the document is touched
    #[error("{0}")]
    Fonts(#[from] FontError),

    /// The embedded section catalog is malformed
    #[error("section catalog could not be parsed: {0}")]
    Catalog(#[from] toml::de::Error),

    /// A host primitive failed after mutation had begun
    #[error("document update failed: {0}")]
    Host(#[from] HostError),
}
