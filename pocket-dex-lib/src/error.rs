use pocket_dex_catalog::CatalogError;
use thiserror::Error;

/// Errors from loading or updating one of the dex catalogs.
#[derive(Debug, Error)]
pub enum DexError {
    /// Engine error while loading, querying or mutating a catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// I/O error outside the catalog data itself (settings file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A name that is not one of the dex kinds
    #[error("unknown dex: '{0}'")]
    UnknownDex(String),

    /// A possession status outside unknown/seen/owned
    #[error("invalid possession status '{0}' (expected unknown, seen or owned)")]
    InvalidPossession(String),

    /// The settings file has a shape that cannot be updated
    #[error("settings error: {0}")]
    Settings(String),
}

impl DexError {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

pub type DexResult<T> = Result<T, DexError>;
