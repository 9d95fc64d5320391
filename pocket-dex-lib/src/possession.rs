//! Possession status of a species: the one mutable field of the pokedex.

use pocket_dex_catalog::Record;

use crate::error::{DexError, DexResult};

/// Column holding the status.
pub const OWNED_FIELD: &str = "owned";

/// How far the player has got with a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Possession {
    #[default]
    Unknown,
    Seen,
    Owned,
}

const ALL_POSSESSIONS: &[Possession] = &[Possession::Unknown, Possession::Seen, Possession::Owned];

impl Possession {
    /// Lowercase form as stored in the record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Seen => "seen",
            Self::Owned => "owned",
        }
    }

    pub fn all() -> &'static [Possession] {
        ALL_POSSESSIONS
    }
}

impl std::fmt::Display for Possession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Possession {
    type Err = DexError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_POSSESSIONS
            .iter()
            .copied()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| DexError::InvalidPossession(s.to_string()))
    }
}

/// Read a species record's status.
pub fn possession(record: &Record) -> DexResult<Possession> {
    record.choice(OWNED_FIELD)?.parse()
}

/// Update a species record's status. The record normalizes and validates it
/// against its schema as well.
pub fn set_possession(record: &mut Record, status: Possession) -> DexResult<()> {
    record.set_choice(OWNED_FIELD, status.as_str())?;
    Ok(())
}
