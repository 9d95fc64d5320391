/// Identifiers for the three catalogs.
///
/// Centralizes each catalog's names, aliases, default data file and
/// built-in schema so the shell never matches on strings itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DexKind {
    Species,
    Items,
    Moves,
}

const ALL_DEX_KINDS: &[DexKind] = &[DexKind::Species, DexKind::Items, DexKind::Moves];

impl DexKind {
    /// Canonical short name, used for CLI arguments, settings keys and
    /// schema override file names.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Species => "species",
            Self::Items => "items",
            Self::Moves => "moves",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Species => "Pokedex",
            Self::Items => "Itemdex",
            Self::Moves => "Battledex",
        }
    }

    /// All accepted names (case-insensitive). The short name comes first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Species => &["species", "pokedex", "pokemon", "dex"],
            Self::Items => &["items", "itemdex", "item"],
            Self::Moves => &["moves", "battledex", "movedex", "move"],
        }
    }

    /// File looked for in the working directory when no path is configured.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Species => "pokedex.csv",
            Self::Items => "itemdex.csv",
            Self::Moves => "battledex.csv",
        }
    }

    /// Descriptor used when no override file is present.
    pub fn builtin_schema(&self) -> pocket_dex_catalog::Schema {
        match self {
            Self::Species => crate::species::schema(),
            Self::Items => crate::items::schema(),
            Self::Moves => crate::moves::schema(),
        }
    }

    /// Names of the sort/filter keys, in display order.
    pub fn field_names(&self) -> Vec<&'static str> {
        use pocket_dex_catalog::FieldKey;

        fn names<K: FieldKey>() -> Vec<&'static str> {
            K::all().iter().map(|k| k.name()).collect()
        }

        match self {
            Self::Species => names::<crate::species::SpeciesField>(),
            Self::Items => names::<crate::items::ItemField>(),
            Self::Moves => names::<crate::moves::MoveField>(),
        }
    }

    pub fn all() -> &'static [DexKind] {
        ALL_DEX_KINDS
    }
}

impl std::fmt::Display for DexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for DexKind {
    type Err = crate::error::DexError;

    /// Parse from the short name or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_DEX_KINDS
            .iter()
            .copied()
            .find(|kind| kind.aliases().iter().any(|alias| *alias == lower))
            .ok_or_else(|| crate::error::DexError::UnknownDex(s.to_string()))
    }
}
