//! YAML loading for schema descriptors.
//!
//! A descriptor names the catalog, its identifier column and the declared
//! fields:
//!
//! ```yaml
//! name: species
//! id_field: number
//! fields:
//!   - { name: type, kind: list }
//!   - { name: base_stats, kind: map, of: integer }
//!   - { name: owned, kind: choice, choices: [unknown, seen, owned] }
//! ```

use std::path::{Path, PathBuf};

use crate::error::{CatalogError, CatalogResult};
use crate::schema::Schema;

impl Schema {
    /// Parse a descriptor held in memory.
    pub fn from_yaml_str(content: &str) -> CatalogResult<Self> {
        serde_yml::from_str(content).map_err(|e| CatalogError::Schema {
            path: "<inline>".to_string(),
            source: e,
        })
    }
}

/// Load one descriptor file.
pub fn load_schema(path: &Path) -> CatalogResult<Schema> {
    let contents = std::fs::read_to_string(path)?;
    serde_yml::from_str(&contents).map_err(|e| CatalogError::Schema {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load `<dir>/<name>.yaml` (or `.yml`) if either exists.
///
/// A missing directory or file is not an error; callers fall back to a
/// built-in schema.
pub fn load_schema_override(dir: &Path, name: &str) -> CatalogResult<Option<Schema>> {
    let Some(path) = override_path(dir, name) else {
        return Ok(None);
    };
    log::debug!("loading '{name}' schema from {}", path.display());
    load_schema(&path).map(Some)
}

fn override_path(dir: &Path, name: &str) -> Option<PathBuf> {
    ["yaml", "yml"]
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, ScalarKind};

    #[test]
    fn test_from_yaml_str() {
        let schema = Schema::from_yaml_str(
            r#"
name: items
id_field: number
fields:
  - { name: name, kind: map }
  - { name: cost, kind: integer }
"#,
        )
        .unwrap();
        assert_eq!(schema.name, "items");
        assert_eq!(schema.kind_of("cost"), FieldKind::Integer);
        assert_eq!(schema.kind_of("name"), FieldKind::Map(ScalarKind::Text));
    }

    #[test]
    fn test_bad_yaml_is_schema_error() {
        let err = Schema::from_yaml_str("name: [unterminated").unwrap_err();
        assert!(matches!(err, CatalogError::Schema { .. }));
    }
}
