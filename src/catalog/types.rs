use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::matching::{Candidate, find_exact};

use super::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// One model of a make, as stored in the catalog.
pub struct ModelRecord {
    /// Display name, e.g. `"F-150"`.
    pub name: String,
    /// Body type tag, e.g. `"Truck"`.
    #[serde(rename = "type")]
    pub body_type: String,
    /// Ordered sub-tier tags (door counts, cab styles).
    pub subtiers: Vec<String>,
}

impl ModelRecord {
    pub fn new<S>(
        name: impl Into<String>,
        body_type: impl Into<String>,
        subtiers: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            body_type: body_type.into(),
            subtiers: subtiers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Candidate for ModelRecord {
    fn label(&self) -> &str {
        &self.name
    }
}

/// Make name to model list. Read-only once loaded.
///
/// Makes are kept sorted by name. Lookups by make are exact and
/// case-sensitive, matching the keys of the source data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    makes: BTreeMap<String, Vec<ModelRecord>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Replaces any existing entry for `make`.
    pub fn with_make(mut self, make: impl Into<String>, models: Vec<ModelRecord>) -> Self {
        self.makes.insert(make.into(), models);
        self
    }

    /// Decodes and validates catalog JSON.
    pub fn from_json_slice(bytes: &[u8]) -> CatalogResult<Self> {
        let catalog: Catalog = serde_json::from_slice(bytes)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Decodes and validates catalog JSON.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Self::from_json_slice(json.as_bytes())
    }

    /// Rejects blank make or model names.
    pub fn validate(&self) -> CatalogResult<()> {
        for (make, models) in &self.makes {
            if make.trim().is_empty() {
                return Err(CatalogError::Invalid {
                    reason: "make name is empty".to_string(),
                });
            }
            if let Some(index) = models.iter().position(|m| m.name.trim().is_empty()) {
                return Err(CatalogError::Invalid {
                    reason: format!("model #{index} of make `{make}` has an empty name"),
                });
            }
        }
        Ok(())
    }

    /// Make names in sorted order.
    pub fn make_names(&self) -> Vec<&str> {
        self.makes.keys().map(String::as_str).collect()
    }

    /// Models of `make`, or an empty slice for an unknown make.
    pub fn models(&self, make: &str) -> &[ModelRecord] {
        self.makes.get(make).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Case-insensitive exact lookup of a model by name within `make`.
    pub fn model(&self, make: &str, name: &str) -> Option<&ModelRecord> {
        find_exact(self.models(make), name)
    }

    pub fn contains_make(&self, make: &str) -> bool {
        self.makes.contains_key(make)
    }

    /// Number of makes.
    pub fn len(&self) -> usize {
        self.makes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.makes.is_empty()
    }

    /// Number of model records across all makes.
    pub fn model_count(&self) -> usize {
        self.makes.values().map(Vec::len).sum()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of make names to model lists")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut makes = BTreeMap::new();
        while let Some((make, models)) = access.next_entry::<String, Vec<ModelRecord>>()? {
            match makes.entry(make) {
                Entry::Occupied(entry) => {
                    return Err(de::Error::custom(format_args!(
                        "duplicate make `{}`",
                        entry.key()
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(models);
                }
            }
        }
        Ok(Catalog { makes })
    }
}
