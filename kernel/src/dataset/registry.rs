//! `DatasetRegistryV1`: owned datasets plus a static alias map.
//!
//! The alias map is fixed at construction time. Lookups by alias resolve to a
//! [`DatasetId`] and borrow the one backing value, so a sort performed through
//! `ARR_1` is what a later reverse through `ARR_3` sees.

use std::collections::BTreeMap;

/// Index of a backing dataset inside a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatasetId(usize);

/// Backing value of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetValue {
    /// Fixed-length integer array. Mutated in place, never resized.
    Ints(Vec<i32>),
    /// Immutable string constant.
    Text(String),
}

impl DatasetValue {
    /// The kind name used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> DatasetKind {
        match self {
            Self::Ints(_) => DatasetKind::Ints,
            Self::Text(_) => DatasetKind::Text,
        }
    }
}

/// Dataset kind, for lookup checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    /// Integer array.
    Ints,
    /// String constant.
    Text,
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ints => f.write_str("ints"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Error type for registry construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// Two datasets were declared with the same name.
    #[error("dataset {name} declared twice")]
    DuplicateDataset { name: String },
    /// An alias was declared more than once.
    #[error("alias {alias} declared twice")]
    DuplicateAlias { alias: String },
    /// An alias points at a dataset that does not exist.
    #[error("alias {alias} refers to unknown dataset {target}")]
    DanglingAlias { alias: String, target: String },
    /// Lookup of an alias that was never declared.
    #[error("unknown dataset alias {alias}")]
    UnknownAlias { alias: String },
    /// The alias resolved to a dataset of a different kind.
    #[error("alias {alias} is {actual}, expected {expected}")]
    KindMismatch {
        alias: String,
        expected: DatasetKind,
        actual: DatasetKind,
    },
}

/// Harness-scoped datasets with a static alias map.
#[derive(Debug, Clone)]
pub struct DatasetRegistryV1 {
    names: Vec<String>,
    values: Vec<DatasetValue>,
    aliases: BTreeMap<String, DatasetId>,
}

impl DatasetRegistryV1 {
    /// Build a registry from named datasets and `(alias, dataset_name)` pairs.
    ///
    /// Every dataset name is implicitly an alias of itself.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] on duplicate names/aliases or an alias that
    /// does not resolve.
    pub fn new(
        datasets: Vec<(String, DatasetValue)>,
        aliases: Vec<(String, String)>,
    ) -> Result<Self, DatasetError> {
        let mut names = Vec::with_capacity(datasets.len());
        let mut values = Vec::with_capacity(datasets.len());
        let mut alias_map: BTreeMap<String, DatasetId> = BTreeMap::new();

        for (name, value) in datasets {
            let id = DatasetId(values.len());
            if alias_map.insert(name.clone(), id).is_some() {
                return Err(DatasetError::DuplicateDataset { name });
            }
            names.push(name);
            values.push(value);
        }

        for (alias, target) in aliases {
            let Some(&id) = alias_map.get(&target) else {
                return Err(DatasetError::DanglingAlias { alias, target });
            };
            if alias_map.contains_key(&alias) {
                return Err(DatasetError::DuplicateAlias { alias });
            }
            alias_map.insert(alias, id);
        }

        Ok(Self {
            names,
            values,
            aliases: alias_map,
        })
    }

    /// Resolve an alias (or a dataset's own name) to its backing identity.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UnknownAlias`] if the alias is not declared.
    pub fn resolve(&self, alias: &str) -> Result<DatasetId, DatasetError> {
        self.aliases
            .get(alias)
            .copied()
            .ok_or_else(|| DatasetError::UnknownAlias {
                alias: alias.to_string(),
            })
    }

    /// Whether two aliases share one backing dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UnknownAlias`] if either alias is undeclared.
    pub fn same_backing(&self, a: &str, b: &str) -> Result<bool, DatasetError> {
        Ok(self.resolve(a)? == self.resolve(b)?)
    }

    /// Name of the backing dataset behind an id.
    #[must_use]
    pub fn dataset_name(&self, id: DatasetId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    /// Read-only view of an integer dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the alias is unknown or not an array.
    pub fn ints(&self, alias: &str) -> Result<&[i32], DatasetError> {
        let id = self.resolve(alias)?;
        match &self.values[id.0] {
            DatasetValue::Ints(values) => Ok(values),
            other => Err(kind_mismatch(alias, DatasetKind::Ints, other)),
        }
    }

    /// Mutable view of an integer dataset. The slice length is fixed.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the alias is unknown or not an array.
    pub fn ints_mut(&mut self, alias: &str) -> Result<&mut [i32], DatasetError> {
        let id = self.resolve(alias)?;
        match &mut self.values[id.0] {
            DatasetValue::Ints(values) => Ok(values.as_mut_slice()),
            other => Err(kind_mismatch(alias, DatasetKind::Ints, other)),
        }
    }

    /// A string constant.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the alias is unknown or not text.
    pub fn text(&self, alias: &str) -> Result<&str, DatasetError> {
        let id = self.resolve(alias)?;
        match &self.values[id.0] {
            DatasetValue::Text(s) => Ok(s),
            other => Err(kind_mismatch(alias, DatasetKind::Text, other)),
        }
    }

    /// Current contents of every dataset keyed by dataset name.
    #[must_use]
    pub fn snapshot(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (name, value) in self.names.iter().zip(&self.values) {
            let json = match value {
                DatasetValue::Ints(values) => serde_json::json!(values),
                DatasetValue::Text(s) => serde_json::json!(s),
            };
            map.insert(name.clone(), json);
        }
        serde_json::Value::Object(map)
    }
}

fn kind_mismatch(alias: &str, expected: DatasetKind, actual: &DatasetValue) -> DatasetError {
    DatasetError::KindMismatch {
        alias: alias.to_string(),
        expected,
        actual: actual.kind(),
    }
}
