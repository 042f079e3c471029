//! Type mapping between catalog column types and target-language types.

use indexmap::IndexMap;

/// Default PostgreSQL to Go mapping.
const POSTGRES_GO: &[(&str, &str)] = &[
    ("bigint", "int64"),
    ("integer", "int"),
    ("smallint", "int"),
    ("double precision", "float64"),
    ("real", "float32"),
    ("character varying", "string"),
    ("character", "string"),
    ("text", "string"),
    ("bytea", "[]byte"),
    ("date", "time.Time"),
    ("datetime", "time.Time"),
    ("timestamp", "time.Time"),
    ("timestamp with time zone", "time.Time"),
    ("timestamp without time zone", "time.Time"),
    ("numeric", "float64"),
    ("decimal", "float64"),
    ("bit", "uint64"),
    ("boolean", "bool"),
];

/// Strip a `(precision)` or `(length)` suffix from a declared type
/// (e.g., "character varying(255)" -> "character varying").
pub fn normalize_type(declared: &str) -> &str {
    let base = match declared.find('(') {
        Some(i) => &declared[..i],
        None => declared,
    };
    base.trim_end()
}

/// Immutable lookup table from normalized database type names to target types.
///
/// Unmapped types resolve to an empty string rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    entries: IndexMap<String, String>,
}

impl TypeMap {
    /// Create a map from explicit entries.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The built-in PostgreSQL to Go table.
    pub fn postgres_go() -> Self {
        Self::new(POSTGRES_GO.iter().copied())
    }

    /// Return a copy with the given entries added or replaced.
    pub fn with_overrides<K, V>(&self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = self.entries.clone();
        for (k, v) in overrides {
            entries.insert(k.into(), v.into());
        }
        Self { entries }
    }

    /// Look up a declared type, `None` when it has no entry.
    pub fn lookup(&self, declared: &str) -> Option<&str> {
        self.entries
            .get(normalize_type(declared))
            .map(String::as_str)
    }

    /// Resolve a declared type, yielding `""` when it has no entry.
    pub fn resolve(&self, declared: &str) -> &str {
        self.lookup(declared).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        Self::postgres_go()
    }
}
