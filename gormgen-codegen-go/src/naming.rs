//! Go naming conventions for generated models and handlers.

use gormgen_core::{lower_first, title_case_words, to_struct_name};

/// Go keywords, plus the identifiers every generated handler refers to
/// after declaring its record variables.
pub const GO_RESERVED: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
    // predeclared
    "nil",
    // imported packages
    "gin",
    "http",
    // handler locals
    "c",
    "crud",
    "db",
    "err",
    "id",
];

/// Escape a local variable name that would shadow a keyword or handler local.
pub fn safe_local(name: &str) -> String {
    escape_local(name, &[])
}

fn escape_local(name: &str, taken: &[&str]) -> String {
    if GO_RESERVED.contains(&name) || taken.contains(&name) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}

/// Exported Go field name for a column (e.g., "created_at" -> "Created_at").
pub fn to_field_name(column: &str) -> String {
    title_case_words(column)
}

/// Route segment for a model (e.g., "UserAccounts" -> "userAccounts").
pub fn to_route_segment(model: &str) -> String {
    lower_first(model)
}

/// Singular variable for a model: the route segment without its last
/// character (e.g., "UserAccounts" -> "userAccount").
///
/// This is a naive heuristic: "Statuses" becomes "statuse" and "People"
/// becomes "peopl".
pub fn to_singular_var(model: &str) -> String {
    let mut var = to_route_segment(model);
    var.pop();
    var
}

/// Every name derived from one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelNames {
    /// Raw table name, used for the output file name.
    pub table: String,
    /// Exported struct name, also the prefix of every handler.
    pub model: String,
    /// Path segment of the route group.
    pub route: String,
    /// Local variable holding one record.
    pub singular: String,
    /// Local variable holding a record list, and the route group variable.
    pub plural: String,
}

impl ModelNames {
    pub fn from_table(table: &str) -> Self {
        Self::from_table_avoiding(table, &[])
    }

    /// Like [`ModelNames::from_table`], also escaping locals named in `taken`.
    pub fn from_table_avoiding(table: &str, taken: &[&str]) -> Self {
        let model = to_struct_name(table);
        let route = to_route_segment(&model);
        let singular = match to_singular_var(&model) {
            // one-letter models would leave nothing to name the record
            s if s.is_empty() => route.clone(),
            s => s,
        };

        Self {
            table: table.to_string(),
            singular: escape_local(&singular, taken),
            plural: escape_local(&route, taken),
            model,
            route,
        }
    }

    /// Handler or registrar symbol, e.g. `UserAccountsFetchOne`.
    pub fn symbol(&self, suffix: &str) -> String {
        format!("{}{}", self.model, suffix)
    }
}
