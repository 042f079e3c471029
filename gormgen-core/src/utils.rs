//! Shared identifier utilities for code generation.

/// Uppercase the first character of a word, leaving the rest untouched
/// (e.g., "accountId" -> "AccountId").
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character only (e.g., "UserAccounts" -> "userAccounts").
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Derive a type name from a raw table name (e.g., "user_accounts" -> "UserAccounts").
///
/// Underscores become word breaks, every word is title-cased and the breaks
/// are removed.
pub fn to_struct_name(table: &str) -> String {
    table
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

/// Uppercase the first letter of every word, keeping everything else
/// (e.g., "created_at" -> "Created_at", "first name" -> "First Name").
///
/// Letters, digits and underscores are word characters, so underscores do
/// not start a new word.
pub fn title_case_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = is_word_separator(c);
    }
    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}
