use miette::SourceSpan;

/// Go keywords, which cannot name a package.
const GO_KEYWORDS: &[&str] = &[
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
];

/// Why `name` cannot be a Go package name, if it cannot.
pub(crate) fn invalid_package_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("package name is empty"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Some("package name must start with a letter or underscore");
        }
        _ => {}
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("package name may only contain letters, digits and underscores");
    }
    if GO_KEYWORDS.contains(&name) {
        return Some("package name is a Go keyword");
    }
    None
}

/// Span of the value assigned to `key` on its own line, e.g. `package = "x"`.
///
/// Only the first assignment is found.
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let assigns_key = line
            .trim_start()
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if assigns_key {
            let eq = line.find('=')?;
            let after = &line[eq + 1..];
            let start = offset + eq + 1 + (after.len() - after.trim_start().len());
            return Some(SourceSpan::from((start, after.trim().len())));
        }
        offset += line.len();
    }
    None
}
