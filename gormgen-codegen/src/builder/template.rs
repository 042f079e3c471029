//! Fixed code templates with named placeholders.

use indexmap::IndexMap;

use super::{CodeFragment, Renderable};

/// A fixed piece of code text containing `{{name}}` placeholders.
///
/// Placeholders are resolved against a set of named values. A placeholder
/// with no value is left in the output untouched, so callers can detect
/// gaps with [`Template::placeholders`].
///
/// ```
/// use gormgen_codegen::builder::Template;
/// use indexmap::IndexMap;
///
/// let tpl = Template::new("var {{name}} {{ty}}");
/// let vars = IndexMap::from([("name", "user".to_string()), ("ty", "User".to_string())]);
/// assert_eq!(tpl.render(&vars), "var user User");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    text: &'static str,
}

impl Template {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }

    /// Names of all placeholders in order of first appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.text;
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                break;
            };
            let name = after[..end].trim();
            if !names.contains(&name) {
                names.push(name);
            }
            rest = &after[end + 2..];
        }
        names
    }

    /// Substitute every placeholder that has a value.
    pub fn render(&self, vars: &IndexMap<&str, String>) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };
            match vars.get(after[..end].trim()) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + end + 4]),
            }
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        out
    }

    /// Render into one line fragment per template line.
    pub fn render_fragments(&self, vars: &IndexMap<&str, String>) -> Vec<CodeFragment> {
        Rendered(self.render(vars)).to_fragments()
    }
}

struct Rendered(String);

impl Renderable for Rendered {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&'static str, &str)]) -> IndexMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_render_substitutes_all() {
        let tpl = Template::new("func {{model}}Create() { var {{ singular }} {{model}} }");
        let out = tpl.render(&vars(&[("model", "Users"), ("singular", "user")]));
        assert_eq!(out, "func UsersCreate() { var user Users }");
    }

    #[test]
    fn test_missing_value_is_left_in_place() {
        let tpl = Template::new("a {{known}} b {{unknown}} c");
        let out = tpl.render(&vars(&[("known", "K")]));
        assert_eq!(out, "a K b {{unknown}} c");
    }

    #[test]
    fn test_unterminated_placeholder() {
        let tpl = Template::new("x {{open");
        assert_eq!(tpl.render(&vars(&[("open", "no")])), "x {{open");
        assert!(tpl.placeholders().is_empty());
    }

    #[test]
    fn test_single_braces_untouched() {
        let tpl = Template::new("gin.H{\"message\": {{err}}.Error()}");
        let out = tpl.render(&vars(&[("err", "e")]));
        assert_eq!(out, "gin.H{\"message\": e.Error()}");
    }

    #[test]
    fn test_placeholders() {
        let tpl = Template::new("{{a}} {{b}} {{a}} {{ c }}");
        assert_eq!(tpl.placeholders(), ["a", "b", "c"]);
    }

    #[test]
    fn test_render_fragments() {
        let tpl = Template::new("if {{x}} {\n\treturn\n}");
        let fragments = tpl.render_fragments(&vars(&[("x", "ok")]));
        assert_eq!(
            fragments,
            vec![
                CodeFragment::line("if ok {"),
                CodeFragment::line("\treturn"),
                CodeFragment::line("}"),
            ]
        );
    }

    #[test]
    fn test_render_multiline_body() {
        let tpl = Template::new(
            "var {{singular}} {{model}}\nif err := db.Find(&{{singular}}).Error; err != nil {\n\treturn\n}",
        );
        let out = tpl.render(&vars(&[("model", "Users"), ("singular", "user")]));
        insta::assert_snapshot!(out, @r"
        var user Users
        if err := db.Find(&user).Error; err != nil {
        	return
        }
        ");
    }
}
