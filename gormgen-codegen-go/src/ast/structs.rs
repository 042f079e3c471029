//! Go struct builder.

use gormgen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A field in a Go struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub name: String,
    /// Go type; may be empty when the column type has no mapping.
    pub ty: String,
    /// Raw tag content, rendered inside backquotes.
    pub tag: Option<String>,
}

impl StructField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tag: None,
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Builder for Go struct type declarations.
///
/// Field names and types are padded into columns the way gofmt aligns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoStruct {
    name: String,
    fields: Vec<StructField>,
}

impl GoStruct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: StructField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        builder.build()
    }

    fn field_lines(&self) -> Vec<CodeFragment> {
        let name_width = self.fields.iter().map(|f| f.name.chars().count()).max();
        let type_width = self.fields.iter().map(|f| f.ty.chars().count()).max();
        let (name_width, type_width) = (name_width.unwrap_or(0), type_width.unwrap_or(0));

        self.fields
            .iter()
            .map(|field| {
                let line = match &field.tag {
                    Some(tag) => format!(
                        "{:<nw$} {:<tw$} `{}`",
                        field.name,
                        field.ty,
                        tag,
                        nw = name_width,
                        tw = type_width
                    ),
                    None => format!("{:<nw$} {}", field.name, field.ty, nw = name_width),
                };
                CodeFragment::Line(line.trim_end().to_string())
            })
            .collect()
    }
}

impl Renderable for GoStruct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("type {} struct{{}}", self.name))];
        }
        vec![CodeFragment::block(
            format!("type {} struct {{", self.name),
            self.field_lines(),
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_struct() {
        assert_eq!(GoStruct::new("Empty").build(), "type Empty struct{}\n");
    }

    #[test]
    fn test_fields_are_aligned() {
        let s = GoStruct::new("User")
            .field(StructField::new("Id", "int").tag(r#"json:"id""#))
            .field(StructField::new("Email", "string").tag(r#"json:"email""#))
            .build();

        assert_eq!(
            s,
            "type User struct {\n\
             \tId    int    `json:\"id\"`\n\
             \tEmail string `json:\"email\"`\n\
             }\n"
        );
    }

    #[test]
    fn test_empty_type_keeps_its_slot() {
        let s = GoStruct::new("Doc")
            .field(StructField::new("Id", "int").tag("a"))
            .field(StructField::new("Attrs", "").tag("b"))
            .build();

        assert!(s.contains("\tId    int `a`\n"));
        assert!(s.contains("\tAttrs     `b`\n"));
    }

    #[test]
    fn test_untagged_field() {
        let s = GoStruct::new("P")
            .field(StructField::new("X", "int"))
            .build();
        assert_eq!(s, "type P struct {\n\tX int\n}\n");
    }
}
