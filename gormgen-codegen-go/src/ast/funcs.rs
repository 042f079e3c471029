//! Go function builder.

use gormgen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Go function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for top-level Go functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Func {
    name: String,
    comments: Vec<String>,
    params: Vec<Param>,
    body: Vec<CodeFragment>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add `//` comment lines above the declaration.
    pub fn comments(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.comments.extend(lines);
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Append body fragments.
    pub fn body(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        builder.build()
    }

    fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");
        format!("func {}({}) {{", self.name, params)
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .comments
            .iter()
            .map(|c| CodeFragment::comment(c.clone()))
            .collect();

        fragments.push(CodeFragment::block(
            self.signature(),
            self.body.clone(),
            Some("}".to_string()),
        ));

        fragments
    }
}
