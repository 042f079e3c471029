//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Builder for indented code.
///
/// # Example
///
/// ```
/// use gormgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .push_comment("Ping answers health checks")
///     .push_line("func Ping() {")
///     .push_indent()
///     .push_line("return")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(
///     builder.build(),
///     "// Ping answers health checks\nfunc Ping() {\n\treturn\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with tab indentation (Go default).
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Add a line of code with current indentation (mutable).
    ///
    /// Empty lines are written without trailing indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `//` line comment (mutable).
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("//");
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_has_no_trailing_indent() {
        let mut builder = CodeBuilder::go();
        builder.push_indent().push_line("").push_line("x");
        assert_eq!(builder.build(), "\n\tx\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder
            .push_line("{")
            .push_indent()
            .push_line("a")
            .push_dedent()
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "{\n  a\n}\n");
    }

    #[test]
    fn test_empty_comment() {
        let mut builder = CodeBuilder::go();
        builder.push_comment("").push_blank().push_comment("text");
        assert_eq!(builder.build(), "//\n\n// text\n");
    }

    #[test]
    fn test_emit_block_and_comment_fragments() {
        struct Handler;
        impl Renderable for Handler {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("@Title ping"),
                    CodeFragment::block(
                        "func Ping(c *gin.Context) {",
                        vec![
                            CodeFragment::line("if ok {"),
                            CodeFragment::Indent(vec![CodeFragment::line("return")]),
                            CodeFragment::line("}"),
                        ],
                        Some("}".to_string()),
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::go();
        builder.emit(&Handler);
        insta::assert_snapshot!(builder.build(), @r"
        // @Title ping
        func Ping(c *gin.Context) {
        	if ok {
        		return
        	}
        }
        ");
    }
}
