//! Swagger-style annotation headers for generated handlers.

/// A `// @...` comment block consumed by swagger documentation generators.
///
/// Lines are emitted in a fixed order regardless of the call order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocHeader {
    title: String,
    description: String,
    accept: Option<String>,
    tags: Option<String>,
    params: Vec<String>,
    success: Vec<String>,
    failures: Vec<String>,
    resource: Option<String>,
    router: Option<String>,
}

impl DocHeader {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn accept(mut self, content_type: &str) -> Self {
        self.accept = Some(content_type.to_string());
        self
    }

    pub fn tags(mut self, tags: &str) -> Self {
        self.tags = Some(tags.to_string());
        self
    }

    /// Declare a parameter, e.g. `param("id", "path", "int", true, "user ID")`.
    pub fn param(mut self, name: &str, location: &str, ty: &str, required: bool, about: &str) -> Self {
        self.params
            .push(format!("{} {} {} {} \"{}\"", name, location, ty, required, about));
        self
    }

    /// Declare the success response, e.g. `success(200, "{object}", "models.User")`.
    pub fn success(mut self, code: u16, kind: &str, ty: &str) -> Self {
        self.success.push(format!("{} {} {}", code, kind, ty));
        self
    }

    /// Declare a failure response carrying a message.
    pub fn failure(mut self, code: u16, message: &str) -> Self {
        self.failures
            .push(format!("{} {{string}} message \"{}\"", code, message));
        self
    }

    pub fn resource(mut self, path: &str) -> Self {
        self.resource = Some(path.to_string());
        self
    }

    /// Declare the route, e.g. `router("/users/{id}", "get")`.
    pub fn router(mut self, path: &str, method: &str) -> Self {
        self.router = Some(format!("{} [{}]", path, method));
        self
    }

    /// Comment lines without the leading `//`.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("@Title {}", self.title),
            format!("@Description {}", self.description),
        ];
        if let Some(accept) = &self.accept {
            lines.push(format!("@Accept  {}", accept));
        }
        if let Some(tags) = &self.tags {
            lines.push(format!("@Tags {}", tags));
        }
        lines.extend(self.params.iter().map(|p| format!("@Param   {}", p)));
        lines.extend(self.success.iter().map(|s| format!("@Success {}", s)));
        lines.extend(self.failures.iter().map(|f| format!("@Failure {}", f)));
        if let Some(resource) = &self.resource {
            lines.push(format!("@Resource {}", resource));
        }
        if let Some(router) = &self.router {
            lines.push(format!("@Router {}", router));
        }
        lines
    }
}
