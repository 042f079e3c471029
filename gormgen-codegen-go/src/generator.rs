use std::path::{Path, PathBuf};

use gormgen_catalog::Catalog;
use gormgen_core::{File, GeneratedFile, TableDescriptor, TypeMap};
use tracing::{debug, info};

use crate::{
    GenerateError, ModelNames, TypeGap, files::ModelFile, render_crud_bundle, render_struct,
};

/// How generated handlers obtain a persistence handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persistence {
    /// Function called once per handler invocation, without the parentheses.
    pub call: String,
    /// Import path providing `call`, if it lives outside the generated package.
    pub import: Option<String>,
}

impl Persistence {
    /// Package qualifier of `call`, e.g. `store` for `store.Open`.
    pub fn package_name(&self) -> Option<&str> {
        self.call.split_once('.').map(|(package, _)| package)
    }
}

impl Default for Persistence {
    fn default() -> Self {
        Self {
            call: "db.Database".to_string(),
            import: None,
        }
    }
}

/// Output options for generated Go files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoOptions {
    pub package: String,
    pub persistence: Persistence,
}

impl Default for GoOptions {
    fn default() -> Self {
        Self {
            package: "models".to_string(),
            persistence: Persistence::default(),
        }
    }
}

impl GoOptions {
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn persistence_call(mut self, call: impl Into<String>) -> Self {
        self.persistence.call = call.into();
        self
    }

    pub fn persistence_import(mut self, import: impl Into<String>) -> Self {
        self.persistence.import = Some(import.into());
        self
    }

    /// Names derived from `table`, with locals kept clear of the persistence
    /// package.
    pub fn model_names(&self, table: &str) -> ModelNames {
        let taken: Vec<&str> = self.persistence.package_name().into_iter().collect();
        ModelNames::from_table_avoiding(table, &taken)
    }
}

/// Outcome of a successful generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Written files, in catalog order.
    pub files: Vec<PathBuf>,
    /// Columns emitted with an empty type.
    pub gaps: Vec<TypeGap>,
}

/// Go code generator producing one file per catalog table.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    type_map: TypeMap,
    options: GoOptions,
}

impl Generator {
    pub fn new(type_map: TypeMap) -> Self {
        Self {
            type_map,
            options: GoOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GoOptions) -> Self {
        self.options = options;
        self
    }

    pub fn type_map(&self) -> &TypeMap {
        &self.type_map
    }

    pub fn options(&self) -> &GoOptions {
        &self.options
    }

    /// Render the file for one table, with the type gaps found along the way.
    pub fn render_table(&self, table: &TableDescriptor) -> (ModelFile, Vec<TypeGap>) {
        let names = self.options.model_names(&table.table_name);
        debug!(table = %names.table, model = %names.model, columns = table.columns.len(), "rendering table");

        let model = render_struct(&names, &table.columns, &self.type_map);
        let gaps = model.gaps.clone();
        let handlers = render_crud_bundle(&names, &self.options);

        (ModelFile::new(&names, model, handlers, &self.options), gaps)
    }

    /// Write `<out_dir>/<table>.go` for every table in the catalog.
    ///
    /// Each table is fully written before the next one is described, so the
    /// first error leaves only the files of earlier tables behind.
    pub fn generate(
        &self,
        catalog: &mut impl Catalog,
        out_dir: &Path,
    ) -> Result<GenerateReport, GenerateError> {
        let mut report = GenerateReport::default();

        for table in catalog.list_tables()? {
            let descriptor = catalog.describe(&table)?;
            let (file, gaps) = self.render_table(&descriptor);

            let path = file.write(out_dir).map_err(|source| GenerateError::Write {
                path: file.path(out_dir),
                source,
            })?;
            info!(path = %path.display(), "wrote model");

            report.files.push(path);
            report.gaps.extend(gaps);
        }

        Ok(report)
    }

    /// Render every table in memory without touching the filesystem.
    ///
    /// Paths are relative to the output directory.
    pub fn preview(&self, catalog: &mut impl Catalog) -> Result<Vec<File>, GenerateError> {
        catalog
            .list_tables()?
            .iter()
            .map(|table| {
                let descriptor = catalog.describe(table)?;
                let (file, _) = self.render_table(&descriptor);
                Ok(File::new(file.file_name(), file.render()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use gormgen_catalog::testing::MemoryCatalog;
    use gormgen_core::ColumnMetadata;

    use super::*;

    #[test]
    fn test_render_table_reports_gaps() {
        let table = TableDescriptor::new("settings").columns(vec![
            ColumnMetadata::new("id", "integer", false),
            ColumnMetadata::new("attrs", "hstore", true),
        ]);
        let (file, gaps) = Generator::default().render_table(&table);

        assert_eq!(file.file_name(), "settings.go");
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].column, "attrs");
        assert_eq!(gaps[0].declared_type, "hstore");
    }

    #[test]
    fn test_preview_is_in_catalog_order() {
        let mut catalog = MemoryCatalog::new([
            TableDescriptor::new("users").columns([ColumnMetadata::new("id", "integer", false)]),
            TableDescriptor::new("orders").columns([ColumnMetadata::new("id", "integer", false)]),
        ]);

        let files = Generator::default().preview(&mut catalog).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path().to_path_buf()).collect();

        assert_eq!(paths, [PathBuf::from("users.go"), PathBuf::from("orders.go")]);
        assert!(files[0].content().contains("type Users struct"));
    }

    #[test]
    fn test_persistence_package_name() {
        assert_eq!(Persistence::default().package_name(), Some("db"));
        let options = GoOptions::default().persistence_call("openStore");
        assert_eq!(options.persistence.package_name(), None);
    }

    #[test]
    fn test_locals_avoid_the_persistence_package() {
        let options = GoOptions::default().persistence_call("store.Open");
        let table = TableDescriptor::new("stores")
            .columns(vec![ColumnMetadata::new("id", "integer", false)]);

        let (file, _) = Generator::default().with_options(options).render_table(&table);
        let out = file.render();
        assert!(out.contains("\tvar _store Stores\n"), "{out}");
        assert!(out.contains("\tdb, err := store.Open()\n"), "{out}");
        assert!(!out.contains("var store "), "{out}");
    }

    #[test]
    fn test_type_overrides_reach_the_model() {
        let types = TypeMap::default().with_overrides([("uuid", "string")]);
        let table = TableDescriptor::new("tokens")
            .columns(vec![ColumnMetadata::new("id", "uuid", false)]);

        let (file, gaps) = Generator::new(types).render_table(&table);
        assert!(gaps.is_empty());
        assert!(file.render().contains("\tId string "));
    }
}
