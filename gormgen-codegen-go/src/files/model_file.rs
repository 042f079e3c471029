use std::path::{Path, PathBuf};

use gormgen_core::GeneratedFile;

use super::GENERATED_HEADER;
use crate::{Func, GoFile, GoOptions, ModelNames, RenderedModel};

/// `<table>.go`: the model struct, its route registrar and the handlers.
pub struct ModelFile {
    table: String,
    source: GoFile,
}

impl ModelFile {
    pub fn new(names: &ModelNames, model: RenderedModel, handlers: Vec<Func>, options: &GoOptions) -> Self {
        let mut source = GoFile::new(&options.package)
            .header(GENERATED_HEADER)
            .import("net/http")
            .import("github.com/gin-gonic/gin")
            .imports(&model.imports);
        if let Some(import) = &options.persistence.import {
            source = source.import(import);
        }

        Self {
            table: names.table.clone(),
            source: source.add(model.decl).add_all(handlers),
        }
    }

    /// File name relative to the output directory.
    pub fn file_name(&self) -> String {
        format!("{}.go", self.table)
    }
}

impl GeneratedFile for ModelFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn render(&self) -> String {
        self.source.render()
    }
}

#[cfg(test)]
mod tests {
    use gormgen_core::{ColumnMetadata, TypeMap};

    use super::*;
    use crate::{render_crud_bundle, render_struct};

    fn model_file(table: &str, columns: &[ColumnMetadata], options: &GoOptions) -> ModelFile {
        let names = ModelNames::from_table(table);
        let model = render_struct(&names, columns, &TypeMap::default());
        ModelFile::new(&names, model, render_crud_bundle(&names, options), options)
    }

    #[test]
    fn test_path_keeps_raw_table_name() {
        let file = model_file("user_accounts", &[], &GoOptions::default());
        assert_eq!(
            file.path(Path::new("/out")),
            PathBuf::from("/out/user_accounts.go")
        );
    }

    #[test]
    fn test_preamble() {
        let columns = [ColumnMetadata::new("created_at", "timestamp with time zone", true)];
        let out = model_file("events", &columns, &GoOptions::default()).render();

        assert!(out.starts_with(
            "// Code generated by gormgen. DO NOT EDIT.\n\npackage models\n\nimport (\n\t\"net/http\"\n\t\"time\"\n\n\t\"github.com/gin-gonic/gin\"\n)\n"
        ));
    }

    #[test]
    fn test_persistence_import_and_package() {
        let options = GoOptions::default()
            .package("api")
            .persistence_import("example.com/app/db");
        let out = model_file("orders", &[], &options).render();

        assert!(out.contains("package api\n"));
        assert!(out.contains("\t\"github.com/gin-gonic/gin\"\n"));
        assert!(out.contains("\t\"example.com/app/db\"\n"));
        assert!(!out.contains("\"time\""));
    }

    #[test]
    fn test_declaration_order() {
        let out = model_file("orders", &[], &GoOptions::default()).render();
        let positions: Vec<usize> = [
            "type Orders struct",
            "func OrdersCRUD(",
            "func OrdersFetchOne(",
            "func OrdersFetchAll(",
            "func OrdersCreate(",
            "func OrdersUpdate(",
            "func OrdersRemove(",
        ]
        .iter()
        .map(|needle| out.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{out}");
    }
}
