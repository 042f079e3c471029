//! Model struct emission.

use gormgen_codegen::ImportCollector;
use gormgen_core::{ColumnMetadata, TypeMap};
use tracing::warn;

use crate::{
    ModelNames,
    ast::{GoStruct, StructField},
    naming::to_field_name,
};

/// Standard library packages that mapped field types may reference.
const TYPE_PACKAGES: &[(&str, &str)] = &[
    ("time.", "time"),
    ("json.", "encoding/json"),
    ("sql.", "database/sql"),
];

/// A column whose declared type has no entry in the type map.
///
/// Its field is still emitted, with an empty type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeGap {
    pub table: String,
    pub column: String,
    pub declared_type: String,
}

/// The model struct of one table plus what it needs from the file.
#[derive(Debug, Clone)]
pub struct RenderedModel {
    pub decl: GoStruct,
    pub imports: ImportCollector,
    pub gaps: Vec<TypeGap>,
}

impl RenderedModel {
    pub fn text(&self) -> String {
        self.decl.build()
    }
}

/// Render the model struct: one field per column, in column order.
pub fn render_struct(names: &ModelNames, columns: &[ColumnMetadata], types: &TypeMap) -> RenderedModel {
    let mut decl = GoStruct::new(&names.model);
    let mut imports = ImportCollector::new();
    let mut gaps = Vec::new();

    for column in columns {
        let ty = match types.lookup(&column.declared_type) {
            Some(ty) => ty,
            None => {
                warn!(
                    table = %names.table,
                    column = %column.name,
                    declared_type = %column.declared_type,
                    "no type mapping, leaving the field type empty"
                );
                gaps.push(TypeGap {
                    table: names.table.clone(),
                    column: column.name.clone(),
                    declared_type: column.declared_type.clone(),
                });
                ""
            }
        };

        if let Some((_, package)) = TYPE_PACKAGES
            .iter()
            .find(|(prefix, _)| ty.trim_start_matches(['*', '[', ']']).starts_with(prefix))
        {
            imports.add(package);
        }

        decl = decl.field(StructField::new(to_field_name(&column.name), ty).tag(field_tag(column)));
    }

    RenderedModel {
        decl,
        imports,
        gaps,
    }
}

/// `gorm:"column:<name>;[not null;]" json:"<name>"`
fn field_tag(column: &ColumnMetadata) -> String {
    let not_null = if column.nullable { "" } else { "not null;" };
    format!(
        "gorm:\"column:{};{}\" json:\"{}\"",
        column.name, not_null, column.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &str, columns: &[ColumnMetadata]) -> RenderedModel {
        render_struct(&ModelNames::from_table(table), columns, &TypeMap::postgres_go())
    }

    #[test]
    fn test_user_accounts() {
        let model = render(
            "user_accounts",
            &[
                ColumnMetadata::new("id", "integer", false),
                ColumnMetadata::new("email", "character varying(255)", true),
            ],
        );

        insta::assert_snapshot!(model.text(), @r#"
        type UserAccounts struct {
        	Id    int    `gorm:"column:id;not null;" json:"id"`
        	Email string `gorm:"column:email;" json:"email"`
        }
        "#);
        assert!(model.gaps.is_empty());
        assert!(model.imports.is_empty());
    }

    #[test]
    fn test_unmapped_type_leaves_empty_slot() {
        let model = render(
            "documents",
            &[
                ColumnMetadata::new("id", "bigint", false),
                ColumnMetadata::new("attrs", "hstore", true),
                ColumnMetadata::new("title", "text", false),
            ],
        );

        let fields = model.decl.fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1].name, "Attrs");
        assert_eq!(fields[1].ty, "");
        assert_eq!(fields[2].ty, "string");
        assert_eq!(
            model.gaps,
            [TypeGap {
                table: "documents".to_string(),
                column: "attrs".to_string(),
                declared_type: "hstore".to_string(),
            }]
        );
    }

    #[test]
    fn test_field_order_follows_columns() {
        let columns = [
            ColumnMetadata::new("zeta", "text", true),
            ColumnMetadata::new("alpha", "integer", true),
            ColumnMetadata::new("mid_point", "boolean", true),
        ];

        for order in [[0, 1, 2], [2, 0, 1], [1, 2, 0], [2, 1, 0]] {
            let permuted: Vec<_> = order.iter().map(|&i| columns[i].clone()).collect();
            let model = render("things", &permuted);
            let names: Vec<_> = model.decl.fields().iter().map(|f| f.name.clone()).collect();
            let expected: Vec<_> = permuted.iter().map(|c| to_field_name(&c.name)).collect();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn test_time_import() {
        let model = render(
            "events",
            &[ColumnMetadata::new("at", "timestamp with time zone", false)],
        );
        assert!(model.imports.has("time"));
    }

    #[test]
    fn test_overridden_types_pull_imports() {
        let types = TypeMap::postgres_go().with_overrides([("jsonb", "json.RawMessage"), ("text", "sql.NullString")]);
        let model = render_struct(
            &ModelNames::from_table("blobs"),
            &[
                ColumnMetadata::new("doc", "jsonb", true),
                ColumnMetadata::new("note", "text", true),
            ],
            &types,
        );
        assert!(model.imports.has("encoding/json"));
        assert!(model.imports.has("database/sql"));
    }

    #[test]
    fn test_field_tag() {
        assert_eq!(
            field_tag(&ColumnMetadata::new("created_at", "date", false)),
            r#"gorm:"column:created_at;not null;" json:"created_at""#
        );
        assert_eq!(
            field_tag(&ColumnMetadata::new("note", "text", true)),
            r#"gorm:"column:note;" json:"note""#
        );
    }
}
