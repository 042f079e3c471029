//! CRUD route registrar and handler emission.

use gormgen_codegen::{CodeFragment, Template};
use indexmap::IndexMap;

use crate::{DocHeader, GoOptions, ModelNames, ast::{Func, Param}};

// Handler bodies. Every handler acquires its own persistence handle through
// `{{acquire}}` and releases it when it returns.

/// Load one record by the `id` path parameter.
const FETCH_ONE: Template = Template::new(
    r#"id := c.Param("id")
db, err := {{acquire}}
if err != nil {
	c.JSON(http.StatusInternalServerError, gin.H{"message": err.Error()})
	return
}
defer db.Close()
var {{singular}} {{model}}
if err := db.Find(&{{singular}}, id).Error; err != nil {
	c.JSON(http.StatusNotFound, gin.H{"message": err.Error()})
} else {
	c.JSON(http.StatusOK, {{singular}})
}"#,
);

/// Despite the name this filters by the `id` path parameter, which the
/// collection route never binds.
const FETCH_ALL: Template = Template::new(
    r#"db, err := {{acquire}}
if err != nil {
	c.JSON(http.StatusInternalServerError, gin.H{"message": err.Error()})
	return
}
defer db.Close()
var {{plural}} []{{model}}
id := c.Params.ByName("id")
if err := db.Where("id = ?", id).First(&{{plural}}).Error; err != nil {
	c.JSON(http.StatusNotFound, gin.H{"message": err.Error()})
} else {
	c.JSON(http.StatusOK, {{plural}})
}"#,
);

const CREATE: Template = Template::new(
    r#"var {{singular}} {{model}}
if err := c.BindJSON(&{{singular}}); err != nil {
	c.JSON(http.StatusBadRequest, gin.H{"message": err.Error()})
	return
}
db, err := {{acquire}}
if err != nil {
	c.JSON(http.StatusInternalServerError, gin.H{"message": err.Error()})
	return
}
defer db.Close()
if err := db.Create(&{{singular}}).Error; err != nil {
	c.JSON(http.StatusInternalServerError, gin.H{"message": err.Error()})
} else {
	c.JSON(http.StatusCreated, {{singular}})
}"#,
);

/// Load by id, overlay the request body, save.
const UPDATE: Template = Template::new(
    r#"var {{singular}} {{model}}
id := c.Params.ByName("id")
db, err := {{acquire}}
if err != nil {
	c.JSON(http.StatusInternalServerError, gin.H{"message": err.Error()})
	return
}
defer db.Close()
if err := db.Where("id = ?", id).First(&{{singular}}).Error; err != nil {
	c.JSON(http.StatusNotFound, gin.H{"message": err.Error()})
	return
}
if err := c.BindJSON(&{{singular}}); err != nil {
	c.JSON(http.StatusBadRequest, gin.H{"message": err.Error()})
	return
}
db.Save(&{{singular}})
c.JSON(http.StatusOK, {{singular}})"#,
);

/// Load by id, delete, answer with the last known state.
const REMOVE: Template = Template::new(
    r#"var {{singular}} {{model}}
db, err := {{acquire}}
if err != nil {
	c.JSON(http.StatusInternalServerError, gin.H{"message": err.Error()})
	return
}
defer db.Close()
id := c.Params.ByName("id")
if err := db.Where("id = ?", id).First(&{{singular}}).Error; err != nil {
	c.JSON(http.StatusNotFound, gin.H{"message": err.Error()})
	return
}
db.Delete(&{{singular}})
c.JSON(http.StatusOK, {{singular}})"#,
);

/// One of the five generated operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchOne,
    FetchAll,
    Create,
    Update,
    Remove,
}

impl Operation {
    /// Registration and emission order.
    pub const ALL: [Operation; 5] = [
        Operation::FetchOne,
        Operation::FetchAll,
        Operation::Create,
        Operation::Update,
        Operation::Remove,
    ];

    /// Handler symbol suffix, appended to the model name.
    pub fn suffix(self) -> &'static str {
        match self {
            Operation::FetchOne => "FetchOne",
            Operation::FetchAll => "FetchAll",
            Operation::Create => "Create",
            Operation::Update => "Update",
            Operation::Remove => "Remove",
        }
    }

    /// gin router method.
    pub fn method(self) -> &'static str {
        match self {
            Operation::FetchOne | Operation::FetchAll => "GET",
            Operation::Create => "POST",
            Operation::Update => "PUT",
            Operation::Remove => "DELETE",
        }
    }

    /// Path relative to the route group.
    pub fn route(self) -> &'static str {
        if self.takes_id() { "/:id" } else { "/" }
    }

    fn takes_id(self) -> bool {
        matches!(
            self,
            Operation::FetchOne | Operation::Update | Operation::Remove
        )
    }

    fn template(self) -> Template {
        match self {
            Operation::FetchOne => FETCH_ONE,
            Operation::FetchAll => FETCH_ALL,
            Operation::Create => CREATE,
            Operation::Update => UPDATE,
            Operation::Remove => REMOVE,
        }
    }

    fn doc(self, names: &ModelNames, package: &str) -> DocHeader {
        let singular = names.singular.trim_start_matches('_');
        let route = &names.route;
        let model_ref = format!("{}.{}", package, names.model);
        let unavailable = "database unavailable";

        let header = match self {
            Operation::FetchOne => DocHeader::new(
                format!("get{}", names.model),
                format!("retrieves {} by ID", singular),
            )
            .success(200, "{object}", &model_ref)
            .failure(404, &format!("{} not found", singular))
            .failure(500, unavailable),
            Operation::FetchAll => DocHeader::new(
                format!("list{}", names.model),
                format!("retrieves a list of {}", route),
            )
            .success(200, "{array}", &model_ref)
            .failure(404, &format!("{} not found", route))
            .failure(500, unavailable),
            Operation::Create => DocHeader::new(
                format!("create{}", names.model),
                format!("creates a {}", singular),
            )
            .success(201, "{object}", &model_ref)
            .failure(400, &format!("invalid {} payload", singular))
            .failure(500, unavailable),
            Operation::Update => DocHeader::new(
                format!("update{}", names.model),
                format!("updates {} by ID", singular),
            )
            .success(200, "{object}", &model_ref)
            .failure(400, &format!("invalid {} payload", singular))
            .failure(404, &format!("{} not found", singular))
            .failure(500, unavailable),
            Operation::Remove => DocHeader::new(
                format!("remove{}", names.model),
                format!("removes {} by ID", singular),
            )
            .success(200, "{object}", &model_ref)
            .failure(404, &format!("{} not found", singular))
            .failure(500, unavailable),
        };

        let header = header.accept("json").tags(route);
        let header = if self.takes_id() {
            header.param("id", "path", "int", true, &format!("{} ID", singular))
        } else {
            header
        };

        let doc_path = if self.takes_id() { "/{id}" } else { "/" };
        header
            .resource(&format!("/{}", route))
            .router(
                &format!("/{}{}", route, doc_path),
                &self.method().to_lowercase(),
            )
    }

    fn handler(self, names: &ModelNames, options: &GoOptions) -> Func {
        let vars: IndexMap<&str, String> = IndexMap::from([
            ("model", names.model.clone()),
            ("singular", names.singular.clone()),
            ("plural", names.plural.clone()),
            ("acquire", format!("{}()", options.persistence.call)),
        ]);

        Func::new(names.symbol(self.suffix()))
            .comments(self.doc(names, &options.package).lines())
            .param(Param::new("c", "*gin.Context"))
            .body(self.template().render_fragments(&vars))
    }
}

/// `<Model>CRUD` binding the five routes of a model's group.
fn registrar(names: &ModelNames) -> Func {
    let group = &names.plural;
    let bindings = Operation::ALL
        .iter()
        .map(|op| {
            CodeFragment::line(format!(
                "{}.{}(\"{}\", {})",
                group,
                op.method(),
                op.route(),
                names.symbol(op.suffix())
            ))
        })
        .collect();

    Func::new(names.symbol("CRUD"))
        .param(Param::new("crud", "*gin.RouterGroup"))
        .body_line(format!("{} := crud.Group(\"/{}\")", group, names.route))
        .body([
            CodeFragment::line("{"),
            CodeFragment::Indent(bindings),
            CodeFragment::line("}"),
        ])
}

/// The route registrar followed by the five handlers, in emission order.
pub fn render_crud_bundle(names: &ModelNames, options: &GoOptions) -> Vec<Func> {
    std::iter::once(registrar(names))
        .chain(Operation::ALL.iter().map(|op| op.handler(names, options)))
        .collect()
}
