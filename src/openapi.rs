//! OpenAPI document for the framework API, served at `/api-docs/openapi.json`.

use crate::error::{FieldError, ValidationErrors};
use crate::handlers::framework;
use crate::model::{FrameworkPayload, FrameworkView, NestedVersionView, VersionPayload, VersionView};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        framework::list,
        framework::search,
        framework::create,
        framework::update,
        framework::delete,
        framework::set_version,
        framework::versions,
    ),
    components(schemas(
        FrameworkPayload,
        FrameworkView,
        NestedVersionView,
        VersionPayload,
        VersionView,
        ValidationErrors,
        FieldError,
    )),
    tags((name = "frameworks", description = "JavaScript frameworks and their versions")),
    info(
        title = "JavaScript framework tracker",
        description = "Frameworks, hype levels and version history"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_framework_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/frameworks",
            "/frameworks/search/{name}",
            "/frameworks/add",
            "/frameworks/update/{id}",
            "/frameworks/delete/{id}",
            "/frameworks/setversion/{id}",
            "/frameworks/versions/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
