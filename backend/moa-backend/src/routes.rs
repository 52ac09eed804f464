use actix_web::web;
use utoipa::openapi::OpenApi;
use utoipa_swagger_ui::{Config as SwaggerConfig, SwaggerUi};

use crate::handlers::{health_check, openapi_json, openapi_yaml, swagger_ui_redirect};
use crate::openapi::ApiDoc;

/// Register every HTTP route on an actix app.
///
/// `doc` is built once in `main` and shared by all workers.
pub fn configure(cfg: &mut web::ServiceConfig, doc: web::Data<OpenApi>) {
    cfg.app_data(doc)
        .route("/health", web::get().to(health_check))
        .route(ApiDoc::openapi_json_path(), web::get().to(openapi_json))
        .route(ApiDoc::openapi_yaml_path(), web::get().to(openapi_yaml))
        .route("/swagger-ui.html", web::get().to(swagger_ui_redirect))
        // UI loads the document from openapi_json
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .config(SwaggerConfig::from(ApiDoc::openapi_json_path())),
        );
}
