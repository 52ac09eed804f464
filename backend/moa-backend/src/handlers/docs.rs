//! Endpoints that publish the OpenAPI document.
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use utoipa::openapi::OpenApi;

use crate::error::AppError;
use crate::openapi::ApiDoc;

/// GET /v3/api-docs
pub async fn openapi_json(doc: web::Data<OpenApi>) -> Result<HttpResponse, AppError> {
    let body = doc.to_json().map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

/// GET /v3/api-docs.yaml
pub async fn openapi_yaml(doc: web::Data<OpenApi>) -> Result<HttpResponse, AppError> {
    let body = doc.to_yaml().map_err(|e| {
        tracing::error!("OpenAPI YAML serialization failed: {}", e);
        AppError::Serialization(e.to_string())
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/yaml")
        .body(body))
}

/// GET /swagger-ui.html
pub async fn swagger_ui_redirect() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, ApiDoc::swagger_ui_path()))
        .finish()
}
