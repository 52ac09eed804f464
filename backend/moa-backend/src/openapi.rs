/// OpenAPI documentation for the MOA backend
use utoipa::openapi::{ContactBuilder, InfoBuilder, ServerBuilder};
use utoipa::OpenApi;

use crate::handlers::health::HealthResponse;
use crate::metadata::ApiMetadata;

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::health::health_check),
    components(schemas(HealthResponse)),
    tags(
        (name = "health", description = "Service health checks"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/v3/api-docs"
    }

    pub fn openapi_yaml_path() -> &'static str {
        "/v3/api-docs.yaml"
    }

    pub fn swagger_ui_path() -> &'static str {
        "/swagger-ui/"
    }
}

/// Build the OpenAPI document served by this process.
///
/// `info` and `servers` come from `metadata`; paths and tags come from [`ApiDoc`].
pub fn doc(metadata: &ApiMetadata) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    doc.info = InfoBuilder::new()
        .title(&metadata.title)
        .description(Some(&metadata.description))
        .version(&metadata.version)
        .contact(Some(
            ContactBuilder::new()
                .name(Some(&metadata.contact.name))
                .email(Some(&metadata.contact.email))
                .build(),
        ))
        .build();

    doc.servers = Some(
        metadata
            .servers
            .iter()
            .map(|server| {
                ServerBuilder::new()
                    .url(&server.url)
                    .description(Some(&server.description))
                    .build()
            })
            .collect(),
    );

    doc
}
