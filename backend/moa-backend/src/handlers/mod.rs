pub mod docs;
pub mod health;

pub use docs::{openapi_json, openapi_yaml, swagger_ui_redirect};
pub use health::health_check;
