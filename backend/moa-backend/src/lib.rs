pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod metadata;
pub mod openapi;
pub mod routes;

pub use config::Config;
pub use error::{AppError, Result};
pub use metadata::{api_metadata, ApiMetadata, Contact, ServerEntry};
