mod errors;
mod http;
mod repository;
mod service;
mod validate;

pub use self::errors::{ErrorResponse, ValidationErrorResponse};
pub use self::http::AppErrorHttp;
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
pub use self::validate::collect_validation_errors;
