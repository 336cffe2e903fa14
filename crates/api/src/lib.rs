pub mod auth;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod validate;

pub use error::{ApiError, ApiResult};
pub use routes::{build_router, AppState};
