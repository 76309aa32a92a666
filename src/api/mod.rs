mod error;
mod routes;

pub use error::ServerError;
pub use routes::{router, openapi_document, AppState, USER_ID};
