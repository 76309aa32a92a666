mod interface;
mod http_client;

pub use interface::UserEndpoint;
pub use http_client::{HttpUserClient, DEFAULT_HOST};
