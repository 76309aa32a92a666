pub mod user;
pub mod account;
pub mod error;

pub use user::UserRecord;
pub use account::{Account, AccountId};
pub use error::{ProbeError, ProbeResult};
