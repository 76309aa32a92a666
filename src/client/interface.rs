use crate::core::ProbeResult;

/// The four calls the harness can make against the user endpoint.
/// Each one is a single request with no retry.
pub trait UserEndpoint {
    fn send_post(&self, data: &str) -> ProbeResult<()>;
    fn send_get(&self) -> ProbeResult<String>;
    fn send_put(&self, data: &str) -> ProbeResult<()>;
    fn delete(&self) -> ProbeResult<()>;
}
