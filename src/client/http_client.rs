use log::{debug, info, warn};
use reqwest::Method;
use reqwest::blocking::{Client, Response};

use crate::client::interface::UserEndpoint;
use crate::core::ProbeResult;

pub const DEFAULT_HOST: &str = "http://127.0.0.1:3000/user";

/// Blocking client bound to one destination URL.
pub struct HttpUserClient {
    client: Client,
    host: String
}

impl HttpUserClient {
    pub fn new(host: &str) -> HttpUserClient {
        HttpUserClient { client: Client::new(), host: host.to_owned() }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn send(&self, method: Method, data: Option<&str>) -> ProbeResult<Response> {
        let mut request = self.client.request(method.clone(), &self.host);
        if let Some(body) = data {
            debug!("{} payload: {}", method, body);
            request = request.body(body.to_owned());
        }

        let response = request.send()?;
        let status = response.status();
        // non-2xx is reported, never raised
        if status.is_success() {
            info!("{} {} -> {}", method, self.host, status);
        } else {
            warn!("{} {} -> {}", method, self.host, status);
        }
        return Ok(response);
    }
}

impl Default for HttpUserClient {
    fn default() -> Self {
        HttpUserClient::new(DEFAULT_HOST)
    }
}

impl UserEndpoint for HttpUserClient {
    fn send_post(&self, data: &str) -> ProbeResult<()> {
        self.send(Method::POST, Some(data))?;
        Ok(())
    }

    fn send_get(&self) -> ProbeResult<String> {
        let response = self.send(Method::GET, None)?;
        let body = response.text()?;
        return Ok(body);
    }

    fn send_put(&self, data: &str) -> ProbeResult<()> {
        self.send(Method::PUT, Some(data))?;
        Ok(())
    }

    fn delete(&self) -> ProbeResult<()> {
        self.send(Method::DELETE, None)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use crate::client::{HttpUserClient, UserEndpoint, DEFAULT_HOST};
    use crate::core::ProbeError;

    #[test]
    fn default_destination() {
        assert_eq!(DEFAULT_HOST, "http://127.0.0.1:3000/user");
        assert_eq!(HttpUserClient::default().host(), DEFAULT_HOST);
    }

    #[test]
    fn unreachable_server_is_a_transport_error() {
        // bind then drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = HttpUserClient::new(&format!("http://127.0.0.1:{}/user", port));
        let res = client.delete();
        assert!(matches!(res, Err(ProbeError::Transport(..))));
    }
}
