use std::{fs, net::{IpAddr, Ipv4Addr, SocketAddr}, path::Path};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    host: IpAddr,
    port: u16
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { host: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 3000 }
    }
}

impl ServerConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
