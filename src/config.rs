use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// TCP port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 3000;

/// Listener configuration resolved from CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub bind: IpAddr,
    /// TCP port the listener binds to.
    pub port: u16,
}

impl ServerConfig {
    pub fn new(bind: IpAddr, port: u16) -> Self {
        Self { bind, port }
    }

    /// Socket address the listener binds.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}
