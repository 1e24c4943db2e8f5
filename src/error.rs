use std::net::SocketAddr;
use thiserror::Error;

/// Errors raised while starting or running the HTTP server.
///
/// A bind failure (address already in use, missing privileges) is the
/// one startup failure mode; it propagates out of `main` and terminates
/// the process with a non-zero exit status.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Serve(#[from] std::io::Error),
}
