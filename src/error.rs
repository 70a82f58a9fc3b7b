use crate::config::ConfigError;
use crate::http::ServerError;

/// Fatal startup and runtime errors. All of them terminate the process.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
