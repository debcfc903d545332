//! Host startup and serve failures.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("bind listener: {0}")]
    Bind(#[source] std::io::Error),
    #[error("serve: {0}")]
    Serve(#[source] std::io::Error),
}
