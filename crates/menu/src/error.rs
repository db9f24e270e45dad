use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("Template render error: {0}")]
    Template(#[from] askama::Error),
}

pub type Result<T, E = MenuError> = std::result::Result<T, E>;
