use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{entity} id must not be empty")]
    EmptyId { entity: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
