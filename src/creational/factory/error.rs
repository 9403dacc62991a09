use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("Unknown shape type: {0}")]
    UnknownShape(String),
}
