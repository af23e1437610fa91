use models::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("{0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn artisan_not_found(id: &str) -> Self {
        Self::NotFound(format!("Artisan with ID {id} not found"))
    }
}
