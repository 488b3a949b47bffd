use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("Bag not found:{0}")]
    BagNotFound(i64),
    #[error("Cuboid not exists:{0}")]
    CuboidNotFound(i64),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    /// True for the "referenced entity not found" kind, whichever entity missed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::BagNotFound(_) | ServiceError::CuboidNotFound(_))
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::BagNotFound(_) => 1003,
            ServiceError::CuboidNotFound(_) => 1004,
            ServiceError::Db(_) => 1200,
            ServiceError::Model(models::errors::ModelError::Validation(_)) => 1001,
            ServiceError::Model(models::errors::ModelError::Db(_)) => 1200,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}
