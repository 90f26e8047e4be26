use async_trait::async_trait;

use crate::domain::id::Id;
use crate::domain::pet::model::Pet;
use crate::utils::errors::ApiError;

/// Storage boundary for pets.
#[async_trait]
pub trait PetRepository: Send + Sync {
    async fn create(&self, pet: Pet) -> Result<Pet, ApiError>;

    async fn find_by_id(&self, id: Id) -> Result<Pet, ApiError>;

    /// Order is unspecified unless the implementation documents one.
    async fn find_all(&self) -> Result<Vec<Pet>, ApiError>;

    /// Replaces the stored record; fails with `NotFound` for an unknown id.
    async fn update(&self, pet: Pet) -> Result<Pet, ApiError>;

    /// Removes the pet permanently and from its owner's set, if it has one.
    async fn delete(&self, id: Id) -> Result<(), ApiError>;
}
