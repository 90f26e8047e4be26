use std::sync::Arc;

use crate::domain::id::Id;
use crate::domain::pet::model::{Pet, PetUpdateReceive};
use crate::domain::pet::repository::PetRepository;
use crate::utils::errors::ApiError;

/// Business rules for pets.
pub struct PetUseCase {
    repository: Arc<dyn PetRepository>,
}

impl PetUseCase {

    pub fn new(repository: Arc<dyn PetRepository>) -> Self {
        PetUseCase { repository }
    }

    pub async fn create_pet(&self, name: &str, age: i32) -> Result<Pet, ApiError> {
        let pet = Pet::new(name.to_string(), age)?;

        log::debug!("Creating pet {}", pet.id);
        self.repository.create(pet).await
    }

    pub async fn get_pet(&self, id: &str) -> Result<Pet, ApiError> {
        let id = Id::parse(id)?;
        self.repository.find_by_id(id).await
    }

    pub async fn list_pets(&self) -> Result<Vec<Pet>, ApiError> {
        self.repository.find_all().await
    }

    /// Merges the fields present in the patch into the stored record. The
    /// record must already exist.
    pub async fn update_pet(&self, receive: PetUpdateReceive) -> Result<Pet, ApiError> {
        let id = Id::parse(&receive.id)?;

        let stored = self.repository.find_by_id(id).await?;
        let updated = stored.apply(receive)?;

        self.repository.update(updated).await
    }

    /// Deletes the pet, removing it from its owner's set if it has one.
    pub async fn delete_pet(&self, id: &str) -> Result<(), ApiError> {
        let id = Id::parse(id)?;

        log::debug!("Deleting pet {}", id);
        self.repository.delete(id).await
    }
}
