use std::sync::Arc;

use crate::domain::id::Id;
use crate::domain::user::model::{User, UserUpdateReceive};
use crate::domain::user::repository::UserRepository;
use crate::utils::errors::ApiError;

/// Business rules for users. Holds only the repository capability; each
/// call is one unit of work and every result is an owned snapshot.
pub struct UserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl UserUseCase {

    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        UserUseCase { repository }
    }

    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, ApiError> {
        let user = User::new(
            email.to_string(),
            password.to_string(),
            first_name.to_string(),
            last_name.to_string(),
        )?;

        log::debug!("Creating user {}", user.id);
        self.repository.create(user).await
    }

    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        let id = Id::parse(id)?;
        self.repository.find_by_id(id).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.repository.find_all().await
    }

    /// Merges the fields present in the patch into the stored record. The
    /// record must already exist.
    pub async fn update_user(&self, receive: UserUpdateReceive) -> Result<User, ApiError> {
        let id = Id::parse(&receive.id)?;

        let stored = self.repository.find_by_id(id).await?;
        let updated = stored.apply(receive)?;

        self.repository.update(updated).await
    }

    /// Deletes the user. Pets it owned become ownerless, not deleted.
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let id = Id::parse(id)?;

        log::debug!("Deleting user {}", id);
        self.repository.delete(id).await
    }

    /// Makes the user the owner of every listed pet, moving each from any
    /// prior owner. An empty pet list is rejected as invalid data.
    pub async fn own_pets(&self, user_id: &str, pet_ids: &[String]) -> Result<(), ApiError> {
        if pet_ids.is_empty() {
            return Err(ApiError::InvalidData("Pet list cannot be empty".to_string()));
        }

        let user_id = Id::parse(user_id)?;
        let pet_ids = pet_ids
            .iter()
            .map(|text| Id::parse(text))
            .collect::<Result<Vec<Id>, ApiError>>()?;

        // Existence of each pet is checked transactionally by assign_pets.
        self.repository.find_by_id(user_id).await?;

        log::debug!("Assigning {} pets to user {}", pet_ids.len(), user_id);
        self.repository.assign_pets(user_id, &pet_ids).await
    }
}
