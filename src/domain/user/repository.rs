use async_trait::async_trait;

use crate::domain::id::Id;
use crate::domain::user::model::User;
use crate::utils::errors::ApiError;

/// Storage boundary for users. Implementations own referential integrity
/// between `Pet.owner` and `User.pets` and must never leave a partial write
/// observable when a call fails or is abandoned mid-flight.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists the user and returns the stored snapshot. Implementations
    /// enforcing email uniqueness return `Conflict` on a duplicate.
    async fn create(&self, user: User) -> Result<User, ApiError>;

    async fn find_by_id(&self, id: Id) -> Result<User, ApiError>;

    /// Order is unspecified unless the implementation documents one.
    async fn find_all(&self) -> Result<Vec<User>, ApiError>;

    /// Replaces the stored record; fails with `NotFound` for an unknown id.
    async fn update(&self, user: User) -> Result<User, ApiError>;

    /// Removes the user permanently. Pets owned by the user are released
    /// (left ownerless), not deleted.
    async fn delete(&self, id: Id) -> Result<(), ApiError>;

    /// Transactionally makes the user the owner of each listed pet,
    /// removing each from any prior owner's set. Fails with `NotFound` if
    /// the user or any pet is unknown; on failure no reassignment is
    /// observable.
    async fn assign_pets(&self, user_id: Id, pet_ids: &[Id]) -> Result<(), ApiError>;
}
