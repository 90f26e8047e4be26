use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pets_service::domain::id::Id;
use pets_service::domain::pet::model::Pet;
use pets_service::domain::pet::repository::PetRepository;
use pets_service::domain::user::model::User;
use pets_service::domain::user::repository::UserRepository;
use pets_service::usecase::{PetUseCase, UserUseCase};
use pets_service::utils::errors::ApiError;

#[derive(Default)]
struct State {
    users: HashMap<Id, User>,
    pets: HashMap<Id, Pet>,
}

/// In-memory implementation of both repository contracts. One mutex over
/// the whole state keeps every operation, `assign_pets` included,
/// all-or-nothing.
#[derive(Default)]
pub struct MemoryRepository {
    state: Mutex<State>,
}

impl MemoryRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(MemoryRepository::default())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl UserRepository for MemoryRepository {
    async fn create(&self, user: User) -> Result<User, ApiError> {
        let mut state = self.lock();
        if state.users.values().any(|u| u.email == user.email) {
            return Err(ApiError::Conflict(format!(
                "User with email {} already exists",
                user.email
            )));
        }
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Id) -> Result<User, ApiError> {
        self.lock()
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("User {} does not exist", id)))
    }

    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.lock().users.values().cloned().collect())
    }

    async fn update(&self, user: User) -> Result<User, ApiError> {
        let mut state = self.lock();
        if !state.users.contains_key(&user.id) {
            return Err(ApiError::NotFound(format!("User {} does not exist", user.id)));
        }
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        let mut state = self.lock();
        let user = state
            .users
            .remove(&id)
            .ok_or_else(|| ApiError::NotFound(format!("User {} does not exist", id)))?;

        // Owned pets are released, not deleted.
        for pet_id in user.pets {
            if let Some(pet) = state.pets.get_mut(&pet_id) {
                pet.owner = None;
            }
        }
        Ok(())
    }

    async fn assign_pets(&self, user_id: Id, pet_ids: &[Id]) -> Result<(), ApiError> {
        let mut state = self.lock();

        // Validate everything before mutating anything.
        if !state.users.contains_key(&user_id) {
            return Err(ApiError::NotFound(format!("User {} does not exist", user_id)));
        }
        for pet_id in pet_ids {
            if !state.pets.contains_key(pet_id) {
                return Err(ApiError::NotFound(format!("Pet {} does not exist", pet_id)));
            }
        }

        for pet_id in pet_ids {
            let prior_owner = state.pets.get(pet_id).and_then(|p| p.owner);
            if prior_owner == Some(user_id) {
                continue;
            }
            if let Some(prior) = prior_owner {
                if let Some(owner) = state.users.get_mut(&prior) {
                    owner.pets.retain(|id| id != pet_id);
                }
            }
            if let Some(pet) = state.pets.get_mut(pet_id) {
                pet.owner = Some(user_id);
            }
            if let Some(user) = state.users.get_mut(&user_id) {
                user.pets.push(*pet_id);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PetRepository for MemoryRepository {
    async fn create(&self, pet: Pet) -> Result<Pet, ApiError> {
        self.lock().pets.insert(pet.id, pet.clone());
        Ok(pet)
    }

    async fn find_by_id(&self, id: Id) -> Result<Pet, ApiError> {
        self.lock()
            .pets
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Pet {} does not exist", id)))
    }

    async fn find_all(&self) -> Result<Vec<Pet>, ApiError> {
        Ok(self.lock().pets.values().cloned().collect())
    }

    async fn update(&self, pet: Pet) -> Result<Pet, ApiError> {
        let mut state = self.lock();
        if !state.pets.contains_key(&pet.id) {
            return Err(ApiError::NotFound(format!("Pet {} does not exist", pet.id)));
        }
        state.pets.insert(pet.id, pet.clone());
        Ok(pet)
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        let mut state = self.lock();
        let pet = state
            .pets
            .remove(&id)
            .ok_or_else(|| ApiError::NotFound(format!("Pet {} does not exist", id)))?;

        if let Some(owner_id) = pet.owner {
            if let Some(owner) = state.users.get_mut(&owner_id) {
                owner.pets.retain(|pet_id| *pet_id != id);
            }
        }
        Ok(())
    }
}

/// Both use-cases wired to one shared in-memory store.
pub fn services() -> (UserUseCase, PetUseCase) {
    let repository = MemoryRepository::new();
    (
        UserUseCase::new(repository.clone()),
        PetUseCase::new(repository),
    )
}
