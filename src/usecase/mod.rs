pub mod user;
pub mod pet;

pub use user::UserUseCase;
pub use pet::PetUseCase;
