pub mod model;
pub mod repository;

pub use model::{User, UserUpdateReceive};
pub use repository::UserRepository;
