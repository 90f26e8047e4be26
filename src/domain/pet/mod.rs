pub mod model;
pub mod repository;

pub use model::{Pet, PetUpdateReceive};
pub use repository::PetRepository;
