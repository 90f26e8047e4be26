pub mod id;
pub mod user;
pub mod pet;

pub use id::Id;
