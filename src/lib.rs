pub mod domain;
pub mod usecase;
pub mod utils;
