pub mod info_repository;
pub use info_repository::{InfoRepository, InfoRepositoryError};
