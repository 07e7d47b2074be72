pub mod access;
pub mod company;
pub mod professional;
pub mod profile;
