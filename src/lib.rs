pub mod health;
pub mod modules;
pub mod shared;
pub mod state;

pub use state::AppState;

#[cfg(test)]
mod tests;
