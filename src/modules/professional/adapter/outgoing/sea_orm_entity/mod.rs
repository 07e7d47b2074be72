pub mod professionals;
