//! Capabilities shared by every profile role: the Info record lifecycle and
//! the catalogue of ads hanging off it.

pub mod adapter;
pub mod application;
