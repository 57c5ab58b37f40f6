//! Database models shared across the clinic repository.

pub mod config;
pub mod owner;
pub mod pet;
pub mod vet;
pub mod visit;
