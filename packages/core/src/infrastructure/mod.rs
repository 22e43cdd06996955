//! Infrastructure layer: store port, wire format and repository
//! implementations backing the domain contracts.

pub mod dto;
pub mod repository;
pub mod store;
