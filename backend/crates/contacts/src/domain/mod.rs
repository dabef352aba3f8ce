//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Contact)
//! - Domain services (ownership checks)
//! - Repository traits (interfaces)

pub mod entities;
pub mod ownership;
pub mod repository;
