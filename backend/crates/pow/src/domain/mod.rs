//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (CandidateMessage, PowSolution, MessageSignature)
//! - Domain value objects (Difficulty, Nickname)
//! - Domain services (digest and leading-zero logic)
//! - Observer traits (interfaces)

pub mod entities;
pub mod observer;
pub mod services;
pub mod value_objects;
