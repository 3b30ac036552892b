//! Presentation Layer - Console and JSON output
//!
//! This layer contains:
//! - Console observer and text report writer
//! - Serializable report DTOs

pub mod console;
pub mod dto;
