//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//!   (and the JSON representation served by the API)
//! - A create DTO for inserts
//! - An update DTO for patches

pub mod project;
pub mod status;
pub mod task;
