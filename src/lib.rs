//! АгроДанные КЗ landing service.
//!
//! Renders the static entry page of the farm management application and
//! serves it over HTTP.

pub mod config;
pub mod error;
pub mod landing;
pub mod routes;
pub mod state;
