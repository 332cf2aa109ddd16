//! Shared vocabulary for the Skynova catalog service.
//!
//! This crate has no internal dependencies so it can be used by the
//! database layer, the API server, and the client state layer alike.

pub mod catalog;
pub mod filters;
pub mod types;
