//! Request handlers.
//!
//! Handlers delegate to the repositories in `skynova_db`. Backend
//! failures never fail the page: they are logged and degraded to an
//! empty envelope per the catalog error contract.

pub mod skins;
