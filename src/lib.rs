//! Development-mode admin service for curating a game texture catalog
//!
//! Reconciles three independently cached data sources — the raw texture
//! enumeration, the name/category metadata, and the category list — into one
//! consistent in-memory catalog, commits operator edits to the external
//! metadata store, and projects the catalog into a filtered, paginated view
//! served over HTTP.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod sources;
pub mod store;
pub mod view;
pub mod web;
