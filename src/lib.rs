//! annotext - text sample quality annotation backend.
//!
//! A small service for rating text samples on quality and pairwise
//! preference: CRUD endpoints for samples, annotations, and comparisons,
//! bulk CSV/JSON import, CSV export, and aggregate analytics, backed by
//! SQLite.

pub mod cli;
pub mod config;
pub mod models;
pub mod repository;
pub mod schema;
pub mod server;
pub mod services;
pub mod utils;
