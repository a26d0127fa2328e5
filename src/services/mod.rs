//! Application services shared between the HTTP handlers and the CLI.

pub mod seed;
