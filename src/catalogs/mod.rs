//! Raw fixture measurement tables and loaders.

pub mod gentech;
