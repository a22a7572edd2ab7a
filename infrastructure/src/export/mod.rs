//! Report export adapters

pub mod json_file;
