//! Core domain concepts shared across the crate.
//!
//! - [`input`] — normalisation of free-text user input

pub mod input;
