//! Interactive prompting

pub mod interactive;
