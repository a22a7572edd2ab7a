//! Infrastructure layer for riskscope
//!
//! Adapters for the application ports. Currently one: the JSON file report
//! exporter.

pub mod export;

pub use export::json_file::JsonFileExporter;
