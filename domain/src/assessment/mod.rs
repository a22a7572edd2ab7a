//! Assessment entities, scoring arithmetic, risk classification, and the
//! serialisable report document.

pub mod entities;
pub mod report;
pub mod risk_level;
pub mod scoring;
