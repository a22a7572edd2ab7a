//! Static catalogs: the five risk domains with their questions, and the
//! remediation recommendations per domain.
//!
//! Both catalogs are process-wide immutable configuration expressed as
//! `const` data. Access by name never fails; an unknown domain name yields
//! an empty recommendation list.

pub mod questions;
pub mod recommendations;
