//! Fixed presenter data for the informational pages and the portal
//! dashboard.
//!
//! Everything here is read-only sample content: accessors return references
//! into lazily-built static tables and perform no filtering or aggregation.

pub mod admissions;
pub mod credits;
pub mod dashboard;
