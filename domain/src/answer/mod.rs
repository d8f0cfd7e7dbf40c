//! Answer subdomain
//!
//! The nested structure returned by the answer service for one question
//! (answer → pods → subpods → content elements), how its top-level flags
//! are classified, and how it is flattened into display records.

pub mod flatten;
pub mod outcome;
pub mod raw;
