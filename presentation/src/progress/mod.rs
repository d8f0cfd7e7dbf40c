//! Progress indication while a query is in flight

pub mod spinner;
