//! Output rendering
//! Report views and console/JSON formatters

pub mod formatter;
pub mod report;
