//! CLI library components for the survey validator.

pub mod logging;
pub mod pipeline;
