//! CSV parsers for standards tables.

pub mod skip_logic;
