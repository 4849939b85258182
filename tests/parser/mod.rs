//! Parser tests

pub mod tests_impex;
pub mod tests_lossless;
