//! Shared test helpers.

pub mod fold_helpers;
