//! Unit tests for individual functions

mod forward_resolution_tests;
mod path_normalization_tests;
