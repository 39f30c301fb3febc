//! Filesystem utility helpers.

pub mod fs;

pub use fs::{copy_file, is_regular_file};
