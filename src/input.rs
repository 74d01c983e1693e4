//! Inputs read from disk.

pub mod translation;
