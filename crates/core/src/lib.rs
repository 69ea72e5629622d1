//! Core domain for the albums catalog.
//!
//! Pure types, validation and storage contracts. Nothing in this crate
//! performs I/O; storage backends live in the server crate.

pub mod album;
pub mod storage;
