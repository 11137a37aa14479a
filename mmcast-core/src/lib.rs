#![no_std]

//! mmcast core - MatrixMarket dense-array format definitions
//!
//! This crate provides the format rules, naming conventions and typed
//! errors for MatrixMarket dense-array conversion. No I/O lives here;
//! the `mmcast` crate supplies the readers, writers and drivers.

extern crate alloc;

pub mod error;
pub mod format;
pub mod naming;

pub use error::*;
pub use format::*;
pub use naming::*;
