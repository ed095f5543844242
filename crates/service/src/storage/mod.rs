//! Record store backends that live in-process.

pub mod memory;
