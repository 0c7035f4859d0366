//! Presentation boundaries: receipt formatting and CSV batch I/O.

pub mod csv;
pub mod format;
