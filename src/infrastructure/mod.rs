//! Adapters for the domain ports: file and in-memory car repositories,
//! the system clock and RNG, and the database seeder.

pub mod clock;
pub mod in_memory;
pub mod json_file;
pub mod random;
pub mod seed;
