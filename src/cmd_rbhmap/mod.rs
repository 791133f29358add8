//! Subcommand modules for the `rbhmap` binary.

pub mod blast;
pub mod map2colin;
pub mod map2split;
