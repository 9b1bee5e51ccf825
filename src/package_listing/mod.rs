//! Package listing core
//!
//! Turns the text printed by a package manager's list command into a
//! [`domain::PackageSet`]. Dialect knowledge (which command, which line
//! pattern) lives in [`dialects`]; the parser itself is dialect-agnostic.

pub mod dialects;
pub mod domain;
pub mod services;
