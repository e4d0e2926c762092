//! Domain logic for the family-tree service.
//!
//! Nothing in this crate performs I/O. The database and HTTP layers feed it
//! plain records and get plain values back.

pub mod access;
pub mod error;
pub mod graph;
pub mod layout;
pub mod member;
pub mod relation;
pub mod types;
pub mod validation;
