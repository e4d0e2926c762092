pub mod auth;
pub mod graph;
pub mod member;
pub mod tree;
