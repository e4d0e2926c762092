//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod member_repo;
pub mod tree_repo;
pub mod user_repo;

pub use member_repo::MemberRepo;
pub use tree_repo::TreeRepo;
pub use user_repo::UserRepo;
