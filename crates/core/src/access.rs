//! Who may see and change a tree.
//!
//! Request handlers resolve the caller into a [`Viewer`] and pass it down
//! explicitly; nothing below the HTTP layer reads session state.

use crate::error::CoreError;
use crate::types::DbId;

/// The caller of a request: an authenticated user or an anonymous visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: Option<DbId>,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn user(user_id: DbId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Whether this viewer owns a tree owned by `owner_id`. Owners see
    /// private notes.
    pub fn is_owner(&self, owner_id: DbId) -> bool {
        self.user_id == Some(owner_id)
    }
}

/// Owners can always read their trees; anyone can read a public tree.
pub fn can_read_tree(viewer: &Viewer, owner_id: DbId, is_public: bool) -> bool {
    is_public || viewer.is_owner(owner_id)
}

/// Only the owner may change a tree or its members.
pub fn can_modify_tree(viewer: &Viewer, owner_id: DbId) -> bool {
    viewer.is_owner(owner_id)
}

pub fn ensure_can_read_tree(
    viewer: &Viewer,
    owner_id: DbId,
    is_public: bool,
) -> Result<(), CoreError> {
    if can_read_tree(viewer, owner_id, is_public) {
        return Ok(());
    }
    Err(denied(viewer, "Not authorized to access this tree"))
}

pub fn ensure_can_modify_tree(viewer: &Viewer, owner_id: DbId) -> Result<(), CoreError> {
    if can_modify_tree(viewer, owner_id) {
        return Ok(());
    }
    Err(denied(viewer, "Not authorized to modify this tree"))
}

/// Anonymous callers are asked to authenticate; signed-in callers are refused.
fn denied(viewer: &Viewer, message: &str) -> CoreError {
    if viewer.is_authenticated() {
        CoreError::Forbidden(message.into())
    } else {
        CoreError::Unauthorized(message.into())
    }
}
