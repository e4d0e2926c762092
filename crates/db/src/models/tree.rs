//! Family tree entity model and DTOs.

use famtree_core::access::Viewer;
use famtree_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `family_trees` table.
///
/// `member_ids` is not a column: it is aggregated from
/// `family_members.tree_id` on every read.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FamilyTree {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    /// Owner-only. Cleared by [`FamilyTree::redacted_for`] for anyone else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_notes: Option<String>,
    pub member_ids: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FamilyTree {
    /// Strip owner-only fields unless `viewer` owns the tree.
    pub fn redacted_for(mut self, viewer: &Viewer) -> Self {
        if !viewer.is_owner(self.owner_id) {
            self.memory_notes = None;
        }
        self
    }
}

/// DTO for creating a new tree.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTree {
    /// Taken from the authenticated caller, never from the request body.
    #[serde(skip)]
    pub owner_id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Defaults to private if omitted.
    #[serde(default)]
    pub is_public: bool,
    pub memory_notes: Option<String>,
}

/// DTO for updating an existing tree. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTree {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
    pub memory_notes: Option<String>,
}
