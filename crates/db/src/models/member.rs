//! Family member entity model and DTOs.

use famtree_core::member::MemberProfile;
use famtree_core::types::{CalendarDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `family_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub tree_id: DbId,
    pub name: String,
    pub relation: String,
    pub birth_date: Option<CalendarDate>,
    pub death_date: Option<CalendarDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    /// Owner-only. Cleared by [`Member::redacted`] for anyone else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Member {
    /// Drop the private note unless the caller owns the tree.
    pub fn redacted(mut self, include_private: bool) -> Self {
        if !include_private {
            self.memory_notes = None;
        }
        self
    }

    /// Convert into the graph builder's input record.
    pub fn into_profile(self, include_private: bool) -> MemberProfile {
        MemberProfile {
            id: self.id.to_string(),
            tree_id: self.tree_id.to_string(),
            name: self.name,
            relation: self.relation,
            birth_date: self.birth_date,
            death_date: self.death_date,
            email: self.email,
            phone: self.phone,
            bio: self.bio,
            profile_photo_url: self.profile_photo_url,
            memory_notes: if include_private {
                self.memory_notes
            } else {
                None
            },
        }
    }
}

/// DTO for creating a new member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMember {
    /// Taken from the request path, never from the body.
    #[serde(skip)]
    pub tree_id: DbId,
    pub name: String,
    pub relation: String,
    pub birth_date: Option<CalendarDate>,
    pub death_date: Option<CalendarDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub memory_notes: Option<String>,
}

/// DTO for updating an existing member. All fields are optional.
///
/// A member cannot be moved to another tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub relation: Option<String>,
    pub birth_date: Option<CalendarDate>,
    pub death_date: Option<CalendarDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub memory_notes: Option<String>,
}
