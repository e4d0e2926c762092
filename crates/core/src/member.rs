//! The member record as seen by the graph builder and rendering surface.

use serde::{Deserialize, Serialize};

use crate::relation::{classify, RelationCategory};
use crate::types::CalendarDate;

/// A member's displayable fields.
///
/// The id is opaque: the store decides how to spell it. `memory_notes` is the
/// owner-only note; whoever builds the profile leaves it `None` for any other
/// viewer, and it is then omitted from serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub id: String,
    pub tree_id: String,
    pub name: String,
    pub relation: String,
    #[serde(default)]
    pub birth_date: Option<CalendarDate>,
    #[serde(default)]
    pub death_date: Option<CalendarDate>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_notes: Option<String>,
}

impl MemberProfile {
    /// A profile with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        tree_id: impl Into<String>,
        name: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            tree_id: tree_id.into(),
            name: name.into(),
            relation: relation.into(),
            birth_date: None,
            death_date: None,
            email: None,
            phone: None,
            bio: None,
            profile_photo_url: None,
            memory_notes: None,
        }
    }

    pub fn category(&self) -> RelationCategory {
        classify(&self.relation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_follows_relation_label() {
        assert_eq!(
            MemberProfile::new("1", "t", "Ada", "Mother").category(),
            RelationCategory::Parent
        );
        assert_eq!(
            MemberProfile::new("2", "t", "Bo", "Neighbour").category(),
            RelationCategory::Other
        );
    }

    #[test]
    fn private_note_is_omitted_when_absent() {
        let profile = MemberProfile::new("1", "t", "Ada", "Mother");
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("memory_notes").is_none());
        assert!(json["birth_date"].is_null());

        let mut owned = profile;
        owned.memory_notes = Some("call on Sundays".into());
        let json = serde_json::to_value(&owned).unwrap();
        assert_eq!(json["memory_notes"], "call on Sundays");
    }

    #[test]
    fn dates_serialize_as_calendar_dates() {
        let mut profile = MemberProfile::new("1", "t", "Ada", "Mother");
        profile.birth_date = CalendarDate::from_ymd_opt(1931, 4, 2);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["birth_date"], "1931-04-02");
    }
}
