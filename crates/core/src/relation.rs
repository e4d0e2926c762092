//! Relation labels and their semantic categories.
//!
//! A member's relation is free text. The member form offers a closed list of
//! suggestions ([`SUGGESTED_RELATIONS`]) but nothing enforces it, so
//! [`classify`] has to accept any string and falls back to
//! [`RelationCategory::Other`].

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Relation labels offered by the member form.
pub mod labels {
    pub const FATHER: &str = "Father";
    pub const MOTHER: &str = "Mother";
    pub const SON: &str = "Son";
    pub const DAUGHTER: &str = "Daughter";
    pub const BROTHER: &str = "Brother";
    pub const SISTER: &str = "Sister";
    pub const SPOUSE: &str = "Spouse";
    pub const GRANDPARENT: &str = "Grandparent";
    pub const GRANDCHILD: &str = "Grandchild";
    pub const AUNT: &str = "Aunt";
    pub const UNCLE: &str = "Uncle";
    pub const COUSIN: &str = "Cousin";
    pub const OTHER: &str = "Other";
}

/// Suggested relation labels, in the order the member form lists them.
pub const SUGGESTED_RELATIONS: &[&str] = &[
    labels::FATHER,
    labels::MOTHER,
    labels::SON,
    labels::DAUGHTER,
    labels::BROTHER,
    labels::SISTER,
    labels::SPOUSE,
    labels::GRANDPARENT,
    labels::GRANDCHILD,
    labels::AUNT,
    labels::UNCLE,
    labels::COUSIN,
    labels::OTHER,
];

/// Returns `true` if the label is one of the form's suggestions.
pub fn is_suggested_relation(label: &str) -> bool {
    SUGGESTED_RELATIONS.contains(&label)
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Semantic category a relation label falls into for graph building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationCategory {
    Parent,
    Child,
    Spouse,
    Other,
}

impl RelationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Spouse => "spouse",
            Self::Other => "other",
        }
    }
}

/// Map a relation label to its category.
///
/// Matching is exact and case-sensitive. Anything that is not one of the
/// parent, child or spouse labels (siblings, grandparents, cousins, free
/// text, the empty string) is [`RelationCategory::Other`].
pub fn classify(label: &str) -> RelationCategory {
    match label {
        labels::FATHER | labels::MOTHER => RelationCategory::Parent,
        labels::SON | labels::DAUGHTER => RelationCategory::Child,
        labels::SPOUSE => RelationCategory::Spouse,
        _ => RelationCategory::Other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_classify_as_parent() {
        assert_eq!(classify("Father"), RelationCategory::Parent);
        assert_eq!(classify("Mother"), RelationCategory::Parent);
    }

    #[test]
    fn children_classify_as_child() {
        assert_eq!(classify("Son"), RelationCategory::Child);
        assert_eq!(classify("Daughter"), RelationCategory::Child);
    }

    #[test]
    fn spouse_classifies_as_spouse() {
        assert_eq!(classify("Spouse"), RelationCategory::Spouse);
    }

    #[test]
    fn remaining_suggestions_classify_as_other() {
        for label in [
            "Brother",
            "Sister",
            "Grandparent",
            "Grandchild",
            "Aunt",
            "Uncle",
            "Cousin",
            "Other",
        ] {
            assert_eq!(classify(label), RelationCategory::Other, "label {label}");
        }
    }

    #[test]
    fn free_text_falls_through_to_other() {
        assert_eq!(classify(""), RelationCategory::Other);
        assert_eq!(classify("Step-father"), RelationCategory::Other);
        assert_eq!(classify("father"), RelationCategory::Other);
        assert_eq!(classify(" Father "), RelationCategory::Other);
    }

    #[test]
    fn suggestion_list_is_closed_but_not_enforced() {
        assert_eq!(SUGGESTED_RELATIONS.len(), 13);
        assert!(is_suggested_relation("Cousin"));
        assert!(!is_suggested_relation("Godmother"));
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&RelationCategory::Parent).unwrap();
        assert_eq!(json, "\"parent\"");
        assert_eq!(RelationCategory::Spouse.as_str(), "spouse");
    }
}
