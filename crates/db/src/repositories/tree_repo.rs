//! Repository for the `family_trees` table.

use famtree_core::types::DbId;
use sqlx::PgPool;

use crate::models::tree::{CreateTree, FamilyTree, UpdateTree};

/// Column list shared across queries to avoid repetition.
///
/// `member_ids` is derived from `family_members` so it can never drift from
/// the members' own `tree_id`.
const COLUMNS: &str = "id, owner_id, name, description, is_public, memory_notes, \
     ARRAY(SELECT m.id FROM family_members m WHERE m.tree_id = family_trees.id ORDER BY m.id) \
     AS member_ids, \
     created_at, updated_at";

/// Provides CRUD operations for family trees.
pub struct TreeRepo;

impl TreeRepo {
    /// Insert a new tree, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTree) -> Result<FamilyTree, sqlx::Error> {
        let query = format!(
            "INSERT INTO family_trees (owner_id, name, description, is_public, memory_notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FamilyTree>(&query)
            .bind(input.owner_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_public)
            .bind(&input.memory_notes)
            .fetch_one(pool)
            .await
    }

    /// Find a tree by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FamilyTree>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM family_trees WHERE id = $1");
        sqlx::query_as::<_, FamilyTree>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List trees owned by a user, most recently created first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<FamilyTree>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM family_trees
             WHERE owner_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, FamilyTree>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a tree. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTree,
    ) -> Result<Option<FamilyTree>, sqlx::Error> {
        let query = format!(
            "UPDATE family_trees SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_public = COALESCE($4, is_public),
                memory_notes = COALESCE($5, memory_notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FamilyTree>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_public)
            .bind(&input.memory_notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tree and, by cascade, all of its members.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM family_trees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
