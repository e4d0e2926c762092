//! Repository for the `family_members` table (the member store).

use famtree_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::{CreateMember, Member, UpdateMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tree_id, name, relation, birth_date, death_date, email, phone, \
                        bio, profile_photo_url, memory_notes, created_at, updated_at";

/// Provides CRUD operations for family members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO family_members
                (tree_id, name, relation, birth_date, death_date, email, phone,
                 bio, profile_photo_url, memory_notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(input.tree_id)
            .bind(&input.name)
            .bind(&input.relation)
            .bind(input.birth_date)
            .bind(input.death_date)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.bio)
            .bind(&input.profile_photo_url)
            .bind(&input.memory_notes)
            .fetch_one(pool)
            .await
    }

    /// Find a member by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM family_members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all members of a tree in insertion order.
    ///
    /// The order is stable across calls, so the graph layout of an unchanged
    /// tree does not shift between fetches.
    pub async fn list_by_tree(pool: &PgPool, tree_id: DbId) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM family_members WHERE tree_id = $1 ORDER BY id");
        sqlx::query_as::<_, Member>(&query)
            .bind(tree_id)
            .fetch_all(pool)
            .await
    }

    /// Count the members of a tree.
    pub async fn count_by_tree(pool: &PgPool, tree_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM family_members WHERE tree_id = $1")
            .bind(tree_id)
            .fetch_one(pool)
            .await
    }

    /// Update a member. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMember,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "UPDATE family_members SET
                name = COALESCE($2, name),
                relation = COALESCE($3, relation),
                birth_date = COALESCE($4, birth_date),
                death_date = COALESCE($5, death_date),
                email = COALESCE($6, email),
                phone = COALESCE($7, phone),
                bio = COALESCE($8, bio),
                profile_photo_url = COALESCE($9, profile_photo_url),
                memory_notes = COALESCE($10, memory_notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.relation)
            .bind(input.birth_date)
            .bind(input.death_date)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.bio)
            .bind(&input.profile_photo_url)
            .bind(&input.memory_notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a member. Returns `true` if a row was removed.
    ///
    /// The owning tree's member list is derived, so nothing else needs
    /// updating.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM family_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
