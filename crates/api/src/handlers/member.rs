//! Handlers for family members.
//!
//! Members are created and listed under `/trees/{tree_id}/members` and
//! addressed directly under `/members/{id}`. Access always follows the
//! owning tree.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use famtree_core::access::{self, Viewer};
use famtree_core::error::CoreError;
use famtree_core::relation::{classify, is_suggested_relation};
use famtree_core::types::{CalendarDate, DbId};
use famtree_core::validation;
use famtree_db::models::member::{CreateMember, Member, UpdateMember};
use famtree_db::models::tree::FamilyTree;
use famtree_db::repositories::MemberRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::tree::find_tree;
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/trees/{tree_id}/members
pub async fn list_by_tree(
    caller: MaybeAuthUser,
    State(state): State<AppState>,
    Path(tree_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Member>>>> {
    let viewer = caller.viewer();
    let tree = find_tree(&state.pool, tree_id).await?;
    access::ensure_can_read_tree(&viewer, tree.owner_id, tree.is_public)?;

    let include_private = viewer.is_owner(tree.owner_id);
    let members = MemberRepo::list_by_tree(&state.pool, tree_id)
        .await?
        .into_iter()
        .map(|m| m.redacted(include_private))
        .collect();

    Ok(Json(DataResponse::new(members)))
}

/// POST /api/v1/trees/{tree_id}/members
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(tree_id): Path<DbId>,
    Json(mut input): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<DataResponse<Member>>)> {
    let tree = find_tree(&state.pool, tree_id).await?;
    access::ensure_can_modify_tree(&auth.viewer(), tree.owner_id)?;

    input.tree_id = tree_id;
    input.relation = input.relation.trim().to_string();
    input.email = non_empty(input.email);
    validation::validate_member_name(&input.name).map_err(AppError::validation)?;
    validation::validate_relation(&input.relation).map_err(AppError::validation)?;
    validate_optional_email(input.email.as_deref())?;
    validation::validate_life_span(input.birth_date, input.death_date)
        .map_err(AppError::validation)?;

    let member = MemberRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        tree_id,
        member_id = member.id,
        relation = %member.relation,
        category = classify(&member.relation).as_str(),
        suggested = is_suggested_relation(&member.relation),
        "Member created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(member))))
}

/// GET /api/v1/members/{id}
pub async fn get_by_id(
    caller: MaybeAuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Member>>> {
    let viewer = caller.viewer();
    let (member, tree) = find_member_with_tree(&state, id).await?;
    access::ensure_can_read_tree(&viewer, tree.owner_id, tree.is_public)?;

    let include_private = viewer.is_owner(tree.owner_id);
    Ok(Json(DataResponse::new(member.redacted(include_private))))
}

/// PATCH /api/v1/members/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateMember>,
) -> AppResult<Json<DataResponse<Member>>> {
    let (existing, tree) = find_member_with_tree(&state, id).await?;
    ensure_owner(&auth.viewer(), &tree)?;

    input.relation = input.relation.map(|r| r.trim().to_string());
    input.email = non_empty(input.email);

    if let Some(name) = &input.name {
        validation::validate_member_name(name).map_err(AppError::validation)?;
    }
    if let Some(relation) = &input.relation {
        validation::validate_relation(relation).map_err(AppError::validation)?;
    }
    validate_optional_email(input.email.as_deref())?;
    validate_merged_life_span(&existing, input.birth_date, input.death_date)?;

    let member = MemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        tree_id = tree.id,
        member_id = id,
        "Member updated"
    );
    Ok(Json(DataResponse::new(member)))
}

/// DELETE /api/v1/members/{id}
///
/// The member disappears from the tree's member list and from the next
/// graph build with no further bookkeeping.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let (_member, tree) = find_member_with_tree(&state, id).await?;
    ensure_owner(&auth.viewer(), &tree)?;

    if !MemberRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }));
    }

    tracing::info!(
        user_id = auth.user_id,
        tree_id = tree.id,
        member_id = id,
        "Member deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_member_with_tree(state: &AppState, id: DbId) -> AppResult<(Member, FamilyTree)> {
    let member = MemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }))?;
    let tree = find_tree(&state.pool, member.tree_id).await?;
    Ok((member, tree))
}

fn ensure_owner(viewer: &Viewer, tree: &FamilyTree) -> AppResult<()> {
    access::ensure_can_modify_tree(viewer, tree.owner_id)?;
    Ok(())
}

/// A blank optional field means "not given".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate_optional_email(email: Option<&str>) -> AppResult<()> {
    match email {
        Some(email) => validation::validate_email(email).map_err(AppError::validation),
        None => Ok(()),
    }
}

/// Check the life span the row will have once the patch is applied.
fn validate_merged_life_span(
    existing: &Member,
    birth: Option<CalendarDate>,
    death: Option<CalendarDate>,
) -> AppResult<()> {
    validation::validate_life_span(
        birth.or(existing.birth_date),
        death.or(existing.death_date),
    )
    .map_err(AppError::validation)
}
