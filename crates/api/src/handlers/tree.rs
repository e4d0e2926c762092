//! Handlers for the `/trees` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use famtree_core::access;
use famtree_core::error::CoreError;
use famtree_core::types::DbId;
use famtree_core::validation;
use famtree_db::models::tree::{CreateTree, FamilyTree, UpdateTree};
use famtree_db::repositories::TreeRepo;
use famtree_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a tree or fail with 404.
pub(crate) async fn find_tree(pool: &DbPool, id: DbId) -> AppResult<FamilyTree> {
    TreeRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FamilyTree",
            id,
        }))
}

/// GET /api/v1/trees
///
/// Trees owned by the caller.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FamilyTree>>>> {
    let trees = TreeRepo::list_by_owner(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse::new(trees)))
}

/// POST /api/v1/trees
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateTree>,
) -> AppResult<(StatusCode, Json<DataResponse<FamilyTree>>)> {
    validation::validate_tree_name(&input.name).map_err(AppError::validation)?;
    input.owner_id = auth.user_id;

    let tree = TreeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        tree_id = tree.id,
        is_public = tree.is_public,
        "Tree created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(tree))))
}

/// GET /api/v1/trees/{id}
///
/// The owner always; anyone else only if the tree is public.
pub async fn get_by_id(
    caller: MaybeAuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FamilyTree>>> {
    let viewer = caller.viewer();
    let tree = find_tree(&state.pool, id).await?;
    access::ensure_can_read_tree(&viewer, tree.owner_id, tree.is_public)?;

    Ok(Json(DataResponse::new(tree.redacted_for(&viewer))))
}

/// PATCH /api/v1/trees/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTree>,
) -> AppResult<Json<DataResponse<FamilyTree>>> {
    let tree = find_tree(&state.pool, id).await?;
    access::ensure_can_modify_tree(&auth.viewer(), tree.owner_id)?;

    if let Some(name) = &input.name {
        validation::validate_tree_name(name).map_err(AppError::validation)?;
    }

    let tree = TreeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FamilyTree",
            id,
        }))?;

    tracing::info!(user_id = auth.user_id, tree_id = id, "Tree updated");
    Ok(Json(DataResponse::new(tree)))
}

/// DELETE /api/v1/trees/{id}
///
/// Members of the tree are deleted with it.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let tree = find_tree(&state.pool, id).await?;
    access::ensure_can_modify_tree(&auth.viewer(), tree.owner_id)?;

    if !TreeRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FamilyTree",
            id,
        }));
    }

    tracing::info!(
        user_id = auth.user_id,
        tree_id = id,
        member_count = tree.member_ids.len(),
        "Tree deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}
