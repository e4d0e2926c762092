//! Handler for the relationship graph of a tree.

use axum::extract::{Path, State};
use axum::Json;
use famtree_core::access;
use famtree_core::graph::{build_graph, FamilyGraph};
use famtree_core::member::MemberProfile;
use famtree_core::types::DbId;
use famtree_db::repositories::MemberRepo;

use crate::error::AppResult;
use crate::handlers::tree::find_tree;
use crate::middleware::auth::MaybeAuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/trees/{tree_id}/graph
///
/// Builds the graph from the tree's current members on every call. Private
/// notes reach the node data only when the caller owns the tree.
pub async fn get_graph(
    caller: MaybeAuthUser,
    State(state): State<AppState>,
    Path(tree_id): Path<DbId>,
) -> AppResult<Json<DataResponse<FamilyGraph>>> {
    let viewer = caller.viewer();
    let tree = find_tree(&state.pool, tree_id).await?;
    access::ensure_can_read_tree(&viewer, tree.owner_id, tree.is_public)?;

    let include_private = viewer.is_owner(tree.owner_id);
    let profiles: Vec<MemberProfile> = MemberRepo::list_by_tree(&state.pool, tree_id)
        .await?
        .into_iter()
        .map(|m| m.into_profile(include_private))
        .collect();

    let graph = build_graph(&profiles);

    tracing::debug!(
        tree_id,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        empty = graph.is_empty(),
        "Built family graph"
    );

    Ok(Json(DataResponse::new(graph)))
}
