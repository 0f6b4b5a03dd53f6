//! Tab Routes
//!
//! - GET /api/v1/tabs/:tab - Content block for a tab
//!
//! Unknown tab names resolve to the overview block.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::dashboard::{router, ContentBlock, Tab};

/// GET /api/v1/tabs/:tab
pub async fn get_tab(
    State(state): State<Arc<AppState>>,
    Path(tab): Path<String>,
) -> Json<ContentBlock> {
    Json(router::render(Tab::from_tag(&tab), &state.groups))
}
