use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::roles::RoleRequirements;
use crate::state::AppState;

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<BTreeMap<String, Vec<String>>> {
    Json(state.roles.companies())
}

/// GET /api/v1/roles/:company/:role
pub async fn handle_get_requirements(
    State(state): State<AppState>,
    Path((company, role)): Path<(String, String)>,
) -> Result<Json<RoleRequirements>, AppError> {
    state
        .roles
        .requirements(&company, &role)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No requirements for {role} at {company}")))
}
