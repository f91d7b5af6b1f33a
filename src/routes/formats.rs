use axum::{
    Json, Router,
    extract::Path,
    routing::get,
};

use crate::{
    catalog,
    dto::formats::{FormatSummary, RulesSummary},
    error::AppError,
    state::SharedState,
};

/// Routes exposing the static format catalog and rules reference.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/formats", get(list_formats))
        .route("/formats/{id}/rules", get(format_rules))
}

#[utoipa::path(
    get,
    path = "/formats",
    tag = "formats",
    responses((status = 200, description = "Selectable game formats", body = [FormatSummary]))
)]
/// List every selectable game format in catalog order.
pub async fn list_formats() -> Json<Vec<FormatSummary>> {
    Json(catalog::formats().iter().map(Into::into).collect())
}

#[utoipa::path(
    get,
    path = "/formats/{id}/rules",
    tag = "formats",
    params(("id" = String, Path, description = "Identifier of the format")),
    responses(
        (status = 200, description = "Rules reference for the format", body = RulesSummary),
        (status = 404, description = "Unknown format or no rules sheet")
    )
)]
/// Rules reference sheet for one catalog format.
pub async fn format_rules(Path(id): Path<String>) -> Result<Json<RulesSummary>, AppError> {
    let Some(format) = catalog::find(&id) else {
        return Err(AppError::NotFound(format!("unknown format `{id}`")));
    };
    let Some(rules) = catalog::rules_for_format(format.format) else {
        return Err(AppError::NotFound(format!(
            "no rules sheet for `{}`",
            format.format
        )));
    };
    Ok(Json(rules.into()))
}
