use crate::core::failure::Failure;
use crate::domain::model::NormalizedPerson;
use crate::server::AppState;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

/// The presentation layer calls the lower-case routes, with a trailing slash on the listing.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/StarW", get(list_people))
        .route("/starw", get(list_people))
        .route("/starw/", get(list_people))
        .route("/StarW/:id", get(get_person))
        .route("/starw/:id", get(get_person))
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn list_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<NormalizedPerson>>, Failure> {
    let people = state.people.list_people().await?;
    Ok(Json(people))
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NormalizedPerson>, Failure> {
    let id = parse_person_id(&id)?;
    let person = state.people.get_person(id).await?;
    Ok(Json(person))
}

pub async fn get_health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Ids are positive integers; anything else matches no person.
pub fn parse_person_id(raw: &str) -> Result<u32, Failure> {
    match raw.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Failure::NotFound(format!(
            "'{}' is not a valid person id",
            raw
        ))),
    }
}
