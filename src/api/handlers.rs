use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    Set,
};

use crate::db::entities::celestial_object;
use crate::error::{Result, ServerError};

use super::types::{CelestialObjectBody, CelestialObjectPayload};

/// Application state shared across handlers
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Rows whose orbited_object_id points at the given id.
async fn satellites_of(
    db: &DatabaseConnection,
    id: i32,
) -> std::result::Result<Vec<celestial_object::Model>, DbErr> {
    celestial_object::Entity::find()
        .filter(celestial_object::Column::OrbitedObjectId.eq(id))
        .all(db)
        .await
}

/// GET /:id or GET /:name - single-segment lookup.
/// An integer segment is an id lookup, anything else a name lookup.
pub async fn get_object(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Response> {
    match key.parse::<i32>() {
        Ok(id) => get_by_id(&state, id).await,
        Err(_) => get_by_name(&state, &key).await,
    }
}

async fn get_by_id(state: &AppState, id: i32) -> Result<Response> {
    tracing::debug!("get_by_id: id={}", id);

    let object = celestial_object::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ServerError::ObjectNotFound)?;

    let satellites = satellites_of(&state.db, id).await?;
    let body = CelestialObjectBody::from_model(object, satellites);

    Ok(Json(body).into_response())
}

async fn get_by_name(state: &AppState, name: &str) -> Result<Response> {
    tracing::debug!("get_by_name: name={}", name);

    let objects = celestial_object::Entity::find()
        .filter(celestial_object::Column::Name.eq(name))
        .all(&state.db)
        .await?;

    if objects.is_empty() {
        return Err(ServerError::ObjectNotFound);
    }

    let mut bodies = Vec::with_capacity(objects.len());
    for object in objects {
        let satellites = satellites_of(&state.db, object.id).await?;
        bodies.push(CelestialObjectBody::from_model(object, satellites));
    }

    Ok(Json(bodies).into_response())
}

/// GET / - List all celestial objects with their satellites.
/// An empty store yields 200 with an empty array, never 404.
pub async fn get_all(State(state): State<Arc<AppState>>) -> Result<Response> {
    let objects = celestial_object::Entity::find().all(&state.db).await?;

    let mut bodies = Vec::with_capacity(objects.len());
    for object in objects {
        let satellites = satellites_of(&state.db, object.id).await?;
        bodies.push(CelestialObjectBody::from_model(object, satellites));
    }

    Ok(Json(bodies).into_response())
}

/// POST / - Create a celestial object. The store assigns the id;
/// the payload's Id field is ignored here. No referential check on
/// orbited_object_id.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CelestialObjectPayload>,
) -> Result<Response> {
    let new_object = celestial_object::ActiveModel {
        name: Set(payload.name),
        orbital_period: Set(payload.orbital_period),
        orbited_object_id: Set(payload.orbited_object_id),
        ..Default::default()
    };

    let created = new_object.insert(&state.db).await?;
    tracing::debug!("create: assigned id={}", created.id);

    let body = CelestialObjectBody::from_model(created.clone(), Vec::new());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/{}", created.id))],
        Json(body),
    )
        .into_response())
}

/// PUT /:id - Overwrite name, orbital period and orbit target.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<CelestialObjectPayload>,
) -> Result<Response> {
    let existing = celestial_object::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ServerError::ObjectNotFound)?;

    let mut object: celestial_object::ActiveModel = existing.into();
    object.name = Set(payload.name);
    object.orbital_period = Set(payload.orbital_period);
    // The orbit target comes from the payload's Id field, not its
    // OrbitedObjectId field. Established contract; callers depend on it.
    object.orbited_object_id = Set(Some(payload.id));
    object.update(&state.db).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// PATCH /:id/:name - Rename an object, leaving other fields untouched.
pub async fn rename_object(
    State(state): State<Arc<AppState>>,
    Path((id, name)): Path<(i32, String)>,
) -> Result<Response> {
    let existing = celestial_object::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ServerError::ObjectNotFound)?;

    let mut object: celestial_object::ActiveModel = existing.into();
    object.name = Set(name);
    object.update(&state.db).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// DELETE /:id - Remove the object and every object orbiting it.
pub async fn delete_object(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Response> {
    let target_or_satellite = Condition::any()
        .add(celestial_object::Column::Id.eq(id))
        .add(celestial_object::Column::OrbitedObjectId.eq(id));

    let matched = celestial_object::Entity::find()
        .filter(target_or_satellite.clone())
        .all(&state.db)
        .await?;

    if matched.is_empty() {
        return Err(ServerError::ObjectNotFound);
    }

    tracing::debug!("delete: id={} removes {} row(s)", id, matched.len());

    celestial_object::Entity::delete_many()
        .filter(target_or_satellite)
        .exec(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
