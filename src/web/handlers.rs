//! HTTP handlers for the parolee resources

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use sysinfo::System;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, warn};

use super::error::ApiError;
use super::state::AppState;
use crate::domain::{Conviction, Movement, ParoleViolation, Parolee, ParoleeDto};
use crate::fixtures;
use crate::store::{EntityRef, StoreStats};

/// Pagination parameters for the collection
///
/// `start` is 1-based; both default to 1.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub start: Option<i64>,
    pub size: Option<i64>,
}

/// Service statistics response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStats {
    /// Store counters
    pub store: StoreStats,
    /// Total system memory in MB
    pub total_memory_mb: f64,
    /// Used system memory in MB
    pub used_memory_mb: f64,
    /// Free system memory in MB
    pub free_memory_mb: f64,
    /// CPU usage percentage (0-100)
    pub cpu_usage: f64,
}

fn find(state: &AppState, id: u64) -> Result<EntityRef<Parolee>, ApiError> {
    state.db.get(id).ok_or(ApiError::NotFound { id })
}

/// Reset the store to the seed parolees
pub async fn reset_parolees(State(state): State<AppState>) -> StatusCode {
    info!("Resetting parolee store");
    fixtures::reload(&state.db);
    StatusCode::NO_CONTENT
}

/// Create a parolee; responds with its location
pub async fn create_parolee(
    State(state): State<AppState>,
    Json(dto): Json<ParoleeDto>,
) -> impl IntoResponse {
    let id = state.db.insert(dto.into_domain());
    info!("Created parolee {}", id);
    (
        StatusCode::CREATED,
        [(header::LOCATION, state.parolee_uri(id))],
    )
}

/// List a window of parolees with prev/next links
pub async fn list_parolees(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Response, ApiError> {
    let start = page.start.unwrap_or(1);
    let size = page.size.unwrap_or(1);
    debug!("Listing parolees start={} size={}", start, size);

    // An empty page would link back to itself
    if size < 1 {
        return Err(ApiError::BadRequest(format!("page size must be at least 1, got {}", size)));
    }

    let parolees = state.db.list_range(start.saturating_sub(1), size)?;
    let dtos: Vec<ParoleeDto> = parolees
        .iter()
        .map(|p| ParoleeDto::from_domain(&p.read()))
        .collect();

    let mut links = Vec::new();
    if start > 1 {
        let prev = (start - size).max(1);
        links.push(format!(
            "<{}?start={}&size={}>; rel=\"prev\"",
            state.collection_uri(),
            prev,
            size
        ));
    }
    let len = state.db.len() as i64;
    if start - 1 + size < len {
        links.push(format!(
            "<{}?start={}&size={}>; rel=\"next\"",
            state.collection_uri(),
            start + size,
            size
        ));
    }

    let mut headers = HeaderMap::new();
    if !links.is_empty() {
        let value = HeaderValue::from_str(&links.join(", "))
            .map_err(|e| ApiError::BadRequest(format!("invalid link header: {}", e)))?;
        headers.insert(header::LINK, value);
    }

    Ok((headers, Json(dtos)).into_response())
}

pub async fn get_parolee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ParoleeDto>, ApiError> {
    let parolee = find(&state, id)?;
    let dto = ParoleeDto::from_domain(&parolee.read());
    Ok(Json(dto))
}

/// Update a parolee's personal details
pub async fn update_parolee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(dto): Json<ParoleeDto>,
) -> Result<StatusCode, ApiError> {
    let parolee = find(&state, id)?;
    dto.apply_to(&mut parolee.write());
    info!("Updated parolee {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a parolee; deleting an unknown id still succeeds
pub async fn delete_parolee(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    if state.db.delete(id) {
        info!("Deleted parolee {}", id);
    }
    StatusCode::NO_CONTENT
}

pub async fn get_movements(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Movement>>, ApiError> {
    let parolee = find(&state, id)?;
    let movements = parolee.read().movements().to_vec();
    Ok(Json(movements))
}

/// Record a movement and publish a violation if it breaks curfew
pub async fn add_movement(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(movement): Json<Movement>,
) -> Result<StatusCode, ApiError> {
    let parolee = find(&state, id)?;
    let violation = {
        let mut parolee = parolee.write();
        let violation = parolee.check_curfew(&movement);
        parolee.add_movement(movement);
        violation
    };

    if let Some(violation) = violation {
        warn!(
            "Parolee {} broke curfew at ({}, {})",
            id, violation.location.latitude, violation.location.longitude
        );
        // No subscribers is fine
        let _ = state.violations.send(violation);
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_convictions(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Conviction>>, ApiError> {
    let parolee = find(&state, id)?;
    let convictions = parolee.read().convictions().to_vec();
    Ok(Json(convictions))
}

/// Replace a parolee's convictions
pub async fn update_convictions(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(convictions): Json<Vec<Conviction>>,
) -> Result<StatusCode, ApiError> {
    let parolee = find(&state, id)?;
    parolee.write().set_convictions(convictions);
    Ok(StatusCode::NO_CONTENT)
}

/// Disassociates of a parolee, in ascending id order
///
/// Disassociates deleted since they were recorded are skipped.
pub async fn get_disassociates(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<ParoleeDto>>, ApiError> {
    let ids = find(&state, id)?.read().disassociates().clone();
    let dtos = ids
        .into_iter()
        .filter_map(|other| state.db.get(other))
        .map(|other| ParoleeDto::from_domain(&other.read()))
        .collect();
    Ok(Json(dtos))
}

/// Replace a parolee's disassociates with the given ids
pub async fn update_disassociates(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(ids): Json<BTreeSet<u64>>,
) -> Result<StatusCode, ApiError> {
    let parolee = find(&state, id)?;
    if let Some(unknown) = ids.iter().find(|other| !state.db.contains(**other)) {
        return Err(ApiError::BadRequest(format!(
            "disassociate {} is not a known parolee",
            unknown
        )));
    }
    parolee.write().set_disassociates(ids);
    Ok(StatusCode::NO_CONTENT)
}

async fn next_violation(
    rx: &mut broadcast::Receiver<ParoleViolation>,
) -> Option<ParoleViolation> {
    loop {
        match rx.recv().await {
            Ok(violation) => return Some(violation),
            Err(RecvError::Lagged(skipped)) => {
                warn!("Violation subscriber lagged, skipped {} violations", skipped);
            }
            Err(RecvError::Closed) => return None,
        }
    }
}

/// Wait for the next parole violation
///
/// Responds 204 if none arrives before the subscription times out.
pub async fn subscribe_violations(State(state): State<AppState>) -> Response {
    let mut rx = state.violations.subscribe();
    debug!("Violation subscriber waiting");

    match tokio::time::timeout(state.violation_timeout, next_violation(&mut rx)).await {
        Ok(Some(violation)) => Json(violation).into_response(),
        Ok(None) | Err(_) => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Get store and system statistics
pub async fn stats_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut sys = System::new_all();
    sys.refresh_all();

    let total_mem_bytes = sys.total_memory();
    let available_mem_bytes = sys.available_memory();
    let used_mem_bytes = total_mem_bytes.saturating_sub(available_mem_bytes);

    let stats = ServiceStats {
        store: state.db.stats(),
        total_memory_mb: total_mem_bytes as f64 / 1024.0 / 1024.0,
        used_memory_mb: used_mem_bytes as f64 / 1024.0 / 1024.0,
        free_memory_mb: available_mem_bytes as f64 / 1024.0 / 1024.0,
        cpu_usage: sys.global_cpu_usage() as f64,
    };

    (StatusCode::OK, Json(stats))
}
