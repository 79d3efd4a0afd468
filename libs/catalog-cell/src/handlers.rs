use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{CatalogError, TestGuideFilters};
use crate::services::center::{CENTER_INFO, QUALITY_STANDARDS, SAFETY_RULES};
use crate::services::{examinations::ExaminationService, scans::ScanService};

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(msg) => AppError::NotFound(msg.to_string()),
            CatalogError::Store(e) => AppError::Database(e.to_string()),
        }
    }
}

#[axum::debug_handler]
pub async fn list_scans(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let scan_service = ScanService::new(&state);

    let (groups, equipments) = scan_service.scans_page().await;

    Ok(Json(json!({
        "groups": groups,
        "equipments": equipments
    })))
}

#[axum::debug_handler]
pub async fn get_scan(
    State(state): State<Arc<AppConfig>>,
    Path(scan_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let scan = ScanService::new(&state).get_scan(scan_id).await?;
    Ok(Json(json!(scan)))
}

#[axum::debug_handler]
pub async fn get_equipment(
    State(state): State<Arc<AppConfig>>,
    Path(equipment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let equipment = ScanService::new(&state).get_equipment(equipment_id).await?;
    Ok(Json(json!(equipment)))
}

#[axum::debug_handler]
pub async fn list_examinations(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let examination_service = ExaminationService::new(&state);

    let examinations = examination_service.list_examinations().await.unwrap_or_else(|e| {
        error!("Error fetching examinations: {}", e);
        Vec::new()
    });

    Ok(Json(json!({
        "examinations": examinations,
        "quality_standards": QUALITY_STANDARDS
    })))
}

#[axum::debug_handler]
pub async fn get_examination(
    State(state): State<Arc<AppConfig>>,
    Path(examination_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let examination = ExaminationService::new(&state).get_examination(examination_id).await?;
    Ok(Json(json!(examination)))
}

#[axum::debug_handler]
pub async fn all_tests(
    State(state): State<Arc<AppConfig>>,
    Query(filters): Query<TestGuideFilters>,
) -> Result<Json<Value>, AppError> {
    let examination_service = ExaminationService::new(&state);

    let guide = examination_service
        .test_guide(&filters)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!(guide)))
}

#[axum::debug_handler]
pub async fn list_packages(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let examination_service = ExaminationService::new(&state);

    let packages = examination_service.list_packages().await.unwrap_or_else(|e| {
        error!("Error fetching packages: {}", e);
        Vec::new()
    });

    Ok(Json(json!({
        "packages": packages
    })))
}

#[axum::debug_handler]
pub async fn get_package(
    State(state): State<Arc<AppConfig>>,
    Path(package_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let package = ExaminationService::new(&state).get_package(package_id).await?;
    Ok(Json(json!(package)))
}

pub async fn safety_rules() -> Json<Value> {
    Json(json!({
        "rules": SAFETY_RULES
    }))
}

pub async fn about() -> Json<Value> {
    Json(json!(CENTER_INFO))
}
