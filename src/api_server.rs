// Axum API Server Module
//
// Purpose: JSON REST surface over the crop advisory engine (suitability
// evaluation, soil-adapted schedules, display timelines, water guidance).
// The engine itself is pure and synchronous; this layer only adds
// transport, a response cache, and the per-session reading store.

#[cfg(feature = "api")]
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use moka::future::Cache;

#[cfg(feature = "api")]
use std::collections::HashMap;

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use std::time::Duration;

#[cfg(feature = "api")]
use chrono::NaiveDate;

#[cfg(feature = "api")]
use crate::advisory::{soil_advice, SoilTexture};

#[cfg(feature = "api")]
use crate::crops::Crop;

#[cfg(feature = "api")]
use crate::schedule::{display_timeline, irrigation_tips, materialize_display, water_profile};

#[cfg(feature = "api")]
use crate::session::{InMemoryReadingStore, ReadingStore, RequestContext};

#[cfg(feature = "api")]
use crate::soil::{attribute_options, normalize, SoilAttribute, SoilReading};

#[cfg(feature = "api")]
use crate::suitability::{analyze, profile_for};

#[cfg(feature = "api")]
use crate::{evaluate_suitability, schedule_from_reading};

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    /// Last-submitted reading per session key, shared across requests
    pub store: Arc<dyn ReadingStore>,
    pub cache: Cache<String, serde_json::Value>,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        tracing::info!("Initializing Moka response cache...");
        let cache = Cache::builder()
            .max_capacity(10_000) // 10K entries
            .time_to_live(Duration::from_secs(300)) // 5 min TTL
            .build();

        Self { store, cache }
    }

    /// State backed by the in-memory reading store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryReadingStore::new()))
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Catalog endpoints (static engine data)
        .route("/api/crops", get(list_crops))
        .route("/api/soil/attributes", get(soil_attributes))
        .route("/api/soil/types", get(soil_types))

        // Evaluation endpoint
        // IMPORTANT: evaluate must come before the :crop routes (Axum matches in order)
        .route("/api/crops/evaluate", post(evaluate_crops))

        // Per-crop endpoints
        .route("/api/crops/:crop/schedule", post(generate_crop_schedule))
        .route("/api/crops/:crop/analysis", post(crop_analysis))
        .route("/api/crops/:crop/timeline", get(crop_timeline))
        .route("/api/crops/:crop/water", get(water_consumption))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // Allow all origins (adjust for production)
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// List the supported crops with their requirement profiles
#[cfg(feature = "api")]
async fn list_crops(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let cache_key = "crops:catalog".to_string();

    // Check cache
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for crop catalog");
        return Ok(Json(cached));
    }

    let crops: Vec<serde_json::Value> = Crop::ALL
        .iter()
        .map(|crop| {
            let profile = profile_for(*crop);
            serde_json::json!({
                "id": crop.id(),
                "name": crop.display_name(),
                "growth_period_days": profile.growth_period_days,
                "seasons": profile.seasons.iter().map(|s| s.display_text()).collect::<Vec<_>>(),
                "ideal_conditions": profile.ideal_conditions,
            })
        })
        .collect();

    let result = serde_json::json!({
        "status": "success",
        "crops": crops,
        "total": Crop::ALL.len(),
    });

    // Cache result (the catalog is static, any TTL is safe)
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

/// Descriptive option catalog per soil/climate attribute (form contents)
#[cfg(feature = "api")]
async fn soil_attributes(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cache_key = "soil:attributes".to_string();

    // Check cache
    if let Some(cached) = state.cache.get(&cache_key).await {
        return Ok(Json(cached));
    }

    let mut attributes = serde_json::Map::new();
    for attr in SoilAttribute::ALL {
        attributes.insert(
            attr.key().to_string(),
            serde_json::json!(attribute_options(attr)),
        );
    }

    let result = serde_json::json!({
        "status": "success",
        "attributes": attributes,
        "total_attributes": SoilAttribute::ALL.len(),
    });

    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

/// Soil texture catalog with retention/drainage/fertility traits
#[cfg(feature = "api")]
async fn soil_types(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let cache_key = "soil:types".to_string();

    // Check cache
    if let Some(cached) = state.cache.get(&cache_key).await {
        return Ok(Json(cached));
    }

    let types: Vec<serde_json::Value> = SoilTexture::ALL
        .iter()
        .map(|texture| {
            serde_json::json!({
                "key": texture.key(),
                "name": texture.display_name(),
                "description": texture.description(),
                "properties": {
                    "water_retention": texture.water_retention().as_str(),
                    "drainage": texture.drainage().as_str(),
                    "fertility": texture.fertility().as_str(),
                },
            })
        })
        .collect();

    let result = serde_json::json!({
        "status": "success",
        "soil_types": types,
        "total": SoilTexture::ALL.len(),
    });

    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

/// Evaluate all crops against one soil reading
///
/// POST /api/crops/evaluate
/// Body: { "readings": { "Nitrogen": "High (81–100%)", ... }, "session": "optional key" }
///
/// Partial readings are accepted; conditions on absent attributes simply
/// fail, they never error. When a session key is given the raw reading is
/// remembered so later schedule/analysis calls can omit it.
#[cfg(feature = "api")]
async fn evaluate_crops(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let reading = reading_from_map(&req.readings);

    if let Some(session) = req.session.as_deref() {
        let ctx = RequestContext::new(session, state.store.clone());
        ctx.remember(&reading);
        tracing::debug!("Remembered reading for session {}", session);
    }

    let cache_key = reading_cache_key("evaluate", &reading);

    // Check cache
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for evaluation");
        return Ok(Json(cached));
    }

    tracing::info!("Evaluating {} crops against {} attributes", Crop::ALL.len(), reading.len());
    let report = evaluate_suitability(&reading);

    let mut crops = serde_json::Map::new();
    for eval in &report.evaluations {
        crops.insert(
            eval.crop.display_name().to_string(),
            serde_json::json!(eval.suitability.display_text()),
        );
    }

    let result = serde_json::json!({
        "status": "success",
        "crops": crops,
        "grouped": {
            "Highly Suitable": report.highly_suitable.iter().map(|c| c.display_name()).collect::<Vec<_>>(),
            "Moderately Suitable": report.moderately_suitable.iter().map(|c| c.display_name()).collect::<Vec<_>>(),
            "Not Suitable": report.not_suitable.iter().map(|c| c.display_name()).collect::<Vec<_>>(),
        },
        "summary": {
            "highly_suitable": report.summary.highly_suitable,
            "moderately_suitable": report.summary.moderately_suitable,
            "not_suitable": report.summary.not_suitable,
            "total": report.summary.total,
        },
    });

    // Cache result
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

/// Build the soil-adapted, dated schedule for one crop
///
/// POST /api/crops/:crop/schedule
/// Body: { "readings": {...}, "session": "key", "start_date": "2025-02-01" }
///
/// Either inline readings or a session key with a remembered reading is
/// required. start_date defaults to today.
#[cfg(feature = "api")]
async fn generate_crop_schedule(
    State(state): State<AppState>,
    Path(crop): Path<String>,
    Json(req): Json<ScheduleRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let crop = Crop::parse(&crop).map_err(|e| AppError::NotFound(e.to_string()))?;
    let reading = resolve_reading(&state, req.readings.as_ref(), req.session.as_deref())?;

    tracing::info!("Generating schedule for {} from {} attributes", crop.display_name(), reading.len());

    let schedule = schedule_from_reading(crop, &reading, req.start_date)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "crop_name": crop.display_name(),
        "schedule": schedule,
    })))
}

/// Per-crop requirement analysis with the 0-100 soil score
///
/// POST /api/crops/:crop/analysis
/// Body: { "readings": {...}, "session": "key" }
#[cfg(feature = "api")]
async fn crop_analysis(
    State(state): State<AppState>,
    Path(crop): Path<String>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let crop = Crop::parse(&crop).map_err(|e| AppError::NotFound(e.to_string()))?;
    let reading = resolve_reading(&state, req.readings.as_ref(), req.session.as_deref())?;

    let soil_state = normalize(&reading);
    let analysis = analyze(crop, &soil_state);

    Ok(Json(serde_json::json!({
        "status": "success",
        "crop_name": crop.display_name(),
        "analysis": {
            "soil_score": analysis.soil_score,
            "growth_period_days": analysis.growth_period_days,
            "ideal_seasons": analysis.ideal_seasons.iter().map(|s| s.display_text()).collect::<Vec<_>>(),
            "deficiencies": analysis.deficiencies,
            "recommendations": analysis.recommendations,
        },
    })))
}

/// Long-form display timeline pinned to a start date, with soil advice
///
/// GET /api/crops/:crop/timeline?soil_type=clayey_moist&start_date=2025-06-01
#[cfg(feature = "api")]
async fn crop_timeline(
    State(state): State<AppState>,
    Path(crop): Path<String>,
    Query(params): Query<TimelineQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let crop = Crop::parse(&crop).map_err(|e| AppError::NotFound(e.to_string()))?;
    let texture = match params.soil_type.as_deref() {
        Some(key) => SoilTexture::parse(key).map_err(|e| AppError::BadRequest(e.to_string()))?,
        None => SoilTexture::LoamyMoist,
    };
    let start = params
        .start_date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let cache_key = format!("timeline:{}:{}:{}", crop.id(), texture.key(), start);

    // Check cache
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for timeline {}", cache_key);
        return Ok(Json(cached));
    }

    let spec = display_timeline(crop);
    let phases =
        materialize_display(crop, start).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let advice = soil_advice(texture, crop);

    let result = serde_json::json!({
        "status": "success",
        "crop_name": crop.display_name(),
        "soil_type": texture.key(),
        "total_days": spec.total_days,
        "timeline": phases,
        "soil_advice": advice,
    });

    // Cache result
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

/// Seasonal water requirement with per-stage amounts and irrigation tips
///
/// GET /api/crops/:crop/water?soil_type=sandy_dry
#[cfg(feature = "api")]
async fn water_consumption(
    State(state): State<AppState>,
    Path(crop): Path<String>,
    Query(params): Query<WaterQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let crop = Crop::parse(&crop).map_err(|e| AppError::NotFound(e.to_string()))?;
    let texture = match params.soil_type.as_deref() {
        Some(key) => SoilTexture::parse(key).map_err(|e| AppError::BadRequest(e.to_string()))?,
        None => SoilTexture::LoamyMoist,
    };

    let cache_key = format!("water:{}:{}", crop.id(), texture.key());

    // Check cache
    if let Some(cached) = state.cache.get(&cache_key).await {
        return Ok(Json(cached));
    }

    let profile = water_profile(crop);
    let tips = irrigation_tips(crop, texture);

    let result = serde_json::json!({
        "status": "success",
        "crop_name": crop.display_name(),
        "soil_type": texture.key(),
        "total_water": profile.total_requirement_mm,
        "stages": profile.stages,
        "irrigation_tips": tips,
    });

    // Cache result
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct EvaluateRequest {
    /// Attribute key → descriptive value; unknown keys are ignored
    #[serde(default)]
    readings: HashMap<String, String>,
    session: Option<String>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct ScheduleRequest {
    readings: Option<HashMap<String, String>>,
    session: Option<String>,
    start_date: Option<NaiveDate>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct AnalysisRequest {
    readings: Option<HashMap<String, String>>,
    session: Option<String>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct TimelineQuery {
    soil_type: Option<String>,
    start_date: Option<NaiveDate>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct WaterQuery {
    soil_type: Option<String>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build a SoilReading from a request map, skipping unrecognized keys
#[cfg(feature = "api")]
fn reading_from_map(map: &HashMap<String, String>) -> SoilReading {
    SoilReading::from_labeled(map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

/// Deterministic cache key for a reading: attributes in declaration order,
/// so equal readings hit the same entry regardless of request map order
#[cfg(feature = "api")]
fn reading_cache_key(prefix: &str, reading: &SoilReading) -> String {
    let mut key = String::from(prefix);
    for attr in SoilAttribute::ALL {
        if let Some(value) = reading.get(attr) {
            key.push('|');
            key.push_str(attr.key());
            key.push('=');
            key.push_str(value);
        }
    }
    key
}

/// Inline readings win; otherwise fall back to the session's remembered
/// reading; otherwise the request is unanswerable
#[cfg(feature = "api")]
fn resolve_reading(
    state: &AppState,
    readings: Option<&HashMap<String, String>>,
    session: Option<&str>,
) -> Result<SoilReading, AppError> {
    if let Some(map) = readings {
        return Ok(reading_from_map(map));
    }

    if let Some(session) = session {
        let ctx = RequestContext::new(session, state.store.clone());
        if let Some(reading) = ctx.cached_reading() {
            tracing::debug!("Using remembered reading for session {}", session);
            return Ok(reading);
        }
        return Err(AppError::NotFound(format!(
            "No remembered reading for session {}",
            session
        )));
    }

    Err(AppError::BadRequest(
        "Soil readings or a session key are required".to_string(),
    ))
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
