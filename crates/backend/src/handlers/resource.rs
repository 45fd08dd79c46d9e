//! Обработчики HTTP, общие для всех справочников.
//!
//! Каждый справочник монтируется в `/api/{collection}` со своим
//! `ResourceService<F>` в качестве состояния.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use contracts::domain::common::{Record, RecordDto, ResourceFields};
use contracts::shared::list::{ListState, ListView, SortDirection};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::common::{AllocationError, ResourceService, SeedData, ServiceError, StoreError};

type ServiceState<F> = State<Arc<ResourceService<F>>>;
type ApiError = (StatusCode, Json<Value>);

/// Параметры списка: `?q=&sort_by=&sort_dir=&page=&page_size=`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl ListQuery {
    /// Порядок важен: поиск и сортировка сбрасывают страницу,
    /// поэтому номер страницы ставится последним
    pub fn into_state<F: ResourceFields>(self, service: &ResourceService<F>) -> ListState {
        let mut state = service.new_list_state();
        if let Some(page_size) = self.page_size {
            state.set_items_per_page(page_size);
        }
        if let Some(q) = self.q {
            state.set_filter_term(q);
        }
        if let Some(field) = self.sort_by.as_deref() {
            let direction = self
                .sort_dir
                .as_deref()
                .map(SortDirection::from_query)
                .unwrap_or(SortDirection::Ascending);
            state.set_sort(field, direction);
        }
        if let Some(page) = self.page {
            state.set_current_page(page);
        }
        state
    }
}

fn error_response(err: ServiceError) -> ApiError {
    let status = match &err {
        ServiceError::Validation(_) | ServiceError::InvalidId(_) => StatusCode::BAD_REQUEST,
        ServiceError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        ServiceError::Store(StoreError::DuplicateIdentifier { .. })
        | ServiceError::Allocation(AllocationError::Exhausted { .. })
        | ServiceError::Allocation(AllocationError::SequenceOverflow { .. }) => StatusCode::CONFLICT,
        ServiceError::Store(_) | ServiceError::Allocation(_) => {
            tracing::error!("{}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({ "error": err.to_string() })))
}

/// GET /api/{collection}
pub async fn list_all<F: ResourceFields>(
    State(service): ServiceState<F>,
) -> Result<Json<Vec<Record<F>>>, ApiError> {
    service.list_all().await.map(Json).map_err(error_response)
}

/// GET /api/{collection}/list
pub async fn list_view<F: ResourceFields>(
    State(service): ServiceState<F>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListView<Record<F>>>, ApiError> {
    let state = query.into_state(&service);
    service
        .list_view(&state)
        .await
        .map(Json)
        .map_err(error_response)
}

/// GET /api/{collection}/next-code
pub async fn next_code<F: ResourceFields>(
    State(service): ServiceState<F>,
) -> Result<Json<Value>, ApiError> {
    let code = service.next_code().await.map_err(error_response)?;
    Ok(Json(json!({ "code": code })))
}

/// GET /api/{collection}/:id
pub async fn get_by_id<F: ResourceFields>(
    State(service): ServiceState<F>,
    Path(id): Path<String>,
) -> Result<Json<Record<F>>, ApiError> {
    match service.get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(error_response(StoreError::NotFound(id).into())),
        Err(e) => Err(error_response(e)),
    }
}

/// POST /api/{collection}
pub async fn upsert<F: ResourceFields>(
    State(service): ServiceState<F>,
    Json(dto): Json<RecordDto<F>>,
) -> Result<Json<Value>, ApiError> {
    let record = service.upsert(dto).await.map_err(error_response)?;
    Ok(Json(json!({
        "id": record.to_string_id(),
        "code": record.base.code,
    })))
}

/// DELETE /api/{collection}/:id
pub async fn delete<F: ResourceFields>(
    State(service): ServiceState<F>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    service.delete(&id).await.map_err(error_response)
}

/// POST /api/{collection}/testdata
pub async fn insert_test_data<F: SeedData>(
    State(service): ServiceState<F>,
) -> Result<Json<Value>, ApiError> {
    let created = service.insert_test_data().await.map_err(error_response)?;
    Ok(Json(json!({ "inserted": created.len() })))
}

/// Маршруты одного справочника
pub fn router<F: SeedData>(service: Arc<ResourceService<F>>) -> Router {
    Router::new()
        .route("/", get(list_all::<F>).post(upsert::<F>))
        .route("/list", get(list_view::<F>))
        .route("/next-code", get(next_code::<F>))
        .route("/testdata", post(insert_test_data::<F>))
        .route("/:id", get(get_by_id::<F>).delete(delete::<F>))
        .with_state(service)
}
