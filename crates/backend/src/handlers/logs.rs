use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::logger::{CreateLogRequest, LogEntry};
use sea_orm::DatabaseConnection;

use crate::shared::logger::repository;

/// GET /api/logs
pub async fn list_all(
    State(conn): State<DatabaseConnection>,
) -> Result<Json<Vec<LogEntry>>, StatusCode> {
    match repository::get_all_logs(&conn).await {
        Ok(logs) => Ok(Json(logs)),
        Err(e) => {
            tracing::error!("Failed to read logs: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/logs
pub async fn create(
    State(conn): State<DatabaseConnection>,
    Json(req): Json<CreateLogRequest>,
) -> StatusCode {
    match repository::log_event(&conn, &req.source, &req.category, &req.message).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to write log entry: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// DELETE /api/logs
pub async fn clear_all(State(conn): State<DatabaseConnection>) -> StatusCode {
    match repository::clear_all_logs(&conn).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to clear logs: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::open_in_memory;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    async fn broken_conn() -> DatabaseConnection {
        let conn = open_in_memory().await.unwrap();
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "DROP TABLE system_log;".to_string(),
        ))
        .await
        .unwrap();
        conn
    }

    #[tokio::test]
    async fn test_storage_failures_return_500() {
        let conn = broken_conn().await;
        let req = CreateLogRequest {
            source: "client".into(),
            category: "ui".into(),
            message: "opened list".into(),
        };

        let status = create(State(conn.clone()), Json(req)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            clear_all(State(conn.clone())).await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            list_all(State(conn)).await.unwrap_err(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
