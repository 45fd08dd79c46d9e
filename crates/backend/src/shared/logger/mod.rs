pub mod repository;

use contracts::shared::logger::EventLogger;
use sea_orm::DatabaseConnection;

/// Журнал событий сервера: пишет в `system_log` и дублирует в tracing.
///
/// Запись в БД идет фоновой задачей, вызывающий код не ждет.
#[derive(Clone)]
pub struct SystemLogger {
    conn: DatabaseConnection,
}

impl SystemLogger {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

impl EventLogger for SystemLogger {
    fn log(&self, category: &str, message: &str) {
        tracing::info!(category, "{}", message);

        let conn = self.conn.clone();
        let category = category.to_string();
        let message = message.to_string();
        tokio::spawn(async move {
            if let Err(e) = repository::log_event(&conn, "server", &category, &message).await {
                tracing::error!("Failed to log event: {}", e);
            }
        });
    }
}

/// Журнал только в tracing (без БД)
#[derive(Clone, Copy, Default)]
pub struct TracingLogger;

impl EventLogger for TracingLogger {
    fn log(&self, category: &str, message: &str) {
        tracing::info!(category, "{}", message);
    }
}
