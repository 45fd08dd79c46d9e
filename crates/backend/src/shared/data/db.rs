use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement};

const CREATE_RESOURCE_RECORD: &str = r#"
    CREATE TABLE resource_record (
        id TEXT PRIMARY KEY NOT NULL,
        resource_type TEXT NOT NULL,
        code TEXT NOT NULL,
        description TEXT NOT NULL,
        comment TEXT,
        payload TEXT NOT NULL DEFAULT '{}',
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 1
    );
"#;

/// Коды уникальны в пределах справочника, включая удаленные записи
const CREATE_RESOURCE_RECORD_INDEXES: &[&str] = &[
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_resource_record_type_code ON resource_record (resource_type, code);",
    "CREATE INDEX IF NOT EXISTS idx_resource_record_type_created ON resource_record (resource_type, created_at);",
];

const CREATE_SYSTEM_LOG: &str = r#"
    CREATE TABLE system_log (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        timestamp TEXT NOT NULL,
        source TEXT NOT NULL,
        category TEXT NOT NULL,
        message TEXT NOT NULL
    );
"#;

/// Открыть файл БД (создается при отсутствии) и подготовить схему.
/// Соединение передается дальше явно: в хранилища, журнал и обработчики.
pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<DatabaseConnection> {
    let db_file = db_path.unwrap_or("target/db/app.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;
    Ok(conn)
}

async fn table_exists(conn: &DatabaseConnection, name: &str) -> Result<bool, DbErr> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?;",
            [name.into()],
        ))
        .await?;
    Ok(!rows.is_empty())
}

async fn execute(conn: &DatabaseConnection, sql: &str) -> Result<(), DbErr> {
    conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
        .await?;
    Ok(())
}

/// Минимальное создание схемы: таблица записей справочников и журнал
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    if !table_exists(conn, "resource_record").await? {
        tracing::info!("Creating resource_record table");
        execute(conn, CREATE_RESOURCE_RECORD).await?;
    }
    for sql in CREATE_RESOURCE_RECORD_INDEXES {
        execute(conn, sql).await?;
    }

    if !table_exists(conn, "system_log").await? {
        tracing::info!("Creating system_log table");
        execute(conn, CREATE_SYSTEM_LOG).await?;
    }
    Ok(())
}

/// Отдельная БД в памяти для тестов.
/// Одно соединение: у каждого соединения `sqlite::memory:` своя база.
#[cfg(test)]
pub async fn open_in_memory() -> Result<DatabaseConnection, DbErr> {
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let conn = open_in_memory().await.unwrap();
        bootstrap_schema(&conn).await.unwrap();
        assert!(table_exists(&conn, "resource_record").await.unwrap());
        assert!(table_exists(&conn, "system_log").await.unwrap());
    }

    #[tokio::test]
    async fn test_code_index_is_unique_per_type() {
        let conn = open_in_memory().await.unwrap();
        let insert = |id: &str, kind: &str| {
            format!(
                "INSERT INTO resource_record (id, resource_type, code, description, created_at, updated_at) \
                 VALUES ('{}', '{}', 'X1', 'x', '2025-01-01', '2025-01-01');",
                id, kind
            )
        };
        execute(&conn, &insert("1", "discount")).await.unwrap();
        execute(&conn, &insert("2", "tax")).await.unwrap();
        assert!(execute(&conn, &insert("3", "discount")).await.is_err());
    }

    #[tokio::test]
    async fn test_initialize_database_can_open_twice() {
        let dir = std::env::temp_dir().join(format!("console-db-{}", uuid::Uuid::new_v4()));
        let path = dir.join("app.db");
        let path = path.to_string_lossy().to_string();

        let first = initialize_database(Some(&path)).await.unwrap();
        assert!(table_exists(&first, "resource_record").await.unwrap());

        // повторное открытие той же БД: без глобального состояния, схема уже есть
        let second = initialize_database(Some(&path)).await.unwrap();
        assert!(table_exists(&second, "system_log").await.unwrap());

        drop(first);
        drop(second);
        let _ = std::fs::remove_dir_all(dir);
    }
}
