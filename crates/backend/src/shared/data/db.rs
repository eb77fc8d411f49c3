#[cfg(test)]
use sea_orm::ConnectOptions;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

/// Invoice table; extra payload fields live in `extra_json`
const CREATE_INVOICE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS a001_invoice (
        id TEXT PRIMARY KEY NOT NULL,
        custom_id INTEGER NOT NULL,
        issue_date TEXT,
        customer_name TEXT NOT NULL DEFAULT '',
        total_cost REAL NOT NULL DEFAULT 0,
        status TEXT,
        extra_json TEXT NOT NULL DEFAULT '{}',
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_CUSTOM_ID_INDEX_SQL: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_a001_invoice_custom_id ON a001_invoice (custom_id);
"#;

/// Open the SQLite file (created if missing) and bootstrap the schema
pub async fn initialize_database(db_file: &std::path::Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Connecting to database: {}", db_url);
    let conn = Database::connect(&db_url).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

/// In-memory database with the schema applied. One connection, or each pooled
/// connection would see its own empty database.
#[cfg(test)]
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(options).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for sql in [CREATE_INVOICE_TABLE_SQL, CREATE_CUSTOM_ID_INDEX_SQL] {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }
    tracing::info!("Schema a001_invoice ready");
    Ok(())
}
