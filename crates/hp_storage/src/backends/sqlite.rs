use async_trait::async_trait;
use hp_core::{Error, RecordStorage, Result, Sentiment, StoredRecord};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::path::{Path, PathBuf};
use crate::StorageBackend;

pub const DEFAULT_DB_PATH: &str = "database.db";

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS stories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT,
        content TEXT,
        analysis TEXT,
        sentiment TEXT,
        source TEXT,
        timestamp TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_stories_id ON stories (id)",
    // Add future migrations here
];

pub struct SQLiteStorage {
    pool: SqlitePool,
    db_path: PathBuf,
}

#[async_trait]
impl StorageBackend for SQLiteStorage {
    fn get_error_message() -> &'static str {
        "SQLite database should be writable at the configured path (default ./database.db)"
    }

    async fn open(location: &str) -> Result<Self> {
        let location = if location.is_empty() { DEFAULT_DB_PATH } else { location };
        Self::new_with_path(Path::new(location)).await
    }
}

impl SQLiteStorage {
    pub async fn new_with_path(db_path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| Error::Database(format!("Failed to connect to database: {}", e)))?;

        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration)
                .execute(&pool)
                .await
                .map_err(|e| Error::Database(format!("Failed to run migration {}: {}", i, e)))?;
        }

        tracing::info!("💾 SQLite storage ready at {}", db_path.display());

        Ok(Self {
            pool,
            db_path: db_path.to_path_buf(),
        })
    }

    pub fn get_db_path(&self) -> &Path {
        &self.db_path
    }
}

fn record_from_row(row: &SqliteRow) -> Result<StoredRecord> {
    let column = |name: &str| -> Result<String> {
        row.try_get::<Option<String>, _>(name)
            .map(Option::unwrap_or_default)
            .map_err(|e| Error::Database(format!("Failed to read column {}: {}", name, e)))
    };

    let sentiment: Sentiment = column("sentiment")?
        .parse()
        .map_err(|e| Error::Database(format!("Invalid stored sentiment: {}", e)))?;

    Ok(StoredRecord {
        id: Some(
            row.try_get("id")
                .map_err(|e| Error::Database(format!("Failed to read column id: {}", e)))?,
        ),
        title: column("title")?,
        content: column("content")?,
        analysis: column("analysis")?,
        sentiment,
        source: column("source")?,
        timestamp: column("timestamp")?,
    })
}

#[async_trait]
impl RecordStorage for SQLiteStorage {
    async fn store_record(&self, record: &StoredRecord) -> Result<i64> {
        let mut tx = self.pool
            .begin()
            .await
            .map_err(|e| Error::Storage(format!("Failed to open transaction: {}", e)))?;

        let result = sqlx::query(
            r#"
            INSERT INTO stories
            (title, content, analysis, sentiment, source, timestamp)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.title)
        .bind(&record.content)
        .bind(&record.analysis)
        .bind(record.sentiment.as_str())
        .bind(&record.source)
        .bind(&record.timestamp)
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::Storage(format!("Failed to store record: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| Error::Storage(format!("Failed to commit record: {}", e)))?;

        Ok(result.last_insert_rowid())
    }

    async fn get_by_source(&self, source: &str) -> Result<Vec<StoredRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM stories
            WHERE source = ?
            ORDER BY id DESC
            "#,
        )
        .bind(source)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::Database(format!("Failed to get records by source: {}", e)))?;

        rows.iter().map(record_from_row).collect()
    }

    async fn list_records(&self, limit: usize) -> Result<Vec<StoredRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM stories
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::Database(format!("Failed to list records: {}", e)))?;

        rows.iter().map(record_from_row).collect()
    }
}
