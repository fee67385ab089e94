use libsql::Connection;

use crate::error::Result;

/// Three independent append-only tables, one id sequence each.
///
/// AUTOINCREMENT keeps ids strictly increasing even across a bulk clear:
/// a cleared reports table never hands out a previously used id.
pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Incident reports (user reports and SOS triggers)
        CREATE TABLE IF NOT EXISTS reports (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            lat REAL NOT NULL,
            lng REAL NOT NULL,
            severity TEXT NOT NULL,
            note TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reports_created_at ON reports(created_at);

        -- Live-location share ticks
        CREATE TABLE IF NOT EXISTS shares (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            lat REAL NOT NULL,
            lng REAL NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_shares_created_at ON shares(created_at);

        -- Assistant question/answer pairs
        CREATE TABLE IF NOT EXISTS chats (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_chats_created_at ON chats(created_at);
        "#,
    )
    .await?;

    Ok(())
}
