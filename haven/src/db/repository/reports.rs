use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::{IncidentReport, Severity};

/// Append-only access to the `reports` table.
///
/// Records are immutable once written; the only destructive operation is
/// the bulk `clear`, which leaves the id sequence untouched.
pub struct ReportRepository;

impl ReportRepository {
    /// Insert one report. The timestamp is captured here, server-side;
    /// caller-supplied timestamps are never honored.
    pub async fn create(
        conn: &Connection,
        lat: f64,
        lng: f64,
        severity: Severity,
        note: &str,
    ) -> Result<IncidentReport> {
        let created_at = Utc::now();
        conn.execute(
            "INSERT INTO reports (lat, lng, severity, note, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                lat,
                lng,
                severity.to_string(),
                note,
                created_at.to_rfc3339()
            ],
        )
        .await?;

        Ok(IncidentReport {
            id: conn.last_insert_rowid(),
            lat,
            lng,
            severity,
            note: note.to_string(),
            created_at,
        })
    }

    /// Most-recent-first by insertion order, never more than `limit` rows.
    pub async fn recent(conn: &Connection, limit: u32) -> Result<Vec<IncidentReport>> {
        let mut rows = conn
            .query(
                "SELECT id, lat, lng, severity, note, created_at
                 FROM reports ORDER BY id DESC LIMIT ?1",
                params![i64::from(limit)],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Self::row_to_report(&row)?);
        }
        Ok(results)
    }

    /// Delete every report. Shares and chats are never bulk-cleared.
    pub async fn clear(conn: &Connection) -> Result<u64> {
        let deleted = conn.execute("DELETE FROM reports", ()).await?;
        Ok(deleted)
    }

    fn row_to_report(row: &libsql::Row) -> Result<IncidentReport> {
        Ok(IncidentReport {
            id: row.get(0)?,
            lat: row.get(1)?,
            lng: row.get(2)?,
            severity: row.get::<String>(3)?.parse().unwrap_or_default(),
            note: row.get(4)?,
            created_at: DateTime::parse_from_rfc3339(&row.get::<String>(5)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
