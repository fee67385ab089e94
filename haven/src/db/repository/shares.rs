use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::LocationShare;

/// Append-only access to the `shares` table.
///
/// A row is one tick of an ongoing client-side sharing session. Nothing
/// ever deletes shares; the API only inserts them.
pub struct ShareRepository;

impl ShareRepository {
    pub async fn create(conn: &Connection, lat: f64, lng: f64) -> Result<LocationShare> {
        let created_at = Utc::now();
        conn.execute(
            "INSERT INTO shares (lat, lng, created_at) VALUES (?1, ?2, ?3)",
            params![lat, lng, created_at.to_rfc3339()],
        )
        .await?;

        Ok(LocationShare {
            id: conn.last_insert_rowid(),
            lat,
            lng,
            created_at,
        })
    }

    pub async fn recent(conn: &Connection, limit: u32) -> Result<Vec<LocationShare>> {
        let mut rows = conn
            .query(
                "SELECT id, lat, lng, created_at FROM shares ORDER BY id DESC LIMIT ?1",
                params![i64::from(limit)],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(LocationShare {
                id: row.get(0)?,
                lat: row.get(1)?,
                lng: row.get(2)?,
                created_at: DateTime::parse_from_rfc3339(&row.get::<String>(3)?)
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or_else(|_| Utc::now()),
            });
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::db::Database;

    #[tokio::test]
    async fn ticks_accumulate_in_order() {
        let db = Database::new(&DatabaseConfig {
            url: ":memory:".to_string(),
        })
        .await
        .unwrap();
        let conn = db.connect().unwrap();

        ShareRepository::create(&conn, 28.4595, 77.0266).await.unwrap();
        ShareRepository::create(&conn, 28.4601, 77.0270).await.unwrap();

        let recent = ShareRepository::recent(&conn, 10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].id > recent[1].id);
        assert_eq!(recent[0].lat, 28.4601);
    }
}
