use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::ChatExchange;

/// Append-only access to the `chats` table.
pub struct ChatRepository;

impl ChatRepository {
    pub async fn create(conn: &Connection, question: &str, answer: &str) -> Result<ChatExchange> {
        let created_at = Utc::now();
        conn.execute(
            "INSERT INTO chats (question, answer, created_at) VALUES (?1, ?2, ?3)",
            params![question, answer, created_at.to_rfc3339()],
        )
        .await?;

        Ok(ChatExchange {
            id: conn.last_insert_rowid(),
            question: question.to_string(),
            answer: answer.to_string(),
            created_at,
        })
    }

    pub async fn recent(conn: &Connection, limit: u32) -> Result<Vec<ChatExchange>> {
        let mut rows = conn
            .query(
                "SELECT id, question, answer, created_at
                 FROM chats ORDER BY id DESC LIMIT ?1",
                params![i64::from(limit)],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(ChatExchange {
                id: row.get(0)?,
                question: row.get(1)?,
                answer: row.get(2)?,
                created_at: DateTime::parse_from_rfc3339(&row.get::<String>(3)?)
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or_else(|_| Utc::now()),
            });
        }
        Ok(results)
    }
}
