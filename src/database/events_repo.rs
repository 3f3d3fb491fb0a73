use sqlx::SqlitePool;

use crate::models::EventRow;

// registered_participants is a roll-up over registrations; nothing writes it directly.
const SQL_LIST_EVENTS: &str = r#"
SELECT
  e.id,
  e.name,
  e.club_id,
  c.name AS club_name,
  e.max_participants,
  (SELECT COUNT(*) FROM registrations r WHERE r.event_id = e.id) AS registered_participants
FROM events e
LEFT JOIN clubs c ON c.id = e.club_id
ORDER BY e.rowid ASC
"#;

const SQL_INSERT_EVENT: &str = r#"
INSERT INTO events (
  id,
  name,
  club_id,
  max_participants
) VALUES (?, ?, ?, ?)
"#;

const SQL_DELETE_EVENT: &str = r#"
DELETE FROM events WHERE id = ?
"#;

pub struct NewEventRecord<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub club_id: &'a str,
    pub max_participants: i64,
}

pub async fn list_events(pool: &SqlitePool) -> sqlx::Result<Vec<EventRow>> {
    sqlx::query_as::<_, EventRow>(SQL_LIST_EVENTS)
        .fetch_all(pool)
        .await
}

pub async fn insert_event(pool: &SqlitePool, rec: NewEventRecord<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_EVENT)
        .bind(rec.id)
        .bind(rec.name)
        .bind(rec.club_id)
        .bind(rec.max_participants)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_event(pool: &SqlitePool, id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_EVENT).bind(id).execute(pool).await?;
    Ok(res.rows_affected())
}
