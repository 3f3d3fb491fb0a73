use sqlx::SqlitePool;

use crate::models::RegistrationRow;

const SQL_LIST_REGISTRATIONS: &str = r#"
SELECT
  r.id,
  r.name,
  r.participant_id,
  r.event_id,
  p.name AS participant_name,
  p.email AS participant_email,
  p.team_members_count,
  e.name AS event_name
FROM registrations r
LEFT JOIN participants p ON p.id = r.participant_id
LEFT JOIN events e ON e.id = r.event_id
ORDER BY r.rowid ASC
"#;

const SQL_INSERT_REGISTRATION: &str = r#"
INSERT INTO registrations (
  id,
  name,
  participant_id,
  event_id
) VALUES (?, ?, ?, ?)
"#;

const SQL_DELETE_REGISTRATION: &str = r#"
DELETE FROM registrations WHERE id = ?
"#;

pub struct NewRegistrationRecord<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub participant_id: &'a str,
    pub event_id: &'a str,
}

pub async fn list_registrations(pool: &SqlitePool) -> sqlx::Result<Vec<RegistrationRow>> {
    sqlx::query_as::<_, RegistrationRow>(SQL_LIST_REGISTRATIONS)
        .fetch_all(pool)
        .await
}

pub async fn insert_registration(
    pool: &SqlitePool,
    rec: NewRegistrationRecord<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_REGISTRATION)
        .bind(rec.id)
        .bind(rec.name)
        .bind(rec.participant_id)
        .bind(rec.event_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_registration(pool: &SqlitePool, id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_REGISTRATION)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
