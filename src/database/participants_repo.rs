use sqlx::SqlitePool;

use crate::models::ParticipantRow;

const SQL_LIST_PARTICIPANTS: &str = r#"
SELECT
  id,
  name,
  email,
  team_members_count
FROM participants
ORDER BY rowid ASC
"#;

const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT INTO participants (
  id,
  name,
  email,
  team_members_count
) VALUES (?, ?, ?, ?)
"#;

pub struct NewParticipantRecord<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub team_members_count: i64,
}

pub async fn list_participants(pool: &SqlitePool) -> sqlx::Result<Vec<ParticipantRow>> {
    sqlx::query_as::<_, ParticipantRow>(SQL_LIST_PARTICIPANTS)
        .fetch_all(pool)
        .await
}

pub async fn insert_participant(
    pool: &SqlitePool,
    rec: NewParticipantRecord<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_PARTICIPANT)
        .bind(rec.id)
        .bind(rec.name)
        .bind(rec.email)
        .bind(rec.team_members_count)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
