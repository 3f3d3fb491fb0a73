use sqlx::SqlitePool;

const SQL_CREATE_CLUBS: &str = r#"
CREATE TABLE IF NOT EXISTS clubs (
  id TEXT PRIMARY KEY NOT NULL,
  name TEXT NOT NULL
)
"#;

const SQL_CREATE_EVENTS: &str = r#"
CREATE TABLE IF NOT EXISTS events (
  id TEXT PRIMARY KEY NOT NULL,
  name TEXT NOT NULL,
  club_id TEXT REFERENCES clubs(id) ON DELETE SET NULL,
  max_participants INTEGER
)
"#;

const SQL_CREATE_PARTICIPANTS: &str = r#"
CREATE TABLE IF NOT EXISTS participants (
  id TEXT PRIMARY KEY NOT NULL,
  name TEXT NOT NULL,
  email TEXT,
  team_members_count INTEGER
)
"#;

const SQL_CREATE_REGISTRATIONS: &str = r#"
CREATE TABLE IF NOT EXISTS registrations (
  id TEXT PRIMARY KEY NOT NULL,
  name TEXT NOT NULL,
  participant_id TEXT NOT NULL REFERENCES participants(id),
  event_id TEXT NOT NULL REFERENCES events(id) ON DELETE CASCADE
)
"#;

const SQL_CREATE_REGISTRATIONS_EVENT_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_registrations_event_id ON registrations (event_id)
"#;

pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    for sql in [
        SQL_CREATE_CLUBS,
        SQL_CREATE_EVENTS,
        SQL_CREATE_PARTICIPANTS,
        SQL_CREATE_REGISTRATIONS,
        SQL_CREATE_REGISTRATIONS_EVENT_INDEX,
    ] {
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}
