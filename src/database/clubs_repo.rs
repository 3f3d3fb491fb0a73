use sqlx::SqlitePool;

use crate::models::ClubRow;

const SQL_LIST_CLUBS: &str = r#"
SELECT
  id,
  name
FROM clubs
ORDER BY rowid ASC
"#;

const SQL_INSERT_CLUB: &str = r#"
INSERT INTO clubs (id, name) VALUES (?, ?)
"#;

const SQL_DELETE_CLUB: &str = r#"
DELETE FROM clubs WHERE id = ?
"#;

pub async fn list_clubs(pool: &SqlitePool) -> sqlx::Result<Vec<ClubRow>> {
    sqlx::query_as::<_, ClubRow>(SQL_LIST_CLUBS)
        .fetch_all(pool)
        .await
}

pub async fn insert_club(pool: &SqlitePool, id: &str, name: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_CLUB)
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_club(pool: &SqlitePool, id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_CLUB).bind(id).execute(pool).await?;
    Ok(res.rows_affected())
}
