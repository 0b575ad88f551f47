//! Schema tests for the `add_urls_to_posts` migration.
//!
//! Verifies the forward migration adds exactly two nullable text columns and
//! that the down file is an exact inverse: applying down then up leaves the
//! `posts` column set identical.

use sqlx::{PgPool, Row};

const ADD_URLS_UP: &str = include_str!("../../../db/migrations/0003_add_urls_to_posts.up.sql");
const ADD_URLS_DOWN: &str = include_str!("../../../db/migrations/0003_add_urls_to_posts.down.sql");

/// Fetch the sorted column names of the `posts` table.
async fn posts_columns(pool: &PgPool) -> Vec<String> {
    sqlx::query(
        "SELECT column_name FROM information_schema.columns
         WHERE table_name = 'posts'
         ORDER BY column_name",
    )
    .fetch_all(pool)
    .await
    .unwrap()
    .into_iter()
    .map(|row| row.get::<String, _>("column_name"))
    .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_url_columns_are_nullable_text(pool: PgPool) {
    let rows = sqlx::query(
        "SELECT column_name, data_type, is_nullable FROM information_schema.columns
         WHERE table_name = 'posts' AND column_name IN ('video_url', 'audio_url')
         ORDER BY column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(rows.len(), 2, "Both url columns should exist");
    for row in rows {
        assert_eq!(row.get::<String, _>("data_type"), "text");
        assert_eq!(row.get::<String, _>("is_nullable"), "YES");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_url_columns_default_to_null(pool: PgPool) {
    sqlx::query("INSERT INTO posts (title) VALUES ('hello')")
        .execute(&pool)
        .await
        .unwrap();

    let row = sqlx::query("SELECT video_url, audio_url FROM posts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(row.get::<Option<String>, _>("video_url").is_none());
    assert!(row.get::<Option<String>, _>("audio_url").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_down_then_up_restores_exact_column_set(pool: PgPool) {
    let migrated = posts_columns(&pool).await;
    assert!(migrated.contains(&"video_url".to_string()));
    assert!(migrated.contains(&"audio_url".to_string()));

    // Roll the migration back using the actual down file.
    sqlx::raw_sql(ADD_URLS_DOWN).execute(&pool).await.unwrap();
    let rolled_back = posts_columns(&pool).await;
    let expected: Vec<String> = migrated
        .iter()
        .filter(|c| *c != "video_url" && *c != "audio_url")
        .cloned()
        .collect();
    assert_eq!(rolled_back, expected, "Down must drop only the two columns");

    // Re-apply from the up file: the column set must match the migrated state.
    sqlx::raw_sql(ADD_URLS_UP).execute(&pool).await.unwrap();
    assert_eq!(posts_columns(&pool).await, migrated);
}
