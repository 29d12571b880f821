use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// Feed entry as stored. Create-only; no update or delete path exists.
#[derive(Debug, Clone, FromRow)]
pub struct Short {
    pub id: i64,
    pub category: String,
    pub title: String,
    pub author: String,
    pub publish_date: OffsetDateTime,
    pub content: String,
    pub actual_content_link: String,
    pub image: String,
    pub upvote: i32,
    pub downvote: i32,
}

#[derive(Debug)]
pub struct NewShort {
    pub category: String,
    pub title: String,
    pub author: String,
    pub publish_date: OffsetDateTime,
    pub content: String,
    pub actual_content_link: String,
    pub image: String,
    pub upvote: i32,
    pub downvote: i32,
}

/// Insert a short and return its assigned id.
pub async fn insert(db: &PgPool, short: &NewShort) -> anyhow::Result<i64> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO shorts (category, title, author, publish_date, content,
                            actual_content_link, image, upvote, downvote)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#,
    )
    .bind(&short.category)
    .bind(&short.title)
    .bind(&short.author)
    .bind(short.publish_date)
    .bind(&short.content)
    .bind(&short.actual_content_link)
    .bind(&short.image)
    .bind(short.upvote)
    .bind(short.downvote)
    .fetch_one(db)
    .await?;
    Ok(id)
}

/// Full feed, most recent first, ties broken by upvote count. This
/// two-key order is the product's "trending" contract and is enforced
/// by the store, not re-sorted in process.
pub async fn list_feed(db: &PgPool) -> anyhow::Result<Vec<Short>> {
    let rows = sqlx::query_as::<_, Short>(
        r#"
        SELECT id, category, title, author, publish_date, content,
               actual_content_link, image, upvote, downvote
        FROM shorts
        ORDER BY publish_date DESC, upvote DESC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}
