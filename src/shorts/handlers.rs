use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{error, info, instrument, warn};

use crate::{
    errors::{ApiError, AppJson},
    shorts::{
        dto::{CreateShortRequest, CreateShortResponse, ShortItem, Votes},
        repo::{self, NewShort},
    },
    state::AppState,
};

pub fn shorts_routes() -> Router<AppState> {
    Router::new()
        .route("/shorts/create", post(create_short))
        .route("/shorts/feed", get(feed))
}

#[instrument(skip(state, payload))]
pub async fn create_short(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateShortRequest>,
) -> Result<Json<CreateShortResponse>, ApiError> {
    let publish_date =
        OffsetDateTime::parse(&payload.publish_date, &Rfc3339).map_err(|_| {
            warn!(publish_date = %payload.publish_date, "unparseable publish date");
            ApiError::BadInput("Invalid publish date format".into())
        })?;

    let new = NewShort {
        category: payload.category,
        title: payload.title,
        author: payload.author,
        publish_date,
        content: payload.content,
        actual_content_link: payload.actual_content_link,
        image: payload.image,
        upvote: payload.votes.upvote,
        downvote: payload.votes.downvote,
    };

    let short_id = repo::insert(&state.db, &new).await.map_err(|e| {
        error!(error = %e, "insert short failed");
        ApiError::Internal(e)
    })?;

    info!(short_id, "short created");
    Ok(Json(CreateShortResponse {
        message: "Short added successfully",
        short_id: short_id.to_string(),
        status_code: 200,
    }))
}

#[instrument(skip(state))]
pub async fn feed(State(state): State<AppState>) -> Result<Json<Vec<ShortItem>>, ApiError> {
    let rows = repo::list_feed(&state.db).await.map_err(|e| {
        error!(error = %e, "feed query failed");
        ApiError::Internal(e)
    })?;

    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        let publish_date = row.publish_date.format(&Rfc3339).map_err(|e| {
            error!(error = %e, short_id = row.id, "format publish date failed");
            ApiError::Internal(e.into())
        })?;
        items.push(ShortItem {
            category: row.category,
            title: row.title,
            author: row.author,
            publish_date,
            content: row.content,
            actual_content_link: row.actual_content_link,
            image: row.image,
            votes: Votes {
                upvote: row.upvote,
                downvote: row.downvote,
            },
        });
    }

    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    #[test]
    fn publish_date_roundtrips_through_rfc3339() {
        let original = "2024-01-02T10:30:00Z";
        let parsed = OffsetDateTime::parse(original, &Rfc3339).expect("parse");
        let rendered = parsed.format(&Rfc3339).expect("format");
        let reparsed = OffsetDateTime::parse(&rendered, &Rfc3339).expect("reparse");
        assert_eq!(parsed, reparsed);
    }

    #[test]
    fn offset_timestamps_keep_their_instant() {
        let parsed = OffsetDateTime::parse("2024-01-02T12:30:00+02:00", &Rfc3339).expect("parse");
        let utc = OffsetDateTime::parse("2024-01-02T10:30:00Z", &Rfc3339).expect("parse");
        assert_eq!(parsed, utc);
    }

    #[test]
    fn garbage_publish_date_does_not_parse() {
        assert!(OffsetDateTime::parse("not-a-date", &Rfc3339).is_err());
        assert!(OffsetDateTime::parse("2024-13-40T99:00:00Z", &Rfc3339).is_err());
        assert!(OffsetDateTime::parse("", &Rfc3339).is_err());
    }
}
