use serde::{Deserialize, Serialize};

/// Vote tally carried on every short. Caller-supplied at creation;
/// there is no voting endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Votes {
    pub upvote: i32,
    pub downvote: i32,
}

/// Request body for creating a short. `publish_date` stays textual here
/// and is parsed as RFC 3339 by the handler so an unparseable date maps
/// to a 400, not a decode rejection.
#[derive(Debug, Deserialize)]
pub struct CreateShortRequest {
    pub category: String,
    pub title: String,
    pub author: String,
    pub publish_date: String,
    pub content: String,
    pub actual_content_link: String,
    pub image: String,
    pub votes: Votes,
}

#[derive(Debug, Serialize)]
pub struct CreateShortResponse {
    pub message: &'static str,
    pub short_id: String,
    pub status_code: u16,
}

/// Feed entry as rendered to the client, timestamp back in RFC 3339.
#[derive(Debug, Serialize)]
pub struct ShortItem {
    pub category: String,
    pub title: String,
    pub author: String,
    pub publish_date: String,
    pub content: String,
    pub actual_content_link: String,
    pub image: String,
    pub votes: Votes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_deserializes_nested_votes() {
        let req: CreateShortRequest = serde_json::from_str(
            r#"{
                "category": "tech",
                "title": "Rust 1.80 released",
                "author": "jane",
                "publish_date": "2024-01-02T10:00:00Z",
                "content": "Highlights from the release notes.",
                "actual_content_link": "https://example.com/rust-1-80",
                "image": "https://example.com/rust.png",
                "votes": {"upvote": 3, "downvote": 1}
            }"#,
        )
        .expect("deserialize");
        assert_eq!(req.votes.upvote, 3);
        assert_eq!(req.votes.downvote, 1);
        assert_eq!(req.publish_date, "2024-01-02T10:00:00Z");
    }

    #[test]
    fn short_item_serializes_votes_as_nested_pair() {
        let item = ShortItem {
            category: "tech".into(),
            title: "t".into(),
            author: "a".into(),
            publish_date: "2024-01-02T10:00:00Z".into(),
            content: "c".into(),
            actual_content_link: "l".into(),
            image: "i".into(),
            votes: Votes {
                upvote: 5,
                downvote: 0,
            },
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&item).unwrap()).unwrap();
        assert_eq!(json["votes"]["upvote"], 5);
        assert_eq!(json["votes"]["downvote"], 0);
        assert_eq!(json["publish_date"], "2024-01-02T10:00:00Z");
    }
}
