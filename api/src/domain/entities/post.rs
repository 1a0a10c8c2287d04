//! Post domain entity
//!
//! A short post collected from one of the supported social platforms.
//! Posts are immutable once they enter the store; the feed pipeline only reads them.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Opaque identifier for a post, unique within a store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub String);

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source platform a post was collected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    Twitter,
    Instagram,
    Facebook,
    Linkedin,
    Youtube,
    Reddit,
}

impl PlatformId {
    /// Every supported platform, in catalogue order
    pub const ALL: [PlatformId; 6] = [
        PlatformId::Twitter,
        PlatformId::Instagram,
        PlatformId::Facebook,
        PlatformId::Linkedin,
        PlatformId::Youtube,
        PlatformId::Reddit,
    ];

    /// Human-readable platform label
    pub fn display_name(&self) -> &'static str {
        match self {
            PlatformId::Twitter => "Twitter/X",
            PlatformId::Instagram => "Instagram",
            PlatformId::Facebook => "Facebook",
            PlatformId::Linkedin => "LinkedIn",
            PlatformId::Youtube => "YouTube",
            PlatformId::Reddit => "Reddit",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PlatformId::Twitter => "🐦",
            PlatformId::Instagram => "📸",
            PlatformId::Facebook => "📘",
            PlatformId::Linkedin => "💼",
            PlatformId::Youtube => "▶️",
            PlatformId::Reddit => "👽",
        }
    }
}

impl std::fmt::Display for PlatformId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformId::Twitter => write!(f, "twitter"),
            PlatformId::Instagram => write!(f, "instagram"),
            PlatformId::Facebook => write!(f, "facebook"),
            PlatformId::Linkedin => write!(f, "linkedin"),
            PlatformId::Youtube => write!(f, "youtube"),
            PlatformId::Reddit => write!(f, "reddit"),
        }
    }
}

impl std::str::FromStr for PlatformId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "twitter" | "x" => Ok(PlatformId::Twitter),
            "instagram" => Ok(PlatformId::Instagram),
            "facebook" => Ok(PlatformId::Facebook),
            "linkedin" => Ok(PlatformId::Linkedin),
            "youtube" => Ok(PlatformId::Youtube),
            "reddit" => Ok(PlatformId::Reddit),
            _ => Err(format!(
                "Unknown platform: {}. Use: twitter, instagram, facebook, linkedin, youtube, reddit",
                s
            )),
        }
    }
}

/// Author of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUser {
    pub name: String,
    pub handle: String,
}

/// Interaction counters reported by the source platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostMetrics {
    pub comments: u64,
    pub likes: u64,
    pub shares: u64,
}

impl PostMetrics {
    /// Engagement score: comments + likes + shares.
    ///
    /// Widened to `u128` so the sum of three `u64` counters is always exact.
    pub fn engagement(&self) -> u128 {
        u128::from(self.comments) + u128::from(self.likes) + u128::from(self.shares)
    }
}

/// A validated post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub platform_id: PlatformId,
    pub user: PostUser,
    pub text: String,
    pub media_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub metrics: PostMetrics,
}

impl Post {
    pub fn engagement(&self) -> u128 {
        self.metrics.engagement()
    }
}

/// Raw metrics as supplied by a data source, before validation
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct MetricsRecord {
    pub comments: i64,
    pub likes: i64,
    pub shares: i64,
}

/// Post as supplied by a data source, before validation
///
/// `created_at` is epoch milliseconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostRecord {
    pub id: String,
    pub platform_id: String,
    pub user: PostUser,
    pub text: String,
    #[serde(default)]
    pub media_url: Option<String>,
    pub created_at: i64,
    pub metrics: MetricsRecord,
}

fn non_negative(field: &str, id: &str, value: i64) -> Result<u64, DomainError> {
    u64::try_from(value).map_err(|_| {
        DomainError::Validation(format!(
            "post {}: {} must be non-negative, got {}",
            id, field, value
        ))
    })
}

impl TryFrom<PostRecord> for Post {
    type Error = DomainError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        if record.id.trim().is_empty() {
            return Err(DomainError::Validation("post id must not be empty".to_string()));
        }

        let platform_id = record
            .platform_id
            .parse::<PlatformId>()
            .map_err(|e| DomainError::Validation(format!("post {}: {}", record.id, e)))?;

        let created_at = Utc
            .timestamp_millis_opt(record.created_at)
            .single()
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "post {}: created_at {} is out of range",
                    record.id, record.created_at
                ))
            })?;

        let metrics = PostMetrics {
            comments: non_negative("comments", &record.id, record.metrics.comments)?,
            likes: non_negative("likes", &record.id, record.metrics.likes)?,
            shares: non_negative("shares", &record.id, record.metrics.shares)?,
        };

        Ok(Post {
            id: PostId(record.id),
            platform_id,
            user: record.user,
            text: record.text,
            media_url: record.media_url,
            created_at,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PostRecord {
        PostRecord {
            id: "post_1".to_string(),
            platform_id: "reddit".to_string(),
            user: PostUser {
                name: "Mei Lin".to_string(),
                handle: "@meilin".to_string(),
            },
            text: "Dark mode is life.".to_string(),
            media_url: None,
            created_at: 1_700_000_000_000,
            metrics: MetricsRecord {
                comments: 1,
                likes: 2,
                shares: 3,
            },
        }
    }

    #[test]
    fn platform_id_from_str() {
        assert_eq!("twitter".parse::<PlatformId>().unwrap(), PlatformId::Twitter);
        assert_eq!("X".parse::<PlatformId>().unwrap(), PlatformId::Twitter);
        assert_eq!(
            " LinkedIn ".parse::<PlatformId>().unwrap(),
            PlatformId::Linkedin
        );
        assert!("myspace".parse::<PlatformId>().is_err());
    }

    #[test]
    fn platform_id_display_round_trips() {
        for platform in PlatformId::ALL {
            assert_eq!(platform.to_string().parse::<PlatformId>().unwrap(), platform);
        }
    }

    #[test]
    fn platform_display_name() {
        assert_eq!(PlatformId::Twitter.display_name(), "Twitter/X");
        assert_eq!(PlatformId::Youtube.display_name(), "YouTube");
    }

    #[test]
    fn engagement_sums_metrics() {
        let metrics = PostMetrics {
            comments: 7,
            likes: 13,
            shares: 5,
        };
        assert_eq!(metrics.engagement(), 25);
    }

    #[test]
    fn engagement_of_largest_valid_record_is_exact() {
        let mut raw = record();
        raw.metrics = MetricsRecord {
            comments: i64::MAX,
            likes: i64::MAX,
            shares: i64::MAX,
        };
        let post = Post::try_from(raw).unwrap();
        assert_eq!(post.engagement(), 3 * i64::MAX as u128);
    }

    #[test]
    fn valid_record_converts() {
        let post = Post::try_from(record()).unwrap();
        assert_eq!(post.id, PostId::from("post_1"));
        assert_eq!(post.platform_id, PlatformId::Reddit);
        assert_eq!(post.created_at.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(post.engagement(), 6);
    }

    #[test]
    fn negative_metric_is_rejected() {
        let mut raw = record();
        raw.metrics.likes = -1;
        let err = Post::try_from(raw).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("likes")));
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let mut raw = record();
        raw.platform_id = "myspace".to_string();
        assert!(matches!(
            Post::try_from(raw),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn empty_id_is_rejected() {
        let mut raw = record();
        raw.id = "  ".to_string();
        assert!(Post::try_from(raw).is_err());
    }

    #[test]
    fn out_of_range_timestamp_is_rejected() {
        let mut raw = record();
        raw.created_at = i64::MAX;
        assert!(Post::try_from(raw).is_err());
    }

    #[test]
    fn record_missing_metrics_fails_to_deserialize() {
        let json = r#"{"id":"p","platform_id":"reddit","user":{"name":"a","handle":"@a"},"text":"t","created_at":0}"#;
        assert!(serde_json::from_str::<PostRecord>(json).is_err());
    }
}
