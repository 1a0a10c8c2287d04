//! Content signatures
//!
//! A signature is the lowercased post text with links, hashtags and mentions
//! blanked out and whitespace collapsed. Two posts with the same signature are
//! treated as the same content, whatever platform or author they came from.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::Post;

/// `http://` or `https://` followed by a run of non-whitespace
static URL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url rule is a valid regex"));

/// `#tag` or `@user` made of ASCII word characters
static TAG_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#@][A-Za-z0-9_]+").expect("tag rule is a valid regex"));

static WHITESPACE_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace rule is a valid regex"));

/// Normalize text into its dedup signature. Never fails; may return "".
pub fn text_signature(text: &str) -> String {
    let lower = text.to_lowercase();
    let without_urls = URL_RULE.replace_all(&lower, " ");
    let without_tags = TAG_RULE.replace_all(&without_urls, " ");
    WHITESPACE_RULE
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}

pub fn signature(post: &Post) -> String {
    text_signature(&post.text)
}
