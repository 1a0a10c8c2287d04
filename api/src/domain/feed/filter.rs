//! Platform and keyword filtering

use crate::domain::entities::{FilterConfig, Post};

fn matches_platform(post: &Post, config: &FilterConfig) -> bool {
    config.selected_platform_ids.is_empty() || config.selected_platform_ids.contains(&post.platform_id)
}

/// `query` must already be trimmed and lowercased; empty matches everything
fn matches_keyword(post: &Post, query: &str) -> bool {
    query.is_empty()
        || post.text.to_lowercase().contains(query)
        || post.user.name.to_lowercase().contains(query)
        || post.user.handle.to_lowercase().contains(query)
}

/// Keep the posts that pass both the platform and keyword predicates.
///
/// Relative order of the input is preserved.
pub fn filter_posts(posts: &[Post], config: &FilterConfig) -> Vec<Post> {
    let query = config.keyword.trim().to_lowercase();

    posts
        .iter()
        .filter(|post| matches_platform(post, config) && matches_keyword(post, &query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PlatformId;
    use crate::test_utils::{test_post, test_post_on, test_post_with_text};

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.0.as_str()).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let posts = vec![
            test_post("a"),
            test_post_on("b", PlatformId::Reddit),
            test_post("c"),
        ];
        let filtered = filter_posts(&posts, &FilterConfig::default());
        assert_eq!(filtered, posts);
    }

    #[test]
    fn platform_filter_keeps_selected_only() {
        let posts = vec![
            test_post_on("a", PlatformId::Twitter),
            test_post_on("b", PlatformId::Reddit),
            test_post_on("c", PlatformId::Youtube),
            test_post_on("d", PlatformId::Reddit),
        ];
        let config = FilterConfig::default()
            .toggle_platform(PlatformId::Reddit)
            .toggle_platform(PlatformId::Twitter);

        assert_eq!(ids(&filter_posts(&posts, &config)), vec!["a", "b", "d"]);
    }

    #[test]
    fn keyword_matches_text_regardless_of_platform() {
        let mut shouting = test_post_with_text("d", "WE ARE HIRING");
        shouting.platform_id = PlatformId::Facebook;
        let posts = vec![
            test_post_on("a", PlatformId::Linkedin),
            test_post_with_text("b", "We are hiring frontend engineers! Apply now @careers"),
            test_post_with_text("c", "Dark mode is life."),
            shouting,
        ];

        let config = FilterConfig::default().with_keyword("hiring");
        assert_eq!(ids(&filter_posts(&posts, &config)), vec!["b", "d"]);
    }

    #[test]
    fn keyword_matches_user_name_and_handle() {
        let mut by_name = test_post("a");
        by_name.user.name = "Priya Sharma".to_string();
        by_name.user.handle = "@ps".to_string();
        let mut by_handle = test_post("b");
        by_handle.user.name = "Someone".to_string();
        by_handle.user.handle = "@priya".to_string();
        let other = test_post("c");
        let posts = vec![by_name, by_handle, other];

        let config = FilterConfig::default().with_keyword("PRIYA");
        assert_eq!(ids(&filter_posts(&posts, &config)), vec!["a", "b"]);
    }

    #[test]
    fn whitespace_keyword_is_no_restriction() {
        let posts = vec![test_post("a"), test_post("b")];
        let mut config = FilterConfig::default();
        config.keyword = "   ".to_string();
        assert_eq!(filter_posts(&posts, &config).len(), 2);
    }

    #[test]
    fn both_predicates_must_hold() {
        let mut twitter_hiring = test_post_with_text("a", "hiring now");
        twitter_hiring.platform_id = PlatformId::Twitter;
        let mut reddit_hiring = test_post_with_text("b", "hiring now");
        reddit_hiring.platform_id = PlatformId::Reddit;
        let posts = vec![twitter_hiring, reddit_hiring];

        let config = FilterConfig::default()
            .with_keyword("hiring")
            .toggle_platform(PlatformId::Reddit);
        assert_eq!(ids(&filter_posts(&posts, &config)), vec!["b"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let posts = vec![
            test_post_with_text("a", "hiring"),
            test_post_with_text("b", "not this one"),
            test_post_with_text("c", "Hiring again"),
        ];
        let config = FilterConfig::default().with_keyword("hiring");

        let once = filter_posts(&posts, &config);
        let twice = filter_posts(&once, &config);
        assert_eq!(once, twice);
    }
}
