//! Post generator. Composes content and hashtags for a validated request.

use tracing::{debug, info, instrument};

use crate::generation::hashtags::compose_hashtags;
use crate::generation::platform::profile_for;
use crate::generation::templates::render;
use crate::generation::tone::Tone;
use crate::models::post::GeneratedPost;

/// Generates a post for a non-empty topic.
///
/// Missing platform or tone labels behave exactly like unrecognized ones.
/// The requested platform label is echoed back unchanged.
#[instrument(skip_all, fields(platform = platform.unwrap_or(""), tone = tone.unwrap_or("")))]
pub fn generate_post(topic: &str, platform: Option<&str>, tone: Option<&str>) -> GeneratedPost {
    let platform_label = platform.unwrap_or_default();
    let tone_label = tone.unwrap_or_default();

    debug!(topic, "Generating post");

    let resolved_tone = Tone::resolve(tone_label);
    let content = render(topic, platform_label, tone_label);
    let hashtags = compose_hashtags(topic, platform_label, resolved_tone.hashtag_count());

    // Advisory only: content is never truncated to the profile length
    let profile = profile_for(platform_label);
    let content_len = content.chars().count();
    if content_len > profile.max_length {
        debug!(
            content_len,
            max_length = profile.max_length,
            "Content exceeds platform length budget"
        );
    }

    info!(
        resolved_tone = resolved_tone.label(),
        content_len,
        hashtag_count = hashtags.len(),
        "Generated post"
    );

    GeneratedPost {
        platform: platform.map(str::to_string),
        content,
        hashtags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professional_twitter_post() {
        let post = generate_post("cloud computing tips", Some("twitter"), Some("professional"));
        assert_eq!(post.platform.as_deref(), Some("twitter"));
        assert!(post
            .content
            .starts_with("Excited to share insights on cloud computing tips."));
        assert_eq!(post.hashtags, vec!["#Cloud", "#Computing", "#Tech"]);
    }

    #[test]
    fn test_tone_drives_hashtag_count() {
        let topic = "ai";
        assert_eq!(generate_post(topic, Some("twitter"), Some("professional")).hashtags.len(), 3);
        assert_eq!(generate_post(topic, Some("twitter"), Some("casual")).hashtags.len(), 4);
        assert_eq!(generate_post(topic, Some("twitter"), Some("enthusiastic")).hashtags.len(), 5);
        assert_eq!(generate_post(topic, Some("twitter"), Some("humorous")).hashtags.len(), 3);
        assert_eq!(generate_post(topic, Some("twitter"), Some("inspirational")).hashtags.len(), 4);
    }

    #[test]
    fn test_unknown_platform_is_echoed_and_falls_back() {
        let post = generate_post("product launch", Some("threads"), Some("casual"));
        assert_eq!(post.platform.as_deref(), Some("threads"));
        // facebook template, twitter filler list
        assert!(post.content.starts_with("Hey everyone! Been diving into product launch"));
        assert_eq!(post.hashtags, vec!["#Product", "#Launch", "#Tech", "#Innovation"]);
    }

    #[test]
    fn test_missing_platform_and_tone() {
        let post = generate_post("team offsite", None, None);
        assert!(post.platform.is_none());
        assert!(post
            .content
            .starts_with("I wanted to share some thoughts on team offsite."));
        assert_eq!(post.hashtags, vec!["#Team", "#Offsite", "#Tech"]);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_post("quarterly results", Some("linkedin"), Some("inspirational"));
        let b = generate_post("quarterly results", Some("linkedin"), Some("inspirational"));
        assert_eq!(a, b);
    }
}
