//! Hashtag composer: topic-derived tags padded with a platform filler list.

use crate::generation::platform::Platform;

/// Topic words must be strictly longer than this (in chars) to become a tag.
const MIN_WORD_LEN_EXCLUSIVE: usize = 3;

/// At most this many tags are derived from the topic.
const MAX_BASE_HASHTAGS: usize = 2;

/// Composes up to `count` hashtags for a topic and platform label.
///
/// Algorithm:
/// 1. Lower-case the topic, split on whitespace, keep words longer than 3 chars
/// 2. Take the first two, capitalize, prefix `#` (base hashtags)
/// 3. Append `count - base.len()` filler tags from the platform list, front first
///
/// Unknown platform labels use the Twitter filler list. When `count` does not
/// exceed the number of base hashtags no filler is appended, and the base
/// hashtags are returned as-is even if that overshoots `count`.
pub fn compose_hashtags(topic: &str, platform: &str, count: usize) -> Vec<String> {
    let mut hashtags = base_hashtags(topic);

    let filler = Platform::from_label(platform)
        .unwrap_or(Platform::Twitter)
        .filler_hashtags();
    let remaining = count.saturating_sub(hashtags.len());

    hashtags.extend(filler.iter().take(remaining).map(|t| t.to_string()));
    hashtags
}

/// Derives the topic hashtags (0, 1 or 2 of them), in topic order.
fn base_hashtags(topic: &str) -> Vec<String> {
    topic
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_WORD_LEN_EXCLUSIVE)
        .take(MAX_BASE_HASHTAGS)
        .map(|w| format!("#{}", capitalize(w)))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_base_tags_plus_one_filler() {
        assert_eq!(
            compose_hashtags("cloud computing tips", "twitter", 3),
            vec!["#Cloud", "#Computing", "#Tech"]
        );
    }

    #[test]
    fn test_short_words_yield_filler_only() {
        assert_eq!(
            compose_hashtags("ai ml", "twitter", 3),
            vec!["#Tech", "#Innovation", "#Business"]
        );
    }

    #[test]
    fn test_count_equal_to_base_appends_no_filler() {
        assert_eq!(
            compose_hashtags("big data strategy", "linkedin", 2),
            vec!["#Data", "#Strategy"]
        );
    }

    #[test]
    fn test_count_below_base_is_not_clamped() {
        assert_eq!(
            compose_hashtags("big data strategy", "linkedin", 1),
            vec!["#Data", "#Strategy"]
        );
        assert_eq!(
            compose_hashtags("big data strategy", "linkedin", 0),
            vec!["#Data", "#Strategy"]
        );
    }

    #[test]
    fn test_one_base_tag_pads_with_filler() {
        assert_eq!(
            compose_hashtags("the ai revolution", "instagram", 4),
            vec!["#Revolution", "#Inspo", "#Motivation", "#Goals"]
        );
    }

    #[test]
    fn test_unknown_platform_uses_twitter_filler() {
        assert_eq!(
            compose_hashtags("go", "myspace", 2),
            vec!["#Tech", "#Innovation"]
        );
    }

    #[test]
    fn test_topic_is_lowercased_before_capitalizing() {
        assert_eq!(
            compose_hashtags("KUBERNETES Operators", "facebook", 3),
            vec!["#Kubernetes", "#Operators", "#Community"]
        );
    }

    #[test]
    fn test_word_length_threshold_is_strict() {
        // "seo" is 3 chars and excluded, "tips" is 4 chars and kept
        assert_eq!(
            compose_hashtags("seo tips", "twitter", 2),
            vec!["#Tips", "#Tech"]
        );
    }

    #[test]
    fn test_any_whitespace_separates_words() {
        assert_eq!(
            compose_hashtags("remote\twork\n  culture", "linkedin", 3),
            vec!["#Remote", "#Work", "#Professional"]
        );
    }

    #[test]
    fn test_filler_never_exceeds_list_length() {
        let tags = compose_hashtags("ai", "facebook", 10);
        assert_eq!(tags.len(), 6);
        assert_eq!(tags.last().map(String::as_str), Some("#News"));
    }

    #[test]
    fn test_punctuation_stays_attached() {
        assert_eq!(
            compose_hashtags("launch day!", "twitter", 2),
            vec!["#Launch", "#Day!"]
        );
    }
}
