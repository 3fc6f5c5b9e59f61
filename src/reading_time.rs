//! Reading-time estimation from raw markdown.
//!
//! Word counting walks the markdown event stream rather than the raw text:
//! fenced code blocks (both ``` and ~~~ fences), inline code spans, and HTML
//! fragments contribute nothing, link and image markup contributes only its
//! visible text (the URL is discarded), and what remains is tokenized with a
//! Unicode-aware rule so non-Latin scripts count as words.
//!
//! Display formatting is bucketed: estimates are clamped to a minimum,
//! rounded up to whole minutes, and capped with a locale-specific "15+"
//! phrase — read-through rates drop off beyond that, so a precise number
//! past the cap is noise.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::types::Locale;

/// Reading speed used to turn a word count into minutes.
pub const WORDS_PER_MINUTE: usize = 250;

/// Estimates at or above this many minutes display as the "15+" phrase.
const DISPLAY_CAP_MINUTES: u32 = 15;

/// Default floor for displayed estimates.
pub const DEFAULT_MINIMUM_MINUTES: u32 = 3;

/// Extract the countable words from markdown source.
///
/// Empty or punctuation-only input yields an empty vector.
pub fn extract_words(markup: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut code_depth: usize = 0;
    for event in Parser::new(markup) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => code_depth += 1,
            Event::End(TagEnd::CodeBlock) => code_depth = code_depth.saturating_sub(1),
            Event::Text(text) if code_depth == 0 => tokenize_into(&text, &mut words),
            // Code spans, HTML fragments, breaks, and structural events
            // contribute no words.
            _ => {}
        }
    }
    words
}

/// A word starts at a letter and continues through letters and digits.
fn tokenize_into(text: &str, words: &mut Vec<String>) {
    let mut current = String::new();
    for c in text.chars() {
        if current.is_empty() {
            if c.is_alphabetic() {
                current.push(c);
            }
        } else if c.is_alphanumeric() {
            current.push(c);
        } else {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
}

/// Format a minute estimate as a locale-specific display phrase.
///
/// The estimate is clamped to at least `minimum_minutes`, rounded up to the
/// next whole minute, and capped: at or beyond 15 minutes the phrase is the
/// locale's "15+" form.
pub fn format_duration(minutes: f64, locale: Locale, minimum_minutes: u32) -> String {
    let rounded = minutes.max(0.0).ceil() as u32;
    let safe = rounded.max(minimum_minutes);
    if safe >= DISPLAY_CAP_MINUTES {
        return match locale {
            Locale::Tr => "15+ dk okuma".to_string(),
            Locale::En => "15+ min read".to_string(),
        };
    }
    match locale {
        Locale::Tr => format!("{safe} dk okuma"),
        Locale::En => format!("{safe} min read"),
    }
}

/// Estimate a display phrase for a markdown body at [`WORDS_PER_MINUTE`].
pub fn estimate(markup: &str, locale: Locale, minimum_minutes: u32) -> String {
    let words = extract_words(markup).len();
    format_duration(
        words as f64 / WORDS_PER_MINUTE as f64,
        locale,
        minimum_minutes,
    )
}

/// Raw clamped minute count for a markdown body, without display bucketing.
///
/// Used by offline tooling that stores the number rather than the phrase.
pub fn estimate_minutes(markup: &str, minimum_minutes: u32) -> u32 {
    let words = extract_words(markup).len();
    let rounded = (words as f64 / WORDS_PER_MINUTE as f64).ceil() as u32;
    rounded.max(minimum_minutes)
}

/// Parse a display phrase back to its minute count.
///
/// Accepts any label starting with a positive integer (`"4 min read"`,
/// `" 8 dk okuma "`, `"15+ min read"`). Empty, non-numeric, and zero labels
/// yield `None`.
pub fn parse_minutes(label: &str) -> Option<u32> {
    let digits: String = label
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(minutes) => Some(minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // extract_words
    // =========================================================================

    #[test]
    fn strips_code_blocks_inline_code_links_and_html() {
        let markdown = "\
# Title

```ts
const hidden = true;
```

Inline `secret` should be removed.
![alt text](https://example.com/img.png)
[visible link](https://example.com)
<strong>keep going</strong>
";
        let words = extract_words(markdown);
        assert!(words.contains(&"Title".to_string()));
        assert!(words.contains(&"Inline".to_string()));
        assert!(words.contains(&"alt".to_string()));
        assert!(words.contains(&"text".to_string()));
        assert!(words.contains(&"visible".to_string()));
        assert!(words.contains(&"keep".to_string()));
        assert!(!words.contains(&"hidden".to_string()));
        assert!(!words.contains(&"secret".to_string()));
        assert!(!words.iter().any(|w| w.contains("example")));
        assert!(!words.iter().any(|w| w.contains("strong")));
    }

    #[test]
    fn strips_tilde_fenced_blocks() {
        let markdown = "before\n\n~~~\ninside fence\n~~~\n\nafter";
        let words = extract_words(markdown);
        assert_eq!(words, vec!["before", "after"]);
    }

    #[test]
    fn punctuation_only_input_yields_nothing() {
        assert!(extract_words("### --- ...").is_empty());
        assert!(extract_words("").is_empty());
    }

    #[test]
    fn counts_non_latin_scripts() {
        let words = extract_words("günaydın dünya 世界");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn words_start_at_letters_and_split_on_connectors() {
        assert_eq!(extract_words("alt-text"), vec!["alt", "text"]);
        assert_eq!(extract_words("123abc456"), vec!["abc456"]);
        assert_eq!(extract_words("42 1999"), Vec::<String>::new());
    }

    // =========================================================================
    // format_duration
    // =========================================================================

    #[test]
    fn caps_long_reads_per_locale() {
        assert_eq!(format_duration(20.0, Locale::En, 3), "15+ min read");
        assert_eq!(format_duration(20.0, Locale::Tr, 3), "15+ dk okuma");
    }

    #[test]
    fn rounds_up_and_respects_minimum() {
        assert_eq!(format_duration(3.2, Locale::En, 3), "4 min read");
        assert_eq!(format_duration(2.1, Locale::Tr, 3), "3 dk okuma");
        assert_eq!(format_duration(0.4, Locale::En, 3), "3 min read");
    }

    #[test]
    fn one_minute_read_with_minimum_one() {
        assert_eq!(format_duration(1.0, Locale::En, 1), "1 min read");
    }

    #[test]
    fn exactly_fifteen_is_capped() {
        assert_eq!(format_duration(15.0, Locale::En, 3), "15+ min read");
        assert_eq!(format_duration(14.2, Locale::En, 3), "15+ min read");
        assert_eq!(format_duration(14.0, Locale::En, 3), "14 min read");
    }

    // =========================================================================
    // estimate / estimate_minutes / parse_minutes
    // =========================================================================

    fn n_words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn estimates_from_word_count_at_250_wpm() {
        assert_eq!(estimate(&n_words(1000), Locale::En, 3), "4 min read");
    }

    #[test]
    fn short_content_hits_the_minimum() {
        assert_eq!(estimate("short content", Locale::En, 3), "3 min read");
        assert_eq!(estimate_minutes("short content", 3), 3);
    }

    #[test]
    fn estimate_minutes_rounds_up_above_minimum() {
        assert_eq!(estimate_minutes(&n_words(501), 1), 3);
        assert_eq!(estimate_minutes(&n_words(500), 1), 2);
    }

    #[test]
    fn parses_numeric_labels() {
        assert_eq!(parse_minutes("15+ min read"), Some(15));
        assert_eq!(parse_minutes(" 8 dk okuma "), Some(8));
        assert_eq!(parse_minutes("4 min read"), Some(4));
    }

    #[test]
    fn rejects_empty_invalid_and_zero_labels() {
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("  "), None);
        assert_eq!(parse_minutes("minutes"), None);
        assert_eq!(parse_minutes("0 min"), None);
        assert_eq!(parse_minutes("no estimate"), None);
    }
}
