//! End-to-end exercise of the discovery core the way a page would use it:
//! rank related posts for an article, filter the corpus by a reader query,
//! compute the reading-time phrase, encode the body for transport, and
//! memoize the related ids in a TTL cache.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use post_discovery::cache::CacheStore;
use post_discovery::payload;
use post_discovery::ranking;
use post_discovery::reading_time;
use post_discovery::search;
use post_discovery::types::{ContentItem, Locale, TagRef};

fn tag(id: &str, name: &str) -> TagRef {
    TagRef {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn corpus() -> Vec<ContentItem> {
    let post = |id: &str, title: &str, summary: &str, day: u32, tags: Vec<TagRef>| ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        body: format!("# {title}\n\n{}", "kelime word ".repeat(700)),
        published_at: Utc.with_ymd_and_hms(2024, 4, day, 0, 0, 0).unwrap(),
        tags,
    };
    vec![
        post(
            "react-19",
            "React 19",
            "Compiler updates",
            1,
            vec![tag("react", "React"), tag("frontend", "Frontend")],
        ),
        post(
            "react-server",
            "React Server Components",
            "Streaming rendering",
            5,
            vec![tag("react", "React"), tag("frontend", "Frontend")],
        ),
        post(
            "css-grid",
            "CSS Grid in Practice",
            "Layout recipes",
            3,
            vec![tag("frontend", "Frontend"), tag("css", "CSS")],
        ),
        post(
            "rust-wasm",
            "Rust to WebAssembly",
            "Toolchain walkthrough",
            7,
            vec![tag("rust", "Rust"), tag("wasm", "WebAssembly")],
        ),
    ]
}

#[test]
fn related_posts_prefer_specific_shared_topics() {
    let items = corpus();
    let target = &items[0]; // react-19

    let related = ranking::rank(target, &items, 3);
    let ids: Vec<&str> = related.iter().map(|i| i.id.as_str()).collect();

    // react-server shares the rarer `react` tag on top of `frontend`;
    // css-grid shares only the common `frontend` tag; rust-wasm shares
    // nothing and must not appear.
    assert_eq!(ids, vec!["react-server", "css-grid"]);
}

#[test]
fn query_filtering_over_search_text() {
    let items = corpus();
    let query = "REAKT"; // no match even case-folded
    let hits: Vec<&ContentItem> = items
        .iter()
        .filter(|item| search::matches(&search::build_search_text(item), query))
        .collect();
    assert!(hits.is_empty());

    let hits: Vec<&str> = items
        .iter()
        .filter(|item| search::matches(&search::build_search_text(item), "react"))
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(hits, vec!["react-19", "react-server"]);

    // Empty query is "no filter".
    let all: Vec<&ContentItem> = items
        .iter()
        .filter(|item| search::matches(&search::build_search_text(item), "  "))
        .collect();
    assert_eq!(all.len(), items.len());
}

#[test]
fn reading_time_for_article_bodies() {
    let items = corpus();
    // 1400 words of body text at 250 wpm → 6 minutes, same phrase per locale.
    assert_eq!(
        reading_time::estimate(&items[0].body, Locale::En, 3),
        "6 min read"
    );
    assert_eq!(
        reading_time::estimate(&items[0].body, Locale::Tr, 3),
        "6 dk okuma"
    );
}

#[test]
fn body_payload_round_trips_through_transport_shape() {
    let long_body = "annotated walkthrough of the build pipeline ".repeat(1000);
    let encoded = payload::encode(&long_body);

    // Simulate the storage boundary: serialize, ship, parse, decode.
    let wire = serde_json::to_string(&encoded).unwrap();
    let received: payload::EncodedPayload = serde_json::from_str(&wire).unwrap();
    assert_eq!(payload::decode(&received), long_body);
}

#[test]
fn related_ids_memoized_per_domain_cache() {
    let items = corpus();
    let target = &items[0];
    let mut related_cache: CacheStore<Vec<String>> = CacheStore::new("related-posts");

    let key = format!("{}:{}", "en", target.id);
    if related_cache.get(&key).is_none() {
        let ids = ranking::rank(target, &items, 3)
            .into_iter()
            .map(|i| i.id.clone())
            .collect::<Vec<_>>();
        related_cache.set(key.clone(), ids, Duration::from_secs(60));
    }

    let cached = related_cache.get(&key).expect("entry just inserted");
    assert_eq!(cached, &vec!["react-server".to_string(), "css-grid".to_string()]);
}
