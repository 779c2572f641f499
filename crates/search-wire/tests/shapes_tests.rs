//! End-to-end decoding of realistic payloads for each endpoint.

use chrono::{TimeZone, Utc};
use search_wire::shapes::{
    ForumData, ImageSearchResponse, MetaUrl, SummarizerResponse, VideoSearchResponse,
};
use search_wire::{
    decode_response, decode_success, Duration, SpellcheckResponse, SuggestSearchResponse,
    Timestamp, ViewCount, WebSearchResponse,
};

const WEB_PAYLOAD: &str = r#"{
  "type": "search",
  "query": {
    "original": "rust serde",
    "more_results_available": true,
    "language": {"main": "en"},
    "country": "us"
  },
  "mixed": {
    "type": "mixed",
    "main": [{"type": "web", "index": 0, "all": false}, {"type": "videos", "all": true}],
    "top": [],
    "side": []
  },
  "web": {
    "type": "search",
    "family_friendly": true,
    "results": [
      {
        "type": "search_result",
        "subtype": "generic",
        "title": "Serde",
        "url": "https://serde.rs/",
        "description": "Serde is a framework for serializing and deserializing Rust data structures.",
        "page_age": "2024-03-06T16:41:05",
        "age": "January 12, 2024",
        "language": "en",
        "family_friendly": true,
        "profile": {"name": "serde.rs", "long_name": "serde.rs", "url": "https://serde.rs/", "img": "https://imgs/serde.png"},
        "meta_url": {"scheme": "https", "netloc": "serde.rs", "hostname": "serde.rs", "favicon": "https://imgs/fav.png", "path": ""},
        "thumbnail": {"src": "https://imgs/t.png", "original": "https://serde.rs/logo.png", "logo": true},
        "cluster_type": "generic",
        "cluster": [{"title": "Derive", "url": "https://serde.rs/derive.html", "description": "Using derive"}],
        "book": {"title": "Programming Rust", "pages": "624", "price": {"price": "49.99", "price_currency": "USD"}},
        "software": {"name": "serde", "codeRepository": "https://github.com/serde-rs/serde", "datePublisher": "2024-01-01", "is_npm": false},
        "rating": {"ratingValue": 4.5, "bestRating": 5.0, "reviewCount": 120},
        "schemas": [["Thing", {"name": "serde"}]]
      }
    ]
  },
  "news": {
    "type": "news",
    "results": [
      {"title": "Serde 2 announced", "url": "https://news/1", "age": "3 hours ago", "breaking": true, "source": "news"},
      {"title": "Old news", "url": "https://news/2", "age": 1700000000, "page_age": "whenever"}
    ]
  },
  "videos": {
    "type": "videos",
    "mutated_by_goggles": false,
    "results": [
      {
        "type": "video_result",
        "title": "Serde in 10 minutes",
        "url": "https://video/1",
        "age": "March 2, 2023",
        "video": {"duration": "10:04", "views": "12k", "creator": "Rustacean"}
      },
      {
        "type": "video_result",
        "title": "Serde deep dive",
        "url": "https://video/2",
        "video": {"duration": "01:02:03", "views": 987}
      }
    ]
  },
  "infobox": {
    "type": "graph",
    "results": [
      {
        "type": "infobox",
        "title": "Serde",
        "url": "https://serde.rs/",
        "label": "Library",
        "long_desc": "A Rust serialization framework.",
        "attributes": [["License", "MIT OR Apache-2.0"]],
        "profiles": [{"name": "GitHub", "url": "https://github.com/serde-rs", "img": "https://imgs/gh.png"}]
      }
    ]
  },
  "discussions": {
    "type": "search",
    "results": [
      {
        "type": "discussion",
        "title": "Why is serde so fast?",
        "url": "https://forum/1",
        "age": "2 days ago",
        "data": {"forum_name": "r/rust", "num_answers": 42, "score": "0.9", "question": "Why?", "top_comment": "Monomorphization."}
      }
    ]
  },
  "faq": {"type": "faq", "results": []},
  "summarizer": {"type": "summarizer", "key": "{\"query\":\"rust serde\"}"}
}"#;

fn web() -> WebSearchResponse {
    decode_success(WEB_PAYLOAD.as_bytes()).unwrap()
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
}

// ============================================================================
// Web search
// ============================================================================

#[test]
fn web_query_and_mixed() {
    let resp = web();
    assert_eq!(resp.kind, "search");

    let query = resp.query.unwrap();
    assert_eq!(query.original, "rust serde");
    assert!(query.more_results_available);
    assert_eq!(query.language.unwrap().main, "en");

    let mixed = resp.mixed.unwrap();
    assert_eq!(mixed.main.len(), 2);
    assert_eq!(mixed.main[1].kind, "videos");
    assert_eq!(mixed.main[1].index, 0, "missing index defaults to zero");
    assert!(mixed.main[1].all);
}

#[test]
fn web_result_base_fields_are_flattened() {
    let resp = web();
    let web = resp.web.unwrap();
    assert_eq!(web.kind, "search");
    let result = &web.results[0];

    assert_eq!(result.kind, "search_result");
    assert_eq!(result.base.title, "Serde");
    assert_eq!(result.base.url, "https://serde.rs/");
    assert_eq!(result.base.language, "en");
    assert!(result.base.family_friendly);
    assert_eq!(result.base.profile.as_ref().unwrap().image, "https://imgs/serde.png");
    assert_eq!(result.meta_url.hostname, "serde.rs");
    assert!(result.thumbnail.as_ref().unwrap().logo);
}

#[test]
fn web_result_dates_go_through_the_fallback_chain() {
    let resp = web();
    let result = &resp.web.unwrap().results[0];
    assert_eq!(result.base.page_age, utc(2024, 3, 6, 16, 41, 5));
    assert_eq!(result.age, utc(2024, 1, 12, 0, 0, 0));
}

#[test]
fn web_result_structured_data() {
    let resp = web();
    let result = &resp.web.unwrap().results[0];

    let book = result.book.as_ref().unwrap();
    assert_eq!(book.title, "Programming Rust");
    assert_eq!(book.pages.get(), 624);
    assert_eq!(book.price.as_ref().unwrap().price_currency, "USD");

    let software = result.software.as_ref().unwrap();
    assert_eq!(software.code_repository, "https://github.com/serde-rs/serde");
    assert_eq!(software.date_published, "2024-01-01");

    let rating = result.rating.as_ref().unwrap();
    assert_eq!(rating.rating_value, 4.5);
    assert_eq!(rating.review_count, 120);

    assert_eq!(result.cluster.len(), 1);
    assert_eq!(result.cluster[0].title, "Derive");
    assert!(result.schemas.is_array());
}

#[test]
fn news_results_tolerate_odd_dates() {
    let resp = web();
    let news = resp.news.unwrap();
    assert_eq!(news.results.len(), 2);

    let fresh = &news.results[0];
    assert!(fresh.breaking);
    assert!(!fresh.age.is_zero());

    let old = &news.results[1];
    assert_eq!(old.age, Timestamp::from_unix(1_700_000_000));
    assert!(old.base.page_age.is_zero());
    assert_eq!(old.base.title, "Old news");
}

#[test]
fn videos_section_decodes_duration_and_views() {
    let resp = web();
    let videos = resp.videos.unwrap();

    let first = videos.results[0].data.as_ref().unwrap();
    assert_eq!(first.duration, Duration::from_hms(0, 10, 4));
    assert_eq!(first.views, ViewCount::new(12_000));
    assert_eq!(first.creator, "Rustacean");
    assert_eq!(videos.results[0].age, utc(2023, 3, 2, 0, 0, 0));

    let second = videos.results[1].data.as_ref().unwrap();
    assert_eq!(second.duration, Duration::from_hms(1, 2, 3));
    assert_eq!(second.views.get(), 987);
    assert!(videos.results[1].age.is_zero());
}

#[test]
fn infobox_discussions_and_summarizer() {
    let resp = web();

    let infobox = &resp.infobox.unwrap().results[0];
    assert_eq!(infobox.kind, "infobox");
    assert_eq!(infobox.base.title, "Serde");
    assert_eq!(infobox.label, "Library");
    assert_eq!(infobox.profiles[0].name, "GitHub");
    assert_eq!(infobox.attributes.len(), 1);

    let discussion = &resp.discussions.unwrap().results[0];
    assert_eq!(discussion.result.kind, "discussion");
    assert_eq!(discussion.result.base.title, "Why is serde so fast?");
    assert!(!discussion.result.age.is_zero());
    assert_eq!(discussion.data.forum_name, "r/rust");
    assert_eq!(discussion.data.num_answers, 42);

    assert_eq!(resp.summarizer.unwrap().key, r#"{"query":"rust serde"}"#);
    assert_eq!(resp.faq["type"], "faq");
    assert!(resp.locations.is_null());
}

#[test]
fn missing_sections_are_absent() {
    let resp: WebSearchResponse = decode_success(br#"{"type":"search"}"#).unwrap();
    assert!(resp.web.is_none());
    assert!(resp.news.is_none());
    assert!(resp.videos.is_none());
    assert!(resp.summarizer.is_none());
}

#[test]
fn null_plain_fields_decode_as_zero_values() {
    let body = br#"{
        "type": null,
        "query": {"original": "rust", "is_navigational": null, "local_locations_idx": null},
        "web": {
            "type": "search",
            "results": [{
                "title": "t",
                "url": "u",
                "description": null,
                "family_friendly": null,
                "meta_url": null,
                "thumbnail": {"src": "https://imgs/t.png", "height": null, "width": 64},
                "cluster": null,
                "rating": {"ratingValue": null, "reviewCount": 3}
            }]
        },
        "discussions": {"results": [{"title": "d", "data": null}]}
    }"#;
    let resp: WebSearchResponse = decode_success(body).unwrap();
    assert_eq!(resp.kind, "");

    let query = resp.query.unwrap();
    assert_eq!(query.original, "rust");
    assert!(!query.is_navigational);
    assert_eq!(query.local_locations_idx, 0);

    let web = resp.web.unwrap();
    let result = &web.results[0];
    assert_eq!(result.base.title, "t");
    assert_eq!(result.base.description, "");
    assert!(!result.base.family_friendly);
    assert_eq!(result.meta_url, MetaUrl::default());
    assert!(result.cluster.is_empty());

    let thumbnail = result.thumbnail.as_ref().unwrap();
    assert_eq!(thumbnail.height, 0);
    assert_eq!(thumbnail.width, 64);

    let rating = result.rating.as_ref().unwrap();
    assert_eq!(rating.rating_value, 0.0);
    assert_eq!(rating.review_count, 3);

    let discussion = &resp.discussions.unwrap().results[0];
    assert_eq!(discussion.result.base.title, "d");
    assert_eq!(discussion.data, ForumData::default());
}

#[test]
fn null_results_list_is_empty() {
    let resp: VideoSearchResponse = decode_success(br#"{"type":"videos","results":null}"#).unwrap();
    assert!(resp.results.is_empty());
}

#[test]
fn recipe_result() {
    let body = br#"{
        "type": "search",
        "web": {
            "type": "search",
            "results": [{
                "type": "search_result",
                "subtype": "recipe",
                "title": "Chicken Alfredo Recipe",
                "url": "https://recipes/alfredo",
                "recipe": {
                    "title": "Chicken Alfredo",
                    "description": "desc",
                    "domain": "recipes",
                    "time": "40:00",
                    "rating": {"ratingValue": 4.5, "bestRating": 5.0}
                }
            }]
        }
    }"#;
    let resp: WebSearchResponse = decode_success(body).unwrap();
    let web = resp.web.unwrap();
    assert_eq!(web.results.len(), 1);

    let result = &web.results[0];
    assert_eq!(result.subtype, "recipe");
    let recipe = result.recipe.as_ref().unwrap();
    assert_eq!(recipe.title, "Chicken Alfredo");
    assert_eq!(recipe.description, "desc");
    assert_eq!(recipe.time, Duration::from_hms(0, 40, 0));
    assert_eq!(recipe.time.as_std(), std::time::Duration::from_secs(40 * 60));
}

#[test]
fn malformed_recipe_time_fails_the_decode() {
    let body = br#"{"web":{"results":[{"subtype":"recipe","recipe":{"time":"forty minutes"}}]}}"#;
    assert!(decode_success::<WebSearchResponse>(body).is_err());
}

#[test]
fn unknown_fields_are_ignored() {
    let resp: WebSearchResponse =
        decode_success(br#"{"type":"search","brand_new_section":{"x":1}}"#).unwrap();
    assert_eq!(resp.kind, "search");
}

#[test]
fn absolute_payloads_decode_identically_twice() {
    let body = br#"{"type":"videos","results":[{"title":"t","page_age":"2024-03-06T16:41:05Z","video":{"duration":"02:04","views":"3M"}}]}"#;
    let a: VideoSearchResponse = decode_success(body).unwrap();
    let b: VideoSearchResponse = decode_success(body).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Other endpoints
// ============================================================================

#[test]
fn video_search_round_trips_through_serialisation() {
    let body = br#"{"type":"videos","results":[{"title":"t","url":"https://v","page_age":"2024-03-06T16:41:05Z","video":{"duration":"1:02:03","views":"3M"}}]}"#;
    let original: VideoSearchResponse = decode_success(body).unwrap();
    let encoded = serde_json::to_vec(&original).unwrap();
    let decoded: VideoSearchResponse = decode_success(&encoded).unwrap();
    assert_eq!(original, decoded);
}

#[test]
fn image_search() {
    let body = br#"{
        "type": "images",
        "results": [{
            "type": "image_result",
            "title": "Ferris",
            "url": "https://rustacean.net",
            "source": "rustacean.net",
            "page_fetched": "2024-03-06T16:41:05Z",
            "thumbnail": {"src": "https://imgs/ferris.png", "width": 500, "height": 333},
            "properties": {"url": "https://rustacean.net/ferris.png", "placeholder": "data:"}
        }]
    }"#;
    let resp: ImageSearchResponse = decode_response(body, 200, Some("q=ferris")).unwrap();
    let image = &resp.results[0];
    assert_eq!(image.source, "rustacean.net");
    assert_eq!(image.page_fetched, utc(2024, 3, 6, 16, 41, 5));
    assert_eq!(image.thumbnail.as_ref().unwrap().width, 500);
    assert_eq!(image.properties.as_ref().unwrap().url, "https://rustacean.net/ferris.png");
}

#[test]
fn suggest_results() {
    let body = br#"{
        "type": "suggest",
        "query": {"original": "rus"},
        "results": [
            {"string": "rust"},
            {"string": "rust lang", "is_entity": true, "title": "Rust", "description": "Programming language", "img": "https://imgs/rust.png"}
        ]
    }"#;
    let resp: SuggestSearchResponse = decode_success(body).unwrap();
    assert_eq!(resp.results.len(), 2);
    assert_eq!(resp.results[0].query, "rust");
    assert!(!resp.results[0].is_entity);
    assert!(resp.results[1].is_entity);
    assert_eq!(resp.results[1].image, "https://imgs/rust.png");
}

#[test]
fn spellcheck_results() {
    let body = br#"{"type":"spellcheck","query":{"original":"serd"},"results":[{"query":"serde"}]}"#;
    let resp: SpellcheckResponse = decode_success(body).unwrap();
    assert_eq!(resp.kind, "spellcheck");
    assert_eq!(resp.results[0].query, "serde");
}

#[test]
fn summarizer_with_quoted_offsets() {
    let body = br#"{
        "type": "summarizer",
        "status": "complete",
        "title": "Serde",
        "summary": [{"type": "token", "data": "Serde is a framework"}],
        "enrichments": {
            "raw": "Serde is a framework",
            "qa": [{"answer": "A framework", "score": 0.9, "highlight": {"start": "0", "end": 11}}],
            "entities": [{"name": "Serde", "highlight": [{"start": 0, "end": "five"}]}],
            "context": [{"title": "serde.rs", "url": "https://serde.rs/", "meta_url": {"hostname": "serde.rs"}}]
        },
        "followups": ["What is bincode?"],
        "entities_info": {"Serde": {"kind": "library"}}
    }"#;
    let resp: SummarizerResponse = decode_success(body).unwrap();
    assert_eq!(resp.status, "complete");
    assert_eq!(resp.summary[0].data, "Serde is a framework");

    let enrichments = resp.enrichments.unwrap();
    let highlight = enrichments.qa[0].highlight.as_ref().unwrap();
    assert_eq!((highlight.start.get(), highlight.end.get()), (0, 11));
    assert_eq!(enrichments.entities[0].highlight[0].end.get(), 0);
    assert_eq!(enrichments.context[0].meta_url.as_ref().unwrap().hostname, "serde.rs");
    assert_eq!(resp.followups, vec!["What is bincode?"]);
    assert!(resp.entities_info.contains_key("Serde"));
}
