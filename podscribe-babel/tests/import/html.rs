//! HTML import over a saved episode page

use super::fixture;
use podscribe::{extract, load, LoadOptions};
use podscribe_babel::import::html::parse_html;
use podscribe_babel::FormatRegistry;

const HOST: &str = "Courtland Allen";
const EPISODE_URL: &str = "https://www.indiehackers.com/podcast/086-lynne-tye-of-key-values";

#[test]
fn test_episode_markdown() {
    let page = parse_html(&fixture("episode-086.html"));
    let payload = extract(&page, HOST);

    assert_eq!(payload.error, None);
    assert_eq!(payload.guest_name, "Lynne Tye");
    insta::assert_snapshot!(payload.markdown, @r###"
Courtland Allen = Host of IndieHackers Podcast
Lynne Tye = Guest

Courtland Allen 00:00:05

What's up everybody, this is Courtland from [Indie Hackers](https://www.indiehackers.com).

Today I'm talking to Lynne Tye.

Lynne Tye 00:01:23

Thanks for having me. I run [Key Values](https://keyvalues.com).

![](https://cdn.indiehackers.com/images/key-values.png)

It started as a side project.

Then it grew.

Courtland Allen 00:02:40

Tell me about the early days.
"###);
}

#[test]
fn test_episode_loaded_text() {
    let page = parse_html(&fixture("episode-086.html"));
    let loaded = load(&page, Some(EPISODE_URL), &LoadOptions::new(HOST)).unwrap();

    insta::assert_snapshot!(loaded.text, @r###"
Courtland Allen = Host of IndieHackers Podcast
Lynne Tye = Guest

Courtland Allen 00:00:05

What's up everybody, this is Courtland from Indie Hackers (https://www.indiehackers.com).

Today I'm talking to Lynne Tye.

Lynne Tye 00:01:23

Thanks for having me. I run Key Values (https://keyvalues.com).

It started as a side project.

Then it grew.

Courtland Allen 00:02:40

Tell me about the early days.
"###);
    assert_eq!(loaded.status(), "Loaded guest: Lynne Tye");
}

#[test]
fn test_skipped_turn_leaves_no_trace() {
    let page = parse_html(&fixture("episode-086.html"));
    let payload = extract(&page, HOST);
    assert!(!payload.markdown.contains("[music]"));
    assert!(!payload.text.contains("[music]"));
}

#[test]
fn test_registry_output_matches_loaded_documents() {
    let page = parse_html(&fixture("episode-086.html"));
    let loaded = load(&page, None, &LoadOptions::new(HOST)).unwrap();
    let registry = FormatRegistry::with_defaults();

    assert_eq!(registry.serialize(&loaded, "markdown").unwrap(), loaded.markdown);
    assert_eq!(registry.serialize(&loaded, "text").unwrap(), loaded.text);
    assert!(!loaded.markdown.contains("![]("));
}

#[test]
fn test_page_without_transcript() {
    let page = parse_html("<html><body><main class=\"episode\"></main></body></html>");
    let payload = extract(&page, HOST);
    assert_eq!(
        payload.error.as_deref(),
        Some("Transcript not found on this page.")
    );
}

#[test]
fn test_page_with_empty_transcript() {
    let page = parse_html("<div class=\"episode-transcript\">\n  <!-- loading -->\n</div>");
    let payload = extract(&page, HOST);
    assert_eq!(payload.error.as_deref(), Some("Transcript is empty."));
}
