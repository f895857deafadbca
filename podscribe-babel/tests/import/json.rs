//! JSON snapshots produce the same transcript as the tree they were taken from

use podscribe::transcript::testing::sample_episode;
use podscribe::extract;
use podscribe_babel::{import, InputFormat};

#[test]
fn test_snapshot_roundtrip_extracts_identically() {
    let page = sample_episode();
    let snapshot = serde_json::to_string(&page).unwrap();

    let imported = import(&snapshot, InputFormat::Json).unwrap();
    assert_eq!(imported, page);
    assert_eq!(
        extract(&imported, "Courtland Allen"),
        extract(&page, "Courtland Allen")
    );
}

#[test]
fn test_hand_written_snapshot() {
    let snapshot = r#"{"element": {"tag": "div", "attributes": {"class": "episode-transcript"}, "children": [
        {"element": {"tag": "div", "attributes": {"class": "episode-transcript__speaking-turn"}, "children": [
            {"element": {"tag": "div", "attributes": {"class": "episode-transcript__speaker-name"}, "children": [{"text": "Lynne Tye"}]}},
            {"element": {"tag": "p", "attributes": {"class": "episode-transcript__paragraph"}, "children": [
                {"text": "See "},
                {"element": {"tag": "a", "attributes": {"href": "https://keyvalues.com"}, "children": [{"text": "Key Values"}]}}
            ]}}
        ]}}
    ]}}"#;

    let page = import(snapshot, InputFormat::Json).unwrap();
    let payload = extract(&page, "Courtland Allen");
    assert_eq!(
        payload.text,
        "Courtland Allen = Host of IndieHackers Podcast\nLynne Tye = Guest\n\nLynne Tye\n\nSee Key Values (https://keyvalues.com)"
    );
}
