use pretty_assertions::assert_eq;
use stacktable_engine::{decode_search_page, QuestionItem, SearchPage};

#[test]
fn numbers_and_strings_both_decode_as_counts() {
    let payload = r#"{
        "items": [
            {"title": "Borrowing", "view_count": 1234, "score": -2, "link": "https://stackoverflow.com/q/1"},
            {"title": "Lifetimes", "view_count": "99", "score": "7", "link": "https://stackoverflow.com/q/2"}
        ],
        "quota_max": 300
    }"#;

    let page = decode_search_page(payload.as_bytes()).expect("decode");
    assert_eq!(
        page,
        SearchPage {
            items: vec![
                QuestionItem {
                    title: "Borrowing".to_string(),
                    view_count: "1234".to_string(),
                    score: "-2".to_string(),
                    link: "https://stackoverflow.com/q/1".to_string(),
                },
                QuestionItem {
                    title: "Lifetimes".to_string(),
                    view_count: "99".to_string(),
                    score: "7".to_string(),
                    link: "https://stackoverflow.com/q/2".to_string(),
                },
            ],
            quota_max: 300,
        }
    );
}

#[test]
fn unknown_fields_and_missing_item_fields_are_tolerated() {
    // The live endpoint sends far more per question than the table shows.
    let payload = r#"{
        "items": [{"title": "Only a title", "tags": ["rust"], "owner": {"display_name": "x"}}],
        "has_more": true,
        "quota_remaining": 123,
        "quota_max": 300
    }"#;

    let page = decode_search_page(payload.as_bytes()).expect("decode");
    assert_eq!(page.items[0].title, "Only a title");
    assert_eq!(page.items[0].view_count, "");
    assert_eq!(page.items[0].score, "");
    assert_eq!(page.items[0].link, "");
    assert_eq!(page.quota_max, 300);
}

#[test]
fn empty_page_decodes() {
    let page = decode_search_page(br#"{"items": [], "quota_max": 0}"#).expect("decode");
    assert!(page.items.is_empty());
    assert_eq!(page.quota_max, 0);
}

#[test]
fn missing_quota_max_is_malformed() {
    assert!(decode_search_page(br#"{"items": []}"#).is_err());
}

#[test]
fn missing_items_is_malformed() {
    assert!(decode_search_page(br#"{"quota_max": 300}"#).is_err());
}

#[test]
fn non_json_is_malformed() {
    assert!(decode_search_page(b"<html>too many requests</html>").is_err());
}
