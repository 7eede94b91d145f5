use check_graphite::core::graphite::render_url;
use check_graphite::core::{parse_render_response, GraphiteQuery};
use check_graphite::ProbeError;
use std::time::Duration;

#[test]
fn test_parse_and_average() {
    let body = r#"[
        {"target": "test", "datapoints": [[3.5805225, 1526986610], [3.5805225, 1526986611]]},
        {"target": "test2", "datapoints": [[3, 1526986610], [6, 1526986611], [3, 1526986612]]}
    ]"#;
    let data = parse_render_response(body).unwrap();

    assert_eq!(data["test"].average(), 3.5805225);
    assert_eq!(data["test2"].average(), 4.0);
}

#[test]
fn test_duplicate_target_keeps_last() {
    let body = r#"[
        {"target": "dup", "datapoints": [[1, 1]]},
        {"target": "dup", "datapoints": [[5, 1]]}
    ]"#;
    let data = parse_render_response(body).unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data["dup"].average(), 5.0);
}

#[test]
fn test_missing_field_is_decode_error() {
    let result = parse_render_response(r#"[{"target": "x"}]"#);
    assert!(matches!(result, Err(ProbeError::Decode(_))));
}

#[test]
fn test_query_defaults() {
    let query = GraphiteQuery::new("http://localhost:8080", vec!["a".to_string()]);

    assert_eq!(query.from, "-2min");
    assert_eq!(query.until, "now");
    assert_eq!(query.timeout, Duration::from_secs(10));
}

#[test]
fn test_query_url_encodes_targets() {
    let query = GraphiteQuery::new(
        "http://localhost:8080",
        vec!["sumSeries(collectd.*.load)".to_string()],
    );
    let url = query.url().unwrap();

    assert!(url
        .as_str()
        .starts_with("http://localhost:8080/render?format=json&target=sumSeries%28collectd.*.load%29"));
}

#[test]
fn test_render_url_with_multiple_targets() {
    let targets = vec!["a".to_string(), "b".to_string()];
    let url = render_url("http://localhost", &targets, "-5min", "now").unwrap();

    assert_eq!(url.query(), Some("format=json&target=a&target=b&from=-5min&until=now"));
}
