use excelhub::application::services::{extract_chart_keyword, resolve_chart};
use excelhub::domain::ChartKind;

#[test]
fn given_pie_placeholder_when_resolving_then_returns_pie_chart() {
    let keyword = extract_chart_keyword("Here is the split: [CHART:pie]").unwrap();
    let chart = resolve_chart(keyword);

    assert_eq!(chart.kind, ChartKind::Pie);
    assert_eq!(chart.options.title(), "Product Distribution");
    assert_eq!(chart.data.labels.len(), 4);
}

#[test]
fn given_mixed_case_keyword_when_resolving_then_matches_case_insensitively() {
    assert_eq!(resolve_chart("LINE").kind, ChartKind::Line);
    assert_eq!(resolve_chart("Bar").options.title(), "Sample Sales Data");
}

#[test]
fn given_unknown_keyword_when_resolving_then_returns_quarterly_default() {
    let chart = resolve_chart("unknown");

    assert_eq!(chart.kind, ChartKind::Bar);
    assert_eq!(chart.options.title(), "Quarterly Performance");
    assert_eq!(chart.data.labels, vec!["Q1", "Q2", "Q3", "Q4"]);
}

#[test]
fn given_empty_keyword_when_resolving_then_returns_default() {
    let keyword = extract_chart_keyword("[CHART:]").unwrap();

    assert_eq!(keyword, "");
    assert_eq!(resolve_chart(keyword).options.title(), "Quarterly Performance");
}

#[test]
fn given_text_without_placeholder_when_extracting_then_returns_none() {
    assert_eq!(extract_chart_keyword("no chart here"), None);
    assert_eq!(extract_chart_keyword("[CHART:bar"), None);
}

#[test]
fn given_two_placeholders_when_extracting_then_uses_first() {
    assert_eq!(extract_chart_keyword("[CHART:line] and [CHART:pie]"), Some("line"));
}

#[test]
fn given_chart_spec_when_serializing_then_uses_chart_js_field_names() {
    let json = serde_json::to_value(resolve_chart("line")).unwrap();

    assert_eq!(json["type"], "line");
    assert_eq!(json["options"]["maintainAspectRatio"], false);
    assert_eq!(json["options"]["plugins"]["title"]["text"], "Monthly Revenue Trend");
    assert_eq!(json["data"]["datasets"][0]["borderColor"], "rgba(102, 126, 234, 1)");
    assert_eq!(json["data"]["datasets"][0]["fill"], true);
}

#[test]
fn given_same_keyword_when_resolving_twice_then_returns_same_static_spec() {
    assert!(std::ptr::eq(resolve_chart("pie"), resolve_chart("PIE")));
}
