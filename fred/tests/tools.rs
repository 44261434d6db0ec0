mod helpers;

use fred::Endpoint;
use fred_mock::MockBehavior;
use helpers::fred_with_mock;
use serde_json::{Value, json};

fn approx(v: &Value, expected: f64) -> bool {
    v.as_f64().is_some_and(|x| (x - expected).abs() < 1e-9)
}

#[tokio::test]
async fn search_tool_returns_summaries() {
    let (fred, _) = fred_with_mock();
    let out = fred
        .call_tool("search_fred_series", &json!({"query": "unemployment"}))
        .await;
    assert_eq!(out["search_query"], "unemployment");
    assert_eq!(out["count"], 1);
    let first = &out["series"][0];
    assert_eq!(first["id"], "UNRATE");
    assert_eq!(first["title"], "Unemployment Rate");
    assert_eq!(first["frequency"], "Monthly");
    assert!(first.get("popularity").is_none());
}

#[tokio::test]
async fn search_tool_accepts_string_limit() {
    let (fred, mock) = fred_with_mock();
    let out = fred
        .call_tool("search_fred_series", &json!({"query": "usa", "limit": "2"}))
        .await;
    assert_eq!(out["count"], 2);
    let calls = mock.calls_to(Endpoint::SeriesSearch).await;
    assert_eq!(calls[0].params.get("limit"), Some("2"));
}

#[tokio::test]
async fn series_data_tool_includes_metadata() {
    let (fred, _) = fred_with_mock();
    let out = fred
        .call_tool(
            "fred_get_series_data",
            &json!({"series_id": "GDP", "observation_start": "2023-01-01"}),
        )
        .await;
    assert_eq!(out["series_id"], "GDP");
    assert_eq!(out["count"], 4);
    assert_eq!(out["observations"][0]["date"], "2023-01-01");
    assert_eq!(out["series_info"]["id"], "GDP");
}

#[tokio::test]
async fn metadata_tool_for_unknown_series_is_empty_object() {
    let (fred, _) = fred_with_mock();
    let out = fred
        .call_tool("fred_get_series_metadata", &json!({"series_id": "NOPE"}))
        .await;
    assert_eq!(out, json!({}));
}

#[tokio::test]
async fn category_series_tool() {
    let (fred, _) = fred_with_mock();
    let out = fred
        .call_tool("fred_get_category_series", &json!({"category_id": 106}))
        .await;
    assert_eq!(out["category_id"], 106);
    assert_eq!(out["count"], 1);
    assert_eq!(out["series"][0]["id"], "GDP");
}

#[tokio::test]
async fn releases_tool_truncates_to_limit() {
    let (fred, _) = fred_with_mock();
    let out = fred.call_tool("fred_get_releases", &json!({})).await;
    assert_eq!(out["count"], 10);
    assert_eq!(out["releases"].as_array().map(Vec::len), Some(10));

    let out = fred
        .call_tool("fred_get_releases", &json!({"limit": 3}))
        .await;
    assert_eq!(out["count"], 3);
    assert_eq!(out["releases"][2]["name"], "Employment Cost Index");
}

#[tokio::test]
async fn statistics_skip_missing_values() {
    let (fred, _) = fred_with_mock();
    let out = fred
        .call_tool("fred_calculate_statistics", &json!({"series_id": "UNRATE"}))
        .await;
    assert_eq!(out["series_id"], "UNRATE");
    assert_eq!(out["title"], "Unemployment Rate");
    assert_eq!(out["count"], 7);
    assert!(approx(&out["min"], 3.4));
    assert!(approx(&out["max"], 3.8));
    assert!(approx(&out["median"], 3.6));
    assert!(approx(&out["mean"], 25.0 / 7.0));
    assert!(out["std_dev"].is_number());
}

#[tokio::test]
async fn statistics_without_numeric_values_report_series() {
    let (fred, _) = fred_with_mock();
    let out = fred
        .call_tool("fred_calculate_statistics", &json!({"series_id": "DGS10"}))
        .await;
    assert_eq!(
        out,
        json!({
            "series_id": "DGS10",
            "title": "Market Yield on U.S. Treasury Securities at 10-Year Constant Maturity",
            "error": "No numeric values found",
        })
    );
}

#[tokio::test]
async fn trends_on_rising_series() {
    let (fred, _) = fred_with_mock();
    let out = fred
        .call_tool("fred_detect_trends", &json!({"series_id": "GDP"}))
        .await;
    assert_eq!(out["window_size"], 3);
    assert_eq!(out["overall_trend"], "upward");
    let details = out["trend_details"].as_array().unwrap();
    assert_eq!(details.len(), 5);
    assert_eq!(details[0]["date"], "2022-10-01");
    assert!(details.iter().all(|d| d["trend"] == "up"));
}

#[tokio::test]
async fn trends_need_two_windows() {
    let (fred, _) = fred_with_mock();
    let out = fred
        .call_tool("fred_detect_trends", &json!({"series_id": "GDP", "window_size": 5}))
        .await;
    assert_eq!(
        out["error"],
        "Not enough data points for trend detection (need at least 10)"
    );
    assert_eq!(out["series_id"], "GDP");

    let out = fred
        .call_tool("fred_detect_trends", &json!({"series_id": "NOTITLE"}))
        .await;
    assert_eq!(out["title"], "NOTITLE");
    assert!(out["error"].as_str().unwrap().contains("need at least 6"));
}

#[tokio::test]
async fn trends_reject_zero_window_before_fetching() {
    let (fred, mock) = fred_with_mock();
    let out = fred
        .call_tool("fred_detect_trends", &json!({"series_id": "GDP", "window_size": 0}))
        .await;
    assert_eq!(out["error"], "invalid argument: window_size must be at least 1");
    assert!(mock.calls().await.is_empty());
}

#[tokio::test]
async fn compare_uses_title_fallback() {
    let (fred, _) = fred_with_mock();
    let out = fred
        .call_tool(
            "fred_compare_series",
            &json!({"series_ids": ["GDP", "NOTITLE"], "observation_end": "2022-12-31"}),
        )
        .await;
    let series = &out["series"];
    assert_eq!(series["GDP"]["title"], "Gross Domestic Product");
    assert_eq!(series["GDP"]["observations"].as_array().map(Vec::len), Some(4));
    assert_eq!(series["NOTITLE"]["title"], "NOTITLE");
}

#[tokio::test]
async fn compare_aborts_on_first_failure() {
    let (fred, mock) = fred_with_mock();
    let out = fred
        .call_tool(
            "fred_compare_series",
            &json!({"series_ids": ["GDP", "FAIL", "UNRATE"]}),
        )
        .await;
    let message = out["error"].as_str().unwrap();
    assert!(message.starts_with("API error (500)"), "{message}");
    assert!(out.get("series").is_none());

    let fetched: Vec<String> = mock
        .calls_to(Endpoint::SeriesObservations)
        .await
        .iter()
        .filter_map(|c| c.params.get("series_id").map(str::to_string))
        .collect();
    assert_eq!(fetched, ["GDP", "FAIL"]);
}

#[tokio::test]
async fn argument_errors_become_payloads() {
    let (fred, mock) = fred_with_mock();
    let out = fred.call_tool("fred_get_series_data", &json!({})).await;
    assert_eq!(out, json!({"error": "missing required argument: series_id"}));

    let out = fred
        .call_tool("fred_compare_series", &json!({"series_ids": []}))
        .await;
    assert_eq!(out, json!({"error": "missing required argument: series_ids"}));

    let out = fred
        .call_tool(
            "fred_get_series_data",
            &json!({"series_id": "GDP", "observation_start": "2023-13-01"}),
        )
        .await;
    assert!(out["error"].as_str().unwrap().contains("YYYY-MM-DD"));

    assert!(mock.calls().await.is_empty());
}

#[tokio::test]
async fn unknown_tool_is_reported() {
    let (fred, _) = fred_with_mock();
    let out = fred.call_tool("x", &json!({})).await;
    assert_eq!(out, json!({"error": "Unknown tool 'x'"}));
}

#[tokio::test]
async fn statistics_skip_null_and_accept_numeric_values() {
    let (fred, mock) = fred_with_mock();
    mock.set_behavior(
        Endpoint::SeriesObservations,
        MockBehavior::Return(json!({"observations": [
            {"date": "2023-01-01", "value": "1"},
            {"date": "2023-02-01", "value": null},
            {"date": "2023-03-01", "value": 3},
        ]})),
    )
    .await;
    let out = fred
        .call_tool("fred_calculate_statistics", &json!({"series_id": "UNRATE"}))
        .await;
    assert!(out.get("error").is_none(), "{out}");
    assert_eq!(out["count"], 2);
    assert!(approx(&out["min"], 1.0));
    assert!(approx(&out["max"], 3.0));
    assert!(approx(&out["mean"], 2.0));
}
