use serde_json::{Value, json};

const GDP: &[(&str, &str)] = &[
    ("2022-01-01", "24740.480"),
    ("2022-04-01", "25248.476"),
    ("2022-07-01", "25723.941"),
    ("2022-10-01", "26137.992"),
    ("2023-01-01", "26486.287"),
    ("2023-04-01", "26835.399"),
    ("2023-07-01", "27623.543"),
    ("2023-10-01", "27956.998"),
];

const UNRATE: &[(&str, &str)] = &[
    ("2023-01-01", "3.4"),
    ("2023-02-01", "3.6"),
    ("2023-03-01", "."),
    ("2023-04-01", "3.4"),
    ("2023-05-01", "3.7"),
    ("2023-06-01", "3.6"),
    ("2023-07-01", "3.5"),
    ("2023-08-01", "3.8"),
];

const CPIAUCSL: &[(&str, &str)] = &[
    ("2023-01-01", "300.536"),
    ("2023-02-01", "301.648"),
    ("2023-03-01", "301.808"),
    ("2023-04-01", "302.918"),
    ("2023-05-01", "303.294"),
    ("2023-06-01", "303.841"),
];

const DGS10: &[(&str, &str)] = &[
    ("2023-12-25", "."),
    ("2023-12-26", "."),
    ("2023-12-27", "."),
];

const NOTITLE: &[(&str, &str)] = &[
    ("2020-01-01", "1"),
    ("2021-01-01", "2"),
    ("2022-01-01", "3"),
];

fn rows(id: &str) -> &'static [(&'static str, &'static str)] {
    match id.to_ascii_uppercase().as_str() {
        "GDP" => GDP,
        "UNRATE" => UNRATE,
        "CPIAUCSL" => CPIAUCSL,
        "DGS10" => DGS10,
        "NOTITLE" => NOTITLE,
        _ => &[],
    }
}

/// Observations for `id` within the optional bounds.
///
/// With a `vintage` date only observations dated on or before it are returned and the
/// realtime bounds are pinned to that date.
pub fn observations(id: &str, start: Option<&str>, end: Option<&str>, vintage: Option<&str>) -> Value {
    let realtime = vintage.unwrap_or("2024-01-01");
    let list: Vec<Value> = rows(id)
        .iter()
        .filter(|(date, _)| start.is_none_or(|s| *date >= s))
        .filter(|(date, _)| end.is_none_or(|e| *date <= e))
        .filter(|(date, _)| vintage.is_none_or(|v| *date <= v))
        .map(|(date, value)| {
            json!({
                "realtime_start": realtime,
                "realtime_end": realtime,
                "date": date,
                "value": value,
            })
        })
        .collect();
    json!({
        "realtime_start": realtime,
        "realtime_end": realtime,
        "count": list.len(),
        "observations": list,
    })
}
