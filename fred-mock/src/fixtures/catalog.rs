use serde_json::{Value, json};

pub fn root_categories() -> Value {
    json!({ "categories": [ { "id": 0, "name": "Categories", "parent_id": 0 } ] })
}

pub fn category_children(parent_id: i64) -> Value {
    let children = match parent_id {
        0 => json!([
            { "id": 32991, "name": "Money, Banking, & Finance", "parent_id": 0 },
            { "id": 10, "name": "Population, Employment, & Labor Markets", "parent_id": 0 },
            { "id": 32992, "name": "National Accounts", "parent_id": 0 },
            { "id": 32455, "name": "Prices", "parent_id": 0 }
        ]),
        10 => json!([
            { "id": 12, "name": "Current Population Survey (Household Survey Data)", "parent_id": 10 },
            { "id": 11, "name": "Current Employment Statistics (Establishment Survey)", "parent_id": 10 }
        ]),
        32992 => json!([
            { "id": 106, "name": "GDP/GNP", "parent_id": 32992 }
        ]),
        _ => json!([]),
    };
    json!({ "categories": children })
}

pub fn category_series_ids(category_id: i64) -> &'static [&'static str] {
    match category_id {
        12 => &["UNRATE"],
        106 => &["GDP"],
        9 | 32455 => &["CPIAUCSL"],
        115 | 32991 => &["DGS10"],
        _ => &[],
    }
}

pub fn categories_of(series_id: &str) -> Value {
    let cats = match series_id.to_ascii_uppercase().as_str() {
        "GDP" => json!([{ "id": 106, "name": "GDP/GNP", "parent_id": 32992 }]),
        "UNRATE" => json!([
            { "id": 12, "name": "Current Population Survey (Household Survey Data)", "parent_id": 10 }
        ]),
        "CPIAUCSL" => json!([{ "id": 9, "name": "Consumer Price Indexes (CPI and PCE)", "parent_id": 32455 }]),
        "DGS10" => json!([{ "id": 115, "name": "Treasury Constant Maturity", "parent_id": 22 }]),
        _ => json!([]),
    };
    json!({ "categories": cats })
}

pub fn related_tags(series_id: &str) -> Value {
    let tags: &[(&str, &str, i64)] = match series_id.to_ascii_uppercase().as_str() {
        "GDP" => &[
            ("gdp", "gen", 81),
            ("usa", "geo", 100),
            ("nation", "geot", 100),
            ("quarterly", "freq", 88),
            ("sa", "seas", 90),
            ("bea", "src", 87),
        ],
        "UNRATE" => &[
            ("unemployment", "gen", 86),
            ("rate", "gen", 80),
            ("usa", "geo", 100),
        ],
        _ => &[],
    };
    let list: Vec<Value> = tags
        .iter()
        .map(|(name, group, pop)| json!({ "name": name, "group_id": group, "popularity": pop, "series_count": 100 }))
        .collect();
    json!({ "count": list.len(), "tags": list })
}

pub fn releases() -> Value {
    const RELEASES: &[(i64, &str, bool)] = &[
        (9, "Advance Monthly Sales for Retail and Food Services", true),
        (10, "Consumer Price Index", true),
        (11, "Employment Cost Index", true),
        (13, "G.17 Industrial Production and Capacity Utilization", true),
        (14, "G.19 Consumer Credit", true),
        (15, "G.5 Foreign Exchange Rates", true),
        (17, "H.10 Foreign Exchange Rates", true),
        (18, "H.15 Selected Interest Rates", true),
        (46, "Producer Price Index", true),
        (50, "Employment Situation", true),
        (53, "Gross Domestic Product", true),
        (54, "Personal Income and Outlays", true),
    ];
    let list: Vec<Value> = RELEASES
        .iter()
        .map(|(id, name, press)| {
            json!({
                "id": id,
                "realtime_start": "2024-01-01",
                "realtime_end": "2024-01-01",
                "name": name,
                "press_release": press,
            })
        })
        .collect();
    json!({ "count": list.len(), "releases": list })
}
