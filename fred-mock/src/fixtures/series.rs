use serde_json::{Value, json};

pub struct SeriesFixture {
    pub id: &'static str,
    pub title: Option<&'static str>,
    pub frequency: &'static str,
    pub units: &'static str,
    pub seasonal_adjustment: &'static str,
    pub seasonal_adjustment_short: &'static str,
    pub observation_start: &'static str,
    pub observation_end: &'static str,
    pub popularity: i64,
    pub tags: &'static [&'static str],
}

pub const SERIES: &[SeriesFixture] = &[
    SeriesFixture {
        id: "GDP",
        title: Some("Gross Domestic Product"),
        frequency: "Quarterly",
        units: "Billions of Dollars",
        seasonal_adjustment: "Seasonally Adjusted Annual Rate",
        seasonal_adjustment_short: "SAAR",
        observation_start: "1947-01-01",
        observation_end: "2023-10-01",
        popularity: 93,
        tags: &["gdp", "usa", "nation", "quarterly", "sa", "bea"],
    },
    SeriesFixture {
        id: "UNRATE",
        title: Some("Unemployment Rate"),
        frequency: "Monthly",
        units: "Percent",
        seasonal_adjustment: "Seasonally Adjusted",
        seasonal_adjustment_short: "SA",
        observation_start: "1948-01-01",
        observation_end: "2023-08-01",
        popularity: 94,
        tags: &["unemployment", "rate", "usa", "nation", "monthly", "sa", "bls"],
    },
    SeriesFixture {
        id: "CPIAUCSL",
        title: Some("Consumer Price Index for All Urban Consumers: All Items in U.S. City Average"),
        frequency: "Monthly",
        units: "Index 1982-1984=100",
        seasonal_adjustment: "Seasonally Adjusted",
        seasonal_adjustment_short: "SA",
        observation_start: "1947-01-01",
        observation_end: "2023-06-01",
        popularity: 95,
        tags: &["cpi", "price", "inflation", "usa", "nation", "monthly", "sa", "bls"],
    },
    SeriesFixture {
        id: "DGS10",
        title: Some("Market Yield on U.S. Treasury Securities at 10-Year Constant Maturity"),
        frequency: "Daily",
        units: "Percent",
        seasonal_adjustment: "Not Seasonally Adjusted",
        seasonal_adjustment_short: "NSA",
        observation_start: "1962-01-02",
        observation_end: "2023-12-29",
        popularity: 92,
        tags: &["interest rate", "treasury", "10-year", "usa", "daily", "nsa"],
    },
    SeriesFixture {
        id: "NOTITLE",
        title: None,
        frequency: "Annual",
        units: "Number",
        seasonal_adjustment: "Not Seasonally Adjusted",
        seasonal_adjustment_short: "NSA",
        observation_start: "2020-01-01",
        observation_end: "2022-01-01",
        popularity: 1,
        tags: &["annual", "nsa"],
    },
];

pub fn find(id: &str) -> Option<&'static SeriesFixture> {
    SERIES.iter().find(|s| s.id.eq_ignore_ascii_case(id))
}

pub fn matches_text(series: &SeriesFixture, text: &str) -> bool {
    let haystack = format!(
        "{} {} {}",
        series.id,
        series.title.unwrap_or_default(),
        series.tags.join(" ")
    )
    .to_lowercase();
    let mut words = text.split_whitespace().peekable();
    words.peek().is_some() && words.all(|w| haystack.contains(&w.to_lowercase()))
}

pub fn matches_tags(series: &SeriesFixture, tags: &[&str]) -> bool {
    !tags.is_empty() && tags.iter().all(|t| series.tags.contains(t))
}

impl SeriesFixture {
    pub fn to_json(&self) -> Value {
        let mut v = json!({
            "id": self.id,
            "realtime_start": "2024-01-01",
            "realtime_end": "2024-01-01",
            "observation_start": self.observation_start,
            "observation_end": self.observation_end,
            "frequency": self.frequency,
            "units": self.units,
            "seasonal_adjustment": self.seasonal_adjustment,
            "seasonal_adjustment_short": self.seasonal_adjustment_short,
            "last_updated": "2023-12-21 07:56:01-06",
            "popularity": self.popularity,
        });
        if let (Some(title), Some(obj)) = (self.title, v.as_object_mut()) {
            obj.insert("title".to_string(), Value::from(title));
        }
        v
    }
}
