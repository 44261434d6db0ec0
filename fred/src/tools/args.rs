//! Argument extraction from flat JSON tool arguments.

use chrono::NaiveDate;
use fred_types::FredError;
use serde_json::{Map, Value};

/// Borrowed view over a tool's argument object.
///
/// Anything other than a JSON object is treated as an empty argument set.
#[derive(Debug, Clone, Copy)]
pub struct ToolArgs<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> ToolArgs<'a> {
    /// View `args` as tool arguments.
    #[must_use]
    pub fn new(args: &'a Value) -> Self {
        Self {
            map: args.as_object(),
        }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.map
            .and_then(|m| m.get(name))
            .filter(|v| !v.is_null())
    }

    /// A string argument that must be present and non-empty.
    ///
    /// # Errors
    /// `MissingArgument` when absent or blank, `InvalidArg` when not a string.
    pub fn required_str(&self, name: &str) -> Result<&'a str, FredError> {
        self.optional_str(name)?
            .ok_or_else(|| FredError::missing(name))
    }

    /// A string argument; blank strings count as absent.
    ///
    /// # Errors
    /// `InvalidArg` when present but not a string.
    pub fn optional_str(&self, name: &str) -> Result<Option<&'a str>, FredError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(FredError::InvalidArg(format!("{name} must be a string"))),
        }
    }

    /// A `YYYY-MM-DD` date argument, returned as given.
    ///
    /// # Errors
    /// `InvalidArg` when present but not a valid calendar date.
    pub fn optional_date(&self, name: &str) -> Result<Option<String>, FredError> {
        let Some(raw) = self.optional_str(name)? else {
            return Ok(None);
        };
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            FredError::InvalidArg(format!("{name} must be a date in YYYY-MM-DD format, got '{raw}'"))
        })?;
        Ok(Some(raw.to_string()))
    }

    /// A non-negative integer argument, given as a JSON number or a numeric string.
    ///
    /// # Errors
    /// `InvalidArg` when present but not a non-negative integer.
    pub fn optional_usize(&self, name: &str) -> Result<Option<usize>, FredError> {
        self.optional_integer(name)?
            .map(|n| {
                usize::try_from(n).map_err(|_| {
                    FredError::InvalidArg(format!("{name} must be a non-negative integer"))
                })
            })
            .transpose()
    }

    /// [`ToolArgs::optional_usize`] falling back to `default`.
    ///
    /// # Errors
    /// `InvalidArg` when present but not a non-negative integer.
    pub fn usize_or(&self, name: &str, default: usize) -> Result<usize, FredError> {
        Ok(self.optional_usize(name)?.unwrap_or(default))
    }

    /// An integer argument that must be present.
    ///
    /// # Errors
    /// `MissingArgument` when absent, `InvalidArg` when not an integer.
    pub fn required_i64(&self, name: &str) -> Result<i64, FredError> {
        self.optional_integer(name)?
            .ok_or_else(|| FredError::missing(name))
    }

    fn optional_integer(&self, name: &str) -> Result<Option<i64>, FredError> {
        let invalid = || FredError::InvalidArg(format!("{name} must be an integer"));
        match self.get(name) {
            None => Ok(None),
            Some(Value::Number(n)) => n.as_i64().map(Some).ok_or_else(invalid),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => s.trim().parse::<i64>().map(Some).map_err(|_| invalid()),
            Some(_) => Err(invalid()),
        }
    }

    /// A non-empty list of non-blank strings.
    ///
    /// # Errors
    /// `MissingArgument` when absent or empty, `InvalidArg` when not a list of strings.
    pub fn required_str_list(&self, name: &str) -> Result<Vec<&'a str>, FredError> {
        let list = match self.get(name) {
            None => return Err(FredError::missing(name)),
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(FredError::InvalidArg(format!("{name} must be a list of strings")));
            }
        };
        let ids = list
            .iter()
            .map(|v| match v {
                Value::String(s) if !s.trim().is_empty() => Ok(s.as_str()),
                _ => Err(FredError::InvalidArg(format!(
                    "{name} must contain only non-empty strings"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if ids.is_empty() {
            return Err(FredError::missing(name));
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_and_blanks() {
        let v = json!({"series_id": "GDP", "blank": "  ", "num": 3});
        let a = ToolArgs::new(&v);
        assert_eq!(a.required_str("series_id").unwrap(), "GDP");
        assert_eq!(a.required_str("blank"), Err(FredError::missing("blank")));
        assert_eq!(a.required_str("absent"), Err(FredError::missing("absent")));
        assert!(matches!(a.optional_str("num"), Err(FredError::InvalidArg(_))));
    }

    #[test]
    fn integers_accept_numeric_strings() {
        let v = json!({"a": 5, "b": "12", "c": "x", "d": -1, "e": 2.5});
        let a = ToolArgs::new(&v);
        assert_eq!(a.usize_or("a", 10).unwrap(), 5);
        assert_eq!(a.usize_or("b", 10).unwrap(), 12);
        assert_eq!(a.usize_or("z", 10).unwrap(), 10);
        assert!(a.usize_or("c", 10).is_err());
        assert!(a.usize_or("d", 10).is_err());
        assert!(a.usize_or("e", 10).is_err());
        assert_eq!(a.required_i64("d").unwrap(), -1);
    }

    #[test]
    fn dates_are_validated() {
        let v = json!({"ok": "2020-02-29", "bad": "2021-02-29", "fmt": "01/02/2020"});
        let a = ToolArgs::new(&v);
        assert_eq!(a.optional_date("ok").unwrap().as_deref(), Some("2020-02-29"));
        assert!(a.optional_date("bad").is_err());
        assert!(a.optional_date("fmt").is_err());
        assert_eq!(a.optional_date("none").unwrap(), None);
    }

    #[test]
    fn string_lists() {
        let v = json!({"ids": ["GDP", "UNRATE"], "empty": [], "mixed": ["GDP", 1]});
        let a = ToolArgs::new(&v);
        assert_eq!(a.required_str_list("ids").unwrap(), ["GDP", "UNRATE"]);
        assert_eq!(a.required_str_list("empty"), Err(FredError::missing("empty")));
        assert!(matches!(a.required_str_list("mixed"), Err(FredError::InvalidArg(_))));
    }

    #[test]
    fn non_object_is_empty() {
        let v = json!(null);
        let a = ToolArgs::new(&v);
        assert_eq!(a.required_str("series_id"), Err(FredError::missing("series_id")));
    }
}
