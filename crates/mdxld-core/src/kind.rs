//! # Value Kinds & the Type-Compatibility Predicate
//!
//! schema.org describes each property's accepted values as a "range": a
//! union of types. Only the five primitive data types are checked here.
//! Every other range token is kept as [`ValueKind::Unknown`] and never
//! matches, so an unrecognized range is unsatisfiable rather than
//! permissive.
//!
//! [`matches`] is a pure function of its arguments.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::PropertyValue;

/// A primitive value kind drawn from a vocabulary range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Any string.
    Text,
    /// A numeric value that is not NaN.
    Number,
    /// `true` or `false`.
    Boolean,
    /// A date value, or a string that parses as a calendar date.
    Date,
    /// A string starting with `http://` or `https://`.
    Url,
    /// A range token this crate does not check. Holds the token as written.
    Unknown(String),
}

impl ValueKind {
    /// Parse a range token.
    ///
    /// Accepts bare names (`Text`), compact IRIs (`schema:Text`) and full
    /// IRIs (`https://schema.org/Text`); the local name decides the kind.
    pub fn parse(token: &str) -> Self {
        let trimmed = token.trim().trim_end_matches(['/', '#']);
        let local = trimmed
            .rsplit(['/', '#', ':'])
            .next()
            .unwrap_or(trimmed);
        match local {
            "Text" => Self::Text,
            "Number" => Self::Number,
            "Boolean" => Self::Boolean,
            "Date" => Self::Date,
            "URL" => Self::Url,
            _ => Self::Unknown(token.trim().to_string()),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "Text"),
            Self::Number => write!(f, "Number"),
            Self::Boolean => write!(f, "Boolean"),
            Self::Date => write!(f, "Date"),
            Self::Url => write!(f, "URL"),
            Self::Unknown(token) => write!(f, "{token}"),
        }
    }
}

impl FromStr for ValueKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for ValueKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ValueKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::parse(&token))
    }
}

/// Does `value` satisfy `kind`?
pub fn matches(value: &PropertyValue, kind: &ValueKind) -> bool {
    match (kind, value) {
        (ValueKind::Text, PropertyValue::Text(_)) => true,
        (ValueKind::Number, PropertyValue::Number(n)) => !n.is_nan(),
        (ValueKind::Boolean, PropertyValue::Boolean(_)) => true,
        (ValueKind::Date, PropertyValue::Date(_)) => true,
        (ValueKind::Date, PropertyValue::Text(s)) => is_calendar_date(s),
        (ValueKind::Url, PropertyValue::Text(s)) => is_http_url(s),
        _ => false,
    }
}

/// Does `value` satisfy at least one of `kinds`? An empty slice matches nothing.
pub fn matches_any(value: &PropertyValue, kinds: &[ValueKind]) -> bool {
    kinds.iter().any(|kind| matches(value, kind))
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Accepts the date spellings front matter commonly carries.
fn is_calendar_date(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if DateTime::parse_from_rfc3339(s).is_ok() || DateTime::parse_from_rfc2822(s).is_ok() {
        return true;
    }
    if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
        return true;
    }
    if NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").is_ok()
    {
        return true;
    }
    // Year-month and bare-year forms.
    let digits_only = |part: &str, len: usize| {
        part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
    };
    match s.split_once('-') {
        Some((year, month)) if digits_only(year, 4) && digits_only(month, 2) => {
            NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").is_ok()
        }
        None => digits_only(s, 4),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    #[test]
    fn parse_reads_local_name_of_iri() {
        assert_eq!(ValueKind::parse("Text"), ValueKind::Text);
        assert_eq!(ValueKind::parse("schema:Number"), ValueKind::Number);
        assert_eq!(ValueKind::parse("https://schema.org/Boolean"), ValueKind::Boolean);
        assert_eq!(ValueKind::parse("http://schema.org/Date#"), ValueKind::Date);
        assert_eq!(ValueKind::parse("URL"), ValueKind::Url);
    }

    #[test]
    fn parse_keeps_unknown_token() {
        assert_eq!(
            ValueKind::parse("https://schema.org/Person"),
            ValueKind::Unknown("https://schema.org/Person".into())
        );
        assert_eq!(ValueKind::parse("DateTime"), ValueKind::Unknown("DateTime".into()));
    }

    #[test]
    fn display_uses_schema_spelling() {
        let names: Vec<String> = [
            ValueKind::Text,
            ValueKind::Number,
            ValueKind::Boolean,
            ValueKind::Date,
            ValueKind::Url,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(names, ["Text", "Number", "Boolean", "Date", "URL"]);
    }

    #[test]
    fn text_accepts_only_strings() {
        assert!(matches(&"hello".into(), &ValueKind::Text));
        assert!(!matches(&123i64.into(), &ValueKind::Text));
        assert!(!matches(&true.into(), &ValueKind::Text));
    }

    #[test]
    fn number_rejects_nan() {
        assert!(matches(&PropertyValue::Number(1.5), &ValueKind::Number));
        assert!(matches(&PropertyValue::Number(f64::INFINITY), &ValueKind::Number));
        assert!(!matches(&PropertyValue::Number(f64::NAN), &ValueKind::Number));
        assert!(!matches(&"12".into(), &ValueKind::Number));
    }

    #[test]
    fn boolean_requires_literal() {
        assert!(matches(&false.into(), &ValueKind::Boolean));
        assert!(!matches(&"true".into(), &ValueKind::Boolean));
    }

    #[test]
    fn date_accepts_date_values_and_date_strings() {
        let d = Utc.with_ymd_and_hms(2023, 5, 17, 0, 0, 0).unwrap();
        assert!(matches(&d.into(), &ValueKind::Date));
        for s in [
            "2023-05-17",
            "2023-05-17T10:30:00Z",
            "2023-05-17T10:30:00.250+02:00",
            "2023-05-17T10:30:00",
            "2023-05-17 10:30:00",
            "Wed, 17 May 2023 10:30:00 +0000",
            "2023-05",
            "2023",
        ] {
            assert!(matches(&s.into(), &ValueKind::Date), "{s} should be a date");
        }
    }

    #[test]
    fn date_rejects_impossible_dates() {
        for s in ["2023-02-30", "2023-13", "yesterday", "", "17/05/2023"] {
            assert!(!matches(&s.into(), &ValueKind::Date), "{s} should not be a date");
        }
        assert!(!matches(&PropertyValue::Number(1_700_000_000.0), &ValueKind::Date));
    }

    #[test]
    fn url_requires_http_scheme() {
        assert!(matches(&"https://example.com".into(), &ValueKind::Url));
        assert!(matches(&"http://example.com/a".into(), &ValueKind::Url));
        assert!(!matches(&"ftp://example.com".into(), &ValueKind::Url));
        assert!(!matches(&"example.com".into(), &ValueKind::Url));
    }

    #[test]
    fn unknown_kind_never_matches() {
        let kind = ValueKind::Unknown("Person".into());
        assert!(!matches(&"Ada".into(), &kind));
        assert!(!matches(&PropertyValue::Object(Default::default()), &kind));
    }

    #[test]
    fn matches_any_is_a_union() {
        let kinds = [ValueKind::Url, ValueKind::Text];
        assert!(matches_any(&"plain".into(), &kinds));
        assert!(!matches_any(&42i64.into(), &kinds));
        assert!(!matches_any(&"plain".into(), &[]));
    }

    #[test]
    fn kind_serde_uses_display_form() {
        let json = serde_json::to_string(&vec![ValueKind::Url, ValueKind::Text]).unwrap();
        assert_eq!(json, r#"["URL","Text"]"#);
        let back: Vec<ValueKind> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![ValueKind::Url, ValueKind::Text]);
    }

    fn any_value() -> impl Strategy<Value = PropertyValue> {
        prop_oneof![
            Just(PropertyValue::Null),
            any::<bool>().prop_map(PropertyValue::Boolean),
            any::<f64>().prop_map(PropertyValue::Number),
            ".{0,24}".prop_map(PropertyValue::Text),
            "(https?|ftp)://[a-z]{1,8}\\.org".prop_map(PropertyValue::Text),
            "[0-9]{4}-[0-9]{2}-[0-9]{2}".prop_map(PropertyValue::Text),
        ]
    }

    fn any_kind() -> impl Strategy<Value = ValueKind> {
        prop_oneof![
            Just(ValueKind::Text),
            Just(ValueKind::Number),
            Just(ValueKind::Boolean),
            Just(ValueKind::Date),
            Just(ValueKind::Url),
            "[A-Z][a-z]{1,8}".prop_map(|s| ValueKind::parse(&s)),
        ]
    }

    proptest! {
        /// Identical inputs always give identical answers.
        #[test]
        fn matches_is_deterministic(value in any_value(), kind in any_kind()) {
            prop_assert_eq!(matches(&value, &kind), matches(&value, &kind));
        }

        /// Evaluating the predicate leaves its inputs untouched.
        #[test]
        fn matches_does_not_mutate(value in any_value(), kind in any_kind()) {
            let before = (value.clone(), kind.clone());
            let _ = matches(&value, &kind);
            prop_assert_eq!(before.0.type_name(), value.type_name());
            prop_assert_eq!(before.1, kind);
        }

        /// A URL string is always also Text.
        #[test]
        fn url_implies_text(value in any_value()) {
            if matches(&value, &ValueKind::Url) {
                prop_assert!(matches(&value, &ValueKind::Text));
            }
        }

        /// Unknown kinds are unsatisfiable.
        #[test]
        fn unknown_never_matches(value in any_value(), token in "[A-Z][a-z]{3,10}Thing") {
            prop_assert!(!matches(&value, &ValueKind::Unknown(token)));
        }
    }
}
