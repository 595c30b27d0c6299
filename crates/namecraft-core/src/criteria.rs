//! Suggestion criteria collected by the form.
//!
//! The form posts every optional field even when the user left it blank, so
//! optional selections treat `""` the same as an absent key.

use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Gender of the requested names. Highest-priority constraint in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
    Neutral,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Boy => "boy",
            Gender::Girl => "girl",
            Gender::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPreference {
    Short,
    Medium,
    Long,
}

impl fmt::Display for LengthPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LengthPreference::Short => "short",
            LengthPreference::Medium => "medium",
            LengthPreference::Long => "long",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Popularity {
    Unique,
    Moderate,
    Popular,
}

impl fmt::Display for Popularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Popularity::Unique => "unique",
            Popularity::Moderate => "moderate",
            Popularity::Popular => "popular",
        })
    }
}

/// What the user asked for. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionCriteria {
    pub gender: Gender,
    #[serde(default, deserialize_with = "tag_set")]
    pub heritage: Vec<String>,
    #[serde(default, deserialize_with = "tag_set")]
    pub meanings: Vec<String>,
    #[serde(
        default,
        alias = "lengthPreference",
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub length: Option<LengthPreference>,
    #[serde(
        default,
        deserialize_with = "first_letter",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_letter: Option<char>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub popularity: Option<Popularity>,
}

impl SuggestionCriteria {
    pub fn new(gender: Gender) -> Self {
        Self {
            gender,
            heritage: Vec::new(),
            meanings: Vec::new(),
            length: None,
            first_letter: None,
            popularity: None,
        }
    }

    pub fn with_heritage<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.heritage = dedup_tags(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_meanings<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meanings = dedup_tags(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_length(mut self, length: LengthPreference) -> Self {
        self.length = Some(length);
        self
    }

    /// Lowercase letters are accepted and stored uppercase; non-letters are ignored.
    pub fn with_first_letter(mut self, letter: char) -> Self {
        self.first_letter = normalize_letter(letter);
        self
    }

    pub fn with_popularity(mut self, popularity: Popularity) -> Self {
        self.popularity = Some(popularity);
        self
    }
}

/// `None` for non-letters and for letters whose uppercase form is not a single char.
fn normalize_letter(c: char) -> Option<char> {
    if !c.is_alphabetic() {
        return None;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

/// Trim, drop blanks, keep first occurrence of each tag.
fn dedup_tags(tags: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let t = tag.trim();
        if t.is_empty() || out.iter().any(|seen| seen == t) {
            continue;
        }
        out.push(t.to_string());
    }
    out
}

fn tag_set<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(dedup_tags(raw.unwrap_or_default().into_iter()))
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => {
            let de: serde::de::value::StrDeserializer<'_, D::Error> = s.into_deserializer();
            T::deserialize(de).map(Some)
        }
    }
}

fn first_letter<'de, D>(deserializer: D) -> Result<Option<char>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let s = match raw.as_deref().map(str::trim) {
        None | Some("") => return Ok(None),
        Some(s) => s,
    };
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => normalize_letter(c)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("firstLetter must be a letter, got {:?}", s))),
        _ => Err(serde::de::Error::custom(format!(
            "firstLetter must be a single letter, got {:?}",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_optional_fields_are_unset() {
        let c: SuggestionCriteria = serde_json::from_value(json!({
            "gender": "girl",
            "heritage": ["greek"],
            "meanings": ["strength", ""],
            "length": "",
            "firstLetter": "",
            "popularity": ""
        }))
        .unwrap();
        assert_eq!(c.gender, Gender::Girl);
        assert_eq!(c.meanings, vec!["strength"]);
        assert!(c.length.is_none());
        assert!(c.first_letter.is_none());
        assert!(c.popularity.is_none());
    }

    #[test]
    fn length_preference_alias_and_letter_case() {
        let c: SuggestionCriteria = serde_json::from_value(json!({
            "gender": "neutral",
            "lengthPreference": "short",
            "firstLetter": "a",
            "popularity": "unique"
        }))
        .unwrap();
        assert_eq!(c.length, Some(LengthPreference::Short));
        assert_eq!(c.first_letter, Some('A'));
        assert_eq!(c.popularity, Some(Popularity::Unique));
        assert!(c.heritage.is_empty());
    }

    #[test]
    fn tags_behave_as_a_set() {
        let c: SuggestionCriteria = serde_json::from_value(json!({
            "gender": "boy",
            "heritage": ["norse", " norse ", "celtic"]
        }))
        .unwrap();
        assert_eq!(c.heritage, vec!["norse", "celtic"]);
    }

    #[test]
    fn rejects_missing_gender_and_long_first_letter() {
        assert!(serde_json::from_value::<SuggestionCriteria>(json!({ "heritage": ["greek"] })).is_err());
        assert!(serde_json::from_value::<SuggestionCriteria>(json!({
            "gender": "girl",
            "firstLetter": "AB"
        }))
        .is_err());
        assert!(serde_json::from_value::<SuggestionCriteria>(json!({
            "gender": "girl",
            "firstLetter": "7"
        }))
        .is_err());
    }

    #[test]
    fn first_letter_must_uppercase_to_one_char() {
        assert!(serde_json::from_value::<SuggestionCriteria>(json!({
            "gender": "girl",
            "firstLetter": "ß"
        }))
        .is_err());
        let c: SuggestionCriteria = serde_json::from_value(json!({
            "gender": "girl",
            "firstLetter": "é"
        }))
        .unwrap();
        assert_eq!(c.first_letter, Some('É'));
        assert!(SuggestionCriteria::new(Gender::Boy)
            .with_first_letter('ß')
            .first_letter
            .is_none());
    }

    #[test]
    fn serializes_back_into_wire_shape() {
        let c = SuggestionCriteria::new(Gender::Girl)
            .with_heritage(["greek"])
            .with_meanings(["strength"])
            .with_first_letter('e');
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["gender"], "girl");
        assert_eq!(v["firstLetter"], "E");
        assert!(v.get("length").is_none());
        let back: SuggestionCriteria = serde_json::from_value(v).unwrap();
        assert_eq!(back, c);
    }
}
