//! Ordered template attribute maps.
//!
//! On the wire an attribute map is a JSON object whose values are the strings
//! `"true"`/`"false"`, except for the reserved `title` key which carries free
//! text. Key order is significant: it is the order the server lists options
//! in and the order they are offered to the user.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Reserved key holding the template title.
pub const TITLE_KEY: &str = "title";

/// Attribute that switches between single and multiple choice questions.
pub const MULTIPLE_CHOICE_KEY: &str = "multipleChoice";

/// Title plus ordered boolean options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeMap {
    title: String,
    options: Vec<(String, bool)>,
}

impl AttributeMap {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: bool) -> Self {
        self.insert(name, value);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Sets `name`, keeping its original position when it already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: bool) {
        let name = name.into();
        match self.options.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.options.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.options
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    pub fn options(&self) -> &[(String, bool)] {
        &self.options
    }

    /// Every key in wire order, `title` first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(TITLE_KEY).chain(self.options.iter().map(|(key, _)| key.as_str()))
    }

    /// Number of keys including `title`.
    pub fn len(&self) -> usize {
        self.options.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

fn flag_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        map.serialize_entry(TITLE_KEY, &self.title)?;
        for (key, value) in &self.options {
            map.serialize_entry(key, flag_text(*value))?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireValue {
    Flag(bool),
    Text(String),
}

struct AttributeMapVisitor;

impl<'de> Visitor<'de> for AttributeMapVisitor {
    type Value = AttributeMap;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an attribute map with a `title` and boolean options")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut title: Option<String> = None;
        let mut options: Vec<(String, bool)> = Vec::new();

        while let Some(key) = access.next_key::<String>()? {
            let value = access.next_value::<WireValue>()?;
            if key == TITLE_KEY {
                if title.is_some() {
                    return Err(de::Error::duplicate_field(TITLE_KEY));
                }
                title = Some(match value {
                    WireValue::Text(text) => text,
                    WireValue::Flag(flag) => {
                        return Err(de::Error::invalid_type(
                            de::Unexpected::Bool(flag),
                            &"a title string",
                        ))
                    }
                });
                continue;
            }

            if options.iter().any(|(existing, _)| *existing == key) {
                return Err(de::Error::custom(format!("duplicate attribute `{key}`")));
            }
            let flag = match value {
                WireValue::Flag(flag) => flag,
                WireValue::Text(text) => match text.as_str() {
                    "true" => true,
                    "false" => false,
                    other => {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Str(other),
                            &"\"true\" or \"false\"",
                        ))
                    }
                },
            };
            options.push((key, flag));
        }

        let title = title.ok_or_else(|| de::Error::missing_field(TITLE_KEY))?;
        Ok(AttributeMap { title, options })
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributeMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoding_keeps_server_order() {
        let map: AttributeMap = serde_json::from_str(
            r#"{"zeta":"true","title":"Untitled","alpha":"false","mid":true}"#,
        )
        .expect("decode");

        assert_eq!(map.title(), "Untitled");
        let names: Vec<_> = map.options().iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(map.get("mid"), Some(true));
        assert_eq!(map.keys().count(), 4);
    }

    #[test]
    fn encoding_writes_title_first_and_string_flags() {
        let map = AttributeMap::new("Quiz")
            .with_option("multipleChoice", true)
            .with_option("hasScoreWeight", false);

        let json = serde_json::to_string(&map).expect("encode");
        assert_eq!(
            json,
            r#"{"title":"Quiz","multipleChoice":"true","hasScoreWeight":"false"}"#
        );
    }

    #[test]
    fn non_boolean_option_is_rejected() {
        let err = serde_json::from_str::<AttributeMap>(r#"{"title":"T","combat":"maybe"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn missing_title_is_rejected() {
        let err = serde_json::from_str::<AttributeMap>(r#"{"combat":"true"}"#).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        assert!(
            serde_json::from_str::<AttributeMap>(r#"{"title":"T","a":"true","a":"false"}"#)
                .is_err()
        );
    }

    #[test]
    fn insert_keeps_position_of_existing_key() {
        let mut map = AttributeMap::new("T")
            .with_option("a", true)
            .with_option("b", true);
        map.insert("a", false);
        assert_eq!(
            map.options(),
            &[("a".to_string(), false), ("b".to_string(), true)]
        );
    }
}
