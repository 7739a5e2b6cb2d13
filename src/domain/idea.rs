use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::{Builder, Uuid};

/// A generated book idea.
///
/// Ideas are immutable once generated and are identified by [`BookIdea::id`].
/// Field names are camelCase on the wire so that payloads exported by the
/// web application can be imported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookIdea {
    /// Opaque unique identifier.
    pub id: String,
    /// Candidate titles, in generation order.
    pub title: Vec<String>,
    /// Display-formatted genre name, e.g. `Science Fiction`.
    pub genre: String,
    /// A paragraph describing the premise.
    pub concept: String,
    /// The protagonist (or, for non-fiction, the subject).
    pub main_character: String,
    /// Where the book takes place.
    pub setting: String,
    /// The central conflict (or, for non-fiction, the approach).
    pub conflict: String,
    /// Display-formatted age bracket, e.g. `Adults (Ages 18+)`.
    pub target_audience: String,
    /// A suggested first line.
    pub opening_line: String,
    /// Distinct themes explored by the book.
    pub themes: Vec<String>,
    /// When the idea was generated.
    pub generated_at: DateTime<Utc>,
}

impl BookIdea {
    /// Creates a fresh identifier from the given random source.
    ///
    /// Identifiers are version 4 UUIDs built from 16 random bytes, so a seeded
    /// source yields reproducible identifiers.
    pub fn new_id<R: Rng + ?Sized>(rng: &mut R) -> String {
        let mut bytes = [0u8; 16];
        rng.fill(&mut bytes);
        let uuid: Uuid = Builder::from_random_bytes(bytes).into_uuid();
        uuid.to_string()
    }

    /// Case-insensitive substring match over titles, concept, genre, themes,
    /// main character and setting.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        let hit = |text: &str| text.to_lowercase().contains(needle);

        self.title.iter().any(|title| hit(title))
            || hit(&self.concept)
            || hit(&self.genre)
            || self.themes.iter().any(|theme| hit(theme))
            || hit(&self.main_character)
            || hit(&self.setting)
    }
}

/// Fields an idea-shaped JSON value must carry to be accepted.
const REQUIRED_FIELDS: [&str; 3] = ["id", "title", "concept"];

/// Returns the first required field that is absent or empty in `value`.
///
/// Emptiness follows the loose rules of the JSON payloads this store has to
/// accept: `null`, `false`, `0` and `""` count as missing.
pub(crate) fn missing_field(value: &Value) -> Option<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .find(|field| !value.get(field).is_some_and(is_present))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use serde_json::json;
    use test_case::test_case;

    use super::*;

    fn idea() -> BookIdea {
        BookIdea {
            id: "abc".to_string(),
            title: vec!["The Red Home".to_string(), "A Hidden Love".to_string()],
            genre: "Romance".to_string(),
            concept: "A story set on the coast.".to_string(),
            main_character: "A wedding planner".to_string(),
            themes: vec!["Trust".to_string(), "Hope".to_string()],
            ..BookIdea::default()
        }
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let payload = json!({
            "id": "x1",
            "title": ["One", "Two", "Three"],
            "genre": "Mystery",
            "concept": "Something happened.",
            "mainCharacter": "A detective",
            "setting": "A fog-bound harbour",
            "conflict": "A missing heir",
            "targetAudience": "Adults (Ages 18+)",
            "openingLine": "The bell rang twice.",
            "themes": ["Truth", "Justice"],
            "generatedAt": "2024-03-01T10:15:00.000Z"
        });

        let idea: BookIdea = serde_json::from_value(payload).unwrap();

        assert_eq!(idea.main_character, "A detective");
        assert_eq!(idea.opening_line, "The bell rang twice.");
        assert_eq!(idea.generated_at.to_rfc3339(), "2024-03-01T10:15:00+00:00");
    }

    #[test]
    fn partial_payload_uses_defaults() {
        let idea: BookIdea =
            serde_json::from_value(json!({"id": "x", "title": ["T"], "concept": "C"})).unwrap();

        assert!(idea.themes.is_empty());
        assert_eq!(idea.generated_at, DateTime::<Utc>::default());
    }

    #[test_case("coastal"; "concept")]
    #[test_case("hidden"; "title")]
    #[test_case("romance"; "genre")]
    #[test_case("trust"; "theme")]
    #[test_case("wedding"; "main character")]
    fn matches_searchable_fields(needle: &str) {
        assert!(idea().matches(needle));
    }

    #[test]
    fn matches_setting() {
        let idea = BookIdea {
            setting: "A small coastal town".to_string(),
            concept: String::new(),
            ..idea()
        };
        assert!(idea.matches("coastal town"));
    }

    #[test]
    fn does_not_match_unrelated_text() {
        assert!(!idea().matches("volcano"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(idea().matches(""));
    }

    #[test]
    fn seeded_ids_are_reproducible() {
        let first = BookIdea::new_id(&mut StdRng::seed_from_u64(7));
        let second = BookIdea::new_id(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        assert_eq!(Uuid::parse_str(&first).unwrap().get_version_num(), 4);
    }

    #[test_case(json!({"title": ["t"], "concept": "c"}), Some("id"); "missing id")]
    #[test_case(json!({"id": "", "title": ["t"], "concept": "c"}), Some("id"); "empty id")]
    #[test_case(json!({"id": "a", "concept": "c"}), Some("title"); "missing title")]
    #[test_case(json!({"id": "a", "title": null, "concept": "c"}), Some("title"); "null title")]
    #[test_case(json!({"id": "a", "title": ["t"]}), Some("concept"); "missing concept")]
    #[test_case(json!({"id": "a", "title": [], "concept": "c"}), None; "empty title list")]
    #[test_case(json!("not an object"), Some("id"); "not an object")]
    fn required_fields(value: Value, expected: Option<&str>) {
        assert_eq!(missing_field(&value), expected);
    }
}
