use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// An option value that is not one of the recognised keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
    expected: String,
}

/// Declares a closed set of option keys with parsing and display.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $key)] $variant, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The key used in templates, config files and on the command line.
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = ParseOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.key() == key)
                    .ok_or_else(|| ParseOptionError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|value| value.key())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

option_enum! {
    /// Fiction or non-fiction. Each has its own set of genre templates.
    BookType("book type") {
        /// Narrative fiction.
        #[default]
        Fiction => "fiction",
        /// Guides, memoirs and other non-fiction.
        NonFiction => "non-fiction",
    }
}

option_enum! {
    /// Target length of the book.
    Length("length") {
        /// 1,000-7,500 words.
        ShortStory => "short-story",
        /// 17,500-40,000 words.
        Novella => "novella",
        /// 50,000+ words.
        #[default]
        Novel => "novel",
    }
}

option_enum! {
    /// Target reader age bracket.
    TargetAge("target age") {
        /// Ages 8-12.
        Children => "children",
        /// Ages 13-18.
        YoungAdult => "young-adult",
        /// Ages 18+.
        #[default]
        Adult => "adult",
    }
}

option_enum! {
    /// Overall tone of the book.
    Tone("tone") {
        /// Light and uplifting.
        #[default]
        Light => "light",
        /// Serious and thoughtful.
        Serious => "serious",
        /// Humorous and fun.
        Humorous => "humorous",
        /// Dark and intense.
        Dark => "dark",
    }
}

impl BookType {
    /// The genre whose template is used when a requested genre is unknown.
    #[must_use]
    pub const fn default_genre(self) -> &'static str {
        match self {
            Self::Fiction => "romance",
            Self::NonFiction => "self-help",
        }
    }
}

impl Length {
    /// Phrase describing the scope of a book of this length.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::ShortStory => "concise narrative",
            Self::Novella => "focused exploration",
            Self::Novel => "comprehensive journey",
        }
    }
}

impl TargetAge {
    /// Phrase describing writing pitched at this audience.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Children => "accessible and age-appropriate",
            Self::YoungAdult => "relatable and compelling",
            Self::Adult => "sophisticated and nuanced",
        }
    }

    /// Display label with the explicit age range.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Children => "Children (Ages 8-12)",
            Self::YoungAdult => "Young Adults (Ages 13-18)",
            Self::Adult => "Adults (Ages 18+)",
        }
    }
}

impl Tone {
    /// Phrase describing the feel of a book with this tone.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Light => "uplifting and inspiring",
            Self::Serious => "thought-provoking and profound",
            Self::Humorous => "engaging and entertaining",
            Self::Dark => "intense and gripping",
        }
    }
}

/// Options selected by the user for a single generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Fiction or non-fiction.
    pub book_type: BookType,
    /// Genre key, e.g. `science-fiction` or `self-help`.
    pub genre: String,
    /// Target length.
    pub length: Length,
    /// Target reader age.
    pub target_age: TargetAge,
    /// Overall tone.
    pub tone: Tone,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            book_type: BookType::Fiction,
            genre: BookType::Fiction.default_genre().to_string(),
            length: Length::default(),
            target_age: TargetAge::default(),
            tone: Tone::default(),
        }
    }
}

/// Formats a genre key for display: hyphens become spaces and every word is
/// capitalised.
///
/// ```
/// assert_eq!(bookspark::domain::display_genre("science-fiction"), "Science Fiction");
/// ```
#[must_use]
pub fn display_genre(key: &str) -> String {
    key.split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("fiction", BookType::Fiction)]
    #[test_case("non-fiction", BookType::NonFiction)]
    #[test_case(" Non-Fiction ", BookType::NonFiction; "case and whitespace insensitive")]
    fn parse_book_type(input: &str, expected: BookType) {
        assert_eq!(input.parse::<BookType>().unwrap(), expected);
    }

    #[test]
    fn parse_error_lists_expected_values() {
        let error = "epic".parse::<Length>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid length 'epic' (expected one of: short-story, novella, novel)"
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for tone in Tone::ALL {
            assert_eq!(tone.to_string().parse::<Tone>().unwrap(), *tone);
        }
    }

    #[test_case("romance", "Romance")]
    #[test_case("science-fiction", "Science Fiction")]
    #[test_case("self-help", "Self Help")]
    #[test_case("", "")]
    fn formats_genre(key: &str, expected: &str) {
        assert_eq!(display_genre(key), expected);
    }

    #[test_case(TargetAge::Children, "Children (Ages 8-12)")]
    #[test_case(TargetAge::YoungAdult, "Young Adults (Ages 13-18)")]
    #[test_case(TargetAge::Adult, "Adults (Ages 18+)")]
    fn formats_audience(age: TargetAge, expected: &str) {
        assert_eq!(age.label(), expected);
    }

    #[test]
    fn unknown_age_is_rejected_at_parse() {
        assert!("seniors".parse::<TargetAge>().is_err());
    }

    #[test]
    fn serde_uses_kebab_keys() {
        let json = serde_json::to_string(&GeneratorOptions {
            book_type: BookType::NonFiction,
            genre: "self-help".to_string(),
            length: Length::ShortStory,
            target_age: TargetAge::YoungAdult,
            tone: Tone::Dark,
        })
        .unwrap();

        assert_eq!(
            json,
            r#"{"book_type":"non-fiction","genre":"self-help","length":"short-story","target_age":"young-adult","tone":"dark"}"#
        );
    }

    #[test]
    fn default_options_are_fiction_romance() {
        let options = GeneratorOptions::default();
        assert_eq!(options.book_type, BookType::Fiction);
        assert_eq!(options.genre, "romance");
        assert_eq!(options.length, Length::Novel);
        assert_eq!(options.target_age, TargetAge::Adult);
        assert_eq!(options.tone, Tone::Light);
    }
}
