//! Genre templates
//!
//! A [`TemplateBag`] holds the candidate fragments for one genre. [`Templates`]
//! maps `(book type, genre)` to bags and is loaded once, either from the
//! built-in data or from a user supplied JSON file, and never mutated after.

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use serde::{Deserialize, Serialize};

use crate::BookType;

static BUILTIN: LazyLock<Templates> = LazyLock::new(|| {
    Templates::from_json(include_str!("../../data/templates.json"))
        .expect("built-in templates are valid JSON")
});

static EMPTY_BAG: TemplateBag = TemplateBag {
    title_patterns: Vec::new(),
    concepts: Vec::new(),
    characters: Vec::new(),
    subjects: Vec::new(),
    settings: Vec::new(),
    destinations: Vec::new(),
    conflicts: Vec::new(),
    approaches: Vec::new(),
    themes: Vec::new(),
    opening_lines: Vec::new(),
};

/// Candidate fragments for a single genre.
///
/// Fiction templates usually provide `characters`, `settings` and
/// `conflicts`; non-fiction templates provide `subjects`, `destinations` and
/// `approaches` instead. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateBag {
    /// Title patterns, possibly containing `{placeholder}` tokens.
    pub title_patterns: Vec<String>,
    /// Premises used to build the concept paragraph.
    pub concepts: Vec<String>,
    /// Fiction protagonists.
    pub characters: Vec<String>,
    /// Non-fiction subjects.
    pub subjects: Vec<String>,
    /// Fiction settings.
    pub settings: Vec<String>,
    /// Non-fiction destinations (travel and the like).
    pub destinations: Vec<String>,
    /// Fiction conflicts.
    pub conflicts: Vec<String>,
    /// Non-fiction approaches.
    pub approaches: Vec<String>,
    /// Themes.
    pub themes: Vec<String>,
    /// Opening lines.
    pub opening_lines: Vec<String>,
}

impl TemplateBag {
    /// Candidates for the main character: `characters`, else `subjects`.
    #[must_use]
    pub fn character_pool(&self) -> &[String] {
        first_non_empty(&self.characters, &self.subjects)
    }

    /// Candidates for the setting: `settings`, else `destinations`.
    #[must_use]
    pub fn setting_pool(&self) -> &[String] {
        first_non_empty(&self.settings, &self.destinations)
    }

    /// Candidates for the conflict: `conflicts`, else `approaches`.
    #[must_use]
    pub fn conflict_pool(&self) -> &[String] {
        first_non_empty(&self.conflicts, &self.approaches)
    }
}

fn first_non_empty<'a>(primary: &'a [String], secondary: &'a [String]) -> &'a [String] {
    if primary.is_empty() {
        secondary
    } else {
        primary
    }
}

/// An error loading a template file.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The file could not be read.
    #[error("failed to read templates from {}: {source}", .path.display())]
    Io {
        /// The file that was read.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// The file is not a valid template document.
    #[error("failed to parse templates: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Genre templates for both book types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Templates {
    #[serde(default)]
    fiction: BTreeMap<String, TemplateBag>,
    #[serde(default, rename = "non-fiction")]
    non_fiction: BTreeMap<String, TemplateBag>,
}

/// The outcome of looking up a genre.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// The bag to sample from. Empty if neither the requested nor the default
    /// genre exists.
    pub bag: &'a TemplateBag,
    /// The genre key whose bag was used.
    pub genre: &'a str,
    /// Whether the requested genre was missing.
    pub fell_back: bool,
}

impl Templates {
    /// The templates shipped with the crate.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parses templates from a JSON document of the form
    /// `{"fiction": {genre: bag}, "non-fiction": {genre: bag}}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON of that shape.
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads templates from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let json = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let templates = Self::from_json(&json)?;
        tracing::debug!(
            "Loaded {} fiction and {} non-fiction templates from {}",
            templates.fiction.len(),
            templates.non_fiction.len(),
            path.display()
        );
        Ok(templates)
    }

    /// Adds (or replaces) the bag for a genre.
    pub fn insert(&mut self, book_type: BookType, genre: impl Into<String>, bag: TemplateBag) {
        self.section_mut(book_type).insert(genre.into(), bag);
    }

    /// Returns the bag for a genre, if present.
    #[must_use]
    pub fn get(&self, book_type: BookType, genre: &str) -> Option<&TemplateBag> {
        self.section(book_type).get(genre)
    }

    /// The genre keys available for a book type, in sorted order.
    pub fn genres(&self, book_type: BookType) -> impl Iterator<Item = &str> {
        self.section(book_type).keys().map(String::as_str)
    }

    /// Looks up a genre, falling back to the book type's default genre.
    ///
    /// If the default genre is missing too, an empty bag is returned and every
    /// field of the generated idea comes from the built-in pools.
    #[must_use]
    pub fn resolve<'a>(&'a self, book_type: BookType, genre: &'a str) -> Resolved<'a> {
        if let Some(bag) = self.get(book_type, genre) {
            return Resolved {
                bag,
                genre,
                fell_back: false,
            };
        }

        let default = book_type.default_genre();
        Resolved {
            bag: self.get(book_type, default).unwrap_or(&EMPTY_BAG),
            genre: default,
            fell_back: true,
        }
    }

    const fn section(&self, book_type: BookType) -> &BTreeMap<String, TemplateBag> {
        match book_type {
            BookType::Fiction => &self.fiction,
            BookType::NonFiction => &self.non_fiction,
        }
    }

    const fn section_mut(&mut self, book_type: BookType) -> &mut BTreeMap<String, TemplateBag> {
        match book_type {
            BookType::Fiction => &mut self.fiction,
            BookType::NonFiction => &mut self.non_fiction,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use test_case::test_case;

    use super::*;

    const FICTION_GENRES: &[&str] = &[
        "fantasy",
        "horror",
        "mystery",
        "romance",
        "science-fiction",
        "thriller",
    ];

    const NON_FICTION_GENRES: &[&str] = &[
        "biography",
        "business",
        "cooking",
        "health",
        "memoir",
        "self-help",
        "travel",
    ];

    #[test_case(BookType::Fiction, FICTION_GENRES)]
    #[test_case(BookType::NonFiction, NON_FICTION_GENRES)]
    fn builtin_genres(book_type: BookType, expected: &[&str]) {
        let genres: Vec<_> = Templates::builtin().genres(book_type).collect();
        assert_eq!(genres, expected);
    }

    #[test]
    fn builtin_bags_have_at_least_three_title_patterns() {
        let templates = Templates::builtin();
        for book_type in BookType::ALL {
            for genre in templates.genres(*book_type) {
                let bag = templates.get(*book_type, genre).unwrap();
                assert!(bag.title_patterns.len() >= 3, "{genre} has too few titles");
                assert!(!bag.character_pool().is_empty(), "{genre} has no characters");
                assert!(!bag.themes.is_empty(), "{genre} has no themes");
            }
        }
    }

    #[test]
    fn resolve_known_genre() {
        let resolved = Templates::builtin().resolve(BookType::Fiction, "mystery");
        assert_eq!(resolved.genre, "mystery");
        assert!(!resolved.fell_back);
    }

    #[test_case(BookType::Fiction, "romance")]
    #[test_case(BookType::NonFiction, "self-help")]
    fn resolve_unknown_genre_falls_back(book_type: BookType, default: &str) {
        let templates = Templates::builtin();
        let resolved = templates.resolve(book_type, "underwater-basket-weaving");
        assert_eq!(resolved.genre, default);
        assert!(resolved.fell_back);
        assert_eq!(resolved.bag, templates.get(book_type, default).unwrap());
    }

    #[test]
    fn fiction_genre_is_not_found_under_non_fiction() {
        let resolved = Templates::builtin().resolve(BookType::NonFiction, "horror");
        assert!(resolved.fell_back);
        assert_eq!(resolved.genre, "self-help");
    }

    #[test]
    fn resolve_without_default_uses_empty_bag() {
        let templates = Templates::default();
        let resolved = templates.resolve(BookType::Fiction, "mystery");
        assert!(resolved.fell_back);
        assert_eq!(resolved.bag, &TemplateBag::default());
    }

    #[test]
    fn pools_prefer_fiction_field_names() {
        let bag = TemplateBag {
            characters: vec!["A knight".to_string()],
            subjects: vec!["Entrepreneurs".to_string()],
            destinations: vec!["Lisbon".to_string()],
            ..TemplateBag::default()
        };

        assert_eq!(bag.character_pool(), ["A knight".to_string()]);
        assert_eq!(bag.setting_pool(), ["Lisbon".to_string()]);
        assert!(bag.conflict_pool().is_empty());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"fiction": {"western": {"titlePatterns": ["The {color} Canyon"], "openingLines": ["Dust."]}}}"#,
        )
        .unwrap();

        let templates = Templates::load(file.path()).unwrap();
        let bag = templates.get(BookType::Fiction, "western").unwrap();
        assert_eq!(bag.title_patterns, ["The {color} Canyon".to_string()]);
        assert_eq!(bag.opening_lines, ["Dust.".to_string()]);
        assert_eq!(templates.genres(BookType::NonFiction).count(), 0);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let error = Templates::load(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(error, TemplateError::Io { .. }));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let error = Templates::from_json(r#"{"fiction": []}"#).unwrap_err();
        assert!(matches!(error, TemplateError::Parse(_)));
    }
}
