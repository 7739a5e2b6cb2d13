//! Book idea generation
//!
//! The [`Generator`] samples fragments from a genre's [`TemplateBag`] and
//! assembles them into a [`BookIdea`]. Generation never fails: unknown genres
//! fall back to the book type's default genre and empty bags fall back to
//! built-in pools. Genre fallbacks are reported through
//! [`Generation::fallback`].
//!
//! The random source is injected so that generation can be made reproducible
//! with a seeded RNG.

use std::{collections::HashSet, sync::LazyLock};

use chrono::{DateTime, Utc};
use rand::{
    Rng, SeedableRng,
    rngs::{StdRng, ThreadRng},
    seq::{IndexedRandom, SliceRandom},
};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::{BookIdea, BookType, GeneratorOptions, TemplateBag, Templates, domain::display_genre};

mod vocabulary;

/// The number of candidate titles in every idea.
pub const TITLE_COUNT: usize = 3;

/// The number of distinct themes in every idea.
pub const THEME_COUNT: usize = 2;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z]+)\}").expect("placeholder pattern is valid"));

/// How a placeholder that occurs more than once in one title pattern is
/// filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatedPlaceholders {
    /// Every occurrence draws its own word.
    #[default]
    Independent,
    /// Only the first occurrence of each placeholder is filled; later ones are
    /// left as written.
    FirstOnly,
}

/// A genre substitution made during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fallback {
    /// The genre that was asked for.
    pub requested: String,
    /// The genre whose template was used instead.
    pub used: String,
}

/// The result of a generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// The generated idea.
    pub idea: BookIdea,
    /// Set when the requested genre had no template.
    pub fallback: Option<Fallback>,
}

/// Generates book ideas from genre templates.
#[derive(Debug, Clone)]
pub struct Generator<R> {
    rng: R,
    repeated_placeholders: RepeatedPlaceholders,
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Generator<StdRng> {
    /// A generator whose output is fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R> Generator<R> {
    /// A generator drawing from the given random source.
    pub const fn with_rng(rng: R) -> Self {
        Self {
            rng,
            repeated_placeholders: RepeatedPlaceholders::Independent,
        }
    }

    /// Sets how repeated placeholders in a title pattern are filled.
    #[must_use]
    pub const fn repeated_placeholders(mut self, policy: RepeatedPlaceholders) -> Self {
        self.repeated_placeholders = policy;
        self
    }
}

impl<R: Rng> Generator<R> {
    /// Generates an idea stamped with the current time.
    pub fn generate(&mut self, options: &GeneratorOptions, templates: &Templates) -> Generation {
        self.generate_at(options, templates, Utc::now())
    }

    /// Generates an idea stamped with `generated_at`.
    pub fn generate_at(
        &mut self,
        options: &GeneratorOptions,
        templates: &Templates,
        generated_at: DateTime<Utc>,
    ) -> Generation {
        let resolved = templates.resolve(options.book_type, &options.genre);
        let bag = resolved.bag;

        let fallback = resolved.fell_back.then(|| {
            tracing::warn!(
                requested = %options.genre,
                used = resolved.genre,
                "No {} template for genre; using fallback",
                options.book_type
            );
            Fallback {
                requested: options.genre.clone(),
                used: resolved.genre.to_string(),
            }
        });

        let genre = display_genre(resolved.genre);

        let idea = BookIdea {
            id: BookIdea::new_id(&mut self.rng),
            title: self.titles(&bag.title_patterns),
            concept: self.concept(bag, options, &genre),
            main_character: self.pick(bag.character_pool(), vocabulary::DEFAULT_CHARACTERS),
            setting: self.pick(bag.setting_pool(), vocabulary::DEFAULT_SETTINGS),
            conflict: self.pick(bag.conflict_pool(), vocabulary::DEFAULT_CONFLICTS),
            target_audience: options.target_age.label().to_string(),
            opening_line: self.pick(&bag.opening_lines, vocabulary::DEFAULT_OPENING_LINES),
            themes: self.themes(&bag.themes),
            genre,
            generated_at,
        };

        tracing::debug!(id = %idea.id, genre = %idea.genre, "Generated idea");

        Generation { idea, fallback }
    }

    /// The first [`TITLE_COUNT`] non-blank patterns with placeholders filled,
    /// padded with synthesized titles.
    fn titles(&mut self, patterns: &[String]) -> Vec<String> {
        let mut titles: Vec<String> = patterns
            .iter()
            .filter(|pattern| is_present(pattern))
            .take(TITLE_COUNT)
            .map(|pattern| self.fill_placeholders(pattern))
            .collect();

        while titles.len() < TITLE_COUNT {
            let adjective = self.word(vocabulary::ADJECTIVES);
            let concept = self.word(vocabulary::CONCEPTS);
            titles.push(format!("The {adjective} {concept}"));
        }

        titles
    }

    /// Replaces every recognised `{placeholder}` with a random word.
    ///
    /// Unrecognised tokens are left untouched.
    fn fill_placeholders(&mut self, pattern: &str) -> String {
        let policy = self.repeated_placeholders;
        let rng = &mut self.rng;
        let mut filled = HashSet::new();

        PLACEHOLDER
            .replace_all(pattern, |caps: &Captures<'_>| {
                let key = &caps[1];
                match vocabulary::words(key) {
                    Some(words)
                        if policy == RepeatedPlaceholders::Independent
                            || filled.insert(key.to_string()) =>
                    {
                        words.choose(&mut *rng).copied().unwrap_or_default().to_string()
                    }
                    _ => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    fn word(&mut self, words: &[&str]) -> String {
        words
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
            .to_string()
    }

    /// A uniform sample from the non-blank entries of `pool`, or from
    /// `fallback` if there are none.
    fn pick(&mut self, pool: &[String], fallback: &[&str]) -> String {
        match self.choose_present(pool) {
            Some(value) => value.clone(),
            None => self.word(fallback),
        }
    }

    fn choose_present<'a>(&mut self, pool: &'a [String]) -> Option<&'a String> {
        let candidates: Vec<&String> = pool.iter().filter(|value| is_present(value)).collect();
        candidates.choose(&mut self.rng).copied()
    }

    /// [`THEME_COUNT`] distinct themes.
    ///
    /// Themes come from the template where possible; any shortfall is made up
    /// from the built-in pool.
    fn themes(&mut self, pool: &[String]) -> Vec<String> {
        let mut themes = self.sample_distinct(pool.iter().map(String::as_str), THEME_COUNT);

        if themes.len() < THEME_COUNT {
            let extra = self.sample_distinct(
                vocabulary::DEFAULT_THEMES
                    .iter()
                    .copied()
                    .filter(|theme| !themes.iter().any(|chosen| chosen == theme)),
                THEME_COUNT - themes.len(),
            );
            themes.extend(extra);
        }

        themes
    }

    /// Up to `amount` distinct values chosen uniformly without replacement.
    fn sample_distinct<'a>(
        &mut self,
        values: impl IntoIterator<Item = &'a str>,
        amount: usize,
    ) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut candidates: Vec<&str> = values
            .into_iter()
            .filter(|value| is_present(value) && seen.insert(*value))
            .collect();

        let (chosen, _) = candidates.partial_shuffle(&mut self.rng, amount);
        chosen.iter().map(|value| (*value).to_string()).collect()
    }

    /// The concept paragraph, phrased by tone, length and audience.
    fn concept(&mut self, bag: &TemplateBag, options: &GeneratorOptions, genre: &str) -> String {
        let base = if let Some(concept) = self.choose_present(&bag.concepts) {
            concept.clone()
        } else if let Some(pattern) = self.choose_present(&bag.title_patterns) {
            self.fill_placeholders(pattern)
        } else {
            match options.book_type {
                BookType::Fiction => vocabulary::DEFAULT_FICTION_CONCEPT,
                BookType::NonFiction => vocabulary::DEFAULT_NON_FICTION_CONCEPT,
            }
            .to_string()
        };

        let tone = options.tone.phrase();
        let audience = options.target_age.phrase();

        match options.book_type {
            BookType::Fiction => format!(
                "A {tone} {length} that follows {premise}. This {audience} {genre} story explores \
                 themes of growth, challenge, and triumph while delivering an engaging reading \
                 experience.",
                length = options.length.phrase(),
                premise = base.trim_end_matches('.').to_lowercase(),
            ),
            BookType::NonFiction => format!(
                "{base} This {audience} guide provides {tone} insights and practical strategies \
                 to help readers achieve their goals and transform their lives."
            ),
        }
    }
}

/// Template entries that are empty or whitespace-only are never used.
fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
