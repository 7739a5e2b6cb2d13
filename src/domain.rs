//! Domain models for book idea generation.
//!
//! This module contains the generated [`BookIdea`], the options that steer
//! generation, the genre templates ideas are sampled from, and configuration.

/// Generated ideas and their persisted shape.
pub mod idea;
pub use idea::BookIdea;

/// Generation options and their display phrasing.
pub mod options;
pub use options::{
    BookType, GeneratorOptions, Length, ParseOptionError, TargetAge, Tone, display_genre,
};

mod config;
pub use config::Config;

/// Genre templates.
pub mod template;
pub use template::{TemplateBag, TemplateError, Templates};
