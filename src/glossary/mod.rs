//! Glossary of pinned product terminology.
//!
//! A glossary maps each source term to its required rendering in every
//! supported target language. Loading is deliberately non-fatal: a missing
//! or malformed glossary degrades to an empty one so translation proceeds
//! without term pinning.

use serde::Deserialize;
use std::path::Path;

use crate::pipeline::Language;
use crate::ui::Style;

/// Glossary document compiled into the binary.
const BUNDLED_GLOSSARY: &str = include_str!("../../data/glossary.toml");

/// A source term and its required translations.
#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub ja: String,
    pub ko: String,
}

impl GlossaryTerm {
    /// The required rendering of this term in the given language.
    pub fn translation_for(&self, language: Language) -> &str {
        match language {
            Language::Ja => &self.ja,
            Language::Ko => &self.ko,
        }
    }
}

/// An ordered list of glossary terms. Empty is a valid value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Glossary {
    #[serde(default)]
    pub terms: Vec<GlossaryTerm>,
}

impl Glossary {
    /// Loads the glossary bundled into the binary.
    pub fn load() -> Self {
        Self::parse(BUNDLED_GLOSSARY)
    }

    /// Loads a glossary from a user-supplied TOML file.
    ///
    /// Read and parse failures warn and return an empty glossary, same as
    /// [`Glossary::load`].
    pub fn load_from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::parse(&raw),
            Err(e) => {
                crate::warn!(
                    "{} Could not read glossary file {}: {e}",
                    Style::warning("Warning:"),
                    path.display()
                );
                Self::default()
            }
        }
    }

    fn parse(raw: &str) -> Self {
        match toml::from_str(raw) {
            Ok(glossary) => glossary,
            Err(e) => {
                crate::warn!(
                    "{} Could not parse glossary data: {e}",
                    Style::warning("Warning:")
                );
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}
