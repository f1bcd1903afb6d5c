//! Supported target languages.

use std::fmt;
use std::str::FromStr;

use crate::ui::Style;

/// A supported target language. Exactly two are offered: the language
/// selector in panel mode exposes these and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Ja,
    Ko,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::Ja, Self::Ko];

    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::Ko => "ko",
        }
    }

    /// English display name, used when naming the language in prompts.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ja => "Japanese",
            Self::Ko => "Korean",
        }
    }

    /// Native name, used for panel headings.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Ja => "日本語",
            Self::Ko => "한국어",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ja" => Ok(Self::Ja),
            "ko" => Ok(Self::Ko),
            _ => Err(anyhow::anyhow!(
                "Invalid language code: '{s}'\n\n\
                 Valid language codes: ja, ko\n\
                 Run 'koe languages' to see the supported targets."
            )),
        }
    }
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target languages"));
    for lang in Language::ALL {
        println!(
            "  {:5} {} {}",
            Style::code(lang.code()),
            Style::secondary(lang.display_name()),
            Style::secondary(format!("({})", lang.native_name()))
        );
    }
}
