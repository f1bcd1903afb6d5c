//! Panel text rendering.

use std::fmt::Write as _;

use super::PanelState;
use crate::pipeline::Language;
use crate::ui::Style;

const fn heading(language: Language) -> &'static str {
    match language {
        Language::Ja => "翻訳と要約",
        Language::Ko => "번역 및 요약",
    }
}

const fn translation_label(language: Language) -> &'static str {
    match language {
        Language::Ja => "翻訳:",
        Language::Ko => "번역:",
    }
}

const fn summary_label(language: Language) -> &'static str {
    match language {
        Language::Ja => "5行要約:",
        Language::Ko => "5줄 요약:",
    }
}

/// Renders the panel for the current state.
///
/// Visibility is driven by the open flag alone: a closed panel renders as
/// nothing, even when results are cached. An error run renders only the
/// error message, never partial results.
pub fn render(state: &PanelState) -> String {
    if !state.open {
        return String::new();
    }

    let mut out = String::new();
    let lang = state.language;

    let _ = writeln!(out, "{}", Style::header(heading(lang)));
    let _ = writeln!(out);

    if state.loading {
        let _ = writeln!(out, "{}", Style::secondary("..."));
        return out;
    }

    if let Some(error) = &state.error {
        let _ = writeln!(out, "{} {error}", Style::error("Error:"));
        return out;
    }

    if let Some(translation) = &state.translation {
        let _ = writeln!(out, "{}", Style::label(translation_label(lang)));
        let _ = writeln!(out, "{}", translation.translated_text);
        let _ = writeln!(out);
    }

    if let Some(summary) = &state.summary {
        let _ = writeln!(out, "{}", Style::label(summary_label(lang)));
        for point in &summary.points {
            let _ = writeln!(out, "  - {point}");
        }
        let _ = writeln!(out);
    }

    if let Some(audio) = &state.audio {
        let _ = writeln!(
            out,
            "{} {} {}",
            Style::label("audio:"),
            Style::secondary(audio.path().display().to_string()),
            Style::secondary(format!("({:.1} KB)", audio.len() as f64 / 1024.0))
        );
    }

    out
}
