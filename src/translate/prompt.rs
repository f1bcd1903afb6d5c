use crate::glossary::Glossary;
use crate::pipeline::Language;

pub const TRANSLATION_PROMPT_TEMPLATE: &str =
    "You are a professional translator. Translate the following product description \
     from English to {target_language}. \
     Preserve the meaning of the original while producing a natural, fluent translation. \
     Translate technical terms precisely. \
     Output only the translation without any explanations or comments.";

/// Builds the system instruction for a translation request.
///
/// Every glossary term contributes a literal substitution directive for the
/// requested language. An empty glossary contributes nothing.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_translation_prompt(language: Language, glossary: &Glossary) -> String {
    // {target_language} is a placeholder for string replacement, not a format argument
    let mut prompt =
        TRANSLATION_PROMPT_TEMPLATE.replace("{target_language}", language.display_name());

    if !glossary.is_empty() {
        prompt.push_str("\nTranslate the following terms exactly:\n");
        for term in &glossary.terms {
            prompt.push_str(&format!(
                "- Translate \"{}\" as \"{}\".\n",
                term.term,
                term.translation_for(language)
            ));
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_target_language() {
        let prompt = build_translation_prompt(Language::Ja, &Glossary::default());
        assert!(prompt.contains("Japanese"));
        assert!(prompt.contains("professional translator"));

        let prompt = build_translation_prompt(Language::Ko, &Glossary::default());
        assert!(prompt.contains("Korean"));
    }

    #[test]
    fn test_prompt_template_has_placeholder() {
        assert!(TRANSLATION_PROMPT_TEMPLATE.contains("{target_language}"));
    }

    #[test]
    fn test_empty_glossary_adds_no_directives() {
        let prompt = build_translation_prompt(Language::Ja, &Glossary::default());
        assert!(!prompt.contains("Translate the following terms exactly"));
    }

    #[test]
    fn test_glossary_terms_become_directives() {
        let glossary = Glossary::load();
        let prompt = build_translation_prompt(Language::Ko, &glossary);

        assert!(prompt.contains("Translate the following terms exactly"));
        assert!(prompt.contains("- Translate \"cloud computing\" as \"클라우드 컴퓨팅\"."));
        // One directive per term
        let directives = prompt.matches("- Translate \"").count();
        assert_eq!(directives, glossary.len());
    }
}
