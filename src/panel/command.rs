//! Slash command parsing and autocomplete for panel mode.

use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/lang", "Select target language (ja or ko)"),
    ("/replay", "Replay the last audio"),
    ("/close", "Close the result panel"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/quit", "Exit panel mode"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct PanelCommandCompleter;

impl Autocomplete for PanelCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone)]
pub enum PanelCommand {
    Lang(Option<String>),
    Replay,
    Close,
    Config,
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(PanelCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("lang") => Input::Command(PanelCommand::Lang(parts.get(1).map(ToString::to_string))),
        Some("replay") => Input::Command(PanelCommand::Replay),
        Some("close") => Input::Command(PanelCommand::Close),
        Some("config") => Input::Command(PanelCommand::Config),
        Some("help") => Input::Command(PanelCommand::Help),
        Some("quit" | "exit" | "q") => Input::Command(PanelCommand::Quit),
        _ => Input::Command(PanelCommand::Unknown(parts.join(" "))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_input(""), Input::Empty));
        assert!(matches!(parse_input("   "), Input::Empty));
    }

    #[test]
    fn test_parse_text_input() {
        match parse_input("Our enterprise cloud platform.") {
            Input::Text(text) => assert_eq!(text, "Our enterprise cloud platform."),
            _ => panic!("Expected Input::Text"),
        }
    }

    #[test]
    fn test_parse_lang_command_with_code() {
        match parse_input("/lang ko") {
            Input::Command(PanelCommand::Lang(Some(code))) => assert_eq!(code, "ko"),
            _ => panic!("Expected Input::Command(PanelCommand::Lang)"),
        }
    }

    #[test]
    fn test_parse_lang_command_without_code() {
        assert!(matches!(
            parse_input("/lang"),
            Input::Command(PanelCommand::Lang(None))
        ));
    }

    #[test]
    fn test_parse_replay_and_close() {
        assert!(matches!(
            parse_input("/replay"),
            Input::Command(PanelCommand::Replay)
        ));
        assert!(matches!(
            parse_input("/close"),
            Input::Command(PanelCommand::Close)
        ));
    }

    #[test]
    fn test_parse_quit_commands() {
        assert!(matches!(
            parse_input("/quit"),
            Input::Command(PanelCommand::Quit)
        ));
        assert!(matches!(
            parse_input("/exit"),
            Input::Command(PanelCommand::Quit)
        ));
        assert!(matches!(
            parse_input("/q"),
            Input::Command(PanelCommand::Quit)
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        match parse_input("/unknown") {
            Input::Command(PanelCommand::Unknown(cmd)) => assert_eq!(cmd, "unknown"),
            _ => panic!("Expected Input::Command(PanelCommand::Unknown)"),
        }
    }

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = PanelCommandCompleter;
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = PanelCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = PanelCommandCompleter;

        let suggestions = completer.get_suggestions("/l").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/lang"));

        let suggestions = completer.get_suggestions("/re").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/replay"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = PanelCommandCompleter;
        let suggestion = "/replay  Replay the last audio".to_string();
        let completion = completer.get_completion("/re", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/replay".to_string()));
    }
}
