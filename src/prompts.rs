//! Prompt construction for the AI pipeline.
//!
//! Builds deterministic, human-readable instruction blocks from form fields.
//! Missing values are expected to have been normalized to the
//! `[MISSING_DATA]` sentinel by the caller; entries that are genuinely absent
//! or empty are omitted from the prompt entirely.

/// Supported UI languages mapped to the name the model is addressed with.
const LANG_MAP: &[(&str, &str)] = &[("en", "English"), ("az", "Azerbaijani"), ("ru", "Russian")];

const DEFAULT_LANGUAGE: &str = "English";

/// Resolves a two-letter UI language code to a language name,
/// falling back to English for unrecognized codes.
pub fn language_name(lang: &str) -> &'static str {
    LANG_MAP
        .iter()
        .find(|(code, _)| *code == lang)
        .map(|(_, name)| *name)
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Standard instructions for handling missing or unclear data in AI
/// responses. Included in every system prompt so the model degrades to the
/// sentinel tokens the sanitizer knows how to replace.
pub const MISSING_DATA_RULES: &str = r#"
MISSING DATA HANDLING:
- If you cannot determine a value, use EXACTLY one of these placeholders:
  * "[MISSING_DATA]" - when required info was not provided by the user
  * "[COULD_NOT_DETERMINE]" - when the data could not be reasonably estimated
- NEVER invent fake data. Prefer omitting optional fields or using the placeholders above.
- For optional arrays/lists: return an empty array [] if no relevant items exist.
- Keep responses concise and visual-friendly; avoid walls of text."#;

/// A form-field value as it appears in a prompt entry.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptValue {
    Text(String),
    Number(i64),
    List(Vec<String>),
}

impl PromptValue {
    fn render(&self) -> String {
        match self {
            PromptValue::Text(s) => s.clone(),
            PromptValue::Number(n) => n.to_string(),
            PromptValue::List(items) => items.join(", "),
        }
    }

    /// Entries carrying an empty string are treated the same as absent ones.
    fn is_empty(&self) -> bool {
        matches!(self, PromptValue::Text(s) if s.is_empty())
    }
}

impl From<&str> for PromptValue {
    fn from(s: &str) -> Self {
        PromptValue::Text(s.to_string())
    }
}

impl From<String> for PromptValue {
    fn from(s: String) -> Self {
        PromptValue::Text(s)
    }
}

/// Builds a structured user prompt with clear key-value pairs for the AI.
///
/// Entry order is preserved; absent and empty-string entries are omitted.
pub fn build_structured_prompt(
    entries: &[(&str, Option<PromptValue>)],
    language: &str,
) -> String {
    let lines: Vec<String> = entries
        .iter()
        .filter_map(|(label, value)| match value {
            Some(v) if !v.is_empty() => Some(format!("- {}: {}", label, v.render())),
            _ => None,
        })
        .collect();

    format!(
        "\nUSER INPUT:\n{}\n\nLANGUAGE: Respond entirely in {}.",
        lines.join("\n"),
        language_name(language)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_absent_and_empty_entries() {
        let entries = [
            ("A", Some(PromptValue::from("x"))),
            ("B", None),
            ("C", Some(PromptValue::from(""))),
            (
                "D",
                Some(PromptValue::List(vec!["p".to_string(), "q".to_string()])),
            ),
        ];
        let prompt = build_structured_prompt(&entries, "en");

        assert!(prompt.contains("- A: x"));
        assert!(!prompt.contains("- B"));
        assert!(!prompt.contains("- C"));
        assert!(prompt.contains("- D: p, q"));
    }

    #[test]
    fn empty_entry_list_still_emits_language_directive() {
        let prompt = build_structured_prompt(&[], "ru");
        assert!(prompt.contains("Respond entirely in Russian."));
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(language_name("xx"), "English");
        assert_eq!(language_name(""), "English");
        assert_eq!(language_name("az"), "Azerbaijani");
    }

    #[test]
    fn numbers_render_without_decoration() {
        let entries = [("Travelers", Some(PromptValue::Number(3)))];
        let prompt = build_structured_prompt(&entries, "en");
        assert!(prompt.contains("- Travelers: 3"));
    }
}
