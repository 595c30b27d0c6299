//! Prompts and sampling settings for the two generation actions.

use crate::criteria::SuggestionCriteria;
use crate::suggestion::SUGGESTION_COUNT;

pub const MEANING_SYSTEM_PROMPT: &str = "You are a creative name expert that provides unique and interesting meanings and origins of names. \
Always strive to give fresh, insightful perspectives on names.";

pub const SUGGESTION_SYSTEM_PROMPT: &str = "You are a creative baby name expert specializing in unique and meaningful names from all cultures. \
For each request, generate completely new and different names, never repeating previous suggestions. \
Focus on originality while ensuring the names are beautiful and meaningful. \
Avoid common or overused names unless specifically requested.";

pub const MEANING_TEMPERATURE: f32 = 0.9;
pub const MEANING_MAX_TOKENS: u32 = 150;
pub const SUGGESTION_TEMPERATURE: f32 = 0.95;
pub const SUGGESTION_MAX_TOKENS: u32 = 800;

/// A system/user message pair plus sampling settings, ready for a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Meaning lookup for a single name.
pub fn meaning_request(name: &str) -> CompletionRequest {
    CompletionRequest {
        system: MEANING_SYSTEM_PROMPT.to_string(),
        user: format!(
            "What is the meaning and origin of the name \"{}\"? Please provide a concise response.",
            name.trim()
        ),
        temperature: MEANING_TEMPERATURE,
        max_tokens: MEANING_MAX_TOKENS,
    }
}

/// Three-candidate suggestion request.
pub fn suggestion_request(criteria: &SuggestionCriteria) -> CompletionRequest {
    CompletionRequest {
        system: SUGGESTION_SYSTEM_PROMPT.to_string(),
        user: suggestion_prompt(criteria),
        temperature: SUGGESTION_TEMPERATURE,
        max_tokens: SUGGESTION_MAX_TOKENS,
    }
}

/// Priority order: gender, heritage, meanings, then the optional preferences.
pub fn suggestion_prompt(criteria: &SuggestionCriteria) -> String {
    let mut preferences = Vec::new();
    if let Some(length) = criteria.length {
        preferences.push(format!("   - Length: {} name preferred", length));
    }
    if let Some(letter) = criteria.first_letter {
        preferences.push(format!("   - Should start with: {}", letter));
    }
    if let Some(popularity) = criteria.popularity {
        preferences.push(format!("   - Popularity level: {}", popularity));
    }
    let preferences = if preferences.is_empty() {
        "   - None".to_string()
    } else {
        preferences.join("\n")
    };

    format!(
        "You are a specialized baby name expert. Generate THREE COMPLETELY UNIQUE AND CREATIVE baby names following these criteria in strict order of priority. Never repeat previously suggested names and aim for originality with each suggestion:

1. GENDER (HIGHEST PRIORITY):
   - Must be a {gender} name
   - This is the most important criterion and must be strictly followed

2. HERITAGE/ORIGIN (SECOND PRIORITY):
   - Must come from one of these cultures: {heritage}
   - The name should have a genuine connection to the selected heritage(s)
   - Be creative and consider unique or lesser-known names from these cultures
   - Include the name written in its original script (if applicable)

3. MEANING (THIRD PRIORITY):
   - Must embody one or more of these meanings: {meanings}
   - Explain specifically how the name reflects these meanings
   - Look for unique interpretations and connections

4. ADDITIONAL PREFERENCES (LOWER PRIORITY):
{preferences}

Each suggestion must be completely unique and not commonly used. Focus on creative, meaningful names that might be overlooked but perfectly match the criteria.

Respond with exactly {count} names in this format:

{template}",
        gender = criteria.gender,
        heritage = or_list(&criteria.heritage),
        meanings = or_list(&criteria.meanings),
        preferences = preferences,
        count = SUGGESTION_COUNT,
        template = reply_template(),
    )
}

fn or_list(tags: &[String]) -> String {
    if tags.is_empty() {
        "any".to_string()
    } else {
        tags.join(" or ")
    }
}

fn reply_template() -> String {
    const ORDINALS: [&str; SUGGESTION_COUNT] = ["first", "second", "third"];
    ORDINALS
        .iter()
        .enumerate()
        .map(|(idx, ordinal)| {
            let i = idx + 1;
            format!(
                "NAME{i}: [{ordinal} name]
ORIGINAL_SCRIPT{i}: [name in original script if applicable]
ORIGIN{i}: [specific cultural origin]
MEANING{i}: [specific meaning and how it relates to requested meanings]
EXPLANATION{i}: [why this name fits all criteria]"
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{Gender, LengthPreference, Popularity};
    use crate::suggestion::parse_suggestions;

    #[test]
    fn meaning_request_quotes_name() {
        let req = meaning_request(" Sofia ");
        assert!(req.user.contains("\"Sofia\""));
        assert_eq!(req.max_tokens, 150);
        assert_eq!(req.system, MEANING_SYSTEM_PROMPT);
    }

    #[test]
    fn suggestion_prompt_orders_criteria_by_priority() {
        let c = SuggestionCriteria::new(Gender::Girl)
            .with_heritage(["greek", "roman"])
            .with_meanings(["strength"]);
        let p = suggestion_prompt(&c);
        let gender = p.find("Must be a girl name").unwrap();
        let heritage = p.find("greek or roman").unwrap();
        let meanings = p.find("these meanings: strength").unwrap();
        let prefs = p.find("ADDITIONAL PREFERENCES").unwrap();
        assert!(gender < heritage && heritage < meanings && meanings < prefs);
        assert!(!p.contains("Should start with"));
        assert!(!p.contains("Popularity level"));
    }

    #[test]
    fn optional_preferences_are_listed_when_set() {
        let c = SuggestionCriteria::new(Gender::Boy)
            .with_length(LengthPreference::Long)
            .with_first_letter('k')
            .with_popularity(Popularity::Moderate);
        let p = suggestion_prompt(&c);
        assert!(p.contains("- Length: long name preferred"));
        assert!(p.contains("- Should start with: K"));
        assert!(p.contains("- Popularity level: moderate"));
    }

    #[test]
    fn template_carries_every_marker() {
        let p = suggestion_prompt(&SuggestionCriteria::new(Gender::Neutral));
        for i in 1..=3 {
            for m in ["NAME", "ORIGINAL_SCRIPT", "ORIGIN", "MEANING", "EXPLANATION"] {
                assert!(p.contains(&format!("{}{}:", m, i)), "missing {}{}", m, i);
            }
        }
        // The template itself parses as three placeholder records.
        assert_eq!(parse_suggestions(&reply_template()).len(), 3);
    }

    #[test]
    fn suggestion_request_uses_suggestion_settings() {
        let req = suggestion_request(&SuggestionCriteria::new(Gender::Girl));
        assert_eq!(req.system, SUGGESTION_SYSTEM_PROMPT);
        assert_eq!(req.max_tokens, SUGGESTION_MAX_TOKENS);
        assert!((req.temperature - 0.95).abs() < f32::EPSILON);
    }
}
