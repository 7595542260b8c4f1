//! Prompts sent to the language model.

pub const SYSTEM_MESSAGE: &str = "You are a recipe ingredient parser. Return valid JSON only.";

/// Prompt for a single line.
pub fn single_prompt(line: &str) -> String {
    format!(
        "Parse: {line:?}\n\n\
         Return: {{\"quantity\": number|null, \"unit\": string|null, \"name\": string, \"modifiers\": string|null}}"
    )
}

/// Prompt for a numbered list of lines; the model answers with a JSON array
/// in the same order.
pub fn batch_prompt(lines: &[String]) -> String {
    let numbered = lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Parse to JSON array (quantity=num|null, unit=str|null, name=str, modifiers=str|null):\n\n\
         {numbered}\n\n\
         Output ONLY: [{{\"quantity\":...,\"unit\":...,\"name\":...,\"modifiers\":...}},...]"
    )
}
