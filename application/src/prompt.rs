use domain::generation::GenerationRequest;
use domain::language::LanguageSelector;
use serde_json::{json, Value};

const PREAMBLE: &str = "You are a senior software architect who coaches developers on working with AI coding assistants. \
Break the coding task below into a short sequence of phases that can each be completed and verified on their own. \
For every phase give a concise title, the prompting strategy the developer should use with the AI assistant, \
and the main risk or failure mode to watch for.";

pub fn language_directive(language: LanguageSelector) -> &'static str {
    match language {
        LanguageSelector::En => "Respond in English.",
        LanguageSelector::Zh => "Respond in Simplified Chinese (简体中文).",
    }
}

/// Instruction text sent to the generation service.
pub fn build_instruction(task: &str, language: LanguageSelector) -> String {
    format!(
        "{}\n\nTask: \"{}\"\n\n{}\nReturn a JSON object with a `steps` array; each step has `title`, `promptStrategy` and `risk`.",
        PREAMBLE,
        task,
        language_directive(language)
    )
}

/// `{ steps: [{ title, promptStrategy, risk }] }`, every field required.
pub fn plan_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "steps": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "promptStrategy": { "type": "STRING" },
                        "risk": { "type": "STRING" }
                    },
                    "required": ["title", "promptStrategy", "risk"],
                    "propertyOrdering": ["title", "promptStrategy", "risk"]
                }
            }
        },
        "required": ["steps"]
    })
}

pub fn build_request(model: &str, task: &str, language: LanguageSelector) -> GenerationRequest {
    GenerationRequest {
        model: model.to_string(),
        instruction: build_instruction(task, language),
        response_schema: plan_response_schema(),
    }
}
