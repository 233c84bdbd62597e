//! Response schema sent with every screenplay request.

use serde_json::{Value, json};

/// Gemini `responseSchema` describing a screenplay.
///
/// Mirrors the JSON shape of [`masterscript_core::Screenplay`]: optional
/// fields (`writer`, `editingNote`, `parenthetical`) are declared but left out
/// of the `required` lists.
pub fn screenplay_schema() -> Value {
    let character = json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "age": { "type": "INTEGER" },
            "description": { "type": "STRING" },
            "costume": { "type": "STRING" }
        },
        "required": ["name", "age", "description", "costume"]
    });

    let dialogue = json!({
        "type": "OBJECT",
        "properties": {
            "character": { "type": "STRING" },
            "text": { "type": "STRING" },
            "parenthetical": { "type": "STRING" }
        },
        "required": ["character", "text"]
    });

    let scene = json!({
        "type": "OBJECT",
        "properties": {
            "sceneNumber": { "type": "INTEGER" },
            "location": { "type": "STRING" },
            "time": { "type": "STRING" },
            "action": { "type": "STRING" },
            "dialogues": { "type": "ARRAY", "items": dialogue },
            "editingNote": { "type": "STRING" }
        },
        "required": ["sceneNumber", "location", "time", "action", "dialogues"]
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "writer": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "characters": { "type": "ARRAY", "items": character, "minItems": 1 },
            "scenes": { "type": "ARRAY", "items": scene, "minItems": 1 }
        },
        "required": ["title", "summary", "characters", "scenes"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(v: &Value) -> Vec<&str> {
        v["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s.as_str().unwrap())
            .collect()
    }

    #[test]
    fn root_requires_core_fields() {
        let schema = screenplay_schema();
        assert_eq!(required(&schema), ["title", "summary", "characters", "scenes"]);
    }

    #[test]
    fn optional_fields_are_not_required() {
        let schema = screenplay_schema();
        let scene = &schema["properties"]["scenes"]["items"];
        assert!(!required(scene).contains(&"editingNote"));
        let dialogue = &scene["properties"]["dialogues"]["items"];
        assert_eq!(required(dialogue), ["character", "text"]);
    }
}
