//! Shared screenplay fixtures.

#![allow(dead_code)]

use masterscript_core::{Character, DialogueLine, Scene, Screenplay};

pub fn dialogue(character: &str, text: &str, cue: Option<&str>) -> DialogueLine {
    DialogueLine {
        character: character.to_string(),
        text: text.to_string(),
        parenthetical: cue.map(str::to_string),
    }
}

pub fn scene(number: u32, location: &str, dialogues: Vec<DialogueLine>, note: Option<&str>) -> Scene {
    Scene {
        scene_number: number,
        location: location.to_string(),
        time: "সকাল".to_string(),
        action: format!("{location} action"),
        dialogues,
        editing_note: note.map(str::to_string),
    }
}

pub fn tea_stall() -> Screenplay {
    Screenplay {
        title: "চায়ের দোকানে বাকি".to_string(),
        writer: "Gemini".to_string(),
        summary: "বাকির খাতা নিয়ে হাসির ঝগড়া।".to_string(),
        characters: vec![
            Character {
                name: "সালাম".to_string(),
                age: 20,
                description: "চটপটে".to_string(),
                costume: "লুঙ্গি".to_string(),
            },
            Character {
                name: "তুষি".to_string(),
                age: 18,
                description: "সোজাসাপ্টা".to_string(),
                costume: "সালোয়ার কামিজ".to_string(),
            },
        ],
        scenes: vec![
            scene(
                1,
                "চায়ের দোকান",
                vec![
                    dialogue("সালাম", "আজ আর বাকি না!", Some("রেগে")),
                    dialogue("তুষি", "খাতা দেখাও।", None),
                ],
                Some("ক্লোজ-আপ"),
            ),
            scene(2, "নদীর ঘাট", vec![], None),
        ],
    }
}

/// Screenplay with enough dialogue to span several PDF pages.
pub fn long_screenplay() -> Screenplay {
    let mut screenplay = tea_stall();
    screenplay.scenes = (1..=12)
        .map(|n| {
            let lines = (0..8)
                .map(|i| {
                    dialogue(
                        "সালাম",
                        &format!("line {i} of scene {n} with enough words to wrap across the page width at least once"),
                        Some("cue"),
                    )
                })
                .collect();
            scene(n, "মাঠ", lines, Some("note"))
        })
        .collect();
    screenplay
}
