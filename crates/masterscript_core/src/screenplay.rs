//! Screenplay model returned by the generation service.

use derive_builder::Builder;
use masterscript_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A complete generated screenplay.
///
/// Values are produced atomically by the generation client and never mutated
/// afterwards; the controller swaps the whole value on every new generation.
///
/// # Examples
///
/// ```
/// use masterscript_core::{CharacterBuilder, SceneBuilder, ScreenplayBuilder};
///
/// let screenplay = ScreenplayBuilder::default()
///     .title("চায়ের দোকান")
///     .summary("A quarrel over credit at the village tea stall.")
///     .characters(vec![CharacterBuilder::default()
///         .name("সালাম")
///         .age(20u32)
///         .description("quick-witted")
///         .costume("lungi and checked shirt")
///         .build()
///         .unwrap()])
///     .scenes(vec![SceneBuilder::default()
///         .scene_number(1u32)
///         .location("tea stall")
///         .time("morning")
///         .action("Salam counts coins.")
///         .build()
///         .unwrap()])
///     .build()
///     .unwrap();
///
/// assert!(screenplay.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct Screenplay {
    /// Screenplay title
    pub title: String,
    /// Attribution line as returned by the service
    #[builder(default)]
    #[serde(default)]
    pub writer: String,
    /// Short synopsis
    pub summary: String,
    /// Cast roster in presentation order
    #[builder(default)]
    pub characters: Vec<Character>,
    /// Scenes in screenplay order
    #[builder(default)]
    pub scenes: Vec<Scene>,
}

/// A member of the cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Display name, unique within the screenplay
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Personality and role
    #[builder(default)]
    pub description: String,
    /// Wardrobe note
    #[builder(default)]
    pub costume: String,
}

/// One numbered scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Position in the screenplay, starting at 1
    pub scene_number: u32,
    /// Where the scene takes place
    pub location: String,
    /// Time-of-day label
    #[builder(default)]
    pub time: String,
    /// Staged action
    #[builder(default)]
    pub action: String,
    /// Spoken lines in order
    #[builder(default)]
    pub dialogues: Vec<DialogueLine>,
    /// Production or editing annotation
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing_note: Option<String>,
}

/// A single spoken line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct DialogueLine {
    /// Speaker, expected to match a roster name
    pub character: String,
    /// The line itself
    pub text: String,
    /// Delivery cue
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parenthetical: Option<String>,
}

impl Scene {
    /// Editing note, treating a blank note as absent.
    pub fn note(&self) -> Option<&str> {
        non_blank(self.editing_note.as_deref())
    }
}

impl DialogueLine {
    /// Delivery cue, treating a blank cue as absent.
    pub fn cue(&self) -> Option<&str> {
        non_blank(self.parenthetical.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl Screenplay {
    /// Check the invariants a well-formed service payload must satisfy.
    ///
    /// Returns the first violation found. Renderers and exporters do not call
    /// this; they accept any value, including empty rosters.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fail = |kind| Err(ValidationError::new(kind));
        let empty = |field: &str| ValidationErrorKind::EmptyField(field.to_string());

        if self.title.trim().is_empty() {
            return fail(empty("title"));
        }
        if self.summary.trim().is_empty() {
            return fail(empty("summary"));
        }
        if self.characters.is_empty() {
            return fail(ValidationErrorKind::NoCharacters);
        }
        if self.scenes.is_empty() {
            return fail(ValidationErrorKind::NoScenes);
        }

        let mut seen = HashSet::new();
        for (i, character) in self.characters.iter().enumerate() {
            let name = character.name.trim();
            if name.is_empty() {
                return fail(empty(&format!("characters[{i}].name")));
            }
            if !seen.insert(name) {
                return fail(ValidationErrorKind::DuplicateCharacter(name.to_string()));
            }
        }

        for (i, scene) in self.scenes.iter().enumerate() {
            if scene.scene_number == 0 {
                return fail(ValidationErrorKind::NonPositiveSceneNumber {
                    index: i,
                    number: scene.scene_number,
                });
            }
            if scene.location.trim().is_empty() {
                return fail(empty(&format!("scenes[{i}].location")));
            }
            for (j, line) in scene.dialogues.iter().enumerate() {
                if line.text.trim().is_empty() {
                    return fail(empty(&format!("scenes[{i}].dialogues[{j}].text")));
                }
            }
        }

        Ok(())
    }

    /// Speakers that appear in dialogue but not in the roster, in first-seen order.
    pub fn unknown_speakers(&self) -> Vec<&str> {
        let roster: HashSet<&str> = self.characters.iter().map(|c| c.name.trim()).collect();
        let mut unknown: Vec<&str> = Vec::new();
        for line in self.scenes.iter().flat_map(|s| &s.dialogues) {
            let speaker = line.character.trim();
            if !roster.contains(speaker) && !unknown.contains(&speaker) {
                unknown.push(speaker);
            }
        }
        unknown
    }

    /// Total number of dialogue lines across all scenes.
    pub fn dialogue_count(&self) -> usize {
        self.scenes.iter().map(|s| s.dialogues.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(character: &str, text: &str) -> DialogueLine {
        DialogueLineBuilder::default()
            .character(character)
            .text(text)
            .build()
            .unwrap()
    }

    fn sample() -> Screenplay {
        ScreenplayBuilder::default()
            .title("Title")
            .summary("Summary")
            .characters(vec![
                CharacterBuilder::default().name("Salam").age(20u32).build().unwrap(),
                CharacterBuilder::default().name("Tushi").age(20u32).build().unwrap(),
            ])
            .scenes(vec![SceneBuilder::default()
                .scene_number(1u32)
                .location("Field")
                .dialogues(vec![line("Salam", "Hello"), line("Tushar", "Why?")])
                .build()
                .unwrap()])
            .build()
            .unwrap()
    }

    #[test]
    fn valid_sample_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut s = sample();
        s.characters[1].name = " Salam ".to_string();
        let err = s.validate().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::DuplicateCharacter("Salam".into()));
    }

    #[test]
    fn zero_scene_number_rejected() {
        let mut s = sample();
        s.scenes[0].scene_number = 0;
        assert!(matches!(
            s.validate().unwrap_err().kind,
            ValidationErrorKind::NonPositiveSceneNumber { index: 0, number: 0 }
        ));
    }

    #[test]
    fn empty_collections_rejected() {
        let mut s = sample();
        s.scenes.clear();
        assert_eq!(s.validate().unwrap_err().kind, ValidationErrorKind::NoScenes);
        s.characters.clear();
        assert_eq!(s.validate().unwrap_err().kind, ValidationErrorKind::NoCharacters);
    }

    #[test]
    fn blank_dialogue_text_rejected() {
        let mut s = sample();
        s.scenes[0].dialogues[0].text = "  ".into();
        assert_eq!(
            s.validate().unwrap_err().kind,
            ValidationErrorKind::EmptyField("scenes[0].dialogues[0].text".into())
        );
    }

    #[test]
    fn unknown_speakers_listed_once() {
        let mut s = sample();
        s.scenes[0].dialogues.push(line("Tushar", "Give rice"));
        assert_eq!(s.unknown_speakers(), vec!["Tushar"]);
        assert_eq!(s.dialogue_count(), 3);
    }

    #[test]
    fn blank_optional_text_is_absent() {
        let mut s = sample();
        s.scenes[0].editing_note = Some("   ".into());
        s.scenes[0].dialogues[0].parenthetical = Some(String::new());
        assert_eq!(s.scenes[0].note(), None);
        assert_eq!(s.scenes[0].dialogues[0].cue(), None);
    }
}
