//! Core data types for MasterScript.
//!
//! This crate holds the screenplay model shared by the generation client, the
//! renderer, the exporters and the application controller, plus the validated
//! [`Concept`] a generation request starts from.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod concept;
mod screenplay;

pub use concept::Concept;
pub use screenplay::{
    Character, CharacterBuilder, DialogueLine, DialogueLineBuilder, Scene, SceneBuilder,
    Screenplay, ScreenplayBuilder,
};
