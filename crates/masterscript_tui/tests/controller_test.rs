//! Tests for the application controller state machine.

use async_trait::async_trait;
use masterscript_core::{Character, Concept, DialogueLine, Scene, Screenplay};
use masterscript_error::{
    ExportError, ExportErrorKind, ExportResult, GenerationError, GenerationErrorKind,
    GenerationResult,
};
use masterscript_models::ScreenplayGenerator;
use masterscript_render::export::{ExportConfig, Page, PdfBackend, PdfExporter, PdfOptions};
use masterscript_tui::{
    AppState, Controller, ControllerEvent, FAILURE_MESSAGE, NoticeLevel, TuiConfig,
    VALIDATION_MESSAGE,
};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// Generator that records concepts and replays scripted outcomes.
#[derive(Default)]
struct ScriptedGenerator {
    concepts: Mutex<Vec<String>>,
    outcomes: Mutex<VecDeque<GenerationResult<Screenplay>>>,
    hang: bool,
}

impl ScriptedGenerator {
    fn with(outcomes: Vec<GenerationResult<Screenplay>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            ..Self::default()
        })
    }

    fn hanging() -> Arc<Self> {
        Arc::new(Self {
            hang: true,
            ..Self::default()
        })
    }

    fn concepts(&self) -> Vec<String> {
        self.concepts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScreenplayGenerator for ScriptedGenerator {
    async fn generate(&self, concept: &Concept) -> GenerationResult<Screenplay> {
        self.concepts.lock().unwrap().push(concept.as_str().to_string());
        if self.hang {
            std::future::pending::<()>().await;
        }
        let next = self.outcomes.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(GenerationError::new(GenerationErrorKind::EmptyResponse)))
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

struct FailingBackend;

impl PdfBackend for FailingBackend {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn render(&self, _title: &str, _pages: &[Page], _options: &PdfOptions) -> ExportResult<Vec<u8>> {
        Err(ExportError::new(ExportErrorKind::Backend("renderer threw".to_string())))
    }
}

fn screenplay() -> Screenplay {
    let scene = |n: u32, location: &str| Scene {
        scene_number: n,
        location: location.to_string(),
        time: "সকাল".to_string(),
        action: "ভিড়।".to_string(),
        dialogues: vec![DialogueLine {
            character: "সালাম".to_string(),
            text: "চা দাও!".to_string(),
            parenthetical: None,
        }],
        editing_note: None,
    };
    Screenplay {
        title: "চায়ের দোকান".to_string(),
        writer: "Gemini".to_string(),
        summary: "বাকির খাতা নিয়ে ঝগড়া।".to_string(),
        characters: vec![Character {
            name: "সালাম".to_string(),
            age: 20,
            description: "চটপটে".to_string(),
            costume: "লুঙ্গি".to_string(),
        }],
        scenes: vec![scene(1, "চায়ের দোকান"), scene(2, "নদীর ঘাট")],
    }
}

fn controller_with(
    generator: Arc<dyn ScreenplayGenerator>,
    backend: Arc<dyn PdfBackend>,
    output_dir: &Path,
) -> (Controller, UnboundedReceiver<ControllerEvent>) {
    let export = ExportConfig {
        output_dir: output_dir.to_path_buf(),
        ..ExportConfig::default()
    };
    Controller::new(
        generator,
        PdfExporter::new(backend, export.pdf.clone()),
        export,
        TuiConfig::default(),
    )
}

fn controller(
    generator: Arc<dyn ScreenplayGenerator>,
    output_dir: &Path,
) -> (Controller, UnboundedReceiver<ControllerEvent>) {
    controller_with(generator, Arc::new(FailingBackend), output_dir)
}

/// Feed events to the controller until it leaves `Generating`.
async fn settle(controller: &mut Controller, events: &mut UnboundedReceiver<ControllerEvent>) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while controller.is_generating() {
            let event = events.recv().await.expect("controller channel open");
            controller.handle_event(event);
        }
    })
    .await
    .expect("generation should settle");
}

#[tokio::test]
async fn test_scenario_a_ready_and_text_export() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ScriptedGenerator::with(vec![Ok(screenplay())]);
    let (mut controller, mut events) = controller(generator.clone(), dir.path());

    controller.submit_concept("tea-stall dispute");
    assert!(matches!(controller.state(), AppState::Generating { .. }));
    settle(&mut controller, &mut events).await;

    assert!(matches!(controller.state(), AppState::Ready(_)));
    assert_eq!(generator.concepts(), vec!["tea-stall dispute"]);
    assert!(controller.document().is_some());

    let path = controller.export_text().await.expect("text export");
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.contains("সালাম"));
    let first = text.find("দৃশ্য - 1: চায়ের দোকান").expect("scene 1 header");
    let second = text.find("দৃশ্য - 2: নদীর ঘাট").expect("scene 2 header");
    assert!(first < second);
    assert_eq!(controller.notice().map(|n| n.level), Some(NoticeLevel::Info));
}

#[tokio::test]
async fn test_scenario_b_blank_concept_is_rejected_inline() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ScriptedGenerator::with(vec![]);
    let (mut controller, _events) = controller(generator.clone(), dir.path());

    controller.submit_concept("   ");

    assert_eq!(controller.state(), &AppState::Idle);
    assert_eq!(controller.validation(), Some(VALIDATION_MESSAGE));
    assert!(!controller.ticker_active());
    tokio::task::yield_now().await;
    assert!(generator.concepts().is_empty());
}

#[tokio::test]
async fn test_scenario_c_failure_then_retry_clears_error() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ScriptedGenerator::with(vec![
        Err(GenerationError::new(GenerationErrorKind::Transport(
            "connection reset".to_string(),
        ))),
        Ok(screenplay()),
    ]);
    let (mut controller, mut events) = controller(generator, dir.path());

    controller.submit_concept("flood");
    settle(&mut controller, &mut events).await;
    assert_eq!(
        controller.state(),
        &AppState::Failed(FAILURE_MESSAGE.to_string())
    );

    controller.submit();
    assert!(matches!(controller.state(), AppState::Generating { .. }));
    assert_eq!(controller.validation(), None);

    settle(&mut controller, &mut events).await;
    assert!(matches!(controller.state(), AppState::Ready(_)));
}

#[tokio::test]
async fn test_scenario_d_seeded_surprise_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();

    let first = ScriptedGenerator::hanging();
    let (controller_a, _events_a) = controller(first.clone(), dir.path());
    let mut controller_a = controller_a.with_seed(42);
    controller_a.surprise_me();

    let second = ScriptedGenerator::hanging();
    let (controller_b, _events_b) = controller(second.clone(), dir.path());
    let mut controller_b = controller_b.with_seed(42);
    controller_b.surprise_me();

    assert_eq!(controller_a.concept(), controller_b.concept());
    assert!(
        TuiConfig::default()
            .presets
            .iter()
            .any(|p| p == controller_a.concept())
    );

    tokio::time::timeout(Duration::from_secs(5), async {
        while first.concepts().is_empty() || second.concepts().is_empty() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("both generations should start");
    assert_eq!(first.concepts(), second.concepts());
}

#[tokio::test]
async fn test_scenario_e_pdf_failure_keeps_screenplay() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ScriptedGenerator::with(vec![Ok(screenplay())]);
    let (mut controller, mut events) = controller(generator, dir.path());

    controller.submit_concept("tea-stall dispute");
    settle(&mut controller, &mut events).await;

    controller.export_pdf();
    assert!(controller.exporting());

    let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event, ControllerEvent::PdfExportFinished { .. }));
    controller.handle_event(event);

    assert!(!controller.exporting());
    assert_eq!(controller.notice().map(|n| n.level), Some(NoticeLevel::Error));
    assert!(matches!(controller.state(), AppState::Ready(_)));

    controller.dismiss_notice();
    assert!(controller.export_text().await.is_some());
}

#[tokio::test]
async fn test_stale_result_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ScriptedGenerator::hanging();
    let (mut controller, _events) = controller(generator, dir.path());

    controller.submit_concept("first");
    controller.submit_concept("second");
    assert_eq!(controller.state(), &AppState::Generating { request_id: 2 });

    controller.handle_event(ControllerEvent::GenerationFinished {
        request_id: 1,
        result: Ok(screenplay()),
    });
    assert_eq!(controller.state(), &AppState::Generating { request_id: 2 });

    controller.handle_event(ControllerEvent::GenerationFinished {
        request_id: 2,
        result: Ok(screenplay()),
    });
    assert!(matches!(controller.state(), AppState::Ready(_)));
}

#[tokio::test]
async fn test_result_after_reset_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let (mut controller, _events) = controller(ScriptedGenerator::hanging(), dir.path());

    controller.submit_concept("first");
    controller.reset();
    controller.handle_event(ControllerEvent::GenerationFinished {
        request_id: 1,
        result: Ok(screenplay()),
    });

    assert_eq!(controller.state(), &AppState::Idle);
    assert_eq!(controller.concept(), "");
}

#[tokio::test(start_paused = true)]
async fn test_status_ticker_rotates_and_stops() {
    let dir = tempfile::tempdir().unwrap();
    let (mut controller, mut events) = controller(ScriptedGenerator::hanging(), dir.path());
    let messages = TuiConfig::default().loading_messages;

    controller.submit_concept("flood");
    assert!(controller.ticker_active());
    assert_eq!(controller.status_message(), Some(messages[0].as_str()));

    for expected in [1, 2, 3, 4, 0] {
        let event = events.recv().await.unwrap();
        assert!(matches!(event, ControllerEvent::StatusTick { .. }));
        controller.handle_event(event);
        assert_eq!(controller.status_index(), expected);
    }

    controller.handle_event(ControllerEvent::StatusTick { request_id: 1 });
    assert_eq!(controller.status_index(), 1);

    controller.handle_event(ControllerEvent::GenerationFinished {
        request_id: 1,
        result: Err(GenerationError::new(GenerationErrorKind::EmptyResponse)),
    });
    assert!(!controller.ticker_active());
    assert_eq!(controller.status_index(), 0);
    assert_eq!(controller.status_message(), None);
}

#[tokio::test]
async fn test_exports_are_noops_outside_ready() {
    let dir = tempfile::tempdir().unwrap();
    let (mut controller, _events) = controller(ScriptedGenerator::hanging(), dir.path());

    assert!(controller.export_text().await.is_none());
    controller.export_pdf();
    assert!(!controller.exporting());
    assert!(controller.notice().is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
