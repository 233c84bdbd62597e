//! Application state machine.

use masterscript_core::{Concept, Screenplay};
use masterscript_error::{ExportResult, GenerationResult};
use masterscript_models::ScreenplayGenerator;
use masterscript_render::export::{ExportConfig, PdfExporter, write_text};
use masterscript_render::{Document, render};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use crate::TuiConfig;

/// Shown when a concept is blank.
pub const VALIDATION_MESSAGE: &str = "একটি কনসেপ্ট দিন অথবা ম্যাজিক বাটন চাপুন";

/// Shown when generation fails, whatever the cause.
pub const FAILURE_MESSAGE: &str = "স্ক্রিপ্ট তৈরি করতে সমস্যা হয়েছে। দয়া করে আবার চেষ্টা করুন।";

const PDF_FAILURE_MESSAGE: &str = "পিডিএফ তৈরিতে সমস্যা হয়েছে।";
const TEXT_FAILURE_MESSAGE: &str = "টেক্সট ফাইল তৈরিতে সমস্যা হয়েছে।";

/// Where the application is in the generate/review cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Waiting for the generation with this id
    Generating {
        /// Id of the in-flight request
        request_id: u64,
    },
    /// A screenplay is available
    Ready(Arc<Screenplay>),
    /// The last generation failed; carries the message shown to the user
    Failed(String),
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Confirmation, e.g. a file was written
    Info,
    /// Something went wrong
    Error,
}

/// Modal message that stays up until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Text shown to the user
    pub message: String,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Completion messages from tasks spawned by the controller.
#[derive(Debug)]
pub enum ControllerEvent {
    /// A generation request finished
    GenerationFinished {
        /// Id the request was started with
        request_id: u64,
        /// Outcome
        result: GenerationResult<Screenplay>,
    },
    /// The status ticker of a generation fired
    StatusTick {
        /// Id of the generation the ticker belongs to
        request_id: u64,
    },
    /// A PDF export finished
    PdfExportFinished {
        /// Written file or the failure
        result: ExportResult<PathBuf>,
    },
}

/// Owns the application state and performs every transition.
pub struct Controller {
    generator: Arc<dyn ScreenplayGenerator>,
    exporter: PdfExporter,
    export: ExportConfig,
    settings: TuiConfig,
    rng: StdRng,
    events: UnboundedSender<ControllerEvent>,

    state: AppState,
    concept: String,
    validation: Option<String>,
    notice: Option<Notice>,
    document: Option<Document>,
    exporting: bool,
    status_index: usize,
    last_request_id: u64,
    ticker: Option<JoinHandle<()>>,
    scroll: u16,
    should_quit: bool,
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("model", &self.generator.model_name())
            .field("state", &self.state)
            .field("exporting", &self.exporting)
            .field("status_index", &self.status_index)
            .finish_non_exhaustive()
    }
}

impl Controller {
    /// Create a controller and the receiver its tasks report to.
    ///
    /// The caller must pass every received event back to
    /// [`Controller::handle_event`].
    pub fn new(
        generator: Arc<dyn ScreenplayGenerator>,
        exporter: PdfExporter,
        export: ExportConfig,
        settings: TuiConfig,
    ) -> (Self, UnboundedReceiver<ControllerEvent>) {
        let (events, receiver) = unbounded_channel();
        let controller = Self {
            generator,
            exporter,
            export,
            settings,
            rng: StdRng::from_entropy(),
            events,
            state: AppState::Idle,
            concept: String::new(),
            validation: None,
            notice: None,
            document: None,
            exporting: false,
            status_index: 0,
            last_request_id: 0,
            ticker: None,
            scroll: 0,
            should_quit: false,
        };
        (controller, receiver)
    }

    /// Replace the preset picker's random source with a seeded one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Concept being edited.
    pub fn concept(&self) -> &str {
        &self.concept
    }

    /// Inline validation message, if the last submission was blank.
    pub fn validation(&self) -> Option<&str> {
        self.validation.as_deref()
    }

    /// Notice awaiting dismissal.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Rendered document of the ready screenplay.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Ready screenplay.
    pub fn screenplay(&self) -> Option<&Arc<Screenplay>> {
        match &self.state {
            AppState::Ready(screenplay) => Some(screenplay),
            _ => None,
        }
    }

    /// True while a PDF export is running.
    pub fn exporting(&self) -> bool {
        self.exporting
    }

    /// True while a generation is in flight.
    pub fn is_generating(&self) -> bool {
        matches!(self.state, AppState::Generating { .. })
    }

    /// Position in the loading-message rotation.
    pub fn status_index(&self) -> usize {
        self.status_index
    }

    /// Loading message for the current rotation step while generating.
    pub fn status_message(&self) -> Option<&str> {
        if !self.is_generating() {
            return None;
        }
        self.settings
            .loading_messages
            .get(self.status_index)
            .map(String::as_str)
    }

    /// True while the status ticker task is alive.
    pub fn ticker_active(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Vertical scroll offset of the screenplay view.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Settings the controller was built with.
    pub fn settings(&self) -> &TuiConfig {
        &self.settings
    }

    /// Replace the concept buffer.
    pub fn set_concept(&mut self, concept: impl Into<String>) {
        self.concept = concept.into();
    }

    /// Append a typed character to the concept.
    pub fn push_char(&mut self, c: char) {
        self.concept.push(c);
    }

    /// Remove the last character of the concept.
    pub fn pop_char(&mut self) {
        self.concept.pop();
    }

    /// Scroll the screenplay view up.
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Scroll the screenplay view down.
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    /// Close the current notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Ask the event loop to stop.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Submit the concept buffer.
    ///
    /// A blank concept only sets the validation message. Otherwise a new
    /// generation starts, superseding any in flight.
    #[instrument(skip(self), fields(concept_chars = self.concept.chars().count()))]
    pub fn submit(&mut self) {
        let concept = match Concept::parse(&self.concept) {
            Ok(concept) => concept,
            Err(e) => {
                debug!(error = %e, "Rejected blank concept");
                self.validation = Some(VALIDATION_MESSAGE.to_string());
                return;
            }
        };

        self.last_request_id += 1;
        let request_id = self.last_request_id;

        self.stop_ticker();
        self.state = AppState::Generating { request_id };
        self.validation = None;
        self.notice = None;
        self.document = None;
        self.scroll = 0;
        self.start_ticker(request_id);

        info!(request_id, model = self.generator.model_name(), "Generation started");

        let generator = Arc::clone(&self.generator);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = generator.generate(&concept).await;
            if events
                .send(ControllerEvent::GenerationFinished { request_id, result })
                .is_err()
            {
                debug!(request_id, "Controller gone before generation finished");
            }
        });
    }

    /// Replace the concept and submit it.
    pub fn submit_concept(&mut self, concept: impl Into<String>) {
        self.concept = concept.into();
        self.submit();
    }

    /// Pick a preset concept at random and submit it.
    pub fn surprise_me(&mut self) {
        let Some(preset) = self.settings.pick_preset(&mut self.rng).map(str::to_string) else {
            warn!("No concept presets configured");
            return;
        };
        debug!(concept = %preset, "Picked preset concept");
        self.submit_concept(preset);
    }

    /// Write the ready screenplay as a text transcript.
    ///
    /// Does nothing outside `Ready`. The outcome is reported as a notice.
    #[instrument(skip(self))]
    pub async fn export_text(&mut self) -> Option<PathBuf> {
        let screenplay = Arc::clone(self.screenplay()?);
        match write_text(&screenplay, &self.export.output_dir, &self.export.render).await {
            Ok(path) => {
                self.notice = Some(Notice::info(format!(
                    "টেক্সট ফাইল সংরক্ষিত: {}",
                    path.display()
                )));
                Some(path)
            }
            Err(e) => {
                error!(error = %e, "Text export failed");
                self.notice = Some(Notice::error(TEXT_FAILURE_MESSAGE));
                None
            }
        }
    }

    /// Start a PDF export of the ready screenplay.
    ///
    /// Does nothing outside `Ready` or while an export is already running.
    #[instrument(skip(self))]
    pub fn export_pdf(&mut self) {
        if self.exporting {
            debug!("PDF export already running");
            return;
        }
        let Some(document) = self.document.clone() else {
            return;
        };

        self.exporting = true;
        let exporter = self.exporter.clone();
        let dir = self.export.output_dir.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = exporter.export(document, &dir).await;
            if events
                .send(ControllerEvent::PdfExportFinished { result })
                .is_err()
            {
                debug!("Controller gone before PDF export finished");
            }
        });
    }

    /// Return to `Idle`, clearing the concept and any messages.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.stop_ticker();
        self.state = AppState::Idle;
        self.concept.clear();
        self.validation = None;
        self.notice = None;
        self.document = None;
        self.scroll = 0;
        debug!("Controller reset");
    }

    /// Apply a completion event from a spawned task.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::GenerationFinished { request_id, result } => {
                if self.state != (AppState::Generating { request_id }) {
                    debug!(request_id, "Dropping stale generation result");
                    return;
                }
                self.stop_ticker();
                match result {
                    Ok(screenplay) => {
                        info!(
                            request_id,
                            title = %screenplay.title,
                            scenes = screenplay.scenes.len(),
                            "Screenplay ready"
                        );
                        self.document = Some(render(&screenplay, &self.export.render));
                        self.state = AppState::Ready(Arc::new(screenplay));
                    }
                    Err(e) => {
                        error!(request_id, error = %e, "Generation failed");
                        self.state = AppState::Failed(FAILURE_MESSAGE.to_string());
                    }
                }
            }
            ControllerEvent::StatusTick { request_id } => {
                if self.state != (AppState::Generating { request_id }) {
                    return;
                }
                let count = self.settings.loading_messages.len();
                if count > 0 {
                    self.status_index = (self.status_index + 1) % count;
                }
            }
            ControllerEvent::PdfExportFinished { result } => {
                self.exporting = false;
                match result {
                    Ok(path) => {
                        self.notice = Some(Notice::info(format!(
                            "পিডিএফ সংরক্ষিত: {}",
                            path.display()
                        )));
                    }
                    Err(e) => {
                        error!(error = %e, "PDF export failed");
                        self.notice = Some(Notice::error(PDF_FAILURE_MESSAGE));
                    }
                }
            }
        }
    }

    fn start_ticker(&mut self, request_id: u64) {
        let period = Duration::from_millis(self.settings.status_interval_ms.max(1));
        let events = self.events.clone();
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if events
                    .send(ControllerEvent::StatusTick { request_id })
                    .is_err()
                {
                    break;
                }
            }
        }));
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        self.status_index = 0;
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}
