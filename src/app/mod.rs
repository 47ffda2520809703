use crate::config::QuizConfig;
use crate::controller::QuizController;
use crate::data::LoadError;
use crate::model::{AppState, Question, QuestionKind, Submission};
use crate::nav::NavToggle;
use crate::storage::{KeyValueStore, PlatformStore};
use crate::theme::ThemeToggle;
use crate::view_models::UiState;
use std::collections::{BTreeSet, HashMap};
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod loading;
pub mod resets;

/// Mensaje fijo cuando no se pueden cargar las preguntas
pub const LOAD_ERROR_MESSAGE: &str = "Error al cargar el quiz. Inténtalo de nuevo.";

type LoadResult = Result<Vec<Question>, LoadError>;

/// Lo que el usuario tiene marcado en un formulario antes de enviarlo
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    pub selected: Option<String>,  // radio / select
    pub checked: BTreeSet<String>, // checkboxes
}

impl FormInput {
    pub fn to_submission(&self, kind: QuestionKind) -> Submission {
        match kind {
            QuestionKind::SingleChoice | QuestionKind::DropdownSingle => {
                Submission::Single(self.selected.clone())
            }
            QuestionKind::MultiChoice => {
                Submission::Multiple(self.checked.iter().cloned().collect())
            }
        }
    }

    pub fn set_checked(&mut self, option: &str, checked: bool) {
        if checked {
            self.checked.insert(option.to_string());
        } else {
            self.checked.remove(option);
        }
    }
}

pub struct QuizApp<S: KeyValueStore + Clone = PlatformStore> {
    pub state: AppState,
    pub quiz: Option<QuizController<S>>,
    pub view: UiState,
    pub inputs: HashMap<String, FormInput>,
    pub nav: NavToggle,
    pub theme: ThemeToggle<S>,
    pub confirm_reset: bool,
    pending_load: Option<Receiver<LoadResult>>,
    store: S,
}

impl QuizApp {
    /// Punto de entrada de eframe
    pub fn new(cc: &eframe::CreationContext<'_>, config: QuizConfig) -> Self {
        let app = Self::with_store(&config, platform_store(&config));
        app.theme.apply(&cc.egui_ctx);
        app
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_store(config: &QuizConfig) -> PlatformStore {
    log::info!("Guardando progreso en {:?}", config.storage_path);
    PlatformStore::new(config.storage_path.clone())
}

#[cfg(target_arch = "wasm32")]
fn platform_store(_config: &QuizConfig) -> PlatformStore {
    PlatformStore::default()
}

impl<S: KeyValueStore + Clone> QuizApp<S> {
    fn empty(store: S) -> Self {
        Self {
            state: AppState::Loading,
            quiz: None,
            view: UiState::default(),
            inputs: HashMap::new(),
            nav: NavToggle::default(),
            theme: ThemeToggle::load(store.clone()),
            confirm_reset: false,
            pending_load: None,
            store,
        }
    }

    /// Crea la app y lanza la carga de preguntas en segundo plano
    pub fn with_store(config: &QuizConfig, store: S) -> Self {
        let mut app = Self::empty(store);
        app.start_loading(config.questions.clone());
        app
    }

    /// App ya lista con un banco conocido
    pub fn from_questions(questions: Vec<Question>, store: S) -> Self {
        let mut app = Self::empty(store);
        app.finish_loading(questions);
        app
    }

    pub fn is_ready(&self) -> bool {
        self.state == AppState::Ready
    }

    pub fn input_mut(&mut self, question_id: &str) -> &mut FormInput {
        self.inputs.entry(question_id.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Answer;
    use crate::progress::MAX_ATTEMPTS;
    use crate::storage::MemoryStore;

    fn questions() -> Vec<Question> {
        vec![
            Question {
                id: "q1".into(),
                question: "¿Radio?".into(),
                kind: QuestionKind::SingleChoice,
                options: vec!["a".into(), "b".into()],
                answer: Answer::One("a".into()),
            },
            Question {
                id: "q2".into(),
                question: "¿Checks?".into(),
                kind: QuestionKind::MultiChoice,
                options: vec!["var".into(), "let".into(), "const".into()],
                answer: Answer::Many(vec!["var".into(), "let".into(), "const".into()]),
            },
        ]
    }

    #[test]
    fn form_input_builds_submission_for_kind() {
        let mut input = FormInput::default();
        input.selected = Some("a".into());
        input.set_checked("let", true);
        input.set_checked("var", true);
        input.set_checked("let", false);

        assert_eq!(
            input.to_submission(QuestionKind::DropdownSingle),
            Submission::Single(Some("a".into()))
        );
        assert_eq!(
            input.to_submission(QuestionKind::MultiChoice),
            Submission::Multiple(vec!["var".into()])
        );
    }

    #[test]
    fn submitting_forms_updates_view() {
        let mut app = QuizApp::from_questions(questions(), MemoryStore::new());
        assert!(app.is_ready());

        app.submit_question("q1");
        assert_eq!(app.view.question("q1").map(|q| q.attempts), Some(MAX_ATTEMPTS - 1));

        for option in ["var", "let", "const"] {
            app.input_mut("q2").set_checked(option, true);
        }
        app.submit_question("q2");
        assert!(app.view.question("q2").is_some_and(|q| q.locked));
        assert!(app.view.score.is_none());
    }

    #[test]
    fn confirmed_reset_clears_inputs_and_progress() {
        let mut app = QuizApp::from_questions(questions(), MemoryStore::new());
        app.input_mut("q1").selected = Some("a".into());
        app.submit_question("q1");
        app.request_reset();
        assert!(app.confirm_reset);

        app.reset_progress();
        assert!(!app.confirm_reset);
        assert!(app.inputs.is_empty());
        assert!(app.view.questions.iter().all(|q| !q.locked && q.attempts == MAX_ATTEMPTS));
    }
}
