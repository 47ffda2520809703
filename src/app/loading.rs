use super::*;
use crate::data::{QuestionSource, load_questions};
use std::sync::mpsc::{self, TryRecvError};

impl<S: KeyValueStore + Clone> QuizApp<S> {
    /// Lanza la carga de preguntas. El resultado llega por canal y lo recoge `poll_loading`.
    pub fn start_loading(&mut self, source: QuestionSource) {
        let (tx, rx) = mpsc::channel::<LoadResult>();
        self.pending_load = Some(rx);
        self.state = AppState::Loading;
        log::info!("Cargando preguntas desde {source:?}");

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let _ = tx.send(load_questions(&source));
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = load_questions(&source).await;
            let _ = tx.send(result);
        });
    }

    /// Revisa si la carga terminó. Devuelve `true` mientras siga pendiente.
    pub fn poll_loading(&mut self) -> bool {
        let received = match self.pending_load.as_ref() {
            Some(rx) => rx.try_recv(),
            None => return false,
        };

        match received {
            Err(TryRecvError::Empty) => true,
            Ok(Ok(questions)) => {
                self.pending_load = None;
                self.finish_loading(questions);
                false
            }
            Ok(Err(e)) => {
                self.pending_load = None;
                self.fail_loading(&e.to_string());
                false
            }
            Err(TryRecvError::Disconnected) => {
                self.pending_load = None;
                self.fail_loading("la tarea de carga terminó sin resultado");
                false
            }
        }
    }

    pub(crate) fn finish_loading(&mut self, questions: Vec<Question>) {
        let quiz = QuizController::new(questions, self.store.clone());
        self.view = quiz.ui_state();
        self.quiz = Some(quiz);
        self.inputs.clear();
        self.state = AppState::Ready;
    }

    fn fail_loading(&mut self, reason: &str) {
        log::error!("Falló la carga de preguntas: {reason}");
        self.quiz = None;
        self.view = UiState::default();
        self.state = AppState::Failed(LOAD_ERROR_MESSAGE.to_string());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::time::{Duration, Instant};

    fn wait_for_load(app: &mut QuizApp<MemoryStore>) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.poll_loading() {
            assert!(Instant::now() < deadline, "la carga no terminó");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn embedded_bank_loads_and_renders() {
        let config = QuizConfig {
            questions: QuestionSource::Embedded,
            storage_path: "unused.json".into(),
        };
        let mut app = QuizApp::with_store(&config, MemoryStore::new());
        assert_eq!(app.state, AppState::Loading);

        wait_for_load(&mut app);
        assert!(app.is_ready());
        assert_eq!(app.view.questions.len(), 3);
        assert_eq!(app.view.questions[0].number, 1);
    }

    #[test]
    fn failed_load_shows_static_message_and_nothing_else() {
        let config = QuizConfig {
            questions: QuestionSource::File("/no/existe/db.json".into()),
            storage_path: "unused.json".into(),
        };
        let mut app = QuizApp::with_store(&config, MemoryStore::new());

        wait_for_load(&mut app);
        assert_eq!(app.state, AppState::Failed(LOAD_ERROR_MESSAGE.to_string()));
        assert!(app.quiz.is_none());
        assert!(app.view.questions.is_empty());
        assert!(!app.poll_loading());
    }
}
