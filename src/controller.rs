// src/controller.rs

use crate::model::{Answer, Question, QuestionKind, Submission};
use crate::progress::{EntryStatus, ProgressStore};
use crate::storage::ProgressStorage;
use crate::view_models::{Feedback, QuestionView, Score, UiState};
use std::collections::{BTreeSet, HashMap};

/// Controlador del quiz: dueño de las preguntas, las respuestas correctas,
/// el progreso y el acceso a su almacenamiento. Se crea una vez por carga.
pub struct QuizController<S: ProgressStorage> {
    questions: Vec<Question>,
    answers: HashMap<String, Answer>,
    progress: ProgressStore,
    /// Mensaje de reintento del último fallo; no se persiste
    retry_feedback: HashMap<String, Feedback>,
    storage: S,
}

impl<S: ProgressStorage> QuizController<S> {
    /// Prepara respuestas y progreso (guardado o por defecto)
    pub fn new(questions: Vec<Question>, storage: S) -> Self {
        let answers = questions
            .iter()
            .map(|q| (q.id.clone(), q.answer.clone()))
            .collect();
        let progress = ProgressStore::merged(&questions, storage.load());
        log::info!(
            "Quiz listo: {} preguntas, {} resueltas",
            progress.len(),
            progress.solved_count()
        );

        Self {
            questions,
            answers,
            progress,
            retry_feedback: HashMap::new(),
            storage,
        }
    }

    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Comprueba un envío contra la respuesta guardada. Sin puntuación parcial.
    pub fn evaluate(&self, question_id: &str, submission: &Submission) -> bool {
        let (Some(question), Some(answer)) =
            (self.question(question_id), self.answers.get(question_id))
        else {
            return false;
        };
        if submission.is_empty() {
            return false;
        }

        match (question.kind, submission) {
            (QuestionKind::SingleChoice | QuestionKind::DropdownSingle, Submission::Single(value)) => {
                match (value.as_deref(), answer) {
                    (Some(v), Answer::One(expected)) => v == expected.as_str(),
                    _ => false,
                }
            }
            (QuestionKind::MultiChoice, Submission::Multiple(values)) => {
                let submitted: BTreeSet<&str> = values.iter().map(String::as_str).collect();
                let expected = answer.as_set();
                submitted.len() == expected.len()
                    && submitted.iter().all(|v| expected.contains(v))
            }
            _ => false,
        }
    }

    /// Procesa un envío y devuelve el estado de UI resultante.
    /// Si la pregunta ya es terminal (o no existe) no cambia nada.
    pub fn submit(&mut self, question_id: &str, submission: &Submission) -> UiState {
        let is_open = self
            .progress
            .get(question_id)
            .is_some_and(|entry| !entry.is_terminal());
        if !is_open {
            log::debug!("Envío ignorado para {question_id}: pregunta cerrada o desconocida");
            return self.ui_state();
        }

        let correct = self.evaluate(question_id, submission);
        if let Some(entry) = self.progress.get_mut(question_id) {
            entry.record(correct);
            log::debug!("{question_id}: correcta={correct}, estado={:?}", entry.status());
        }

        if correct {
            self.retry_feedback.remove(question_id);
        } else {
            self.retry_feedback
                .insert(question_id.to_string(), Feedback::Retry);
        }

        self.persist();
        self.ui_state()
    }

    /// Vuelve a empezar: todas las preguntas con intentos completos
    pub fn reset(&mut self) -> UiState {
        self.progress = ProgressStore::fresh(&self.questions);
        self.retry_feedback.clear();
        self.persist();
        log::info!("Progreso reiniciado");
        self.ui_state()
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.progress) {
            log::error!("No se pudo guardar el progreso: {e}");
        }
    }

    pub fn ui_state(&self) -> UiState {
        let questions = self
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| self.question_view(i, q))
            .collect();
        UiState {
            questions,
            score: self.score(),
        }
    }

    fn question_view(&self, index: usize, question: &Question) -> QuestionView {
        let entry = self.progress.get(&question.id).copied().unwrap_or_default();
        let feedback = match entry.status() {
            EntryStatus::Solved => Some(Feedback::Correct),
            EntryStatus::Locked => Some(Feedback::Revealed(
                self.answers
                    .get(&question.id)
                    .map(Answer::display_text)
                    .unwrap_or_default(),
            )),
            EntryStatus::Unanswered { .. } => self.retry_feedback.get(&question.id).cloned(),
        };

        QuestionView {
            id: question.id.clone(),
            number: index + 1,
            prompt: question.question.clone(),
            kind: question.kind,
            options: question.options.clone(),
            attempts: entry.attempts,
            locked: entry.is_terminal(),
            feedback,
        }
    }

    /// Puntuación final; sólo existe cuando todas las preguntas han terminado
    pub fn score(&self) -> Option<Score> {
        // banco vacío: sin puntuación, nunca "0 de 0"
        if self.progress.is_empty() || !self.progress.all_terminal() {
            return None;
        }
        Some(Score {
            solved: self.progress.solved_count(),
            total: self.progress.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{MAX_ATTEMPTS, ProgressEntry};
    use crate::storage::{KeyValueStore, MemoryStore, PROGRESS_KEY};

    fn bank() -> Vec<Question> {
        vec![
            Question {
                id: "q1".into(),
                question: "¿Qué método convierte JSON en objeto?".into(),
                kind: QuestionKind::SingleChoice,
                options: vec!["JSON.parse".into(), "JSON.stringify".into()],
                answer: Answer::One("JSON.parse".into()),
            },
            Question {
                id: "q2".into(),
                question: "¿Qué palabras declaran variables?".into(),
                kind: QuestionKind::MultiChoice,
                options: vec!["var".into(), "let".into(), "const".into(), "def".into()],
                answer: Answer::Many(vec!["var".into(), "let".into(), "const".into()]),
            },
            Question {
                id: "q3".into(),
                question: "¿Qué operador compara sin coerción?".into(),
                kind: QuestionKind::DropdownSingle,
                options: vec!["==".into(), "===".into()],
                answer: Answer::One("===".into()),
            },
        ]
    }

    fn pick(value: &str) -> Submission {
        Submission::Single(Some(value.into()))
    }

    fn checks(values: &[&str]) -> Submission {
        Submission::Multiple(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn multi_choice_needs_exact_set_in_any_order() {
        let quiz = QuizController::new(bank(), MemoryStore::new());
        assert!(quiz.evaluate("q2", &checks(&["const", "var", "let"])));
        assert!(!quiz.evaluate("q2", &checks(&["var", "let"])));
        assert!(!quiz.evaluate("q2", &checks(&["var", "let", "const", "def"])));
        assert!(!quiz.evaluate("q2", &checks(&[])));
    }

    #[test]
    fn duplicated_checkbox_values_do_not_fake_a_full_set() {
        let quiz = QuizController::new(bank(), MemoryStore::new());
        assert!(!quiz.evaluate("q2", &checks(&["var", "var", "let"])));
    }

    #[test]
    fn single_and_dropdown_use_exact_match() {
        let quiz = QuizController::new(bank(), MemoryStore::new());
        assert!(quiz.evaluate("q1", &pick("JSON.parse")));
        assert!(!quiz.evaluate("q1", &pick("json.parse")));
        assert!(quiz.evaluate("q3", &pick("===")));
        assert!(!quiz.evaluate("q3", &pick("")));
        assert!(!quiz.evaluate("q3", &Submission::nothing()));
        assert!(!quiz.evaluate("missing", &pick("===")));
    }

    #[test]
    fn q2_example_wrong_then_right() {
        let mut quiz = QuizController::new(bank(), MemoryStore::new());

        let ui = quiz.submit("q2", &checks(&["var", "let"]));
        let q2 = ui.question("q2").expect("q2");
        assert_eq!(q2.attempts, 2);
        assert_eq!(q2.feedback, Some(Feedback::Retry));
        assert!(!q2.locked);

        let ui = quiz.submit("q2", &checks(&["var", "let", "const"]));
        let q2 = ui.question("q2").expect("q2");
        assert!(q2.locked);
        assert_eq!(q2.feedback, Some(Feedback::Correct));
        assert_eq!(q2.attempts, 2);
        assert!(quiz.progress().get("q2").is_some_and(|e| e.solved));
    }

    #[test]
    fn empty_submission_consumes_an_attempt() {
        let mut quiz = QuizController::new(bank(), MemoryStore::new());
        let ui = quiz.submit("q1", &Submission::nothing());
        assert_eq!(ui.question("q1").map(|q| q.attempts), Some(MAX_ATTEMPTS - 1));
    }

    #[test]
    fn three_misses_lock_and_reveal_answer() {
        let mut quiz = QuizController::new(bank(), MemoryStore::new());
        for _ in 0..MAX_ATTEMPTS {
            quiz.submit("q2", &checks(&["def"]));
        }
        let ui = quiz.submit("q2", &checks(&["var", "let", "const"]));
        let q2 = ui.question("q2").expect("q2");
        assert!(q2.locked);
        assert_eq!(q2.attempts, 0);
        assert_eq!(
            q2.feedback.as_ref().map(Feedback::message).as_deref(),
            Some("La respuesta correcta es: var, let, const.")
        );
    }

    #[test]
    fn score_waits_for_every_question() {
        let mut quiz = QuizController::new(bank(), MemoryStore::new());
        assert_eq!(quiz.submit("q1", &pick("JSON.parse")).score, None);
        for _ in 0..MAX_ATTEMPTS {
            quiz.submit("q2", &checks(&["var"]));
        }
        assert_eq!(quiz.ui_state().score, None);

        let ui = quiz.submit("q3", &pick("==="));
        let score = ui.score.expect("todas terminadas");
        assert_eq!(score, Score { solved: 2, total: 3 });
        assert_eq!(score.message(), "Tu puntuación final: 2 de 3 correctas.");
    }

    #[test]
    fn empty_bank_has_no_score() {
        let quiz = QuizController::new(Vec::new(), MemoryStore::new());
        assert_eq!(quiz.ui_state(), UiState::default());
    }

    #[test]
    fn submitting_a_solved_question_changes_nothing() {
        let store = MemoryStore::new();
        let mut quiz = QuizController::new(bank(), store.clone());
        let solved = quiz.submit("q1", &pick("JSON.parse"));
        let saved = store.get(PROGRESS_KEY);

        assert_eq!(quiz.submit("q1", &pick("JSON.stringify")), solved);
        assert_eq!(quiz.submit("q1", &pick("JSON.parse")), solved);
        assert_eq!(store.get(PROGRESS_KEY), saved);
        assert_eq!(
            quiz.progress().get("q1"),
            Some(&ProgressEntry { attempts: MAX_ATTEMPTS, solved: true })
        );
    }

    #[test]
    fn unknown_question_id_is_ignored() {
        let store = MemoryStore::new();
        let mut quiz = QuizController::new(bank(), store.clone());
        let before = quiz.ui_state();

        assert_eq!(quiz.submit("q9", &pick("JSON.parse")), before);
        assert!(store.get(PROGRESS_KEY).is_none());
        assert!(quiz.progress().get("q9").is_none());
    }

    #[test]
    fn reset_restores_defaults_and_persists() {
        let store = MemoryStore::new();
        let mut quiz = QuizController::new(bank(), store.clone());
        quiz.submit("q1", &pick("JSON.parse"));
        quiz.submit("q3", &pick("=="));

        let ui = quiz.reset();
        assert!(ui.questions.iter().all(|q| q.attempts == MAX_ATTEMPTS && !q.locked));
        assert!(ui.questions.iter().all(|q| q.feedback.is_none()));
        assert_eq!(store.load(), Some(ProgressStore::fresh(&bank())));
    }
}
