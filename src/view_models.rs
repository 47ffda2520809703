// src/view_models.rs

use crate::model::QuestionKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    /// Fallo con intentos restantes
    Retry,
    /// Sin intentos: se enseña la respuesta
    Revealed(String),
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::Correct => "¡Correcto!".into(),
            Feedback::Retry => "Incorrecto. Inténtalo de nuevo.".into(),
            Feedback::Revealed(answer) => format!("La respuesta correcta es: {answer}."),
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub id: String,
    pub number: usize, // 1-based
    pub prompt: String,
    pub kind: QuestionKind,
    pub options: Vec<String>,
    pub attempts: u32,
    pub locked: bool,
    pub feedback: Option<Feedback>,
}

impl QuestionView {
    pub fn legend(&self) -> String {
        format!("{}. {}", self.number, self.prompt)
    }

    pub fn attempts_label(&self) -> String {
        format!("Intentos restantes: {}", self.attempts)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub solved: usize,
    pub total: usize,
}

impl Score {
    pub fn message(&self) -> String {
        format!(
            "Tu puntuación final: {} de {} correctas.",
            self.solved, self.total
        )
    }
}

/// Estado completo que pinta la UI tras cada acción
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub questions: Vec<QuestionView>,
    pub score: Option<Score>,
}

impl UiState {
    pub fn question(&self, id: &str) -> Option<&QuestionView> {
        self.questions.iter().find(|q| q.id == id)
    }
}
