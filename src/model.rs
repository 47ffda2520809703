use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tipo de formulario de una pregunta. En el JSON se usan los nombres del input HTML.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    #[serde(rename = "radio")]
    SingleChoice,
    #[serde(rename = "checkbox")]
    MultiChoice,
    #[serde(rename = "select")]
    DropdownSingle,
}

/// Respuesta correcta: un único valor o un conjunto de valores.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Answer {
    One(String),
    Many(Vec<String>),
}

impl Answer {
    pub fn as_set(&self) -> BTreeSet<&str> {
        match self {
            Answer::One(value) => BTreeSet::from([value.as_str()]),
            Answer::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Texto que se muestra al revelar la respuesta
    pub fn display_text(&self) -> String {
        match self {
            Answer::One(value) => value.clone(),
            Answer::Many(values) => values.join(", "),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: String,
    pub question: String, // Enunciado
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<String>,
    pub answer: Answer,
}

/// Lo que envía un formulario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// radio o select; `None` (o el placeholder vacío) = nada seleccionado
    Single(Option<String>),
    /// checkboxes marcados
    Multiple(Vec<String>),
}

impl Submission {
    pub fn nothing() -> Self {
        Submission::Single(None)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Submission::Single(value) => value.as_deref().is_none_or(str::is_empty),
            Submission::Multiple(values) => values.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Loading,
    Ready,
    Failed(String),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading
    }
}
