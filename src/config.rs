// src/config.rs

use crate::data::QuestionSource;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_STORAGE_FILE: &str = "exercise_quiz_storage.json";
#[cfg(target_arch = "wasm32")]
const DEFAULT_WEB_QUESTIONS: &str = "api/db.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub questions: QuestionSource,
    #[cfg(not(target_arch = "wasm32"))]
    pub storage_path: PathBuf,
}

impl QuizConfig {
    /// Escritorio: variables de entorno `EXERCISE_QUIZ_QUESTIONS` y `EXERCISE_QUIZ_STORAGE`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let questions = lookup("EXERCISE_QUIZ_QUESTIONS")
            .as_deref()
            .and_then(QuestionSource::parse)
            .unwrap_or(QuestionSource::Embedded);
        let storage_path = lookup("EXERCISE_QUIZ_STORAGE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_FILE));
        Self {
            questions,
            storage_path,
        }
    }

    /// Web: variable de compilación, query string, meta y por último `api/db.json`
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let questions = option_env!("EXERCISE_QUIZ_QUESTIONS")
            .and_then(QuestionSource::parse)
            .or_else(questions_from_querystring)
            .or_else(questions_from_meta)
            .unwrap_or_else(|| QuestionSource::Url(DEFAULT_WEB_QUESTIONS.to_string()));
        Self { questions }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(target_arch = "wasm32")]
fn questions_from_querystring() -> Option<QuestionSource> {
    let search = web_sys::window()?.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key != "questions" {
            return None;
        }
        let decoded = js_sys::decode_uri_component(value).ok()?.as_string()?;
        QuestionSource::parse(&decoded)
    })
}

#[cfg(target_arch = "wasm32")]
fn questions_from_meta() -> Option<QuestionSource> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='exercise-quiz-questions']")
        .ok()??;
    meta.get_attribute("content")
        .as_deref()
        .and_then(QuestionSource::parse)
}
