// src/data.rs

use crate::model::Question;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Banco de preguntas incluido en el binario
const EMBEDDED_BANK: &str = include_str!("data/db.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no se pudo leer {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("petición fallida: {0}")]
    Http(String),
    #[error("JSON de preguntas inválido: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML de preguntas inválido: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("id de pregunta repetido: {0}")]
    DuplicateId(String),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Http(err.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BankFormat {
    Json,
    Yaml,
}

impl BankFormat {
    /// `.yaml`/`.yml` se leen como YAML; todo lo demás como JSON
    pub fn from_location(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        let path = lower.split(['?', '#']).next().unwrap_or_default();
        if path.ends_with(".yaml") || path.ends_with(".yml") {
            BankFormat::Yaml
        } else {
            BankFormat::Json
        }
    }
}

/// De dónde salen las preguntas
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionSource {
    Embedded,
    File(PathBuf),
    Url(String),
}

impl QuestionSource {
    /// Interpreta un valor de configuración: URL http(s) o ruta de fichero.
    /// En web cualquier valor es una URL (relativa o absoluta).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else if cfg!(target_arch = "wasm32")
            || value.starts_with("http://")
            || value.starts_with("https://")
        {
            Some(QuestionSource::Url(value.to_string()))
        } else {
            Some(QuestionSource::File(PathBuf::from(value)))
        }
    }
}

/// Parsea una lista de preguntas; el orden de la lista es el orden de pantalla.
pub fn parse_questions(text: &str, format: BankFormat) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = match format {
        BankFormat::Json => serde_json::from_str(text)?,
        BankFormat::Yaml => serde_yaml::from_str(text)?,
    };

    let mut seen = HashSet::new();
    if let Some(dup) = questions.iter().find(|q| !seen.insert(q.id.as_str())) {
        return Err(LoadError::DuplicateId(dup.id.clone()));
    }
    Ok(questions)
}

pub fn read_questions_embedded() -> Result<Vec<Question>, LoadError> {
    parse_questions(EMBEDDED_BANK, BankFormat::Json)
}

pub fn read_questions_file(path: &Path) -> Result<Vec<Question>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_questions(&text, BankFormat::from_location(&path.to_string_lossy()))
}

/// Carga bloqueante (escritorio). Se llama desde un hilo aparte.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_questions(source: &QuestionSource) -> Result<Vec<Question>, LoadError> {
    match source {
        QuestionSource::Embedded => read_questions_embedded(),
        QuestionSource::File(path) => read_questions_file(path),
        QuestionSource::Url(url) => {
            let text = reqwest::blocking::Client::new()
                .get(url)
                .header(reqwest::header::USER_AGENT, "ExerciseQuiz/1.0")
                .send()?
                .error_for_status()?
                .text()?;
            parse_questions(&text, BankFormat::from_location(url))
        }
    }
}

/// Carga en navegador con `fetch`
#[cfg(target_arch = "wasm32")]
pub async fn load_questions(source: &QuestionSource) -> Result<Vec<Question>, LoadError> {
    match source {
        QuestionSource::Embedded => read_questions_embedded(),
        QuestionSource::File(path) => fetch_questions(&path.to_string_lossy()).await,
        QuestionSource::Url(url) => fetch_questions(url).await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_questions(url: &str) -> Result<Vec<Question>, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window = web_sys::window().ok_or_else(|| LoadError::Http("no existe window".into()))?;
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| LoadError::Http(format!("no se pudo crear la petición: {e:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| LoadError::Http(format!("fetch falló: {e:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| LoadError::Http("la respuesta no es un Response".into()))?;

    if !response.ok() {
        return Err(LoadError::Http(format!(
            "HTTP {} en {url}",
            response.status()
        )));
    }

    let promise = response
        .text()
        .map_err(|e| LoadError::Http(format!("{e:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| LoadError::Http(format!("no se pudo leer el cuerpo: {e:?}")))?
        .as_string()
        .ok_or_else(|| LoadError::Http("el cuerpo no es texto".into()))?;

    parse_questions(&text, BankFormat::from_location(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, QuestionKind};

    #[test]
    fn embedded_bank_parses_in_order() {
        let questions = read_questions_embedded().expect("banco embebido válido");
        let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["q1", "q2", "q3"]);
        assert_eq!(questions[1].kind, QuestionKind::MultiChoice);
        assert_eq!(
            questions[1].answer,
            Answer::Many(vec!["var".into(), "let".into(), "const".into()])
        );
    }

    #[test]
    fn yaml_bank_is_supported() {
        let yaml = r#"
- id: a
  question: "¿Uno?"
  type: select
  options: ["1", "2"]
  answer: "1"
"#;
        let questions = parse_questions(yaml, BankFormat::Yaml).expect("yaml ok");
        assert_eq!(questions[0].kind, QuestionKind::DropdownSingle);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": "x", "question": "a", "type": "radio", "options": [], "answer": "a"},
            {"id": "x", "question": "b", "type": "radio", "options": [], "answer": "b"}
        ]"#;
        let err = parse_questions(json, BankFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(id) if id == "x"));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(BankFormat::from_location("api/db.json"), BankFormat::Json);
        assert_eq!(BankFormat::from_location("bank.YML"), BankFormat::Yaml);
        assert_eq!(
            BankFormat::from_location("https://x/q.yaml?v=2"),
            BankFormat::Yaml
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn source_parse_distinguishes_urls_and_paths() {
        assert_eq!(
            QuestionSource::parse("https://example.com/db.json"),
            Some(QuestionSource::Url("https://example.com/db.json".into()))
        );
        assert_eq!(
            QuestionSource::parse("preguntas.yaml"),
            Some(QuestionSource::File(PathBuf::from("preguntas.yaml")))
        );
        assert_eq!(QuestionSource::parse("  "), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_questions(&QuestionSource::File("/no/existe/db.json".into())).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
