// src/progress.rs

use crate::model::Question;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Intentos con los que empieza cada pregunta
pub const MAX_ATTEMPTS: u32 = 3;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEntry {
    pub attempts: u32,
    pub solved: bool,
}

impl Default for ProgressEntry {
    fn default() -> Self {
        Self {
            attempts: MAX_ATTEMPTS,
            solved: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryStatus {
    Unanswered { attempts: u32 },
    Solved,
    Locked,
}

impl ProgressEntry {
    pub fn status(&self) -> EntryStatus {
        if self.solved {
            EntryStatus::Solved
        } else if self.attempts == 0 {
            EntryStatus::Locked
        } else {
            EntryStatus::Unanswered {
                attempts: self.attempts,
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.status(), EntryStatus::Unanswered { .. })
    }

    /// Aplica el resultado de un envío. Devuelve `false` si la entrada ya era terminal.
    pub fn record(&mut self, correct: bool) -> bool {
        if self.is_terminal() {
            return false;
        }
        if correct {
            self.solved = true;
        } else {
            self.attempts = self.attempts.saturating_sub(1);
        }
        true
    }

    fn is_valid(&self) -> bool {
        self.attempts <= MAX_ATTEMPTS
    }
}

/// Progreso completo: id de pregunta -> entrada.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProgressStore {
    pub entries: BTreeMap<String, ProgressEntry>,
}

impl ProgressStore {
    /// Progreso nuevo para un banco de preguntas
    pub fn fresh(questions: &[Question]) -> Self {
        Self {
            entries: questions
                .iter()
                .map(|q| (q.id.clone(), ProgressEntry::default()))
                .collect(),
        }
    }

    /// Combina el progreso guardado con el banco actual: sólo se conservan
    /// entradas válidas de preguntas que siguen existiendo.
    pub fn merged(questions: &[Question], saved: Option<ProgressStore>) -> Self {
        let mut store = Self::fresh(questions);
        let Some(saved) = saved else {
            return store;
        };
        for (id, entry) in saved.entries {
            match store.entries.get_mut(&id) {
                Some(slot) if entry.is_valid() => *slot = entry,
                Some(_) => log::warn!("Progreso inválido para {id}: {entry:?}, se reinicia"),
                None => log::debug!("Descartando progreso de pregunta desconocida {id}"),
            }
        }
        store
    }

    pub fn get(&self, id: &str) -> Option<&ProgressEntry> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ProgressEntry> {
        self.entries.get_mut(id)
    }

    pub fn all_terminal(&self) -> bool {
        self.entries.values().all(ProgressEntry::is_terminal)
    }

    pub fn solved_count(&self) -> usize {
        self.entries.values().filter(|e| e.solved).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// `None` si el documento no es un objeto JSON. Cada entrada se lee por
    /// separado: una entrada ilegible se descarta y el resto se conserva.
    pub fn from_json(raw: &str) -> Option<Self> {
        let raw_entries: BTreeMap<String, serde_json::Value> = match serde_json::from_str(raw) {
            Ok(map) => map,
            Err(e) => {
                log::warn!("Progreso guardado ilegible, se ignora: {e}");
                return None;
            }
        };

        let entries = raw_entries
            .into_iter()
            .filter_map(|(id, value)| match serde_json::from_value(value) {
                Ok(entry) => Some((id, entry)),
                Err(e) => {
                    log::warn!("Progreso ilegible para {id}, se reinicia: {e}");
                    None
                }
            })
            .collect();
        Some(Self { entries })
    }
}
