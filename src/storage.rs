// src/storage.rs

use crate::progress::ProgressStore;
use crate::theme::ThemeMode;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

/// Clave del progreso del quiz
pub const PROGRESS_KEY: &str = "exerciseProgress";
/// Clave de la preferencia de tema
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("error de E/S en el almacenamiento: {0}")]
    Io(#[from] std::io::Error),
    #[error("no se pudo serializar: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("almacenamiento web no disponible: {0}")]
    Unavailable(String),
}

/// Almacén clave-valor de cadenas (localStorage, fichero o memoria).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Acceso al progreso persistido. Es lo único que ve el controlador.
pub trait ProgressStorage {
    fn load(&self) -> Option<ProgressStore>;
    fn save(&mut self, store: &ProgressStore) -> Result<(), StorageError>;
}

impl<T: KeyValueStore> ProgressStorage for T {
    fn load(&self) -> Option<ProgressStore> {
        let raw = self.get(PROGRESS_KEY)?;
        ProgressStore::from_json(&raw)
    }

    fn save(&mut self, store: &ProgressStore) -> Result<(), StorageError> {
        let json = store.to_json()?;
        self.set(PROGRESS_KEY, &json)
    }
}

/// Acceso a la preferencia de tema.
pub trait PreferenceStorage {
    fn load_theme(&self) -> Option<ThemeMode>;
    fn save_theme(&mut self, mode: ThemeMode) -> Result<(), StorageError>;
}

impl<T: KeyValueStore> PreferenceStorage for T {
    fn load_theme(&self) -> Option<ThemeMode> {
        self.get(THEME_KEY).and_then(|raw| ThemeMode::parse(&raw))
    }

    fn save_theme(&mut self, mode: ThemeMode) -> Result<(), StorageError> {
        self.set(THEME_KEY, mode.as_str())
    }
}

/// Almacén en memoria. Los clones comparten los mismos datos,
/// así un test puede "recargar la página" con otro controlador.
#[derive(Clone, Default, Debug)]
pub struct MemoryStore {
    data: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Almacén persistente de la plataforma actual
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = FileStore;
#[cfg(target_arch = "wasm32")]
pub type PlatformStore = LocalStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use super::{KeyValueStore, StorageError};
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    /// Un único fichero JSON `{clave: valor}`. Se relee en cada acceso para que
    /// varios handles sobre la misma ruta vean los mismos datos.
    #[derive(Clone, Debug)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Copia que se guarda de un fichero corrupto antes de sobrescribirlo
        pub fn backup_path(&self) -> PathBuf {
            self.path.with_extension("json.corrupt")
        }

        fn tmp_path(&self) -> PathBuf {
            self.path.with_extension("json.tmp")
        }

        /// Un fichero que no existe equivale a un almacén vacío
        fn read_all(&self) -> Result<BTreeMap<String, String>, serde_json::Error> {
            match std::fs::read_to_string(&self.path) {
                Ok(json) => serde_json::from_str(&json),
                Err(_) => Ok(BTreeMap::new()),
            }
        }

        /// Aparta el fichero corrupto para no perder sus claves en silencio
        fn set_aside_corrupt(&self, err: &serde_json::Error) -> Result<(), StorageError> {
            let backup = self.backup_path();
            log::error!(
                "Fichero de almacenamiento {:?} corrupto ({err}); sus claves se pierden, copia en {backup:?}",
                self.path
            );
            std::fs::rename(&self.path, &backup)?;
            Ok(())
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            match self.read_all() {
                Ok(mut all) => all.remove(key),
                Err(e) => {
                    log::warn!("Fichero de almacenamiento {:?} corrupto: {e}", self.path);
                    None
                }
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut all = match self.read_all() {
                Ok(all) => all,
                Err(e) => {
                    self.set_aside_corrupt(&e)?;
                    BTreeMap::new()
                }
            };
            all.insert(key.to_string(), value.to_string());
            let json = serde_json::to_string_pretty(&all)?;

            // escribir aparte y renombrar: nunca queda un fichero a medias
            let tmp = self.tmp_path();
            std::fs::write(&tmp, json)?;
            std::fs::rename(&tmp, &self.path)?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local_store::LocalStore;

#[cfg(target_arch = "wasm32")]
mod local_store {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalStore;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no existe window".into()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage desactivado".into()))
    }

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Option<String> {
            local_storage().ok()?.get_item(key).ok()?
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
    }
}
