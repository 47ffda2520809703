//! Tema oscuro/claro.
//!
//! La preferencia se guarda bajo la clave `theme` como `"dark"` o `"light"`.
//! Sin preferencia guardada se arranca en modo claro.

use crate::storage::PreferenceStorage;
use egui::{Context, Visuals};

/// Clase que se pone en el elemento raíz del documento en modo oscuro (web)
pub const DARK_CLASS: &str = "dark-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn visuals(self) -> Visuals {
        match self {
            ThemeMode::Dark => Visuals::dark(),
            ThemeMode::Light => Visuals::light(),
        }
    }

    /// Icono del botón: muestra el modo al que se cambiaría
    pub fn button_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀ Modo claro",
            ThemeMode::Light => "🌙 Modo oscuro",
        }
    }
}

pub struct ThemeToggle<S: PreferenceStorage> {
    mode: ThemeMode,
    storage: S,
}

impl<S: PreferenceStorage> ThemeToggle<S> {
    /// Lee la preferencia guardada una sola vez, al arrancar
    pub fn load(storage: S) -> Self {
        let mode = storage.load_theme().unwrap_or_default();
        Self { mode, storage }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Cambia de modo y guarda la preferencia
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Err(e) = self.storage.save_theme(self.mode) {
            log::warn!("No se pudo guardar el tema: {e}");
        }
        self.mode
    }

    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.mode.visuals());
        apply_root_class(self.is_dark());
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_root_class(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if dark {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(e) = result {
        log::debug!("No se pudo actualizar la clase del tema: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_root_class(_dark: bool) {}
