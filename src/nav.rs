// src/nav.rs

/// Clase del botón y del menú cuando están abiertos
pub const ACTIVE_CLASS: &str = "is-active";

/// Botón hamburguesa del menú de navegación. Sin persistencia.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavToggle {
    is_active: bool,
}

impl NavToggle {
    pub fn toggle(&mut self) {
        self.is_active = !self.is_active;
    }

    pub fn close(&mut self) {
        self.is_active = false;
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Etiqueta de accesibilidad del botón
    pub fn aria_label(&self) -> &'static str {
        if self.is_active {
            "Cerrar menú"
        } else {
            "Abrir menú"
        }
    }

    /// Clase que llevan el botón y el menú; `None` con el menú cerrado
    pub fn css_class(&self) -> Option<&'static str> {
        self.is_active.then_some(ACTIVE_CLASS)
    }

    pub fn icon(&self) -> &'static str {
        if self.is_active { "✖" } else { "☰" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state_and_label() {
        let mut nav = NavToggle::default();
        assert!(!nav.is_active());
        assert_eq!(nav.aria_label(), "Abrir menú");
        assert_eq!(nav.css_class(), None);

        nav.toggle();
        assert!(nav.is_active());
        assert_eq!(nav.aria_label(), "Cerrar menú");
        assert_eq!(nav.icon(), "✖");
        assert_eq!(nav.css_class(), Some("is-active"));

        nav.toggle();
        assert!(!nav.is_active());
        assert_eq!(nav.aria_label(), "Abrir menú");
        assert_eq!(nav.css_class(), None);
    }
}
