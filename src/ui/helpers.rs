// src/ui/helpers.rs
use egui::{Color32, ComboBox, RichText, Ui};
use std::collections::BTreeSet;

use crate::view_models::Feedback;

pub const PLACEHOLDER: &str = "Selecciona una opción";

/// Grupo de radios; `selected` queda en `None` hasta que se marca uno
pub fn radio_group(ui: &mut Ui, options: &[String], selected: &mut Option<String>) {
    for opt in options {
        ui.radio_value(selected, Some(opt.clone()), opt.as_str());
    }
}

pub fn checkbox_group(ui: &mut Ui, options: &[String], checked: &mut BTreeSet<String>) {
    for opt in options {
        let mut on = checked.contains(opt);
        if ui.checkbox(&mut on, opt.as_str()).changed() {
            if on {
                checked.insert(opt.clone());
            } else {
                checked.remove(opt);
            }
        }
    }
}

/// Desplegable con una primera entrada vacía que equivale a "sin selección"
pub fn dropdown(ui: &mut Ui, id: &str, options: &[String], selected: &mut Option<String>) {
    let text = selected.as_deref().unwrap_or(PLACEHOLDER).to_owned();
    ComboBox::from_id_salt(("dropdown", id))
        .selected_text(text)
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, None, PLACEHOLDER);
            for opt in options {
                ui.selectable_value(selected, Some(opt.clone()), opt.as_str());
            }
        });
}

pub fn feedback_label(ui: &mut Ui, feedback: &Feedback) {
    let color = if feedback.is_correct() {
        Color32::from_rgb(0x2e, 0xa0, 0x43)
    } else {
        Color32::from_rgb(0xd0, 0x3a, 0x3a)
    };
    ui.label(RichText::new(feedback.message()).color(color).strong());
}
