use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

/// Mensaje fijo de error de carga; no hay reintento
pub fn ui_load_error(ctx: &Context, message: &str) {
    centered_panel(ctx, 120.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            let color = ui.visuals().error_fg_color;
            ui.add_space(20.0);
            ui.label(RichText::new(message).heading().color(color));
        });
    });
}
