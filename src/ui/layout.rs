use crate::QuizApp;
use crate::storage::KeyValueStore;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, WidgetInfo, WidgetType};

/// Cabecera con el botón hamburguesa; el menú sólo se ve cuando está abierto.
pub fn top_panel<S: KeyValueStore + Clone>(app: &mut QuizApp<S>, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let label = app.nav.aria_label();
            let response = ui
                .add(Button::new(app.nav.icon()).selected(app.nav.css_class().is_some()))
                .on_hover_text(label);
            response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, true, label));
            if response.clicked() {
                app.toggle_nav();
            }
            ui.heading("Ejercicios");
        });

        if app.nav.is_active() {
            ui.separator();
            nav_menu(app, ui, ctx);
        }
    });
}

fn nav_menu<S: KeyValueStore + Clone>(app: &mut QuizApp<S>, ui: &mut Ui, ctx: &Context) {
    ui.horizontal_wrapped(|ui| {
        if app.is_ready() && ui.button("🔄 Borrar progreso y reiniciar").clicked() {
            app.request_reset();
        }
        if ui.button(app.theme.mode().button_label()).clicked() {
            app.toggle_theme(ctx);
        }
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Panel con scroll vertical para listas largas de formularios
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                ui.set_max_width(w);
                inner(ui);
            });
        });
    });
}
