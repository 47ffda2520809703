use super::*;

impl<S: KeyValueStore + Clone> QuizApp<S> {
    /// Pide confirmación antes de borrar el progreso
    pub fn request_reset(&mut self) {
        self.confirm_reset = true;
        self.nav.close();
    }

    pub fn reset_progress(&mut self) {
        if let Some(quiz) = self.quiz.as_mut() {
            self.view = quiz.reset();
        }
        self.inputs.clear();
        self.confirm_reset = false;
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres borrar todo tu progreso? ¡Esta acción no se puede deshacer!");
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
