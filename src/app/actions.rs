use super::*;
use egui::Context;

impl<S: KeyValueStore + Clone> QuizApp<S> {
    /// Envía el formulario de una pregunta con lo que haya marcado (o nada)
    pub fn submit_question(&mut self, question_id: &str) {
        let Some(quiz) = self.quiz.as_mut() else {
            log::warn!("Envío de {question_id} antes de cargar el quiz");
            return;
        };
        let Some(kind) = quiz.question(question_id).map(|q| q.kind) else {
            log::warn!("Pregunta desconocida: {question_id}");
            return;
        };

        let submission = self
            .inputs
            .get(question_id)
            .map(|input| input.to_submission(kind))
            .unwrap_or_else(|| FormInput::default().to_submission(kind));

        self.view = quiz.submit(question_id, &submission);
    }

    pub fn toggle_nav(&mut self) {
        self.nav.toggle();
    }

    pub fn toggle_theme(&mut self, ctx: &Context) {
        let mode = self.theme.toggle();
        log::debug!("Tema cambiado a {}", mode.as_str());
        self.theme.apply(ctx);
    }
}
