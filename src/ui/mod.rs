mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use crate::storage::KeyValueStore;
use eframe::{App, Frame};
use egui::Context;
use layout::top_panel;
use std::time::Duration;

impl<S: KeyValueStore + Clone> App for QuizApp<S> {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Mientras llegan las preguntas seguimos repintando para recoger el resultado
        if self.poll_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        top_panel(self, ctx);

        match self.state.clone() {
            AppState::Loading => views::pending::ui_loading(ctx),
            AppState::Ready => views::quiz::ui_quiz(self, ctx),
            AppState::Failed(message) => views::failed::ui_load_error(ctx, &message),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }
}
