use crate::QuizApp;
use crate::model::QuestionKind;
use crate::storage::KeyValueStore;
use crate::ui::helpers::{checkbox_group, dropdown, feedback_label, radio_group};
use crate::ui::layout::scroll_panel;
use crate::view_models::QuestionView;
use egui::{Button, Context, RichText, Ui};

/// Un formulario por pregunta y, al final, la puntuación si ya terminó todo
pub fn ui_quiz<S: KeyValueStore + Clone>(app: &mut QuizApp<S>, ctx: &Context) {
    let questions = app.view.questions.clone();
    let score = app.view.score;
    let mut submitted = None;

    scroll_panel(ctx, 650.0, |ui| {
        for question in &questions {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    if question_form(app, ui, question) {
                        submitted = Some(question.id.clone());
                    }
                });
            ui.add_space(10.0);
        }

        if let Some(score) = score {
            ui.add_space(8.0);
            ui.label(RichText::new(score.message()).heading().strong());
        }
    });

    if let Some(id) = submitted {
        app.submit_question(&id);
    }
}

/// Pinta el formulario; devuelve `true` si se pulsó "Responder"
fn question_form<S: KeyValueStore + Clone>(
    app: &mut QuizApp<S>,
    ui: &mut Ui,
    question: &QuestionView,
) -> bool {
    ui.vertical(|ui| {
        ui.label(RichText::new(question.legend()).strong());
        ui.add_space(6.0);

        let input = app.input_mut(&question.id);
        ui.add_enabled_ui(!question.locked, |ui| match question.kind {
            QuestionKind::SingleChoice => radio_group(ui, &question.options, &mut input.selected),
            QuestionKind::MultiChoice => checkbox_group(ui, &question.options, &mut input.checked),
            QuestionKind::DropdownSingle => {
                dropdown(ui, &question.id, &question.options, &mut input.selected)
            }
        });

        ui.add_space(6.0);
        let clicked = ui
            .add_enabled(!question.locked, Button::new("Responder"))
            .clicked();

        if let Some(feedback) = &question.feedback {
            feedback_label(ui, feedback);
        }
        ui.label(question.attempts_label());
        clicked
    })
    .inner
}
