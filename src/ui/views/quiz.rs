use crate::LearnApp;
use crate::model::{AppState, QuestionType};
use crate::quiz::QuizState;
use crate::ui::helpers::speak_button;
use crate::ui::layout::{centered_panel, message_line};
use egui::{Button, Color32, Context, ProgressBar, RichText};

pub fn ui_quiz(app: &mut LearnApp, ctx: &Context) {
    let Some(session) = app.quiz.as_ref() else {
        app.state = AppState::QuizSetup;
        app.message = "Start a quiz first.".to_owned();
        return;
    };
    let Some(question) = session.current_question().cloned() else {
        app.state = AppState::QuizSummary;
        return;
    };
    let state = session.state().clone();
    let progress = session.progress_fraction();
    let counter = format!(
        "{} · Question {} of {} · Score {}",
        session.category().unwrap_or("All words"),
        session.current_index().map_or(0, |i| i + 1),
        session.total_questions(),
        session.score()
    );

    centered_panel(ctx, 460.0, 560.0, |ui| {
        let width = ui.available_width();
        ui.add(ProgressBar::new(progress).desired_width(width));
        ui.label(RichText::new(counter).weak());
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.heading(&question.prompt);
            if question.question_type == QuestionType::WordToMeaning {
                speak_button(app, ui, &question.source_word.word, question.source_word.language);
            }
        });
        ui.add_space(12.0);

        let (selected, answered) = match &state {
            QuizState::ShowingFeedback { selected, .. } => (Some(selected.as_str()), true),
            _ => (None, false),
        };

        for option in &question.options {
            let mut button = Button::new(RichText::new(option).size(18.0));
            if answered {
                if *option == question.correct_answer {
                    button = button.fill(Color32::DARK_GREEN);
                } else if Some(option.as_str()) == selected {
                    button = button.fill(Color32::DARK_RED);
                }
            }
            let clicked = ui
                .add_enabled_ui(!answered, |ui| ui.add_sized([width, 40.0], button).clicked())
                .inner;
            if clicked {
                app.answer_quiz(option);
            }
            ui.add_space(4.0);
        }

        if let Some(feedback) = &app.last_feedback {
            ui.add_space(8.0);
            if feedback.correct {
                ui.label(RichText::new("✅ Correct!").color(Color32::GREEN).strong());
            } else {
                ui.label(
                    RichText::new(format!("❌ The answer is \"{}\"", feedback.correct_answer))
                        .color(Color32::LIGHT_RED)
                        .strong(),
                );
            }
        }
        message_line(ui, &app.message);

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if answered && ui.add_sized([width * 0.6, 36.0], Button::new("Next ▶")).clicked() {
                app.next_quiz_question();
            }
            if ui.button("Quit").clicked() {
                app.quit_quiz();
            }
        });
    });
}
