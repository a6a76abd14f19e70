use crate::LearnApp;
use crate::learning_path::PASS_PERCENTAGE;
use crate::model::AppState;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, RichText};

pub fn ui_quiz_summary(app: &mut LearnApp, ctx: &Context) {
    let Some(score) = app.last_score.clone() else {
        app.state = AppState::QuizSetup;
        return;
    };
    let percentage = score.percentage();
    let back_label = if app.quiz_return == AppState::Lesson {
        "Back to lesson"
    } else {
        "Done"
    };

    centered_panel(ctx, 260.0, 420.0, |ui| {
        let width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading("Quiz finished");
            ui.add_space(10.0);
            ui.label(
                RichText::new(format!("{}/{}", score.score, score.total_questions))
                    .size(36.0)
                    .strong(),
            );
            ui.label(format!("{percentage}%"));
            if let Some(category) = &score.category {
                ui.label(RichText::new(category).weak());
            }
            ui.add_space(6.0);
            let verdict = if percentage == 100 {
                "Perfect! 🎉"
            } else if percentage >= PASS_PERCENTAGE {
                "Well done!"
            } else {
                "Keep practising."
            };
            ui.label(verdict);
        });

        ui.add_space(16.0);
        let (again, done) = two_button_row(ui, width, "🔄 Try again", back_label);
        if again {
            app.restart_quiz();
        }
        if done {
            app.finish_quiz();
        }
    });
}
