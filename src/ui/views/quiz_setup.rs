use crate::LearnApp;
use crate::model::AppState;
use crate::quiz::{NUM_OPTIONS, QUIZ_LENGTH};
use crate::ui::helpers::category_picker;
use crate::ui::layout::{message_line, simple_panel};
use crate::view_models::ScoreRow;
use egui::{Button, Context, Grid, RichText, ScrollArea};

pub fn ui_quiz_setup(app: &mut LearnApp, ctx: &Context) {
    let pair = app.learning.pair();
    let categories = app.pair_categories();
    let stats = app.quiz_stats();
    let rows: Vec<ScoreRow> = app.score_rows();

    simple_panel(ctx, 640.0, |ui| {
        ui.heading(format!("Quiz: {} → {}", pair.learned, pair.meaning));
        ui.label(
            RichText::new(format!(
                "Up to {QUIZ_LENGTH} questions, {NUM_OPTIONS} options each."
            ))
            .weak(),
        );
        message_line(ui, &app.message);

        ui.horizontal(|ui| {
            category_picker(ui, "quiz_category", &mut app.selected_category, &categories);
            if ui.add_sized([140.0, 32.0], Button::new("▶ Start quiz")).clicked() {
                let category = app.selected_category.clone();
                app.start_quiz(category, AppState::QuizSetup);
            }
        });

        ui.add_space(12.0);
        ui.separator();
        ui.label(RichText::new(format!("Your {} results", pair.learned)).strong());
        ui.horizontal(|ui| {
            ui.label(format!("Attempts: {}", stats.attempts));
            if let Some(best) = stats.best_percentage {
                ui.label(format!("Best: {best}%"));
            }
            if let Some(avg) = stats.average_percentage {
                ui.label(format!("Average: {avg}%"));
            }
        });
        ui.add_space(6.0);

        if rows.is_empty() {
            ui.label("No quizzes taken yet.");
            return;
        }

        ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
            Grid::new("quiz_results_grid")
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Date");
                    ui.label("Category");
                    ui.label("Score");
                    ui.label("%");
                    ui.end_row();

                    for r in &rows {
                        ui.label(&r.date);
                        ui.label(&r.category);
                        ui.label(format!("{}/{}", r.score, r.total_questions));
                        ui.label(r.percentage.to_string());
                        ui.end_row();
                    }
                });
        });

        ui.add_space(8.0);
        if ui
            .add(Button::new("🗑 Clear history").fill(egui::Color32::DARK_RED))
            .clicked()
        {
            app.confirm_clear_scores = true;
        }
    });
}
