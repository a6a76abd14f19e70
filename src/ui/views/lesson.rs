use crate::LearnApp;
use crate::learning_path::PASS_PERCENTAGE;
use crate::model::AppState;
use crate::ui::helpers::speak_button;
use crate::ui::layout::{centered_panel, message_line, two_button_row};
use egui::{Context, RichText, ScrollArea};

pub fn ui_lesson(app: &mut LearnApp, ctx: &Context) {
    let Some(lesson) = app.current_lesson().cloned() else {
        app.state = AppState::LearningPath;
        return;
    };
    let info = app
        .lesson
        .as_ref()
        .and_then(|(unit_id, slug)| app.lesson_info(unit_id, slug));
    let words = app.learning.study_pool(Some(&lesson.category));

    centered_panel(ctx, 480.0, 520.0, |ui| {
        let width = ui.available_width();
        ui.heading(&lesson.title);
        ui.label(RichText::new(&lesson.description).weak());
        if let Some(best) = info.as_ref().and_then(|i| i.best_percentage) {
            ui.label(format!("Best score: {best}% (pass: {PASS_PERCENTAGE}%)"));
        }
        if info.as_ref().is_some_and(|i| i.completed) {
            ui.label(RichText::new("✅ Completed").color(egui::Color32::GREEN));
        }
        message_line(ui, &app.message);
        ui.add_space(8.0);

        ui.label(RichText::new(format!("{} words", words.len())).strong());
        ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
            for word in &words {
                ui.horizontal(|ui| {
                    speak_button(app, ui, &word.word, word.language);
                    ui.label(format!("{} → {}", word.word, word.meaning));
                });
            }
        });

        ui.add_space(12.0);
        let (practise, back) = two_button_row(ui, width, "▶ Practise", "Back to path");
        if practise {
            app.practise_lesson();
        }
        if back {
            app.open_learning_path();
        }
    });
}
