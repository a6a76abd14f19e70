use crate::LearnApp;
use crate::config::APP_NAME;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::{centered_panel, message_line};
use egui::{Context, RichText};

pub fn ui_home(app: &mut LearnApp, ctx: &Context) {
    let pair = app.learning.pair();
    let word_count = app.learning.study_pool(None).len();
    let stats = app.quiz_stats();
    let last_score = app.score_rows().into_iter().next();

    centered_panel(ctx, 420.0, 420.0, |ui| {
        let btn_w = ui.available_width();
        let btn_h = 40.0;

        ui.vertical_centered(|ui| {
            ui.heading(APP_NAME);
            ui.add_space(6.0);
            ui.label(format!("Learning {} with meanings in {}", pair.learned, pair.meaning));
            ui.label(RichText::new(format!("{word_count} words to study")).weak());
            if let Some(avg) = stats.average_percentage {
                ui.label(RichText::new(format!("Average quiz score: {avg}%")).weak());
            }
            if let Some(row) = &last_score {
                ui.label(RichText::new(format!("Last quiz: {}", row.label())).weak());
            }
        });
        message_line(ui, &app.message);
        ui.add_space(12.0);

        if big_list_button(ui, "🧭 Learning path".to_owned(), btn_w, btn_h, true) {
            app.open_learning_path();
        }
        ui.add_space(5.0);
        if big_list_button(ui, "🃏 Flashcards".to_owned(), btn_w, btn_h, word_count > 0) {
            app.open_flashcards();
        }
        ui.add_space(5.0);
        if big_list_button(ui, "❓ Quiz".to_owned(), btn_w, btn_h, true) {
            app.open_quiz_setup();
        }
        ui.add_space(5.0);
        if big_list_button(ui, "📖 Dictionary".to_owned(), btn_w, btn_h, true) {
            app.open_dictionary();
        }
        ui.add_space(5.0);
        if big_list_button(ui, "🌐 Translate".to_owned(), btn_w, btn_h, true) {
            app.open_translate();
        }
        ui.add_space(5.0);
        if big_list_button(ui, "📝 My words".to_owned(), btn_w, btn_h, true) {
            app.open_word_list();
        }
    });
}
