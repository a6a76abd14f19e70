use crate::LearnApp;
use crate::ui::helpers::{category_picker, speak_button, word_details};
use crate::ui::layout::{message_line, simple_panel};
use egui::{Button, Context, RichText, ScrollArea, TextEdit};

pub fn ui_dictionary(app: &mut LearnApp, ctx: &Context) {
    let pair = app.learning.pair();
    let categories = app.pair_categories();
    let rows = app.dictionary_rows();

    simple_panel(ctx, 720.0, |ui| {
        ui.heading(format!("{} – {} dictionary", pair.learned, pair.meaning));
        message_line(ui, &app.message);

        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.add(TextEdit::singleline(&mut app.dictionary_search).hint_text("Search").desired_width(240.0));
            category_picker(ui, "dictionary_category", &mut app.selected_category, &categories);
        });
        ui.add_space(6.0);

        ScrollArea::vertical()
            .id_salt("dictionary_rows")
            .max_height(ui.available_height() * 0.6)
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if rows.is_empty() {
                    ui.label("No entries for this language pair.");
                }
                for entry in &rows {
                    ui.horizontal(|ui| {
                        speak_button(app, ui, &entry.word, entry.language);
                        ui.vertical(|ui| word_details(ui, entry));
                        if ui.small_button("Examples").clicked() {
                            app.bilingual_word = entry.word.clone();
                            app.request_bilingual_sentences();
                        }
                    });
                    ui.separator();
                }
            });

        ui.add_space(8.0);
        ui.label(RichText::new("Example sentences (Tatoeba)").strong());
        ui.horizontal(|ui| {
            ui.add(TextEdit::singleline(&mut app.bilingual_word).desired_width(200.0));
            let busy = app.jobs.fetching_bilingual();
            if ui.add_enabled(!busy, Button::new("Look up")).clicked() {
                app.request_bilingual_sentences();
            }
            if busy {
                ui.spinner();
            }
        });
        for pair in &app.bilingual_sentences {
            ui.label(format!("{} ({})", pair.source_text, pair.source_language));
            ui.weak(format!("{} ({})", pair.target_text, pair.target_language));
            ui.add_space(4.0);
        }
    });
}
