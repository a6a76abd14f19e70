use crate::LearnApp;
use crate::model::Language;
use crate::ui::helpers::{category_picker, speak_button, word_details};
use crate::ui::layout::{message_line, simple_panel};
use egui::{Button, Context, Grid, ScrollArea, TextEdit};

pub fn ui_word_list(app: &mut LearnApp, ctx: &Context) {
    let categories = app.learning.words().list_categories();
    let rows = app.word_list_rows();
    let total = app.learning.words().len();

    simple_panel(ctx, 760.0, |ui| {
        ui.heading(if app.word_form.is_editing() { "Edit word" } else { "Add a word" });
        message_line(ui, &app.message);

        Grid::new("word_form_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Word");
                ui.add(TextEdit::singleline(&mut app.word_form.word).desired_width(260.0));
                ui.end_row();

                ui.label("Meaning");
                ui.add(TextEdit::singleline(&mut app.word_form.meaning).desired_width(260.0));
                ui.end_row();

                ui.label("Languages");
                ui.horizontal(|ui| {
                    form_language(ui, "form_language", &mut app.word_form.language);
                    ui.label("→");
                    form_language(ui, "form_target_language", &mut app.word_form.target_language);
                });
                ui.end_row();

                ui.label("Category");
                ui.add(TextEdit::singleline(&mut app.word_form.category).desired_width(260.0));
                ui.end_row();

                ui.label("Pronunciation");
                ui.add(TextEdit::singleline(&mut app.word_form.pronunciation).desired_width(260.0));
                ui.end_row();

                ui.label("Your sentence");
                ui.add(TextEdit::multiline(&mut app.word_form.user_sentence).desired_rows(2).desired_width(260.0));
                ui.end_row();
            });

        ui.horizontal(|ui| {
            let save_label = if app.word_form.is_editing() { "💾 Save" } else { "➕ Add" };
            if ui.button(save_label).clicked() {
                app.save_word_form();
            }
            if app.word_form.is_editing() && ui.button("Cancel").clicked() {
                app.reset_word_form();
            }
        });

        ui.separator();
        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.add(TextEdit::singleline(&mut app.word_search).hint_text("Search words").desired_width(220.0));
            category_picker(ui, "word_list_category", &mut app.selected_category, &categories);
            ui.label(format!("{} / {total}", rows.len()));
            if ui
                .add_enabled(total > 0, Button::new("🗑 Delete all").fill(egui::Color32::DARK_RED))
                .clicked()
            {
                app.confirm_clear_words = true;
            }
        });
        ui.add_space(6.0);

        if rows.is_empty() {
            ui.label("No words match.");
            return;
        }

        let can_generate = app.gateways.sentences.can_generate() && !app.jobs.generating_sentences();
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            for entry in &rows {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            word_details(ui, entry);
                            ui.small(format!(
                                "{} → {}{}",
                                entry.language,
                                entry.target_language,
                                entry.category.as_deref().map(|c| format!(" · {c}")).unwrap_or_default()
                            ));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("🗑").on_hover_text("Delete").clicked() {
                                app.delete_word(&entry.id);
                            }
                            if ui.button("✏").on_hover_text("Edit").clicked() {
                                app.begin_edit_word(&entry.id);
                            }
                            if ui
                                .add_enabled(can_generate, Button::new("✨"))
                                .on_hover_text("Generate example sentences")
                                .clicked()
                            {
                                app.request_ai_sentences(&entry.id);
                            }
                            speak_button(app, ui, &entry.word, entry.language);
                        });
                    });
                });
            }
        });
    });
}

fn form_language(ui: &mut egui::Ui, id: &str, value: &mut Language) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(value.name())
        .show_ui(ui, |ui| {
            for lang in Language::ALL {
                ui.selectable_value(value, lang, lang.name());
            }
        });
}
