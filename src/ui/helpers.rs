// src/ui/helpers.rs
use crate::LearnApp;
use crate::model::{Language, WordEntry};
use egui::{Button, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Combo box over `categories`; `None` means every category.
pub fn category_picker(ui: &mut Ui, id: &str, selected: &mut Option<String>, categories: &[String]) {
    let text = selected.clone().unwrap_or_else(|| "All categories".to_owned());
    egui::ComboBox::from_id_salt(id)
        .selected_text(text)
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, None, "All categories");
            for c in categories {
                ui.selectable_value(selected, Some(c.clone()), c.as_str());
            }
        });
}

pub fn speak_button(app: &mut LearnApp, ui: &mut Ui, text: &str, language: Language) {
    let enabled = !app.jobs.speaking() && !text.trim().is_empty();
    if ui
        .add_enabled(enabled, Button::new("🔊"))
        .on_hover_text(format!("Listen ({language})"))
        .clicked()
    {
        app.speak(text, language);
    }
}

/// Word, meaning and the optional extras of an entry.
pub fn word_details(ui: &mut Ui, entry: &WordEntry) {
    ui.label(format!("{} → {}", entry.word, entry.meaning));
    if let Some(p) = &entry.pronunciation {
        ui.weak(format!("/{p}/"));
    }
    if let Some(s) = &entry.user_sentence {
        ui.label(format!("“{s}”"));
    }
    if let Some(sentences) = &entry.ai_sentences {
        for s in sentences {
            ui.small(format!("• {s}"));
        }
    }
}
