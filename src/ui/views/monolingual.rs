use crate::LearnApp;
use crate::model::Language;
use crate::monolingual::MonolingualEntry;
use crate::ui::helpers::speak_button;
use crate::ui::layout::simple_panel;
use egui::{Context, RichText, ScrollArea, TextEdit};

pub fn ui_monolingual(app: &mut LearnApp, ctx: &Context) {
    let rows: Vec<MonolingualEntry> = app.monolingual_rows().into_iter().cloned().collect();

    simple_panel(ctx, 640.0, |ui| {
        ui.heading("Definitions");
        ui.horizontal(|ui| {
            for lang in Language::ALL {
                let label = format!("{} ({})", lang.name(), app.monolingual.count_for(lang));
                ui.selectable_value(&mut app.monolingual_language, lang, label);
            }
        });
        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.add(
                TextEdit::singleline(&mut app.monolingual_search)
                    .hint_text("Word or definition")
                    .desired_width(260.0),
            );
        });
        ui.add_space(8.0);

        if rows.is_empty() {
            ui.label("No definitions found.");
            return;
        }

        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            for entry in &rows {
                ui.horizontal(|ui| {
                    speak_button(app, ui, &entry.word, entry.language);
                    ui.label(RichText::new(&entry.word).strong().size(18.0));
                    if let Some(p) = &entry.pronunciation {
                        ui.weak(format!("/{p}/"));
                    }
                });
                ui.label(&entry.definition);
                ui.separator();
            }
        });
    });
}
