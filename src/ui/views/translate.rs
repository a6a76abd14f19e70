use crate::LearnApp;
use crate::ui::helpers::speak_button;
use crate::ui::layout::{centered_panel, message_line};
use egui::{Button, Context, RichText, TextEdit};

pub fn ui_translate(app: &mut LearnApp, ctx: &Context) {
    let pair = app.learning.pair();
    let configured = app.gateways.translator.is_configured();
    let busy = app.jobs.translating();

    centered_panel(ctx, 420.0, 560.0, |ui| {
        let width = ui.available_width();
        ui.heading("Translate");
        if !configured {
            ui.label(RichText::new("Set GEMINI_API_KEY to enable translation.").weak());
        }
        message_line(ui, &app.message);

        ui.horizontal(|ui| {
            ui.label(RichText::new(pair.learned.name()).strong());
            let input = app.translate_input.clone();
            speak_button(app, ui, &input, pair.learned);
        });
        ui.add(
            TextEdit::multiline(&mut app.translate_input)
                .desired_rows(4)
                .desired_width(width),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!busy, Button::new("🌐 Translate").min_size([140.0, 32.0].into()))
                .clicked()
            {
                app.request_translation();
            }
            if ui.button("⇄").on_hover_text("Swap languages").clicked() {
                let previous = std::mem::take(&mut app.translate_output);
                app.swap_languages();
                if !previous.is_empty() {
                    app.translate_input = previous;
                }
            }
            if busy {
                ui.spinner();
            }
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new(pair.meaning.name()).strong());
            let output = app.translate_output.clone();
            speak_button(app, ui, &output, pair.meaning);
        });
        let mut output = app.translate_output.clone();
        ui.add(
            TextEdit::multiline(&mut output)
                .desired_rows(4)
                .desired_width(width)
                .interactive(false),
        );
    });
}
