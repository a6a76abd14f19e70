use crate::LearnApp;
use crate::model::{AppState, Language};
use egui::{Button, CentralPanel, Context, Frame, RichText, Ui};

pub fn top_panel(app: &mut LearnApp, ctx: &Context, navigation: bool) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            if navigation {
                let screens = [
                    (AppState::Home, "🏠 Home"),
                    (AppState::LearningPath, "🧭 Path"),
                    (AppState::WordList, "📝 Words"),
                    (AppState::Dictionary, "📖 Dictionary"),
                    (AppState::MonolingualDictionary, "📚 Definitions"),
                    (AppState::Flashcards, "🃏 Flashcards"),
                    (AppState::QuizSetup, "❓ Quiz"),
                    (AppState::Translate, "🌐 Translate"),
                ];
                for (state, label) in screens {
                    if ui.selectable_label(app.state == state, label).clicked() {
                        app.navigate(state);
                    }
                }
                ui.separator();
            }

            language_selectors(app, ui, navigation);
        });
    });
}

fn language_selectors(app: &mut LearnApp, ui: &mut Ui, enabled: bool) {
    let pair = app.learning.pair();
    ui.add_enabled_ui(enabled, |ui| {
        ui.label("Learn");
        if let Some(lang) = language_combo(ui, "source_language", pair.learned) {
            app.set_source_language(lang);
        }
        if ui.button("⇄").on_hover_text("Swap languages").clicked() {
            app.swap_languages();
        }
        ui.label("in");
        if let Some(lang) = language_combo(ui, "target_language", pair.meaning) {
            app.set_target_language(lang);
        }
    });
}

/// Returns the newly picked language, if any.
fn language_combo(ui: &mut Ui, id: &str, current: Language) -> Option<Language> {
    let mut picked = current;
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.name())
        .show_ui(ui, |ui| {
            for lang in Language::ALL {
                ui.selectable_value(&mut picked, lang, lang.name());
            }
        });
    (picked != current).then_some(picked)
}

pub fn bottom_panel(app: &mut LearnApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                app.dark_mode = true;
                ctx.set_visuals(app.visuals());
            }
            if ui.button("☀ Light mode").clicked() {
                app.dark_mode = false;
                ctx.set_visuals(app.visuals());
            }
            if app.jobs.any_pending() {
                ui.spinner();
            }
        });
    });
}

/// Panel centered both ways, with a maximum content width.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Top-aligned panel for list screens.
pub fn simple_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            let w = ui.available_width().min(max_width);
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    ui.set_width(w);
                    inner(ui);
                });
        });
    });
}

/// Two equally sized buttons on one row. Returns (left clicked, right clicked).
pub fn two_button_row(ui: &mut Ui, panel_width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui.add_sized([btn_w, 36.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 36.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}

/// Inline status line shown under headings.
pub fn message_line(ui: &mut Ui, message: &str) {
    if message.is_empty() {
        return;
    }
    ui.add_space(6.0);
    ui.label(RichText::new(message).color(egui::Color32::YELLOW).strong());
    ui.add_space(6.0);
}
