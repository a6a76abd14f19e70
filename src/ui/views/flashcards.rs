use crate::LearnApp;
use crate::ui::helpers::{category_picker, speak_button};
use crate::ui::layout::{centered_panel, message_line, two_button_row};
use egui::{Button, Context, RichText};

pub fn ui_flashcards(app: &mut LearnApp, ctx: &Context) {
    let categories = app.pair_categories();
    let card = app.deck.as_ref().and_then(|d| d.current().cloned());
    let position = app.deck.as_ref().and_then(|d| d.position());
    let flipped = app.deck.as_ref().is_some_and(|d| d.is_flipped());
    let show_pronunciation = app.deck.as_ref().is_some_and(|d| d.shows_pronunciation());

    centered_panel(ctx, 380.0, 480.0, |ui| {
        let width = ui.available_width();

        ui.horizontal(|ui| {
            ui.heading("Flashcards");
            let before = app.selected_category.clone();
            category_picker(ui, "flashcard_category", &mut app.selected_category, &categories);
            if app.selected_category != before {
                app.open_flashcards();
            }
        });
        message_line(ui, &app.message);

        let Some(card) = card else {
            return;
        };

        if let Some((n, total)) = position {
            ui.label(RichText::new(format!("{n} / {total}")).weak());
        }
        ui.add_space(10.0);

        let (face, language) = if flipped {
            (&card.meaning, card.target_language)
        } else {
            (&card.word, card.language)
        };
        let clicked_card = ui
            .add_sized([width, 140.0], Button::new(RichText::new(face).size(30.0)))
            .on_hover_text("Click to flip")
            .clicked();
        if clicked_card {
            if let Some(deck) = app.deck.as_mut() {
                deck.flip();
            }
        }
        ui.label(RichText::new(language.name()).weak());

        ui.horizontal(|ui| {
            speak_button(app, ui, face, language);
            if card.pronunciation.is_some() && ui.button("Pronunciation").clicked() {
                if let Some(deck) = app.deck.as_mut() {
                    deck.toggle_pronunciation();
                }
            }
            if ui.button("🔀 Shuffle").clicked() {
                app.shuffle_flashcards();
            }
        });
        if show_pronunciation {
            if let Some(p) = &card.pronunciation {
                ui.label(format!("/{p}/"));
            }
        }

        ui.add_space(10.0);
        let (prev, next) = two_button_row(ui, width, "◀ Previous", "Next ▶");
        if let Some(deck) = app.deck.as_mut() {
            if prev {
                deck.prev();
            }
            if next {
                deck.next();
            }
        }
    });
}
