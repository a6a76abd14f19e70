use super::*;

impl LearnApp {
    pub fn clear_all_words(&mut self) {
        self.learning.clear_words();
        self.deck = None;
        self.quiz = None;
        self.reset_word_form();
        self.confirm_clear_words = false;
        self.message = "All words deleted.".into();
    }

    pub fn clear_quiz_history(&mut self) {
        self.learning.clear_history();
        self.last_score = None;
        self.confirm_clear_scores = false;
        self.message = "Quiz history cleared.".into();
    }

    pub fn confirm_clear_words_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("Delete all words")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Delete every word in your list? This cannot be undone.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, delete").clicked() {
                        self.clear_all_words();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_clear_words = false;
                    }
                });
            });
    }

    pub fn confirm_clear_scores_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("Clear quiz history")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Clear every quiz score? Learning path progress is lost too.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, clear").clicked() {
                        self.clear_quiz_history();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_clear_scores = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;

    #[test]
    fn clearing_words_empties_list_and_practice() {
        let mut app = app();
        app.open_flashcards();
        app.confirm_clear_words = true;
        app.clear_all_words();
        assert!(app.learning.words().is_empty());
        assert!(app.deck.is_none());
        assert!(!app.confirm_clear_words);
    }

    #[test]
    fn clearing_history_relocks_the_path() {
        let mut app = app();
        app.start_quiz(Some("Greetings".into()), AppState::LearningPath);
        while let Some(answer) = app
            .quiz
            .as_ref()
            .and_then(|s| s.current_question())
            .map(|q| q.correct_answer.clone())
        {
            app.answer_quiz(&answer);
            app.next_quiz_question();
        }
        assert!(app.lesson_info("unit1", "common-phrases").unwrap().unlocked);
        app.clear_quiz_history();
        assert!(!app.lesson_info("unit1", "common-phrases").unwrap().unlocked);
    }
}
