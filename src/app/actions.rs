use super::*;

impl LearnApp {
    /// Starts a quiz over the current pair, optionally restricted to `category`.
    /// Stays on the current screen with a message when the pool is too small.
    pub fn start_quiz(&mut self, category: Option<String>, return_to: AppState) {
        match self.learning.start_quiz(category) {
            Ok(session) => {
                self.quiz = Some(session);
                self.quiz_return = return_to;
                self.last_feedback = None;
                self.last_score = None;
                self.message.clear();
                self.state = AppState::Quiz;
            }
            Err(e) => {
                self.message = e.to_string();
            }
        }
    }

    pub fn answer_quiz(&mut self, choice: &str) {
        let Some(session) = self.quiz.as_mut() else {
            return;
        };
        if let Some(feedback) = session.submit_answer(choice) {
            self.last_feedback = Some(feedback);
        }
    }

    pub fn next_quiz_question(&mut self) {
        let Some(session) = self.quiz.as_mut() else {
            return;
        };
        let outcome = session.advance();
        self.last_feedback = None;
        if let Some(outcome) = outcome {
            let score = self.learning.record_outcome(outcome);
            self.message = format!(
                "You scored {}/{} ({}%).",
                score.score,
                score.total_questions,
                score.percentage()
            );
            self.last_score = Some(score);
            self.state = AppState::QuizSummary;
        }
    }

    pub fn restart_quiz(&mut self) {
        if let Some(mut session) = self.quiz.take() {
            self.learning.restart_quiz(&mut session);
            self.quiz = Some(session);
            self.last_feedback = None;
            self.last_score = None;
            self.message.clear();
            self.state = AppState::Quiz;
        }
    }

    /// Leaves the quiz without recording anything.
    pub fn quit_quiz(&mut self) {
        self.quiz = None;
        self.last_feedback = None;
        self.message.clear();
        self.state = self.quiz_return;
    }

    pub fn finish_quiz(&mut self) {
        self.quiz = None;
        self.last_feedback = None;
        self.state = self.quiz_return;
    }

    // --- flashcards ---

    pub fn open_flashcards(&mut self) {
        let deck = self.learning.new_deck(self.selected_category.as_deref());
        if deck.is_empty() {
            self.message = "No words for this language pair yet. Add some in the word list.".into();
        } else {
            self.message.clear();
        }
        self.deck = Some(deck);
        self.state = AppState::Flashcards;
    }

    pub fn shuffle_flashcards(&mut self) {
        if let Some(mut deck) = self.deck.take() {
            self.learning.shuffle_deck(&mut deck);
            self.deck = Some(deck);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;

    #[test]
    fn perfect_run_lands_on_summary_with_score() {
        let mut app = app();
        app.start_quiz(Some("Colors".into()), AppState::QuizSetup);
        assert_eq!(app.state, AppState::Quiz);

        while let Some(answer) = app
            .quiz
            .as_ref()
            .and_then(|s| s.current_question())
            .map(|q| q.correct_answer.clone())
        {
            app.answer_quiz(&answer);
            assert!(app.last_feedback.as_ref().is_some_and(|f| f.correct));
            app.next_quiz_question();
        }

        assert_eq!(app.state, AppState::QuizSummary);
        let score = app.last_score.clone().unwrap();
        assert_eq!(score.score, score.total_questions);
        assert_eq!(app.learning.history().scores().len(), 1);

        app.finish_quiz();
        assert_eq!(app.state, AppState::QuizSetup);
        assert!(app.quiz.is_none());
    }

    #[test]
    fn unknown_category_keeps_user_on_setup() {
        let mut app = app();
        app.state = AppState::QuizSetup;
        app.start_quiz(Some("Astronomy".into()), AppState::QuizSetup);
        assert_eq!(app.state, AppState::QuizSetup);
        assert!(app.quiz.is_none());
        assert!(app.message.contains("at least 4"));
    }

    #[test]
    fn restart_resets_progress_without_recording() {
        let mut app = app();
        app.start_quiz(Some("Numbers".into()), AppState::QuizSetup);
        app.answer_quiz("definitely wrong");
        app.restart_quiz();
        let session = app.quiz.as_ref().unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.answered(), 0);
        assert!(app.learning.history().scores().is_empty());
    }

    #[test]
    fn flashcards_follow_selected_category() {
        let mut app = app();
        app.selected_category = Some("Days".into());
        app.open_flashcards();
        let deck = app.deck.as_ref().unwrap();
        assert!(!deck.is_empty());
        assert!(deck.current().unwrap().has_category("days"));
    }
}
