use super::*;

impl LearnApp {
    /// Switches to a top-level screen from the navigation bar. A finished
    /// quiz is dropped once its summary is left.
    pub fn navigate(&mut self, state: AppState) {
        if self.state == AppState::QuizSummary && state != AppState::QuizSummary {
            self.quiz = None;
            self.last_feedback = None;
        }
        match state {
            AppState::Home => self.go_home(),
            AppState::LearningPath => self.open_learning_path(),
            AppState::WordList => self.open_word_list(),
            AppState::Dictionary => self.open_dictionary(),
            AppState::MonolingualDictionary => self.open_monolingual(),
            AppState::Flashcards => self.open_flashcards(),
            AppState::QuizSetup => self.open_quiz_setup(),
            AppState::Translate => self.open_translate(),
            _ => {}
        }
    }

    pub fn go_home(&mut self) {
        self.message.clear();
        self.state = AppState::Home;
    }

    pub fn open_word_list(&mut self) {
        self.message.clear();
        self.state = AppState::WordList;
    }

    pub fn open_dictionary(&mut self) {
        self.message.clear();
        self.bilingual_sentences.clear();
        self.state = AppState::Dictionary;
    }

    pub fn open_monolingual(&mut self) {
        self.message.clear();
        self.monolingual_language = self.learning.preferences().source_language();
        self.state = AppState::MonolingualDictionary;
    }

    pub fn open_quiz_setup(&mut self) {
        self.message.clear();
        self.state = AppState::QuizSetup;
    }

    pub fn open_translate(&mut self) {
        self.message.clear();
        self.state = AppState::Translate;
    }

    pub fn open_learning_path(&mut self) {
        self.message.clear();
        self.lesson = None;
        self.state = AppState::LearningPath;
    }

    /// Opens a lesson if it exists and is unlocked for the current language.
    pub fn open_lesson(&mut self, unit_id: &str, slug: &str) {
        let unlocked = self
            .lesson_info(unit_id, slug)
            .is_some_and(|lesson| lesson.unlocked);
        if !unlocked {
            self.message = "Finish the previous lessons first.".into();
            return;
        }
        self.message.clear();
        self.lesson = Some((unit_id.to_string(), slug.to_string()));
        self.state = AppState::Lesson;
    }

    fn current_lesson_unlocked(&self) -> bool {
        self.lesson
            .as_ref()
            .and_then(|(unit_id, slug)| self.lesson_info(unit_id, slug))
            .is_some_and(|lesson| lesson.unlocked)
    }

    pub fn practise_lesson(&mut self) {
        if !self.current_lesson_unlocked() {
            self.message = "Finish the previous lessons first.".into();
            return;
        }
        let Some(category) = self
            .current_lesson()
            .map(|lesson| lesson.category.clone())
        else {
            return;
        };
        self.start_quiz(Some(category), AppState::Lesson);
    }

    // --- languages ---

    pub fn set_source_language(&mut self, language: Language) {
        self.learning.set_source_language(language);
        self.after_language_change();
    }

    pub fn set_target_language(&mut self, language: Language) {
        self.learning.set_target_language(language);
        self.after_language_change();
    }

    pub fn swap_languages(&mut self) {
        self.learning.swap_languages();
        self.after_language_change();
    }

    /// Quiz, deck and sentence results belong to the old pair.
    fn after_language_change(&mut self) {
        self.deck = None;
        self.bilingual_sentences.clear();
        self.translate_output.clear();
        self.selected_category = None;
        self.last_feedback = None;
        if self.quiz.take().is_some()
            && matches!(self.state, AppState::Quiz | AppState::QuizSummary)
        {
            self.state = self.quiz_return;
        }
        if self.state == AppState::Lesson && !self.current_lesson_unlocked() {
            self.open_learning_path();
        }
        if self.state == AppState::Flashcards {
            self.open_flashcards();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;

    #[test]
    fn locked_lessons_do_not_open() {
        let mut app = app();
        app.open_learning_path();
        app.open_lesson("unit1", "common-phrases");
        assert_eq!(app.state, AppState::LearningPath);
        app.open_lesson("unit1", "greetings");
        assert_eq!(app.state, AppState::Lesson);
        assert_eq!(app.current_lesson().unwrap().category, "Greetings");
    }

    #[test]
    fn changing_language_abandons_running_quiz() {
        let mut app = app();
        app.open_lesson("unit1", "greetings");
        app.practise_lesson();
        assert_eq!(app.state, AppState::Quiz);
        app.swap_languages();
        assert!(app.quiz.is_none());
        assert_eq!(app.state, AppState::Lesson);
    }

    fn finish_perfectly(app: &mut LearnApp) {
        while let Some(answer) = app
            .quiz
            .as_ref()
            .and_then(|s| s.current_question())
            .map(|q| q.correct_answer.clone())
        {
            app.answer_quiz(&answer);
            app.next_quiz_question();
        }
    }

    #[test]
    fn finished_quiz_is_dropped_when_leaving_summary() {
        let mut app = app();
        app.start_quiz(Some("Colors".into()), AppState::QuizSetup);
        finish_perfectly(&mut app);
        assert_eq!(app.state, AppState::QuizSummary);

        app.navigate(AppState::Translate);
        assert!(app.quiz.is_none());
        app.swap_languages();
        assert_eq!(app.state, AppState::Translate);
    }

    #[test]
    fn changing_language_on_summary_returns_to_quiz_origin() {
        let mut app = app();
        app.start_quiz(Some("Colors".into()), AppState::QuizSetup);
        finish_perfectly(&mut app);
        app.swap_languages();
        assert!(app.quiz.is_none());
        assert_eq!(app.state, AppState::QuizSetup);
    }

    #[test]
    fn lesson_locked_by_language_change_cannot_be_practised() {
        let mut app = app();
        app.open_lesson("unit1", "greetings");
        app.practise_lesson();
        finish_perfectly(&mut app);
        app.finish_quiz();
        app.open_lesson("unit1", "common-phrases");
        assert_eq!(app.state, AppState::Lesson);

        app.swap_languages();
        assert_eq!(app.state, AppState::LearningPath);

        app.lesson = Some(("unit1".into(), "common-phrases".into()));
        app.state = AppState::Lesson;
        app.practise_lesson();
        assert_eq!(app.state, AppState::Lesson);
        assert!(app.quiz.is_none());
        assert!(app.message.contains("previous lessons"));
    }

    #[test]
    fn equal_languages_are_corrected() {
        let mut app = app();
        app.set_target_language(Language::English);
        let pair = app.learning.pair();
        assert_ne!(pair.learned, pair.meaning);
    }
}
