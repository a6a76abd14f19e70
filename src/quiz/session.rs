use super::generator::{NUM_OPTIONS, generate_questions};
use crate::model::{Language, LanguagePair, QuizQuestion, QuizScore, WordEntry};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("You need at least {required} words to start a quiz (found {available}).")]
    NotEnoughWords { available: usize, required: usize },
    #[error("These {words} words are too alike to tell apart. Add words with different spellings and meanings.")]
    TooSimilar { words: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizState {
    AwaitingAnswer {
        index: usize,
    },
    ShowingFeedback {
        index: usize,
        selected: String,
        correct: bool,
    },
    Completed {
        score: usize,
        total: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub selected: String,
    pub correct: bool,
    pub correct_answer: String,
}

/// Result of a finished run, ready to be stored as a [`QuizScore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOutcome {
    pub language: Language,
    pub category: Option<String>,
    pub score: usize,
    pub total_questions: usize,
}

impl QuizOutcome {
    pub fn into_score(self, date: i64) -> QuizScore {
        QuizScore {
            language: self.language,
            category: self.category,
            score: self.score as u32,
            total_questions: self.total_questions as u32,
            date,
        }
    }
}

/// One pass through a generated question set.
///
/// `0 <= score <= answered <= total_questions` holds in every state.
#[derive(Clone, Debug)]
pub struct QuizSession {
    pool: Vec<WordEntry>,
    pair: LanguagePair,
    category: Option<String>,
    questions: Vec<QuizQuestion>,
    state: QuizState,
    score: usize,
    answered: usize,
}

impl QuizSession {
    pub fn start<R: Rng + ?Sized>(
        pool: Vec<WordEntry>,
        pair: LanguagePair,
        category: Option<String>,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let questions = generate_questions(&pool, pair, rng);
        if questions.is_empty() {
            return Err(if pool.len() < NUM_OPTIONS {
                QuizError::NotEnoughWords {
                    available: pool.len(),
                    required: NUM_OPTIONS,
                }
            } else {
                QuizError::TooSimilar { words: pool.len() }
            });
        }
        log::info!(
            "Quiz started: {} questions from {} words ({} -> {})",
            questions.len(),
            pool.len(),
            pair.learned,
            pair.meaning
        );
        Ok(Self {
            pool,
            pair,
            category,
            questions,
            state: QuizState::AwaitingAnswer { index: 0 },
            score: 0,
            answered: 0,
        })
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn pair(&self) -> LanguagePair {
        self.pair
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// The question being asked or reviewed; `None` once completed.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match &self.state {
            QuizState::AwaitingAnswer { index } | QuizState::ShowingFeedback { index, .. } => {
                self.questions.get(*index)
            }
            QuizState::Completed { .. } => None,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            QuizState::AwaitingAnswer { index } | QuizState::ShowingFeedback { index, .. } => {
                Some(*index)
            }
            QuizState::Completed { .. } => None,
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn progress_fraction(&self) -> f32 {
        if self.questions.is_empty() {
            0.0
        } else {
            self.answered as f32 / self.questions.len() as f32
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, QuizState::Completed { .. })
    }

    /// Scores `choice` against the current question. Ignored unless a question
    /// is awaiting an answer.
    pub fn submit_answer(&mut self, choice: &str) -> Option<AnswerFeedback> {
        let QuizState::AwaitingAnswer { index } = self.state else {
            return None;
        };
        let question = self.questions.get(index)?;
        let correct = choice == question.correct_answer;
        let feedback = AnswerFeedback {
            selected: choice.to_string(),
            correct,
            correct_answer: question.correct_answer.clone(),
        };
        self.answered += 1;
        if correct {
            self.score += 1;
        }
        self.state = QuizState::ShowingFeedback {
            index,
            selected: feedback.selected.clone(),
            correct,
        };
        Some(feedback)
    }

    /// Moves past the feedback. Returns the outcome when the last question was
    /// just left behind.
    pub fn advance(&mut self) -> Option<QuizOutcome> {
        let QuizState::ShowingFeedback { index, .. } = self.state else {
            return None;
        };
        let next = index + 1;
        if next < self.questions.len() {
            self.state = QuizState::AwaitingAnswer { index: next };
            return None;
        }
        self.state = QuizState::Completed {
            score: self.score,
            total: self.questions.len(),
        };
        Some(QuizOutcome {
            language: self.pair.learned,
            category: self.category.clone(),
            score: self.score,
            total_questions: self.questions.len(),
        })
    }

    /// New question set from the same pool, score reset.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let questions = generate_questions(&self.pool, self.pair, rng);
        if questions.is_empty() {
            log::warn!("Could not regenerate questions, repeating the previous set");
        } else {
            self.questions = questions;
        }
        self.state = QuizState::AwaitingAnswer { index: 0 };
        self.score = 0;
        self.answered = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(id: &str, word: &str, meaning: &str) -> WordEntry {
        WordEntry {
            id: id.into(),
            word: word.into(),
            meaning: meaning.into(),
            language: Language::English,
            target_language: Language::Tagalog,
            user_sentence: None,
            pronunciation: None,
            category: Some("Food".into()),
            ai_sentences: None,
            created_at: 0,
        }
    }

    fn pool() -> Vec<WordEntry> {
        vec![
            word("1", "Hello", "Kumusta"),
            word("2", "Water", "Tubig"),
            word("3", "Rice", "Kanin"),
            word("4", "Fish", "Isda"),
        ]
    }

    fn pair() -> LanguagePair {
        LanguagePair::new(Language::English, Language::Tagalog)
    }

    fn assert_invariant(s: &QuizSession) {
        assert!(s.score() <= s.answered());
        assert!(s.answered() <= s.total_questions());
    }

    #[test]
    fn refuses_small_pool() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = QuizSession::start(pool()[..2].to_vec(), pair(), None, &mut rng).unwrap_err();
        assert_eq!(
            err,
            QuizError::NotEnoughWords {
                available: 2,
                required: 4
            }
        );
    }

    #[test]
    fn lookalike_pool_is_not_called_too_small() {
        let mut rng = StdRng::seed_from_u64(0);
        let lookalikes = vec![
            word("1", "Rice", "Kanin"),
            word("2", "rice", "kanin"),
            word("3", "RICE", "Kanin"),
            word("4", "Rice ", "KANIN"),
        ];
        let err = QuizSession::start(lookalikes, pair(), None, &mut rng).unwrap_err();
        assert_eq!(err, QuizError::TooSimilar { words: 4 });
        assert!(!err.to_string().contains("at least"));
    }

    #[test]
    fn all_correct_run_reports_full_score_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut session =
            QuizSession::start(pool(), pair(), Some("Food".into()), &mut rng).unwrap();
        assert_eq!(session.total_questions(), 4);

        let mut outcome = None;
        while let Some(q) = session.current_question() {
            let answer = q.correct_answer.clone();
            let feedback = session.submit_answer(&answer).unwrap();
            assert!(feedback.correct);
            assert_invariant(&session);
            outcome = session.advance();
        }
        let outcome = outcome.unwrap();
        assert_eq!(outcome.score, 4);
        assert_eq!(outcome.total_questions, 4);
        assert_eq!(outcome.category.as_deref(), Some("Food"));
        assert_eq!(session.state(), &QuizState::Completed { score: 4, total: 4 });
        assert_eq!(session.advance(), None);

        let stored = outcome.into_score(99);
        assert_eq!(stored.percentage(), 100);
    }

    #[test]
    fn double_submit_does_not_change_score() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = QuizSession::start(pool(), pair(), None, &mut rng).unwrap();
        let answer = session.current_question().unwrap().correct_answer.clone();
        assert!(session.submit_answer(&answer).is_some());
        assert!(session.submit_answer(&answer).is_none());
        assert_eq!(session.score(), 1);
        assert_eq!(session.answered(), 1);
    }

    #[test]
    fn wrong_answer_reports_correct_one() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = QuizSession::start(pool(), pair(), None, &mut rng).unwrap();
        let q = session.current_question().unwrap().clone();
        let wrong = q.options.iter().find(|o| **o != q.correct_answer).unwrap();
        let feedback = session.submit_answer(wrong).unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.correct_answer, q.correct_answer);
        assert_eq!(session.score(), 0);
        assert_invariant(&session);
    }

    #[test]
    fn advance_requires_feedback_first() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::start(pool(), pair(), None, &mut rng).unwrap();
        assert_eq!(session.advance(), None);
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn restart_resets_progress() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = QuizSession::start(pool(), pair(), None, &mut rng).unwrap();
        let answer = session.current_question().unwrap().correct_answer.clone();
        session.submit_answer(&answer);
        session.advance();
        session.restart(&mut rng);
        assert_eq!(session.score(), 0);
        assert_eq!(session.answered(), 0);
        assert_eq!(session.state(), &QuizState::AwaitingAnswer { index: 0 });
        assert_eq!(session.progress_fraction(), 0.0);
    }
}
