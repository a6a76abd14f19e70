use crate::model::{Language, QuizScore};
use crate::store::{self, KeyValueStore, QUIZ_SCORES_KEY};

/// Completed quiz results, oldest first. Append-only apart from [`QuizHistory::clear`].
#[derive(Debug, Clone, Default)]
pub struct QuizHistory {
    scores: Vec<QuizScore>,
}

impl QuizHistory {
    pub fn new(scores: Vec<QuizScore>) -> Self {
        Self { scores }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            scores: store::read(store, QUIZ_SCORES_KEY, Vec::new()),
        }
    }

    pub fn scores(&self) -> &[QuizScore] {
        &self.scores
    }

    pub fn append(&mut self, store: &mut dyn KeyValueStore, score: QuizScore) {
        log::info!(
            "Quiz finished: {}/{} in {}{}",
            score.score,
            score.total_questions,
            score.language,
            score
                .category
                .as_deref()
                .map(|c| format!(" ({c})"))
                .unwrap_or_default()
        );
        self.scores.push(score);
        store::write(store, QUIZ_SCORES_KEY, &self.scores);
    }

    pub fn clear(&mut self, store: &mut dyn KeyValueStore) {
        self.scores.clear();
        store::remove(store, QUIZ_SCORES_KEY);
    }

    pub fn attempts_for(&self, language: Language) -> Vec<&QuizScore> {
        self.scores
            .iter()
            .filter(|s| s.language == language)
            .collect()
    }

    /// Best percentage for `language`, restricted to `category` when given.
    pub fn best_percentage(&self, language: Language, category: Option<&str>) -> Option<u32> {
        self.scores
            .iter()
            .filter(|s| s.language == language)
            .filter(|s| {
                category.is_none_or(|c| {
                    s.category
                        .as_deref()
                        .is_some_and(|sc| sc.eq_ignore_ascii_case(c))
                })
            })
            .map(QuizScore::percentage)
            .max()
    }

    pub fn average_percentage(&self, language: Language) -> Option<u32> {
        let attempts = self.attempts_for(language);
        if attempts.is_empty() {
            return None;
        }
        let sum: u32 = attempts.iter().map(|s| s.percentage()).sum();
        Some((sum as f64 / attempts.len() as f64).round() as u32)
    }
}
