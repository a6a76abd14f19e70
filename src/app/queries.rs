use super::*;
use crate::learning_path::LessonConfig;
use crate::model::WordEntry;
use crate::monolingual::MonolingualEntry;
use crate::repository::SearchOrder;

/// Summary numbers for the quiz setup screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizStats {
    pub attempts: usize,
    pub best_percentage: Option<u32>,
    pub average_percentage: Option<u32>,
}

pub fn format_date(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

impl LearnApp {
    pub fn unit_infos(&self) -> Vec<UnitInfo> {
        self.path.progress(
            self.learning.history(),
            self.learning.preferences().source_language(),
        )
    }

    pub fn lesson_info(&self, unit_id: &str, slug: &str) -> Option<LessonInfo> {
        self.unit_infos()
            .into_iter()
            .find(|u| u.id == unit_id)?
            .lessons
            .into_iter()
            .find(|l| l.slug == slug)
    }

    pub fn current_lesson(&self) -> Option<&LessonConfig> {
        let (unit_id, slug) = self.lesson.as_ref()?;
        self.path.lesson(unit_id, slug)
    }

    /// Categories with at least one word in the current pair.
    pub fn pair_categories(&self) -> Vec<String> {
        let pool = self.learning.study_pool(None);
        self.learning
            .words()
            .list_categories()
            .into_iter()
            .filter(|c| pool.iter().any(|w| w.has_category(c)))
            .collect()
    }

    /// Word list manager rows: every stored entry, newest first.
    pub fn word_list_rows(&self) -> Vec<WordEntry> {
        self.learning.words().search(
            None,
            &self.word_search,
            self.selected_category.as_deref(),
            SearchOrder::NewestFirst,
        )
    }

    /// Bilingual dictionary rows: the current pair, alphabetical.
    pub fn dictionary_rows(&self) -> Vec<WordEntry> {
        self.learning.words().search(
            Some(self.learning.pair()),
            &self.dictionary_search,
            self.selected_category.as_deref(),
            SearchOrder::Alphabetical,
        )
    }

    pub fn monolingual_rows(&self) -> Vec<&MonolingualEntry> {
        self.monolingual
            .search(self.monolingual_language, &self.monolingual_search)
    }

    /// Scores of the current source language, newest first.
    pub fn score_rows(&self) -> Vec<ScoreRow> {
        let language = self.learning.preferences().source_language();
        let mut rows: Vec<ScoreRow> = self
            .learning
            .history()
            .attempts_for(language)
            .into_iter()
            .rev()
            .map(|s| ScoreRow {
                language: s.language.to_string(),
                category: s.category.clone().unwrap_or_else(|| "All words".into()),
                score: s.score,
                total_questions: s.total_questions,
                percentage: s.percentage(),
                date: format_date(s.date),
            })
            .collect();
        rows.truncate(20);
        rows
    }

    pub fn quiz_stats(&self) -> QuizStats {
        let language = self.learning.preferences().source_language();
        let history = self.learning.history();
        QuizStats {
            attempts: history.attempts_for(language).len(),
            best_percentage: history.best_percentage(language, None),
            average_percentage: history.average_percentage(language),
        }
    }
}
