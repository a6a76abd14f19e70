//! Units of lessons, each lesson practising one word category.
//!
//! Progress is never stored: it is derived from the quiz history each time.
//! A lesson counts as completed once a quiz in the current source language
//! and the lesson's category scored at least [`PASS_PERCENTAGE`].

use crate::data::read_learning_path;
use crate::history::QuizHistory;
use crate::model::Language;
use crate::text_utils::{deslugify, slugify};
use crate::view_models::{LessonInfo, UnitInfo};
use serde::Deserialize;

pub const PASS_PERCENTAGE: u32 = 80;

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UnitConfig {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<LessonConfig>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LessonConfig {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    pub category: String,
    pub description: String,
}

#[derive(Clone, Debug, Default)]
pub struct LearningPath {
    units: Vec<UnitConfig>,
}

impl LearningPath {
    pub fn new(mut units: Vec<UnitConfig>) -> Self {
        for lesson in units.iter_mut().flat_map(|u| u.lessons.iter_mut()) {
            if lesson.slug.trim().is_empty() {
                lesson.slug = slugify(&lesson.category);
            }
            if lesson.title.trim().is_empty() {
                lesson.title = deslugify(&lesson.slug);
            }
        }
        Self { units }
    }

    pub fn embedded() -> Self {
        match read_learning_path() {
            Ok(units) => Self::new(units),
            Err(e) => {
                log::error!("Embedded learning path is invalid: {e}");
                Self::default()
            }
        }
    }

    pub fn units(&self) -> &[UnitConfig] {
        &self.units
    }

    pub fn unit(&self, unit_id: &str) -> Option<&UnitConfig> {
        self.units.iter().find(|u| u.id == unit_id)
    }

    pub fn lesson(&self, unit_id: &str, slug: &str) -> Option<&LessonConfig> {
        self.unit(unit_id)?.lessons.iter().find(|l| l.slug == slug)
    }

    pub fn is_lesson_completed(
        &self,
        lesson: &LessonConfig,
        history: &QuizHistory,
        language: Language,
    ) -> bool {
        history
            .best_percentage(language, Some(&lesson.category))
            .is_some_and(|p| p >= PASS_PERCENTAGE)
    }

    /// Unlock/completion state of every unit for `language`.
    pub fn progress(&self, history: &QuizHistory, language: Language) -> Vec<UnitInfo> {
        let mut infos: Vec<UnitInfo> = Vec::with_capacity(self.units.len());
        for (idx, unit) in self.units.iter().enumerate() {
            let unit_unlocked = infos.last().is_none_or(|prev| prev.completed);
            let mut lessons: Vec<LessonInfo> = Vec::with_capacity(unit.lessons.len());
            for (lidx, lesson) in unit.lessons.iter().enumerate() {
                let unlocked = unit_unlocked && lessons.last().is_none_or(|prev| prev.completed);
                lessons.push(LessonInfo {
                    idx: lidx,
                    slug: lesson.slug.clone(),
                    title: lesson.title.clone(),
                    category: lesson.category.clone(),
                    description: lesson.description.clone(),
                    unlocked,
                    completed: self.is_lesson_completed(lesson, history, language),
                    best_percentage: history.best_percentage(language, Some(&lesson.category)),
                });
            }
            infos.push(UnitInfo {
                idx,
                id: unit.id.clone(),
                title: unit.title.clone(),
                description: unit.description.clone(),
                unlocked: unit_unlocked,
                completed: lessons.iter().all(|l| l.completed),
                lessons,
            });
        }
        infos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizScore;

    fn lesson(category: &str) -> LessonConfig {
        LessonConfig {
            slug: String::new(),
            title: category.to_string(),
            category: category.to_string(),
            description: String::new(),
        }
    }

    fn path() -> LearningPath {
        LearningPath::new(vec![
            UnitConfig {
                id: "unit1".into(),
                title: "Unit 1".into(),
                description: String::new(),
                lessons: vec![lesson("Greetings"), lesson("Common Phrases")],
            },
            UnitConfig {
                id: "unit2".into(),
                title: "Unit 2".into(),
                description: String::new(),
                lessons: vec![lesson("Food")],
            },
        ])
    }

    fn passed(category: &str, score: u32) -> QuizScore {
        QuizScore {
            language: Language::English,
            category: Some(category.into()),
            score,
            total_questions: 10,
            date: 0,
        }
    }

    #[test]
    fn slugs_are_derived_from_categories() {
        let path = path();
        assert!(path.lesson("unit1", "common-phrases").is_some());
        assert!(path.lesson("unit2", "greetings").is_none());
    }

    #[test]
    fn missing_titles_come_from_slugs() {
        let mut untitled = lesson("Common Phrases");
        untitled.title.clear();
        let path = LearningPath::new(vec![UnitConfig {
            id: "u".into(),
            title: "U".into(),
            description: String::new(),
            lessons: vec![untitled],
        }]);
        assert_eq!(path.lesson("u", "common-phrases").unwrap().title, "Common Phrases");
    }

    #[test]
    fn fresh_learner_sees_only_first_lesson() {
        let progress = path().progress(&QuizHistory::default(), Language::English);
        assert!(progress[0].unlocked);
        assert!(progress[0].lessons[0].unlocked);
        assert!(!progress[0].lessons[1].unlocked);
        assert!(!progress[1].unlocked);
        assert!(!progress[1].lessons[0].unlocked);
    }

    #[test]
    fn passing_unlocks_next_lesson_and_unit() {
        let history = QuizHistory::new(vec![passed("Greetings", 8)]);
        let progress = path().progress(&history, Language::English);
        assert!(progress[0].lessons[0].completed);
        assert!(progress[0].lessons[1].unlocked);
        assert!(!progress[1].unlocked);

        let history = QuizHistory::new(vec![passed("Greetings", 8), passed("common phrases", 10)]);
        let progress = path().progress(&history, Language::English);
        assert!(progress[0].completed);
        assert!(progress[1].unlocked);
        assert!(progress[1].lessons[0].unlocked);
    }

    #[test]
    fn low_scores_and_other_languages_do_not_count() {
        let mut other = passed("Greetings", 10);
        other.language = Language::Tagalog;
        let history = QuizHistory::new(vec![passed("Greetings", 7), other]);
        let progress = path().progress(&history, Language::English);
        assert!(!progress[0].lessons[0].completed);
        assert_eq!(progress[0].lessons[0].best_percentage, Some(70));
    }

    #[test]
    fn embedded_path_loads() {
        let path = LearningPath::embedded();
        assert!(!path.units().is_empty());
        assert!(path.lesson("unit1", "greetings").is_some());
    }
}
