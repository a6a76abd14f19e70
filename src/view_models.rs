// src/view_models.rs

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitInfo {
    pub idx: usize,
    pub id: String,
    pub title: String,
    pub description: String,
    pub unlocked: bool,
    pub completed: bool,
    pub lessons: Vec<LessonInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonInfo {
    pub idx: usize,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub unlocked: bool,
    pub completed: bool,
    pub best_percentage: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRow {
    pub language: String,
    pub category: String,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
    pub date: String,
}

impl UnitInfo {
    pub fn completed_lessons(&self) -> usize {
        self.lessons.iter().filter(|l| l.completed).count()
    }

    pub fn label(&self) -> String {
        if self.completed && !self.lessons.is_empty() {
            format!("{} ✅", self.title)
        } else if self.unlocked {
            format!(
                "{} 🔓 ({}/{})",
                self.title,
                self.completed_lessons(),
                self.lessons.len()
            )
        } else {
            format!("{} 🔒", self.title)
        }
    }
}

impl LessonInfo {
    pub fn label(&self) -> String {
        if self.completed {
            match self.best_percentage {
                Some(p) => format!("{} ✅ ({p}%)", self.title),
                None => format!("{} ✅", self.title),
            }
        } else if self.unlocked {
            match self.best_percentage {
                Some(p) => format!("{} 🔓 (best {p}%)", self.title),
                None => format!("{} 🔓", self.title),
            }
        } else {
            format!("{} 🔒", self.title)
        }
    }
}

impl ScoreRow {
    pub fn label(&self) -> String {
        format!(
            "{} · {} · {}/{} ({}%) · {}",
            self.language, self.category, self.score, self.total_questions, self.percentage, self.date
        )
    }
}
