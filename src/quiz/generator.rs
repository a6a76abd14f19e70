use crate::model::{LanguagePair, QuestionType, QuizQuestion, WordEntry};
use rand::Rng;
use rand::seq::SliceRandom;

pub const NUM_OPTIONS: usize = 4;
pub const QUIZ_LENGTH: usize = 10;

/// Builds up to [`QUIZ_LENGTH`] multiple-choice questions from `pool`.
///
/// `pool` must already be oriented for `pair`: `word` in the learned language,
/// `meaning` in the meaning language. Each question has exactly
/// [`NUM_OPTIONS`] distinct options, one of which is the correct answer.
/// Words for which not enough distinct distractors exist are left out, so the
/// result can be shorter than expected or empty; a pool smaller than
/// [`NUM_OPTIONS`] always yields an empty set.
pub fn generate_questions<R: Rng + ?Sized>(
    pool: &[WordEntry],
    pair: LanguagePair,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    if pool.len() < NUM_OPTIONS {
        return Vec::new();
    }

    let mut picked: Vec<&WordEntry> = pool.iter().collect();
    picked.shuffle(rng);
    picked.truncate(QUIZ_LENGTH);

    picked
        .into_iter()
        .filter_map(|entry| {
            let question_type = if rng.random_bool(0.5) {
                QuestionType::WordToMeaning
            } else {
                QuestionType::MeaningToWord
            };
            build_question(entry, question_type, pool, pair, rng).or_else(|| {
                log::debug!(
                    "Skipping '{}': fewer than {} distinct distractors",
                    entry.word,
                    NUM_OPTIONS - 1
                );
                None
            })
        })
        .collect()
}

fn build_question<R: Rng + ?Sized>(
    entry: &WordEntry,
    question_type: QuestionType,
    pool: &[WordEntry],
    pair: LanguagePair,
    rng: &mut R,
) -> Option<QuizQuestion> {
    let field = |w: &WordEntry| -> String {
        match question_type {
            QuestionType::WordToMeaning => w.meaning.trim().to_string(),
            QuestionType::MeaningToWord => w.word.trim().to_string(),
        }
    };
    let correct_answer = field(entry);
    let prompt = match question_type {
        QuestionType::WordToMeaning => format!(
            "What is the meaning of \"{}\" (in {})?",
            entry.word, pair.meaning
        ),
        QuestionType::MeaningToWord => format!(
            "Which word means \"{}\" (in {})?",
            entry.meaning, pair.learned
        ),
    };

    let mut distractors: Vec<String> = Vec::new();
    for other in pool.iter().filter(|w| w.id != entry.id) {
        let candidate = field(other);
        if candidate.is_empty()
            || candidate.eq_ignore_ascii_case(&correct_answer)
            || distractors.iter().any(|d| d.eq_ignore_ascii_case(&candidate))
        {
            continue;
        }
        distractors.push(candidate);
    }
    if distractors.len() < NUM_OPTIONS - 1 {
        return None;
    }
    distractors.shuffle(rng);
    distractors.truncate(NUM_OPTIONS - 1);

    let mut options = distractors;
    options.push(correct_answer.clone());
    options.shuffle(rng);

    Some(QuizQuestion {
        source_word: entry.clone(),
        question_type,
        prompt,
        options,
        correct_answer,
    })
}
