use leytext_learn::LearningContext;
use leytext_learn::app::LearnApp;
use leytext_learn::config::AppConfig;
use leytext_learn::gateway::{
    ExampleSentences, FallbackReason, GatewayError, Gateways, SpeechProvider, SpeechSource,
    SpeechSynthesizer, TranslationProvider, Translator,
};
use leytext_learn::model::{AppState, Language, WordDraft};
use leytext_learn::quiz::NUM_OPTIONS;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Default)]
struct Calls(Arc<AtomicUsize>);

impl Calls {
    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

struct EchoTranslator(Calls);

impl TranslationProvider for EchoTranslator {
    fn name(&self) -> &str {
        "echo"
    }

    fn translate(&self, text: &str, _: Language, target: Language) -> Result<String, GatewayError> {
        self.0.hit();
        Ok(format!("{text} [{target}]"))
    }
}

struct Beeper(Calls);

impl SpeechProvider for Beeper {
    fn source(&self) -> SpeechSource {
        SpeechSource::Google
    }

    fn synthesize(&self, _: &str, _: Language) -> Result<Vec<u8>, FallbackReason> {
        self.0.hit();
        Ok(vec![0xFF, 0xFB])
    }
}

fn tagalog_basics() -> LearningContext {
    let mut ctx = LearningContext::in_memory(42);
    ctx.clear_words();
    for (word, meaning) in [("Hello", "Kumusta"), ("Water", "Tubig"), ("Rice", "Kanin"), ("Fish", "Isda")] {
        ctx.add_word(WordDraft::new(word, meaning, Language::English, Language::Tagalog))
            .unwrap();
    }
    ctx
}

#[test]
fn four_words_give_a_four_question_quiz_and_a_perfect_score() {
    let mut ctx = tagalog_basics();
    let mut session = ctx.start_quiz(None).unwrap();
    assert_eq!(session.total_questions(), 4);

    for question in session.questions() {
        assert_eq!(question.options.len(), NUM_OPTIONS);
        let distinct: HashSet<_> = question.options.iter().collect();
        assert_eq!(distinct.len(), NUM_OPTIONS);
        assert!(question.options.contains(&question.correct_answer));
    }

    let mut recorded = None;
    while let Some(answer) = session.current_question().map(|q| q.correct_answer.clone()) {
        let feedback = session.submit_answer(&answer).unwrap();
        assert!(feedback.correct);
        assert!(session.submit_answer(&answer).is_none());
        if let Some(outcome) = session.advance() {
            recorded = Some(ctx.record_outcome(outcome));
        }
    }

    let score = recorded.unwrap();
    assert_eq!((score.score, score.total_questions), (4, 4));
    assert_eq!(score.language, Language::English);
    assert_eq!(ctx.history().scores(), [score]);
}

#[test]
fn three_words_are_not_enough_for_a_quiz() {
    let mut ctx = tagalog_basics();
    let fish = ctx
        .words()
        .words()
        .iter()
        .find(|w| w.word == "Fish")
        .map(|w| w.id.clone())
        .unwrap();
    ctx.delete_word(&fish);
    assert!(ctx.start_quiz(None).is_err());
}

#[test]
fn added_word_is_found_exactly_once() {
    let mut ctx = LearningContext::in_memory(7);
    let entry = ctx
        .add_word(WordDraft::new("Mango", "Mangga", Language::English, Language::Tagalog).with_category("Food"))
        .unwrap();
    let hits: Vec<_> = ctx
        .words()
        .filter_by_language_pair(Language::English, Language::Tagalog, None)
        .into_iter()
        .filter(|w| w.id == entry.id)
        .collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].category.as_deref(), Some("Food"));
}

#[test]
fn same_language_translation_skips_the_provider() {
    let calls = Calls::default();
    let translator = Translator::new(Some(Box::new(EchoTranslator(calls.clone()))));

    let same = translator.translate("Magandang umaga", Language::Tagalog, Language::Tagalog);
    assert_eq!(same.unwrap(), "Magandang umaga");
    assert_eq!(calls.count(), 0);

    let other = translator.translate("Salamat", Language::Tagalog, Language::English);
    assert_eq!(other.unwrap(), "Salamat [English]");
    assert_eq!(calls.count(), 1);
}

#[test]
fn blank_text_is_never_synthesized() {
    let calls = Calls::default();
    let speech = SpeechSynthesizer::new(vec![Box::new(Beeper(calls.clone()))]);

    let silent = speech.synthesize("", Language::English);
    assert_eq!(silent.source, SpeechSource::None);
    assert!(silent.audio.is_none());
    assert_eq!(calls.count(), 0);

    let spoken = speech.synthesize("Hello", Language::English);
    assert_eq!(spoken.source, SpeechSource::Google);
    assert_eq!(calls.count(), 1);
}

#[test]
fn choosing_the_source_as_target_is_corrected() {
    let mut ctx = LearningContext::in_memory(3);
    ctx.set_source_language(Language::English);
    ctx.set_target_language(Language::English);
    let pair = ctx.pair();
    assert_eq!(pair.learned, Language::English);
    assert_ne!(pair.meaning, Language::English);
}

#[test]
fn app_walks_a_lesson_end_to_end() {
    let gateways = Gateways::new(
        Translator::new(None),
        SpeechSynthesizer::new(Vec::new()),
        ExampleSentences::new(None, None),
    );
    let mut app = LearnApp::with_parts(AppConfig::default(), LearningContext::in_memory(5), gateways);

    app.open_learning_path();
    app.open_lesson("unit1", "greetings");
    app.practise_lesson();
    assert_eq!(app.state, AppState::Quiz);

    while let Some(answer) = app
        .quiz
        .as_ref()
        .and_then(|q| q.current_question())
        .map(|q| q.correct_answer.clone())
    {
        app.answer_quiz(&answer);
        app.next_quiz_question();
    }
    assert_eq!(app.state, AppState::QuizSummary);
    app.finish_quiz();
    assert_eq!(app.state, AppState::Lesson);

    let units = app.unit_infos();
    assert!(units[0].lessons[0].completed);
    assert!(units[0].lessons[1].unlocked);
}
