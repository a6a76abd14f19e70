pub mod generator;
pub mod session;

pub use generator::{NUM_OPTIONS, QUIZ_LENGTH, generate_questions};
pub use session::{AnswerFeedback, QuizError, QuizOutcome, QuizSession, QuizState};
