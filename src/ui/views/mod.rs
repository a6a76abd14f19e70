pub mod dictionary;
pub mod flashcards;
pub mod home;
pub mod learning_path;
pub mod lesson;
pub mod monolingual;
pub mod quiz;
pub mod quiz_setup;
pub mod quiz_summary;
pub mod translate;
pub mod word_list;
