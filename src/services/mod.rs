pub mod quiz;

pub use quiz::{QuizService, TriviaSource};
