use rand::{seq::SliceRandom, Rng};

use super::QuizError;
use crate::api::{Difficulty, Question};

/// Log entry for one answered question. Written once, never touched again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// One run of the quiz, from the fetched batch to the last answer.
///
/// `answers.len() == current_index` and `score` equals the number of correct
/// records at every point; only [`QuizSession::submit`] moves either.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    answers: Vec<AnswerRecord>,
    options: Vec<String>,
    selected: Option<usize>,
    confirming_quit: bool,
}

/// The correct answer and all incorrect answers of `question`, uniformly shuffled.
pub fn shuffled_options<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Vec<String> {
    let mut options = Vec::with_capacity(question.incorrect_answers.len() + 1);
    options.push(question.correct_answer.clone());
    options.extend(question.incorrect_answers.iter().cloned());
    options.shuffle(rng);
    options
}

impl QuizSession {
    /// Returns `None` for an empty batch: a session always has a first question.
    pub fn new<R: Rng + ?Sized>(questions: Vec<Question>, rng: &mut R) -> Option<Self> {
        let options = shuffled_options(questions.first()?, rng);
        Some(Self {
            questions,
            current_index: 0,
            score: 0,
            answers: Vec::new(),
            options,
            selected: None,
            confirming_quit: false,
        })
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Options of the current question in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn correct_option(&self) -> Option<usize> {
        let question = self.current_question()?;
        self.options
            .iter()
            .position(|option| *option == question.correct_answer)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    pub fn confirming_quit(&self) -> bool {
        self.confirming_quit
    }

    pub(crate) fn set_confirming_quit(&mut self, confirming: bool) {
        self.confirming_quit = confirming;
    }

    /// Choose an option for the current question. Returns `false` when a choice
    /// was already made, in which case nothing changes.
    pub fn select(&mut self, option_idx: usize) -> Result<bool, QuizError> {
        if self.is_complete() {
            return Err(QuizError::InvalidAction);
        }
        if option_idx >= self.options.len() {
            return Err(QuizError::OptionOutOfRange(option_idx));
        }
        if self.selected.is_some() {
            return Ok(false);
        }
        self.selected = Some(option_idx);
        Ok(true)
    }

    /// Record the pending choice and move to the next question.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&AnswerRecord, QuizError> {
        let selected = self.selected.ok_or(QuizError::NoSelection)?;
        let question = self
            .questions
            .get(self.current_index)
            .ok_or(QuizError::InvalidAction)?;

        let user_answer = self.options[selected].clone();
        let is_correct = user_answer == question.correct_answer;
        let record = AnswerRecord {
            question: question.question.clone(),
            category: question.category.clone(),
            difficulty: question.difficulty,
            user_answer,
            correct_answer: question.correct_answer.clone(),
            is_correct,
        };

        if is_correct {
            self.score += 1;
        }
        self.answers.push(record);
        self.current_index += 1;
        self.selected = None;
        self.options = match self.questions.get(self.current_index) {
            Some(next) => shuffled_options(next, rng),
            None => Vec::new(),
        };

        Ok(&self.answers[self.answers.len() - 1])
    }

    /// End the session early. A pending, unsubmitted choice is dropped.
    pub(crate) fn abandon(&mut self) {
        self.selected = None;
        self.confirming_quit = false;
        self.options.clear();
    }
}
