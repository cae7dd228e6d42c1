use serde::Deserialize;

use super::{decode::decode_text, ApiError};
use crate::names;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Wire form used by the trivia API.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    Multiple,
    Boolean,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::Multiple, QuestionType::Boolean];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Multiple => "multiple",
            QuestionType::Boolean => "boolean",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// A decoded trivia question. All text is plain, ready for display and comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub category: String,
    pub kind: QuestionType,
    pub difficulty: Difficulty,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// User-selected constraints for a question batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub kind: Option<QuestionType>,
    pub amount: u32,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            category: None,
            difficulty: None,
            kind: None,
            amount: names::DEFAULT_QUESTION_AMOUNT,
        }
    }
}

impl Filters {
    /// Query parameters for `api.php`. Absent filters are left out entirely.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![(
            "amount",
            self.amount
                .clamp(names::MIN_QUESTION_AMOUNT, names::MAX_QUESTION_AMOUNT)
                .to_string(),
        )];
        if let Some(category) = self.category {
            query.push(("category", category.to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            query.push(("difficulty", difficulty.as_str().to_string()));
        }
        if let Some(kind) = self.kind {
            query.push(("type", kind.as_str().to_string()));
        }
        query.push(("encode", names::API_ENCODING.to_string()));
        query
    }
}

#[derive(Deserialize)]
pub(crate) struct CategoriesResponse {
    pub trivia_categories: Vec<Category>,
}

#[derive(Deserialize)]
pub(crate) struct QuestionsResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

/// A question as sent with `encode=url3986`: every string is percent-encoded.
#[derive(Deserialize)]
pub(crate) struct RawQuestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub category: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl TryFrom<RawQuestion> for Question {
    type Error = ApiError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let difficulty = decode_text(&raw.difficulty);
        let difficulty = Difficulty::parse(&difficulty)
            .ok_or_else(|| ApiError::Format(format!("unknown difficulty '{difficulty}'")))?;

        let kind = decode_text(&raw.kind);
        let kind = QuestionType::parse(&kind)
            .ok_or_else(|| ApiError::Format(format!("unknown question type '{kind}'")))?;

        Ok(Question {
            category: decode_text(&raw.category),
            kind,
            difficulty,
            question: decode_text(&raw.question),
            correct_answer: decode_text(&raw.correct_answer),
            incorrect_answers: raw
                .incorrect_answers
                .iter()
                .map(|answer| decode_text(answer))
                .collect(),
        })
    }
}
