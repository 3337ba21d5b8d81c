use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChallengeError {
    #[error("challenge code cannot be empty")]
    EmptyCode,

    #[error("challenge must have at least one question")]
    NoQuestions,

    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("answer line {line} is outside the code listing (1..={line_count})")]
    LineOutOfRange { line: u32, line_count: u32 },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single line-identification question: a prompt and the 1-based line
/// number of the code listing that answers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    answer_line: u32,
}

impl Question {
    /// Creates a question.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::EmptyPrompt` if the prompt is blank and
    /// `ChallengeError::LineOutOfRange` if the answer line is zero. Whether
    /// the line fits the code listing is checked by [`Challenge::new`].
    pub fn new(prompt: impl Into<String>, answer_line: u32) -> Result<Self, ChallengeError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ChallengeError::EmptyPrompt);
        }
        if answer_line == 0 {
            return Err(ChallengeError::LineOutOfRange {
                line: 0,
                line_count: 0,
            });
        }
        Ok(Self {
            prompt,
            answer_line,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// 1-based line number of the correct answer.
    #[must_use]
    pub fn answer_line(&self) -> u32 {
        self.answer_line
    }
}

//
// ─── CHALLENGE ────────────────────────────────────────────────────────────────
//

/// A code sample plus its ordered list of line-identification questions.
///
/// Immutable once constructed; every question's answer line is validated
/// against the code listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    lines: Vec<String>,
    questions: Vec<Question>,
}

impl Challenge {
    /// Creates a challenge from the full code text (split on newlines) and
    /// its questions.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::EmptyCode` for blank code,
    /// `ChallengeError::NoQuestions` for an empty question list, and
    /// `ChallengeError::LineOutOfRange` if any question points outside the
    /// listing.
    pub fn new(code: &str, questions: Vec<Question>) -> Result<Self, ChallengeError> {
        if code.trim().is_empty() {
            return Err(ChallengeError::EmptyCode);
        }
        if questions.is_empty() {
            return Err(ChallengeError::NoQuestions);
        }

        let lines: Vec<String> = code.lines().map(str::to_string).collect();
        let line_count = u32::try_from(lines.len()).unwrap_or(u32::MAX);
        for question in &questions {
            if question.answer_line() == 0 || question.answer_line() > line_count {
                return Err(ChallengeError::LineOutOfRange {
                    line: question.answer_line(),
                    line_count,
                });
            }
        }

        Ok(Self { lines, questions })
    }

    /// Code lines in listing order, without trailing newlines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions; always at least one.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
