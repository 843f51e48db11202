//! Result renderer: projects a scored result onto a display model.
//!
//! Result rows are joined back to the presented questions by question text so
//! every option can be shown with its highlighting. Rows whose question is not
//! in the held set fall back to plain "your answer" / "correct answer" lines.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Question, ResultData};

/// Scoring rules as shown next to the score.
pub const SCORE_LEGEND: [(&str, &str); 3] = [
    ("+1", "Correct"),
    ("-0.33", "Wrong"),
    ("0", "Not provided"),
];

/// Text shown for an empty answer.
pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    pub summary: ScoreSummary,
    pub rows: Vec<ResultRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub total_score: f64,
    pub max_score: f64,
    pub correct: u32,
    pub wrong: u32,
    pub unanswered: u32,
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    /// 1-based position in the result list.
    pub number: usize,
    pub question: String,
    pub is_correct: bool,
    pub detail: RowDetail,
    /// The user's answer, or [`NOT_PROVIDED`].
    pub your_answer: String,
    pub mark: AnswerMark,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowDetail {
    /// Every option of the original question, highlighted.
    Options { options: Vec<OptionLine> },
    /// The original question is unavailable.
    AnswerOnly {
        your_answer: String,
        /// Present only when the answer was wrong.
        correct_answer: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionLine {
    pub text: String,
    pub highlight: Highlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// The correct option.
    Correct,
    /// The user's option, which was wrong.
    WrongSelection,
    Plain,
}

impl Highlight {
    /// Suffix appended to the option text.
    pub fn suffix(self) -> &'static str {
        match self {
            Highlight::Correct => " (Correct)",
            Highlight::WrongSelection => " (Your answer)",
            Highlight::Plain => "",
        }
    }
}

/// Mark next to the answer summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMark {
    Check,
    Cross,
    /// Unanswered and therefore not correct.
    None,
}

impl AnswerMark {
    pub fn symbol(self) -> &'static str {
        match self {
            AnswerMark::Check => "✓",
            AnswerMark::Cross => "✗",
            AnswerMark::None => "",
        }
    }
}

/// Build the display model for `result` given the questions that were shown.
pub fn render(result: &ResultData, questions: &[Question]) -> DisplayModel {
    let by_text: HashMap<&str, &Question> =
        questions.iter().map(|q| (q.text.as_str(), q)).collect();

    let rows = result
        .per_question_results
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let detail = match by_text.get(item.question.as_str()) {
                Some(question) => RowDetail::Options {
                    options: question
                        .options
                        .iter()
                        .map(|opt| OptionLine {
                            text: opt.clone(),
                            highlight: highlight(opt, &item.your_answer, &item.correct_answer),
                        })
                        .collect(),
                },
                None => RowDetail::AnswerOnly {
                    your_answer: item.your_answer.clone(),
                    correct_answer: (!item.is_correct).then(|| item.correct_answer.clone()),
                },
            };

            let mark = if item.is_correct {
                AnswerMark::Check
            } else if !item.your_answer.is_empty() {
                AnswerMark::Cross
            } else {
                AnswerMark::None
            };

            ResultRow {
                number: idx + 1,
                question: item.question.clone(),
                is_correct: item.is_correct,
                detail,
                your_answer: if item.your_answer.is_empty() {
                    NOT_PROVIDED.to_string()
                } else {
                    item.your_answer.clone()
                },
                mark,
                comment: item.comment.clone().filter(|c| !c.trim().is_empty()),
            }
        })
        .collect();

    DisplayModel {
        summary: ScoreSummary {
            total_score: result.total_score,
            max_score: result.max_score,
            correct: result.correct_count,
            wrong: result.wrong_count,
            unanswered: result.unanswered_count,
            percentage: result.score_percentage,
        },
        rows,
    }
}

fn highlight(option: &str, your_answer: &str, correct_answer: &str) -> Highlight {
    if option == correct_answer {
        Highlight::Correct
    } else if option == your_answer {
        Highlight::WrongSelection
    } else {
        Highlight::Plain
    }
}
