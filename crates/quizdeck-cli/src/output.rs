//! Terminal rendering of warnings, results, and statistics.

use comfy_table::{Cell, Table};

use quizdeck_client::stats::{format_duration, AdminUser, HistoryEntry, UserStats, NEVER_LOGGED_IN};
use quizdeck_core::render::{DisplayModel, RowDetail, SCORE_LEGEND};

pub fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    eprintln!("Warnings:");
    for warning in warnings {
        eprintln!("  - {warning}");
    }
}

/// Full text of a scored quiz.
pub fn result_text(model: &DisplayModel) -> String {
    let summary = &model.summary;
    let mut out = String::new();

    let mut table = Table::new();
    table.set_header(vec!["Score", "Correct", "Wrong", "Unanswered", "Percentage"]);
    table.add_row(vec![
        Cell::new(format!("{} / {}", summary.total_score, summary.max_score)),
        Cell::new(summary.correct),
        Cell::new(summary.wrong),
        Cell::new(summary.unanswered),
        Cell::new(
            summary
                .percentage
                .map(|p| format!("{p:.1}%"))
                .unwrap_or_else(|| "-".to_string()),
        ),
    ]);

    let legend: Vec<String> = SCORE_LEGEND
        .iter()
        .map(|(points, label)| format!("{points} {label}"))
        .collect();

    out.push_str("\nQuiz Result\n");
    out.push_str(&format!("{table}\n"));
    out.push_str(&format!("Legend: {}\n", legend.join(" | ")));

    for row in &model.rows {
        out.push_str(&format!("\n{}. {}\n", row.number, row.question));
        match &row.detail {
            RowDetail::Options { options } => {
                for option in options {
                    out.push_str(&format!("   {}{}\n", option.text, option.highlight.suffix()));
                }
            }
            RowDetail::AnswerOnly {
                your_answer,
                correct_answer,
            } => {
                out.push_str(&format!("   Your answer: {your_answer}\n"));
                if let Some(correct) = correct_answer {
                    out.push_str(&format!("   Correct answer: {correct}\n"));
                }
            }
        }

        let mark = row.mark.symbol();
        if mark.is_empty() {
            out.push_str(&format!("   Your answer: {}\n", row.your_answer));
        } else {
            out.push_str(&format!("   Your answer: {} {mark}\n", row.your_answer));
        }
        if let Some(comment) = &row.comment {
            out.push_str(&format!("   Note: {comment}\n"));
        }
    }
    out
}

pub fn stats_text(stats: &UserStats) -> String {
    if stats.total_quizzes == 0 {
        return "No statistics yet\nComplete your first quiz to see your stats here!\n"
            .to_string();
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Total Quizzes",
        "Average Score",
        "Correct",
        "Wrong",
        "Unanswered",
        "Time Spent",
    ]);
    table.add_row(vec![
        Cell::new(stats.total_quizzes),
        Cell::new(format!("{:.1}", stats.average_score)),
        Cell::new(stats.total_correct),
        Cell::new(stats.total_wrong),
        Cell::new(stats.total_unanswered),
        Cell::new(format_duration(stats.total_time_spent)),
    ]);
    format!("Statistics for {}\n{table}\n", stats.username)
}

pub fn history_text(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return "No attempts yet\n".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Quiz", "Attempt", "Score", "%", "Time", "Completed"]);
    for entry in history {
        table.add_row(vec![
            Cell::new(&entry.quiz_name),
            Cell::new(format!("#{}", entry.attempt_number)),
            Cell::new(format!("{} / {}", entry.score, entry.max_score)),
            Cell::new(format!("{:.1}%", entry.score_percentage)),
            Cell::new(format_duration(entry.time_spent)),
            Cell::new(entry.completed_at.format("%Y-%m-%d %H:%M")),
        ]);
    }
    format!("{table}\n")
}

pub fn users_text(users: &[AdminUser]) -> String {
    if users.is_empty() {
        return "No registered users\n".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec![
        "ID",
        "Username",
        "Role",
        "Quizzes",
        "Last Login",
        "Last IP",
        "Location",
        "Created At",
    ]);
    for user in users {
        table.add_row(vec![
            Cell::new(user.id),
            Cell::new(&user.username),
            Cell::new(if user.is_admin { "Admin" } else { "User" }),
            Cell::new(user.quiz_count),
            Cell::new(
                user.last_login
                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| NEVER_LOGGED_IN.to_string()),
            ),
            Cell::new(user.last_ip.as_deref().unwrap_or("N/A")),
            Cell::new(user.location.as_deref().unwrap_or("N/A")),
            Cell::new(user.created_at.format("%Y-%m-%d %H:%M")),
        ]);
    }
    format!("Registered Users ({})\n{table}\n", users.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizdeck_core::model::{Question, QuestionResult, ResultData};
    use quizdeck_core::render::render;

    fn sample() -> DisplayModel {
        let questions = vec![Question {
            text: "Q1?".into(),
            options: vec!["A".into(), "B".into()],
        }];
        let result = ResultData {
            total_score: -0.33,
            max_score: 2.0,
            correct_count: 0,
            wrong_count: 1,
            unanswered_count: 1,
            total_questions: Some(2),
            score_percentage: Some(-16.5),
            per_question_results: vec![
                QuestionResult {
                    question: "Q1?".into(),
                    your_answer: "B".into(),
                    correct_answer: "A".into(),
                    is_correct: false,
                    score: Some(-0.33),
                    comment: Some("A is right".into()),
                },
                QuestionResult {
                    question: "Gone?".into(),
                    your_answer: "".into(),
                    correct_answer: "X".into(),
                    is_correct: false,
                    score: Some(0.0),
                    comment: None,
                },
            ],
        };
        render(&result, &questions)
    }

    #[test]
    fn result_text_shows_highlights_and_fallback() {
        let text = result_text(&sample());
        assert!(text.contains("-0.33 / 2"));
        assert!(text.contains("A (Correct)"));
        assert!(text.contains("B (Your answer)"));
        assert!(text.contains("Your answer: B ✗"));
        assert!(text.contains("Note: A is right"));
        assert!(text.contains("Correct answer: X"));
        assert!(text.contains("Your answer: Not provided"));
        assert!(text.contains("-0.33 Wrong"));
    }

    #[test]
    fn empty_stats_message() {
        let stats = UserStats {
            username: "mario".into(),
            total_quizzes: 0,
            average_score: 0.0,
            total_correct: 0,
            total_wrong: 0,
            total_unanswered: 0,
            total_time_spent: 0,
        };
        assert!(stats_text(&stats).starts_with("No statistics yet"));
    }

    #[test]
    fn stats_table() {
        let stats = UserStats {
            username: "mario".into(),
            total_quizzes: 2,
            average_score: 12.345,
            total_correct: 30,
            total_wrong: 4,
            total_unanswered: 1,
            total_time_spent: 3900,
        };
        let text = stats_text(&stats);
        assert!(text.contains("12.3"));
        assert!(text.contains("1h 5m"));
    }

    #[test]
    fn users_table_marks_never_logged_in() {
        let users: Vec<AdminUser> = serde_json::from_value(serde_json::json!([{
            "id": 2,
            "username": "mario",
            "is_admin": false,
            "created_at": "2026-03-04 08:30:00",
            "last_login": "Never",
            "quiz_count": 0
        }]))
        .unwrap();
        let text = users_text(&users);
        assert!(text.starts_with("Registered Users (1)"));
        assert!(text.contains("mario"));
        assert!(text.contains("Never"));
        assert!(text.contains("2026-03-04 08:30"));
    }
}
