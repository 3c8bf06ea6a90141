// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Poll question domain model shared by the host feed, the generator, and the student view.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Host review state of a generated or manual question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuestionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl QuestionStatus {
    pub const ALL: [QuestionStatus; 3] = [
        QuestionStatus::Pending,
        QuestionStatus::Approved,
        QuestionStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuestionStatus::Pending => "Pending",
            QuestionStatus::Approved => "Approved",
            QuestionStatus::Rejected => "Rejected",
        }
    }
}

/// A multiple-choice question in the host feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub difficulty: Difficulty,
    pub category: String,
    /// Generator confidence in percent.
    pub confidence: u8,
    pub status: QuestionStatus,
    pub auto_launch: bool,
    pub timer_secs: u32,
}

/// Question pushed to a student while a poll is live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub time_limit_secs: u32,
    pub correct_answer: Option<usize>,
}

/// Questions the feed starts with.
pub fn sample_questions() -> Vec<Question> {
    vec![
        Question {
            id: "1".into(),
            text: "What is the primary purpose of machine learning?".into(),
            options: strings(&[
                "Data storage",
                "Pattern recognition",
                "Web development",
                "Database management",
            ]),
            difficulty: Difficulty::Medium,
            category: "Machine Learning".into(),
            confidence: 92,
            status: QuestionStatus::Pending,
            auto_launch: false,
            timer_secs: 30,
        },
        Question {
            id: "2".into(),
            text: "Which algorithm is commonly used for classification tasks?".into(),
            options: strings(&["Linear Regression", "Decision Tree", "K-means", "PCA"]),
            difficulty: Difficulty::Hard,
            category: "Algorithms".into(),
            confidence: 87,
            status: QuestionStatus::Pending,
            auto_launch: true,
            timer_secs: 45,
        },
        Question {
            id: "3".into(),
            text: "What does API stand for?".into(),
            options: strings(&[
                "Application Programming Interface",
                "Advanced Programming Integration",
                "Automated Process Integration",
                "Application Process Interface",
            ]),
            difficulty: Difficulty::Easy,
            category: "Programming".into(),
            confidence: 95,
            status: QuestionStatus::Approved,
            auto_launch: false,
            timer_secs: 20,
        },
    ]
}

/// The question a student receives shortly after joining a session.
pub fn sample_live_question() -> LiveQuestion {
    LiveQuestion {
        id: "1".into(),
        text: "What is the primary purpose of machine learning?".into(),
        options: strings(&[
            "Data storage and management",
            "Pattern recognition and prediction",
            "Web development and design",
            "Database administration",
        ]),
        time_limit_secs: 30,
        correct_answer: Some(1),
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
