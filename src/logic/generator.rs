// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Simulated AI question generation and live transcription.
//!
//! Generation picks canned questions whose topic keyword appears in the
//! transcript. Transcription cycles through sample lecture sentences.

use uuid::Uuid;

use crate::models::question::{Difficulty, Question, QuestionStatus, strings};

/// Sentences the simulated recogniser emits, in order.
pub const TRANSCRIPT_SAMPLES: [&str; 5] = [
    "Today we're going to discuss the fundamentals of machine learning...",
    "Machine learning is a subset of artificial intelligence that focuses on...",
    "There are three main types of machine learning: supervised, unsupervised, and reinforcement learning...",
    "Supervised learning uses labeled data to train models that can make predictions...",
    "Neural networks are inspired by the structure and function of the human brain...",
];

/// The `n`-th transcribed sentence (wraps around).
pub fn transcript_sample(n: usize) -> &'static str {
    TRANSCRIPT_SAMPLES[n % TRANSCRIPT_SAMPLES.len()]
}

struct Template {
    keyword: &'static str,
    text: &'static str,
    options: [&'static str; 4],
    difficulty: Difficulty,
    category: &'static str,
    confidence: u8,
}

const BANK: &[Template] = &[
    Template {
        keyword: "machine learning",
        text: "Machine learning is best described as a subset of which field?",
        options: [
            "Artificial intelligence",
            "Computer graphics",
            "Networking",
            "Operating systems",
        ],
        difficulty: Difficulty::Easy,
        category: "Machine Learning",
        confidence: 94,
    },
    Template {
        keyword: "supervised",
        text: "What does supervised learning require to train a model?",
        options: [
            "Labeled data",
            "Unlabeled data only",
            "A reward signal",
            "No data at all",
        ],
        difficulty: Difficulty::Medium,
        category: "Machine Learning",
        confidence: 91,
    },
    Template {
        keyword: "reinforcement",
        text: "Which learning paradigm trains an agent through rewards and penalties?",
        options: [
            "Supervised learning",
            "Unsupervised learning",
            "Reinforcement learning",
            "Transfer learning",
        ],
        difficulty: Difficulty::Medium,
        category: "Machine Learning",
        confidence: 88,
    },
    Template {
        keyword: "unsupervised",
        text: "Which task is a typical example of unsupervised learning?",
        options: ["Clustering", "Spam classification", "Price regression", "Game playing"],
        difficulty: Difficulty::Hard,
        category: "Algorithms",
        confidence: 84,
    },
    Template {
        keyword: "neural network",
        text: "Neural networks are loosely inspired by which biological structure?",
        options: ["The human brain", "The heart", "DNA", "The immune system"],
        difficulty: Difficulty::Easy,
        category: "Deep Learning",
        confidence: 90,
    },
];

const FALLBACK: Template = Template {
    keyword: "",
    text: "Which statement best summarises the topic just discussed?",
    options: [
        "It introduces core concepts",
        "It covers unrelated material",
        "It is a review of last week",
        "It is purely historical",
    ],
    difficulty: Difficulty::Easy,
    category: "General",
    confidence: 62,
};

/// Generate pending questions from a transcript.
///
/// Each topic is used at most once. A non-empty transcript with no known topic
/// still yields one low-confidence general question; an empty transcript yields none.
pub fn generate_questions(transcript: &str, timer_secs: u32) -> Vec<Question> {
    let haystack = transcript.to_lowercase();
    if haystack.trim().is_empty() {
        return Vec::new();
    }

    let mut out: Vec<Question> = BANK
        .iter()
        .filter(|t| haystack.contains(t.keyword))
        .map(|t| instantiate(t, timer_secs))
        .collect();

    if out.is_empty() {
        out.push(instantiate(&FALLBACK, timer_secs));
    }

    log::debug!("Generated {} question(s) from transcript", out.len());
    out
}

fn instantiate(template: &Template, timer_secs: u32) -> Question {
    Question {
        id: Uuid::new_v4().to_string(),
        text: template.text.into(),
        options: strings(&template.options),
        difficulty: template.difficulty,
        category: template.category.into(),
        confidence: template.confidence,
        status: QuestionStatus::Pending,
        auto_launch: false,
        timer_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_transcript_generates_nothing() {
        assert!(generate_questions("   ", 30).is_empty());
    }

    #[test]
    fn topics_in_transcript_select_matching_questions() {
        let transcript = format!("{} {}", transcript_sample(3), transcript_sample(4));
        let questions = generate_questions(&transcript, 45);

        let categories: Vec<&str> = questions.iter().map(|q| q.category.as_str()).collect();
        assert_eq!(categories, vec!["Machine Learning", "Deep Learning"]);
        assert!(questions.iter().all(|q| q.status == QuestionStatus::Pending));
        assert!(questions.iter().all(|q| q.timer_secs == 45));
        assert_ne!(questions[0].id, questions[1].id);
    }

    #[test]
    fn unknown_topic_falls_back_to_general_question() {
        let questions = generate_questions("Welcome back, let's begin.", 30);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].category, "General");
    }

    #[test]
    fn transcript_samples_wrap() {
        assert_eq!(transcript_sample(0), transcript_sample(TRANSCRIPT_SAMPLES.len()));
    }
}
