// Sentence assembly: basic word order plus a question marker.
//
// Constituents arrive fully inflected (articles and morphology already
// applied); this module only orders them and joins with spaces.

use serde::{Deserialize, Serialize};

/// Order of subject, verb and object in a basic clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WordOrder {
    #[default]
    Svo,
    Sov,
    Vso,
}

/// Default question marker, appended after the clause.
pub const DEFAULT_QUESTION_MARKER: &str = "ka";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxRules {
    pub word_order: WordOrder,
    pub question_marker: String,
}

impl Default for SyntaxRules {
    fn default() -> Self {
        SyntaxRules {
            word_order: WordOrder::default(),
            question_marker: DEFAULT_QUESTION_MARKER.to_string(),
        }
    }
}

impl SyntaxRules {
    /// Arrange a clause. A missing or empty object is dropped without leaving
    /// a double space.
    pub fn arrange(&self, subject: &str, verb: &str, object: Option<&str>) -> String {
        let object = object.unwrap_or("");
        let parts = match self.word_order {
            WordOrder::Svo => [subject, verb, object],
            WordOrder::Sov => [subject, object, verb],
            WordOrder::Vso => [verb, subject, object],
        };
        parts
            .iter()
            .filter(|p| !p.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Turn a clause into a question.
    pub fn question(&self, sentence: &str) -> String {
        if self.question_marker.is_empty() {
            sentence.to_string()
        } else {
            format!("{sentence} {}", self.question_marker)
        }
    }
}
