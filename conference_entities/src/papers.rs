use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::utilities::{lenient_string, value_text};


pub const ACCEPTED_STATE: &str = "accepted";

#[derive(Debug, Clone, Deserialize)]
pub struct PaperState {
    /// Required key, `null` reads as a state that is not accepted.
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
}

/// Only `state` is required of every paper. Revisions and the contribution
/// are kept as raw JSON and looked up for accepted papers alone.
#[derive(Debug, Clone, Deserialize)]
pub struct PaperRecord {
    pub state: PaperState,
    #[serde(default)]
    pub revisions: Value,
    #[serde(default)]
    pub contribution: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PapersDocument {
    pub papers: Vec<PaperRecord>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaperError {
    #[error("Paper {index} has no revisions")]
    MissingRevision { index: usize },
    #[error("Paper {index} has no submitter name")]
    MissingSubmitter { index: usize },
    #[error("Paper {index} has no contribution")]
    MissingContribution { index: usize },
    #[error("Paper {index} has no title")]
    MissingTitle { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedPaper {
    pub author: String,
    pub title: String,
}

impl PaperRecord {
    pub fn is_accepted(&self) -> bool {
        self.state.name == ACCEPTED_STATE
    }

    /// Full name of the submitter of the first revision.
    pub fn submitter_name(&self, index: usize) -> Result<String, PaperError> {
        let revision = self.revisions.get(0).ok_or(PaperError::MissingRevision { index })?;
        value_text(revision.get("submitter").and_then(|s| s.get("full_name")))
            .ok_or(PaperError::MissingSubmitter { index })
    }

    pub fn title(&self, index: usize) -> Result<String, PaperError> {
        if !self.contribution.is_object() {
            return Err(PaperError::MissingContribution { index });
        }
        value_text(self.contribution.get("title")).ok_or(PaperError::MissingTitle { index })
    }
}

impl PapersDocument {
    pub fn read<R>(reader: R) -> Result<PapersDocument, serde_json::Error> where R: std::io::Read {
        serde_json::from_reader(reader)
    }

    /// Accepted papers in input order, with the submitter's name shortened.
    pub fn accepted_papers(&self) -> Result<Vec<AcceptedPaper>, PaperError> {
        self.papers
            .iter()
            .enumerate()
            .filter(|(_, paper)| paper.is_accepted())
            .map(|(index, paper)| {
                Ok(AcceptedPaper {
                    author: short_author_name(&paper.submitter_name(index)?),
                    title: paper.title(index)?,
                })
            })
            .collect()
    }
}

/// `Иванов Иван Иванович` becomes `Иванов И.И.`. Names with a single word
/// are returned as they are.
pub fn short_author_name(full_name: &str) -> String {
    let full_name = full_name.trim();
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    if parts.len() < 2 {
        return full_name.to_string();
    }

    let mut initials = String::new();
    for word in parts.iter().skip(1).take(2) {
        if let Some(first) = word.chars().next() {
            initials.push(first);
            initials.push('.');
        }
    }

    format!("{} {}", parts[0], initials)
}
