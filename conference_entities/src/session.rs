use std::collections::HashMap;

use itertools::Itertools;
use thiserror::Error;

use crate::contribution::NormalizedEntry;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOrdering {
    /// Session ids compared as integers. Used by the program.
    Numeric,
    /// Sessions compared by the date of their first entry. Used by the report.
    FirstEntryDate,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionOrderError {
    #[error("Session id {0:?} is not a number")]
    NonNumericSession(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionGroup {
    pub session: String,
    pub entries: Vec<NormalizedEntry>,
}

impl SessionGroup {
    /// Date, time and room of a session are taken from its first entry,
    /// whether or not that entry is rendered.
    pub fn first_entry(&self) -> Option<&NormalizedEntry> {
        self.entries.first()
    }

    /// Entries that are rendered, paired with their 1-based position among
    /// all entries of the session. Skipped entries leave gaps in the positions.
    pub fn presentable_entries(&self) -> impl Iterator<Item = (usize, &NormalizedEntry)> {
        self.entries.iter().enumerate().filter(|(_, e)| e.is_presentable()).map(|(idx, e)| (idx + 1, e))
    }

    pub fn skipped_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_presentable()).count()
    }

    fn first_date(&self) -> &str {
        self.first_entry().map(|e| e.date.as_str()).unwrap_or("")
    }
}

/// Entries bucketed by session id.
///
/// Sessions keep the order in which their id first appeared in the input and
/// entries keep their input order inside a session, until [`SessionGroups::sorted`]
/// reorders the sessions. Sorting is stable, so sessions comparing equal
/// stay in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionGroups {
    groups: Vec<SessionGroup>,
}

impl SessionGroups {
    pub fn group<I>(entries: I) -> Self where I: IntoIterator<Item = NormalizedEntry> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<SessionGroup> = vec![];

        for entry in entries {
            match positions.get(&entry.session) {
                Some(pos) => groups[*pos].entries.push(entry),
                None => {
                    positions.insert(entry.session.clone(), groups.len());
                    groups.push(SessionGroup {
                        session: entry.session.clone(),
                        entries: vec![entry],
                    });
                }
            }
        }

        Self { groups }
    }

    pub fn sorted(self, ordering: SessionOrdering) -> Result<Self, SessionOrderError> {
        let groups = match ordering {
            SessionOrdering::Numeric => {
                let keyed = self.groups.into_iter().map(|g| match g.session.trim().parse::<i64>() {
                    Ok(key) => Ok((key, g)),
                    Err(_) => Err(SessionOrderError::NonNumericSession(g.session)),
                }).collect::<Result<Vec<_>, _>>()?;

                keyed.into_iter().sorted_by_key(|(key, _)| *key).map(|(_, g)| g).collect()
            },
            SessionOrdering::FirstEntryDate => {
                self.groups.into_iter().sorted_by(|a, b| a.first_date().cmp(b.first_date())).collect()
            }
        };

        Ok(Self { groups })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SessionGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn session_ids(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.session.as_str()).collect()
    }

    pub fn into_entries(self) -> Vec<NormalizedEntry> {
        self.groups.into_iter().flat_map(|g| g.entries).collect()
    }
}

impl<'a> IntoIterator for &'a SessionGroups {
    type Item = &'a SessionGroup;
    type IntoIter = std::slice::Iter<'a, SessionGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
