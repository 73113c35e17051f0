use serde::{Deserialize, Serialize};

use crate::utilities::{lenient_list, lenient_optional, lenient_optional_string, lenient_string};


/// Name of the custom registration field holding the speaker's study group.
pub const DEFAULT_GROUP_FIELD_NAME: &str = "Номер группы основного автора (докладчика)";

pub const DEFAULT_SESSION_ID: &str = "1";


#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionRef {
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub friendly_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomField {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
}

/// One talk as exported by the conference management system.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributionRecord {
    #[serde(default, deserialize_with = "lenient_optional")]
    pub session: Option<SessionRef>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_dt: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub room_name: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub persons: Vec<PersonRecord>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub custom_fields: Vec<CustomField>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeakerStatus {
    Unknown,
    Student,
    Master,
}

impl SpeakerStatus {
    /// Master's groups end in `M`, written either in Latin or Cyrillic script.
    pub fn from_group(group: &str) -> Self {
        match group.chars().last() {
            None => SpeakerStatus::Unknown,
            Some(last) => {
                if last.to_uppercase().any(|c| c == 'M' || c == 'М') {
                    SpeakerStatus::Master
                } else {
                    SpeakerStatus::Student
                }
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpeakerStatus::Unknown => "",
            SpeakerStatus::Student => "студент",
            SpeakerStatus::Master => "магистр",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEntry {
    pub session: String,
    pub date: String,
    pub time: String,
    pub room: String,
    pub full_name: String,
    pub group: String,
    pub topic: String,
    pub status: SpeakerStatus,
}

impl NormalizedEntry {
    /// Entries without a speaker or a topic are kept in the data but never rendered.
    pub fn is_presentable(&self) -> bool {
        !self.full_name.is_empty() && !self.topic.is_empty()
    }
}

impl ContributionRecord {
    pub fn read_all<R>(reader: R) -> Result<Vec<ContributionRecord>, serde_json::Error> where R: std::io::Read {
        serde_json::from_reader(reader)
    }

    pub fn group_number(&self, group_field_name: &str) -> String {
        self.custom_fields
            .iter()
            .find(|field| field.name == group_field_name)
            .map(|field| field.value.clone())
            .unwrap_or_default()
    }

    pub fn normalize(&self, group_field_name: &str) -> NormalizedEntry {
        let session = self.session
            .as_ref()
            .and_then(|s| s.friendly_id.clone())
            .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());

        let (date, time) = split_start_time(&self.start_dt);
        let group = self.group_number(group_field_name);

        NormalizedEntry {
            session,
            date,
            time,
            room: self.room_name.clone(),
            full_name: self.persons.first().map(|p| p.full_name.clone()).unwrap_or_default(),
            status: SpeakerStatus::from_group(&group),
            group,
            topic: self.title.clone(),
        }
    }
}

pub fn normalize_contributions(records: &[ContributionRecord], group_field_name: &str) -> Vec<NormalizedEntry> {
    records.iter().map(|r| r.normalize(group_field_name)).collect()
}

/// Splits an ISO timestamp such as `2024-03-15T10:30:00+03:00` into
/// `("2024-03-15", "10:30")`.
pub fn split_start_time(start_dt: &str) -> (String, String) {
    if start_dt.is_empty() {
        return (String::new(), String::new());
    }
    let mut parts = start_dt.split('T');
    let date = parts.next().unwrap_or("").to_string();
    let time = parts.next().map(|t| t.chars().take(5).collect()).unwrap_or_default();

    (date, time)
}
