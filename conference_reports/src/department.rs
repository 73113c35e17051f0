use serde::{Deserialize, Serialize};


/// Fixed wording of the department the documents are produced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartmentInfo {
    pub conference_name: String,
    pub program_subtitle: String,
    pub program_section: String,
    pub report_section: String,
    /// First line of the contact block of the accepted-paper list
    pub department_name: String,
    pub venue_address: String,
    pub publication_signatory: String,
}

impl Default for DepartmentInfo {
    fn default() -> Self {
        Self {
            conference_name: "МСНК ГУАП".into(),
            program_subtitle: "по кафедре № 43 компьютерных технологий и программной инженерии".into(),
            program_section: "Секция каф.43. «компьютерных технологий и программной инженерии»".into(),
            report_section: "Секция 43. Кафедра компьютерных технологий и программной инженерии".into(),
            department_name: "Кафедра № 43 компьютерных технологий и программной инженерии".into(),
            venue_address: "ул. Б. Морская, д. 67".into(),
            publication_signatory: "Руководитель УНИДС".into(),
        }
    }
}

/// Conference number and section leadership, as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConferenceInfo {
    pub number: String,
    pub head: String,
    pub head_title: String,
    pub deputy: String,
    pub deputy_title: String,
    pub secretary: String,
    pub secretary_title: String,
}

/// Contact details printed on the accepted-paper list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationContact {
    pub leader_name: String,
    pub leader_email: String,
    pub leader_phone: String,
}
