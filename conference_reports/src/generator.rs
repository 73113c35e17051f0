use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use conference_entities::{
    normalize_contributions, ContributionRecord, PapersDocument, SessionGroups, SessionOrdering,
    DEFAULT_GROUP_FIELD_NAME,
};
use tracing::{debug, info, warn};

use crate::accepted::{accepted_list_style, build_accepted_list};
use crate::department::{ConferenceInfo, DepartmentInfo, PublicationContact};
use crate::document::{Document, PageSize};
use crate::error::ReportError;
use crate::program::{build_program, program_style};
use crate::report::{build_report, report_style};
use crate::template::{render_document, TemplateContext};


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Written(PathBuf),
    /// The paper list had no accepted papers, nothing was written.
    NoAcceptedPapers,
}

/// Entry point for producing the three documents from exported JSON files.
pub struct DocumentGenerator {
    templates: TemplateContext,
    department: DepartmentInfo,
    page_size: PageSize,
    group_field_name: String,
}

impl DocumentGenerator {
    pub fn new(templates: TemplateContext) -> Self {
        Self {
            templates,
            department: DepartmentInfo::default(),
            page_size: PageSize::default(),
            group_field_name: DEFAULT_GROUP_FIELD_NAME.into(),
        }
    }

    pub fn with_department(mut self, department: DepartmentInfo) -> Self {
        self.department = department;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_group_field_name(mut self, name: &str) -> Self {
        self.group_field_name = name.to_string();
        self
    }

    pub fn generate_program(&self, conference: &ConferenceInfo, input: &Path, output: &Path) -> Result<GenerationOutcome, ReportError> {
        let sessions = self.read_sessions(input)?.sorted(SessionOrdering::Numeric)?;
        let document = build_program(conference, &self.department, &sessions, program_style(self.page_size));
        self.save(&document, output)
    }

    pub fn generate_report(&self, conference: &ConferenceInfo, input: &Path, output: &Path) -> Result<GenerationOutcome, ReportError> {
        let sessions = self.read_sessions(input)?.sorted(SessionOrdering::FirstEntryDate)?;
        let document = build_report(conference, &self.department, &sessions, report_style(self.page_size));
        self.save(&document, output)
    }

    pub fn generate_accepted_list(&self, contact: &PublicationContact, input: &Path, output: &Path) -> Result<GenerationOutcome, ReportError> {
        let papers = PapersDocument::read(BufReader::new(File::open(input)?))?;
        let accepted = papers.accepted_papers()?;
        debug!("{} of {} papers are accepted", accepted.len(), papers.papers.len());

        if accepted.is_empty() {
            warn!("No accepted papers in {}, skipping the publication list", input.display());
            return Ok(GenerationOutcome::NoAcceptedPapers);
        }

        let document = build_accepted_list(contact, &self.department, &accepted, accepted_list_style(self.page_size));
        self.save(&document, output)
    }

    fn read_sessions(&self, input: &Path) -> Result<SessionGroups, ReportError> {
        let records = ContributionRecord::read_all(BufReader::new(File::open(input)?))?;
        let entries = normalize_contributions(&records, &self.group_field_name);
        let sessions = SessionGroups::group(entries);
        debug!("Read {} contributions in {} sessions from {}", records.len(), sessions.len(), input.display());
        Ok(sessions)
    }

    fn save(&self, document: &Document, output: &Path) -> Result<GenerationOutcome, ReportError> {
        let bytes = render_document(&self.templates, document)?;
        std::fs::write(output, bytes)?;
        info!("Wrote \"{}\" to {}", document.title, output.display());
        Ok(GenerationOutcome::Written(output.to_path_buf()))
    }
}
