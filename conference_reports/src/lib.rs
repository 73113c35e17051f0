pub mod accepted;
pub mod department;
pub mod document;
pub mod error;
pub mod generator;
pub mod program;
pub mod report;
pub mod template;

pub use department::{ConferenceInfo, DepartmentInfo, PublicationContact};
pub use document::PageSize;
pub use error::ReportError;
pub use generator::{DocumentGenerator, GenerationOutcome};
pub use template::TemplateContext;
