use conference_entities::{PaperError, SessionOrderError};
use thiserror::Error;


#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
    #[error("Could not write document package: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error(transparent)]
    Sessions(#[from] SessionOrderError),
    #[error(transparent)]
    Papers(#[from] PaperError),
}
