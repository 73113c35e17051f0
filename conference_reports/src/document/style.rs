use serde::{Deserialize, Serialize};

use super::{HalfPoints, Twips};


pub const TIMES_NEW_ROMAN: &str = "Times New Roman";

/// Line spacing as a multiple of single spacing, stored in 240ths of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LineSpacing(pub u32);

impl LineSpacing {
    pub fn multiple(factor: f32) -> Self {
        LineSpacing((factor * 240.0).round() as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// Page size of the documents produced so far, kept as the default.
    #[default]
    Letter,
    A4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDimensions {
    pub width: Twips,
    pub height: Twips,
}

impl PageSize {
    pub fn dimensions(&self) -> PageDimensions {
        match self {
            PageSize::Letter => PageDimensions { width: Twips(12240), height: Twips(15840) },
            PageSize::A4 => PageDimensions { width: Twips(11906), height: Twips(16838) },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMargins {
    pub top: Twips,
    pub bottom: Twips,
    pub left: Twips,
    pub right: Twips,
}

impl PageMargins {
    pub fn uniform_cm(cm: f32) -> Self {
        let margin = Twips::from_cm(cm);
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }
}

/// Formatting of the "Normal" paragraph style and the page setup of a document.
///
/// Every paragraph and run inherits these values unless it overrides them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentStyle {
    pub font_family: String,
    pub font_size: HalfPoints,
    pub line_spacing: Option<LineSpacing>,
    pub space_after: Option<Twips>,
    pub contextual_spacing: bool,
    pub page: PageDimensions,
    pub margins: PageMargins,
}

impl DocumentStyle {
    pub fn new(font_size_pt: f32) -> Self {
        Self {
            font_family: TIMES_NEW_ROMAN.into(),
            font_size: HalfPoints::from_pt(font_size_pt),
            line_spacing: None,
            space_after: None,
            contextual_spacing: false,
            page: PageSize::default().dimensions(),
            margins: PageMargins::uniform_cm(2.54),
        }
    }

    pub fn line_spacing(mut self, factor: f32) -> Self {
        self.line_spacing = Some(LineSpacing::multiple(factor));
        self
    }

    pub fn space_after_pt(mut self, pt: f32) -> Self {
        self.space_after = Some(Twips::from_pt(pt));
        self
    }

    pub fn contextual_spacing(mut self) -> Self {
        self.contextual_spacing = true;
        self
    }

    pub fn page_size(mut self, size: PageSize) -> Self {
        self.page = size.dimensions();
        self
    }
}
