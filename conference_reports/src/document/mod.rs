use serde::Serialize;

pub mod style;

pub use style::*;


/// Twentieths of a point, the unit of most WordprocessingML lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Twips(pub i32);

impl Twips {
    pub const fn zero() -> Self {
        Twips(0)
    }

    pub fn from_cm(cm: f32) -> Self {
        Twips((cm * 1440.0 / 2.54).round() as i32)
    }

    pub fn from_pt(pt: f32) -> Self {
        Twips((pt * 20.0).round() as i32)
    }

    /// Table grid columns use the legacy conversion of 567 twips per
    /// centimetre, truncated.
    pub fn grid_from_cm(cm: f32) -> Self {
        Twips((cm * 567.0) as i32)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Font sizes are stored in half points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HalfPoints(pub u32);

impl HalfPoints {
    pub fn from_pt(pt: f32) -> Self {
        HalfPoints((pt * 2.0).round() as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    /// Justified text
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    Top,
    Center,
    Both,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunPiece {
    Text { text: String },
    Tab,
    Break,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub pieces: Vec<RunPiece>,
    pub bold: bool,
    pub italic: bool,
    pub size: Option<HalfPoints>,
    pub font: Option<String>,
}

impl Run {
    /// Tabs and newlines in `text` become tab stops and line breaks.
    pub fn new(text: &str) -> Self {
        let mut pieces = vec![];
        let mut current = String::new();
        for c in text.chars() {
            match c {
                '\t' | '\n' => {
                    if !current.is_empty() {
                        pieces.push(RunPiece::Text { text: std::mem::take(&mut current) });
                    }
                    pieces.push(if c == '\t' { RunPiece::Tab } else { RunPiece::Break });
                },
                _ => current.push(c),
            }
        }
        if !current.is_empty() {
            pieces.push(RunPiece::Text { text: current });
        }

        Self {
            pieces,
            bold: false,
            italic: false,
            size: None,
            font: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn size(mut self, pt: f32) -> Self {
        self.size = Some(HalfPoints::from_pt(pt));
        self
    }

    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    pub fn text(&self) -> String {
        self.pieces.iter().map(|p| match p {
            RunPiece::Text { text } => text.as_str(),
            RunPiece::Tab => "\t",
            RunPiece::Break => "\n",
        }).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Indentation {
    pub left: Option<Twips>,
    pub first_line: Option<Twips>,
    pub hanging: Option<Twips>,
}

impl Indentation {
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.first_line.is_none() && self.hanging.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub style: Option<String>,
    pub numbering: Option<u32>,
    pub alignment: Option<Alignment>,
    pub indent: Indentation,
    pub space_after: Option<Twips>,
    pub line_spacing: Option<LineSpacing>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self::new().run(Run::new(text))
    }

    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }

    /// Attaches the paragraph to the numbering instance `num_id`, first level.
    pub fn numbered(mut self, num_id: u32) -> Self {
        self.numbering = Some(num_id);
        self
    }

    pub fn left_indent(mut self, indent: Twips) -> Self {
        self.indent.left = Some(indent);
        self
    }

    /// Negative values produce a hanging indent.
    pub fn first_line_indent(mut self, indent: Twips) -> Self {
        if indent.is_negative() {
            self.indent.first_line = None;
            self.indent.hanging = Some(Twips(-indent.0));
        } else {
            self.indent.first_line = Some(indent);
            self.indent.hanging = None;
        }
        self
    }

    pub fn space_after(mut self, space: Twips) -> Self {
        self.space_after = Some(space);
        self
    }

    pub fn line_spacing(mut self, spacing: LineSpacing) -> Self {
        self.line_spacing = Some(spacing);
        self
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.pieces.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub width: Twips,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    pub fn new(width: Twips, paragraph: Paragraph) -> Self {
        Self {
            width,
            vertical_alignment: None,
            paragraphs: vec![paragraph],
        }
    }

    pub fn vertically(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = Some(alignment);
        self
    }

    pub fn text(&self) -> String {
        self.paragraphs.iter().map(|p| p.text()).collect::<Vec<_>>().join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableBorders {
    /// Eighths of a point
    pub size: u32,
    pub color: String,
}

impl TableBorders {
    pub fn single_pt(pt: u32) -> Self {
        Self {
            size: pt * 8,
            color: "000000".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub style: Option<String>,
    /// Sum of the grid columns
    pub width: Twips,
    pub columns: Vec<Twips>,
    pub fixed_layout: bool,
    pub borders: Option<TableBorders>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn with_columns(columns: Vec<Twips>) -> Self {
        Self {
            style: None,
            width: Twips(columns.iter().map(|c| c.0).sum()),
            columns,
            fixed_layout: true,
            borders: None,
            rows: vec![],
        }
    }

    pub fn style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }

    pub fn borders(mut self, borders: TableBorders) -> Self {
        self.borders = Some(borders);
        self
    }

    pub fn add_row(&mut self, cells: Vec<TableCell>) {
        self.rows.push(TableRow { cells });
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

/// A document assembled in memory before it is written out as a package.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub style: DocumentStyle,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: &str, style: DocumentStyle) -> Self {
        Self {
            title: title.to_string(),
            style,
            blocks: vec![],
        }
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(Twips::from_cm(2.54), Twips(1440));
        assert_eq!(Twips::from_cm(2.0), Twips(1134));
        assert_eq!(Twips::from_pt(6.0), Twips(120));
        assert_eq!(HalfPoints::from_pt(14.0), HalfPoints(28));
        assert_eq!(
            [1.06, 8.82, 2.47, 3.53].map(Twips::grid_from_cm),
            [Twips(601), Twips(5000), Twips(1400), Twips(2001)]
        );
    }

    #[test]
    fn test_run_splits_tabs_and_breaks() {
        let run = Run::new("\t1.\tИванов И.И., Тема");
        assert_eq!(run.pieces, vec![
            RunPiece::Tab,
            RunPiece::Text { text: "1.".into() },
            RunPiece::Tab,
            RunPiece::Text { text: "Иванов И.И., Тема".into() },
        ]);
        assert_eq!(run.text(), "\t1.\tИванов И.И., Тема");

        assert_eq!(Run::new("a\nb").pieces, vec![
            RunPiece::Text { text: "a".into() },
            RunPiece::Break,
            RunPiece::Text { text: "b".into() },
        ]);
        assert!(Run::new("").pieces.is_empty());
    }

    #[test]
    fn test_negative_first_line_becomes_hanging() {
        let p = Paragraph::new().left_indent(Twips::from_cm(1.25)).first_line_indent(Twips::from_cm(-0.75));
        assert_eq!(p.indent.left, Some(Twips(709)));
        assert_eq!(p.indent.first_line, None);
        assert_eq!(p.indent.hanging, Some(Twips(425)));
    }
}
