use std::io::{Cursor, Seek, Write};
use std::path::Path;

use tera::{Context, Tera};

use crate::document::Document;
use crate::error::ReportError;


pub const LIST_NUMBER_STYLE: &str = "ListNumber";
/// Numbering instance shared by every `ListNumber` paragraph, so numbering
/// runs on through the whole document.
pub const LIST_NUMBER_ID: u32 = 1;
pub const TABLE_GRID_STYLE: &str = "TableGrid";

const CREATOR: &str = "conference-docs";

const BUILTIN_TEMPLATES: [(&str, &str); 8] = [
    ("word/content_types.xml", include_str!("../../templates/word/content_types.xml")),
    ("word/rels.xml", include_str!("../../templates/word/rels.xml")),
    ("word/document_rels.xml", include_str!("../../templates/word/document_rels.xml")),
    ("word/core.xml", include_str!("../../templates/word/core.xml")),
    ("word/settings.xml", include_str!("../../templates/word/settings.xml")),
    ("word/styles.xml", include_str!("../../templates/word/styles.xml")),
    ("word/numbering.xml", include_str!("../../templates/word/numbering.xml")),
    ("word/document.xml", include_str!("../../templates/word/document.xml")),
];

pub struct TemplateContext {
    pub(crate) tera: Tera,
}

impl TemplateContext {
    /// Templates compiled into the library.
    pub fn builtin() -> Result<Self, ReportError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES.to_vec())?;
        Ok(Self::configure(tera))
    }

    /// Loads every `*.xml` below `template_dir` on top of the builtin set.
    /// Parts the directory does not provide fall back to the builtin templates.
    pub fn new(template_dir: &Path) -> Result<Self, ReportError> {
        let mut tera = Tera::new(template_dir.join("**/*.xml").as_os_str().to_str().unwrap_or("templates/**/*.xml"))?;
        let builtin = Self::builtin()?;
        tera.extend(&builtin.tera)?;
        Ok(Self::configure(tera))
    }

    fn configure(mut tera: Tera) -> Self {
        tera.autoescape_on(vec![".xml"]);
        Self { tera }
    }
}

struct WordDocument {
    parts: Vec<(&'static str, String)>,
}

impl WordDocument {
    fn render(context: &TemplateContext, document: &Document) -> Result<Self, ReportError> {
        let styles_data = serde_json::json!({
            "style": document.style,
            "list_style": LIST_NUMBER_STYLE,
            "list_num_id": LIST_NUMBER_ID,
            "table_style": TABLE_GRID_STYLE,
        });
        let styles_context = Context::from_serialize(&styles_data)?;

        let core_data = serde_json::json!({
            "title": document.title,
            "creator": CREATOR,
            "created": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        });

        let tera = &context.tera;
        Ok(Self {
            parts: vec![
                ("[Content_Types].xml", tera.render("word/content_types.xml", &Context::new())?),
                ("_rels/.rels", tera.render("word/rels.xml", &Context::new())?),
                ("docProps/core.xml", tera.render("word/core.xml", &Context::from_serialize(&core_data)?)?),
                ("word/document.xml", tera.render("word/document.xml", &Context::from_serialize(document)?)?),
                ("word/styles.xml", tera.render("word/styles.xml", &styles_context)?),
                ("word/numbering.xml", tera.render("word/numbering.xml", &styles_context)?),
                ("word/settings.xml", tera.render("word/settings.xml", &Context::new())?),
                ("word/_rels/document.xml.rels", tera.render("word/document_rels.xml", &Context::new())?),
            ],
        })
    }

    fn write<W>(&self, writer: W) -> Result<(), ReportError> where W: Write + Seek {
        let mut zip = zip::ZipWriter::new(writer);
        let options = zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (path, content) in &self.parts {
            zip.start_file(*path, options)?;
            zip.write_all(content.as_bytes())?;
        }

        // Dropping the writer would finish the archive too, but swallow errors.
        zip.finish()?;
        Ok(())
    }
}

pub fn write_document<W>(context: &TemplateContext, writer: W, document: &Document) -> Result<(), ReportError> where W: Write + Seek {
    WordDocument::render(context, document)?.write(writer)
}

/// Renders the complete package in memory, so that nothing is written to disk
/// unless every part rendered.
pub fn render_document(context: &TemplateContext, document: &Document) -> Result<Vec<u8>, ReportError> {
    let mut buffer = Cursor::new(Vec::new());
    write_document(context, &mut buffer, document)?;
    Ok(buffer.into_inner())
}


#[cfg(test)]
mod test {
    use std::io::Read;

    use crate::document::{Alignment, DocumentStyle, Paragraph, Run, Table, TableBorders, TableCell, Twips, VerticalAlignment};

    use super::*;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    fn sample_document() -> Document {
        let mut document = Document::new("Test & <title>", DocumentStyle::new(12.0).line_spacing(1.15).space_after_pt(0.0));
        document.add_paragraph(
            Paragraph::new()
                .aligned(Alignment::Center)
                .space_after(Twips::zero())
                .run(Run::new("Иванов & Петров\t<1>").bold().size(14.0))
        );
        document.add_paragraph(Paragraph::new().style(LIST_NUMBER_STYLE).numbered(LIST_NUMBER_ID).run(Run::new("Первый")));

        let mut table = Table::with_columns(vec![Twips(601), Twips(5000)]).style(TABLE_GRID_STYLE).borders(TableBorders::single_pt(1));
        table.add_row(vec![
            TableCell::new(Twips(601), Paragraph::with_text("1")).vertically(VerticalAlignment::Both),
            TableCell::new(Twips(5000), Paragraph::with_text("a\nb")),
        ]);
        document.add_table(table);
        document
    }

    #[test]
    fn test_package_contains_all_parts() {
        let context = TemplateContext::builtin().unwrap();
        let bytes = render_document(&context, &sample_document()).unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let mut names = archive.file_names().collect::<Vec<_>>();
        names.sort();
        assert_eq!(names, vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "word/_rels/document.xml.rels",
            "word/document.xml",
            "word/numbering.xml",
            "word/settings.xml",
            "word/styles.xml",
        ]);
    }

    #[test]
    fn test_document_xml_escapes_text() {
        let context = TemplateContext::builtin().unwrap();
        let bytes = render_document(&context, &sample_document()).unwrap();
        let document = read_part(&bytes, "word/document.xml");

        assert!(document.contains("<w:t xml:space=\"preserve\">Иванов &amp; Петров</w:t><w:tab/><w:t xml:space=\"preserve\">&lt;1&gt;</w:t>"));
        assert!(document.contains("<w:jc w:val=\"center\"/>"));
        assert!(document.contains("<w:spacing w:after=\"0\"/>"));
        assert!(document.contains("<w:b/><w:bCs/>"));
        assert!(document.contains("<w:sz w:val=\"28\"/>"));
        assert!(document.contains("<w:numId w:val=\"1\"/>"));
        assert!(!document.contains("<1>"));
    }

    #[test]
    fn test_table_markup() {
        let context = TemplateContext::builtin().unwrap();
        let bytes = render_document(&context, &sample_document()).unwrap();
        let document = read_part(&bytes, "word/document.xml");

        assert!(document.contains("<w:tblStyle w:val=\"TableGrid\"/>"));
        assert!(document.contains("<w:tblW w:w=\"5601\" w:type=\"dxa\"/>"));
        assert!(document.contains("<w:insideV w:val=\"single\" w:sz=\"8\" w:space=\"0\" w:color=\"000000\"/>"));
        assert!(document.contains("<w:tblLayout w:type=\"fixed\"/>"));
        assert!(document.contains("<w:gridCol w:w=\"601\"/>"));
        assert!(document.contains("<w:vAlign w:val=\"both\"/>"));
        assert!(document.contains("<w:t xml:space=\"preserve\">a</w:t><w:br/><w:t xml:space=\"preserve\">b</w:t>"));
    }

    #[test]
    fn test_styles_use_document_defaults() {
        let context = TemplateContext::builtin().unwrap();
        let bytes = render_document(&context, &sample_document()).unwrap();
        let styles = read_part(&bytes, "word/styles.xml");

        assert!(styles.contains("w:ascii=\"Times New Roman\""));
        assert!(styles.contains("<w:sz w:val=\"24\"/>"));
        assert!(styles.contains("<w:spacing w:after=\"0\" w:line=\"276\" w:lineRule=\"auto\"/>"));
        assert!(styles.contains("w:styleId=\"ListNumber\""));

        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Test &amp; &lt;title&gt;</dc:title>"));
    }

    #[test]
    fn test_directory_overrides_single_part() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("word")).unwrap();
        std::fs::write(
            dir.path().join("word/settings.xml"),
            "<w:settings xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\"><w:defaultTabStop w:val=\"708\"/></w:settings>",
        ).unwrap();

        let context = TemplateContext::new(dir.path()).unwrap();
        let bytes = render_document(&context, &sample_document()).unwrap();

        assert!(read_part(&bytes, "word/settings.xml").contains("w:val=\"708\""));
        assert!(read_part(&bytes, "word/document.xml").contains("Иванов &amp; Петров"));
    }
}
