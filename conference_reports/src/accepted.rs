use conference_entities::AcceptedPaper;

use crate::department::{DepartmentInfo, PublicationContact};
use crate::document::{Alignment, Document, DocumentStyle, PageSize, Paragraph, Run, Twips};


pub const LIST_TITLE: &str = "Список представляемых к публикации докладов";
const SIGNATURE_GAP: usize = 47;

pub fn accepted_list_style(page_size: PageSize) -> DocumentStyle {
    DocumentStyle::new(14.0)
        .line_spacing(1.15)
        .page_size(page_size)
}

pub fn build_accepted_list(contact: &PublicationContact, department: &DepartmentInfo, papers: &[AcceptedPaper], style: DocumentStyle) -> Document {
    let mut document = Document::new(LIST_TITLE, style);

    document.add_paragraph(
        Paragraph::new()
            .aligned(Alignment::Center)
            .space_after(Twips::zero())
            .run(Run::new(LIST_TITLE).bold().italic())
    );
    document.add_paragraph(Paragraph::new().space_after(Twips::zero()));

    let contact_lines = [
        department.department_name.clone(),
        contact.leader_name.clone(),
        format!("e-mail: {}", contact.leader_email),
        format!("тел.: {}", contact.leader_phone),
    ];
    for line in &contact_lines {
        document.add_paragraph(
            Paragraph::new()
                .aligned(Alignment::Left)
                .left_indent(Twips::from_cm(2.0))
                .space_after(Twips::zero())
                .run(Run::new(line).size(12.0))
        );
    }
    document.add_paragraph(Paragraph::new().space_after(Twips::zero()));

    for (idx, paper) in papers.iter().enumerate() {
        document.add_paragraph(
            Paragraph::new()
                .aligned(Alignment::Both)
                .left_indent(Twips::zero())
                .first_line_indent(Twips::zero())
                .space_after(Twips::zero())
                .run(Run::new(&format!("\t{}.\t{}, {}", idx + 1, paper.author, paper.title)))
        );
    }

    document.add_paragraph(Paragraph::with_text("\n"));
    document.add_paragraph(
        Paragraph::new()
            .aligned(Alignment::Left)
            .left_indent(Twips::from_cm(2.0))
            .run(Run::new(&format!(
                "{}{}{} ",
                department.publication_signatory,
                " ".repeat(SIGNATURE_GAP),
                contact.leader_name
            )).size(12.0))
    );

    document
}
