use conference_entities::{format_date_russian, DateStyle, NormalizedEntry, SessionGroup, SessionGroups};
use tracing::debug;

use crate::department::{ConferenceInfo, DepartmentInfo};
use crate::document::{Alignment, Document, DocumentStyle, LineSpacing, PageSize, Paragraph, Run, Twips, TIMES_NEW_ROMAN};
use crate::template::{LIST_NUMBER_ID, LIST_NUMBER_STYLE};


const REORDER_NOTE: &str = "По решению руководителя секции порядок следования докладов может быть изменен.";

pub fn program_style(page_size: PageSize) -> DocumentStyle {
    DocumentStyle::new(12.0)
        .line_spacing(1.15)
        .space_after_pt(0.0)
        .contextual_spacing()
        .page_size(page_size)
}

/// Assembles the conference program. `sessions` must already be in the order
/// in which they are printed.
pub fn build_program(conference: &ConferenceInfo, department: &DepartmentInfo, sessions: &SessionGroups, style: DocumentStyle) -> Document {
    let title = format!("Программа {} {}", conference.number, department.conference_name);
    let mut document = Document::new(&title, style);

    add_header(&mut document, &title, conference, department);

    for (idx, session) in sessions.iter().enumerate() {
        add_session(&mut document, session, idx == 0);
    }

    document
}

fn add_header(document: &mut Document, title: &str, conference: &ConferenceInfo, department: &DepartmentInfo) {
    document.add_paragraph(
        Paragraph::new()
            .aligned(Alignment::Center)
            .run(Run::new(title).bold().italic().size(14.0))
    );
    document.add_paragraph(
        Paragraph::new()
            .aligned(Alignment::Center)
            .space_after(Twips::zero())
            .run(Run::new(&department.program_subtitle).bold().italic().size(14.0))
    );
    document.add_paragraph(Paragraph::new().space_after(Twips::zero()).line_spacing(LineSpacing::multiple(1.15)));

    document.add_paragraph(
        Paragraph::new()
            .aligned(Alignment::Left)
            .first_line_indent(Twips::from_cm(1.27))
            .space_after(Twips::from_pt(16.0))
            .run(Run::new(&department.program_section).bold().italic().size(12.0))
    );

    let leadership = [
        format!("Научный руководитель секции – {}", conference.head),
        conference.head_title.clone(),
        format!("Зам. научного руководителя секции – {}", conference.deputy),
        conference.deputy_title.clone(),
        format!("Секретарь – {}", conference.secretary),
        conference.secretary_title.clone(),
    ];
    for line in leadership.iter().filter(|l| !l.trim().is_empty()) {
        document.add_paragraph(
            Paragraph::new()
                .aligned(Alignment::Left)
                .left_indent(Twips::from_cm(2.0))
                .space_after(Twips::zero())
                .run(Run::new(line))
        );
    }
    document.add_paragraph(Paragraph::new());
}

fn add_session(document: &mut Document, session: &SessionGroup, is_first: bool) {
    let Some(first) = session.first_entry() else {
        return;
    };
    debug!("Adding session {} with {} entries", session.session, session.entries.len());

    document.add_paragraph(
        Paragraph::new()
            .space_after(Twips::from_pt(6.0))
            .run(Run::new(&format!("Заседание {}.", session.session)).bold().size(14.0))
    );
    let date = format_date_russian(&first.date, DateStyle::DayMonth);
    document.add_paragraph(
        Paragraph::new()
            .space_after(Twips::from_pt(6.0))
            .run(Run::new(&format!("{}, {}, ауд. {}.", date, first.time, first.room)).bold().size(12.0))
    );

    if is_first {
        document.add_paragraph(
            Paragraph::new()
                .space_after(Twips::zero())
                .run(Run::new(REORDER_NOTE).italic().size(14.0))
        );
        document.add_paragraph(Paragraph::new().space_after(Twips::zero()).line_spacing(LineSpacing::multiple(1.15)));
    }

    let skipped = session.skipped_count();
    if skipped > 0 {
        debug!("Skipping {} entries without speaker or topic in session {}", skipped, session.session);
    }
    for (_, entry) in session.presentable_entries() {
        add_entry(document, entry);
    }
}

fn add_entry(document: &mut Document, entry: &NormalizedEntry) {
    let mut speaker = entry.full_name.clone();
    if !entry.group.is_empty() {
        speaker.push_str(&format!(", группа {}", entry.group));
    }

    document.add_paragraph(
        Paragraph::new()
            .style(LIST_NUMBER_STYLE)
            .numbered(LIST_NUMBER_ID)
            .left_indent(Twips::from_cm(1.25))
            .first_line_indent(Twips::from_cm(-0.75))
            .space_after(Twips::zero())
            .run(Run::new(&speaker).font(TIMES_NEW_ROMAN).size(14.0))
    );
    document.add_paragraph(
        Paragraph::new()
            .left_indent(Twips::from_cm(1.25))
            .space_after(Twips::from_pt(12.0))
            .run(Run::new(&entry.topic).font(TIMES_NEW_ROMAN).size(14.0))
    );
}
