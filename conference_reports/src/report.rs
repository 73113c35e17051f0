use conference_entities::{format_date_russian, DateStyle, NormalizedEntry, SessionGroup, SessionGroups};
use tracing::debug;

use crate::department::{ConferenceInfo, DepartmentInfo};
use crate::document::{
    Alignment, Document, DocumentStyle, PageSize, Paragraph, Run, Table, TableBorders, TableCell, Twips,
    VerticalAlignment, TIMES_NEW_ROMAN,
};
use crate::template::TABLE_GRID_STYLE;


const COLUMN_WIDTHS_CM: [f32; 4] = [1.06, 8.82, 2.47, 3.53];
const HEADERS: [&str; 4] = [
    "№ п/п",
    "Фамилия и инициалы докладчика, название доклада",
    "Статус(магистр/студент)",
    "Решение",
];
const SIGNATURE_GAP: usize = 36;
const FONT_SIZE: f32 = 10.0;

pub fn report_style(page_size: PageSize) -> DocumentStyle {
    DocumentStyle::new(FONT_SIZE)
        .line_spacing(1.15)
        .space_after_pt(0.0)
        .page_size(page_size)
}

/// Assembles the report on the held sessions, in the order of `sessions`.
pub fn build_report(conference: &ConferenceInfo, department: &DepartmentInfo, sessions: &SessionGroups, style: DocumentStyle) -> Document {
    let title = format!("Отчет о проведении {} {}", conference.number, department.conference_name);
    let mut document = Document::new(&title, style);

    document.add_paragraph(
        Paragraph::new()
            .aligned(Alignment::Center)
            .run(Run::new(&title).bold().size(FONT_SIZE))
    );
    document.add_paragraph(
        Paragraph::new()
            .aligned(Alignment::Center)
            .space_after(Twips::from_pt(12.0))
            .run(Run::new(&department.report_section).bold().size(FONT_SIZE))
    );

    for session in sessions {
        add_session(&mut document, session, conference, department);
        document.add_paragraph(Paragraph::new());
    }

    document.add_paragraph(Paragraph::with_text(&signature_line(&conference.head)));
    document
}

/// Only the part of the head's name before the first comma is signed,
/// academic titles are dropped.
pub fn signature_line(head: &str) -> String {
    let name = head.split(',').next().unwrap_or("");
    format!("Научный руководитель секции{}___________________ / {}", " ".repeat(SIGNATURE_GAP), name)
}

pub fn status_text(entry: &NormalizedEntry) -> String {
    let status = entry.status.label();
    match (status.is_empty(), entry.group.is_empty()) {
        (false, false) => format!("{}\nгр. {}", status, entry.group),
        (true, false) => format!("гр. {}", entry.group),
        (false, true) => status.to_string(),
        (true, true) => String::new(),
    }
}

fn add_session(document: &mut Document, session: &SessionGroup, conference: &ConferenceInfo, department: &DepartmentInfo) {
    let Some(first) = session.first_entry() else {
        return;
    };

    document.add_paragraph(
        Paragraph::new()
            .aligned(Alignment::Left)
            .run(Run::new(&format!("Заседание {}", session.session)).bold().size(FONT_SIZE))
    );

    let date = format_date_russian(&first.date, DateStyle::DayMonthYear);
    document.add_paragraph(
        Paragraph::new()
            .aligned(Alignment::Left)
            .run(Run::new(&format!("{}, {}, {}, ауд. {}", date, first.time, department.venue_address, first.room)).size(FONT_SIZE))
    );
    document.add_paragraph(
        Paragraph::new()
            .aligned(Alignment::Left)
            .run(Run::new(&format!(
                "Научный руководитель секции – {}\nСекретарь – {}",
                conference.head, conference.secretary
            )).size(FONT_SIZE))
    );

    document.add_table(session_table(session));
}

fn session_table(session: &SessionGroup) -> Table {
    let widths = COLUMN_WIDTHS_CM.map(Twips::grid_from_cm);
    let mut table = Table::with_columns(widths.to_vec())
        .style(TABLE_GRID_STYLE)
        .borders(TableBorders::single_pt(1));

    table.add_row(
        HEADERS.iter().zip(widths).map(|(header, width)| {
            TableCell::new(width, Paragraph::new().aligned(Alignment::Center).run(cell_run(header).bold()))
                .vertically(VerticalAlignment::Both)
        }).collect()
    );

    let skipped = session.skipped_count();
    if skipped > 0 {
        debug!("Skipping {} entries without speaker or topic in session {}", skipped, session.session);
    }
    for (number, entry) in session.presentable_entries() {

        table.add_row(vec![
            TableCell::new(widths[0], Paragraph::new().aligned(Alignment::Center).run(cell_run(&number.to_string())))
                .vertically(VerticalAlignment::Both),
            TableCell::new(widths[1], Paragraph::new()
                .aligned(Alignment::Left)
                .run(Run::new(&format!("{}. {}", entry.full_name, entry.topic)).size(FONT_SIZE))),
            TableCell::new(widths[2], Paragraph::new().aligned(Alignment::Center).run(cell_run(&status_text(entry))))
                .vertically(VerticalAlignment::Both),
            TableCell::new(widths[3], Paragraph::new().aligned(Alignment::Center))
                .vertically(VerticalAlignment::Both),
        ]);
    }

    table
}

fn cell_run(text: &str) -> Run {
    Run::new(text).font(TIMES_NEW_ROMAN).size(FONT_SIZE)
}
