use std::io::Read;

use assert_matches::assert_matches;
use clap::Parser;
use conference_cli::commands::Cli;
use conference_cli::config::{parse_config, Config};
use conference_reports::GenerationOutcome;


const CONTRIBUTIONS: &str = r#"[
    {"session": {"friendly_id": 1}, "start_dt": "2024-04-02T10:00:00", "room_name": "52-16",
     "persons": [{"full_name": "Белов Игорь"}], "title": "Компиляторы",
     "custom_fields": [{"name": "Группа", "value": "4131M"}]}
]"#;

fn document_xml(path: &std::path::Path) -> String {
    let mut archive = zip::ZipArchive::new(std::fs::File::open(path).unwrap()).unwrap();
    let mut part = archive.by_name("word/document.xml").unwrap();
    let mut content = String::new();
    part.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_report_uses_configured_department_and_group_field() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("contributions.json");
    std::fs::write(&input, CONTRIBUTIONS).unwrap();
    let output = dir.path().join("report.docx");

    let config = parse_config("group_field_name: Группа\ndepartment:\n  venue_address: ул. Гастелло, д. 15\n").unwrap();
    let cli = Cli::try_parse_from([
        "conference-docs", "report",
        "--input", input.to_str().unwrap(),
        "--number", "77",
        "--head", "Иванов И.И., д.т.н.",
        "--secretary", "Сидорова А.А.",
        "--output", output.to_str().unwrap(),
    ]).unwrap();

    let outcome = cli.command.run(&config).unwrap();
    assert_eq!(outcome, GenerationOutcome::Written(output.clone()));

    let xml = document_xml(&output);
    assert!(xml.contains("2 апреля 2024 г., 10:00, ул. Гастелло, д. 15, ауд. 52-16"));
    assert!(xml.contains("магистр"));
}

#[test]
fn test_accepted_without_papers_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("papers.json");
    std::fs::write(&input, r#"{"papers": []}"#).unwrap();
    let output = dir.path().join("list.docx");

    let cli = Cli::try_parse_from([
        "conference-docs", "accepted",
        "--input", input.to_str().unwrap(),
        "--number", "77",
        "--leader-name", "Иванов И.И.",
        "--leader-email", "ivanov@example.org",
        "--leader-phone", "123",
        "--output", output.to_str().unwrap(),
    ]).unwrap();

    assert_matches!(cli.command.run(&Config::default()), Ok(GenerationOutcome::NoAcceptedPapers));
    assert!(!output.exists());
}

#[test]
fn test_failure_mentions_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.json");

    let cli = Cli::try_parse_from([
        "conference-docs", "program",
        "--input", input.to_str().unwrap(),
        "--number", "77",
        "--head", "Иванов", "--deputy", "Петров", "--secretary", "Сидорова",
        "--output", dir.path().join("p.docx").to_str().unwrap(),
    ]).unwrap();

    let error = cli.command.run(&Config::default()).unwrap_err();
    assert!(format!("{:#}", error).contains("missing.json"));
}
