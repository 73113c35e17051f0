use std::path::{Path, PathBuf};

use anyhow::Context;
use conference_reports::{ConferenceInfo, GenerationOutcome, PublicationContact};

use crate::config::Config;


#[derive(clap::Parser, Debug)]
#[command(name = "conference-docs", version, about = "Generates conference programs, session reports and publication lists as Word documents")]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Conference program from the exported contributions
    Program {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        number: String,
        #[arg(long)]
        head: String,
        #[arg(long, default_value = "")]
        head_title: String,
        #[arg(long)]
        deputy: String,
        #[arg(long, default_value = "")]
        deputy_title: String,
        #[arg(long)]
        secretary: String,
        #[arg(long, default_value = "")]
        secretary_title: String,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Report on the held sessions from the exported contributions
    Report {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        number: String,
        #[arg(long)]
        head: String,
        #[arg(long)]
        secretary: String,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List of accepted papers from the exported paper reviews
    Accepted {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        number: String,
        #[arg(long)]
        leader_name: String,
        #[arg(long)]
        leader_email: String,
        #[arg(long)]
        leader_phone: String,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn program_file_name(number: &str) -> String {
    format!("Программа_конференции_{}.docx", number)
}

pub fn report_file_name(number: &str) -> String {
    format!("Отчет_конференции_{}.docx", number)
}

pub fn accepted_file_name(number: &str) -> String {
    if number.is_empty() {
        "Список представляемых к публикации докладов.docx".into()
    } else {
        format!("Список представляемых к публикации докладов конференции {}.docx", number)
    }
}

impl Command {
    pub fn input(&self) -> &Path {
        match self {
            Command::Program { input, .. } | Command::Report { input, .. } | Command::Accepted { input, .. } => input,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        match self {
            Command::Program { output, number, .. } => output.clone().unwrap_or_else(|| program_file_name(number).into()),
            Command::Report { output, number, .. } => output.clone().unwrap_or_else(|| report_file_name(number).into()),
            Command::Accepted { output, number, .. } => output.clone().unwrap_or_else(|| accepted_file_name(number).into()),
        }
    }

    pub fn run(&self, config: &Config) -> anyhow::Result<GenerationOutcome> {
        let generator = config.document_generator()?;
        let output = self.output_path();

        let outcome = match self {
            Command::Program { input, number, head, head_title, deputy, deputy_title, secretary, secretary_title, .. } => {
                let conference = ConferenceInfo {
                    number: number.clone(),
                    head: head.clone(),
                    head_title: head_title.clone(),
                    deputy: deputy.clone(),
                    deputy_title: deputy_title.clone(),
                    secretary: secretary.clone(),
                    secretary_title: secretary_title.clone(),
                };
                generator.generate_program(&conference, input, &output)
            },
            Command::Report { input, number, head, secretary, .. } => {
                let conference = ConferenceInfo {
                    number: number.clone(),
                    head: head.clone(),
                    secretary: secretary.clone(),
                    ..Default::default()
                };
                generator.generate_report(&conference, input, &output)
            },
            Command::Accepted { input, leader_name, leader_email, leader_phone, .. } => {
                let contact = PublicationContact {
                    leader_name: leader_name.clone(),
                    leader_email: leader_email.clone(),
                    leader_phone: leader_phone.clone(),
                };
                generator.generate_accepted_list(&contact, input, &output)
            },
        };

        outcome.with_context(|| format!("Failed to generate a document from {}", self.input().display()))
    }
}


#[cfg(test)]
mod test {
    use assert_matches::assert_matches;
    use clap::Parser;

    use super::*;

    #[test]
    fn test_default_file_names() {
        assert_eq!(program_file_name("77"), "Программа_конференции_77.docx");
        assert_eq!(report_file_name("77"), "Отчет_конференции_77.docx");
        assert_eq!(accepted_file_name("77"), "Список представляемых к публикации докладов конференции 77.docx");
        assert_eq!(accepted_file_name(""), "Список представляемых к публикации докладов.docx");
    }

    #[test]
    fn test_parse_program_with_optional_titles() {
        let cli = Cli::try_parse_from([
            "conference-docs", "program", "--input", "c.json", "--number", "77",
            "--head", "Иванов И.И.", "--deputy", "Петров П.П.", "--secretary", "Сидорова А.А.",
            "--head-title", "профессор",
        ]).unwrap();

        assert_matches!(&cli.command, Command::Program { head_title, deputy_title, output: None, .. }
            if head_title == "профессор" && deputy_title.is_empty());
        assert_eq!(cli.command.output_path(), PathBuf::from("Программа_конференции_77.docx"));
    }

    #[test]
    fn test_global_config_and_explicit_output() {
        let cli = Cli::try_parse_from([
            "conference-docs", "report", "--input", "c.json", "--number", "77",
            "--head", "Иванов", "--secretary", "Сидорова", "--output", "out.docx", "--config", "c.yaml",
        ]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
        assert_eq!(cli.command.output_path(), PathBuf::from("out.docx"));
    }

    #[test]
    fn test_accepted_requires_leader_contact() {
        let result = Cli::try_parse_from([
            "conference-docs", "accepted", "--input", "p.json", "--number", "77", "--leader-name", "Иванов",
        ]);
        assert!(result.is_err());
    }
}
