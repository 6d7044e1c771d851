use anyhow::Result;
use clap::Parser;
use profilemap::cli::{Cli, Commands};
use profilemap::config;
use profilemap::core::errors::ResultExt;
use profilemap::core::{Answer, Component, ProfileReport, QuestionLink, ScoreMap};
use profilemap::io::output::{
    JsonWriter, MarkdownWriter, OutputFormat, OutputWriter, TerminalWriter,
};
use profilemap::report;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Profile {
            answers,
            links,
            catalog,
            scores,
            format,
            output,
        } => handle_profile_command(answers, links, catalog, scores, format.into(), output),
        Commands::Chart {
            scores,
            catalog,
            output,
        } => handle_chart_command(scores, catalog, output),
    }
}

fn handle_profile_command(
    answers_path: PathBuf,
    links_path: PathBuf,
    catalog_path: PathBuf,
    scores_path: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let answers: Vec<Answer> = profilemap::io::read_json(&answers_path).context("loading answers")?;
    let links: Vec<QuestionLink> = profilemap::io::read_json(&links_path).context("loading links")?;
    let catalog: Vec<Component> =
        profilemap::io::read_json(&catalog_path).context("loading catalog")?;
    let cached: Option<ScoreMap> = scores_path
        .map(|path| profilemap::io::read_json(&path).context("loading persisted scores"))
        .transpose()?;

    let chart_config = config::get_config().chart_config();
    let report = report::build_report(&answers, &links, &catalog, cached.as_ref(), &chart_config);

    write_report(&report, format, output)
}

fn handle_chart_command(
    scores_path: PathBuf,
    catalog_path: PathBuf,
    output: Option<PathBuf>,
) -> Result<()> {
    let scores: ScoreMap =
        profilemap::io::read_json(&scores_path).context("loading persisted scores")?;
    let catalog: Vec<Component> =
        profilemap::io::read_json(&catalog_path).context("loading catalog")?;

    let chart_config = config::get_config().chart_config();
    let points = report::chart_points(&scores, &catalog, &chart_config);

    emit(serde_json::to_string_pretty(&points)?, output)
}

fn write_report(
    report: &ProfileReport,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    match output {
        Some(path) => {
            let mut buffer = Vec::new();
            match format {
                OutputFormat::Json => JsonWriter::new(&mut buffer).write_report(report)?,
                OutputFormat::Markdown => MarkdownWriter::new(&mut buffer).write_report(report)?,
                OutputFormat::Terminal => {
                    log::warn!("terminal format writes to stdout, ignoring --output");
                    return TerminalWriter::new().write_report(report);
                }
            }
            emit(String::from_utf8(buffer)?, Some(path))
        }
        None => {
            let mut writer = profilemap::io::create_writer(format);
            writer.write_report(report)
        }
    }
}

fn emit(content: String, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => Ok(profilemap::io::write_file(&path, &content)?),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
