use crate::core::{DotType, ProfileReport};
use colored::*;
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ProfileReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_selection(report)?;
        self.write_scores(report)?;
        self.write_chart(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Profile Report")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_selection(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Strengths & Challenge")?;
        writeln!(self.writer)?;

        for component in &report.selection.positive {
            writeln!(self.writer, "- **Strength**: {}", component.name)?;
        }
        if let Some(ref component) = report.selection.negative {
            writeln!(self.writer, "- **Challenge**: {}", component.name)?;
        }
        if report.selection.positive.is_empty() && report.selection.negative.is_none() {
            writeln!(self.writer, "No components were scored.")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Scores")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Component | Score |")?;
        writeln!(self.writer, "|-----------|-------|")?;
        for (key, score) in &report.scores {
            writeln!(self.writer, "| {} | {} |", key, score)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_chart(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        if report.chart.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Chart")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Label | Value | Dot | X | Y |")?;
        writeln!(self.writer, "|-------|-------|-----|---|---|")?;
        for point in &report.chart {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.2} | {:.2} |",
                point.label,
                point.value,
                point.dot_type.display_name(),
                point.x,
                point.y
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        print_header();
        print_selection(report);
        print_chart(report);
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Profile Report".bold().blue());
    println!("{}", "==============".blue());
    println!();
}

fn print_selection(report: &ProfileReport) {
    if report.selection.positive.is_empty() && report.selection.negative.is_none() {
        println!("No components were scored.");
        println!();
        return;
    }

    for component in &report.selection.positive {
        println!("  Strength:  {}", component.name.green().bold());
    }
    if let Some(ref component) = report.selection.negative {
        println!("  Challenge: {}", component.name.red().bold());
    }
    println!();
}

fn print_chart(report: &ProfileReport) {
    if report.chart.is_empty() {
        return;
    }

    println!("{}", "Chart points:".bold());
    for point in &report.chart {
        let dot = match point.dot_type {
            DotType::High => point.dot_type.display_name().green(),
            DotType::Low => point.dot_type.display_name().red(),
            DotType::Normal => point.dot_type.display_name().normal(),
        };
        println!(
            "  {:<20} {:>5} {:>7}  ({:>8.2}, {:>8.2})",
            point.label, point.value, dot, point.x, point.y
        );
    }
    println!();
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Component, RankedSelection, ScoreMap};
    use im::Vector;

    fn sample_report() -> ProfileReport {
        ProfileReport {
            scores: ScoreMap::from([("focus".to_string(), 12), ("drive".to_string(), 2)]),
            selection: RankedSelection {
                positive: vec![Component::new("focus", "Focus")],
                negative: Some(Component::new("drive", "Drive")),
            },
            chart: Vector::new(),
        }
    }

    #[test]
    fn test_json_writer_round_trips() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let parsed: ProfileReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, sample_report());
    }

    #[test]
    fn test_json_writer_scores_serialize_flat() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["scores"]["focus"], 12);
        assert_eq!(value["scores"]["drive"], 2);
    }

    #[test]
    fn test_markdown_writer_includes_selection_and_scores() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("# Profile Report"));
        assert!(output.contains("**Strength**: Focus"));
        assert!(output.contains("**Challenge**: Drive"));
        assert!(output.contains("| focus | 12 |"));
    }

    #[test]
    fn test_markdown_writer_empty_report() {
        let empty = ProfileReport {
            scores: ScoreMap::new(),
            selection: RankedSelection::default(),
            chart: Vector::new(),
        };

        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_report(&empty).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("No components were scored."));
        assert!(!output.contains("## Chart"));
    }
}
