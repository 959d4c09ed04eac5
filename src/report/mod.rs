//! Startup consultant report: narrative sections plus the financial projection
//!
//! The projection is pure and runs first; narrative sections come from an
//! injected [`SectionWriter`], and rendering only reads the assembled
//! [`Report`].

mod render;
mod sections;
mod writer;

pub use render::{format_table, render_text, write_table_csv, ChartSpec, TABLE_COLUMNS};
pub use sections::{build_prompt, section_plan, BusinessProfile, SectionSpec};
pub use writer::{PromptPreviewWriter, SectionWriter};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ReportError;
use crate::inputs::ProjectionInput;
use crate::projection::{ProjectionEngine, ProjectionResult};

pub const REPORT_TITLE: &str = "Startup Consultant Report";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub heading: String,
    pub content: String,
}

/// Assembled report, ready to render
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<ReportSection>,
    pub projection: ProjectionResult,
    pub chart: ChartSpec,
}

/// Composes projection and narrative generation into a [`Report`]
pub struct ReportBuilder<'a, W: SectionWriter + ?Sized> {
    writer: &'a W,
}

impl<'a, W: SectionWriter + ?Sized> ReportBuilder<'a, W> {
    pub fn new(writer: &'a W) -> Self {
        Self { writer }
    }

    /// Build a report. Input is validated and projected before any section
    /// is generated, so bad numbers never cost a generation call.
    pub fn build(
        &self,
        profile: &BusinessProfile,
        input: &ProjectionInput,
        generated_at: DateTime<Utc>,
    ) -> Result<Report, ReportError> {
        input.validate()?;
        let projection = ProjectionEngine::new(*input)?.run();

        let mut sections = Vec::new();
        for spec in section_plan(profile) {
            log::info!("generating section {}", spec.heading());
            let content = self.writer.write_section(spec.title, &spec.prompt())?;
            sections.push(ReportSection {
                heading: spec.heading(),
                content: content.trim().to_string(),
            });
        }

        let chart = ChartSpec::cash_flow(&projection);
        Ok(Report {
            title: REPORT_TITLE.to_string(),
            generated_at,
            sections,
            projection,
            chart,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::RefCell;

    /// Records titles and answers with a fixed, padded body
    struct RecordingWriter {
        calls: RefCell<Vec<String>>,
    }

    impl SectionWriter for RecordingWriter {
        fn write_section(&self, title: &str, _prompt: &str) -> Result<String, ReportError> {
            self.calls.borrow_mut().push(title.to_string());
            Ok(format!("  Analysis of {}.  \n", title))
        }
    }

    struct FailingWriter;

    impl SectionWriter for FailingWriter {
        fn write_section(&self, title: &str, _prompt: &str) -> Result<String, ReportError> {
            Err(ReportError::Generation {
                title: title.to_string(),
                message: "quota exceeded".to_string(),
            })
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn profile() -> BusinessProfile {
        BusinessProfile {
            business_plan: "B2B invoicing for freelancers".into(),
            personality_type: "INTP".into(),
            psychometric: "Low risk aversion".into(),
        }
    }

    #[test]
    fn test_build_report() {
        let writer = RecordingWriter { calls: RefCell::new(Vec::new()) };
        let input = ProjectionInput { months: 3, ..Default::default() };
        let report = ReportBuilder::new(&writer).build(&profile(), &input, fixed_time()).unwrap();

        assert_eq!(report.title, "Startup Consultant Report");
        assert_eq!(report.sections.len(), 5);
        assert_eq!(report.sections[1].heading, "2. Founder-Market Fit");
        assert_eq!(report.sections[1].content, "Analysis of Founder-Market Fit.");
        assert_eq!(writer.calls.borrow().len(), 5);
        assert_eq!(report.projection.rows.len(), 3);
        assert_eq!(report.chart.points.len(), 3);
    }

    #[test]
    fn test_invalid_input_skips_generation() {
        let writer = RecordingWriter { calls: RefCell::new(Vec::new()) };
        let input = ProjectionInput { months: 0, ..Default::default() };
        let err = ReportBuilder::new(&writer).build(&profile(), &input, fixed_time()).unwrap_err();

        assert!(matches!(err, ReportError::Projection(_)));
        assert!(writer.calls.borrow().is_empty());
    }

    #[test]
    fn test_generation_failure_propagates() {
        let input = ProjectionInput::default();
        let err = ReportBuilder::new(&FailingWriter).build(&profile(), &input, fixed_time()).unwrap_err();
        match err {
            ReportError::Generation { title, .. } => assert_eq!(title, "Overview of Input B-Plan"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_render_text() {
        let writer = PromptPreviewWriter::new(Default::default());
        let input = ProjectionInput { months: 3, ..Default::default() };
        let report = ReportBuilder::new(&writer).build(&profile(), &input, fixed_time()).unwrap();
        let text = render_text(&report);

        assert!(text.starts_with("Startup Consultant Report\n"));
        assert!(text.contains("Generated: 2024-03-01 09:30 UTC"));
        assert!(text.contains("5. Market Research Plan"));
        assert!(text.contains("Financial Projection"));
        assert!(text.contains("Peak funding need:      352.00"));
        assert!(text.contains("Breakeven:              not reached"));
    }
}
