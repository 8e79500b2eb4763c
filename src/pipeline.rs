use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{error, info, info_span, Span};

use crate::error::Result;
use crate::extract::extract_cards;
use crate::fetch::Fetcher;
use crate::normalize::normalize;
use crate::sources::Source;
use crate::writer::{persist, Outputs};

#[derive(Debug)]
pub struct RunSummary {
    /// Named cards found on the page.
    pub extracted: usize,
    /// Rows written after cleanup and deduplication.
    pub rows: usize,
    pub outputs: Outputs,
}

/// One fetch -> extract -> normalize -> write run for a single listing.
pub struct Pipeline {
    source: Source,
    url: String,
    output_dir: PathBuf,
    span: Span,
}

impl Pipeline {
    pub fn new(source: Source, output_dir: impl Into<PathBuf>) -> Self {
        Pipeline {
            url: source.url.to_string(),
            output_dir: output_dir.into(),
            span: info_span!("etl", entity = source.entity),
            source,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn run(&self, fetcher: &Fetcher, date: NaiveDate) -> Result<RunSummary> {
        let _guard = self.span.enter();
        info!("Starting data extraction from {} page", self.source.entity);
        let result = fetcher
            .fetch(&self.url)
            .and_then(|html| self.process(&html, date));
        self.finish(result)
    }

    /// Same as [`Pipeline::run`] on markup that was already downloaded.
    pub fn run_html(&self, html: &str, date: NaiveDate) -> Result<RunSummary> {
        let _guard = self.span.enter();
        info!("Starting data extraction from saved {} page", self.source.entity);
        let result = self.process(html, date);
        self.finish(result)
    }

    fn process(&self, html: &str, date: NaiveDate) -> Result<RunSummary> {
        let cards = extract_cards(html, &self.source.layout).inspect_err(|e| error!("{}", e))?;
        let extracted = cards.len();
        info!(
            "Successfully extracted data for {} {} members",
            extracted, self.source.entity
        );

        info!("Starting data transformation");
        let table = normalize(cards, &self.source.schema);
        let (rows, cols) = table.shape();
        info!("Transformed data shape: ({}, {})", rows, cols);

        let csv_path = self.output_dir.join(self.source.file_name(date));
        let outputs = persist(&table, &csv_path)?;

        Ok(RunSummary {
            extracted,
            rows,
            outputs,
        })
    }

    fn finish(&self, result: Result<RunSummary>) -> Result<RunSummary> {
        match &result {
            Ok(_) => info!("{} ETL process completed successfully", self.source.label()),
            Err(e) => error!("{} ETL process failed: {}", self.source.label(), e),
        }
        result
    }
}

// ── Tests ──
