// Output rendering
use crate::chart::render_chart;
use crate::common::OutputType;
use crate::error::Result;
use crate::metrics::MetricData;
use std::io::Write;

/// Tabular layouts shared by the text-ish output types.
mod table;

use table::TableFormat;

/// Renders collected metrics to the configured output type.
pub struct Renderer<'a, W> {
    w:           W,
    data:        &'a MetricData,
    output_type: OutputType,
}

impl<'a, W: Write> Renderer<'a, W> {
    /// Return a new `Renderer` writing to `w`.
    pub fn new(w: W, data: &'a MetricData, output_type: OutputType) -> Self {
        Self {
            w,
            data,
            output_type,
        }
    }

    /// Render the metrics.
    ///
    /// The `chart` output type writes an HTML page instead of using the
    /// writer; everything else streams to `w`.
    pub fn render(&mut self) -> Result<()> {
        match self.output_type {
            OutputType::Json           => self.to_json(false),
            OutputType::PrettyJson     => self.to_json(true),
            OutputType::Text           => self.to_table(TableFormat::Text),
            OutputType::CompressedText => self.to_table(TableFormat::CompressedText),
            OutputType::Markdown       => self.to_table(TableFormat::Markdown),
            OutputType::Backlog        => self.to_table(TableFormat::Backlog),
            OutputType::Tsv            => self.to_tsv(),
            OutputType::Chart          => render_chart(self.data).map(|_| ()),
        }
    }

    fn to_json(&mut self, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut self.w, &self.data.metrics)?;
        } else {
            serde_json::to_writer(&mut self.w, &self.data.metrics)?;
        }

        writeln!(self.w)?;

        Ok(())
    }

    fn to_table(&mut self, format: TableFormat) -> Result<()> {
        let rows = self.rows();

        table::write_table(&mut self.w, format, self.data.header, &rows)?;

        Ok(())
    }

    fn to_tsv(&mut self) -> Result<()> {
        writeln!(self.w, "{}", self.data.header.join("\t"))?;

        for metric in &self.data.metrics {
            writeln!(
                self.w,
                "{}\t{}\t{}\t{}\t{:.0}",
                metric.bucket_name,
                metric.region,
                metric.metric_name,
                metric.storage_type,
                metric.value,
            )?;
        }

        Ok(())
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.data
            .metrics
            .iter()
            .map(|metric| {
                vec![
                    metric.bucket_name.clone(),
                    metric.region.clone(),
                    metric.metric_name.to_string(),
                    metric.storage_type.to_string(),
                    metric.value.to_string(),
                ]
            })
            .collect()
    }
}
