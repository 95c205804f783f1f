use std::path::PathBuf;

use cdsplit::cds::regularity;
use cdsplit::data_structs::FeatureKind;
use cdsplit::{
    ExtractConfig,
    GenomicRecord,
};
use clap::Args;
use console::style;
use itertools::Itertools;

use crate::loader::read_records;
use crate::utils::UtilsArgs;

#[derive(Args, Debug, Clone)]
pub(crate) struct CheckArgs {
    #[arg(value_parser, help = "Path to a GenBank file (plain or .gz).")]
    input: PathBuf,
}

/// Coding feature counts of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordSummary {
    pub cds:       usize,
    pub regular:   usize,
    /// Irregular features by reason.
    pub irregular: Vec<(String, usize)>,
}

impl RecordSummary {
    pub fn of(record: &GenomicRecord) -> Self {
        let reasons = record
            .features()
            .iter()
            .filter(|feature| feature.kind() == &FeatureKind::Cds)
            .map(|feature| regularity(feature, record))
            .collect_vec();
        let irregular = reasons
            .iter()
            .flatten()
            .map(|reason| reason.to_string())
            .counts()
            .into_iter()
            .sorted()
            .collect_vec();
        Self {
            cds: reasons.len(),
            regular: reasons.iter().filter(|r| r.is_none()).count(),
            irregular,
        }
    }
}

impl CheckArgs {
    pub fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let config = ExtractConfig::default();
        let mut failed = 0;

        for record in read_records(&self.input)? {
            let record = record?;
            let summary = RecordSummary::of(&record);

            println!(
                "{} ({}, {} bp)",
                style(record.id()).blue(),
                record.topology(),
                record.len()
            );
            println!(
                "  CDS: {}, regular: {}",
                summary.cds,
                style(summary.regular).green()
            );
            for (reason, count) in summary.irregular.iter() {
                println!("  {} {}", style(count).yellow(), reason);
            }

            match config.try_finish(&record) {
                Ok(regions) => {
                    println!(
                        "[{}] {} regions, {} rescued across the origin",
                        style("V").green(),
                        style(regions.iter().count()).green(),
                        regions.rescued().len()
                    );
                },
                Err(error) => {
                    failed += 1;
                    println!("[{}] {}", style("X").red(), style(error).red());
                },
            }
        }

        if failed > 0 {
            anyhow::bail!("{} record(s) could not be partitioned", failed);
        }
        Ok(())
    }
}
