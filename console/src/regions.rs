use std::path::PathBuf;

use anyhow::Context;
use cdsplit::data_structs::FeatureKind;
use cdsplit::ExtractConfig;
use clap::Args;
use console::style;
use log::info;

use crate::loader::read_records;
use crate::utils::{
    open_output,
    UtilsArgs,
};
use crate::writer::{
    OutputFormat,
    RegionWriter,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct RegionsArgs {
    #[arg(value_parser, help = "Path to a GenBank file (plain or .gz).")]
    input: PathBuf,

    #[arg(
        short = 'o',
        long,
        required = false,
        help = "Output file. Regions are written to stdout when omitted."
    )]
    output: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value_t = OutputFormat::Tsv,
        help = "Output format."
    )]
    format: OutputFormat,

    #[arg(
        long,
        default_value_t = false,
        help = "Add the translated protein of every region (bacterial code, TSV and JSON only)."
    )]
    translate: bool,

    #[arg(
        long,
        default_value = "CDS",
        help_heading = "EXTRACTION ARGS",
        help = "Feature kind to partition."
    )]
    feature_kind: String,

    #[arg(
        long,
        default_value = "locus_tag",
        help_heading = "EXTRACTION ARGS",
        help = "Qualifier naming the locus of a region."
    )]
    locus_key: String,

    #[arg(
        long,
        default_value_t = false,
        help_heading = "EXTRACTION ARGS",
        help = "Do not reconstruct coding regions across the origin of circular records."
    )]
    no_rescue: bool,
}

impl RegionsArgs {
    pub fn config(&self) -> ExtractConfig {
        ExtractConfig::default()
            .with_feature_kind(FeatureKind::from(self.feature_kind.as_str()))
            .with_locus_key(self.locus_key.clone())
            .with_rescue_origin(!self.no_rescue)
    }

    pub fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let config = self.config();
        let sink = open_output(self.output.as_ref())?;
        let mut writer = RegionWriter::new(sink, self.format, self.translate);

        let mut records = 0;
        for record in read_records(&self.input)? {
            let record = record?;
            let regions = config
                .try_finish(&record)
                .with_context(|| format!("Failed to extract regions of '{}'", record.id()))?;

            let before = writer.written();
            for region in regions.iter() {
                writer.write(&record, &region)?;
            }
            info!(
                "Record '{}': {} regions ({} rescued across the origin)",
                record.id(),
                writer.written() - before,
                regions.rescued().len()
            );
            records += 1;
        }
        writer.flush()?;

        if let Some(output) = self.output.as_ref() {
            eprintln!(
                "Wrote {} regions of {} records to {}",
                style(writer.written()).green(),
                records,
                style(output.display()).green()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[clap(flatten)]
        args: RegionsArgs,
    }

    #[test]
    fn test_default_config() {
        let cli = TestCli::parse_from(["cdsplit", "genome.gb"]);
        assert_eq!(cli.args.config(), ExtractConfig::default());
        assert_eq!(cli.args.format, OutputFormat::Tsv);
    }

    #[test]
    fn test_config_from_flags() {
        let cli = TestCli::parse_from([
            "cdsplit",
            "genome.gb.gz",
            "-f",
            "bed",
            "--feature-kind",
            "mat_peptide",
            "--locus-key",
            "protein_id",
            "--no-rescue",
        ]);
        let config = cli.args.config();
        assert_eq!(
            config.feature_kind,
            FeatureKind::Other("mat_peptide".to_string())
        );
        assert_eq!(config.locus_key, "protein_id");
        assert!(!config.rescue_origin);
        assert_eq!(cli.args.format, OutputFormat::Bed);
    }
}
