use std::io::Write;

use cdsplit::data_structs::typedef::PosType;
use cdsplit::utils::translate_bacterial;
use cdsplit::{
    CdsRegion,
    GenomicRecord,
};
use clap::ValueEnum;
use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// One region per row, tab separated, with a header
    Tsv,
    /// BED6, one row per region part
    Bed,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Serialize)]
struct TsvRow<'a> {
    record:    &'a str,
    locus_tag: &'a str,
    strand:    char,
    start:     PosType,
    end:       PosType,
    parts:     String,
    length:    PosType,
    #[serde(skip_serializing_if = "Option::is_none")]
    protein:   Option<String>,
}

/// BED6 line: chrom, start, end, name, score, strand.
#[derive(Debug, Serialize)]
struct BedRow<'a> {
    chrom:  &'a str,
    start:  PosType,
    end:    PosType,
    name:   &'a str,
    score:  u8,
    strand: char,
}

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    record: &'a str,
    region: &'a CdsRegion,
    #[serde(skip_serializing_if = "Option::is_none")]
    protein: Option<String>,
}

enum Sink<W: Write> {
    Tsv(csv::Writer<W>),
    Bed(csv::Writer<W>),
    Json(W),
}

/// Writes regions in the selected [`OutputFormat`].
pub(crate) struct RegionWriter<W: Write> {
    sink:      Sink<W>,
    translate: bool,
    written:   usize,
}

impl<W: Write> RegionWriter<W> {
    pub fn new(
        writer: W,
        format: OutputFormat,
        translate: bool,
    ) -> Self {
        let sink = match format {
            OutputFormat::Tsv => {
                Sink::Tsv(
                    csv::WriterBuilder::default()
                        .delimiter(b'\t')
                        .has_headers(true)
                        .from_writer(writer),
                )
            },
            OutputFormat::Bed => {
                Sink::Bed(
                    csv::WriterBuilder::default()
                        .delimiter(b'\t')
                        .has_headers(false)
                        .from_writer(writer),
                )
            },
            OutputFormat::Json => Sink::Json(writer),
        };
        Self {
            sink,
            translate,
            written: 0,
        }
    }

    /// Number of regions written so far.
    pub fn written(&self) -> usize { self.written }

    fn protein(
        &self,
        record: &GenomicRecord,
        region: &CdsRegion,
    ) -> anyhow::Result<Option<String>> {
        if !self.translate {
            return Ok(None);
        }
        let bases = region.location().extract(record.sequence())?;
        Ok(Some(translate_bacterial(&bases)))
    }

    pub fn write(
        &mut self,
        record: &GenomicRecord,
        region: &CdsRegion,
    ) -> anyhow::Result<()> {
        let protein = self.protein(record, region)?;
        let location = region.location();
        match &mut self.sink {
            Sink::Tsv(writer) => {
                writer.serialize(TsvRow {
                    record: record.id(),
                    locus_tag: region.locus_tag(),
                    strand: location.strand().into(),
                    start: location.start(),
                    end: location.end(),
                    parts: location.parts().iter().join(","),
                    length: location.len(),
                    protein,
                })?;
            },
            Sink::Bed(writer) => {
                for part in location.parts() {
                    writer.serialize(BedRow {
                        chrom:  record.id(),
                        start:  part.start(),
                        end:    part.end(),
                        name:   region.locus_tag(),
                        score:  0,
                        strand: location.strand().into(),
                    })?;
                }
            },
            Sink::Json(writer) => {
                serde_json::to_writer(&mut *writer, &JsonRow {
                    record: record.id(),
                    region,
                    protein,
                })?;
                writeln!(writer)?;
            },
        }
        self.written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        match &mut self.sink {
            Sink::Tsv(writer) | Sink::Bed(writer) => writer.flush()?,
            Sink::Json(writer) => writer.flush()?,
        }
        Ok(())
    }
}
