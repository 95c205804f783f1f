use std::fs::File;
use std::io::{
    BufReader,
    BufWriter,
    Read,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use anyhow::Context;
use clap::Args;
use flate2::read::MultiGzDecoder;
use log::LevelFilter;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v info, -vv debug, -vvv trace). \
                RUST_LOG takes precedence."
    )]
    pub verbose: u8,
}

impl UtilsArgs {
    pub fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn setup(&self) -> anyhow::Result<()> {
        let mut builder = pretty_env_logger::formatted_builder();
        builder.filter_level(self.level());
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        builder.try_init()?;
        Ok(())
    }
}

fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Opens `path` for reading, decompressing `.gz` files.
pub(crate) fn open_input(path: &Path) -> anyhow::Result<Box<dyn Read>> {
    if !path.is_file() {
        anyhow::bail!("Path {} is not a file", path.display());
    }
    let file = File::open(path)
        .with_context(|| format!("Could not open file {}", path.display()))?;
    let reader: Box<dyn Read> = if is_gzipped(path) {
        Box::new(MultiGzDecoder::new(BufReader::new(file)))
    }
    else {
        Box::new(BufReader::new(file))
    };
    Ok(reader)
}

/// Opens `path` for writing, or standard output when no path is given.
pub(crate) fn open_output(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    let sink: Box<dyn Write> = match path {
        Some(path) => {
            if path.is_dir() {
                anyhow::bail!("Output path {} is a directory", path.display());
            }
            let file = File::create(path)
                .with_context(|| format!("Could not create file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        },
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    Ok(sink)
}
