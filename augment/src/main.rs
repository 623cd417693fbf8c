use anyhow::{Context, Result};
use augment::config::{Config, DatasetConfig};
use clap::Parser;
use log::LevelFilter;
use std::{env, path::PathBuf};

#[derive(Debug, Clone, Parser)]
/// Generate augmented copies of a box-annotated image dataset
struct Args {
    /// directory of *.jpg images with sibling .gt_data.txt annotations
    pub input_dir: PathBuf,
    /// existing directory receiving augmented images and annotations
    pub output_dir: PathBuf,
    #[clap(short, long, default_value = "1")]
    /// augmented copies per source image
    pub num_augmentations: usize,
    #[clap(long)]
    /// JSON5 configuration file
    pub config_file: Option<PathBuf>,
    #[clap(long)]
    /// random seed, overriding the configuration file
    pub seed: Option<u64>,
    #[clap(long)]
    /// existing directory receiving images with their boxes drawn
    pub preview_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // setup logging
    let mut builder = pretty_env_logger::formatted_builder();
    match env::var("RUST_LOG") {
        Ok(filters) => builder.parse_filters(&filters),
        Err(_) => builder.filter_level(LevelFilter::Info),
    };
    builder.init();

    // parse arguments
    let Args {
        input_dir,
        output_dir,
        num_augmentations,
        config_file,
        seed,
        preview_dir,
    } = Args::parse();

    let mut config = match &config_file {
        Some(path) => Config::open(path)
            .with_context(|| format!("failed to load config file '{}'", path.display()))?,
        None => Config::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    if preview_dir.is_some() {
        config.output.preview_dir = preview_dir;
    }

    let dataset = DatasetConfig {
        input_dir,
        output_dir,
        num_augmentations,
    };
    augment::start(&config, &dataset)?;

    Ok(())
}
