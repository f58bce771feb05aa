use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use wordcloud::{CloudConfig, CloudError, FontRasterizer, exclusion_set};

#[derive(Parser, Debug)]
#[command(name = "wordcloud", version)]
struct Cli {
    /// Folder containing the corpus text files.
    #[arg(long, default_value = ".")]
    input: PathBuf,

    /// Filename pattern to read within the input folder (`*`/`?` wildcards).
    #[arg(long, default_value = "combined.txt")]
    pattern: String,

    /// Mask image; words are placed inside its non-white silhouette.
    #[arg(long)]
    mask: PathBuf,

    /// TTF/OTF font used to rasterize words.
    #[arg(long)]
    font: PathBuf,

    /// Output directory for PNGs and frequency reports.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Maximum number of words placed per image.
    #[arg(long, default_value_t = 150)]
    max_words: usize,

    /// Extra terms to exclude, in addition to the built-in filter list.
    #[arg(long = "filter")]
    filter: Vec<String>,

    /// Skip the stopword-filtered variant (image1 + words_with_stopwords.txt).
    #[arg(long)]
    skip_filtered: bool,

    /// Skip the unfiltered variant (image2 + words_without_stopwords.txt).
    #[arg(long)]
    skip_unfiltered: bool,

    /// Determinism seed for start points, rotations, and colors.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Mask failure is fatal up front: a masked run was asked for, so running
    // unmasked would be the wrong output, not a fallback.
    let region = wordcloud::mask::load_mask(&cli.mask)?;

    let text = wordcloud::corpus::read_corpus(&cli.input, &cli.pattern)?;
    if text.trim().is_empty() {
        anyhow::bail!("no readable text found in '{}'", cli.input.display());
    }

    let cfg = CloudConfig {
        max_words: cli.max_words,
        seed: cli.seed,
        ..CloudConfig::default()
    };
    let rasterizer = FontRasterizer::from_file(&cli.font, cfg.margin)?;

    let variants = [
        (
            !cli.skip_filtered,
            true,
            "image1.png",
            "words_with_stopwords.txt",
        ),
        (
            !cli.skip_unfiltered,
            false,
            "image2.png",
            "words_without_stopwords.txt",
        ),
    ];

    let mut produced = 0usize;
    for (enabled, with_stopwords, image_name, report_name) in variants {
        if !enabled {
            continue;
        }
        let exclusion = exclusion_set(with_stopwords, &cli.filter);
        let cloud = match wordcloud::generate(&text, &exclusion, &rasterizer, Some(region.clone()), &cfg)
        {
            Ok(cloud) => cloud,
            Err(CloudError::Corpus(msg)) => {
                // One variant filtering everything out skips that variant only.
                tracing::warn!(variant = image_name, %msg, "skipping variant");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let image_path = cli.out.join(image_name);
        let report_path = cli.out.join(report_name);
        wordcloud::write_png(&cloud.render(&cfg), &image_path)?;
        std::fs::write(&report_path, cloud.report())
            .with_context(|| format!("write report '{}'", report_path.display()))?;
        eprintln!("wrote {} and {}", image_path.display(), report_path.display());
        produced += 1;
    }

    if produced == 0 {
        anyhow::bail!("no variant produced output (corpus empty after filtering)");
    }
    Ok(())
}
