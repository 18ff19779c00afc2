use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::cli::ConvertArgs;
use crate::dataset::build_dataset;
use crate::formats::ArticleRecord;
use crate::storage::ImageStore;

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let input_path = PathBuf::from(&args.input);
    let out_path = PathBuf::from(&args.out);

    if out_path.exists() {
        anyhow::bail!("dataset output already exists: {}", out_path.display());
    }

    let articles = read_articles(&input_path)?;
    let registry = args.labels.registry();
    let store = ImageStore::from_env().context("load image store config")?;

    let dataset = build_dataset(&articles, &registry, &store);
    let json = serde_json::to_vec_pretty(&dataset).context("serialize dataset json")?;

    let mut out = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&out_path)
        .with_context(|| format!("create dataset output: {}", out_path.display()))?;
    out.write_all(&json)
        .with_context(|| format!("write dataset: {}", out_path.display()))?;
    out.flush().context("flush dataset")?;

    tracing::info!(
        articles = articles.len(),
        images = dataset.images.len(),
        annotations = dataset.annotations.len(),
        out = %out_path.display(),
        "wrote object-detection dataset"
    );

    Ok(())
}

fn read_articles(path: &Path) -> anyhow::Result<Vec<ArticleRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read layout records: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse layout records: {}", path.display()))
}
