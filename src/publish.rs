use std::path::PathBuf;

use anyhow::Context as _;

use crate::cli::PublishArgs;
use crate::dataset::build_dataset;
use crate::formats::ArticleRecord;
use crate::registry::CategoryRegistry;
use crate::storage::{ImageStore, ObjectStoreClient, UploadReceipt, UploadTarget};

pub async fn run(args: PublishArgs) -> anyhow::Result<()> {
    let input_path = PathBuf::from(&args.input);
    let raw = std::fs::read_to_string(&input_path)
        .with_context(|| format!("read layout records: {}", input_path.display()))?;
    let articles: Vec<ArticleRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("parse layout records: {}", input_path.display()))?;

    let registry = args.labels.registry();
    let store = ImageStore::from_env().context("load image store config")?;
    let target = UploadTarget::from_env().context("load upload target config")?;
    let client = ObjectStoreClient::new(target);

    match publish_dataset(&articles, &args.name, &registry, &store, &client).await? {
        Some(receipt) => {
            println!("{}", receipt.body);
        }
        None => {
            tracing::warn!(name = %args.name, "dataset was not stored");
        }
    }

    Ok(())
}

pub async fn publish_dataset(
    articles: &[ArticleRecord],
    custom_name: &str,
    registry: &CategoryRegistry,
    store: &ImageStore,
    client: &ObjectStoreClient,
) -> anyhow::Result<Option<UploadReceipt>> {
    let dataset = build_dataset(articles, registry, store);
    let payload = serde_json::to_vec_pretty(&dataset).context("serialize dataset json")?;

    tracing::info!(
        name = custom_name,
        bytes = payload.len(),
        "uploading dataset document"
    );
    client.upload_document(custom_name, payload).await
}
