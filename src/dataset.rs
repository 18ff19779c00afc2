use chrono::Utc;

use crate::flatten::{FlattenedItem, flatten_articles};
use crate::formats::{
    Annotation, AnnotationAttributes, ArticleRecord, DatasetInfo, ImageRecord, License,
    ObjectDetectionDataset,
};
use crate::registry::CategoryRegistry;
use crate::storage::ImageStore;

pub fn build_images(items: &[FlattenedItem]) -> Vec<ImageRecord> {
    items
        .iter()
        .map(|item| ImageRecord {
            id: item.image_id,
            width: item.bbox.width,
            height: item.bbox.height,
            file_name: item.minio_img_address.clone(),
            license: 0,
            flickr_url: String::new(),
            coco_url: String::new(),
            date_captured: None,
        })
        .collect()
}

// Annotation ids are their own 1-based sequence in flattened order; they are
// not derived from the image ids the items carry.
pub fn build_annotations(
    items: &[FlattenedItem],
    registry: &CategoryRegistry,
    store: &ImageStore,
) -> Vec<Annotation> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let bbox = &item.bbox;
            Annotation {
                id: idx as u32 + 1,
                image_id: item.image_id,
                category_id: registry.resolve(&bbox.label),
                segmentation: Vec::new(),
                area: bbox.width * bbox.height,
                bbox: [
                    bbox.x_min,
                    bbox.y_min,
                    bbox.x_max,
                    bbox.y_max,
                    bbox.width,
                    bbox.height,
                ],
                iscrowd: 0,
                attributes: AnnotationAttributes {
                    url: store.object_url(&bbox.label, item.minio_img_address.as_deref()),
                    occluded: false,
                    rotation: 0.0,
                },
            }
        })
        .collect()
}

pub fn build_dataset(
    articles: &[ArticleRecord],
    registry: &CategoryRegistry,
    store: &ImageStore,
) -> ObjectDetectionDataset {
    let items = flatten_articles(articles);
    tracing::debug!(
        articles = articles.len(),
        items = items.len(),
        "flattened layout records"
    );

    let images = build_images(&items);
    let annotations = build_annotations(&items, registry, store);
    tracing::debug!(
        images = images.len(),
        annotations = annotations.len(),
        "built dataset records"
    );

    let dataset = ObjectDetectionDataset {
        info: placeholder_info(),
        images,
        licenses: vec![placeholder_license()],
        categories: registry.categories().to_vec(),
        annotations,
    };
    tracing::info!(
        images = dataset.images.len(),
        annotations = dataset.annotations.len(),
        categories = dataset.categories.len(),
        "assembled object-detection dataset"
    );

    dataset
}

// The downstream annotation tool fills these in; only `date_created` is real.
fn placeholder_info() -> DatasetInfo {
    DatasetInfo {
        year: 0,
        version: String::new(),
        description: String::new(),
        contributor: String::new(),
        url: String::new(),
        date_created: Utc::now(),
    }
}

fn placeholder_license() -> License {
    License {
        id: 0,
        name: String::new(),
        url: String::new(),
    }
}
