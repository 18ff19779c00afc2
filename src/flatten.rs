use crate::formats::{ArticleRecord, BoundingBox};

#[derive(Debug, Clone)]
pub struct FlattenedItem {
    pub image_id: u32,
    pub bbox: BoundingBox,
    pub minio_img_address: Option<String>,
}

// One image id sequence over the whole page: ids are contiguous from 1 in
// emission order, regardless of which article a region belongs to.
pub fn flatten_articles(articles: &[ArticleRecord]) -> Vec<FlattenedItem> {
    let mut items = Vec::new();

    for article in articles {
        // The article region comes first, then its sub-regions by kind.
        push_item(&mut items, &article.bbox, &article.minio_img_address);
        for region in &article.authors {
            push_item(&mut items, &region.bbox, &region.minio_img_address);
        }
        for region in &article.columns {
            push_item(&mut items, &region.bbox, &region.minio_img_address);
        }
        for region in &article.titles {
            push_item(&mut items, &region.bbox, &region.minio_img_address);
        }
    }

    items
}

fn push_item(
    items: &mut Vec<FlattenedItem>,
    bbox: &BoundingBox,
    minio_img_address: &Option<String>,
) {
    let image_id = items.len() as u32 + 1;
    items.push(FlattenedItem {
        image_id,
        bbox: bbox.clone(),
        minio_img_address: minio_img_address.clone(),
    });
}
