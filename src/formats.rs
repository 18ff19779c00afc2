use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionRecord {
    pub bbox: BoundingBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minio_img_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub bbox: BoundingBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minio_img_address: Option<String>,
    #[serde(default)]
    pub authors: Vec<RegionRecord>,
    #[serde(default)]
    pub columns: Vec<RegionRecord>,
    #[serde(default)]
    pub titles: Vec<RegionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub supercategory: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub year: i32,
    pub version: String,
    pub description: String,
    pub contributor: String,
    pub url: String,
    pub date_created: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    pub id: u32,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: u32,
    pub width: f64,
    pub height: f64,
    pub file_name: Option<String>,
    pub license: u32,
    pub flickr_url: String,
    pub coco_url: String,
    pub date_captured: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationAttributes {
    #[serde(rename = "URL")]
    pub url: String,
    pub occluded: bool,
    pub rotation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    pub id: u32,
    pub image_id: u32,
    pub category_id: Option<u32>,
    pub segmentation: Vec<Vec<f64>>,
    pub area: f64,
    // Corner pair plus width/height, label dropped.
    pub bbox: [f64; 6],
    pub iscrowd: u32,
    pub attributes: AnnotationAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDetectionDataset {
    pub info: DatasetInfo,
    pub images: Vec<ImageRecord>,
    pub licenses: Vec<License>,
    pub categories: Vec<Category>,
    pub annotations: Vec<Annotation>,
}
