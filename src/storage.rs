use anyhow::Context as _;
use url::Url;

// Object-store layout the upstream layout-detection stage writes page crops
// into. Only used to build the public URL attached to each annotation.
#[derive(Debug, Clone)]
pub struct ImageStore {
    pub address: String,
    pub protected_bucket: String,
    pub segmented_bucket: String,
}

impl ImageStore {
    pub fn from_env() -> anyhow::Result<Self> {
        let address = std::env::var("COCOFY_STORE_ADDRESS")
            .context("COCOFY_STORE_ADDRESS is required to build annotation URLs")?;
        let address = address.trim().trim_end_matches('/').to_string();
        if address.is_empty() {
            anyhow::bail!("COCOFY_STORE_ADDRESS is empty");
        }

        let protected_bucket = std::env::var("COCOFY_PROTECTED_BUCKET")
            .unwrap_or_else(|_| "protected".to_string());
        let segmented_bucket = std::env::var("COCOFY_SEGMENTED_BUCKET")
            .unwrap_or_else(|_| "segmented".to_string());

        Ok(Self {
            address,
            protected_bucket,
            segmented_bucket,
        })
    }

    // Whole-article crops (label `content`) live behind access control; every
    // other region kind is served from the segmented bucket.
    pub fn object_url(&self, label: &str, object: Option<&str>) -> String {
        let bucket = if label == "content" {
            &self.protected_bucket
        } else {
            &self.segmented_bucket
        };
        format!("{}/{}/{}", self.address, bucket, object.unwrap_or_default())
    }
}

#[derive(Debug, Clone)]
pub struct UploadTarget {
    pub object_api: Url,
    pub content_bucket: String,
}

impl UploadTarget {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var("COCOFY_OBJECT_API")
            .context("COCOFY_OBJECT_API is required to upload datasets")?;
        let object_api = parse_object_api(&raw)?;

        let content_bucket =
            std::env::var("COCOFY_CONTENT_BUCKET").unwrap_or_else(|_| "content".to_string());

        Ok(Self {
            object_api,
            content_bucket,
        })
    }
}

fn parse_object_api(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).context("parse COCOFY_OBJECT_API")?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("COCOFY_OBJECT_API must be http or https: {url}");
    }
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct UploadReceipt {
    pub status: u16,
    pub body: serde_json::Value,
}

pub struct ObjectStoreClient {
    client: reqwest::Client,
    target: UploadTarget,
}

impl ObjectStoreClient {
    pub fn new(target: UploadTarget) -> Self {
        Self {
            client: reqwest::Client::new(),
            target,
        }
    }

    // A refused upload (any status outside 200/201/202) is reported as
    // `None`, not as an error: the caller decides whether a missing receipt
    // matters. Transport failures still surface as errors.
    pub async fn upload_document(
        &self,
        custom_name: &str,
        payload: Vec<u8>,
    ) -> anyhow::Result<Option<UploadReceipt>> {
        let part = reqwest::multipart::Part::bytes(payload)
            .file_name("document.json")
            .mime_str("application/json")
            .context("build multipart document part")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let endpoint = self.target.object_api.clone();
        let response = self
            .client
            .post(endpoint.clone())
            .query(&[
                ("bucket_name", self.target.content_bucket.as_str()),
                ("custom_name", custom_name),
                ("unique_minio_address", "false"),
            ])
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("POST {endpoint}"))?;

        let status = response.status();
        if !matches!(status.as_u16(), 200 | 201 | 202) {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                custom_name,
                "object store refused dataset upload"
            );
            return Ok(None);
        }

        let body: serde_json::Value = response
            .json()
            .await
            .context("parse object store upload response")?;
        tracing::debug!(
            status = status.as_u16(),
            response = %body,
            custom_name,
            "object store accepted dataset upload"
        );

        Ok(Some(UploadReceipt {
            status: status.as_u16(),
            body,
        }))
    }
}
