//! Strapi client for the CMS-backed variant.
//!
//! Three read-only collections feed the page: the site-content singleton,
//! the gallery list and the booking-policy list. Each is fetched once per
//! load attempt, a piece that comes back empty or broken degrades to its
//! hardcoded default, and only a CMS that is unreachable on every request
//! turns into a page-level failure.

use gloo::console::error;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::content::{GalleryEntry, PolicyEntry, SiteContent, SiteImage, SiteView};
use crate::icons::PolicyIcon;

const DEFAULT_BASE_URL: &str = "http://localhost:1337";

/// What the page shows when the CMS could not be reached at all. Failure
/// detail stays in the console.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load content. Please try again later.";

/// Where the CMS lives and how to talk to it. Both values are baked in at
/// build time, the trunk analog of the old `NEXT_PUBLIC_*` variables.
#[derive(Debug, Clone, PartialEq)]
pub struct StrapiConfig {
    pub base_url: String,
    pub api_token: Option<String>,
}

impl StrapiConfig {
    /// Reads `STRAPI_URL` / `STRAPI_API_TOKEN` from the build environment.
    /// An unset URL falls back to a local instance; an unset token simply
    /// means requests go out without an `Authorization` header.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("STRAPI_URL").unwrap_or(DEFAULT_BASE_URL),
            option_env!("STRAPI_API_TOKEN"),
        )
    }

    pub fn new(base_url: &str, api_token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.map(str::to_string),
        }
    }
}

/// Strapi wraps every response in a top-level `data` field; `null` there
/// means the collection has no content yet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

/// An uploaded file as Strapi returns it when populated into a record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
}

/// The site-content singleton, camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContentRecord {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub intro_title: String,
    #[serde(default)]
    pub intro_description: String,
    #[serde(default)]
    pub additional_info: String,
    #[serde(default)]
    pub instagram_handle: String,
    #[serde(default)]
    pub tiktok_handle: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub whatsapp_number: String,
    #[serde(default)]
    pub profile_image: Option<ImageAsset>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageRecord {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<ImageAsset>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPolicyRecord {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon_type: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("cms answered with HTTP {0}")]
    Status(u16),
}

/// One load attempt settles to exactly one of these. The page never sees a
/// half-updated mixture of content and error.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(SiteView),
    Failed(String),
}

/// Outcome of one request: `Ok(None)` is an empty-but-successful response,
/// `Err` is a network/status/parse failure.
type Piece<T> = Result<Option<T>, LoadError>;

/// Runs the three content requests and merges whatever arrived into the
/// view model. Never panics and never surfaces failure detail to the page.
pub async fn load_site(config: &StrapiConfig) -> LoadState {
    let site = logged(
        "site-content",
        fetch_data(config, "/api/site-content?populate=profileImage").await,
    );
    let gallery = logged(
        "gallery-images",
        fetch_data(config, "/api/gallery-images?populate=image").await,
    );
    let policies = logged(
        "booking-policies",
        fetch_data(config, "/api/booking-policies").await,
    );
    settle(site, gallery, policies, &config.base_url)
}

async fn fetch_data<T: DeserializeOwned>(config: &StrapiConfig, path: &str) -> Piece<T> {
    let resp = get(config, path).send().await?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    let envelope: Envelope<T> = resp.json().await?;
    Ok(envelope.data)
}

fn get(config: &StrapiConfig, path: &str) -> RequestBuilder {
    let req = Request::get(&format!("{}{path}", config.base_url));
    match &config.api_token {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

/// Swallowed failures still leave a trace in the console.
fn logged<T>(endpoint: &str, piece: Piece<T>) -> Piece<T> {
    if let Err(err) = &piece {
        error!(format!("{endpoint}: {err}"));
    }
    piece
}

/// A piece that failed degrades to its default exactly like an empty
/// payload; the page only fails outright when all three requests did.
fn settle(
    site: Piece<SiteContentRecord>,
    gallery: Piece<Vec<GalleryImageRecord>>,
    policies: Piece<Vec<BookingPolicyRecord>>,
    base_url: &str,
) -> LoadState {
    if site.is_err() && gallery.is_err() && policies.is_err() {
        return LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
    }
    LoadState::Ready(build_view(
        site.unwrap_or_default(),
        gallery.unwrap_or_default(),
        policies.unwrap_or_default(),
        base_url,
    ))
}

/// Pure merge step: adopt each payload field-for-field, resolve images and
/// icon labels, and substitute the documented defaults for absent pieces.
/// Entry order is kept exactly as delivered.
pub fn build_view(
    site: Option<SiteContentRecord>,
    gallery: Option<Vec<GalleryImageRecord>>,
    policies: Option<Vec<BookingPolicyRecord>>,
    base_url: &str,
) -> SiteView {
    let content = match site {
        Some(record) => SiteContent {
            business_name: record.business_name,
            tagline: record.tagline,
            intro_title: record.intro_title,
            intro_description: record.intro_description,
            additional_info: record.additional_info,
            instagram_handle: record.instagram_handle,
            tiktok_handle: record.tiktok_handle,
            phone_number: record.phone_number,
            whatsapp_number: record.whatsapp_number,
            profile_image: record.profile_image.map(|asset| resolve_image(base_url, asset)),
        },
        None => SiteContent::default(),
    };

    let gallery = gallery
        .unwrap_or_default()
        .into_iter()
        .map(|record| GalleryEntry {
            id: record.id,
            title: record.title,
            description: record.description,
            image: record.image.map(|asset| resolve_image(base_url, asset)),
        })
        .collect();

    let policies = policies
        .unwrap_or_default()
        .into_iter()
        .map(|record| PolicyEntry {
            id: record.id,
            title: record.title,
            description: record.description,
            icon: PolicyIcon::from_label(&record.icon_type),
        })
        .collect();

    SiteView {
        content,
        gallery,
        policies,
    }
}

/// Uploads are stored root-relative on the CMS; anything already absolute
/// passes through untouched. No location at all resolves to an empty
/// display location.
pub fn resolve_image_url(base_url: &str, url: &str) -> String {
    if url.is_empty() {
        String::new()
    } else if url.starts_with("http") {
        url.to_string()
    } else {
        format!("{base_url}{url}")
    }
}

fn resolve_image(base_url: &str, asset: ImageAsset) -> SiteImage {
    SiteImage {
        url: resolve_image_url(base_url, &asset.url),
        alt: asset.alternative_text,
    }
}
