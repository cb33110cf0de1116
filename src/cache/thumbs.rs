use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, ImageReader, Rgba};

use crate::catalog::ImageId;
use crate::infra::error::ResourceError;

pub const THUMBNAIL_SIZE: u32 = 256;
const PLACEHOLDER_RGBA: [u8; 4] = [48, 48, 48, 255];
const EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fit {
    /// Center-crop to a square.
    Crop,
    /// Scale down to fit, keeping the aspect ratio.
    Contain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Thumbnail {
    pub fn placeholder() -> Self {
        let buffer = ImageBuffer::from_pixel(
            THUMBNAIL_SIZE,
            THUMBNAIL_SIZE,
            Rgba(PLACEHOLDER_RGBA),
        );
        Self {
            width: THUMBNAIL_SIZE,
            height: THUMBNAIL_SIZE,
            rgba: buffer.into_raw(),
        }
    }

    fn from_image(image: DynamicImage, fit: Fit) -> Self {
        let scaled = match fit {
            Fit::Crop => image.resize_to_fill(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Triangle),
            Fit::Contain => image.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE),
        };
        let rgba = scaled.to_rgba8();
        Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        }
    }
}

pub trait ImageResolver {
    fn resolve_image(&self, id: ImageId, fit: Fit) -> Thumbnail;
}

/// Loads images from `<assets_root>/<key>.{png,jpg,jpeg}`.
#[derive(Debug, Clone)]
pub struct AssetImages {
    assets_root: PathBuf,
}

impl AssetImages {
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        Self {
            assets_root: assets_root.into(),
        }
    }

    fn load(&self, id: ImageId, fit: Fit) -> Result<Thumbnail, ResourceError> {
        let path = thumbnail_path(&self.assets_root, id).ok_or(ResourceError::Missing(id.key()))?;
        let image = ImageReader::open(&path)?.with_guessed_format()?.decode()?;
        Ok(Thumbnail::from_image(image, fit))
    }
}

impl ImageResolver for AssetImages {
    fn resolve_image(&self, id: ImageId, fit: Fit) -> Thumbnail {
        match self.load(id, fit) {
            Ok(thumbnail) => thumbnail,
            Err(error) => {
                tracing::warn!(image = id.key(), %error, "using placeholder image");
                Thumbnail::placeholder()
            }
        }
    }
}

pub fn thumbnail_path(assets_root: &Path, id: ImageId) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| assets_root.join(format!("{}.{ext}", id.key())))
        .find(|path| path.is_file())
}
