//! Image sources and loaded assets.
//!
//! A [`SourceSet`] is the ordered list of figures a widget will show, after
//! the small-set duplication has been applied. Loading happens outside the
//! core; once every image has reported its natural size the front-end calls
//! [`assemble_assets`] exactly once and hands the result to layout.

use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};

/// One `(image URL, caption)` pair read from the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FigureSource {
    pub url: String,
    pub caption: String,
}

impl FigureSource {
    pub fn new(url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: caption.into(),
        }
    }
}

/// Natural pixel size reported by the image loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDims {
    pub width: u32,
    pub height: u32,
}

impl ImageDims {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A decoded image ready for layout. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    pub url: String,
    pub caption: String,
    pub width: u32,
    pub height: u32,
}

impl ImageAsset {
    #[inline]
    pub fn dims(&self) -> ImageDims {
        ImageDims::new(self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSet {
    entries: Vec<FigureSource>,
    original_len: usize,
}

impl SourceSet {
    /// Validate the scraped figures and apply the small-set duplication.
    pub fn plan(figures: Vec<FigureSource>, config: &CarouselConfig) -> Result<Self> {
        if figures.is_empty() {
            return Err(CarouselError::invalid("carousel needs at least one image"));
        }
        if let Some(i) = figures.iter().position(|f| f.url.trim().is_empty()) {
            return Err(CarouselError::invalid(format!("figure {i} has an empty image src")));
        }
        let original_len = figures.len();
        let entries = duplicate_small_set(figures, config.duplicate_threshold);
        if entries.len() != original_len {
            log::debug!(
                "[cyl] duplicated {} figure(s) to {} segments",
                original_len,
                entries.len()
            );
        }
        Ok(Self {
            entries,
            original_len,
        })
    }

    /// Number of segments that will be laid out (M).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of figures on the page (N).
    #[inline]
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    #[inline]
    pub fn is_duplicated(&self) -> bool {
        self.entries.len() != self.original_len
    }

    pub fn entries(&self) -> &[FigureSource] {
        &self.entries
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.url.as_str())
    }

    pub fn captions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.caption.as_str())
    }
}

/// Concatenate `items` with itself when there are `threshold` or fewer.
pub fn duplicate_small_set<T: Clone>(mut items: Vec<T>, threshold: usize) -> Vec<T> {
    if !items.is_empty() && items.len() <= threshold {
        items.extend_from_within(..);
    }
    items
}

/// Pair each planned source with the size its image decoded to.
pub fn assemble_assets(sources: &SourceSet, dims: &[ImageDims]) -> Result<Vec<ImageAsset>> {
    if dims.len() != sources.len() {
        return Err(CarouselError::invalid(format!(
            "expected {} image sizes, got {}",
            sources.len(),
            dims.len()
        )));
    }
    sources
        .entries()
        .iter()
        .zip(dims)
        .enumerate()
        .map(|(i, (src, d))| {
            if d.width == 0 || d.height == 0 {
                return Err(CarouselError::invalid(format!(
                    "image {i} ({}) has degenerate size {}x{}",
                    src.url, d.width, d.height
                )));
            }
            Ok(ImageAsset {
                url: src.url.clone(),
                caption: src.caption.clone(),
                width: d.width,
                height: d.height,
            })
        })
        .collect()
}
