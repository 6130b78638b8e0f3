//! Angular layout of images around the cylinder.
//!
//! Each image gets a share of the full turn proportional to its pixel width,
//! so naturally sized images tile the cylinder without stretching. The gutter
//! only shrinks what is drawn; it never changes the allocation.

use crate::error::{CarouselError, Result};
use crate::source::{ImageAsset, ImageDims};
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentLayout {
    pub index: usize,
    /// Allocated angular width, always > 0.
    pub theta: f64,
    /// Angular centre measured from segment 0's leading edge, less half a gutter.
    pub midpoint: f64,
    /// Height over width of the source image.
    pub ratio: f64,
    /// Angle where the segment's allocation begins.
    pub start: f64,
    /// Angular span actually drawn (`theta - gutter`, never negative).
    pub rendered_extent: f64,
    /// Wall height that keeps the image's aspect ratio at radius 1.
    pub relative_height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselLayout {
    segments: Vec<SegmentLayout>,
    widths: Vec<f64>,
    prefix: Vec<f64>,
    total_width: f64,
    gutter_radians: f64,
}

impl CarouselLayout {
    pub fn from_assets(assets: &[ImageAsset], gutter_fraction: f64) -> Result<Self> {
        let dims: Vec<ImageDims> = assets.iter().map(ImageAsset::dims).collect();
        Self::compute(&dims, gutter_fraction)
    }

    pub fn compute(dims: &[ImageDims], gutter_fraction: f64) -> Result<Self> {
        if dims.is_empty() {
            return Err(CarouselError::invalid("layout needs at least one image"));
        }
        if let Some(i) = dims.iter().position(|d| d.width == 0 || d.height == 0) {
            return Err(CarouselError::invalid(format!(
                "image {i} has non-positive size {}x{}",
                dims[i].width, dims[i].height
            )));
        }
        if !gutter_fraction.is_finite() || gutter_fraction < 0.0 {
            return Err(CarouselError::invalid(format!(
                "gutter fraction must be >= 0, got {gutter_fraction}"
            )));
        }

        let widths: Vec<f64> = dims.iter().map(|d| d.width as f64).collect();
        let mut prefix = Vec::with_capacity(widths.len() + 1);
        prefix.push(0.0);
        for w in &widths {
            let last = prefix[prefix.len() - 1];
            prefix.push(last + w);
        }
        let total_width = prefix[widths.len()];
        let gutter_radians = gutter_fraction * TAU;

        let segments = dims
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let w = widths[i];
                let theta = (w / total_width) * TAU;
                let midpoint = ((w / 2.0 + prefix[i]) / total_width) * TAU - gutter_radians / 2.0;
                let ratio = d.height as f64 / w;
                let mut rendered_extent = theta - gutter_radians;
                if rendered_extent <= 0.0 {
                    log::warn!(
                        "[layout] gutter {:.4} rad swallows segment {} ({:.4} rad), drawing nothing",
                        gutter_radians,
                        i,
                        theta
                    );
                    rendered_extent = 0.0;
                }
                SegmentLayout {
                    index: i,
                    theta,
                    midpoint,
                    ratio,
                    start: (prefix[i] / total_width) * TAU,
                    rendered_extent,
                    relative_height: theta * ratio,
                }
            })
            .collect::<Vec<_>>();

        log::info!(
            "[layout] {} segments, total width {}px, gutter {:.4} rad",
            segments.len(),
            total_width,
            gutter_radians
        );

        Ok(Self {
            segments,
            widths,
            prefix,
            total_width,
            gutter_radians,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[SegmentLayout] {
        &self.segments
    }

    #[inline]
    pub fn segment(&self, index: usize) -> Option<&SegmentLayout> {
        self.segments.get(index)
    }

    #[inline]
    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    #[inline]
    pub fn gutter_radians(&self) -> f64 {
        self.gutter_radians
    }

    #[inline]
    pub fn width(&self, index: usize) -> f64 {
        self.widths[index]
    }

    /// Sum of the pixel widths of every segment before `index`.
    #[inline]
    pub fn accumulated_width(&self, index: usize) -> f64 {
        self.prefix[index]
    }

    /// Pixel position of the centre of segment `index` along the unrolled strip.
    #[inline]
    pub fn center_position(&self, index: usize) -> f64 {
        self.accumulated_width(index) + self.width(index) / 2.0
    }

    /// Rotation that turns segment 0 to face the camera.
    #[inline]
    pub fn assembly_offset(&self) -> f64 {
        -self.segments[0].midpoint
    }

    pub fn theta_sum(&self) -> f64 {
        self.segments.iter().map(|s| s.theta).sum()
    }

    pub fn max_relative_height(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| s.relative_height)
            .fold(0.0, f64::max)
    }
}
