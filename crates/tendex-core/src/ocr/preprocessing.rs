//! Image preprocessing for OCR.

use image::{DynamicImage, GrayImage, Luma};

/// Image preprocessor tuned for scanned tender pages.
pub struct ImagePreprocessor {
    /// Contrast boost factor around the image mean.
    contrast_factor: f32,
    /// Fixed binarization threshold.
    threshold: u8,
}

impl ImagePreprocessor {
    /// Create a preprocessor with default settings (contrast x1.5,
    /// threshold 128).
    pub fn new() -> Self {
        Self {
            contrast_factor: 1.5,
            threshold: 128,
        }
    }

    /// Set the contrast factor.
    pub fn with_contrast(mut self, factor: f32) -> Self {
        self.contrast_factor = factor;
        self
    }

    /// Set the binarization threshold.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Full preprocessing chain: grayscale, contrast boost, sharpen,
    /// fixed-threshold binarization.
    pub fn prepare(&self, image: &DynamicImage) -> GrayImage {
        let gray = image.to_luma8();
        let contrasted = self.boost_contrast(&gray);
        let sharpened = self.sharpen(&contrasted);
        self.binarize(&sharpened)
    }

    /// Scale pixel values away from the image mean.
    fn boost_contrast(&self, image: &GrayImage) -> GrayImage {
        let (width, height) = image.dimensions();
        let pixel_count = (width as u64 * height as u64).max(1);

        let sum: u64 = image.pixels().map(|p| p[0] as u64).sum();
        let mean = sum as f32 / pixel_count as f32;

        let mut result = GrayImage::new(width, height);
        for (x, y, pixel) in image.enumerate_pixels() {
            let value = mean + self.contrast_factor * (pixel[0] as f32 - mean);
            result.put_pixel(x, y, Luma([value.clamp(0.0, 255.0) as u8]));
        }
        result
    }

    /// 3x3 sharpen kernel.
    fn sharpen(&self, image: &GrayImage) -> GrayImage {
        image::imageops::filter3x3(
            image,
            &[0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0],
        )
    }

    /// Fixed-threshold binarization.
    fn binarize(&self, image: &GrayImage) -> GrayImage {
        let (width, height) = image.dimensions();
        let mut result = GrayImage::new(width, height);

        for (x, y, pixel) in image.enumerate_pixels() {
            let value = if pixel[0] > self.threshold { 255 } else { 0 };
            result.put_pixel(x, y, Luma([value]));
        }
        result
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageBuffer;

    #[test]
    fn test_prepare_binarizes() {
        let gray: GrayImage = ImageBuffer::from_fn(16, 16, |x, _| {
            if x < 8 { Luma([40u8]) } else { Luma([220u8]) }
        });
        let prepared = ImagePreprocessor::new().prepare(&DynamicImage::ImageLuma8(gray));

        for pixel in prepared.pixels() {
            assert!(pixel[0] == 0 || pixel[0] == 255);
        }
    }

    #[test]
    fn test_contrast_pushes_extremes() {
        let gray: GrayImage = ImageBuffer::from_fn(4, 4, |x, _| {
            if x < 2 { Luma([100u8]) } else { Luma([160u8]) }
        });
        let preprocessor = ImagePreprocessor::new();
        let boosted = preprocessor.boost_contrast(&gray);

        // Mean is 130; x1.5 pushes 100 -> 85 and 160 -> 175.
        assert_eq!(boosted.get_pixel(0, 0)[0], 85);
        assert_eq!(boosted.get_pixel(3, 0)[0], 175);
    }

    #[test]
    fn test_uniform_image_unchanged_by_contrast() {
        let gray: GrayImage = ImageBuffer::from_pixel(8, 8, Luma([128u8]));
        let boosted = ImagePreprocessor::new().boost_contrast(&gray);
        assert!(boosted.pixels().all(|p| p[0] == 128));
    }
}
