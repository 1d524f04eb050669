//! Color samples and the scalar metrics derived from them

/// An RGB color with 8-bit channels, typically an average or cluster centroid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSample {
    /// Red channel in [0, 255]
    pub r: u8,
    /// Green channel in [0, 255]
    pub g: u8,
    /// Blue channel in [0, 255]
    pub b: u8,
}

impl ColorSample {
    /// Create a sample from explicit channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a sample from floating-point channels on the 0-255 scale
    ///
    /// Values are clamped into [0, 255] before truncation, so out-of-range
    /// centroids produced by clustering arithmetic stay representable.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 255.0) as u8,
            g: g.clamp(0.0, 255.0) as u8,
            b: b.clamp(0.0, 255.0) as u8,
        }
    }

    /// Relative luminance using ITU-R BT.709 weights on the 0-255 scale
    ///
    /// Channels are not gamma-corrected; pure white maps to 255.0 and pure
    /// black to 0.0.
    pub fn luminance(&self) -> f64 {
        0.0722f64.mul_add(
            f64::from(self.b),
            0.2126f64.mul_add(f64::from(self.r), 0.7152 * f64::from(self.g)),
        )
    }

    /// HSV saturation in [0, 1]
    ///
    /// Zero for any achromatic color (including black), one for fully
    /// saturated primaries.
    pub fn saturation(&self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        if max == 0 {
            return 0.0;
        }
        let min = self.r.min(self.g).min(self.b);
        f64::from(max - min) / f64::from(max)
    }

    /// Sum of the three channel values
    ///
    /// Used as the ranking scalar for dominant-color ordering.
    pub fn channel_sum(&self) -> f64 {
        f64::from(u16::from(self.r) + u16::from(self.g) + u16::from(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::ColorSample;

    #[test]
    fn test_from_channels_clamps_out_of_range_values() {
        let sample = ColorSample::from_channels(-4.0, 128.6, 300.0);
        assert_eq!(sample, ColorSample::new(0, 128, 255));
    }
}
