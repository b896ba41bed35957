use crate::error::{Result, RunwareError};
use std::fmt;
use std::str::FromStr;

/// Width and height presets supported by the provider.
///
/// Each preset resolution contributes one width tag and one height tag. Pixel
/// values are only produced through [`Dimension::pixels`], so an arbitrary
/// integer can never reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    SdWidth,
    SdHeight,
    SdPortrait3x4Width,
    SdPortrait3x4Height,
    SdPortrait9x16Width,
    SdPortrait9x16Height,
    SdLandscape4x3Width,
    SdLandscape4x3Height,
    SdLandscape16x9Width,
    SdLandscape16x9Height,
    HdWidth,
    HdHeight,
    HdPortrait3x4Width,
    HdPortrait3x4Height,
    HdPortrait9x16Width,
    HdPortrait9x16Height,
    HdLandscape4x3Width,
    HdLandscape4x3Height,
    HdLandscape16x9Width,
    HdLandscape16x9Height,
}

static PRESETS: [(Dimension, &str, u16); 20] = [
    (Dimension::SdWidth, "sd_width", 512),
    (Dimension::SdHeight, "sd_height", 512),
    (Dimension::SdPortrait3x4Width, "sd_portrait_3_4_width", 768),
    (Dimension::SdPortrait3x4Height, "sd_portrait_3_4_height", 1024),
    (Dimension::SdPortrait9x16Width, "sd_portrait_9_16_width", 640),
    (Dimension::SdPortrait9x16Height, "sd_portrait_9_16_height", 1152),
    (Dimension::SdLandscape4x3Width, "sd_landscape_4_3_width", 1024),
    (Dimension::SdLandscape4x3Height, "sd_landscape_4_3_height", 768),
    (Dimension::SdLandscape16x9Width, "sd_landscape_16_9_width", 1152),
    (Dimension::SdLandscape16x9Height, "sd_landscape_16_9_height", 640),
    (Dimension::HdWidth, "hd_width", 1024),
    (Dimension::HdHeight, "hd_height", 1024),
    (Dimension::HdPortrait3x4Width, "hd_portrait_3_4_width", 1152),
    (Dimension::HdPortrait3x4Height, "hd_portrait_3_4_height", 1536),
    (Dimension::HdPortrait9x16Width, "hd_portrait_9_16_width", 960),
    (Dimension::HdPortrait9x16Height, "hd_portrait_9_16_height", 1728),
    (Dimension::HdLandscape4x3Width, "hd_landscape_4_3_width", 1536),
    (Dimension::HdLandscape4x3Height, "hd_landscape_4_3_height", 1152),
    (Dimension::HdLandscape16x9Width, "hd_landscape_16_9_width", 1728),
    (Dimension::HdLandscape16x9Height, "hd_landscape_16_9_height", 960),
];

impl Dimension {
    pub fn all() -> impl Iterator<Item = Dimension> {
        PRESETS.iter().map(|(dimension, _, _)| *dimension)
    }

    pub fn pixels(&self) -> u16 {
        self.entry().2
    }

    pub fn as_str(&self) -> &'static str {
        self.entry().1
    }

    /// Resolve a preset tag straight to its pixel value.
    pub fn lookup(tag: &str) -> Result<u16> {
        tag.parse::<Dimension>().map(|dimension| dimension.pixels())
    }

    fn entry(&self) -> &'static (Dimension, &'static str, u16) {
        // PRESETS is declared in variant order
        &PRESETS[*self as usize]
    }
}

impl FromStr for Dimension {
    type Err = RunwareError;

    fn from_str(tag: &str) -> Result<Self> {
        PRESETS
            .iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(tag.trim()))
            .map(|(dimension, _, _)| *dimension)
            .ok_or_else(|| {
                RunwareError::Config(format!("unsupported resolution preset: {:?}", tag))
            })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_variant_order() {
        for (index, dimension) in Dimension::all().enumerate() {
            assert_eq!(dimension as usize, index);
            assert_eq!(dimension.as_str().parse::<Dimension>().unwrap(), dimension);
        }
    }

    #[test]
    fn test_landscape_pixels() {
        assert_eq!(Dimension::SdLandscape16x9Width.pixels(), 1152);
        assert_eq!(Dimension::SdLandscape16x9Height.pixels(), 640);
        assert_eq!(Dimension::HdPortrait9x16Height.pixels(), 1728);
        assert_eq!(Dimension::lookup("hd_width").unwrap(), 1024);
    }

    #[test]
    fn test_unknown_tag_is_config_error() {
        let err = Dimension::lookup("ultra_wide_width").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("ultra_wide_width"));
    }
}
