use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_HUE_HI, DEFAULT_HUE_LO, DEFAULT_KERNEL_SIZE, DEFAULT_MAX_AREA, DEFAULT_MIN_AREA,
    DEFAULT_SAT_HI, DEFAULT_SAT_LO, DEFAULT_VAL_HI, DEFAULT_VAL_LO,
};
use crate::error::{CellscanError, Result};

/// The nine scalar knobs of the detection pipeline.
///
/// Supplied fresh on every `detect` invocation; nothing is persisted across
/// invocations. Low/high ordering is a convention, not an invariant:
/// inverted bounds simply produce an empty mask, and min_area > max_area
/// retains nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectParams {
    /// Lower HSV hue bound (u8 hue scale, 0..=179 meaningful).
    #[serde(default = "default_hue_lo")]
    pub hue_lo: u8,
    /// Upper HSV hue bound.
    #[serde(default = "default_hue_hi")]
    pub hue_hi: u8,
    /// Lower HSV saturation bound.
    #[serde(default = "default_sat_lo")]
    pub sat_lo: u8,
    /// Upper HSV saturation bound.
    #[serde(default = "default_sat_hi")]
    pub sat_hi: u8,
    /// Lower HSV value bound.
    #[serde(default = "default_val_lo")]
    pub val_lo: u8,
    /// Upper HSV value bound.
    #[serde(default = "default_val_hi")]
    pub val_hi: u8,
    /// Structuring-element diameter; even values are coerced to odd,
    /// values below 1 are clamped to 1.
    #[serde(default = "default_kernel_size")]
    pub kernel_size: i32,
    /// Minimum retained contour area, in square pixels (inclusive).
    #[serde(default = "default_min_area")]
    pub min_area: f64,
    /// Maximum retained contour area, in square pixels (inclusive).
    #[serde(default = "default_max_area")]
    pub max_area: f64,
}

fn default_hue_lo() -> u8 {
    DEFAULT_HUE_LO
}
fn default_hue_hi() -> u8 {
    DEFAULT_HUE_HI
}
fn default_sat_lo() -> u8 {
    DEFAULT_SAT_LO
}
fn default_sat_hi() -> u8 {
    DEFAULT_SAT_HI
}
fn default_val_lo() -> u8 {
    DEFAULT_VAL_LO
}
fn default_val_hi() -> u8 {
    DEFAULT_VAL_HI
}
fn default_kernel_size() -> i32 {
    DEFAULT_KERNEL_SIZE
}
fn default_min_area() -> f64 {
    DEFAULT_MIN_AREA
}
fn default_max_area() -> f64 {
    DEFAULT_MAX_AREA
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            hue_lo: DEFAULT_HUE_LO,
            hue_hi: DEFAULT_HUE_HI,
            sat_lo: DEFAULT_SAT_LO,
            sat_hi: DEFAULT_SAT_HI,
            val_lo: DEFAULT_VAL_LO,
            val_hi: DEFAULT_VAL_HI,
            kernel_size: DEFAULT_KERNEL_SIZE,
            min_area: DEFAULT_MIN_AREA,
            max_area: DEFAULT_MAX_AREA,
        }
    }
}

/// The nine parameter fields as the untyped text a UI owns.
///
/// `parse` validates them before the pipeline ever sees them; the first
/// field that fails to parse yields `InvalidParameter`.
#[derive(Clone, Debug)]
pub struct RawParams {
    pub hue_lo: String,
    pub hue_hi: String,
    pub sat_lo: String,
    pub sat_hi: String,
    pub val_lo: String,
    pub val_hi: String,
    pub kernel_size: String,
    pub min_area: String,
    pub max_area: String,
}

impl Default for RawParams {
    fn default() -> Self {
        Self::from_params(&DetectParams::default())
    }
}

impl RawParams {
    pub fn from_params(params: &DetectParams) -> Self {
        Self {
            hue_lo: params.hue_lo.to_string(),
            hue_hi: params.hue_hi.to_string(),
            sat_lo: params.sat_lo.to_string(),
            sat_hi: params.sat_hi.to_string(),
            val_lo: params.val_lo.to_string(),
            val_hi: params.val_hi.to_string(),
            kernel_size: params.kernel_size.to_string(),
            min_area: params.min_area.to_string(),
            max_area: params.max_area.to_string(),
        }
    }

    pub fn parse(&self) -> Result<DetectParams> {
        Ok(DetectParams {
            hue_lo: parse_field("hue_lo", &self.hue_lo)?,
            hue_hi: parse_field("hue_hi", &self.hue_hi)?,
            sat_lo: parse_field("sat_lo", &self.sat_lo)?,
            sat_hi: parse_field("sat_hi", &self.sat_hi)?,
            val_lo: parse_field("val_lo", &self.val_lo)?,
            val_hi: parse_field("val_hi", &self.val_hi)?,
            kernel_size: parse_field("kernel_size", &self.kernel_size)?,
            min_area: parse_field("min_area", &self.min_area)?,
            max_area: parse_field("max_area", &self.max_area)?,
        })
    }
}

fn parse_field<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CellscanError::InvalidParameter {
            name,
            value: value.to_string(),
        })
}
