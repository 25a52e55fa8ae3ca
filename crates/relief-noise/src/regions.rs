//! Height bands ("regions") used to color the terrain by elevation.

use serde::{Deserialize, Serialize};

use crate::NoiseError;

/// Heights above this value always resolve to the last region, so rounding at
/// the very top of the normalized range cannot fall through the search.
pub const TOP_OF_RANGE: f32 = 0.999;

/// One height band: every height in `(previous.height, height]` takes `color`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Display name (e.g. "sand").
    pub name: String,
    /// Inclusive upper height threshold in `[0, 1]`.
    pub height: f32,
    /// Normalized RGBA color, each channel in `[0, 1]`.
    pub color: [f32; 4],
}

impl Region {
    pub fn new(name: impl Into<String>, height: f32, color: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            height,
            color,
        }
    }

    /// 8-bit form of [`Region::color`], derived on demand.
    pub fn color_u8(&self) -> [u8; 4] {
        self.color.map(|c| (255.0 * c.clamp(0.0, 1.0)) as u8)
    }
}

/// Ordered height bands partitioning `[0, 1]`.
///
/// Thresholds are ascending and the last one equals `1.0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionsSettings {
    regions: Vec<Region>,
}

impl Default for RegionsSettings {
    fn default() -> Self {
        Self {
            regions: vec![
                Region::new("deep water", 0.3, [0.11, 0.25, 0.55, 1.0]),
                Region::new("shallow water", 0.4, [0.2, 0.42, 0.75, 1.0]),
                Region::new("sand", 0.45, [0.84, 0.8, 0.56, 1.0]),
                Region::new("grass", 0.55, [0.34, 0.6, 0.2, 1.0]),
                Region::new("forest", 0.6, [0.22, 0.44, 0.15, 1.0]),
                Region::new("rock", 0.7, [0.45, 0.38, 0.3, 1.0]),
                Region::new("cliff", 0.85, [0.34, 0.3, 0.27, 1.0]),
                Region::new("snow", 1.0, [0.95, 0.95, 0.97, 1.0]),
            ],
        }
    }
}

impl RegionsSettings {
    /// Build validated regions.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidRegions`] if the thresholds do not
    /// partition `[0, 1]` (see [`RegionsSettings::validate`]).
    pub fn new(regions: Vec<Region>) -> Result<Self, NoiseError> {
        let settings = Self { regions };
        settings.validate()?;
        Ok(settings)
    }

    /// Check that thresholds are in `[0, 1]`, ascending, and end at `1.0`.
    pub fn validate(&self) -> Result<(), NoiseError> {
        let Some(last) = self.regions.last() else {
            return Err(NoiseError::InvalidRegions("no regions defined".into()));
        };
        for (i, region) in self.regions.iter().enumerate() {
            if !(0.0..=1.0).contains(&region.height) {
                return Err(NoiseError::InvalidRegions(format!(
                    "threshold {i} ({}) outside [0, 1]",
                    region.height
                )));
            }
            if i > 0 && region.height < self.regions[i - 1].height {
                return Err(NoiseError::InvalidRegions(format!(
                    "threshold {i} ({}) is below threshold {} ({})",
                    region.height,
                    i - 1,
                    self.regions[i - 1].height
                )));
            }
        }
        if last.height != 1.0 {
            return Err(NoiseError::InvalidRegions(format!(
                "last threshold is {}, expected 1.0",
                last.height
            )));
        }
        Ok(())
    }

    /// Index of the region a normalized height falls into.
    ///
    /// Picks the first region whose threshold is `>= height`; heights above
    /// [`TOP_OF_RANGE`] go to the last region.
    pub fn region_index(&self, height: f32) -> usize {
        let last = self.regions.len() - 1;
        if height > TOP_OF_RANGE {
            return last;
        }
        self.regions
            .partition_point(|region| region.height < height)
            .min(last)
    }

    /// Move threshold `index` to `value`, clamped between its neighbours so
    /// the bands stay ordered. The last threshold stays pinned at `1.0`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_threshold(&mut self, index: usize, value: f32) {
        assert!(index < self.regions.len(), "region {index} does not exist");
        if index == self.regions.len() - 1 {
            return;
        }
        let lower = if index == 0 {
            0.0
        } else {
            self.regions[index - 1].height
        };
        let upper = self.regions[index + 1].height;
        self.regions[index].height = value.clamp(lower, upper);
    }

    /// Replace the color of region `index`, clamping channels to `[0, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_color(&mut self, index: usize, color: [f32; 4]) {
        self.regions[index].color = color.map(|c| c.clamp(0.0, 1.0));
    }

    /// 8-bit colors for every region, recomputed from the float colors.
    pub fn uint8_colors(&self) -> Vec<[u8; 4]> {
        self.regions.iter().map(Region::color_u8).collect()
    }

    /// Upper thresholds in order.
    pub fn height_ranges(&self) -> impl Iterator<Item = f32> + '_ {
        self.regions.iter().map(|region| region.height)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
