//! Stateful generator for interactive callers.
//!
//! Holds the current settings and the last generated maps so a UI can
//! re-run only the stages affected by an edit: a noise change regenerates
//! everything, a region edit only recolors.

use glam::Vec2;
use rand::Rng;
use relief_image::Image;

use crate::{
    GenerationOptions, NoiseError, NoiseSettings, RegionsSettings, TerrainMaps,
    compute_color_map, compute_height_map, compute_normal_map, generate_random_offsets,
};

/// Owns generation parameters and the most recent [`TerrainMaps`].
#[derive(Clone, Debug)]
pub struct FractalNoiseGenerator {
    width: usize,
    height: usize,
    settings: NoiseSettings,
    regions: RegionsSettings,
    options: GenerationOptions,
    maps: TerrainMaps,
}

impl FractalNoiseGenerator {
    /// Create a generator with default settings and blank maps. Call
    /// [`update`](Self::update) to fill them.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::EmptyMap`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, NoiseError> {
        if width == 0 || height == 0 {
            return Err(NoiseError::EmptyMap(width, height));
        }
        Ok(Self {
            width,
            height,
            settings: NoiseSettings::default(),
            regions: RegionsSettings::default(),
            options: GenerationOptions::default(),
            maps: TerrainMaps::empty(width, height),
        })
    }

    /// Regenerate all three maps with fresh octave offsets.
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        self.update_height_map(rng);
    }

    /// Redraw offsets and recompute the height map, then re-derive the
    /// normal and color maps from it.
    pub fn update_height_map<R: Rng>(&mut self, rng: &mut R) {
        self.maps.random_offsets = generate_random_offsets(&self.settings, rng);
        self.maps.height = compute_height_map(
            self.width,
            self.height,
            &self.settings,
            &self.maps.random_offsets,
            self.options.curve.as_ref(),
        );
        self.update_normal_map();
        self.update_color_map();
    }

    /// Recompute the normal map from the current height map.
    pub fn update_normal_map(&mut self) {
        self.maps.normal = compute_normal_map(&self.maps.height);
    }

    /// Recolor the current height map with the current regions.
    pub fn update_color_map(&mut self) {
        self.maps.color = compute_color_map(
            &self.maps.height,
            &self.regions,
            self.options.encode_height_in_alpha,
        );
    }

    /// Restore default settings and regions, then regenerate.
    pub fn reset_settings<R: Rng>(&mut self, rng: &mut R) {
        self.settings = NoiseSettings::default();
        self.regions = RegionsSettings::default();
        self.update(rng);
    }

    /// Commit new noise settings. Maps are not regenerated.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidSettings`] and keeps the old settings.
    pub fn set_settings(&mut self, settings: NoiseSettings) -> Result<(), NoiseError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Commit new regions and recolor.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidRegions`] and keeps the old regions.
    pub fn set_regions(&mut self, regions: RegionsSettings) -> Result<(), NoiseError> {
        regions.validate()?;
        self.regions = regions;
        self.update_color_map();
        Ok(())
    }

    /// Commit new generation options. Maps are not regenerated.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::CurveDomain`] and keeps the old options.
    pub fn set_options(&mut self, options: GenerationOptions) -> Result<(), NoiseError> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn settings(&self) -> &NoiseSettings {
        &self.settings
    }

    pub fn regions(&self) -> &RegionsSettings {
        &self.regions
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn height_map(&self) -> &Image<f32> {
        &self.maps.height
    }

    pub fn normal_map(&self) -> &Image<u8> {
        &self.maps.normal
    }

    pub fn color_map(&self) -> &Image<u8> {
        &self.maps.color
    }

    pub fn random_offsets(&self) -> &[Vec2] {
        &self.maps.random_offsets
    }

    pub fn maps(&self) -> &TerrainMaps {
        &self.maps
    }

    /// Take the generated maps, leaving blank ones behind.
    pub fn into_maps(self) -> TerrainMaps {
        self.maps
    }
}
