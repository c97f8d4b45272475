use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    pub pan_interval: Duration,
    pub zoom_interval: Duration,
    /// Percent of the region's extent moved per pan tick.
    pub pan_percent: f32,
    /// Percent of the region's extent removed per zoom tick.
    pub zoom_percent: f32,
    /// How long a discovered configuration waits before replacing the view.
    pub dwell: Duration,
    pub min_region_extent: f32,
    pub max_ticks_per_update: u32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            pan_interval: Duration::from_millis(50),
            zoom_interval: Duration::from_millis(50),
            pan_percent: 0.1,
            zoom_percent: 0.1,
            dwell: Duration::from_secs(5),
            min_region_extent: 1e-5,
            max_ticks_per_update: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PlaybackSettings;

    #[test]
    fn default_settings_are_consistent() {
        let settings = PlaybackSettings::default();

        assert!(!settings.pan_interval.is_zero());
        assert!(!settings.zoom_interval.is_zero());
        assert!(settings.zoom_percent > 0.0 && settings.zoom_percent < 100.0);
        assert!(settings.min_region_extent > 0.0);
        assert!(settings.max_ticks_per_update > 0);
    }
}
