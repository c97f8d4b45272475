use crate::controllers::data::draw_frame::DrawFrame;
use crate::controllers::playback::errors::PlaybackError;
use crate::controllers::playback::settings::PlaybackSettings;
use crate::controllers::playback::status::{PlaybackState, PlaybackStatus, PlaybackWarning};
use crate::controllers::playback::timer::RepeatingTimer;
use crate::controllers::ports::discovery::{DiscoveryOutcome, DiscoveryPort};
use crate::controllers::ports::render_backend::{RenderBackend, prepare_programs};
use crate::core::data::configuration::Configuration;
use crate::core::discovery::request::DiscoveryRequest;
use crate::core::palettes::catalog::PaletteCatalog;
use crate::storage::preferences::Preferences;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchState {
    Idle,
    Searching,
    Dwelling {
        candidate: Configuration,
        apply_at: Instant,
    },
}

/// Owns the current configuration and decides when frames are produced.
///
/// All mutation happens on the caller's thread. Discovery runs behind the
/// [`DiscoveryPort`] and only hands back finished candidates, which wait out
/// the dwell before replacing the view.
pub struct PlaybackScheduler<B: RenderBackend, D: DiscoveryPort> {
    backend: B,
    discovery: D,
    palettes: Arc<PaletteCatalog>,
    settings: PlaybackSettings,
    sample_count: u32,
    state: PlaybackState,
    search: SearchState,
    current: Configuration,
    dirty: bool,
    pan_timer: RepeatingTimer,
    zoom_timer: RepeatingTimer,
    zoom_halted: bool,
    drawable_width: u32,
    drawable_height: u32,
    last_update: Option<Instant>,
    status: PlaybackStatus,
}

impl<B: RenderBackend, D: DiscoveryPort> PlaybackScheduler<B, D> {
    /// Prepares both shading programs on `backend`. Any failure there is
    /// returned and no scheduler is built.
    pub fn new(
        mut backend: B,
        discovery: D,
        palettes: Arc<PaletteCatalog>,
        preferences: Preferences,
        settings: PlaybackSettings,
        drawable_width: u32,
        drawable_height: u32,
    ) -> Result<Self, PlaybackError> {
        let sample_count = preferences.sample_count();

        prepare_programs(&mut backend, sample_count)?;
        backend.resize(drawable_width, drawable_height);

        debug!(sample_count, drawable_width, drawable_height, "render programs prepared");

        Ok(Self {
            backend,
            discovery,
            palettes,
            settings,
            sample_count,
            state: PlaybackState::Idle,
            search: SearchState::Idle,
            current: Configuration::default(),
            dirty: false,
            pan_timer: RepeatingTimer::new(settings.pan_interval, settings.max_ticks_per_update),
            zoom_timer: RepeatingTimer::new(settings.zoom_interval, settings.max_ticks_per_update),
            zoom_halted: false,
            drawable_width,
            drawable_height,
            last_update: None,
            status: PlaybackStatus::default(),
        })
    }

    /// Installs the default view, starts the animation clocks and kicks off
    /// the first discovery run. Calling it again while animating does
    /// nothing.
    pub fn activate(&mut self, now: Instant) {
        if self.state == PlaybackState::Animating {
            return;
        }

        self.state = PlaybackState::Animating;
        self.last_update = Some(now);
        self.pan_timer.reset();
        self.install(Configuration::default());
        self.request_discovery();

        info!(
            width = self.drawable_width,
            height = self.drawable_height,
            "playback started"
        );
    }

    /// Advances the pan and zoom clocks to `now`, collects any finished
    /// discovery run and applies a candidate whose dwell has elapsed.
    pub fn update(&mut self, now: Instant) {
        if self.state == PlaybackState::Idle {
            return;
        }

        let elapsed = self
            .last_update
            .map_or_else(Default::default, |last| now.saturating_duration_since(last));
        self.last_update = Some(now);

        let pan_ticks = self.pan_timer.advance(elapsed);
        self.run_pan_ticks(pan_ticks);

        if !self.zoom_halted {
            let ticks = self.zoom_timer.advance(elapsed);
            self.run_zoom_ticks(ticks);
        }

        if let Some(outcome) = self.discovery.poll() {
            self.receive_discovery(outcome, now);
        }

        if let SearchState::Dwelling { mut candidate, apply_at } = self.search {
            if now >= apply_at {
                // the palette on screen may have been switched while dwelling
                if candidate.palette_index == self.current.palette_index {
                    candidate.palette_index = self.palettes.next_index(candidate.palette_index);
                }
                self.install(candidate);
                self.status.configurations_applied += 1;
                info!(
                    kind = candidate.fractal_kind.display_name(),
                    palette = candidate.palette_index,
                    max_iterations = candidate.max_iterations,
                    "applied discovered configuration"
                );
                self.request_discovery();
            }
        }
    }

    /// Hands a frame to the backend if anything changed since the last one.
    /// Returns whether a frame was drawn.
    pub fn redraw_if_dirty(&mut self) -> Result<bool, PlaybackError> {
        if self.state == PlaybackState::Idle || !self.dirty {
            self.status.redraws_skipped += 1;
            return Ok(false);
        }

        let index = self.current.palette_index;
        let palette = self
            .palettes
            .get(index)
            .ok_or(PlaybackError::UnknownPalette { index })?;

        let frame = DrawFrame::new(&self.current, palette, self.sample_count);
        self.backend.draw(&frame)?;

        self.dirty = false;
        self.status.frames_drawn += 1;

        Ok(true)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.drawable_width = width;
        self.drawable_height = height;
        self.backend.resize(width, height);
        self.current.region.adjust_aspect_ratio(width, height);
        self.dirty = true;

        debug!(width, height, "drawable resized");
    }

    pub fn switch_fractal(&mut self) {
        self.current.fractal_kind = self.current.fractal_kind.toggled();
        self.dirty = true;

        info!(kind = self.current.fractal_kind.display_name(), "switched fractal");
    }

    pub fn switch_color_map(&mut self) {
        self.current.palette_index = self.palettes.next_index(self.current.palette_index);
        self.dirty = true;

        info!(palette = self.current.palette_index, "switched colour map");
    }

    /// Re-prepares the programs for the new sample count.
    pub fn set_anti_aliasing(&mut self, enabled: bool) -> Result<(), PlaybackError> {
        let sample_count = Preferences {
            anti_aliasing: enabled,
        }
        .sample_count();

        if sample_count == self.sample_count {
            return Ok(());
        }

        prepare_programs(&mut self.backend, sample_count)?;
        self.sample_count = sample_count;
        self.dirty = true;

        info!(enabled, "anti-aliasing changed");
        Ok(())
    }

    #[must_use]
    pub fn current(&self) -> &Configuration {
        &self.current
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    #[must_use]
    pub fn status(&self) -> &PlaybackStatus {
        &self.status
    }

    #[must_use]
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn discovery(&self) -> &D {
        &self.discovery
    }

    fn install(&mut self, mut configuration: Configuration) {
        configuration
            .region
            .adjust_aspect_ratio(self.drawable_width, self.drawable_height);

        self.current = configuration;
        self.dirty = true;
        self.zoom_halted = false;
        self.status.zoom_halted = false;
        self.zoom_timer.reset();
    }

    fn run_pan_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.current.region.pan(self.settings.pan_percent);
            self.dirty = true;
        }
    }

    fn run_zoom_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            match self
                .current
                .region
                .try_zoom(self.settings.zoom_percent, self.settings.min_region_extent)
            {
                Ok(()) => self.dirty = true,
                Err(err) => {
                    warn!(%err, "zoom halted until the next configuration");
                    self.zoom_halted = true;
                    self.status.zoom_halted = true;
                    self.status.last_warning = Some(PlaybackWarning::RegionCollapsed);
                    return;
                }
            }
        }
    }

    fn receive_discovery(&mut self, outcome: DiscoveryOutcome, now: Instant) {
        let candidate = match outcome {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(%err, "falling back to the default configuration");
                self.status.last_warning = Some(PlaybackWarning::DiscoveryExhausted);
                Configuration::default()
            }
        };

        debug!(dwell_ms = self.settings.dwell.as_millis() as u64, "candidate dwelling");

        self.search = SearchState::Dwelling {
            candidate,
            apply_at: now + self.settings.dwell,
        };
    }

    fn request_discovery(&mut self) {
        self.discovery.request(DiscoveryRequest {
            current_palette: self.current.palette_index,
            drawable_width: self.drawable_width,
            drawable_height: self.drawable_height,
        });
        self.search = SearchState::Searching;
    }
}
