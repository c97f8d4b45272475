use crate::controllers::data::draw_frame::DrawFrame;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::ports::render_backend::{ReadbackBackend, prepare_programs};
use crate::controllers::snapshot::errors::SnapshotError;
use crate::core::data::configuration::Configuration;
use crate::core::discovery::errors::DiscoveryError;
use crate::core::discovery::request::DiscoveryRequest;
use crate::core::discovery::search::ConfigurationSearch;
use crate::core::palettes::catalog::PaletteCatalog;
use crate::storage::preferences::Preferences;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Discovers configurations and writes one still image per configuration.
pub struct SnapshotController<R: Rng, B: ReadbackBackend, P: FilePresenterPort> {
    search: ConfigurationSearch<R>,
    backend: B,
    presenter: P,
    palettes: Arc<PaletteCatalog>,
    sample_count: u32,
    width: u32,
    height: u32,
}

impl<R: Rng, B: ReadbackBackend, P: FilePresenterPort> SnapshotController<R, B, P> {
    pub fn new(
        search: ConfigurationSearch<R>,
        mut backend: B,
        presenter: P,
        palettes: Arc<PaletteCatalog>,
        preferences: Preferences,
        width: u32,
        height: u32,
    ) -> Result<Self, SnapshotError> {
        let sample_count = preferences.sample_count();

        prepare_programs(&mut backend, sample_count)?;
        backend.resize(width, height);

        Ok(Self {
            search,
            backend,
            presenter,
            palettes,
            sample_count,
            width,
            height,
        })
    }

    /// Renders `configuration` as-is and writes it to `filepath`.
    pub fn render(
        &mut self,
        configuration: &Configuration,
        filepath: impl AsRef<Path>,
    ) -> Result<(), SnapshotError> {
        let index = configuration.palette_index;
        let palette = self
            .palettes
            .get(index)
            .ok_or(SnapshotError::UnknownPalette { index })?;

        let start = Instant::now();
        self.backend
            .draw(&DrawFrame::new(configuration, palette, self.sample_count))?;
        let duration = start.elapsed();

        self.presenter
            .present(self.backend.pixel_buffer(), filepath.as_ref())?;

        info!(
            path = %filepath.as_ref().display(),
            kind = configuration.fractal_kind.display_name(),
            render_ms = duration.as_millis() as u64,
            "snapshot written"
        );

        Ok(())
    }

    /// Writes `count` discovered views to `output_dir` as
    /// `snapshot-NN.ppm`, each with a different palette from the one before.
    pub fn run(
        &mut self,
        count: usize,
        output_dir: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>, SnapshotError> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir)?;

        let mut current_palette = Configuration::default().palette_index;
        let mut written = Vec::with_capacity(count);

        for n in 0..count {
            let configuration = self.next_configuration(current_palette)?;
            let path = output_dir.join(format!("snapshot-{:02}.ppm", n));

            self.render(&configuration, &path)?;

            current_palette = configuration.palette_index;
            written.push(path);
        }

        Ok(written)
    }

    fn next_configuration(&mut self, current_palette: usize) -> Result<Configuration, SnapshotError> {
        let request = DiscoveryRequest {
            current_palette,
            drawable_width: self.width,
            drawable_height: self.height,
        };

        match self.search.discover(&request) {
            Ok(configuration) => Ok(configuration),
            Err(DiscoveryError::Exhausted { attempts }) => {
                warn!(attempts, "discovery exhausted, using the default view");
                let mut configuration = Configuration::default();
                configuration
                    .region
                    .adjust_aspect_ratio(self.width, self.height);
                Ok(configuration)
            }
            Err(err) => Err(SnapshotError::Discovery(err)),
        }
    }
}
