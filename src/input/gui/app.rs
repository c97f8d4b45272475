use crate::controllers::playback::{DiscoveryWorker, PlaybackScheduler, PlaybackSettings};
use crate::controllers::ports::render_backend::ReadbackBackend;
use crate::core::discovery::limits::DiscoveryLimits;
use crate::core::discovery::search::ConfigurationSearch;
use crate::core::palettes::catalog::PaletteCatalog;
use crate::input::gui::errors::GuiError;
use crate::input::gui::keys::HostCommand;
use crate::input::gui::settings_sheet::{SettingsSheet, SheetDecision};
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::presenters::software::backend::SoftwareBackend;
use crate::storage::preferences::{JsonPreferenceStore, PreferenceStore, Preferences};
use egui::Context;
use egui_winit::State as EguiWinitState;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

type Scheduler = PlaybackScheduler<SoftwareBackend, DiscoveryWorker>;

#[derive(Debug, Clone)]
pub struct GuiOptions {
    pub preferences_path: PathBuf,
    /// Fixed discovery seed; drawn from the OS when absent.
    pub seed: Option<u64>,
}

struct GuiApp {
    presenter: PixelsPresenter,
    scheduler: Scheduler,
    store: JsonPreferenceStore,
    preferences: Preferences,
    settings: SettingsSheet,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        options: &GuiOptions,
    ) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let presenter = PixelsPresenter::new(window)?;

        let store = JsonPreferenceStore::new(&options.preferences_path);
        let preferences = store.load().unwrap_or_else(|err| {
            warn!(path = %store.path().display(), %err, "ignoring unreadable preferences");
            Preferences::default()
        });

        let palettes = Arc::new(PaletteCatalog::build()?);
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let search = ConfigurationSearch::new(rng, DiscoveryLimits::default(), palettes.len())?;

        let scheduler = PlaybackScheduler::new(
            SoftwareBackend::new(),
            DiscoveryWorker::new(search),
            palettes,
            preferences,
            PlaybackSettings::default(),
            size.width,
            size.height,
        )?;

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            presenter,
            scheduler,
            store,
            preferences,
            settings: SettingsSheet::default(),
            egui_ctx,
            egui_state,
        })
    }

    /// Returns true when the key asks to quit.
    fn handle_command(&mut self, command: HostCommand) -> bool {
        match command {
            HostCommand::SwitchFractal => self.scheduler.switch_fractal(),
            HostCommand::SwitchColorMap => self.scheduler.switch_color_map(),
            HostCommand::ToggleSettings => self.settings.toggle(self.preferences),
            HostCommand::Quit => return true,
        }

        false
    }

    fn redraw(&mut self, window: &Window) -> Result<(), GuiError> {
        if self.scheduler.redraw_if_dirty()? {
            self.presenter
                .show_frame(self.scheduler.backend().pixel_buffer());
        }

        let raw_input = self.egui_state.take_egui_input(window);
        let mut decision = None;
        let mut egui_output = self.egui_ctx.run(raw_input, |ctx| {
            decision = self.settings.show(ctx);
        });

        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(window, platform_output);

        if let Some(decision) = decision {
            self.apply_settings(decision)?;
        }

        self.presenter.render(egui_output, &self.egui_ctx)?;
        Ok(())
    }

    fn apply_settings(&mut self, decision: SheetDecision) -> Result<(), GuiError> {
        match decision {
            SheetDecision::Cancel => debug!("settings dismissed"),
            SheetDecision::Accept(preferences) => {
                self.store.save(&preferences)?;
                self.scheduler
                    .set_anti_aliasing(preferences.anti_aliasing)?;
                self.preferences = preferences;
                info!(path = %self.store.path().display(), "preferences saved");
            }
        }

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.presenter.resize(width, height)?;

        if width > 0 && height > 0 {
            self.scheduler.resize(width, height);
        }

        Ok(())
    }
}

/// Opens the explorer window and blocks until it is closed.
pub fn run_gui(options: GuiOptions) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractals")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = GuiApp::new(window, &event_loop, &options)?;
    let settings = PlaybackSettings::default();
    let wake_interval = settings.pan_interval.min(settings.zoom_interval);
    let mut redraw_pending = true;
    let mut failure: Option<GuiError> = None;

    app.scheduler.activate(Instant::now());

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            let response = app.egui_state.on_window_event(window, event);
            if response.repaint {
                redraw_pending = true;
            }

            let result = match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                    Ok(())
                }
                WindowEvent::RedrawRequested => {
                    redraw_pending = false;
                    app.redraw(window)
                }
                WindowEvent::Resized(size) => {
                    redraw_pending = true;
                    app.resize(size.width, size.height)
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                    let size = window.inner_size();
                    redraw_pending = true;
                    app.resize(size.width, size.height)
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                } if !response.consumed => {
                    if let Some(command) = HostCommand::for_key(*code) {
                        if app.handle_command(command) {
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    Ok(())
                }
                _ => Ok(()),
            };

            if let Err(err) = result {
                error!(%err, "stopping explorer");
                failure = Some(err);
                elwt.exit();
            }
        }
        Event::AboutToWait => {
            let now = Instant::now();
            app.scheduler.update(now);

            if redraw_pending || app.scheduler.is_dirty() {
                window.request_redraw();
            }

            elwt.set_control_flow(ControlFlow::WaitUntil(now + wake_interval));
        }
        _ => {}
    })?;

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
