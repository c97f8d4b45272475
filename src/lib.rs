pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod logging;
pub mod presenters;
pub mod storage;

pub use crate::controllers::playback::{DiscoveryWorker, PlaybackScheduler, PlaybackSettings};
pub use crate::controllers::snapshot::{SnapshotController, SnapshotError};
pub use crate::core::data::configuration::Configuration;
pub use crate::core::data::region::Region;
pub use crate::core::discovery::limits::DiscoveryLimits;
pub use crate::core::discovery::search::ConfigurationSearch;
pub use crate::core::palettes::catalog::PaletteCatalog;
#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiOptions, run_gui};
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::software::backend::SoftwareBackend;
pub use crate::storage::preferences::Preferences;
