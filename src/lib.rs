#[path = "core/timer.rs"]
pub mod timer;

#[path = "core/step_cycler.rs"]
pub mod step_cycler;

#[path = "core/toggle_set.rs"]
pub mod toggle_set;

#[path = "core/training.rs"]
pub mod training;

#[path = "core/dataset.rs"]
pub mod dataset;

#[path = "core/nav.rs"]
pub mod nav;

#[cfg(feature = "runtime")]
#[path = "core/runtime.rs"]
pub mod runtime;

pub mod content;
pub mod error;

#[cfg(feature = "runtime")]
pub mod config;

#[cfg(feature = "runtime")]
pub mod logging;

#[cfg(feature = "runtime")]
pub mod preview;

pub use error::SiteError;
