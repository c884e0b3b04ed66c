//! The `fmu-coupling` crate is the in-process bridge that lets a building model
//! running inside a Modelica-style simulation engine drive an external
//! whole-building energy simulation engine through an FMU-style coupling unit.
//!
//! Each [`CouplingInstance`] wraps one building-level simulation; multiple
//! thermal zones of the same building share a single instance. The
//! [`CouplingRegistry`] hands out a stable numeric index per building that the
//! host uses for all subsequent per-step lookups.
//!
//! ## Example
//!
//! ```rust
//! use fmu_coupling::{CouplingRegistry, CouplingSettings, Mode, ModelSource, ZoneRef};
//!
//! let mut registry = CouplingRegistry::with_root(std::env::temp_dir());
//! let index = registry
//!     .allocate(
//!         CouplingSettings {
//!             building_id: "bldg".into(),
//!             model_source: ModelSource::InputFile("/models/bldg.idf".into()),
//!             weather_path: "/weather/site.epw".into(),
//!             dictionary_path: "/engine/data.idd".into(),
//!             library_root: "/library".into(),
//!         },
//!         "Core_ZN",
//!         ZoneRef(0),
//!     )
//!     .unwrap();
//!
//! let instance = registry.get_mut(index).unwrap();
//! instance.set_mode(Mode::Initialization).unwrap();
//! assert_eq!(instance.mode(), Mode::Initialization);
//! ```
#![deny(clippy::all)]

pub mod buffer;
pub mod instance;
pub mod mode;
pub mod paths;
pub mod registry;
pub mod variables;

// Re-exports
pub use buffer::PayloadBuffer;
pub use instance::{CouplingInstance, ModelSource, ZoneRef};
pub use mode::Mode;
pub use registry::{CouplingRegistry, CouplingSettings};
pub use variables::build_variable_names;

/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path handed to [`paths::base_name`] has no separator; relative
    /// paths are rejected by design.
    #[error("Failed to parse file name '{path}'. Expected an absolute path with slash '/'?")]
    MissingPathSeparator { path: String },

    /// The final segment of the path has no extension.
    #[error("Failed to parse file name '{path}'. Expected a file extension such as '.idf'?")]
    MissingFileExtension { path: String },

    /// The derived temporary-directory path exceeds the supported length.
    #[error("Temporary directory '{path}' is longer than the supported {max} bytes")]
    TempDirTooLong { path: String, max: usize },

    /// The requested lifecycle phase cannot follow the current one.
    #[error("Invalid mode transition for building '{building}': {from} -> {to}")]
    InvalidModeTransition {
        building: String,
        from: Mode,
        to: Mode,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
