//! The per-building coupling record.

use std::path::{Path, PathBuf};

use crate::{mode::Mode, Error};

/// Weak reference to an externally owned thermal zone: an index into the
/// caller's zone arena, resolved through the arena rather than a raw address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneRef(pub usize);

/// Where the building model for a coupling unit comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Input-description file (e.g. `.idf`); the external engine compiles the
    /// coupling unit itself.
    InputFile(PathBuf),
    /// Pre-built coupling unit, loaded as-is.
    Precompiled(PathBuf),
}

impl ModelSource {
    /// The selected model-identifier path.
    pub fn path(&self) -> &Path {
        match self {
            ModelSource::InputFile(path) | ModelSource::Precompiled(path) => path,
        }
    }

    pub fn is_precompiled(&self) -> bool {
        matches!(self, ModelSource::Precompiled(_))
    }
}

/// One building-level binding between the simulation model and the external
/// engine. Owned by the [`CouplingRegistry`](crate::CouplingRegistry); holds
/// weak references to zones owned elsewhere.
#[derive(Debug)]
pub struct CouplingInstance {
    building_id: String,
    model_source: ModelSource,
    weather_path: PathBuf,
    dictionary_path: PathBuf,
    library_root: PathBuf,
    temp_dir: PathBuf,
    archive_path: PathBuf,
    /// Hash of the model content, populated later by an external step.
    model_hash: Option<String>,
    index: usize,
    mode: Mode,
    zone_names: Vec<String>,
    zones: Vec<ZoneRef>,
}

impl CouplingInstance {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        building_id: String,
        model_source: ModelSource,
        weather_path: PathBuf,
        dictionary_path: PathBuf,
        library_root: PathBuf,
        temp_dir: PathBuf,
        archive_path: PathBuf,
        index: usize,
        zone_name: &str,
        zone: ZoneRef,
    ) -> Self {
        Self {
            building_id,
            model_source,
            weather_path,
            dictionary_path,
            library_root,
            temp_dir,
            archive_path,
            model_hash: None,
            index,
            mode: Mode::Instantiation,
            zone_names: vec![zone_name.to_owned()],
            zones: vec![zone],
        }
    }

    pub fn building_id(&self) -> &str {
        &self.building_id
    }

    pub fn model_source(&self) -> &ModelSource {
        &self.model_source
    }

    /// Path of the input-description file, or of the precompiled unit if one
    /// is used instead.
    pub fn model_path(&self) -> &Path {
        self.model_source.path()
    }

    pub fn uses_precompiled(&self) -> bool {
        self.model_source.is_precompiled()
    }

    pub fn weather_path(&self) -> &Path {
        &self.weather_path
    }

    pub fn dictionary_path(&self) -> &Path {
        &self.dictionary_path
    }

    pub fn library_root(&self) -> &Path {
        &self.library_root
    }

    /// The temporary directory used to launch the external engine.
    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// The path of the packaged coupling unit for this building.
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    pub fn model_hash(&self) -> Option<&str> {
        self.model_hash.as_deref()
    }

    pub fn set_model_hash(&mut self, hash: String) {
        self.model_hash = Some(hash);
    }

    /// Stable index assigned at creation, equal to creation order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Move this instance to the `next` lifecycle phase.
    ///
    /// Rejects transitions outside the coupling-unit lifecycle (see
    /// [`Mode::can_transition_to`]) and leaves the stored mode unchanged in
    /// that case.
    pub fn set_mode(&mut self, next: Mode) -> Result<(), Error> {
        if !self.mode.can_transition_to(next) {
            return Err(Error::InvalidModeTransition {
                building: self.building_id.clone(),
                from: self.mode,
                to: next,
            });
        }
        log::debug!("Switching {} to mode {next}", self.building_id);
        self.mode = next;
        Ok(())
    }

    /// Names of the zones sharing this building, in attachment order.
    pub fn zone_names(&self) -> &[String] {
        &self.zone_names
    }

    /// Zone references, parallel to [`zone_names`](Self::zone_names).
    pub fn zones(&self) -> &[ZoneRef] {
        &self.zones
    }

    /// Attach another zone of the same building to this instance.
    pub fn push_zone(&mut self, zone_name: &str, zone: ZoneRef) {
        log::trace!("Attaching zone {zone_name} to building {}", self.building_id);
        self.zone_names.push(zone_name.to_owned());
        self.zones.push(zone);
    }
}
