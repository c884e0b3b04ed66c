//! Append-only store of coupling instances for one simulation run.

use std::path::PathBuf;

use crate::{
    instance::{CouplingInstance, ModelSource, ZoneRef},
    paths, Error,
};

/// Configuration of one building-level coupling, handed to
/// [`CouplingRegistry::allocate`].
#[derive(Debug, Clone)]
pub struct CouplingSettings {
    /// Building identifier, unique per simulation run.
    pub building_id: String,
    pub model_source: ModelSource,
    /// Weather-data file for the external engine.
    pub weather_path: PathBuf,
    /// Data-dictionary file for the external engine.
    pub dictionary_path: PathBuf,
    /// Root of the model library the building belongs to.
    pub library_root: PathBuf,
}

/// Registry of all coupling instances of a simulation run.
///
/// Owned by the run's top-level context and passed by reference to every
/// collaborator. Indices handed out by [`allocate`](Self::allocate) are
/// stable for the lifetime of the registry; instances are never removed.
#[derive(Debug)]
pub struct CouplingRegistry {
    /// Root directory under which per-building temp directories are derived.
    root: PathBuf,
    instances: Vec<CouplingInstance>,
}

impl CouplingRegistry {
    /// Create a registry rooted at the process working directory.
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_root(std::env::current_dir()?))
    }

    /// Create a registry rooted at an explicit directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            instances: Vec::new(),
        }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Create the coupling instance for one building and return its index.
    ///
    /// Derives the temporary directory and archive path for the building,
    /// creates the temporary directory on disk (a no-op if it already
    /// exists), and appends the populated record. Indices are assigned in
    /// call order, starting at zero, and are never reused.
    ///
    /// `zone_name` is the first zone's name in the input file; `zone` is the
    /// weak reference to that zone in the caller's arena. Further zones of
    /// the same building are attached through
    /// [`CouplingInstance::push_zone`].
    pub fn allocate(
        &mut self,
        settings: CouplingSettings,
        zone_name: &str,
        zone: ZoneRef,
    ) -> Result<usize, Error> {
        log::debug!(
            "Allocating coupling instance for building {}",
            settings.building_id
        );

        let temp_dir = paths::simulation_temp_dir(&self.root, &settings.building_id)?;
        let archive_path = paths::simulation_archive_path(&settings.building_id, &temp_dir);
        std::fs::create_dir_all(&temp_dir)?;

        let index = self.instances.len();
        self.instances.push(CouplingInstance::new(
            settings.building_id,
            settings.model_source,
            settings.weather_path,
            settings.dictionary_path,
            settings.library_root,
            temp_dir,
            archive_path,
            index,
            zone_name,
            zone,
        ));

        log::debug!(
            "Allocated coupling instance {index}, {} instance(s) total",
            self.instances.len()
        );
        Ok(index)
    }

    /// Look up an instance by the index returned from
    /// [`allocate`](Self::allocate).
    pub fn get(&self, index: usize) -> Option<&CouplingInstance> {
        self.instances.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CouplingInstance> {
        self.instances.get_mut(index)
    }

    /// Number of coupling instances created so far.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CouplingInstance> {
        self.instances.iter()
    }
}
