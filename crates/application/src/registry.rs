//! Extension-based routing between entity serializers.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::ports::EntitySerializer;

/// A set of entity serializers keyed by file extension.
///
/// Extensions are matched case-insensitively and may be given with or
/// without a leading dot.
#[derive(Clone, Default)]
pub struct EntitySerializers {
    by_extension: BTreeMap<String, Arc<dyn EntitySerializer>>,
}

impl EntitySerializers {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a serializer under its default file extension.
    ///
    /// Returns the serializer previously registered for that extension, if any.
    pub fn register(
        &mut self,
        serializer: Arc<dyn EntitySerializer>,
    ) -> Option<Arc<dyn EntitySerializer>> {
        let extension = normalize_extension(serializer.default_file_extension());
        tracing::debug!(extension = %extension, "registering entity serializer");
        self.by_extension.insert(extension, serializer)
    }

    /// Builder-style variant of [`EntitySerializers::register`].
    #[must_use]
    pub fn with(mut self, serializer: Arc<dyn EntitySerializer>) -> Self {
        self.register(serializer);
        self
    }

    /// Finds the serializer for a file extension.
    #[must_use]
    pub fn for_extension(&self, extension: &str) -> Option<&Arc<dyn EntitySerializer>> {
        self.by_extension.get(&normalize_extension(extension))
    }

    /// Finds the serializer for a file, based on its extension.
    #[must_use]
    pub fn for_path(&self, path: &Path) -> Option<&Arc<dyn EntitySerializer>> {
        let extension = path.extension()?.to_str()?;
        let found = self.for_extension(extension);
        if found.is_none() {
            tracing::trace!(path = %path.display(), "no entity serializer for file");
        }
        found
    }

    /// Returns the registered extensions in sorted order.
    #[must_use]
    pub fn extensions(&self) -> Vec<&str> {
        self.by_extension.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered serializers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    /// Returns true if no serializer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

impl fmt::Debug for EntitySerializers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntitySerializers")
            .field("extensions", &self.extensions())
            .finish()
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}
