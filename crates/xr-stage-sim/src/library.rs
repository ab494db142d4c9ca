use std::collections::HashMap;

/// A simulated asset known to the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryEntry {
    /// Number of suspension points before the load completes.
    pub latency: u32,
    /// Parse failure reason, if the asset is corrupt.
    pub corrupt: Option<String>,
}

/// The set of assets the simulated host can load.
#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    entries: HashMap<String, LibraryEntry>,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding each id once, loading without delay.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut library = Self::new();
        for id in ids {
            library.entries.insert(id.into(), LibraryEntry::default());
        }
        library
    }

    // -- Builder pattern --

    pub fn with_asset(mut self, asset_id: impl Into<String>) -> Self {
        self.entries.insert(asset_id.into(), LibraryEntry::default());
        self
    }

    pub fn with_slow_asset(mut self, asset_id: impl Into<String>, latency: u32) -> Self {
        self.entries.insert(
            asset_id.into(),
            LibraryEntry {
                latency,
                corrupt: None,
            },
        );
        self
    }

    pub fn with_corrupt_asset(mut self, asset_id: impl Into<String>, reason: impl Into<String>) -> Self {
        self.entries.insert(
            asset_id.into(),
            LibraryEntry {
                latency: 0,
                corrupt: Some(reason.into()),
            },
        );
        self
    }

    pub fn get(&self, asset_id: &str) -> Option<&LibraryEntry> {
        self.entries.get(asset_id)
    }

    pub fn contains(&self, asset_id: &str) -> bool {
        self.entries.contains_key(asset_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
