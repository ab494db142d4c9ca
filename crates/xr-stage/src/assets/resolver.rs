use std::collections::HashMap;
use crate::api::host::AssetSource;
use crate::api::types::{ColliderHint, TemplateId};
use crate::core::error::AssetLoadError;

/// Opaque handle to a loaded asset, issued by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTemplate {
    pub id: TemplateId,
    /// Asset id the template was loaded from.
    pub asset_id: String,
}

impl AssetTemplate {
    pub fn new(id: TemplateId, asset_id: impl Into<String>) -> Self {
        Self {
            id,
            asset_id: asset_id.into(),
        }
    }
}

/// Resolves asset ids into templates, memoized for the container's lifetime.
///
/// Successful loads are cached by id; failures are not, so a later resolve
/// of the same id asks the host again. Concurrent in-flight requests are
/// not coalesced: the container is only ever driven by one task.
#[derive(Debug, Default)]
pub struct AssetContainer {
    templates: HashMap<String, AssetTemplate>,
    hint: ColliderHint,
    host_loads: usize,
    cache_hits: usize,
}

impl AssetContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Container forwarding `hint` with every host load.
    pub fn with_hint(hint: ColliderHint) -> Self {
        Self {
            hint,
            ..Self::default()
        }
    }

    /// Resolve `asset_id`, suspending on the host only on a cache miss.
    pub async fn resolve<S: AssetSource>(&mut self, source: &S, asset_id: &str) -> Result<AssetTemplate, AssetLoadError> {
        if let Some(template) = self.templates.get(asset_id) {
            self.cache_hits += 1;
            log::debug!("asset {} served from container cache", asset_id);
            return Ok(template.clone());
        }

        self.host_loads += 1;
        let template = source.load_asset(asset_id, self.hint).await?;
        self.templates.insert(asset_id.to_string(), template.clone());
        Ok(template)
    }

    /// Cached template for `asset_id`, if already resolved.
    pub fn get(&self, asset_id: &str) -> Option<&AssetTemplate> {
        self.templates.get(asset_id)
    }

    /// Drop every cached template. Handles issued earlier are no longer valid.
    pub fn release(&mut self) {
        self.templates.clear();
    }

    /// Number of loads forwarded to the host.
    pub fn host_loads(&self) -> usize {
        self.host_loads
    }

    /// Number of resolves answered from the cache.
    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Loader that knows a fixed set of ids and records every request.
    struct FakeSource {
        known: Vec<&'static str>,
        requests: RefCell<Vec<(String, ColliderHint)>>,
    }

    impl FakeSource {
        fn new(known: Vec<&'static str>) -> Self {
            Self { known, requests: RefCell::new(Vec::new()) }
        }
    }

    impl AssetSource for FakeSource {
        async fn load_asset(&self, asset_id: &str, hint: ColliderHint) -> Result<AssetTemplate, AssetLoadError> {
            futures_lite::future::yield_now().await;
            let mut requests = self.requests.borrow_mut();
            requests.push((asset_id.to_string(), hint));
            if self.known.contains(&asset_id) {
                Ok(AssetTemplate::new(TemplateId(requests.len() as u32), asset_id))
            } else {
                Err(AssetLoadError::NotFound { asset_id: asset_id.to_string() })
            }
        }
    }

    #[test]
    fn second_resolve_hits_cache() {
        let source = FakeSource::new(vec!["drone.glb"]);
        let mut assets = AssetContainer::new();

        let a = pollster::block_on(assets.resolve(&source, "drone.glb")).unwrap();
        let b = pollster::block_on(assets.resolve(&source, "drone.glb")).unwrap();

        assert_eq!(a, b);
        assert_eq!(assets.host_loads(), 1);
        assert_eq!(assets.cache_hits(), 1);
        assert_eq!(source.requests.borrow().len(), 1);
    }

    #[test]
    fn failures_carry_id_and_are_not_cached() {
        let source = FakeSource::new(vec![]);
        let mut assets = AssetContainer::new();

        let err = pollster::block_on(assets.resolve(&source, "missing.glb")).unwrap_err();
        assert_eq!(err.asset_id(), "missing.glb");
        assert!(assets.is_empty());

        let _ = pollster::block_on(assets.resolve(&source, "missing.glb"));
        assert_eq!(assets.host_loads(), 2);
    }

    #[test]
    fn hint_is_forwarded() {
        let source = FakeSource::new(vec!["drone.glb"]);
        let mut assets = AssetContainer::with_hint(ColliderHint::Sphere);
        pollster::block_on(assets.resolve(&source, "drone.glb")).unwrap();
        assert_eq!(source.requests.borrow()[0].1, ColliderHint::Sphere);
    }

    #[test]
    fn release_forces_reload() {
        let source = FakeSource::new(vec!["drone.glb"]);
        let mut assets = AssetContainer::new();
        pollster::block_on(assets.resolve(&source, "drone.glb")).unwrap();
        assets.release();
        assert!(assets.get("drone.glb").is_none());
        pollster::block_on(assets.resolve(&source, "drone.glb")).unwrap();
        assert_eq!(assets.host_loads(), 2);
    }
}
