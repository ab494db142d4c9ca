use glam::Vec3;
use crate::assets::manifest::StageManifest;
use crate::components::descriptor::EntityDescriptor;

/// Ordered, read-only list of entity descriptors.
/// Populated once at construction; declaration order is processing order.
#[derive(Debug, Clone, Default)]
pub struct EntityDescriptorStore {
    descriptors: Vec<EntityDescriptor>,
}

impl EntityDescriptorStore {
    pub fn new(descriptors: Vec<EntityDescriptor>) -> Self {
        Self { descriptors }
    }

    /// Build a store from a parsed manifest.
    pub fn from_manifest(manifest: &StageManifest) -> Self {
        Self::new(manifest.entities.clone())
    }

    /// Two `drone.glb` entities at (0, 0.5, 0) and (0, 1.5, 0), unit scale.
    pub fn drone_pair() -> Self {
        Self::new(vec![
            EntityDescriptor::new("drone.glb").with_position(Vec3::new(0.0, 0.5, 0.0)),
            EntityDescriptor::new("drone.glb").with_position(Vec3::new(0.0, 1.5, 0.0)),
        ])
    }

    /// Descriptor at `ordinal`.
    pub fn get(&self, ordinal: usize) -> Option<&EntityDescriptor> {
        self.descriptors.get(ordinal)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_declaration_order() {
        let store = EntityDescriptorStore::new(vec![
            EntityDescriptor::new("a.glb"),
            EntityDescriptor::new("b.glb"),
            EntityDescriptor::new("c.glb"),
        ]);
        let ids: Vec<&str> = store.iter().map(|d| d.asset_id.as_str()).collect();
        assert_eq!(ids, vec!["a.glb", "b.glb", "c.glb"]);
        assert_eq!(store.get(1).unwrap().asset_id, "b.glb");
        assert!(store.get(3).is_none());
    }

    #[test]
    fn empty_store_is_valid() {
        let store = EntityDescriptorStore::default();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn manifest_and_drone_pair_agree() {
        let from_manifest = EntityDescriptorStore::from_manifest(&StageManifest::default());
        let pair = EntityDescriptorStore::drone_pair();
        assert_eq!(from_manifest.len(), pair.len());
        for (a, b) in from_manifest.iter().zip(pair.iter()) {
            assert_eq!(a, b);
        }
    }
}
