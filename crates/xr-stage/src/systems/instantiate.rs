//! Instantiation system: turns a resolved template plus a descriptor into a live instance.

use crate::api::host::SceneGraph;
use crate::assets::resolver::AssetTemplate;
use crate::components::descriptor::EntityDescriptor;
use crate::components::instance::{EntityInstance, Transform};
use crate::core::error::InstantiationError;

/// Create the instance for the descriptor at `ordinal`.
///
/// The descriptor's position and scale become the local transform verbatim,
/// and the name is `{asset_id}{ordinal}` so descriptors sharing an asset
/// stay distinguishable.
pub fn instantiate<G>(
    graph: &G,
    template: &AssetTemplate,
    descriptor: &EntityDescriptor,
    ordinal: usize,
) -> Result<EntityInstance, InstantiationError>
where
    G: SceneGraph + ?Sized,
{
    let name = descriptor.instance_name(ordinal);
    let initial = Transform {
        position: descriptor.position,
        scale: descriptor.scale,
    };

    let id = graph.create_instance(template, initial, &name)?;
    log::debug!("created {} as {:?} at {:?}", name, id, initial.position);

    Ok(EntityInstance {
        id,
        name,
        ordinal,
        template: template.clone(),
        initial,
    })
}
