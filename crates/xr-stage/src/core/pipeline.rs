//! Ordered provisioning pipeline.
//!
//! Descriptors are processed strictly in declaration order: resolve, then
//! instantiate, then bind, and only then move on to the next descriptor. A
//! failing descriptor is logged and skipped; it never halts the run.

use std::collections::BTreeMap;
use crate::api::host::Host;
use crate::api::types::{ColliderHint, InstanceId};
use crate::assets::resolver::AssetContainer;
use crate::components::descriptor::EntityDescriptor;
use crate::components::instance::EntityInstance;
use crate::core::error::ProvisionError;
use crate::core::store::EntityDescriptorStore;
use crate::systems::instantiate::instantiate;
use crate::systems::interaction::InteractionBinder;

/// A descriptor that did not produce an instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionFailure {
    pub ordinal: usize,
    pub asset_id: String,
    pub error: ProvisionError,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProvisionReport {
    /// Created instances as (ordinal, id), in creation order.
    pub created: Vec<(usize, InstanceId)>,
    pub failures: Vec<ProvisionFailure>,
    /// The session ended before every descriptor was processed.
    pub cancelled: bool,
}

impl ProvisionReport {
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }
}

/// Owns the descriptor store, the asset container and every created instance.
pub struct Provisioner {
    store: EntityDescriptorStore,
    assets: AssetContainer,
    binder: InteractionBinder,
    /// Live instances keyed by descriptor ordinal.
    instances: BTreeMap<usize, EntityInstance>,
}

impl Provisioner {
    pub fn new(store: EntityDescriptorStore, hint: ColliderHint, binder: InteractionBinder) -> Self {
        Self {
            store,
            assets: AssetContainer::with_hint(hint),
            binder,
            instances: BTreeMap::new(),
        }
    }

    /// Provision every descriptor against `host`.
    ///
    /// Only shared access to the host is held across the resolver await, so
    /// the host can keep dispatching hover edges for instances bound earlier
    /// in the run.
    pub async fn run<H: Host>(&mut self, host: &H) -> ProvisionReport {
        let mut report = ProvisionReport::default();

        for (ordinal, descriptor) in self.store.iter().enumerate() {
            if !host.is_active() {
                report.cancelled = true;
                break;
            }

            log::info!("loading model {}-{}", descriptor.asset_id, ordinal);
            match provision_one(&mut self.assets, host, descriptor, ordinal).await {
                Ok(instance) => {
                    self.binder.bind(host, &instance);
                    report.created.push((ordinal, instance.id));
                    self.instances.insert(ordinal, instance);
                }
                Err(ProvisionError::SessionEnded { asset_id }) => {
                    log::info!("session ended while loading {}-{}; result discarded", asset_id, ordinal);
                    report.cancelled = true;
                    break;
                }
                Err(error) => {
                    log::warn!("skipping {}-{}: {}", descriptor.asset_id, ordinal, error);
                    report.failures.push(ProvisionFailure {
                        ordinal,
                        asset_id: descriptor.asset_id.clone(),
                        error,
                    });
                }
            }
        }

        log::info!(
            "provisioned {}/{} entities ({} failed{})",
            report.created_count(),
            self.store.len(),
            report.failed_count(),
            if report.cancelled { ", cancelled" } else { "" }
        );
        report
    }

    /// Instance created for the descriptor at `ordinal`.
    pub fn instance(&self, ordinal: usize) -> Option<&EntityInstance> {
        self.instances.get(&ordinal)
    }

    /// Instances in descriptor order.
    pub fn instances(&self) -> impl Iterator<Item = &EntityInstance> {
        self.instances.values()
    }

    pub fn assets(&self) -> &AssetContainer {
        &self.assets
    }

    pub fn binder(&self) -> &InteractionBinder {
        &self.binder
    }
}

async fn provision_one<H: Host>(
    assets: &mut AssetContainer,
    host: &H,
    descriptor: &EntityDescriptor,
    ordinal: usize,
) -> Result<EntityInstance, ProvisionError> {
    let resolved = assets.resolve(host, &descriptor.asset_id).await;
    if !host.is_active() {
        return Err(ProvisionError::SessionEnded {
            asset_id: descriptor.asset_id.clone(),
        });
    }
    let template = resolved?;
    Ok(instantiate(host, &template, descriptor, ordinal)?)
}
