use std::cell::{Ref, RefCell};
use std::rc::Rc;
use crate::api::host::Host;
use crate::assets::manifest::StageManifest;
use crate::components::instance::EntityInstance;
use crate::core::pipeline::{ProvisionReport, Provisioner};
use crate::core::store::EntityDescriptorStore;
use crate::systems::animation::AnimationDriver;
use crate::systems::interaction::InteractionBinder;

/// The session entry point: provisions the stage once the host reports the
/// session as started, then keeps the animation driver in step with the
/// host's update loop.
pub struct StageApp {
    provisioner: Provisioner,
    driver: Rc<RefCell<AnimationDriver>>,
}

impl StageApp {
    pub fn new(manifest: &StageManifest) -> Self {
        let driver = Rc::new(RefCell::new(AnimationDriver::new()));
        let binder = InteractionBinder::new(manifest.hover, Rc::clone(&driver));
        let provisioner = Provisioner::new(
            EntityDescriptorStore::from_manifest(manifest),
            manifest.collider_hint,
            binder,
        );
        Self { provisioner, driver }
    }

    /// Run the provisioning pipeline. Hosts call this from their
    /// session-started hook, exactly once.
    pub async fn started<H: Host>(&mut self, host: &H) -> ProvisionReport {
        self.provisioner.run(host).await
    }

    /// Advance the driver's view of in-flight transitions.
    pub fn tick(&mut self, dt: f32) {
        self.driver.borrow_mut().tick(dt);
    }

    pub fn instance(&self, ordinal: usize) -> Option<&EntityInstance> {
        self.provisioner.instance(ordinal)
    }

    pub fn instances(&self) -> impl Iterator<Item = &EntityInstance> {
        self.provisioner.instances()
    }

    pub fn driver(&self) -> Ref<'_, AnimationDriver> {
        self.driver.borrow()
    }

    /// Shared handle to the driver, for runners that keep ticking it while
    /// provisioning holds the app.
    pub fn driver_handle(&self) -> Rc<RefCell<AnimationDriver>> {
        Rc::clone(&self.driver)
    }
}

impl Default for StageApp {
    fn default() -> Self {
        Self::new(&StageManifest::default())
    }
}
