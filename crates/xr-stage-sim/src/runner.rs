use std::cell::{Ref, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use futures_lite::future::{block_on, poll_once};
use xr_stage::{AnimationDriver, Host, HoverEdge, InstanceId, ProvisionReport, StageApp};
use crate::host::SimHost;
use crate::input::{HoverEvent, HoverQueue};

/// Provisioning in flight. Owns the app until the pipeline finishes.
type Provisioning = Pin<Box<dyn Future<Output = (StageApp, ProvisionReport)>>>;

/// Drives a [`StageApp`] against a [`SimHost`]: fires the session-started
/// hook once, then feeds hover input and advances animation each tick.
///
/// Provisioning is polled once per tick, so hover edges on instances that
/// are already bound are dispatched while later assets are still loading.
pub struct SessionRunner {
    host: Rc<SimHost>,
    /// `None` while provisioning holds it.
    app: Option<StageApp>,
    driver: Rc<RefCell<AnimationDriver>>,
    pending: Option<Provisioning>,
    input: HoverQueue,
    report: Option<ProvisionReport>,
    /// Seconds simulated since start.
    elapsed: f32,
}

impl SessionRunner {
    pub fn new(host: SimHost, app: StageApp) -> Self {
        Self {
            host: Rc::new(host),
            driver: app.driver_handle(),
            app: Some(app),
            pending: None,
            input: HoverQueue::new(),
            report: None,
            elapsed: 0.0,
        }
    }

    /// Start the session without waiting for provisioning. The pipeline runs
    /// up to its first pending load; `tick` drives the rest.
    pub fn begin(&mut self) {
        if self.pending.is_some() || self.report.is_some() {
            log::warn!("session already started");
            return;
        }
        let Some(mut app) = self.app.take() else {
            return;
        };

        let host = Rc::clone(&self.host);
        let provisioning: Provisioning = Box::pin(async move {
            let report = app.started(&*host).await;
            (app, report)
        });
        self.pending = Some(provisioning);
        self.poll_provisioning();
    }

    /// Start the session and run provisioning to completion. The app's
    /// entry point runs on the first call only; later calls return the
    /// first report.
    pub fn start(&mut self) -> &ProvisionReport {
        if self.pending.is_none() {
            self.begin();
        }
        let report = match self.pending.take() {
            Some(pending) => {
                let (app, report) = block_on(pending);
                self.app = Some(app);
                report
            }
            None => self.report.take().unwrap_or_default(),
        };
        self.report.insert(report)
    }

    /// Queue a hover edge for the next tick.
    pub fn push_hover(&mut self, instance: InstanceId, edge: HoverEdge) {
        self.input.push(HoverEvent { instance, edge });
    }

    /// Run one frame: poll pending provisioning, dispatch queued hover
    /// events, then advance host tweens and the driver by `dt`.
    pub fn tick(&mut self, dt: f32) {
        if self.pending.is_none() && self.report.is_none() {
            return;
        }
        self.poll_provisioning();
        if !self.host.is_active() {
            self.input.drain();
            return;
        }

        for event in self.input.drain() {
            self.host.dispatch(event);
        }
        self.host.advance(dt);
        self.driver.borrow_mut().tick(dt);
        self.elapsed += dt;
    }

    /// End the session. Further ticks are ignored.
    pub fn end(&mut self) {
        self.host.end_session();
        log::info!("session ended after {:.2}s", self.elapsed);
    }

    fn poll_provisioning(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        if let Some((app, report)) = block_on(poll_once(pending)) {
            self.pending = None;
            self.app = Some(app);
            self.report = Some(report);
        }
    }

    /// Whether provisioning is still running.
    pub fn is_provisioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn host(&self) -> &SimHost {
        &self.host
    }

    /// The app, once provisioning has handed it back.
    pub fn app(&self) -> Option<&StageApp> {
        self.app.as_ref()
    }

    pub fn driver(&self) -> Ref<'_, AnimationDriver> {
        self.driver.borrow()
    }

    pub fn report(&self) -> Option<&ProvisionReport> {
        self.report.as_ref()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
