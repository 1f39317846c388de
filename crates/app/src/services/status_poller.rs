//! Status poller: fetches the device status now and then on a fixed cadence.
//!
//! Each tick spawns an independent poll, so a request that outlives the
//! interval overlaps with the next one; there is no de-duplication and the
//! last snapshot to arrive wins. A failed poll is logged and leaves the
//! previous rendering in place.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use espanel_domain::error::PanelError;
use espanel_domain::status::StatusSnapshot;

use crate::ports::{DeviceApi, StatusRenderer};

/// Cadence used when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Polls `GET /api/status` and renders every snapshot it receives.
pub struct StatusPoller<A, R> {
    api: A,
    renderer: R,
    interval: Duration,
}

impl<A, R> StatusPoller<A, R> {
    /// Create a poller running at [`DEFAULT_POLL_INTERVAL`].
    pub fn new(api: A, renderer: R) -> Self {
        Self {
            api,
            renderer,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the polling cadence.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "poll interval must be non-zero");
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl<A: DeviceApi, R: StatusRenderer> StatusPoller<A, R> {
    /// Fetch one snapshot and render it.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error from the device. The error has
    /// already been logged and nothing was rendered.
    #[tracing::instrument(skip(self))]
    pub async fn poll_once(&self) -> Result<StatusSnapshot, PanelError> {
        match self.api.fetch_status().await {
            Ok(snapshot) => {
                self.renderer.render(&snapshot);
                tracing::debug!(
                    wifi = %snapshot.wifi,
                    ip = %snapshot.ip,
                    uptime = %snapshot.uptime,
                    "status updated"
                );
                Ok(snapshot)
            }
            Err(err) => {
                tracing::error!(%err, "status update failed");
                Err(err)
            }
        }
    }
}

impl<A, R> StatusPoller<A, R>
where
    A: DeviceApi + Send + Sync + 'static,
    R: StatusRenderer + Send + Sync + 'static,
{
    /// Spawn the repeating task: one poll immediately, then one per interval.
    ///
    /// Must be called from within a tokio runtime. The task runs until the
    /// returned handle is stopped or dropped.
    pub fn start(self) -> PollerHandle {
        let interval = self.interval;
        let task = tokio::spawn(run(Arc::new(self)));
        tracing::info!(?interval, "status poller started");
        PollerHandle { task }
    }
}

/// Repeating loop. Owns the in-flight polls so aborting it cancels them too.
async fn run<A, R>(poller: Arc<StatusPoller<A, R>>)
where
    A: DeviceApi + Send + Sync + 'static,
    R: StatusRenderer + Send + Sync + 'static,
{
    let mut ticker = tokio::time::interval(poller.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut in_flight = JoinSet::new();

    loop {
        ticker.tick().await;
        // reap finished polls
        while in_flight.try_join_next().is_some() {}

        let poller = Arc::clone(&poller);
        in_flight.spawn(async move {
            // already logged
            let _ = poller.poll_once().await;
        });
    }
}

/// Lifecycle handle of a running [`StatusPoller`].
///
/// Stopping or dropping the handle cancels the repeating task along with
/// any poll still in flight.
#[must_use = "dropping the handle stops the poller"]
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop polling.
    pub fn stop(self) {
        drop(self);
    }

    /// Whether the repeating task is still alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("status poller stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_capture::LogCapture;
    use espanel_domain::brightness::Brightness;
    use espanel_domain::light::LightState;
    use espanel_domain::status::Uptime;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    // ── Fakes ──────────────────────────────────────────────────────

    #[derive(Default)]
    struct FakeDevice {
        calls: AtomicUsize,
        failing: AtomicBool,
        delay: Duration,
    }

    impl FakeDevice {
        fn slow(delay: Duration) -> Self {
            Self {
                delay,
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl DeviceApi for FakeDevice {
        fn fetch_status(
            &self,
        ) -> impl Future<Output = Result<StatusSnapshot, PanelError>> + Send {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            let failing = self.failing.load(Ordering::SeqCst);
            let delay = self.delay;
            async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                if failing {
                    return Err(PanelError::transport(std::io::Error::new(
                        std::io::ErrorKind::ConnectionRefused,
                        "refused",
                    )));
                }
                Ok(StatusSnapshot {
                    wifi: "OK".to_string(),
                    ip: "10.0.0.5".to_string(),
                    uptime: Uptime::from_secs(42 + call as u64),
                })
            }
        }

        fn set_light(
            &self,
            _state: &LightState,
        ) -> impl Future<Output = Result<String, PanelError>> + Send {
            async { Ok(String::new()) }
        }

        fn set_brightness(
            &self,
            _brightness: Brightness,
        ) -> impl Future<Output = Result<(), PanelError>> + Send {
            async { Ok(()) }
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        rendered: Mutex<Vec<StatusSnapshot>>,
    }

    impl RecordingRenderer {
        fn count(&self) -> usize {
            self.rendered.lock().unwrap().len()
        }

        fn last(&self) -> Option<StatusSnapshot> {
            self.rendered.lock().unwrap().last().cloned()
        }
    }

    impl StatusRenderer for RecordingRenderer {
        fn render(&self, snapshot: &StatusSnapshot) {
            self.rendered.lock().unwrap().push(snapshot.clone());
        }
    }

    fn make_poller(
        device: &Arc<FakeDevice>,
        renderer: &Arc<RecordingRenderer>,
    ) -> StatusPoller<Arc<FakeDevice>, Arc<RecordingRenderer>> {
        StatusPoller::new(Arc::clone(device), Arc::clone(renderer))
    }

    // ── poll_once ──────────────────────────────────────────────────

    #[tokio::test]
    async fn should_render_snapshot_fields() {
        let device = Arc::new(FakeDevice::default());
        let renderer = Arc::new(RecordingRenderer::default());
        let poller = make_poller(&device, &renderer);

        let snapshot = poller.poll_once().await.unwrap();

        assert_eq!(renderer.last(), Some(snapshot.clone()));
        let texts: Vec<String> = snapshot
            .render_fields()
            .into_iter()
            .map(|(_, text)| text)
            .collect();
        assert_eq!(texts, ["OK", "10.0.0.5", "43s"]);
    }

    #[tokio::test]
    async fn should_leave_previous_rendering_when_fetch_fails() {
        let (logs, _guard) = LogCapture::install();
        let device = Arc::new(FakeDevice::default());
        let renderer = Arc::new(RecordingRenderer::default());
        let poller = make_poller(&device, &renderer);

        let first = poller.poll_once().await.unwrap();
        device.failing.store(true, Ordering::SeqCst);
        let result = poller.poll_once().await;

        assert!(matches!(result, Err(PanelError::Transport(_))));
        assert_eq!(renderer.count(), 1);
        assert_eq!(renderer.last(), Some(first));

        let output = logs.contents();
        assert!(output.contains("ERROR"));
        assert!(output.contains("status update failed"));
        assert!(output.contains("refused"));
    }

    #[test]
    fn should_default_to_five_second_interval() {
        let poller = StatusPoller::new(FakeDevice::default(), RecordingRenderer::default());
        assert_eq!(poller.interval(), Duration::from_millis(5000));
    }

    #[test]
    #[should_panic(expected = "poll interval must be non-zero")]
    fn should_reject_zero_interval() {
        let _ = StatusPoller::new(FakeDevice::default(), RecordingRenderer::default())
            .with_interval(Duration::ZERO);
    }

    // ── repeating task ─────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn should_poll_immediately_then_every_interval() {
        let device = Arc::new(FakeDevice::default());
        let renderer = Arc::new(RecordingRenderer::default());
        let handle = make_poller(&device, &renderer).start();

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(device.calls(), 1);
        assert_eq!(renderer.count(), 1);

        tokio::time::sleep(Duration::from_millis(4_998)).await;
        assert_eq!(device.calls(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(device.calls(), 2);

        tokio::time::sleep(Duration::from_millis(5_000)).await;
        assert_eq!(device.calls(), 3);
        assert_eq!(renderer.count(), 3);
        assert!(handle.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_polling_once_stopped() {
        let device = Arc::new(FakeDevice::default());
        let renderer = Arc::new(RecordingRenderer::default());
        let handle = make_poller(&device, &renderer).start();

        tokio::time::sleep(Duration::from_millis(1)).await;
        handle.stop();
        tokio::time::sleep(Duration::from_secs(30)).await;

        assert_eq!(device.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_polling_after_failures() {
        let device = Arc::new(FakeDevice::default());
        device.failing.store(true, Ordering::SeqCst);
        let renderer = Arc::new(RecordingRenderer::default());
        let _handle = make_poller(&device, &renderer).start();

        tokio::time::sleep(Duration::from_millis(5_001)).await;
        assert_eq!(device.calls(), 2);
        assert_eq!(renderer.count(), 0);

        device.failing.store(false, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(5_000)).await;
        assert_eq!(device.calls(), 3);
        assert_eq!(renderer.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_overlap_polls_slower_than_interval() {
        let device = Arc::new(FakeDevice::slow(Duration::from_secs(12)));
        let renderer = Arc::new(RecordingRenderer::default());
        let _handle = make_poller(&device, &renderer).start();

        tokio::time::sleep(Duration::from_millis(10_001)).await;
        assert_eq!(device.calls(), 3);
        assert_eq!(renderer.count(), 0);

        tokio::time::sleep(Duration::from_millis(2_000)).await;
        assert_eq!(renderer.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_honour_custom_interval() {
        let device = Arc::new(FakeDevice::default());
        let renderer = Arc::new(RecordingRenderer::default());
        let _handle = make_poller(&device, &renderer)
            .with_interval(Duration::from_secs(1))
            .start();

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(device.calls(), 4);
    }
}
