// ── Connect progress ──
//
// `Account::connect` reports each phase boundary to a `ConnectObserver`.
// The default observer turns phases into `tracing` events; hosts with their
// own progress UI pass a custom observer instead.

use strum::{Display, EnumIter};
use tracing::info;

/// Phase boundaries of `Account::connect`, in the order they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ConnectPhase {
    #[strum(to_string = "Connecting to SmartThings")]
    Connecting,
    #[strum(to_string = "Retrieving locations")]
    RetrievingLocations,
    #[strum(to_string = "Retrieving devices")]
    RetrievingDevices,
    #[strum(to_string = "Retrieving scenes")]
    RetrievingScenes,
    #[strum(to_string = "Connected and ready")]
    Ready,
}

/// Receives connect progress.
pub trait ConnectObserver: Send + Sync {
    fn on_phase(&self, phase: ConnectPhase);
}

/// Emits each phase as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ConnectObserver for TracingObserver {
    fn on_phase(&self, phase: ConnectPhase) {
        info!(?phase, "{phase}");
    }
}

/// Discards progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ConnectObserver for NoopObserver {
    fn on_phase(&self, _phase: ConnectPhase) {}
}

impl<F> ConnectObserver for F
where
    F: Fn(ConnectPhase) + Send + Sync,
{
    fn on_phase(&self, phase: ConnectPhase) {
        self(phase);
    }
}
