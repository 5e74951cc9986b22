//! Staged analysis with progress reporting.
//!
//! The analysis itself is a single synchronous call. This runner paces a
//! fixed number of progress stages in front of it so a front end can show a
//! progress bar, and lets the caller cancel between stages.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;

use crate::config::ProgressConfig;
use crate::core::Clock;
use crate::features::analysis::{AnalysisResult, Analyzer, DetailedAnalysis};

/// Receives progress ticks.
pub trait ProgressObserver {
    /// Called after `stage` of `total` stages has elapsed.
    fn on_stage(&mut self, stage: u32, total: u32);
}

impl<F: FnMut(u32, u32)> ProgressObserver for F {
    fn on_stage(&mut self, stage: u32, total: u32) {
        self(stage, total);
    }
}

/// Shared cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the next stage boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// How a staged run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome<T = AnalysisResult> {
    /// All stages elapsed and the analysis ran.
    Completed(T),
    /// Cancelled before the analysis ran.
    Cancelled {
        /// Stages that had elapsed when cancellation was noticed.
        completed_stages: u32,
    },
}

/// Events streamed from [`spawn_staged`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Stage { stage: u32, total: u32 },
    Finished(AnalysisResult),
    Cancelled,
}

/// Progress fraction in 0.0..=1.0. Zero stages count as complete.
#[must_use]
pub fn fraction(stage: u32, total: u32) -> f64 {
    if total == 0 {
        return 1.0;
    }
    f64::from(stage.min(total)) / f64::from(total)
}

/// Paces progress stages ahead of one analysis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagedAnalysis {
    stages: u32,
    interval: Duration,
}

impl StagedAnalysis {
    /// `stages` ticks, `interval` apart.
    #[must_use]
    pub const fn new(stages: u32, interval: Duration) -> Self {
        Self { stages, interval }
    }

    /// Build from the `progress` section of the configuration.
    #[must_use]
    pub const fn from_config(config: &ProgressConfig) -> Self {
        Self::new(config.stages, Duration::from_millis(config.interval_ms))
    }

    /// Number of stages.
    #[must_use]
    pub const fn stages(&self) -> u32 {
        self.stages
    }

    /// Run all stages, then analyze `input`.
    ///
    /// The token is checked before every stage and once more before the
    /// analysis, so a cancelled run never produces a result.
    pub fn run<C: Clock>(
        &self,
        analyzer: &Analyzer<C>,
        input: &str,
        observer: &mut dyn ProgressObserver,
        cancel: &CancelToken,
    ) -> StageOutcome {
        self.run_then(observer, cancel, || analyzer.analyze(input))
    }

    /// Like [`run`](Self::run), keeping tokens and the matched date phrase.
    pub fn run_detailed<C: Clock>(
        &self,
        analyzer: &Analyzer<C>,
        input: &str,
        observer: &mut dyn ProgressObserver,
        cancel: &CancelToken,
    ) -> StageOutcome<DetailedAnalysis> {
        self.run_then(observer, cancel, || analyzer.analyze_detailed(input))
    }

    fn run_then<T>(
        &self,
        observer: &mut dyn ProgressObserver,
        cancel: &CancelToken,
        finish: impl FnOnce() -> T,
    ) -> StageOutcome<T> {
        for stage in 1..=self.stages {
            if cancel.is_cancelled() {
                debug!(completed = stage - 1, "staged analysis cancelled");
                return StageOutcome::Cancelled {
                    completed_stages: stage - 1,
                };
            }
            if !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }
            observer.on_stage(stage, self.stages);
        }

        if cancel.is_cancelled() {
            debug!(completed = self.stages, "staged analysis cancelled");
            return StageOutcome::Cancelled {
                completed_stages: self.stages,
            };
        }

        StageOutcome::Completed(finish())
    }
}

/// Run a staged analysis on a worker thread, streaming events.
///
/// The receiver yields one `Stage` per elapsed stage followed by exactly one
/// `Finished` or `Cancelled`.
pub fn spawn_staged<C>(
    analyzer: Arc<Analyzer<C>>,
    input: String,
    staging: StagedAnalysis,
    cancel: CancelToken,
) -> (Receiver<ProgressEvent>, JoinHandle<()>)
where
    C: Clock + Send + Sync + 'static,
{
    let (tx, rx) = mpsc::channel();

    let handle = std::thread::spawn(move || {
        let stage_tx = tx.clone();
        let mut observer = move |stage: u32, total: u32| {
            // A dropped receiver just means nobody is watching.
            let _ = stage_tx.send(ProgressEvent::Stage { stage, total });
        };

        let event = match staging.run(&*analyzer, &input, &mut observer, &cancel) {
            StageOutcome::Completed(result) => ProgressEvent::Finished(result),
            StageOutcome::Cancelled { .. } => ProgressEvent::Cancelled,
        };
        let _ = tx.send(event);
    });

    (rx, handle)
}
