//! Progress reporting around analysis.
//!
//! Front ends that want to show an "analyzing..." bar run the analysis
//! through [`StagedAnalysis`], which emits discrete ticks and supports
//! cancellation without touching the analysis itself.

mod staged;

pub use staged::{
    fraction, spawn_staged, CancelToken, ProgressEvent, ProgressObserver, StageOutcome,
    StagedAnalysis,
};
