//! Rerank counters and an optional Prometheus recorder.
//!
//! Counters go through the `metrics` facade; without an installed recorder
//! they are no-ops, so the library never requires one.

use ::metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::rerank::ScoreBasis;

pub const BLEND_TOTAL: &str = "sector_rerank_blend_total";
pub const CONFIG_ERRORS_TOTAL: &str = "sector_rerank_config_errors_total";
pub const ENTITIES_RANKED_TOTAL: &str = "sector_rerank_entities_ranked_total";

fn describe_all() {
    describe_counter!(
        BLEND_TOTAL,
        "Blend computations, labelled by basis (no_selection, no_sector_matches, blended)."
    );
    describe_counter!(
        CONFIG_ERRORS_TOTAL,
        "Selections rejected because of an unknown sector id."
    );
    describe_counter!(ENTITIES_RANKED_TOTAL, "Entities emitted by rerank runs.");
}

/// One-time metrics registration (so series carry help text).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(describe_all);
}

pub(crate) fn record_blend(basis: ScoreBasis) {
    ensure_metrics_described();
    counter!(BLEND_TOTAL, "basis" => basis.as_str()).increment(1);
}

pub(crate) fn record_config_error() {
    ensure_metrics_described();
    counter!(CONFIG_ERRORS_TOTAL).increment(1);
}

pub(crate) fn record_ranked(n: usize) {
    ensure_metrics_described();
    counter!(ENTITIES_RANKED_TOTAL).increment(n as u64);
}

/// Process-wide Prometheus recorder; render the exposition text on demand.
pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global recorder. Fails if another recorder is already installed.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new().install_recorder()?;
        describe_all();
        Ok(Self { handle })
    }

    pub fn render(&self) -> String {
        self.handle.render()
    }
}
