// tests/e2e_smoke.rs
// Shipped demo snapshot + shipped taxonomy, run the way the demo binary does.

use std::path::PathBuf;

use sector_rerank::snapshot::Snapshot;
use sector_rerank::{ScoreBasis, SectorSelection, Taxonomy, Trend};

fn repo_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(rel)
}

fn load() -> (Snapshot, Taxonomy) {
    let snap = Snapshot::load_from(&repo_path("demos/snapshot.json")).expect("demo snapshot");
    let tax = Taxonomy::load_from(&repo_path("config/sectors.toml")).expect("shipped taxonomy");
    (snap, tax)
}

fn order(r: &sector_rerank::Ranking) -> Vec<&str> {
    r.ranked.iter().map(|x| x.entity.id.as_str()).collect()
}

#[test]
fn smoke_no_filter_orders_by_baseline() {
    let (snap, tax) = load();
    let r = snap.rerank(&SectorSelection::empty(), &tax).unwrap();
    assert_eq!(order(&r), vec!["de", "vn", "cl", "ke", "uy"]);
    let uy = r.result_for("uy").unwrap();
    assert!(uy.baseline_defaulted);
    assert_eq!(uy.adjusted_score, 50.0);
}

#[test]
fn smoke_energy_reorders() {
    let (snap, tax) = load();
    let r = snap.rerank(&SectorSelection::parse("energy"), &tax).unwrap();

    // vn has no energy coverage and keeps 61.2; de drops to 51.2
    assert_eq!(order(&r), vec!["vn", "de", "uy", "cl", "ke"]);

    let de = r.result_for("de").unwrap();
    assert!((de.adjusted_score - 51.2).abs() < 1e-9, "de = {}", de.adjusted_score);
    assert_eq!(de.trend, Trend::Stable);

    assert_eq!(r.result_for("vn").unwrap().basis, ScoreBasis::NoSectorMatches);

    // ke's only energy article is unscored → neutral sentiment fallback
    let ke = r.result_for("ke").unwrap();
    assert!((ke.adjusted_score - 41.0).abs() < 1e-9, "ke = {}", ke.adjusted_score);
}

#[test]
fn smoke_mining_favours_chile() {
    let (snap, tax) = load();
    let r = snap.rerank(&SectorSelection::parse("Mining"), &tax).unwrap();
    let cl = r.result_for("cl").unwrap();
    assert_eq!(cl.matched_article_count, 3);
    let expected = 0.5 * 58.9 + 0.5 * (0.5 * 30.0 + 0.5 * ((88.0 + 66.0 + 55.0) / 3.0));
    assert!((cl.adjusted_score - expected).abs() < 1e-9);
    assert_eq!(cl.trend, Trend::Upward);
}

#[test]
fn smoke_ranking_serializes() {
    let (snap, tax) = load();
    let r = snap.rerank(&SectorSelection::parse("energy,mining"), &tax).unwrap();
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["selection"], serde_json::json!(["energy", "mining"]));
    assert_eq!(v["ranked"][0]["position"], serde_json::json!(1));
}
