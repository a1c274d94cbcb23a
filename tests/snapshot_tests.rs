//! Snapshot tests for rendered reports.
//!
//! Uses insta to capture the plain-text tables for a reference palette.
//! Assumes current rendering is correct - these tests detect regressions.

use contrastly::analysis::{AnalyzeOptions, PairsRequest, analyze_palette, pairs_report};
use contrastly::cli::{matrix_table, pairs_table};
use contrastly::wcag::Level;

const PALETTE: [&str; 4] = ["#0EA5E9", "#111827", "#F9FAFB", "#F97316"];

fn request(level: Level) -> PairsRequest {
    PairsRequest::new(PALETTE.iter().map(|c| c.to_string()).collect(), level)
}

#[test]
fn snapshot_pairs_aa_normal() {
    let report = pairs_report(&request(Level::AaNormal)).unwrap();
    insta::assert_snapshot!("pairs_aa_normal", pairs_table(&report));
}

#[test]
fn snapshot_pairs_aaa_normal() {
    let report = pairs_report(&request(Level::AaaNormal)).unwrap();
    insta::assert_snapshot!("pairs_aaa_normal", pairs_table(&report));
}

#[test]
fn snapshot_matrix() {
    let analysis = analyze_palette(&PALETTE, AnalyzeOptions::default()).unwrap();
    insta::assert_snapshot!("matrix", matrix_table(&analysis));
}
