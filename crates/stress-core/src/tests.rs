use crate::analyzer::{StressAnalyzer, StressStatus};
use crate::error::{ExtractError, PipelineError, RegionError};
use crate::extract::{parse_brain_log, try_parse_brain_log};
use crate::pipeline::{analyze_log, OutOfRangePolicy};
use crate::region::BrainRegion;
use crate::report::{render_report, save_analysis_report};

fn region(name: &str, value: f64) -> BrainRegion {
    BrainRegion::with_activation(name, "Test", value).unwrap()
}

#[test]
fn set_activation_accepts_closed_interval() {
    let mut r = BrainRegion::new("Amygdala", "Fear Center");
    assert_eq!(r.activation(), 0.0);
    r.set_activation(0.0).unwrap();
    r.set_activation(1.0).unwrap();
    assert_eq!(r.activation(), 1.0);
}

#[test]
fn set_activation_rejects_out_of_range_and_keeps_previous() {
    let mut r = BrainRegion::new("Amygdala", "Fear Center");
    r.set_activation(0.3).unwrap();
    let err = r.set_activation(5.0).unwrap_err();
    assert_eq!(
        err,
        RegionError::ActivationOutOfRange {
            region: "Amygdala".into(),
            value: 5.0
        }
    );
    assert!(r.set_activation(-0.1).is_err());
    assert!(r.set_activation(f64::NAN).is_err());
    assert_eq!(r.activation(), 0.3);
}

#[test]
fn info_formats_two_decimals() {
    let r = BrainRegion::with_activation("Amygdala", "Fear Center", 0.85).unwrap();
    assert_eq!(r.info(), "Amygdala (Fear Center): 0.85");
    let r = BrainRegion::with_activation("Hippocampus", "Memory", 1.0).unwrap();
    assert_eq!(r.to_string(), "Hippocampus (Memory): 1.00");
}

#[test]
fn extracts_records_in_input_order() {
    let log = "Region=Amygdala; Role=Fear Center; Activation=0.85\n\
               noise line\n\
               Region=PrefrontalCortex; Role=Reasoning; Activation=0.30";
    let records = parse_brain_log(log);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Amygdala");
    assert_eq!(records[0].role, "Fear Center");
    assert_eq!(records[0].activation, 0.85);
    assert_eq!(records[1].name, "PrefrontalCortex");
    assert_eq!(records[1].activation, 0.30);
}

#[test]
fn duplicate_names_are_kept() {
    let log = "Region=Amygdala; Role=A; Activation=0.1\n\
               Region=Amygdala; Role=B; Activation=0.9";
    let records = parse_brain_log(log);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].role, "B");
}

#[test]
fn unparseable_activation_is_skipped() {
    let log = "Region=Amygdala; Role=Fear; Activation=.\n\
               Region=Hippocampus; Role=Memory; Activation=0.4";
    let records = try_parse_brain_log(log).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Hippocampus");
}

#[test]
fn no_matches_is_an_error() {
    assert!(matches!(
        try_parse_brain_log("nothing to see here"),
        Err(ExtractError::NoMatches)
    ));
    assert!(parse_brain_log("").is_empty());
}

#[test]
fn missing_regions_use_safe_defaults() {
    let signals = StressAnalyzer::signals(&[]);
    assert!(!signals.amygdala_active);
    assert!(!signals.prefrontal_low);
    assert!(!signals.hippocampus_low);
    assert_eq!(StressAnalyzer::status(&[region("Amygdala", 0.9)]), StressStatus::Normal);
}

#[test]
fn hippocampus_alone_completes_the_rule() {
    let regions = [region("Amygdala", 0.8), region("Hippocampus", 0.49)];
    let signals = StressAnalyzer::signals(&regions);
    assert!(signals.amygdala_active);
    assert!(!signals.prefrontal_low);
    assert!(signals.hippocampus_low);
    assert_eq!(StressAnalyzer::status(&regions), StressStatus::Stressed);
}

#[test]
fn last_duplicate_wins() {
    let regions = [
        region("Amygdala", 0.9),
        region("PrefrontalCortex", 0.1),
        region("Amygdala", 0.2),
    ];
    assert_eq!(StressAnalyzer::status(&regions), StressStatus::Normal);
}

#[test]
fn report_line_carries_status() {
    let regions = [region("Amygdala", 0.9), region("PrefrontalCortex", 0.1)];
    assert_eq!(StressAnalyzer::report(&regions), "Status Deteksi Stres: STRESSED");
}

#[test]
fn render_report_layout() {
    let regions = [
        BrainRegion::with_activation("Amygdala", "Fear Center", 0.85).unwrap(),
        BrainRegion::with_activation("PrefrontalCortex", "Reasoning", 0.3).unwrap(),
    ];
    let text = render_report(&regions, "Status Deteksi Stres: STRESSED");
    assert_eq!(
        text,
        "--- Laporan Aktivasi Otak ---\n\
         Amygdala (Fear Center): 0.85\n\
         PrefrontalCortex (Reasoning): 0.30\n\
         \n\
         Status Deteksi Stres: STRESSED\n"
    );
}

#[test]
fn save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    std::fs::write(&path, "old content that is much longer than the new report body\n".repeat(5))
        .unwrap();

    let regions = [region("Amygdala", 0.5)];
    save_analysis_report(&regions, "Status Deteksi Stres: NORMAL", &path);

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(saved, render_report(&regions, "Status Deteksi Stres: NORMAL"));
}

#[test]
fn save_failure_does_not_propagate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.txt");
    save_analysis_report(&[region("Amygdala", 0.5)], "Status Deteksi Stres: NORMAL", &path);
    assert!(!path.exists());
}

#[test]
fn out_of_range_policy_reject_fails_analysis() {
    let log = "Region=Amygdala; Role=Fear; Activation=5.0\n\
               Region=Hippocampus; Role=Memory; Activation=0.4";
    let err = analyze_log(log, OutOfRangePolicy::Reject).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Region(RegionError::ActivationOutOfRange { .. })
    ));
}

#[test]
fn out_of_range_policy_skip_drops_record() {
    let log = "Region=Amygdala; Role=Fear; Activation=5.0\n\
               Region=Hippocampus; Role=Memory; Activation=0.4";
    let analysis = analyze_log(log, OutOfRangePolicy::Skip).unwrap();
    assert_eq!(analysis.regions.len(), 1);
    assert_eq!(analysis.regions[0].name(), "Hippocampus");

    let only_bad = "Region=Amygdala; Role=Fear; Activation=2";
    assert_eq!(
        analyze_log(only_bad, OutOfRangePolicy::Skip),
        Err(PipelineError::InvalidLog)
    );
}

#[test]
fn display_text_joins_info_and_status() {
    let analysis = analyze_log(
        "Region=Amygdala; Role=Fear Center; Activation=0.50",
        OutOfRangePolicy::Reject,
    )
    .unwrap();
    assert_eq!(
        analysis.display_text(),
        "Amygdala (Fear Center): 0.50\n\nStatus Deteksi Stres: NORMAL"
    );
}
