// Greenhouse - Rule-based greenhouse decision support
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Integration tests for the decision pipeline.
//!
//! These tests drive whole sessions through the public API and check the
//! behavioural guarantees of the rule set.

use approx::assert_relative_eq;
use greenhouse::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Rows in (temperature, humidity, co2, soil_moisture, light) order.
const BASELINE_ROWS: [[f64; 5]; 10] = [
    [28.0, 0.45, 800.0, 0.45, 400.0],
    [36.0, 0.20, 1300.0, 0.25, 1200.0],
    [38.0, 0.15, 1400.0, 0.20, 1300.0],
    [33.0, 0.60, 600.0, 0.75, 200.0],
    [35.0, 0.30, 1100.0, 0.32, 850.0],
    [31.0, 0.42, 900.0, 0.40, 600.0],
    [37.0, 0.22, 1250.0, 0.28, 1150.0],
    [34.0, 0.35, 1000.0, 0.48, 750.0],
    [38.0, 0.18, 1350.0, 0.22, 1250.0],
    [30.0, 0.50, 850.0, 0.55, 500.0],
];

fn row(r: [f64; 5]) -> SensorReading {
    SensorReading::new(r[0], r[1], r[4], r[3], r[2]).unwrap()
}

fn with_moisture(moisture: f64) -> SensorReading {
    SensorReading::new(28.0, 0.5, 600.0, moisture, 800.0).unwrap()
}

fn new_session() -> SimulationSession {
    SimulationSession::new(RuleConfig::default()).unwrap()
}

// ============================================================================
// Section 1: Rule properties
// ============================================================================

#[test]
fn test_wet_soil_skips_for_any_weather() {
    let config = WateringConfig::default();
    let mut moisture = 0.705;
    while moisture <= 1.0 {
        for temp in [5.0, 25.0, 36.5, 45.0] {
            for hum in [0.05, 0.39, 0.8] {
                let d = evaluate_watering(moisture, temp, hum, &config);
                assert_eq!(d.action, WateringAction::Skip);
            }
        }
        moisture += 0.01;
    }
}

#[test]
fn test_shading_partition_has_no_gaps() {
    let config = ShadingConfig::default();
    let mut lux = 0.0;
    while lux <= 1600.0 {
        let action = evaluate_shading(lux, &config);
        let expected = if lux < 300.0 {
            ShadingAction::Open
        } else if lux <= 800.0 {
            ShadingAction::None
        } else if lux <= 1000.0 {
            ShadingAction::Partial
        } else {
            ShadingAction::Full
        };
        assert_eq!(action, expected, "lux = {}", lux);
        lux += 0.5;
    }
}

#[test]
fn test_evaluation_is_idempotent() {
    let config = RuleConfig::default();
    for r in BASELINE_ROWS {
        let reading = row(r);
        assert_eq!(evaluate(&reading, &config), evaluate(&reading, &config));
    }
}

#[test]
fn test_baseline_alerts() {
    let config = RuleConfig::default();
    let alerts: Vec<bool> = BASELINE_ROWS
        .iter()
        .map(|r| evaluate(&row(*r), &config).alert.alert)
        .collect();
    assert_eq!(
        alerts,
        vec![false, true, true, false, false, false, true, false, true, false]
    );
}

// ============================================================================
// Section 2: Escalation
// ============================================================================

#[test]
fn test_consecutive_alerts_escalate() {
    let mut session = new_session();
    let normal = row([30.0, 0.5, 800.0, 0.4, 900.0]);
    let first = row([37.0, 0.2, 1300.0, 0.2, 1200.0]);
    let second = row([38.0, 0.2, 1400.0, 0.2, 1300.0]);

    assert!(!session.step(normal).decision.alert_triggered);

    let r = session.step(first);
    assert!(r.decision.alert_triggered);
    assert!(!r.decision.critical_flag);

    let r = session.step(second);
    assert!(r.decision.critical_flag);
    assert_eq!(r.decision.consecutive_alerts, 2);

    let r = session.step(normal);
    assert!(!r.decision.alert_triggered);
    assert_eq!(r.decision.consecutive_alerts, 0);
}

#[test]
fn test_interrupted_alerts_do_not_escalate() {
    let mut session = new_session();
    let risky = row([38.0, 0.18, 1350.0, 0.22, 1250.0]);
    let normal = row([28.0, 0.45, 800.0, 0.45, 400.0]);

    let flags: Vec<bool> = session
        .run(vec![risky, normal, risky])
        .iter()
        .map(|r| r.decision.critical_flag)
        .collect();
    assert_eq!(flags, vec![false, false, false]);
}

// ============================================================================
// Section 3: Trend tracking
// ============================================================================

#[test]
fn test_drying_trend_average() {
    let mut session = new_session();
    let reports = session.run([0.65, 0.55, 0.45, 0.32].map(with_moisture));
    let last = reports.last().unwrap();

    assert_relative_eq!(last.trend.moving_average, 0.44, epsilon = 1e-9);
    assert_eq!(last.trend.trend, Trend::Stable);
    assert_eq!(last.trend.samples, 3);
    assert_eq!(last.recommendation.schedule, WateringSchedule::Regular);
}

#[test]
fn test_drying_continues_to_decreasing() {
    let mut session = new_session();
    let reports = session.run([0.65, 0.55, 0.45, 0.32, 0.28, 0.25].map(with_moisture));
    let trends: Vec<Trend> = reports.iter().map(|r| r.trend.trend).collect();
    assert_eq!(trends[0], Trend::Increasing);
    assert_eq!(trends[2], Trend::Stable);
    assert_eq!(trends[3], Trend::Stable);
    assert_eq!(trends[5], Trend::Decreasing);
    assert_eq!(
        reports[5].recommendation.schedule,
        WateringSchedule::Frequent
    );
}

// ============================================================================
// Section 4: Summary and reports
// ============================================================================

#[test]
fn test_summary_after_baseline_run() {
    let mut session = new_session();
    session.run(BASELINE_ROWS.map(row));
    let summary = session.summary();

    assert_eq!(summary.intervals, 10);
    assert_eq!(summary.alert_intervals, 4);
    // rows 2 and 3 are consecutive alerts
    assert_eq!(summary.critical_intervals, 1);
    assert_eq!(summary.recent.len(), 5);

    let trend = summary.trend.unwrap();
    assert_relative_eq!(trend.moving_average, (0.48 + 0.22 + 0.55) / 3.0, epsilon = 1e-12);
}

#[test]
fn test_report_serializes() {
    let mut session = new_session();
    let report = session.step(row(BASELINE_ROWS[2]));
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"interval\":1"));
    assert!(json.contains("\"watering_action\":\"full\""));
    assert!(json.contains("\"shading_level\":\"full\""));
    assert!(json.contains("High CO2 (>1200 ppm)"));
}

#[test]
fn test_config_from_json() {
    let json = r#"{ "alert": { "min_conditions": 2 }, "escalation": { "critical_after": 1 } }"#;
    let config: RuleConfig = serde_json::from_str(json).unwrap();
    let mut session = SimulationSession::new(config).unwrap();

    // two breaches: high temperature and low soil moisture
    let r = session.step(row([37.0, 0.5, 800.0, 0.2, 900.0]));
    assert!(r.decision.alert_triggered);
    assert!(r.decision.critical_flag);
}
