//! Integration Tests for the Evaluation Pass
//!
//! Anomaly -> risk -> alerts over whole fleets, with the stores in the loop.

#[cfg(test)]
mod integration_tests {
    use chrono::Utc;

    use crate::logic::alert::AlertKind;
    use crate::logic::anomaly::AnomalyStatus;
    use crate::logic::config::EngineConfig;
    use crate::logic::engine::{evaluate, evaluate_with};
    use crate::logic::fleet::{Fleet, FleetStore, MemoryFleetStore, SqliteFleetStore};
    use crate::logic::geo::{default_boundary, GeoPoint, MaritimeBoundary};
    use crate::logic::trajectory::Trajectory;
    use crate::logic::vessel::{advance_all, seed_fleet, VesselState};

    fn vessel(id: &str, speed: f64, lat: f64, lon: f64, friendly: bool) -> VesselState {
        VesselState::new(id, GeoPoint::new(lat, lon), speed, 63.0, 0.0, friendly).unwrap()
    }

    /// Hostile V1 speeding through the Arabian Sea zone on a crossing course
    #[test]
    fn test_end_to_end_three_alerts_in_order() {
        let v1 = vessel("V1", 20.0, 2.0, 68.0, false)
            .with_trajectory(Trajectory::from(vec![[2.0, 68.0], [2.5, 69.0]]));
        let boundary = MaritimeBoundary::new("test", vec![GeoPoint::new(2.0, 69.0), GeoPoint::new(2.5, 68.0)])
            .with_alert_label("Indian maritime boundary");

        let result = evaluate(Fleet::from_vessels(vec![v1]), &boundary, 0.0);

        let kinds: Vec<AlertKind> = result.alerts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![AlertKind::Speed, AlertKind::Piracy, AlertKind::BoundaryViolation]
        );
        assert_eq!(result.alerts[1].zone.as_deref(), Some("Arabian Sea"));
        assert!(result.alerts[2].message.ends_with("at 20.0 knots"));
    }

    #[test]
    fn test_single_vessel_anomaly_unknown() {
        let fleet = Fleet::from_vessels(vec![vessel("V1", 20.0, 2.0, 68.0, true)]);
        let result = evaluate(fleet, &default_boundary(), 0.0);

        let v = result.fleet.get("V1").unwrap();
        assert_eq!(v.anomaly, Some(AnomalyStatus::Unknown));
        // speed + zone, no anomaly term
        assert_eq!(v.risk_score, Some(70));
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].vessel_id.is_none());
    }

    #[test]
    fn test_empty_fleet_is_harmless() {
        let result = evaluate(Fleet::new(), &default_boundary(), 0.0);
        assert!(result.fleet.is_empty());
        assert!(result.alerts.is_empty());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_friendly_never_boundary_alert() {
        let friendly = vessel("F1", 15.0, 12.0, 48.0, true)
            .with_trajectory(Trajectory::from(vec![[5.0, 80.0], [3.0, 80.0]]));
        let other = vessel("F2", 8.0, 20.0, 70.0, true);
        let result = evaluate(Fleet::from_vessels(vec![friendly, other]), &default_boundary(), 0.0);

        let kinds: Vec<AlertKind> = result.alerts_for("F1").map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AlertKind::Speed, AlertKind::Piracy]);
        assert!(result.alerts.iter().all(|a| a.kind != AlertKind::BoundaryViolation));
    }

    #[test]
    fn test_speed_filter_limits_alerts_not_scoring() {
        let fast = vessel("FAST", 15.0, 12.0, 48.0, true);
        let slow = vessel("SLOW", 5.0, 12.5, 48.5, true);
        let result = evaluate(Fleet::from_vessels(vec![fast, slow]), &default_boundary(), 10.0);

        assert!(result.alerts_for("SLOW").next().is_none());
        assert_eq!(result.alerts_for("FAST").count(), 2);
        assert!(result.fleet.get("SLOW").unwrap().risk_score.is_some());
        let visible: Vec<&str> = result.visible().map(|v| v.id.as_str()).collect();
        assert_eq!(visible, vec!["FAST"]);
    }

    #[test]
    fn test_pass_is_deterministic() {
        let fleet = Fleet::from_vessels(seed_fleet(1_700_000_000.0, 42));
        let config = EngineConfig::default();
        let now = Utc::now();

        let a = evaluate_with(fleet.clone(), &config, 0.0, now);
        let b = evaluate_with(fleet, &config, 0.0, now);

        let scores = |e: &crate::logic::engine::Evaluation| -> Vec<(String, Option<AnomalyStatus>, Option<u8>)> {
            e.fleet.iter().map(|v| (v.id.clone(), v.anomaly, v.risk_score)).collect()
        };
        assert_eq!(scores(&a), scores(&b));
        assert_eq!(a.alerts.len(), b.alerts.len());
        for (x, y) in a.alerts.iter().zip(b.alerts.iter()) {
            assert!(x.same_event(y));
        }
    }

    #[test]
    fn test_seeded_fleet_invariants() {
        let mut fleet = Fleet::new();
        for v in seed_fleet(1_700_000_000.0, 42) {
            fleet.register(v, 60.0).unwrap();
        }
        let result = evaluate(fleet, &default_boundary(), 0.0);

        assert_eq!(result.fleet.len(), 10);
        for v in result.fleet.iter() {
            let score = v.risk_score.unwrap();
            assert!(score <= 100);
            assert!(matches!(v.anomaly, Some(AnomalyStatus::Normal) | Some(AnomalyStatus::Anomalous)));
            assert!(v.trajectory.as_ref().unwrap().len() >= 2);
        }
        assert!(result.anomalous_count() <= 1);
        assert!(result.warnings.is_empty());

        // At most one alert of each kind per vessel
        for v in result.fleet.iter() {
            let mut kinds: Vec<AlertKind> = result.alerts_for(&v.id).map(|a| a.kind).collect();
            let before = kinds.len();
            kinds.dedup();
            assert_eq!(kinds.len(), before);
        }
    }

    #[test]
    fn test_sqlite_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SqliteFleetStore::open(&dir.path().join("vessel_data.db")).unwrap();
        store.upsert_all(&seed_fleet(1_700_000_000.0, 42)).unwrap();

        for _ in 0..3 {
            let mut vessels = store.load_fleet().unwrap();
            advance_all(&mut vessels, 60.0);
            store.upsert_all(&vessels).unwrap();

            let result = evaluate(Fleet::from_vessels(vessels), &default_boundary(), 0.0);
            assert_eq!(result.fleet.len(), 10);
            assert!(result.fleet.iter().all(|v| v.risk_score.is_some()));
        }

        let reloaded = store.load_fleet().unwrap();
        assert!(reloaded.iter().all(|v| v.timestamp >= 1_700_000_000.0 - 9.0 * 300.0 + 180.0));
        assert!(reloaded.iter().all(|v| v.anomaly.is_none()));
    }

    #[test]
    fn test_ticks_carry_stored_trajectories() {
        let mut store = SqliteFleetStore::open_in_memory().unwrap();
        store.upsert_all(&seed_fleet(1_700_000_000.0, 42)).unwrap();

        let mut fleet = Fleet::from_vessels(store.load_fleet().unwrap());
        let patrol = vessel("PATROL", 20.0, 2.0, 68.0, false);
        fleet.register(patrol, 60.0).unwrap();
        let projected = fleet.get("PATROL").unwrap().trajectory.clone();
        store.upsert_vessel(fleet.get("PATROL").unwrap()).unwrap();

        for _ in 0..3 {
            let mut vessels = store.load_fleet().unwrap();
            advance_all(&mut vessels, 60.0);
            store.upsert_all(&vessels).unwrap();
            let result = evaluate(Fleet::from_vessels(vessels), &default_boundary(), 0.0);
            assert_eq!(result.fleet.len(), 11);
        }

        let reloaded = store.load_fleet().unwrap();
        assert_eq!(reloaded.len(), 11);
        for v in &reloaded {
            if v.id == "PATROL" {
                let stored = v.trajectory.as_ref().unwrap().points();
                let expected = projected.as_ref().unwrap().points();
                assert_eq!(stored.len(), expected.len());
                for (a, b) in stored.iter().zip(expected) {
                    assert!((a.lat - b.lat).abs() < 1e-9 && (a.lon - b.lon).abs() < 1e-9);
                }
            } else {
                assert!(v.trajectory.is_none(), "{} gained a trajectory", v.id);
            }
        }
    }

    #[test]
    fn test_degenerate_trajectory_warning_reaches_pass() {
        let mut stray = vessel("STRAY", 8.0, 20.0, 78.0, false);
        stray.trajectory = Some(Trajectory::from(vec![[20.0, 78.0]]));
        let other = vessel("OTHER", 9.0, 21.0, 79.0, true);

        let result = evaluate(Fleet::from_vessels(vec![stray, other]), &default_boundary(), 0.0);

        assert!(result.alerts_for("STRAY").next().is_none());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].vessel_id.as_deref(), Some("STRAY"));
        assert!(result.fleet.get("STRAY").unwrap().risk_score.is_some());
    }

    #[test]
    fn test_removed_vessel_drops_out() {
        let mut store = MemoryFleetStore::new();
        store.upsert_all(&seed_fleet(1_700_000_000.0, 3)).unwrap();
        assert!(store.delete_vessel("VESSEL001").unwrap());

        let result = evaluate(Fleet::from_vessels(store.load_fleet().unwrap()), &default_boundary(), 0.0);
        assert_eq!(result.fleet.len(), 9);
        assert!(result.alerts_for("VESSEL001").next().is_none());
    }
}
