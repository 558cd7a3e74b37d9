//! Unit tests for reach-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod point {
    use crate::FieldPoint;

    #[test]
    fn zero_distance() {
        let p = FieldPoint::new(-12.5, 33.0);
        assert_eq!(p.distance_to(p), 0.0);
    }

    #[test]
    fn pythagorean_triple() {
        let a = FieldPoint::new(0.0, 0.0);
        let b = FieldPoint::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn distance_symmetric() {
        let a = FieldPoint::new(-7.0, 2.0);
        let b = FieldPoint::new(11.0, -5.5);
        assert_eq!(a.distance_to(b), b.distance_to(a));
    }
}

#[cfg(test)]
mod grid {
    use crate::{ConfigError, GridConfig};

    #[test]
    fn recentering_is_symmetric() {
        let grid = GridConfig::new(100, 70);
        // Leftmost column lands at −width/2, one past the rightmost at +width/2.
        assert_eq!(grid.field_point(0, 0).x, -50.0);
        assert_eq!(grid.field_point(99, 0).x, 49.0);
        // y is not recentered.
        assert_eq!(grid.field_point(0, 0).y, 0.0);
        assert_eq!(grid.field_point(0, 69).y, 69.0);
    }

    #[test]
    fn scale_divides_coordinates_only() {
        let grid = GridConfig { width: 100, height: 70, scale_factor: 2, workers: None };
        assert_eq!(grid.field_point(0, 0).x, -25.0);
        assert_eq!(grid.field_point(0, 10).y, 5.0);
        // Cell count is untouched by scale.
        assert_eq!(grid.total_cells(), 7_000);
    }

    #[test]
    fn validate_accepts_positive_config() {
        assert!(GridConfig::new(1, 1).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let mut grid = GridConfig::new(0, 70);
        assert_eq!(
            grid.validate(),
            Err(ConfigError::ZeroDimension { what: "width" })
        );
        grid = GridConfig::new(100, 0);
        assert_eq!(
            grid.validate(),
            Err(ConfigError::ZeroDimension { what: "height" })
        );
        grid = GridConfig { width: 100, height: 70, scale_factor: 0, workers: None };
        assert_eq!(
            grid.validate(),
            Err(ConfigError::ZeroDimension { what: "scale factor" })
        );
    }

    #[test]
    fn validate_rejects_zero_workers() {
        let grid = GridConfig { width: 10, height: 10, scale_factor: 1, workers: Some(0) };
        assert_eq!(grid.validate(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn worker_count_uses_configured_value() {
        let grid = GridConfig { width: 10, height: 10, scale_factor: 1, workers: Some(3) };
        assert_eq!(grid.worker_count(), 3);
    }

    #[test]
    fn worker_count_defaults_to_at_least_one() {
        let grid = GridConfig::new(10, 10);
        assert!(grid.worker_count() >= 1);
    }
}

#[cfg(test)]
mod agent {
    use crate::{sample_population, AgentId, SampleBounds, SimRng};

    #[test]
    fn sample_within_bounds() {
        let bounds = SampleBounds::default();
        let mut rng = SimRng::new(7);
        for agent in sample_population(100, &bounds, &mut rng) {
            assert!(bounds.x.contains(&agent.pos.x));
            assert!(bounds.y.contains(&agent.pos.y));
            assert!(bounds.vel.contains(&agent.vel.vx));
            assert!(bounds.vel.contains(&agent.vel.vy));
            assert!(bounds.max_speed.contains(&agent.max_speed));
            assert!(bounds.max_accel.contains(&agent.max_accel));
        }
    }

    #[test]
    fn sample_ids_are_sequential() {
        let mut rng = SimRng::new(7);
        let agents = sample_population(5, &SampleBounds::default(), &mut rng);
        for (i, agent) in agents.iter().enumerate() {
            assert_eq!(agent.id, AgentId(i as u32));
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let bounds = SampleBounds::default();
        let a = sample_population(20, &bounds, &mut SimRng::new(99));
        let b = sample_population(20, &bounds, &mut SimRng::new(99));
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(-50.0f64..50.0);
            assert!((-50.0..50.0).contains(&v));
        }
    }
}
