//! Unit tests for brain-core primitives.

#[cfg(test)]
mod ids {
    use crate::BrainId;

    #[test]
    fn index_roundtrip() {
        let id = BrainId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(BrainId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn oversized_index_rejected() {
        assert!(BrainId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(BrainId(7).to_string(), "brain#7");
    }
}

#[cfg(test)]
mod geo {
    use crate::Vec3;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!((b.distance(a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalized_zero_stays_zero() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn direction_to_is_unit() {
        let d = Vec3::new(1.0, 1.0, 1.0).direction_to(Vec3::new(1.0, 11.0, 1.0));
        assert!((d.y - 1.0).abs() < 1e-6);
        assert!((d.length() - 1.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimTime};

    #[test]
    fn sim_time_arithmetic() {
        let t = SimTime(1.5);
        assert_eq!(t + 0.5, SimTime(2.0));
        assert_eq!(SimTime(3.0) - SimTime(1.0), 2.0);
        assert_eq!(SimTime(1.0).since(SimTime(3.0)), -2.0);
    }

    #[test]
    fn clock_advances_scaled() {
        let mut clock = SimClock::new();
        clock.set_time_scale(2.0).unwrap();
        let frame = clock.advance(0.25);
        assert_eq!(frame.frame, 1);
        assert_eq!(frame.dt, 0.5);
        assert_eq!(frame.now, SimTime(0.5));
        assert!(!frame.is_paused());
    }

    #[test]
    fn zero_time_scale_pauses() {
        let mut clock = SimClock::new();
        clock.set_time_scale(0.0).unwrap();
        let frame = clock.advance(1.0);
        assert!(frame.is_paused());
        assert_eq!(frame.dt, 0.0);
        assert_eq!(clock.now(), SimTime::ZERO);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn negative_time_scale_rejected() {
        let mut clock = SimClock::new();
        assert!(clock.set_time_scale(-1.0).is_err());
        assert_eq!(clock.time_scale(), 1.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::{BrainId, BrainRng, CoreError};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = BrainRng::new(12345, BrainId(0));
        let mut r2 = BrainRng::new(12345, BrainId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_brains_differ() {
        let mut r0 = BrainRng::new(1, BrainId(0));
        let mut r1 = BrainRng::new(1, BrainId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b);
    }

    #[test]
    fn duration_between_in_bounds() {
        let mut rng = BrainRng::from_seed(9);
        for _ in 0..1000 {
            let v = rng.duration_between(0.2, 0.8).unwrap();
            assert!((0.2..=0.8).contains(&v));
        }
    }

    #[test]
    fn duration_between_degenerate_and_invalid() {
        let mut rng = BrainRng::from_seed(9);
        assert_eq!(rng.duration_between(0.5, 0.5).unwrap(), 0.5);
        assert_eq!(
            rng.duration_between(2.0, 1.0),
            Err(CoreError::InvalidRange { min: 2.0, max: 1.0 })
        );
        assert!(rng.duration_between(-1.0, 1.0).is_err());
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = BrainRng::from_seed(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod status {
    use crate::StatusFlags;

    #[test]
    fn contains_all_requested() {
        let flags = StatusFlags::STUNNED | StatusFlags::GROUNDED;
        assert!(flags.contains(StatusFlags::STUNNED));
        assert!(!flags.contains(StatusFlags::STUNNED | StatusFlags::DEAD));
        assert!(StatusFlags::default().is_empty());
    }
}
