use std::collections::VecDeque;

use super::*;
use crate::spawn::rng::SeededRng;

/// Replays scripted draws; `uniform` maps a fraction `t` to `lo + t * (hi - lo)`.
#[derive(Default)]
struct ScriptedRng {
    fractions: VecDeque<f64>,
    picks: VecDeque<usize>,
    chances: VecDeque<bool>,
}

impl SpawnRng for ScriptedRng {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let t = self.fractions.pop_front().unwrap_or(0.5);
        lo + t * (hi - lo)
    }

    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn pick(&mut self, _len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0)
    }
}

#[test]
fn desktop_anchor_44_lands_in_expected_window() {
    let cfg = FieldConfig::default();

    for t in [0.0, 0.25, 0.5, 0.999] {
        let mut rng = ScriptedRng {
            fractions: VecDeque::from(vec![t]),
            picks: VecDeque::from(vec![1]),
            ..Default::default()
        };
        let spawn = sample_tick(&mut rng, &cfg, DeviceClass::Desktop);
        assert_eq!(spawn.anchor.base, 44.0);

        let jitter = cfg.profile(DeviceClass::Desktop).heart_jitter;
        let reach = Span {
            min: spawn.anchor.base - jitter,
            max: spawn.anchor.base + jitter,
        };
        assert_eq!(reach, Span { min: 39.0, max: 49.0 });
        assert!(reach.contains(spawn.heart.left));
        assert!((24.0..=78.0).contains(&spawn.heart.left));
    }
}

#[test]
fn outer_anchor_is_clamped_into_band() {
    let cfg = FieldConfig::default();
    // Anchor 28 with the most negative jitter reaches 23, below the desktop band's 24.
    let mut rng = ScriptedRng {
        fractions: VecDeque::from(vec![0.0]),
        picks: VecDeque::from(vec![0]),
        ..Default::default()
    };
    let spawn = sample_tick(&mut rng, &cfg, DeviceClass::Desktop);
    assert_eq!(spawn.heart.left, 24.0);

    // Anchor 74 pushed right by a full ring jitter (84) clamps to 78.
    let mut rng = ScriptedRng {
        fractions: VecDeque::from(vec![0.5, 0.5, 0.5, 0.5, 0.5, 1.0]),
        picks: VecDeque::from(vec![3]),
        chances: VecDeque::from(vec![true]),
    };
    let spawn = sample_tick(&mut rng, &cfg, DeviceClass::Desktop);
    assert_eq!(spawn.ring.unwrap().left, 78.0);
}

#[test]
fn attributes_follow_configured_ranges() {
    let cfg = FieldConfig::default();
    let mut rng = ScriptedRng {
        // heart jitter, size, duration, opacity, rotate, ring jitter, bottom, duration, scale
        fractions: VecDeque::from(vec![0.5, 0.0, 1.0, 0.5, 0.0, 0.5, 0.0, 1.0, 0.5]),
        picks: VecDeque::from(vec![2]),
        chances: VecDeque::from(vec![true]),
    };
    let spawn = sample_tick(&mut rng, &cfg, DeviceClass::Desktop);

    assert_eq!(spawn.heart.left, 60.0);
    assert_eq!(spawn.heart.size, 10.0);
    assert_eq!(spawn.heart.duration, 6.5);
    assert_eq!(spawn.heart.opacity, 0.8);
    assert_eq!(spawn.heart.rotate, -30.0);

    let ring = spawn.ring.unwrap();
    assert_eq!(ring.left, 60.0);
    assert_eq!(ring.bottom, 12.0);
    assert_eq!(ring.duration, 5.8);
    assert!((ring.scale - 1.05).abs() < 1e-12);
}

#[test]
fn failed_ring_roll_spawns_heart_only() {
    let cfg = FieldConfig::default();
    let mut rng = ScriptedRng::default();
    let spawn = sample_tick(&mut rng, &cfg, DeviceClass::Phone);
    assert!(spawn.ring.is_none());
    assert_eq!(spawn.anchor.base, 32.0);
    assert_eq!(spawn.anchor.band, Span { min: 30.0, max: 70.0 });
}

#[test]
fn seeded_positions_stay_in_band_for_every_class() {
    let cfg = FieldConfig::default();
    let mut rng = SeededRng::new(2024);
    for class in DeviceClass::ALL {
        let band = cfg.clamp_band(class);
        for _ in 0..2000 {
            let spawn = sample_tick(&mut rng, &cfg, class);
            assert!(band.contains(spawn.heart.left));
            assert!((20.0..=80.0).contains(&spawn.heart.left));
            if let Some(ring) = spawn.ring {
                assert!(band.contains(ring.left));
                assert!(cfg.ring.bottom.contains(ring.bottom));
                assert!(cfg.ring.scale.contains(ring.scale));
            }
            assert!(cfg.heart.size.contains(spawn.heart.size));
            assert!(cfg.heart.opacity.contains(spawn.heart.opacity));
            assert!(cfg.heart.rotate.contains(spawn.heart.rotate));
        }
    }
}

#[test]
fn same_seed_reproduces_ticks() {
    let cfg = FieldConfig::default();
    let mut a = SeededRng::new(11);
    let mut b = SeededRng::new(11);
    for _ in 0..50 {
        assert_eq!(
            sample_tick(&mut a, &cfg, DeviceClass::Tablet),
            sample_tick(&mut b, &cfg, DeviceClass::Tablet)
        );
    }
}
