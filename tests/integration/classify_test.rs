//! Integration tests for band calculation, expansion and classification

use super::{expanding_closes, history};
use bandwatch::bands::compute_bands;
use bandwatch::signal::{classify, is_expanding, Signal, SignalClassifier, SignalParams};

#[test]
fn test_short_history_never_signals() {
    for len in 0..21 {
        let closes: Vec<f64> = (0..len).map(|i| 150.0 + (i % 3) as f64).collect();
        let samples = history(&closes);
        for price in [0.0, 140.0, 150.0, 160.0, 1e6] {
            assert_eq!(classify(&samples, price), Signal::None);
        }
    }
}

#[test]
fn test_identical_closes_never_expand() {
    for len in [21, 30, 200] {
        let samples = history(&vec![150.0; len]);
        assert!(!is_expanding(&samples, 5));
        assert!(compute_bands(&samples, 21)
            .widths()
            .iter()
            .flatten()
            .all(|&w| w == 0.0));
    }
}

#[test]
fn test_flat_scenario_is_none() {
    let samples = history(&[150.0; 21]);
    assert_eq!(classify(&samples, 150.0), Signal::None);
}

#[test]
fn test_compute_bands_bit_identical() {
    let samples = history(&expanding_closes());
    let first = compute_bands(&samples, 21);
    let second = compute_bands(&samples, 21);

    for i in 0..samples.len() {
        assert_eq!(
            first.upper_inner[i].map(f64::to_bits),
            second.upper_inner[i].map(f64::to_bits)
        );
        assert_eq!(
            first.lower_outer[i].map(f64::to_bits),
            second.lower_outer[i].map(f64::to_bits)
        );
    }
}

#[test]
fn test_band_ordering_on_expanding_history() {
    let samples = history(&expanding_closes());
    let bands = compute_bands(&samples, 21);

    for i in 20..samples.len() {
        let b = bands.at(i).unwrap();
        assert!(b.upper_outer >= b.upper_inner);
        assert!(b.upper_inner >= b.lower_inner);
        assert!(b.lower_inner >= b.lower_outer);
    }
}

#[test]
fn test_expanding_scenario_buy() {
    let samples = history(&expanding_closes());
    assert!(is_expanding(&samples, 5));

    let latest = compute_bands(&samples, 21).latest().unwrap();
    let price = latest.lower_outer + (latest.lower_inner - latest.lower_outer) * 0.5;
    assert_eq!(classify(&samples, price), Signal::Buy);
}

#[test]
fn test_expanding_scenario_lower_inner_boundary() {
    let samples = history(&expanding_closes());
    let latest = compute_bands(&samples, 21).latest().unwrap();
    assert_eq!(classify(&samples, latest.lower_inner), Signal::None);
}

#[test]
fn test_expanding_scenario_sell_with_wider_scale() {
    let samples = history(&expanding_closes());
    let latest = compute_bands(&samples, 21).latest().unwrap();
    let price = latest.upper_inner + (latest.upper_outer - latest.upper_inner) * 0.9;

    // Default divisor puts the threshold beyond the outer band
    assert_eq!(classify(&samples, price), Signal::None);

    let classifier = SignalClassifier::new(SignalParams {
        sell_zone_scale: 1.5,
        ..Default::default()
    });
    assert_eq!(classifier.classify(&samples, price), Signal::Sell);
}

#[test]
fn test_buy_and_sell_zones_disjoint() {
    let samples = history(&expanding_closes());
    let latest = compute_bands(&samples, 21).latest().unwrap();
    let classifier = SignalClassifier::new(SignalParams {
        sell_zone_scale: 1.5,
        ..Default::default()
    });

    let low = latest.lower_outer - 1.0;
    let high = latest.upper_outer + 1.0;
    let steps = 2000;
    for step in 0..=steps {
        let price = low + (high - low) * step as f64 / steps as f64;
        match classifier.classify(&samples, price) {
            Signal::Buy => assert!(price > latest.lower_outer && price < latest.lower_inner),
            Signal::Sell => assert!(price > latest.upper_inner && price < latest.upper_outer),
            Signal::None => {}
        }
    }
}

#[test]
fn test_long_flat_prefix_still_expands() {
    let mut closes = vec![150.0; 180];
    closes.extend(expanding_closes().into_iter().skip(21));
    let samples = history(&closes);
    assert!(is_expanding(&samples, 5));
}
