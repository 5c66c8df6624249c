use std::time::Duration;

use chartmorph_chart_model::sample::Sample;
use chartmorph_common::clock::{AnimationClock, FrameTicker};
use chartmorph_curve_engine::builder::{build_curve, Curve};
use chartmorph_curve_engine::layout::ChartLayout;
use chartmorph_curve_engine::preview::simulate_morph;
use chartmorph_curve_engine::transition::{TransitionConfig, TransitionEngine, TransitionState};

fn fixture_curve(values: &[f64; 12]) -> Curve {
    let samples: Vec<Sample> = values
        .iter()
        .enumerate()
        .map(|(month, &value)| Sample::new(month as u32, value))
        .collect();
    build_curve(&samples, &ChartLayout::default()).expect("fixture samples should fit")
}

fn fixture_pair() -> (Curve, Curve) {
    (
        fixture_curve(&[
            4500.0, 6200.0, 5100.0, 7300.0, 8100.0, 7600.0, 6900.0, 7200.0, 8400.0, 9100.0,
            9700.0, 5800.0,
        ]),
        fixture_curve(&[
            5200.0, 4800.0, 6500.0, 7900.0, 9200.0, 11800.0, 10400.0, 9800.0, 9100.0, 8600.0,
            9400.0, 12100.0,
        ]),
    )
}

fn fnv1a_64(input: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in input.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

fn morph_signature() -> (usize, u64) {
    let (from, to) = fixture_pair();
    let frames = simulate_morph(&from, &to, &TransitionConfig::default(), 30.0)
        .expect("fixture morph should simulate");

    let signature = frames
        .iter()
        .map(|frame| {
            format!(
                "{:.3}|{:.6}|{}",
                frame.time_secs,
                frame.progress,
                frame.path.to_svg()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    (frames.len(), fnv1a_64(&signature))
}

#[test]
fn morph_fixture_signature_is_deterministic() {
    let (len_a, sig_a) = morph_signature();
    let (len_b, sig_b) = morph_signature();

    // 500 ms at 30 fps: the 33.33 ms step lands 5 ns short of the
    // deadline on frame 15, so 16 animating frames plus the settled one.
    assert_eq!(len_a, 17);
    assert_eq!(len_a, len_b);
    assert_eq!(sig_a, sig_b);
}

#[test]
fn morph_fixture_brackets_endpoints_exactly() {
    let (from, to) = fixture_pair();
    let frames = simulate_morph(&from, &to, &TransitionConfig::default(), 30.0)
        .expect("fixture morph should simulate");

    assert_eq!(frames.first().unwrap().path, *from.path());
    assert_eq!(frames.last().unwrap().path, *to.path());

    // Value bounds travel with each curve for axis labeling.
    assert_eq!(from.value_min(), 4500.0);
    assert_eq!(from.value_max(), 9700.0);
    assert_eq!(to.value_max(), 12100.0);
}

#[test]
fn engine_settles_under_wall_clock() {
    let (from, to) = fixture_pair();
    let target = to.path().clone();

    let config = TransitionConfig {
        duration: Duration::from_millis(10),
        ..Default::default()
    };
    let mut engine = TransitionEngine::new(vec![from, to], 0, config).expect("engine");

    let clock = AnimationClock::start();
    let mut ticker = FrameTicker::new(240);

    engine.start_transition(1, clock.elapsed_ns()).expect("start");
    while engine.state() != TransitionState::Idle {
        assert!(clock.elapsed_secs() < 2.0, "transition never settled");
        let now_ns = clock.elapsed_ns();
        if ticker.should_tick(now_ns) {
            engine.tick(now_ns).expect("tick");
        }
    }

    assert_eq!(engine.current_curve_id(), 1);
    assert_eq!(engine.display_path(), &target);
}
