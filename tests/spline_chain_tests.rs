use approx::assert_abs_diff_eq;
use glam::Vec2;
use spline_editor::{
    Anchor, BezierSampler, HandlePair, HandleSide, SampleForm, Samples, SplineChain, SplineError,
    Vector2,
};

#[test]
fn test_vector_arithmetic_and_errors() {
    let a = Vector2::new(3.0, 4.0);
    let b = Vector2::new(1.0, 1.0);

    assert_eq!(a.add(&b), Vector2::new(4.0, 5.0));
    assert_eq!(a.subtract(Some(&b)), Vector2::new(2.0, 3.0));
    assert_eq!(a.subtract(None), a);
    assert_eq!(a.negate(), Vector2::new(-3.0, -4.0));
    assert_abs_diff_eq!(a.magnitude(), 5.0);
    assert_abs_diff_eq!(a.distance_to(Vec2::ZERO), 5.0);

    let unit = a.normalized().expect("Länge > 0");
    assert_abs_diff_eq!(unit.x, 0.6);
    assert_abs_diff_eq!(unit.y, 0.8);
    assert_eq!(a, Vector2::new(3.0, 4.0));

    assert_eq!(
        Vector2::new(0.0, 0.0).normalized(),
        Err(SplineError::ZeroMagnitude)
    );
    assert_eq!(
        a.slope_to(Vector2::new(3.0, 10.0)),
        Err(SplineError::UndefinedSlope)
    );
    assert_eq!(a.get(2), Err(SplineError::IndexOutOfRange(2)));
}

#[test]
fn test_unpaired_handle_rejects_offset() {
    let mut pair = HandlePair::new();
    assert_eq!(
        pair.set_offset(HandleSide::Next, Vec2::ONE),
        Err(SplineError::Unpaired)
    );

    pair.pair().expect("Paarung sollte klappen");
    pair.set_offset(HandleSide::Next, Vec2::new(2.0, 3.0))
        .expect("Gepaart");
    assert_eq!(pair.prev().offset(), Vec2::new(-2.0, -3.0));
}

#[test]
fn test_chain_sampled_end_to_end() {
    let mut chain = SplineChain::new();
    for (x, y) in [(0.0, 0.0), (100.0, 0.0), (200.0, 100.0), (300.0, 100.0)] {
        chain.push_nearest(Anchor::new(x, y));
    }

    let sampler = BezierSampler::new(16).expect("16 Segmente sind gültig");
    let polylines = chain
        .bezier_polylines(&sampler)
        .expect("Fenster haben immer 4 Punkte");

    assert_eq!(polylines.len(), 3);
    assert!(polylines.iter().all(|p| p.len() == 17));

    // C0 an allen Zwischenankern
    for pair in polylines.windows(2) {
        assert_eq!(
            pair[0].last().map(Vector2::as_vec2),
            pair[1].first().map(Vector2::as_vec2)
        );
    }
}

#[test]
fn test_sample_form_parsing_drives_output() {
    let control = [
        Vector2::new(0.0, 0.0),
        Vector2::new(0.0, 50.0),
        Vector2::new(50.0, 100.0),
        Vector2::new(100.0, 100.0),
    ];
    let sampler = BezierSampler::new(4).expect("gültig");

    let form: SampleForm = "pair".parse().expect("bekannte Form");
    match sampler.sample(&control, form).expect("4 Kontrollpunkte") {
        Samples::Pairs(pairs) => {
            assert_eq!(pairs.len(), 5);
            assert_eq!(pairs[4], [100.0, 100.0]);
        }
        other => panic!("Unerwartete Form: {other:?}"),
    }

    assert!("polar".parse::<SampleForm>().is_err());
}
