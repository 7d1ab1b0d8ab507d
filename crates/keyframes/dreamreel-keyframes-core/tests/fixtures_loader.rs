use dreamreel_keyframes_core::{
    load_keyframes_json, parse_keyframes_json, Config, Interpolator, Keyframe,
};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn load(name: &str) -> Interpolator {
    let json = dreamreel_test_fixtures::keyframes::json(name)
        .unwrap_or_else(|e| panic!("load {name} fixture: {e:#}"));
    load_keyframes_json(&json, &Config::default()).expect("build interpolator from fixture")
}

#[test]
fn every_fixture_builds() {
    for key in dreamreel_test_fixtures::keyframes::keys() {
        let interp = load(&key);
        assert!(interp.len() >= 1, "{key}");
        assert!(interp.field_count() >= 1, "{key}");
    }
}

#[test]
fn serde_and_loader_agree() {
    let json = dreamreel_test_fixtures::keyframes::json("sparse-fields").unwrap();
    let via_loader = parse_keyframes_json(&json).unwrap();
    let via_serde: Vec<Keyframe> = dreamreel_test_fixtures::keyframes::load("sparse-fields").unwrap();
    assert_eq!(via_loader, via_serde);
}

#[test]
fn scenarios_from_fixtures() {
    let single = load("single-frame");
    assert_eq!(single.sample(-1000.0)["x"], 5.0);
    assert_eq!(single.sample(900.0)["x"], 5.0);

    let two = load("two-frames");
    assert_eq!(two.sample(1.5)["x"], 7.5);
    assert_eq!(two.sample(0.5)["x"], 5.0);
    assert_eq!(two.sample(2.1)["x"], 10.0);

    let three = load("three-frames");
    assert_eq!(three.sample(1.5)["x"], 7.5);
    approx(three.sample(2.5)["x"], 5.0, 1e-9);
    assert_eq!(three.sample(3.0)["x"], 0.0);

    let sparse = load("sparse-fields");
    let at = |t: f64| -> Vec<f64> { sparse.sample(t).values().copied().collect() };
    assert_eq!(at(-1.0), [1.0, 2.0, 3.0, 6.0]);
    assert_eq!(at(0.5), [1.5, 2.0, 3.0, 6.0]);
    assert_eq!(at(1.5), [2.0, 3.0, 4.0, 6.0]);
    assert_eq!(at(3.0), [2.0, 4.0, 5.0, 6.0]);
}

#[test]
fn title_to_carousel_timeline() {
    let interp = load("title-to-carousel");
    let names: Vec<&str> = interp.field_names().collect();
    assert_eq!(
        names,
        [
            "title_opacity",
            "camera_z",
            "camera_y",
            "carousel_opacity",
            "carousel_spin"
        ]
    );

    let start = interp.sample(0.0);
    assert_eq!(start["title_opacity"], 1.0);
    assert_eq!(start["carousel_opacity"], 0.0);
    // Introduced on the last keyframe, present from the start.
    approx(start["carousel_spin"], std::f64::consts::FRAC_PI_2, 1e-15);

    let mid = interp.sample(0.125);
    assert_eq!(mid["title_opacity"], 0.5);
    assert_eq!(mid["camera_z"], 12.0);

    approx(interp.sample(0.375)["camera_z"], 9.0, 1e-12);
    approx(interp.sample(0.625)["carousel_opacity"], 0.5, 1e-12);

    let end = interp.sample(5.0);
    assert_eq!(end["camera_z"], 4.0);
    assert_eq!(end["camera_y"], 0.0);
    assert_eq!(end["carousel_opacity"], 1.0);
}
