use super::*;

fn head_bob() -> Motion {
    Motion {
        cycle_ms: 1000.0,
        keys: vec![
            key(0.0, &[(Joint::Head, 0.0)]),
            key(0.5, &[(Joint::Head, 12.0)]),
        ],
    }
}

#[test]
fn validate_accepts_builtin_style_tracks() {
    assert!(head_bob().validate().is_ok());
}

#[test]
fn validate_rejects_bad_tracks() {
    let empty = Motion {
        cycle_ms: 1000.0,
        keys: vec![],
    };
    assert!(empty.validate().is_err());

    let unsorted = Motion {
        cycle_ms: 1000.0,
        keys: vec![key(0.8, &[(Joint::Head, 1.0)]), key(0.2, &[(Joint::Head, 2.0)])],
    };
    assert!(unsorted.validate().is_err());

    let out_of_range = Motion {
        cycle_ms: 1000.0,
        keys: vec![key(1.5, &[(Joint::Head, 1.0)])],
    };
    assert!(out_of_range.validate().is_err());

    let zero_cycle = Motion {
        cycle_ms: 0.0,
        keys: vec![key(0.0, &[(Joint::Head, 1.0)])],
    };
    assert!(zero_cycle.validate().is_err());
}

#[test]
fn sampling_is_periodic_over_the_cycle() {
    let m = head_bob();
    for t in [0.0, 130.0, 250.0, 499.0, 500.0, 750.0, 999.0] {
        assert_eq!(m.sample(t), m.sample(t + 1000.0), "t={t}");
        assert_eq!(m.sample(t), m.sample(t + 3000.0), "t={t}");
    }
}

#[test]
fn negative_times_wrap_into_the_cycle() {
    let m = head_bob();
    assert_eq!(m.sample(-750.0), m.sample(250.0));
    assert_eq!(m.sample(-1000.0), m.sample(0.0));
}

#[test]
fn interior_bracket_lerps_linearly() {
    let m = head_bob();
    // Quarter cycle: halfway between the keys at 0 and 0.5.
    assert_eq!(m.sample(250.0).get(Joint::Head), Some(6.0));
    assert_eq!(m.sample(0.0).get(Joint::Head), Some(0.0));
    assert_eq!(m.sample(500.0).get(Joint::Head), Some(12.0));
}

#[test]
fn seam_bracket_wraps_last_to_first() {
    let m = head_bob();
    // Progress 0.75 is halfway through the wrap from the key at 0.5 back to
    // the key at 0; no duplicate keyframe at progress 1 required.
    assert_eq!(m.sample(750.0).get(Joint::Head), Some(6.0));
    // Approaching the seam, the value returns toward the first key.
    let near = m.sample(990.0).get(Joint::Head).unwrap();
    assert!(near < 1.0, "near-seam value should approach 0, got {near}");
}

#[test]
fn zero_width_bracket_holds_the_previous_key() {
    let m = Motion {
        cycle_ms: 1000.0,
        keys: vec![
            key(0.5, &[(Joint::Head, 3.0)]),
            key(0.5, &[(Joint::Head, 9.0)]),
        ],
    };
    assert!(m.validate().is_ok());
    // Degenerate bracket resolves to local progress 0, never a division by
    // zero.
    assert_eq!(m.sample(500.0).get(Joint::Head), Some(3.0));
}

#[test]
fn single_key_motion_holds_its_override() {
    let m = Motion {
        cycle_ms: 800.0,
        keys: vec![key(0.0, &[(Joint::Torso, 2.0)])],
    };
    assert_eq!(m.sample(0.0).get(Joint::Torso), Some(2.0));
    assert_eq!(m.sample(555.0).get(Joint::Torso), Some(2.0));
}

#[test]
fn override_covers_the_union_of_bracket_joints() {
    let m = Motion {
        cycle_ms: 1000.0,
        keys: vec![
            key(0.0, &[(Joint::Torso, 4.0)]),
            key(0.5, &[(Joint::Head, 8.0)]),
        ],
    };
    let ov = m.sample(250.0);
    // Joints named by either key are present; the absent side lerps from 0.
    assert_eq!(ov.get(Joint::Torso), Some(2.0));
    assert_eq!(ov.get(Joint::Head), Some(4.0));
    // Joints named by neither key stay untouched for the caller's merge.
    assert_eq!(ov.get(Joint::UpperArmL), None);
}

#[test]
fn apply_merges_and_blend_fades() {
    let m = head_bob();
    let base = Pose::NEUTRAL.with_joint(Joint::Torso, 10.0);

    let applied = m.apply(&base, 500.0);
    assert_eq!(applied.head, 12.0);
    assert_eq!(applied.torso, 10.0);

    assert_eq!(m.blend(&base, 500.0, 0.0), base);
    assert_eq!(m.blend(&base, 500.0, 1.0), applied);
    assert_eq!(m.blend(&base, 500.0, 0.5).head, 6.0);
}

#[test]
fn builtin_library_covers_the_scene_catalog() {
    let lib = MotionLibrary::builtin();
    for name in [
        "breathing",
        "nodding",
        "headShake",
        "waving",
        "clapping",
        "typing",
        "walkCycle",
        "jumping",
        "nervous",
        "laughing",
        "crying",
    ] {
        let m = lib.get(name).unwrap_or_else(|_| panic!("missing {name}"));
        assert!(m.validate().is_ok(), "{name} fails validation");
    }
    assert!(lib.get("moonwalk").is_err());
}
