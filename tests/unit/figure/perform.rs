use super::*;
use crate::figure::motion::MotionLibrary;
use crate::figure::pose::PoseLibrary;

fn state(phase: Phase, enter: f64, exit: f64, time_ms: f64) -> PhaseState {
    PhaseState {
        phase,
        enter_progress: enter,
        exit_progress: exit,
        time_ms,
        local_ms: time_ms,
    }
}

fn transition_performance() -> FigurePerformance {
    let poses = PoseLibrary::builtin();
    FigurePerformance {
        base: *poses.get("standing").unwrap(),
        target: Some(*poses.get("waving").unwrap()),
        ..FigurePerformance::standing()
    }
}

#[test]
fn enter_eases_base_toward_target() {
    let perf = transition_performance();

    let at_start = perf.pose_at(&state(Phase::Enter, 0.0, 0.0, 0.0));
    assert_eq!(at_start, perf.base);

    // InOutCubic is exactly 0.5 at the midpoint, so the pose is the exact
    // blend midpoint there.
    let mid = perf.pose_at(&state(Phase::Enter, 0.5, 0.0, 0.0));
    let target = perf.target.unwrap();
    assert_eq!(
        mid.upper_arm_r,
        (perf.base.upper_arm_r + target.upper_arm_r) / 2.0
    );

    let held = perf.pose_at(&state(Phase::During, 1.0, 0.0, 0.0));
    assert_eq!(held, target);
}

#[test]
fn exit_eases_target_back_to_base() {
    let perf = transition_performance();
    let done = perf.pose_at(&state(Phase::Exit, 1.0, 1.0, 0.0));
    assert_eq!(done, perf.base);

    let leaving = perf.pose_at(&state(Phase::Exit, 1.0, 0.0, 0.0));
    assert_eq!(leaving, perf.target.unwrap());
}

#[test]
fn motion_weight_ramps_with_enter_progress() {
    let motions = MotionLibrary::builtin();
    let perf = FigurePerformance {
        motion: Some(motions.get("nodding").unwrap().clone()),
        ..FigurePerformance::standing()
    };

    // Peak of the nod cycle (1200ms cycle, keys at 0 and 0.5).
    let peak_ms = 600.0;
    let at_start = perf.pose_at(&state(Phase::Enter, 0.0, 0.0, peak_ms));
    assert_eq!(at_start, perf.base, "motion must not pop in at weight 0");

    let held = perf.pose_at(&state(Phase::During, 1.0, 0.0, peak_ms));
    assert_eq!(held.head, 12.0);

    let ramping = perf.pose_at(&state(Phase::Enter, 0.5, 0.0, peak_ms));
    assert_eq!(ramping.head, 6.0);
}

#[test]
fn pose_track_holds_ends_and_loops_when_asked() {
    let poses = PoseLibrary::builtin();
    let standing = *poses.get("standing").unwrap();
    let waving = *poses.get("waving").unwrap();

    let mut track = PoseTrack {
        keys: vec![
            PoseTrackKey {
                at_ms: 0.0,
                pose: standing,
            },
            PoseTrackKey {
                at_ms: 800.0,
                pose: waving,
            },
        ],
        looped: false,
    };
    assert!(track.validate().is_ok());

    assert_eq!(track.sample(-100.0), standing);
    assert_eq!(track.sample(0.0), standing);
    assert_eq!(track.sample(800.0), waving);
    assert_eq!(track.sample(5000.0), waving, "one-shot tracks hold the last key");

    // Midpoint eases in-out, which is exactly the blend midpoint at 0.5.
    let mid = track.sample(400.0);
    assert_eq!(mid.upper_arm_r, waving.upper_arm_r / 2.0);

    track.looped = true;
    assert_eq!(track.sample(1200.0), track.sample(400.0));
}

#[test]
fn track_takes_precedence_over_transition() {
    let poses = PoseLibrary::builtin();
    let sitting = *poses.get("sitting").unwrap();
    let perf = FigurePerformance {
        track: Some(PoseTrack {
            keys: vec![PoseTrackKey {
                at_ms: 0.0,
                pose: sitting,
            }],
            looped: false,
        }),
        ..transition_performance()
    };
    let out = perf.pose_at(&state(Phase::During, 1.0, 0.0, 0.0));
    assert_eq!(out, sitting);
}

#[test]
fn geometry_at_walks_the_resolved_pose() {
    let perf = FigurePerformance::standing();
    let geo = perf.geometry_at(&state(Phase::During, 1.0, 0.0, 0.0));
    assert!((geo.head.center.y - -100.0).abs() < 1e-9);
}

#[test]
fn track_validation_rejects_unsorted_keys() {
    let track = PoseTrack {
        keys: vec![
            PoseTrackKey {
                at_ms: 500.0,
                pose: Pose::NEUTRAL,
            },
            PoseTrackKey {
                at_ms: 100.0,
                pose: Pose::NEUTRAL,
            },
        ],
        looped: false,
    };
    assert!(track.validate().is_err());
}
