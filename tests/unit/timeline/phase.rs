use super::*;
use crate::timeline::presets::{DuringPreset, EnterPreset, ExitPreset};

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn fade_in_ramps_opacity_over_its_window() {
    // 500ms at 30fps is a 15-frame entrance.
    let tl = ElementTimeline::resolve(
        ElementAnimation {
            enter: Some(EnterSpec {
                preset: EnterPreset::FadeIn,
                duration_ms: 500.0,
                delay_ms: 0.0,
            }),
            during: None,
            exit: None,
        },
        range(0, 2000),
        fps30(),
    );

    assert_eq!(tl.sample(FrameIndex(0)).opacity, 0.0);
    assert_eq!(tl.sample(FrameIndex(15)).opacity, 1.0);
    // Stays fully opaque for the rest of the element absent an exit.
    assert_eq!(tl.sample(FrameIndex(1000)).opacity, 1.0);

    let mid = tl.sample(FrameIndex(7)).opacity;
    assert!(mid > 0.0 && mid < 1.0);
}

#[test]
fn exit_window_is_anchored_to_the_element_end() {
    // 300ms at 30fps is 9 frames; on a 90-frame element the exit window is
    // frames [81, 90).
    let tl = ElementTimeline::resolve(
        ElementAnimation {
            enter: None,
            during: None,
            exit: Some(ExitSpec {
                preset: ExitPreset::FadeOut,
                duration_ms: 300.0,
            }),
        },
        range(0, 90),
        fps30(),
    );

    assert!(!tl.is_in_exit_phase(FrameIndex(80)));
    assert!(tl.is_in_exit_phase(FrameIndex(81)));
    assert!(tl.is_in_exit_phase(FrameIndex(89)));

    assert_eq!(tl.state_at(FrameIndex(81)).phase, Phase::Exit);
    assert_eq!(tl.state_at(FrameIndex(80)).phase, Phase::During);

    assert_eq!(tl.sample(FrameIndex(81)).opacity, 1.0);
    assert_eq!(tl.sample(FrameIndex(90)).opacity, 0.0);
}

#[test]
fn exit_wins_when_windows_overlap_on_short_elements() {
    // 6-frame element with a 15-frame entrance and a 9-frame exit: the
    // windows overlap everywhere, and exit takes precedence.
    let tl = ElementTimeline::resolve(
        ElementAnimation {
            enter: Some(EnterSpec {
                preset: EnterPreset::FadeIn,
                duration_ms: 500.0,
                delay_ms: 0.0,
            }),
            during: None,
            exit: Some(ExitSpec {
                preset: ExitPreset::FadeOut,
                duration_ms: 300.0,
            }),
        },
        range(0, 6),
        fps30(),
    );

    for f in 0..6 {
        assert_eq!(tl.state_at(FrameIndex(f)).phase, Phase::Exit, "frame {f}");
    }
}

#[test]
fn exit_type_none_never_enters_exit_phase() {
    let tl = ElementTimeline::resolve(
        ElementAnimation {
            enter: None,
            during: None,
            exit: Some(ExitSpec {
                preset: ExitPreset::None,
                duration_ms: 300.0,
            }),
        },
        range(0, 90),
        fps30(),
    );
    assert!(!tl.is_in_exit_phase(FrameIndex(89)));
    assert_eq!(tl.state_at(FrameIndex(89)).phase, Phase::During);
}

#[test]
fn enter_delay_shifts_the_window() {
    let tl = ElementTimeline::resolve(
        ElementAnimation {
            enter: Some(EnterSpec {
                preset: EnterPreset::FadeIn,
                duration_ms: 500.0,
                delay_ms: 1000.0,
            }),
            during: None,
            exit: None,
        },
        range(0, 2000),
        fps30(),
    );

    // Delay of 1000ms = 30 frames; progress stays 0 until the window opens.
    assert_eq!(tl.state_at(FrameIndex(0)).enter_progress, 0.0);
    assert_eq!(tl.state_at(FrameIndex(30)).enter_progress, 0.0);
    assert_eq!(tl.state_at(FrameIndex(45)).enter_progress, 1.0);
    assert_eq!(tl.state_at(FrameIndex(44)).phase, Phase::Enter);
    assert_eq!(tl.state_at(FrameIndex(45)).phase, Phase::During);
}

#[test]
fn zero_duration_entrance_is_instant() {
    let tl = ElementTimeline::resolve(
        ElementAnimation {
            enter: Some(EnterSpec {
                preset: EnterPreset::FadeIn,
                duration_ms: 0.0,
                delay_ms: 0.0,
            }),
            during: None,
            exit: None,
        },
        range(10, 100),
        fps30(),
    );

    // Degenerate window: progress jumps straight to 1, no division by zero.
    assert_eq!(tl.state_at(FrameIndex(9)).enter_progress, 0.0);
    assert_eq!(tl.state_at(FrameIndex(10)).enter_progress, 1.0);
    assert_eq!(tl.sample(FrameIndex(10)).opacity, 1.0);
}

#[test]
fn queries_outside_the_lifetime_clamp_instead_of_failing() {
    let tl = ElementTimeline::resolve(
        ElementAnimation {
            enter: Some(EnterSpec::preset(EnterPreset::FadeIn)),
            during: None,
            exit: Some(ExitSpec::preset(ExitPreset::FadeOut)),
        },
        range(100, 200),
        fps30(),
    );

    // Way before: entrance progress 0. Way after: exit progress 1.
    assert_eq!(tl.state_at(FrameIndex(0)).enter_progress, 0.0);
    assert_eq!(tl.sample(FrameIndex(0)).opacity, 0.0);
    assert_eq!(tl.state_at(FrameIndex(100_000)).exit_progress, 1.0);
    assert_eq!(tl.sample(FrameIndex(100_000)).opacity, 0.0);
}

#[test]
fn during_presets_are_periodic_in_absolute_frames() {
    let tl = ElementTimeline::resolve(
        ElementAnimation {
            enter: None,
            during: Some(DuringSpec {
                preset: DuringPreset::Floating,
                cycle_ms: 2000.0, // 60 frames
            }),
            exit: None,
        },
        range(0, 100_000),
        fps30(),
    );

    for f in [0u64, 13, 29, 42, 59] {
        assert_eq!(
            tl.sample(FrameIndex(f)).transform,
            tl.sample(FrameIndex(f + 60)).transform,
            "frame {f}"
        );
        assert_eq!(
            tl.sample(FrameIndex(f)).transform,
            tl.sample(FrameIndex(f + 600)).transform,
            "frame {f}"
        );
    }
}

#[test]
fn typewriter_reveal_follows_enter_progress_then_stays_done() {
    let tl = ElementTimeline::resolve(
        ElementAnimation {
            enter: Some(EnterSpec {
                preset: EnterPreset::Typewriter,
                duration_ms: 1000.0, // 30 frames
                delay_ms: 0.0,
            }),
            during: None,
            exit: Some(ExitSpec::preset(ExitPreset::FadeOut)),
        },
        range(0, 300),
        fps30(),
    );

    assert_eq!(tl.sample(FrameIndex(0)).draw_progress, 0.0);
    assert_eq!(tl.sample(FrameIndex(15)).draw_progress, 0.5);
    assert_eq!(tl.sample(FrameIndex(30)).draw_progress, 1.0);
    // Revealed text stays revealed through hold and exit.
    assert_eq!(tl.sample(FrameIndex(200)).draw_progress, 1.0);
    assert_eq!(tl.sample(FrameIndex(295)).draw_progress, 1.0);
}

#[test]
fn repeated_queries_return_identical_state() {
    let tl = ElementTimeline::resolve(
        ElementAnimation {
            enter: Some(EnterSpec::preset(EnterPreset::PopIn)),
            during: Some(DuringSpec::preset(DuringPreset::Pulse)),
            exit: Some(ExitSpec::preset(ExitPreset::PopOut)),
        },
        range(0, 240),
        fps30(),
    );

    for f in [0u64, 3, 11, 120, 233, 239, 10_000] {
        let a = tl.sample(FrameIndex(f));
        let b = tl.sample(FrameIndex(f));
        assert_eq!(a, b, "frame {f}");
        assert_eq!(tl.state_at(FrameIndex(f)), tl.state_at(FrameIndex(f)));
    }
}
