//! Load-time resolution of the scene description into evaluation-ready
//! elements.
//!
//! Everything that can be wrong with a scene is caught here, once, with the
//! offending element id in the message. After compile, per-frame evaluation
//! is infallible and pure.

use tracing::{debug, instrument};

use crate::figure::expression::Expression;
use crate::figure::motion::MotionLibrary;
use crate::figure::perform::{FigurePerformance, PoseTrack, PoseTrackKey};
use crate::figure::pose::PoseLibrary;
use crate::figure::skeleton::Skeleton;
use crate::foundation::core::{FrameIndex, FrameRange, Fps};
use crate::foundation::error::{ManikinError, ManikinResult};
use crate::scene::model::{AnimationDef, ElementDef, ElementKind, SceneDef};
use crate::timeline::camera::{CameraLibrary, CameraPath, CameraState};
use crate::timeline::phase::{
    DuringSpec, ElementAnimation, ElementTimeline, ElementVisuals, EnterSpec, ExitSpec, PhaseState,
};
use crate::timeline::presets::{DuringPreset, EnterPreset, ExitPreset, counter_value};

/// The read-only preset libraries a scene is resolved against.
#[derive(Clone, Debug, Default)]
pub struct Libraries {
    /// Named full-body poses.
    pub poses: PoseLibrary,
    /// Named loop motions.
    pub motions: MotionLibrary,
    /// Named camera moves.
    pub cameras: CameraLibrary,
}

/// One compiled element: its resolved timeline plus whatever its kind needs.
#[derive(Clone, Debug)]
pub struct Element {
    /// Element id from scene data.
    pub id: String,
    /// Element category.
    pub kind: ElementKind,
    /// Resolved enter/during/exit windows.
    pub timeline: ElementTimeline,
    /// Character configuration, stickman elements only.
    pub figure: Option<FigurePerformance>,
    /// Camera move, camera elements only.
    pub camera: Option<CameraPath>,
    /// Counter value range, counter elements only.
    pub counter: Option<(f64, f64)>,
}

impl Element {
    /// Phase classification and progress scalars at one frame.
    pub fn state_at(&self, frame: FrameIndex) -> PhaseState {
        self.timeline.state_at(frame)
    }

    /// Opacity/transform/reveal output at one frame.
    pub fn visuals_at(&self, frame: FrameIndex) -> ElementVisuals {
        self.timeline.sample(frame)
    }

    /// Resolved figure geometry at one frame, for stickman elements.
    pub fn figure_at(&self, frame: FrameIndex) -> Option<crate::figure::fk::FigureGeometry> {
        let figure = self.figure.as_ref()?;
        Some(figure.geometry_at(&self.state_at(frame)))
    }

    /// Camera framing at one frame, for camera elements. Progress runs over
    /// the element's own range, clamped at both ends.
    pub fn camera_at(&self, frame: FrameIndex) -> Option<CameraState> {
        let path = self.camera.as_ref()?;
        let range = self.timeline.range();
        let len = range.len_frames();
        let p = if len == 0 {
            1.0
        } else {
            ((frame.0 as f64 - range.start.0 as f64) / len as f64).clamp(0.0, 1.0)
        };
        Some(path.sample(p))
    }

    /// Displayed counter value at one frame, for counter elements.
    pub fn counter_at(&self, frame: FrameIndex) -> Option<f64> {
        let (from, to) = self.counter?;
        Some(counter_value(
            from,
            to,
            self.state_at(frame).enter_progress,
        ))
    }
}

/// A compiled scene: pure lookup tables plus per-element evaluators.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Scene frame rate.
    pub fps: Fps,
    /// Whole-scene frame range.
    pub duration: FrameRange,
    /// Compiled elements in paint order.
    pub elements: Vec<Element>,
}

impl Scene {
    /// Parse and compile a JSON scene description.
    pub fn from_json(json: &str, libs: &Libraries) -> ManikinResult<Scene> {
        let def: SceneDef =
            serde_json::from_str(json).map_err(|e| ManikinError::serde(e.to_string()))?;
        compile(&def, libs)
    }

    /// Find a compiled element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }
}

fn elem_err(id: &str, err: impl std::fmt::Display) -> ManikinError {
    ManikinError::validation(format!("element '{id}': {err}"))
}

/// Per-kind animation defaults, applied when an element requests nothing.
fn default_animation(kind: ElementKind) -> Option<AnimationDef> {
    let def = match kind {
        ElementKind::Stickman => AnimationDef::with_duration("fadeIn", 500.0),
        ElementKind::Text => AnimationDef::with_duration("fadeInUp", 400.0),
        ElementKind::Counter => AnimationDef::with_duration("fadeIn", 300.0),
        ElementKind::Icon => AnimationDef::with_duration("popIn", 400.0),
        ElementKind::Shape => AnimationDef::with_duration("drawLine", 500.0),
        ElementKind::Camera => return None,
    };
    Some(def)
}

/// Resolve a whole scene description against the libraries.
#[instrument(skip_all, fields(scene = def.id.as_deref().unwrap_or("<unnamed>")))]
pub fn compile(def: &SceneDef, libs: &Libraries) -> ManikinResult<Scene> {
    let fps = Fps::new(def.fps, 1)?;
    if !(def.duration_ms.is_finite() && def.duration_ms >= 0.0) {
        return Err(ManikinError::validation(
            "scene durationMs must be finite and >= 0",
        ));
    }
    let duration = FrameRange::new(
        FrameIndex(0),
        FrameIndex(fps.millis_to_frames(def.duration_ms)),
    )?;

    let mut elements = Vec::with_capacity(def.elements.len());
    for elem in &def.elements {
        for prior in &def.elements[..elements.len()] {
            if prior.id == elem.id {
                return Err(ManikinError::validation(format!(
                    "duplicate element id '{}'",
                    elem.id
                )));
            }
        }
        elements.push(compile_element(elem, fps, libs)?);
    }

    debug!(elements = elements.len(), frames = duration.len_frames(), "scene compiled");
    Ok(Scene {
        fps,
        duration,
        elements,
    })
}

fn compile_element(def: &ElementDef, fps: Fps, libs: &Libraries) -> ManikinResult<Element> {
    let id = &def.id;
    if !(def.start_ms.is_finite() && def.end_ms.is_finite() && def.start_ms >= 0.0) {
        return Err(elem_err(id, "startMs/endMs must be finite and >= 0"));
    }
    if def.end_ms < def.start_ms {
        return Err(elem_err(id, "endMs must be >= startMs"));
    }
    let range = FrameRange::new(
        FrameIndex(fps.millis_to_frames(def.start_ms)),
        FrameIndex(fps.millis_to_frames(def.end_ms)),
    )?;

    let mut anim_def = def.animation.clone();
    if anim_def.is_empty() {
        if let Some(enter) = default_animation(def.kind) {
            debug!(element = %id, enter = %enter.kind, "applying default animation");
            anim_def.enter = Some(enter);
        }
    }

    let enter = anim_def
        .enter
        .as_ref()
        .map(|a| resolve_enter(id, a))
        .transpose()?;
    let exit = anim_def
        .exit
        .as_ref()
        .map(|a| resolve_exit(id, a))
        .transpose()?;

    // The during slot is the one place a name means different things per
    // element kind: stickman elements resolve it against the motion library,
    // everything else against the transform presets.
    let mut during = None;
    let mut figure = None;

    if def.kind == ElementKind::Stickman {
        figure = Some(compile_figure(def, &anim_def, libs, enter.as_ref())?);
    } else if let Some(a) = &anim_def.during {
        let preset = DuringPreset::from_name(&a.kind)
            .ok_or_else(|| elem_err(id, format!("unknown during animation '{}'", a.kind)))?;
        during = Some(DuringSpec {
            preset,
            cycle_ms: a.duration_ms.unwrap_or(preset.default_cycle_ms()),
        });
    }

    let timeline = ElementTimeline::resolve(
        ElementAnimation {
            enter,
            during,
            exit,
        },
        range,
        fps,
    );

    let camera = match def.kind {
        ElementKind::Camera => {
            let name = def.props.preset.as_deref().unwrap_or("static_full");
            Some(
                libs.cameras
                    .get(name)
                    .map_err(|e| elem_err(id, e))?
                    .clone(),
            )
        }
        _ => None,
    };

    let counter = match def.kind {
        ElementKind::Counter => Some((
            def.props.from.unwrap_or(0.0),
            def.props.to.unwrap_or(0.0),
        )),
        _ => None,
    };

    Ok(Element {
        id: id.clone(),
        kind: def.kind,
        timeline,
        figure,
        camera,
        counter,
    })
}

fn resolve_enter(id: &str, a: &AnimationDef) -> ManikinResult<EnterSpec> {
    let preset = EnterPreset::from_name(&a.kind)
        .ok_or_else(|| elem_err(id, format!("unknown enter animation '{}'", a.kind)))?;
    Ok(EnterSpec {
        preset,
        duration_ms: a.duration_ms.unwrap_or(preset.default_duration_ms()),
        delay_ms: a.delay_ms.unwrap_or(0.0),
    })
}

fn resolve_exit(id: &str, a: &AnimationDef) -> ManikinResult<ExitSpec> {
    let preset = ExitPreset::from_name(&a.kind)
        .ok_or_else(|| elem_err(id, format!("unknown exit animation '{}'", a.kind)))?;
    Ok(ExitSpec {
        preset,
        duration_ms: a.duration_ms.unwrap_or(preset.default_duration_ms()),
    })
}

fn compile_figure(
    def: &ElementDef,
    anim_def: &crate::scene::model::ElementAnimationsDef,
    libs: &Libraries,
    enter: Option<&EnterSpec>,
) -> ManikinResult<FigurePerformance> {
    let id = &def.id;

    let base_name = def.props.pose.as_deref().unwrap_or("standing");
    let base = *libs.poses.get(base_name).map_err(|e| elem_err(id, e))?;

    let target = def
        .props
        .target_pose
        .as_deref()
        .map(|name| libs.poses.get(name).map_err(|e| elem_err(id, e)).copied())
        .transpose()?;

    if target.is_none()
        && enter.is_some_and(|e| e.preset == EnterPreset::PoseTransition)
    {
        return Err(elem_err(id, "poseTransition requires props.targetPose"));
    }

    // Motion: the during slot names it when present, otherwise props.motion,
    // otherwise the idle default. "none" switches it off. A during slot
    // carrying keyframes is a scripted pose track, not a motion name.
    let motion_name = anim_def
        .during
        .as_ref()
        .filter(|a| a.keyframes.is_none())
        .map(|a| a.kind.as_str())
        .or(def.props.motion.as_deref())
        .unwrap_or("breathing");
    let motion = if motion_name == "none" {
        None
    } else {
        Some(
            libs.motions
                .get(motion_name)
                .map_err(|e| elem_err(id, e))?
                .clone(),
        )
    };

    let track = anim_def
        .during
        .as_ref()
        .and_then(|a| a.keyframes.as_ref().map(|keys| (a, keys)))
        .map(|(a, keys)| -> ManikinResult<PoseTrack> {
            let mut resolved = Vec::with_capacity(keys.len());
            for k in keys {
                resolved.push(PoseTrackKey {
                    at_ms: k.at_ms,
                    pose: *libs.poses.get(&k.pose).map_err(|e| elem_err(id, e))?,
                });
            }
            let track = PoseTrack {
                keys: resolved,
                looped: a.looped,
            };
            track.validate().map_err(|e| elem_err(id, e))?;
            Ok(track)
        })
        .transpose()?;

    let expression = match def.props.expression.as_deref() {
        None => Expression::Neutral,
        Some(name) => Expression::from_name(name)
            .ok_or_else(|| elem_err(id, format!("unknown expression '{name}'")))?,
    };

    Ok(FigurePerformance {
        skeleton: Skeleton::default(),
        base,
        target,
        track,
        motion,
        expression,
    })
}
