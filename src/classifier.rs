// src/classifier.rs - Classifies each NAO joint family into FluentNao pose symbols
//
// All tables work in degrees after mirroring, so a left and a right joint in
// the same pose read the same value. Hand aperture stays in 0..1.
use crate::angles::{admits, classify_axis, AxisRule, Bound, Canonical, Mirror, Scale};
use crate::command::{Command, CommandList};
use crate::joints::{
    JointFrame, JointGroup, JointGroupSpec, Side, HEAD_PITCH, HEAD_YAW, L_ELBOW_ROLL, L_ELBOW_YAW,
    L_HAND, L_SHOULDER_PITCH, L_SHOULDER_ROLL, L_WRIST_YAW, R_ELBOW_ROLL, R_ELBOW_YAW, R_HAND,
    R_SHOULDER_PITCH, R_SHOULDER_ROLL, R_WRIST_YAW,
};
use tracing::{debug, trace};

// Shoulder cut points, degrees. Roll is positive outward on both sides.
pub const ARM_OUT_ROLL: f64 = 45.0;
pub const ARM_UP_PITCH: f64 = -45.0;
pub const ARM_BACK_PITCH: f64 = 105.0;
pub const ARM_DOWN_PITCH: f64 = 45.0;

pub const ARM_UP_CANONICAL_PITCH: f64 = -90.0;
pub const ARM_DOWN_CANONICAL_PITCH: f64 = 90.0;
pub const ARM_BACK_CANONICAL_PITCH: f64 = 119.5;
pub const ARM_OUT_CANONICAL_ROLL: f64 = 90.0;

pub const ELBOW_BENT_ROLL: f64 = 45.0;
pub const ELBOW_BENT_CANONICAL_ROLL: f64 = 88.5;
pub const ELBOW_TURN_YAW: f64 = 45.0;

pub const WRIST_TURN_YAW: f64 = 45.0;

/// Aperture at or above which a hand counts as open.
pub const HAND_OPEN_APERTURE: f64 = 0.5;

pub const HEAD_TURN_YAW: f64 = 45.0;
pub const HEAD_TILT_PITCH: f64 = 15.0;

/// One row of the two-axis shoulder table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmRule {
    pub symbol: &'static str,
    pub pitch_bound: Option<Bound>,
    pub roll_bound: Option<Bound>,
    pub pitch: Canonical,
    pub roll: Canonical,
}

impl ArmRule {
    /// A bound on an axis that was not observed never admits the row.
    fn admits(&self, pitch: Option<f64>, roll: Option<f64>) -> bool {
        admits_observed(self.pitch_bound, pitch) && admits_observed(self.roll_bound, roll)
    }

    /// Offsets for the observed axes. An unobserved axis reports 0, which asks
    /// for the canonical angle on that axis.
    fn offsets(&self, pitch: Option<f64>, roll: Option<f64>) -> Vec<f64> {
        vec![
            pitch.map_or(0.0, |pitch| self.pitch.offset(pitch)),
            roll.map_or(0.0, |roll| self.roll.offset(roll)),
        ]
    }
}

fn admits_observed(bound: Option<Bound>, value: Option<f64>) -> bool {
    match value {
        Some(value) => admits(bound, value),
        None => bound.is_none(),
    }
}

pub const ARM_RULES: &[ArmRule] = &[
    ArmRule {
        symbol: "out",
        pitch_bound: None,
        roll_bound: Some(Bound::AtLeast(ARM_OUT_ROLL)),
        pitch: Canonical::falling(0.0),
        roll: Canonical::rising(ARM_OUT_CANONICAL_ROLL),
    },
    ArmRule {
        symbol: "up",
        pitch_bound: Some(Bound::AtMost(ARM_UP_PITCH)),
        roll_bound: None,
        pitch: Canonical::falling(ARM_UP_CANONICAL_PITCH),
        roll: Canonical::falling(0.0),
    },
    ArmRule {
        symbol: "back",
        pitch_bound: Some(Bound::AtLeast(ARM_BACK_PITCH)),
        roll_bound: None,
        pitch: Canonical::rising(ARM_BACK_CANONICAL_PITCH),
        roll: Canonical::falling(0.0),
    },
    ArmRule {
        symbol: "down",
        pitch_bound: Some(Bound::AtLeast(ARM_DOWN_PITCH)),
        roll_bound: None,
        pitch: Canonical::rising(ARM_DOWN_CANONICAL_PITCH),
        roll: Canonical::falling(0.0),
    },
    ArmRule {
        symbol: "forward",
        pitch_bound: None,
        roll_bound: None,
        pitch: Canonical::rising(0.0),
        roll: Canonical::falling(0.0),
    },
];

// Single-axis families report `reading - canonical`, so an under-rotated pose
// on the negative side gives a positive offset.
pub const ELBOW_BEND_RULES: &[AxisRule] = &[
    AxisRule {
        symbol: "bent",
        bound: Some(Bound::AtLeast(ELBOW_BENT_ROLL)),
        canonical: Some(Canonical::rising(ELBOW_BENT_CANONICAL_ROLL)),
    },
    AxisRule {
        symbol: "straight",
        bound: None,
        canonical: Some(Canonical::rising(0.0)),
    },
];

pub const ELBOW_TURN_RULES: &[AxisRule] = &[
    AxisRule {
        symbol: "turn_up",
        bound: Some(Bound::AtMost(-ELBOW_TURN_YAW)),
        canonical: Some(Canonical::rising(-90.0)),
    },
    AxisRule {
        symbol: "turn_down",
        bound: Some(Bound::AtLeast(ELBOW_TURN_YAW)),
        canonical: Some(Canonical::rising(90.0)),
    },
    AxisRule {
        symbol: "turn_in",
        bound: None,
        canonical: Some(Canonical::rising(0.0)),
    },
];

pub const WRIST_RULES: &[AxisRule] = &[
    AxisRule {
        symbol: "turn_in",
        bound: Some(Bound::AtMost(-WRIST_TURN_YAW)),
        canonical: Some(Canonical::rising(-90.0)),
    },
    AxisRule {
        symbol: "turn_out",
        bound: Some(Bound::AtLeast(WRIST_TURN_YAW)),
        canonical: Some(Canonical::rising(90.0)),
    },
    AxisRule {
        symbol: "center",
        bound: None,
        canonical: Some(Canonical::rising(0.0)),
    },
];

pub const HAND_RULES: &[AxisRule] = &[
    AxisRule {
        symbol: "open",
        bound: Some(Bound::AtLeast(HAND_OPEN_APERTURE)),
        canonical: None,
    },
    AxisRule {
        symbol: "close",
        bound: None,
        canonical: None,
    },
];

pub const HEAD_YAW_RULES: &[AxisRule] = &[
    AxisRule {
        symbol: "left",
        bound: Some(Bound::AtLeast(HEAD_TURN_YAW)),
        canonical: Some(Canonical::rising(90.0)),
    },
    AxisRule {
        symbol: "right",
        bound: Some(Bound::AtMost(-HEAD_TURN_YAW)),
        canonical: Some(Canonical::rising(-90.0)),
    },
    AxisRule {
        symbol: "center",
        bound: None,
        canonical: Some(Canonical::rising(0.0)),
    },
];

pub const HEAD_PITCH_RULES: &[AxisRule] = &[
    AxisRule {
        symbol: "up",
        bound: Some(Bound::AtMost(-HEAD_TILT_PITCH)),
        canonical: Some(Canonical::rising(-30.0)),
    },
    AxisRule {
        symbol: "down",
        bound: Some(Bound::AtLeast(HEAD_TILT_PITCH)),
        canonical: Some(Canonical::rising(30.0)),
    },
    AxisRule {
        symbol: "forward",
        bound: None,
        canonical: Some(Canonical::rising(0.0)),
    },
];

/// A left/right joint pair read along one axis.
#[derive(Debug, Clone, Copy)]
pub struct SidedJoint {
    pub left: &'static str,
    pub right: &'static str,
    pub mirror: Mirror,
    pub scale: Scale,
}

impl SidedJoint {
    pub fn name(&self, side: Side) -> &'static str {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Normalized reading, or `None` when the joint is outside the group spec or
    /// missing from the frame.
    pub fn read(&self, frame: &JointFrame, spec: &JointGroupSpec, side: Side) -> Option<f64> {
        spec.angle(frame, self.name(side))
            .map(|value| self.mirror.apply(side, self.scale.apply(value)))
    }
}

pub const SHOULDER_PITCH: SidedJoint = SidedJoint {
    left: L_SHOULDER_PITCH,
    right: R_SHOULDER_PITCH,
    mirror: Mirror::Neither,
    scale: Scale::Degrees,
};

pub const SHOULDER_ROLL: SidedJoint = SidedJoint {
    left: L_SHOULDER_ROLL,
    right: R_SHOULDER_ROLL,
    mirror: Mirror::Right,
    scale: Scale::Degrees,
};

// NAO reports a bent left elbow as negative roll and a bent right one as positive.
pub const ELBOW_ROLL: SidedJoint = SidedJoint {
    left: L_ELBOW_ROLL,
    right: R_ELBOW_ROLL,
    mirror: Mirror::Left,
    scale: Scale::Degrees,
};

pub const ELBOW_YAW: SidedJoint = SidedJoint {
    left: L_ELBOW_YAW,
    right: R_ELBOW_YAW,
    mirror: Mirror::Right,
    scale: Scale::Degrees,
};

pub const WRIST_YAW: SidedJoint = SidedJoint {
    left: L_WRIST_YAW,
    right: R_WRIST_YAW,
    mirror: Mirror::Right,
    scale: Scale::Degrees,
};

pub const HAND_APERTURE: SidedJoint = SidedJoint {
    left: L_HAND,
    right: R_HAND,
    mirror: Mirror::Neither,
    scale: Scale::Raw,
};

/// Result for one side (or the head) before sides are combined.
#[derive(Debug, Clone, PartialEq)]
pub struct SidePose {
    pub symbol: &'static str,
    pub offsets: Vec<f64>,
}

impl SidePose {
    fn from_rule(rule: &AxisRule, value: f64) -> Self {
        Self {
            symbol: rule.symbol,
            offsets: rule.offsets(value),
        }
    }
}

/// Shoulder pose of one side, decided only on the axes that were observed.
/// A side with neither reading is absent.
pub fn classify_shoulder(frame: &JointFrame, spec: &JointGroupSpec, side: Side) -> Option<SidePose> {
    let pitch = SHOULDER_PITCH.read(frame, spec, side);
    let roll = SHOULDER_ROLL.read(frame, spec, side);
    if pitch.is_none() && roll.is_none() {
        return None;
    }

    let rule = ARM_RULES.iter().find(|rule| rule.admits(pitch, roll))?;
    trace!(side = side.as_str(), ?pitch, ?roll, symbol = rule.symbol, "shoulder");

    Some(SidePose {
        symbol: rule.symbol,
        offsets: rule.offsets(pitch, roll),
    })
}

/// One side of a single-axis family.
pub fn classify_side(
    frame: &JointFrame,
    spec: &JointGroupSpec,
    joint: &SidedJoint,
    rules: &'static [AxisRule],
    side: Side,
) -> Option<SidePose> {
    let value = joint.read(frame, spec, side)?;
    let rule = classify_axis(rules, value)?;
    trace!(joint = joint.name(side), value, symbol = rule.symbol, "axis");
    Some(SidePose::from_rule(rule, value))
}

/// Head joints are not paired, so they are read directly.
pub fn classify_single(
    frame: &JointFrame,
    spec: &JointGroupSpec,
    joint: &str,
    rules: &'static [AxisRule],
) -> Option<SidePose> {
    let value = Scale::Degrees.apply(spec.angle(frame, joint)?);
    let rule = classify_axis(rules, value)?;
    trace!(joint, value, symbol = rule.symbol, "axis");
    Some(SidePose::from_rule(rule, value))
}

/// Turns joint readings into FluentNao commands.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseClassifier {
    duration: f64,
}

impl Default for PoseClassifier {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl PoseClassifier {
    /// `duration` leads the parameter list of every command that takes offsets.
    pub fn new(duration: f64) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Classifies every family the group spec touches, in `JointGroup` order.
    /// Empty when none of the group spec joints are in the frame. Names that
    /// are not NAO joints have no rules, so a spec made only of those is empty
    /// too, even when the frame carries them.
    pub fn detect_command(&self, frame: &JointFrame, spec: &JointGroupSpec) -> CommandList {
        let mut commands = CommandList::new();
        for group in spec.groups() {
            commands.extend(self.detect_group(frame, spec, group));
        }
        commands
    }

    pub fn detect_group(
        &self,
        frame: &JointFrame,
        spec: &JointGroupSpec,
        group: JointGroup,
    ) -> CommandList {
        let commands = match group {
            JointGroup::Arms => self.combine(
                group,
                classify_shoulder(frame, spec, Side::Left),
                classify_shoulder(frame, spec, Side::Right),
            ),
            JointGroup::Elbows => {
                let mut commands = self.bilateral(frame, spec, group, &ELBOW_ROLL, ELBOW_BEND_RULES);
                commands.extend(self.bilateral(frame, spec, group, &ELBOW_YAW, ELBOW_TURN_RULES));
                commands
            }
            JointGroup::Wrists => self.bilateral(frame, spec, group, &WRIST_YAW, WRIST_RULES),
            JointGroup::Hands => self.bilateral(frame, spec, group, &HAND_APERTURE, HAND_RULES),
            JointGroup::Head => [
                classify_single(frame, spec, HEAD_YAW, HEAD_YAW_RULES),
                classify_single(frame, spec, HEAD_PITCH, HEAD_PITCH_RULES),
            ]
            .into_iter()
            .flatten()
            .map(|pose| Command::in_group(group, pose.symbol, self.parameters(&pose.offsets)))
            .collect(),
        };

        if commands.is_empty() {
            debug!(group = %group, "no joints observed");
        } else {
            debug!(group = %group, count = commands.len(), "classified");
        }
        commands
    }

    fn bilateral(
        &self,
        frame: &JointFrame,
        spec: &JointGroupSpec,
        group: JointGroup,
        joint: &SidedJoint,
        rules: &'static [AxisRule],
    ) -> CommandList {
        self.combine(
            group,
            classify_side(frame, spec, joint, rules, Side::Left),
            classify_side(frame, spec, joint, rules, Side::Right),
        )
    }

    /// Matching sides collapse into one command with the left side's offsets.
    /// Differing sides give two commands, left first.
    pub fn combine(
        &self,
        group: JointGroup,
        left: Option<SidePose>,
        right: Option<SidePose>,
    ) -> CommandList {
        match (left, right) {
            (None, None) => Vec::new(),
            (Some(pose), None) => vec![self.sided(group, Side::Left, &pose)],
            (None, Some(pose)) => vec![self.sided(group, Side::Right, &pose)],
            (Some(l), Some(r)) if l.symbol == r.symbol => {
                vec![Command::in_group(group, l.symbol, self.parameters(&l.offsets))]
            }
            (Some(l), Some(r)) => vec![
                self.sided(group, Side::Left, &l),
                self.sided(group, Side::Right, &r),
            ],
        }
    }

    fn sided(&self, group: JointGroup, side: Side, pose: &SidePose) -> Command {
        Command::in_group(
            group,
            format!("{}_{}", side.as_str(), pose.symbol),
            self.parameters(&pose.offsets),
        )
    }

    fn parameters(&self, offsets: &[f64]) -> Vec<f64> {
        if offsets.is_empty() {
            return Vec::new();
        }
        let mut parameters = Vec::with_capacity(offsets.len() + 1);
        parameters.push(self.duration);
        parameters.extend_from_slice(offsets);
        parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::chain_names;

    fn arms_frame(lp: f64, lr: f64, rp: f64, rr: f64) -> JointFrame {
        JointFrame::new()
            .with(L_SHOULDER_PITCH, lp.to_radians())
            .with(L_SHOULDER_ROLL, lr.to_radians())
            .with(R_SHOULDER_PITCH, rp.to_radians())
            .with(R_SHOULDER_ROLL, rr.to_radians())
    }

    fn arms() -> JointGroupSpec {
        JointGroupSpec::for_group(JointGroup::Arms)
    }

    #[test]
    fn arm_table_ends_with_fallback() {
        let last = ARM_RULES.last().unwrap();
        assert_eq!(last.symbol, "forward");
        assert!(last.admits(Some(-1000.0), Some(-1000.0)));
        assert!(last.admits(None, None));
    }

    #[test]
    fn arm_cut_points() {
        let symbol = |pitch: f64, roll: f64| {
            ARM_RULES
                .iter()
                .find(|rule| rule.admits(Some(pitch), Some(roll)))
                .map(|rule| rule.symbol)
        };
        assert_eq!(symbol(0.0, 0.0), Some("forward"));
        assert_eq!(symbol(ARM_UP_PITCH, 0.0), Some("up"));
        assert_eq!(symbol(ARM_UP_PITCH + 1.0, 0.0), Some("forward"));
        assert_eq!(symbol(ARM_DOWN_PITCH, 0.0), Some("down"));
        assert_eq!(symbol(ARM_BACK_PITCH - 1.0, 0.0), Some("down"));
        assert_eq!(symbol(ARM_BACK_PITCH, 0.0), Some("back"));
        assert_eq!(symbol(0.0, ARM_OUT_ROLL), Some("out"));
        assert_eq!(symbol(-90.0, ARM_OUT_ROLL), Some("out"));
    }

    #[test]
    fn right_shoulder_roll_is_mirrored() {
        let frame = arms_frame(0.0, 0.0, 0.0, -76.0);
        let right = classify_shoulder(&frame, &arms(), Side::Right).unwrap();
        assert_eq!(right.symbol, "out");
        assert_eq!(right.offsets, vec![0.0, -14.0]);
    }

    #[test]
    fn side_without_joints_is_absent() {
        let frame = JointFrame::new().with(L_SHOULDER_PITCH, 0.0);
        assert!(classify_shoulder(&frame, &arms(), Side::Right).is_none());
        let left = classify_shoulder(&frame, &arms(), Side::Left).unwrap();
        assert_eq!(left.symbol, "forward");
    }

    #[test]
    fn roll_only_side_decides_on_roll() {
        let spec = JointGroupSpec::new([L_SHOULDER_ROLL]);
        let frame = JointFrame::new().with(L_SHOULDER_ROLL, (10f64).to_radians());
        let left = classify_shoulder(&frame, &spec, Side::Left).unwrap();
        assert_eq!(left.symbol, "forward");
        assert_eq!(left.offsets, vec![0.0, -10.0]);

        let frame = JointFrame::new().with(L_SHOULDER_ROLL, (80f64).to_radians());
        let left = classify_shoulder(&frame, &spec, Side::Left).unwrap();
        assert_eq!(left.symbol, "out");
        assert_eq!(left.offsets, vec![0.0, -10.0]);
    }

    #[test]
    fn pitch_only_side_decides_on_pitch() {
        let spec = JointGroupSpec::new([L_SHOULDER_PITCH]);
        let frame = JointFrame::new().with(L_SHOULDER_PITCH, (-84f64).to_radians());
        let left = classify_shoulder(&frame, &spec, Side::Left).unwrap();
        assert_eq!(left.symbol, "up");
        assert_eq!(left.offsets, vec![-6.0, 0.0]);

        let frame = JointFrame::new().with(L_SHOULDER_PITCH, (88f64).to_radians());
        let left = classify_shoulder(&frame, &spec, Side::Left).unwrap();
        assert_eq!(left.symbol, "down");
        assert_eq!(left.offsets, vec![-2.0, 0.0]);
    }

    #[test]
    fn unobserved_axis_never_admits_a_bounded_row() {
        let out = &ARM_RULES[0];
        assert_eq!(out.symbol, "out");
        assert!(!out.admits(Some(0.0), None));
        assert!(out.admits(None, Some(ARM_OUT_ROLL)));
        let up = &ARM_RULES[1];
        assert!(!up.admits(None, Some(0.0)));
    }

    #[test]
    fn one_observed_side_is_named_with_its_side() {
        let frame = JointFrame::new()
            .with(R_SHOULDER_PITCH, (-90f64).to_radians())
            .with(R_SHOULDER_ROLL, 0.0);
        let commands = PoseClassifier::default().detect_command(&frame, &arms());
        assert_eq!(chain_names(&commands), vec!["arms.right_up"]);
    }

    #[test]
    fn duration_leads_parameters() {
        let frame = arms_frame(-80.0, 4.0, -80.0, -4.0);
        let commands = PoseClassifier::new(2.0).detect_command(&frame, &arms());
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].parameters, vec![2.0, -10.0, -4.0]);
    }

    #[test]
    fn matching_sides_use_left_offsets() {
        let frame = arms_frame(10.0, 3.0, 20.0, -7.0);
        let commands = PoseClassifier::default().detect_command(&frame, &arms());
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].name, "forward");
        assert_eq!(commands[0].parameters, vec![0.0, 10.0, -3.0]);
    }

    #[test]
    fn differing_sides_list_left_first() {
        let frame = arms_frame(0.0, 0.0, 90.0, 0.0);
        let commands = PoseClassifier::default().detect_command(&frame, &arms());
        assert_eq!(chain_names(&commands), vec!["arms.left_forward", "right_down"]);
    }

    #[test]
    fn elbow_roll_is_mirrored_on_the_left() {
        let spec = JointGroupSpec::for_group(JointGroup::Elbows);
        let frame = JointFrame::new()
            .with(L_ELBOW_ROLL, (-88.5f64).to_radians())
            .with(R_ELBOW_ROLL, (80.2f64).to_radians());
        let left = classify_side(&frame, &spec, &ELBOW_ROLL, ELBOW_BEND_RULES, Side::Left).unwrap();
        let right =
            classify_side(&frame, &spec, &ELBOW_ROLL, ELBOW_BEND_RULES, Side::Right).unwrap();
        assert_eq!(left.symbol, "bent");
        assert_eq!(left.offsets, vec![0.0]);
        assert_eq!(right.symbol, "bent");
        assert_eq!(right.offsets, vec![-8.0]);
    }

    #[test]
    fn elbow_axes_are_reported_independently() {
        let spec = JointGroupSpec::new([L_ELBOW_YAW, R_ELBOW_YAW]);
        let frame = JointFrame::new()
            .with(L_ELBOW_YAW, (-90f64).to_radians())
            .with(R_ELBOW_YAW, (90f64).to_radians())
            .with(L_ELBOW_ROLL, 0.0);
        let commands = PoseClassifier::default().detect_command(&frame, &spec);
        assert_eq!(chain_names(&commands), vec!["elbows.turn_up"]);
    }

    #[test]
    fn hands_have_no_parameters() {
        let spec = JointGroupSpec::for_group(JointGroup::Hands);
        let frame = JointFrame::new().with(L_HAND, 0.5).with(R_HAND, 0.49);
        let commands = PoseClassifier::new(3.0).detect_command(&frame, &spec);
        assert_eq!(chain_names(&commands), vec!["hands.left_open", "right_close"]);
        assert!(commands.iter().all(|c| c.parameters.is_empty()));
    }

    #[test]
    fn head_reports_yaw_then_pitch() {
        let spec = JointGroupSpec::for_group(JointGroup::Head);
        let frame = JointFrame::new()
            .with(HEAD_YAW, (-80f64).to_radians())
            .with(HEAD_PITCH, (20f64).to_radians());
        let commands = PoseClassifier::default().detect_command(&frame, &spec);
        assert_eq!(chain_names(&commands), vec!["head.right", "down"]);
        assert_eq!(commands[0].parameters, vec![0.0, 10.0]);
        assert_eq!(commands[1].parameters, vec![0.0, -10.0]);
    }

    #[test]
    fn single_axis_offsets_are_reading_minus_canonical() {
        let frame = JointFrame::new()
            .with(HEAD_YAW, (-80f64).to_radians())
            .with(HEAD_PITCH, (-20f64).to_radians())
            .with(L_WRIST_YAW, (-80f64).to_radians())
            .with(L_ELBOW_YAW, (-80f64).to_radians());
        let spec = JointGroupSpec::new([HEAD_YAW, HEAD_PITCH, L_WRIST_YAW, L_ELBOW_YAW]);
        let commands = PoseClassifier::default().detect_command(&frame, &spec);
        assert_eq!(
            chain_names(&commands),
            vec!["elbows.left_turn_up", "wrists.left_turn_in", "head.right", "up"]
        );
        for command in &commands {
            assert_eq!(command.parameters, vec![0.0, 10.0], "{}", command.name);
        }
    }

    #[test]
    fn spec_outside_frame_gives_nothing() {
        let frame = arms_frame(0.0, 0.0, 0.0, 0.0);
        let spec = JointGroupSpec::for_group(JointGroup::Hands);
        assert!(PoseClassifier::default().detect_command(&frame, &spec).is_empty());
        assert!(PoseClassifier::default()
            .detect_command(&frame, &JointGroupSpec::default())
            .is_empty());
    }

    #[test]
    fn out_of_range_angles_still_classify() {
        let frame = arms_frame(400.0, 0.0, 400.0, 0.0);
        let commands = PoseClassifier::default().detect_command(&frame, &arms());
        assert_eq!(chain_names(&commands), vec!["arms.back"]);
    }
}
