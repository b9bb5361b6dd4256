// src/joints.rs - Joint frames, NAO joint groups and frame loading
use crate::error::{Result, TranslatorError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::io::Read;
use std::str::FromStr;

pub const L_SHOULDER_PITCH: &str = "LShoulderPitch";
pub const L_SHOULDER_ROLL: &str = "LShoulderRoll";
pub const R_SHOULDER_PITCH: &str = "RShoulderPitch";
pub const R_SHOULDER_ROLL: &str = "RShoulderRoll";
pub const L_ELBOW_YAW: &str = "LElbowYaw";
pub const L_ELBOW_ROLL: &str = "LElbowRoll";
pub const R_ELBOW_YAW: &str = "RElbowYaw";
pub const R_ELBOW_ROLL: &str = "RElbowRoll";
pub const L_WRIST_YAW: &str = "LWristYaw";
pub const R_WRIST_YAW: &str = "RWristYaw";
pub const L_HAND: &str = "LHand";
pub const R_HAND: &str = "RHand";
pub const HEAD_YAW: &str = "HeadYaw";
pub const HEAD_PITCH: &str = "HeadPitch";

/// Semantic joint families. Declaration order is the order families are
/// classified in when one group spec spans several of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum JointGroup {
    Arms,
    Elbows,
    Wrists,
    Hands,
    Head,
}

static GROUP_BY_JOINT: Lazy<HashMap<&'static str, JointGroup>> = Lazy::new(|| {
    JointGroup::ALL
        .iter()
        .flat_map(|group| group.joints().iter().map(move |joint| (*joint, *group)))
        .collect()
});

impl JointGroup {
    pub const ALL: [JointGroup; 5] = [
        JointGroup::Arms,
        JointGroup::Elbows,
        JointGroup::Wrists,
        JointGroup::Hands,
        JointGroup::Head,
    ];

    /// Attribute name of the family on the fluent root object.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arms => "arms",
            Self::Elbows => "elbows",
            Self::Wrists => "wrists",
            Self::Hands => "hands",
            Self::Head => "head",
        }
    }

    pub fn joints(&self) -> &'static [&'static str] {
        match self {
            Self::Arms => &[L_SHOULDER_PITCH, L_SHOULDER_ROLL, R_SHOULDER_PITCH, R_SHOULDER_ROLL],
            Self::Elbows => &[L_ELBOW_YAW, L_ELBOW_ROLL, R_ELBOW_YAW, R_ELBOW_ROLL],
            Self::Wrists => &[L_WRIST_YAW, R_WRIST_YAW],
            Self::Hands => &[L_HAND, R_HAND],
            Self::Head => &[HEAD_YAW, HEAD_PITCH],
        }
    }

    pub fn of_joint(joint: &str) -> Option<JointGroup> {
        GROUP_BY_JOINT.get(joint).copied()
    }
}

impl fmt::Display for JointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JointGroup {
    type Err = TranslatorError;

    fn from_str(s: &str) -> Result<Self> {
        JointGroup::ALL
            .iter()
            .copied()
            .find(|group| group.as_str() == s.trim())
            .ok_or_else(|| TranslatorError::UnknownGroup(s.to_string()))
    }
}

impl TryFrom<String> for JointGroup {
    type Error = TranslatorError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// One captured snapshot: joint name to angle in radians.
///
/// A joint missing from the frame was not observed. It is never treated as
/// zero. Hand joints carry an aperture in `0.0..=1.0` instead of an angle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JointFrame {
    angles: HashMap<String, f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FrameDocument {
    One(JointFrame),
    Many(Vec<JointFrame>),
}

impl JointFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, joint: impl Into<String>, angle: f64) -> Self {
        self.insert(joint, angle);
        self
    }

    pub fn insert(&mut self, joint: impl Into<String>, angle: f64) {
        self.angles.insert(joint.into(), angle);
    }

    pub fn get(&self, joint: &str) -> Option<f64> {
        self.angles.get(joint).copied()
    }

    pub fn contains(&self, joint: &str) -> bool {
        self.angles.contains_key(joint)
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.angles.iter().map(|(name, angle)| (name.as_str(), *angle))
    }

    /// Parses a single frame object, e.g. `{"LHand": 0.2, "RHand": 0.9}`.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let frame: JointFrame = serde_json::from_str(input)?;
        frame.validate()?;
        Ok(frame)
    }

    /// Parses either one frame object or an array of them.
    pub fn many_from_json_str(input: &str) -> Result<Vec<Self>> {
        let frames = match serde_json::from_str::<FrameDocument>(input)? {
            FrameDocument::One(frame) => vec![frame],
            FrameDocument::Many(frames) => frames,
        };
        for frame in &frames {
            frame.validate()?;
        }
        Ok(frames)
    }

    /// Reads recorded frames from CSV: a header row of joint names, then one
    /// frame per row. Empty cells mean the joint was not observed.
    pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Self>> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let mut frames = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let mut frame = JointFrame::new();

            for (joint, cell) in headers.iter().zip(record.iter()) {
                let cell = cell.trim();
                if cell.is_empty() {
                    continue;
                }
                let angle: f64 = cell
                    .parse()
                    .map_err(|_| TranslatorError::invalid_angle(joint, cell))?;
                frame.insert(joint.trim(), angle);
            }

            frame.validate()?;
            frames.push(frame);
        }

        Ok(frames)
    }

    fn validate(&self) -> Result<()> {
        match self.angles.iter().find(|(_, angle)| !angle.is_finite()) {
            Some((joint, angle)) => Err(TranslatorError::invalid_angle(joint.as_str(), angle)),
            None => Ok(()),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for JointFrame {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            angles: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// The joints one classifier call is allowed to look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JointGroupSpec {
    joints: BTreeSet<String>,
}

impl JointGroupSpec {
    pub fn new<I, S>(joints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            joints: joints.into_iter().map(Into::into).collect(),
        }
    }

    pub fn for_group(group: JointGroup) -> Self {
        Self::new(group.joints().iter().copied())
    }

    pub fn contains(&self, joint: &str) -> bool {
        self.joints.contains(joint)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.joints.iter().map(String::as_str)
    }

    /// Angle of `joint` if this group names it and the frame observed it.
    pub fn angle(&self, frame: &JointFrame, joint: &str) -> Option<f64> {
        if self.contains(joint) {
            frame.get(joint)
        } else {
            None
        }
    }

    /// Families touched by the spec, in classification order. Names that are
    /// not NAO joints are ignored.
    pub fn groups(&self) -> BTreeSet<JointGroup> {
        self.iter().filter_map(JointGroup::of_joint).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for JointGroupSpec {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
