//! Socket labels and rotation of a tile's six faces

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::spatial::direction::{Direction, DirectionMap};

/// Compatibility tag on one face of a tile
///
/// Two faces fit together exactly when their labels are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceLabel(Cow<'static, str>);

impl FaceLabel {
    /// Solid ground
    pub const GROUND: Self = Self(Cow::Borrowed("ground"));
    /// Open space
    pub const AIR: Self = Self(Cow::Borrowed("air"));
    /// Road surface
    pub const ROAD: Self = Self(Cow::Borrowed("road"));
    /// Building wall
    pub const BUILDING: Self = Self(Cow::Borrowed("building"));

    /// Create a label from any name
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Label name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a face with this label may touch a face with `other`
    pub fn matches(&self, other: &Self) -> bool {
        self == other
    }
}

impl fmt::Display for FaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The six face labels of a tile, one per direction
pub type Faces = DirectionMap<FaceLabel>;

impl Faces {
    /// Same label on every face
    pub fn uniform(label: &FaceLabel) -> Self {
        Self::from_fn(|_| label.clone())
    }

    /// Labels after `steps` quarter turns about the vertical axis
    ///
    /// Each turn moves the label on Left to Forward, Forward to Right, Right
    /// to Back and Back to Left; Up and Down stay where they are. Four turns
    /// give back the original set.
    #[must_use]
    pub fn rotated(&self, steps: u8) -> Self {
        let mut rotated = self.clone();
        for direction in Direction::ALL {
            *rotated.get_mut(direction.turned(steps)) = self.get(direction).clone();
        }
        rotated
    }

    /// Labels of the four horizontal faces in quarter-turn order
    /// (Left, Forward, Right, Back)
    pub fn horizontal_cycle(&self) -> [&FaceLabel; 4] {
        Direction::HORIZONTAL.map(|direction| self.get(direction))
    }
}
