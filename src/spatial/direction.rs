//! Axis-aligned neighbour directions shared by the rule compiler and the solver

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six axis-aligned neighbour directions
///
/// The declaration order is the canonical order used everywhere a direction
/// is iterated: propagation visits neighbours in this order and face sets are
/// serialized in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Positive y
    Up,
    /// Negative y
    Down,
    /// Negative x
    Left,
    /// Positive x
    Right,
    /// Positive z
    Forward,
    /// Negative z
    Back,
}

impl Direction {
    /// All directions in canonical order
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::Forward,
        Self::Back,
    ];

    /// The four directions perpendicular to the vertical axis
    pub const HORIZONTAL: [Self; 4] = [Self::Left, Self::Forward, Self::Right, Self::Back];

    /// Position of this direction in canonical order
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
            Self::Forward => 4,
            Self::Back => 5,
        }
    }

    /// Unit offset in grid coordinates (x, y, z)
    pub const fn offset(self) -> [i32; 3] {
        match self {
            Self::Up => [0, 1, 0],
            Self::Down => [0, -1, 0],
            Self::Left => [-1, 0, 0],
            Self::Right => [1, 0, 0],
            Self::Forward => [0, 0, 1],
            Self::Back => [0, 0, -1],
        }
    }

    /// The direction pointing the other way along the same axis
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Forward => Self::Back,
            Self::Back => Self::Forward,
        }
    }

    /// Where a face pointing this way ends up after a 90° turn about the vertical axis
    ///
    /// Left goes to Forward, Forward to Right, Right to Back and Back to Left.
    /// Up and Down are fixed.
    pub const fn quarter_turn(self) -> Self {
        match self {
            Self::Left => Self::Forward,
            Self::Forward => Self::Right,
            Self::Right => Self::Back,
            Self::Back => Self::Left,
            Self::Up | Self::Down => self,
        }
    }

    /// Apply `steps` quarter turns (taken modulo 4)
    pub const fn turned(self, steps: u8) -> Self {
        let mut direction = self;
        let mut remaining = steps % 4;
        while remaining > 0 {
            direction = direction.quarter_turn();
            remaining -= 1;
        }
        direction
    }

    /// Whether this direction lies on the vertical axis
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Forward => "forward",
            Self::Back => "back",
        };
        f.write_str(name)
    }
}

/// Exactly one value per direction
///
/// Backs face label sets and per-direction neighbour lists. Stored as named
/// fields so lookups never go through a fallible index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionMap<T> {
    /// Value for [`Direction::Up`]
    pub up: T,
    /// Value for [`Direction::Down`]
    pub down: T,
    /// Value for [`Direction::Left`]
    pub left: T,
    /// Value for [`Direction::Right`]
    pub right: T,
    /// Value for [`Direction::Forward`]
    pub forward: T,
    /// Value for [`Direction::Back`]
    pub back: T,
}

impl<T> DirectionMap<T> {
    /// Build a map by evaluating `f` once per direction in canonical order
    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        Self {
            up: f(Direction::Up),
            down: f(Direction::Down),
            left: f(Direction::Left),
            right: f(Direction::Right),
            forward: f(Direction::Forward),
            back: f(Direction::Back),
        }
    }

    /// Value stored for a direction
    pub const fn get(&self, direction: Direction) -> &T {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
            Direction::Forward => &self.forward,
            Direction::Back => &self.back,
        }
    }

    /// Mutable value stored for a direction
    pub const fn get_mut(&mut self, direction: Direction) -> &mut T {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Forward => &mut self.forward,
            Direction::Back => &mut self.back,
        }
    }

    /// Iterate `(direction, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL
            .into_iter()
            .map(move |direction| (direction, self.get(direction)))
    }

    /// Transform every value, keeping the direction it belongs to
    pub fn map<U>(&self, mut f: impl FnMut(Direction, &T) -> U) -> DirectionMap<U> {
        DirectionMap::from_fn(|direction| f(direction, self.get(direction)))
    }
}

/// Grid coordinate one step from `coordinate` in `direction`
///
/// Returns `None` when the step would leave the non-negative range; upper
/// bounds are the grid's concern.
pub fn step(coordinate: [usize; 3], direction: Direction) -> Option<[usize; 3]> {
    let offset = direction.offset();
    let mut next = [0; 3];
    for ((slot, &value), &delta) in next.iter_mut().zip(&coordinate).zip(&offset) {
        *slot = value.checked_add_signed(delta as isize)?;
    }
    Some(next)
}
