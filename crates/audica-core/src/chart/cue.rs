use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// How a cue has to be hit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    FromRepr,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Behavior {
    #[default]
    Standard = 0,
    Vertical = 1,
    Horizontal = 2,
    Hold = 3,
    ChainStart = 4,
    Chain = 5,
    Melee = 6,
}

impl Behavior {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Behavior {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| format!("unknown cue behavior {}", value))
    }
}

impl From<Behavior> for u8 {
    fn from(behavior: Behavior) -> Self {
        behavior.code()
    }
}

/// Which hand (gun) a cue is assigned to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    FromRepr,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum HandType {
    #[default]
    Either = 0,
    Right = 1,
    Left = 2,
}

impl HandType {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for HandType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| format!("unknown hand type {}", value))
    }
}

impl From<HandType> for u8 {
    fn from(hand: HandType) -> Self {
        hand.code()
    }
}

/// Fractional offset of a cue from its pitch cell.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridOffset {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

/// A single playable note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cue {
    pub tick: i64,
    #[serde(default)]
    pub tick_length: i64,
    /// Grid cell: column is `pitch mod 12`, row is `pitch / 12`.
    pub pitch: i32,
    #[serde(default)]
    pub velocity: i32,
    #[serde(default)]
    pub grid_offset: GridOffset,
    #[serde(default)]
    pub z_offset: f32,
    #[serde(default)]
    pub hand_type: HandType,
    #[serde(default)]
    pub behavior: Behavior,
}

impl Cue {
    /// Target position on the 2D grid, including the fractional offset.
    pub fn coordinates(&self) -> (f32, f32) {
        let x = self.pitch.rem_euclid(12) as f32 + self.grid_offset.x;
        let y = self.pitch.div_euclid(12) as f32 + self.grid_offset.y;
        (x, y)
    }

    /// Fragment of the canonical chart descriptor used for identity hashing.
    pub fn descriptor(&self) -> String {
        format!(
            "{};{};{};{};{:.3};{:.3};{:.3};{};{};",
            self.tick,
            self.tick_length,
            self.pitch,
            self.velocity,
            self.grid_offset.x,
            self.grid_offset.y,
            self.z_offset,
            self.hand_type.code(),
            self.behavior.code(),
        )
    }
}
