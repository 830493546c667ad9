use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::ThreeValued;

/// The three flag colors, in partition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    White,
    Blue,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidColor {
    #[error("color code {0} is out of range, expected 0, 1 or 2")]
    OutOfRange(i64),

    #[error("unknown color {0:?}, expected 0, 1, 2, red, white or blue")]
    Unknown(String),
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::White, Color::Blue];

    /// Numeric code of the color, `0` for red up to `2` for blue.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::White => "white",
            Color::Blue => "blue",
        }
    }
}

impl ThreeValued for Color {
    #[inline(always)]
    fn class(&self) -> Ordering {
        match self {
            Color::Red => Ordering::Less,
            Color::White => Ordering::Equal,
            Color::Blue => Ordering::Greater,
        }
    }
}

impl TryFrom<i64> for Color {
    type Error = InvalidColor;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Color::Red),
            1 => Ok(Color::White),
            2 => Ok(Color::Blue),
            _ => Err(InvalidColor::OutOfRange(code)),
        }
    }
}

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // Plain decimal codes only, no sign and no leading zeros.
        let is_code = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s.len() == 1 || !s.starts_with('0'));
        if is_code {
            if let Ok(code) = s.parse::<i64>() {
                return Color::try_from(code);
            }
        }

        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "white" => Ok(Color::White),
            "blue" => Ok(Color::Blue),
            _ => Err(InvalidColor::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.name())
        } else {
            write!(f, "{}", self.code())
        }
    }
}
