// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color triple for LED strip rendering.

use std::fmt;

/// RGB color with 8-bit channels (0-255).
///
/// The profiles use colors both as stored property payloads (three bytes on
/// the wire) and as the input to LED strip rendering, where each channel is
/// scaled by a brightness value before being written out.
///
/// # Examples
///
/// ```
/// use echor_lib::types::Rgb;
///
/// let color = Rgb::new(0, 0, 255);
/// assert_eq!(color.scaled(255), color);
/// assert_eq!(Rgb::WHITE.scaled(0), Rgb::BLACK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Rgb {
    /// Full white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// All channels off.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scales each channel by `brightness / 255`, matching the integer math
    /// of the LED strip renderers.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn scaled(&self, brightness: u8) -> Self {
        Self {
            r: (self.r as u16 * brightness as u16 / 255) as u8,
            g: (self.g as u16 * brightness as u16 / 255) as u8,
            b: (self.b as u16 * brightness as u16 / 255) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_full_brightness_is_identity() {
        let color = Rgb::new(255, 35, 0);
        assert_eq!(color.scaled(255), color);
    }

    #[test]
    fn scaled_zero_is_black() {
        assert_eq!(Rgb::WHITE.scaled(0), Rgb::BLACK);
    }

    #[test]
    fn scaled_uses_integer_math() {
        // 255 * 165 / 255 = 165, 35 * 165 / 255 = 22 (truncated)
        let color = Rgb::new(255, 35, 0).scaled(165);
        assert_eq!(color, Rgb::new(165, 22, 0));
    }

    #[test]
    fn rgb_display() {
        assert_eq!(Rgb::new(10, 20, 30).to_string(), "(10, 20, 30)");
    }

    #[test]
    fn rgb_from_tuple() {
        let color: Rgb = (255u8, 150u8, 0u8).into();
        assert_eq!(color, Rgb::new(255, 150, 0));
    }
}
