//! Axis constraints and typed exact-number entry.

use std::fmt;

use glam::Vec3;

/// A world or local coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Three independent axis locks with toggle semantics.
///
/// An empty mask means "unconstrained".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisMask {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl AxisMask {
    pub fn is_empty(&self) -> bool {
        !(self.x || self.y || self.z)
    }

    pub fn contains(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn toggle(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.x = !self.x,
            Axis::Y => self.y = !self.y,
            Axis::Z => self.z = !self.z,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Take the masked components from `value` and the rest from `fallback`.
    pub fn select(&self, value: Vec3, fallback: Vec3) -> Vec3 {
        Vec3::new(
            if self.x { value.x } else { fallback.x },
            if self.y { value.y } else { fallback.y },
            if self.z { value.z } else { fallback.z },
        )
    }

    /// Zero every unmasked component.
    pub fn mask(&self, value: Vec3) -> Vec3 {
        self.select(value, Vec3::ZERO)
    }

    /// The single axis a rotation honours; Z wins over Y, Y over X.
    pub fn rotation_axis(&self) -> Option<Axis> {
        if self.z {
            Some(Axis::Z)
        } else if self.y {
            Some(Axis::Y)
        } else if self.x {
            Some(Axis::X)
        } else {
            None
        }
    }
}

impl fmt::Display for AxisMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("free");
        }
        for (set, name) in [(self.x, "X"), (self.y, "Y"), (self.z, "Z")] {
            if set {
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}

/// Typed numeric override, kept as the raw characters the user entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExactNumberEntry {
    text: String,
}

impl ExactNumberEntry {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a digit, `.` or `-`. Other characters are ignored.
    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.text.push(c);
        }
    }

    /// Remove the last character; no-op on an empty buffer.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The override value, or `None` when the buffer does not hold a number.
    ///
    /// Partial input such as `-`, `.` or `1-2` fails closed.
    pub fn value(&self) -> Option<f32> {
        if matches!(self.text.as_str(), "" | "-" | ".") {
            return None;
        }
        self.text.parse::<f32>().ok().filter(|v| v.is_finite())
    }
}
