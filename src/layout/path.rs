// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

/// Arc sweep direction as encoded in the SVG `sweep-flag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    CounterClockwise,
    Clockwise,
}

impl Sweep {
    pub fn flag(self) -> u8 {
        match self {
            Self::CounterClockwise => 0,
            Self::Clockwise => 1,
        }
    }
}

/// One SVG path-data command. Lowercase SVG commands are the `*By` (relative) variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    MoveBy { dx: f64, dy: f64 },
    LineTo { x: f64, y: f64 },
    LineBy { dx: f64, dy: f64 },
    HorizontalTo { x: f64 },
    VerticalTo { y: f64 },
    VerticalBy { dy: f64 },
    /// Relative quarter-arc with equal radii, no rotation and the small-arc flag cleared.
    ArcBy { radius: f64, sweep: Sweep, dx: f64, dy: f64 },
}

impl PathCommand {
    pub fn letter(&self) -> char {
        match self {
            Self::MoveTo { .. } => 'M',
            Self::MoveBy { .. } => 'm',
            Self::LineTo { .. } => 'L',
            Self::LineBy { .. } => 'l',
            Self::HorizontalTo { .. } => 'H',
            Self::VerticalTo { .. } => 'V',
            Self::VerticalBy { .. } => 'v',
            Self::ArcBy { .. } => 'a',
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.letter();
        match *self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => {
                write!(f, "{letter} {} {}", Num(x), Num(y))
            }
            Self::MoveBy { dx, dy } | Self::LineBy { dx, dy } => {
                write!(f, "{letter} {} {}", Num(dx), Num(dy))
            }
            Self::HorizontalTo { x } => write!(f, "{letter} {}", Num(x)),
            Self::VerticalTo { y } => write!(f, "{letter} {}", Num(y)),
            Self::VerticalBy { dy } => write!(f, "{letter} {}", Num(dy)),
            Self::ArcBy { radius, sweep, dx, dy } => write!(
                f,
                "{letter} {r} {r} 0 0 {} {} {}",
                sweep.flag(),
                Num(dx),
                Num(dy),
                r = Num(radius),
            ),
        }
    }
}

/// Shortest-form number output; negative zero prints as `0`.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            return f.write_str("0");
        }
        write!(f, "{}", self.0)
    }
}

/// A complete connector path. Renders as SVG path data with single spaces between tokens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    commands: SmallVec<[PathCommand; 12]>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn count(&self, letter: char) -> usize {
        self.commands.iter().filter(|cmd| cmd.letter() == letter).count()
    }
}

impl Extend<PathCommand> for PathData {
    fn extend<I: IntoIterator<Item = PathCommand>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, command) in self.commands.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}
