// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape geometry: outline construction and the path-data parser.
//!
//! Every shape is interpreted relative to its object's world-space bounding
//! box, and outline construction is total: malformed polygon or path data
//! degrades to the plain bounding rectangle so one bad record can never
//! abort a repaint.

use alloc::string::String;
use core::fmt;

use kurbo::{Affine, BezPath, Circle, Ellipse, Point, Rect, RoundedRect, Shape as _};
use smallvec::SmallVec;

/// Flattening tolerance for converting analytic shapes into Bézier paths.
const OUTLINE_TOLERANCE: f64 = 0.1;

/// Geometry of a map object, interpreted relative to its bounding box.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle filling the bounding box, with an optional
    /// uniform corner radius.
    Rect {
        /// Corner radius in world units; `0.0` means sharp corners.
        radius: f64,
    },
    /// Circle inscribed in the bounding box (radius is half the smaller
    /// side), centered on the box center.
    Circle,
    /// Ellipse inscribed in the bounding box.
    Ellipse,
    /// Closed polygon; points are relative to the bounding box origin.
    Polygon {
        /// Vertices in order. Fewer than three degrade to the bounding
        /// rectangle.
        points: SmallVec<[Point; 8]>,
    },
    /// SVG-style path command string, relative to the bounding box origin.
    ///
    /// Supported commands: `M`/`m`, `L`/`l`, `H`/`h`, `V`/`v`, `C`/`c`,
    /// `Q`/`q`, `Z`/`z`. Unparseable data degrades to the bounding
    /// rectangle.
    Path {
        /// Raw path command string.
        data: String,
    },
}

impl Shape {
    /// Builds the world-space outline of this shape inside `bounds`.
    ///
    /// This never fails: malformed polygon or path data falls back to the
    /// plain bounding rectangle (see [`parse_path_data`] for the strict
    /// variant).
    #[must_use]
    pub fn outline(&self, bounds: Rect) -> BezPath {
        match self {
            Self::Rect { radius } => {
                if *radius > 0.0 {
                    RoundedRect::from_rect(bounds, *radius).to_path(OUTLINE_TOLERANCE)
                } else {
                    bounds.to_path(OUTLINE_TOLERANCE)
                }
            }
            Self::Circle => {
                let radius = bounds.width().min(bounds.height()) / 2.0;
                Circle::new(bounds.center(), radius).to_path(OUTLINE_TOLERANCE)
            }
            Self::Ellipse => Ellipse::new(
                bounds.center(),
                (bounds.width() / 2.0, bounds.height() / 2.0),
                0.0,
            )
            .to_path(OUTLINE_TOLERANCE),
            Self::Polygon { points } => {
                if points.len() < 3 {
                    return bounds.to_path(OUTLINE_TOLERANCE);
                }
                let mut path = BezPath::new();
                path.move_to(points[0]);
                for pt in &points[1..] {
                    path.line_to(*pt);
                }
                path.close_path();
                path.apply_affine(Affine::translate(bounds.origin().to_vec2()));
                path
            }
            Self::Path { data } => match parse_path_data(data) {
                Ok(mut path) => {
                    path.apply_affine(Affine::translate(bounds.origin().to_vec2()));
                    path
                }
                Err(_) => bounds.to_path(OUTLINE_TOLERANCE),
            },
        }
    }
}

/// Error produced by [`parse_path_data`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PathError {
    /// A command letter outside the supported subset.
    UnknownCommand(char),
    /// A coordinate was expected but not found.
    ExpectedNumber,
    /// A drawing command appeared before any `M`/`m`.
    MissingMoveTo,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand(c) => write!(f, "unknown path command {c:?}"),
            Self::ExpectedNumber => f.write_str("expected a coordinate"),
            Self::MissingMoveTo => f.write_str("drawing command before any moveto"),
        }
    }
}

impl core::error::Error for PathError {}

/// Parses an SVG-style path command string into a Bézier path.
///
/// Coordinates are relative to the shape's bounding-box origin; callers
/// translate the result into world space. Commands may repeat their
/// argument groups implicitly (`M 0 0 10 0 10 10` draws two lines, as in
/// SVG). [`Shape::outline`] wraps this with the bounding-rect fallback.
pub fn parse_path_data(data: &str) -> Result<BezPath, PathError> {
    let bytes = data.as_bytes();
    let mut path = BezPath::new();
    let mut i = 0;
    let mut cmd: Option<u8> = None;
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    let mut have_current = false;

    loop {
        skip_separators(bytes, &mut i);
        if i >= bytes.len() {
            break;
        }
        let b = bytes[i];
        if b.is_ascii_alphabetic() {
            i += 1;
            match b {
                b'Z' | b'z' => {
                    if !have_current {
                        return Err(PathError::MissingMoveTo);
                    }
                    path.close_path();
                    current = subpath_start;
                    cmd = None;
                }
                b'M' | b'm' | b'L' | b'l' | b'H' | b'h' | b'V' | b'v' | b'C' | b'c' | b'Q'
                | b'q' => cmd = Some(b),
                other => return Err(PathError::UnknownCommand(other as char)),
            }
            continue;
        }

        let Some(c) = cmd else {
            // A number with no command in effect (for example right after `Z`).
            return Err(PathError::UnknownCommand(b as char));
        };
        let relative = c.is_ascii_lowercase();
        if !have_current && !matches!(c, b'M' | b'm') {
            return Err(PathError::MissingMoveTo);
        }

        match c.to_ascii_uppercase() {
            b'M' => {
                let p = read_point(bytes, &mut i, relative && have_current, current)?;
                path.move_to(p);
                current = p;
                subpath_start = p;
                have_current = true;
                // Further coordinate pairs after a moveto are implicit linetos.
                cmd = Some(if relative { b'l' } else { b'L' });
            }
            b'L' => {
                let p = read_point(bytes, &mut i, relative, current)?;
                path.line_to(p);
                current = p;
            }
            b'H' => {
                let x = read_coord(bytes, &mut i)?;
                let p = if relative {
                    Point::new(current.x + x, current.y)
                } else {
                    Point::new(x, current.y)
                };
                path.line_to(p);
                current = p;
            }
            b'V' => {
                let y = read_coord(bytes, &mut i)?;
                let p = if relative {
                    Point::new(current.x, current.y + y)
                } else {
                    Point::new(current.x, y)
                };
                path.line_to(p);
                current = p;
            }
            b'C' => {
                let p1 = read_point(bytes, &mut i, relative, current)?;
                let p2 = read_point(bytes, &mut i, relative, current)?;
                let p = read_point(bytes, &mut i, relative, current)?;
                path.curve_to(p1, p2, p);
                current = p;
            }
            b'Q' => {
                let p1 = read_point(bytes, &mut i, relative, current)?;
                let p = read_point(bytes, &mut i, relative, current)?;
                path.quad_to(p1, p);
                current = p;
            }
            _ => unreachable!("command set restricted above"),
        }
    }

    if !have_current {
        return Err(PathError::MissingMoveTo);
    }
    Ok(path)
}

fn skip_separators(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() && (bytes[*i].is_ascii_whitespace() || bytes[*i] == b',') {
        *i += 1;
    }
}

fn read_point(
    bytes: &[u8],
    i: &mut usize,
    relative: bool,
    current: Point,
) -> Result<Point, PathError> {
    let x = read_coord(bytes, i)?;
    let y = read_coord(bytes, i)?;
    if relative {
        Ok(Point::new(current.x + x, current.y + y))
    } else {
        Ok(Point::new(x, y))
    }
}

fn read_coord(bytes: &[u8], i: &mut usize) -> Result<f64, PathError> {
    skip_separators(bytes, i);
    let start = *i;
    let mut j = *i;
    if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
        j += 1;
    }
    let mut saw_digit = false;
    while j < bytes.len() && bytes[j].is_ascii_digit() {
        j += 1;
        saw_digit = true;
    }
    if j < bytes.len() && bytes[j] == b'.' {
        j += 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return Err(PathError::ExpectedNumber);
    }
    if j < bytes.len() && (bytes[j] == b'e' || bytes[j] == b'E') {
        let mut k = j + 1;
        if k < bytes.len() && (bytes[k] == b'+' || bytes[k] == b'-') {
            k += 1;
        }
        let exp_start = k;
        while k < bytes.len() && bytes[k].is_ascii_digit() {
            k += 1;
        }
        if k > exp_start {
            j = k;
        }
    }
    // The scanned range is pure ASCII, so the slice is valid UTF-8.
    let text = core::str::from_utf8(&bytes[start..j]).map_err(|_| PathError::ExpectedNumber)?;
    let value = text.parse::<f64>().map_err(|_| PathError::ExpectedNumber)?;
    *i = j;
    Ok(value)
}
