//! Path-definition mini-language.
//!
//! A path definition is a command string in the familiar `M`/`L`/`C`/…
//! form: each command is a single letter (uppercase absolute, lowercase
//! relative to the current point) followed by numeric arguments separated
//! by whitespace and/or a configurable separator character. A lone minus
//! sign may begin a number without a preceding separator.
//!
//! Unrecognized command letters are rejected as parse errors rather than
//! skipped, and a definition holds exactly one subpath.

use crate::error::{ParseError, Result};
use crate::geometry::curve::Curve;
use crate::geometry::polycurve::{PathSegment, Polycurve};
use crate::math::Point2;

/// Options shared by [`parse`] and [`serialize`].
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Separator accepted (and emitted) between coordinate values, in
    /// addition to whitespace.
    pub separator: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { separator: ',' }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

fn tokenize(text: &str, separator: char) -> Result<Vec<Token>> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() || c == separator {
            i += 1;
            continue;
        }
        if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() {
            let start = i;
            i += 1;
            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() || d == '.' {
                    i += 1;
                } else if (d == 'e' || d == 'E')
                    && chars.get(i + 1).is_some_and(|n| {
                        n.is_ascii_digit() || *n == '-' || *n == '+'
                    })
                {
                    i += 2;
                } else {
                    break;
                }
            }
            let tok: String = chars[start..i].iter().collect();
            let v: f64 = tok
                .parse()
                .map_err(|_| ParseError::MalformedNumber(tok))?;
            tokens.push(Token::Number(v));
            continue;
        }
        if c.is_ascii_alphabetic() {
            tokens.push(Token::Command(c));
            i += 1;
            continue;
        }
        return Err(ParseError::Malformed(format!("unexpected character '{c}'")).into());
    }
    Ok(tokens)
}

/// Parses a path definition into a [`Polycurve`].
///
/// # Errors
///
/// `ParseError` variants for unknown commands, malformed numbers, missing
/// or repeated move-to commands, wrong argument arity, and trailing
/// commands after a close.
pub fn parse(definition: &str, options: &ParseOptions) -> Result<Polycurve> {
    let tokens = tokenize(definition, options.separator)?;
    let mut parser = PathParser {
        tokens,
        pos: 0,
        path: None,
        current: Point2::origin(),
        subpath_start: Point2::origin(),
        last_cubic_ctrl: None,
        last_quad_ctrl: None,
        closed: false,
    };
    parser.run()
}

struct PathParser {
    tokens: Vec<Token>,
    pos: usize,
    path: Option<Polycurve>,
    current: Point2,
    subpath_start: Point2,
    last_cubic_ctrl: Option<Point2>,
    last_quad_ctrl: Option<Point2>,
    closed: bool,
}

impl PathParser {
    fn run(mut self) -> Result<Polycurve> {
        while self.pos < self.tokens.len() {
            let token = self.tokens[self.pos];
            self.pos += 1;
            let Token::Command(cmd) = token else {
                return Err(
                    ParseError::Malformed("expected a command letter".to_string()).into(),
                );
            };
            if self.closed {
                return Err(ParseError::Malformed(format!(
                    "command '{cmd}' after close"
                ))
                .into());
            }
            self.command(cmd)?;
        }
        self.path.ok_or_else(|| ParseError::MissingMoveTo.into())
    }

    fn command(&mut self, cmd: char) -> Result<()> {
        let relative = cmd.is_ascii_lowercase();
        if self.path.is_none() && !matches!(cmd, 'M' | 'm') {
            return Err(ParseError::MissingMoveTo.into());
        }

        match cmd.to_ascii_uppercase() {
            'M' => {
                if self.path.is_some() {
                    return Err(ParseError::Malformed(
                        "a definition holds a single subpath".to_string(),
                    )
                    .into());
                }
                let p = self.point(relative)?;
                self.path = Some(Polycurve::new(p));
                self.current = p;
                self.subpath_start = p;
                self.reset_reflections();
            }
            'Z' => {
                self.path_mut()?.close();
                self.current = self.subpath_start;
                self.closed = true;
                self.reset_reflections();
            }
            'L' => {
                let p = self.point(relative)?;
                self.path_mut()?.add_line_to(p);
                self.current = p;
                self.reset_reflections();
            }
            'H' => {
                let x = self.number()?;
                let p = if relative {
                    Point2::new(self.current.x + x, self.current.y)
                } else {
                    Point2::new(x, self.current.y)
                };
                self.path_mut()?.add_line_to(p);
                self.current = p;
                self.reset_reflections();
            }
            'V' => {
                let y = self.number()?;
                let p = if relative {
                    Point2::new(self.current.x, self.current.y + y)
                } else {
                    Point2::new(self.current.x, y)
                };
                self.path_mut()?.add_line_to(p);
                self.current = p;
                self.reset_reflections();
            }
            'C' => {
                let c1 = self.point(relative)?;
                let c2 = self.point(relative)?;
                let end = self.point(relative)?;
                self.path_mut()?.add_cubic_to(c1, c2, end);
                self.current = end;
                self.last_cubic_ctrl = Some(c2);
                self.last_quad_ctrl = None;
            }
            'S' => {
                let c1 = reflect(self.last_cubic_ctrl.unwrap_or(self.current), self.current);
                let c2 = self.point(relative)?;
                let end = self.point(relative)?;
                self.path_mut()?.add_cubic_to(c1, c2, end);
                self.current = end;
                self.last_cubic_ctrl = Some(c2);
                self.last_quad_ctrl = None;
            }
            'Q' => {
                let ctrl = self.point(relative)?;
                let end = self.point(relative)?;
                self.path_mut()?.add_quadratic_to(ctrl, end);
                self.current = end;
                self.last_quad_ctrl = Some(ctrl);
                self.last_cubic_ctrl = None;
            }
            'T' => {
                let ctrl = reflect(self.last_quad_ctrl.unwrap_or(self.current), self.current);
                let end = self.point(relative)?;
                self.path_mut()?.add_quadratic_to(ctrl, end);
                self.current = end;
                self.last_quad_ctrl = Some(ctrl);
                self.last_cubic_ctrl = None;
            }
            'A' => {
                let rx = self.number()?;
                let ry = self.number()?;
                let rotation_deg = self.number()?;
                let large_arc = self.flag()?;
                let sweep = self.flag()?;
                let end = self.point(relative)?;
                self.path_mut()?
                    .add_arc_to(rx, ry, rotation_deg.to_radians(), large_arc, sweep, end);
                self.current = end;
                self.reset_reflections();
            }
            other => return Err(ParseError::UnknownCommand(other).into()),
        }
        Ok(())
    }

    fn path_mut(&mut self) -> Result<&mut Polycurve> {
        self.path
            .as_mut()
            .ok_or_else(|| ParseError::MissingMoveTo.into())
    }

    fn reset_reflections(&mut self) {
        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = None;
    }

    fn number(&mut self) -> Result<f64> {
        match self.tokens.get(self.pos) {
            Some(Token::Number(v)) => {
                self.pos += 1;
                Ok(*v)
            }
            Some(Token::Command(c)) => Err(ParseError::Malformed(format!(
                "expected a number, found command '{c}'"
            ))
            .into()),
            None => {
                Err(ParseError::Malformed("unexpected end of definition".to_string()).into())
            }
        }
    }

    fn flag(&mut self) -> Result<bool> {
        let v = self.number()?;
        if v == 0.0 {
            Ok(false)
        } else if v == 1.0 {
            Ok(true)
        } else {
            Err(ParseError::Malformed(format!("arc flag must be 0 or 1, got {v}")).into())
        }
    }

    fn point(&mut self, relative: bool) -> Result<Point2> {
        let x = self.number()?;
        let y = self.number()?;
        if relative {
            Ok(Point2::new(self.current.x + x, self.current.y + y))
        } else {
            Ok(Point2::new(x, y))
        }
    }
}

fn reflect(p: Point2, about: Point2) -> Point2 {
    Point2::new(2.0 * about.x - p.x, 2.0 * about.y - p.y)
}

/// Serializes a path to its definition string, in absolute commands.
///
/// Axis-aligned line segments canonicalize to `H`/`V`; a closed path's
/// final closing line is folded into `Z`.
#[must_use]
pub fn serialize(path: &Polycurve, options: &ParseOptions) -> String {
    let sep = options.separator;
    let start = path.start();
    let mut out = format!("M{}{}{}", start.x, sep, start.y);

    let segments = path.segments();
    for (i, seg) in segments.iter().enumerate() {
        let is_closing_line = path.is_closed()
            && i == segments.len() - 1
            && matches!(seg, PathSegment::Line(l) if l.b() == start);
        if is_closing_line {
            break;
        }
        match seg {
            PathSegment::Line(l) => {
                let from = l.a();
                let to = l.b();
                if to.y == from.y {
                    out.push_str(&format!(" H{}", to.x));
                } else if to.x == from.x {
                    out.push_str(&format!(" V{}", to.y));
                } else {
                    out.push_str(&format!(" L{}{}{}", to.x, sep, to.y));
                }
            }
            PathSegment::Quadratic(q) => {
                let c = q.b();
                let to = q.c();
                out.push_str(&format!(" Q{}{}{} {}{}{}", c.x, sep, c.y, to.x, sep, to.y));
            }
            PathSegment::Cubic(c) => {
                let (c1, c2, to) = (c.b(), c.c(), c.d());
                out.push_str(&format!(
                    " C{}{}{} {}{}{} {}{}{}",
                    c1.x, sep, c1.y, c2.x, sep, c2.y, to.x, sep, to.y
                ));
            }
            PathSegment::Arc(a) => {
                let to = a.end();
                out.push_str(&format!(
                    " A{}{}{} {} {} {} {}{}{}",
                    a.rx(),
                    sep,
                    a.ry(),
                    a.x_rotation().to_degrees(),
                    i32::from(a.large_arc()),
                    i32::from(a.sweep()),
                    to.x,
                    sep,
                    to.y
                ));
            }
        }
    }

    if path.is_closed() {
        out.push_str(" Z");
    }
    out
}
