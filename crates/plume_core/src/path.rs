//! Typed path model
//!
//! A [`Path`] is the parsed form of compact SVG path data such as
//! `M4 6v4h2V6h4V4H6V0H4v4H0v2h4z`: an ordered list of commands, each a
//! letter plus its numeric arguments. Paths are immutable; transforms
//! return new paths.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::PathError;
use crate::parser;

/// Argument storage; seven covers one full arc segment without spilling
pub type Args = SmallVec<[f64; 7]>;

/// How the parser treats input outside the grammar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Reject unknown letters, stray characters and arguments with no command
    #[default]
    Strict,
    /// Drop anything outside the grammar and keep going
    Lenient,
}

/// Drawing operation named by a command letter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `M` / `m`
    MoveTo,
    /// `L` / `l`
    LineTo,
    /// `H` / `h`
    HorizontalTo,
    /// `V` / `v`
    VerticalTo,
    /// `C` / `c`
    CubicTo,
    /// `S` / `s`
    SmoothCubicTo,
    /// `Q` / `q`
    QuadTo,
    /// `T` / `t`
    SmoothQuadTo,
    /// `A` / `a`
    ArcTo,
    /// `Z` / `z`
    Close,
}

impl CommandKind {
    /// All command kinds, in letter order `a c h l m q s t v z`
    pub const ALL: [CommandKind; 10] = [
        CommandKind::ArcTo,
        CommandKind::CubicTo,
        CommandKind::HorizontalTo,
        CommandKind::LineTo,
        CommandKind::MoveTo,
        CommandKind::QuadTo,
        CommandKind::SmoothCubicTo,
        CommandKind::SmoothQuadTo,
        CommandKind::VerticalTo,
        CommandKind::Close,
    ];

    /// Look up a command letter. Returns the kind and whether the letter
    /// was lowercase (relative).
    pub fn from_letter(letter: char) -> Option<(Self, bool)> {
        let kind = match letter.to_ascii_lowercase() {
            'm' => Self::MoveTo,
            'l' => Self::LineTo,
            'h' => Self::HorizontalTo,
            'v' => Self::VerticalTo,
            'c' => Self::CubicTo,
            's' => Self::SmoothCubicTo,
            'q' => Self::QuadTo,
            't' => Self::SmoothQuadTo,
            'a' => Self::ArcTo,
            'z' => Self::Close,
            _ => return None,
        };
        Some((kind, letter.is_ascii_lowercase()))
    }

    /// The letter for this kind, lowercase when `relative`
    pub fn letter(self, relative: bool) -> char {
        let upper = match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalTo => 'H',
            Self::VerticalTo => 'V',
            Self::CubicTo => 'C',
            Self::SmoothCubicTo => 'S',
            Self::QuadTo => 'Q',
            Self::SmoothQuadTo => 'T',
            Self::ArcTo => 'A',
            Self::Close => 'Z',
        };
        if relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::MoveTo => "move to",
            Self::LineTo => "line to",
            Self::HorizontalTo => "horizontal line to",
            Self::VerticalTo => "vertical line to",
            Self::CubicTo => "cubic curve to",
            Self::SmoothCubicTo => "smooth cubic curve to",
            Self::QuadTo => "quadratic curve to",
            Self::SmoothQuadTo => "smooth quadratic curve to",
            Self::ArcTo => "elliptical arc to",
            Self::Close => "close path",
        }
    }
}

/// One command letter and its numeric arguments
#[derive(Clone, Debug, PartialEq)]
pub struct PathCommand {
    pub kind: CommandKind,
    /// Lowercase letter in the source
    pub relative: bool,
    pub args: Args,
}

impl PathCommand {
    pub fn new(kind: CommandKind, relative: bool, args: impl IntoIterator<Item = f64>) -> Self {
        Self {
            kind,
            relative,
            args: args.into_iter().collect(),
        }
    }

    /// The command letter, case preserved
    pub fn letter(&self) -> char {
        self.kind.letter(self.relative)
    }

    pub fn args(&self) -> &[f64] {
        &self.args
    }

    /// Copy of this command with every argument passed through `f`,
    /// which receives the argument's position and value.
    pub fn map_args(&self, mut f: impl FnMut(usize, f64) -> f64) -> Self {
        Self {
            kind: self.kind,
            relative: self.relative,
            args: self
                .args
                .iter()
                .enumerate()
                .map(|(i, &value)| f(i, value))
                .collect(),
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        for (i, value) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            // Avoid printing `-0`
            let value = if *value == 0.0 { 0.0 } else { *value };
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// A parsed vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a path from a vector of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Parse path data, rejecting anything outside the grammar
    pub fn parse(input: &str) -> Result<Self, PathError> {
        Self::parse_with(input, ParseMode::Strict)
    }

    /// Parse path data with an explicit [`ParseMode`]
    pub fn parse_with(input: &str, mode: ParseMode) -> Result<Self, PathError> {
        let commands = parser::parse(input, mode)?;
        debug!(commands = commands.len(), ?mode, "parsed path");
        Ok(Self { commands })
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Letters of every command in order
    pub fn letters(&self) -> String {
        self.commands.iter().map(PathCommand::letter).collect()
    }

    /// Copy of this path with every command passed through `f`
    pub fn map_commands(&self, f: impl FnMut(&PathCommand) -> PathCommand) -> Self {
        Self {
            commands: self.commands.iter().map(f).collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = String::deserialize(deserializer)?;
        Path::parse(&data).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLUS: &str = "M4 6v4h2V6h4V4H6V0H4v4H0v2h4z";

    #[test]
    fn test_parse_plus() {
        let path = Path::parse(PLUS).unwrap();

        assert_eq!(path.len(), 14);
        assert_eq!(path.letters(), "MvhVhVHVHvHvhz");
        assert_eq!(path.commands()[0].args(), &[4.0, 6.0]);
        assert_eq!(path.commands()[1].kind, CommandKind::VerticalTo);
        assert!(path.commands()[1].relative);
        assert!(path.commands()[13].args().is_empty());
    }

    #[test]
    fn test_display_uses_single_spaces() {
        let path = Path::parse("M1,2 L 3 , 4 Z").unwrap();
        assert_eq!(path.to_string(), "M1 2 L3 4 Z");
    }

    #[test]
    fn test_display_fractions() {
        let path = Path::parse("m-3.25.5").unwrap();
        assert_eq!(path.to_string(), "m-3.25 0.5");
    }

    #[test]
    fn test_display_negative_zero() {
        let path = Path::from_commands(vec![PathCommand::new(
            CommandKind::LineTo,
            false,
            [-0.0, 1.0],
        )]);
        assert_eq!(path.to_string(), "L0 1");
    }

    #[test]
    fn test_all_letters_recognized() {
        for letter in "astvzqmhlcASTVZQMHLC".chars() {
            let (kind, relative) = CommandKind::from_letter(letter).unwrap();
            assert_eq!(kind.letter(relative), letter);
        }
        assert!(CommandKind::from_letter('x').is_none());
        assert!(CommandKind::from_letter('E').is_none());
        assert_eq!(CommandKind::ALL.len(), 10);
    }

    #[test]
    fn test_empty_input() {
        assert!(Path::parse("").unwrap().is_empty());
        assert!(Path::parse("  , ").unwrap().is_empty());
    }

    #[test]
    fn test_arg_counts_not_checked() {
        let path = Path::parse("z 1 2 m1 2 3").unwrap();
        assert_eq!(path.commands()[0].args(), &[1.0, 2.0]);
        assert_eq!(path.commands()[1].args(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_strict_rejects_unknown_letter() {
        let err = Path::parse("M1 2 X3 L4 5").unwrap_err();
        assert_eq!(
            err,
            PathError::UnknownCommand {
                letter: 'X',
                offset: 5
            }
        );
    }

    #[test]
    fn test_lenient_drops_unknown_letter() {
        // The dropped letter's numbers stay with the open command
        let path = Path::parse_with("M1 2 X3 L4 5", ParseMode::Lenient).unwrap();
        assert_eq!(path.letters(), "ML");
        assert_eq!(path.commands()[0].args(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_leading_numbers() {
        assert_eq!(
            Path::parse("1 2 M3 4").unwrap_err(),
            PathError::MissingCommand { offset: 0 }
        );

        let path = Path::parse_with("1 2 M3 4", ParseMode::Lenient).unwrap();
        assert_eq!(path.to_string(), "M3 4");
    }

    #[test]
    fn test_from_str() {
        let path: Path = "h10".parse().unwrap();
        assert_eq!(path.commands()[0].args(), &[10.0]);
    }

    #[test]
    fn test_serde_as_string() {
        let path = Path::parse("M1,2z").unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"M1 2 z\"");

        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);

        assert!(serde_json::from_str::<Path>("\"M1 ?\"").is_err());
    }
}
