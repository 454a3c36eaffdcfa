// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! printf-style templates for metadata lines and glyph names.
//!
//! Only `%s` (string), `%d` (integer) and the `%%` escape are understood.
//! A template is validated once against the exact placeholder sequence it
//! will be rendered with, so rendering itself can never fail.

use crate::error::{AtlasError, Result};
use std::fmt::Write;

/// Default metadata line: name, x, y, width, height.
pub const DEFAULT_LINE_FORMAT: &str = "%s %d %d %d %d";
/// Default glyph name: source name, codepoint.
pub const DEFAULT_GLYPH_FORMAT: &str = "%s_%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Str,
    Int,
}

impl Placeholder {
    fn spec(self) -> char {
        match self {
            Placeholder::Str => 's',
            Placeholder::Int => 'd',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Arg(Placeholder),
}

#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    Str(&'a str),
    Int(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `format`, requiring exactly the placeholders in `expect`, in
    /// that order.
    pub fn parse(format: &str, expect: &[Placeholder]) -> Result<Self> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut expected = expect.iter();
        let mut chars = format.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                text.push(c);
                continue;
            }
            let spec = chars
                .next()
                .ok_or_else(|| AtlasError::IncompleteSpecifier(format.to_string()))?;
            if spec == '%' {
                text.push('%');
                continue;
            }
            match expected.next() {
                Some(&want) if want.spec() == spec => {
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Arg(want));
                }
                Some(&want) => {
                    return Err(AtlasError::InvalidSpecifier {
                        format: format.to_string(),
                        found: spec,
                        expected: want.spec(),
                    })
                }
                None => return Err(AtlasError::TooManySpecifiers(format.to_string())),
            }
        }
        if expected.next().is_some() {
            return Err(AtlasError::TooFewSpecifiers {
                format: format.to_string(),
                expected: expect.len(),
            });
        }
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }
        Ok(Self { segments })
    }

    /// Renders the template. `args` must follow the placeholder sequence the
    /// template was parsed with.
    pub fn render(&self, args: &[Arg]) -> String {
        let mut out = String::new();
        let mut args = args.iter();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Arg(_) => match args.next() {
                    Some(Arg::Str(s)) => out.push_str(s),
                    Some(Arg::Int(n)) => {
                        let _ = write!(out, "{}", n);
                    }
                    None => {}
                },
            }
        }
        out
    }
}

/// Metadata line template: `name x y width height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormat(Template);

impl LineFormat {
    pub fn parse(format: &str) -> Result<Self> {
        use Placeholder::*;
        Template::parse(format, &[Str, Int, Int, Int, Int]).map(Self)
    }

    pub fn render(&self, name: &str, x: i64, y: i64, width: i64, height: i64) -> String {
        self.0.render(&[
            Arg::Str(name),
            Arg::Int(x),
            Arg::Int(y),
            Arg::Int(width),
            Arg::Int(height),
        ])
    }
}

/// Glyph item name template: `source codepoint`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphNameFormat(Template);

impl GlyphNameFormat {
    pub fn parse(format: &str) -> Result<Self> {
        Template::parse(format, &[Placeholder::Str, Placeholder::Int]).map(Self)
    }

    pub fn render(&self, source: &str, codepoint: u32) -> String {
        self.0.render(&[Arg::Str(source), Arg::Int(codepoint as i64)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_formats() {
        assert_eq!(LineFormat::parse(DEFAULT_LINE_FORMAT).unwrap().render("hero", 1, 2, 3, 4), "hero 1 2 3 4");
        assert_eq!(GlyphNameFormat::parse(DEFAULT_GLYPH_FORMAT).unwrap().render("font", 65), "font_65");
    }

    #[test]
    fn test_custom_line_format() {
        let fmt = LineFormat::parse("%s: x=%d y=%d (%dx%d) 100%%").unwrap();
        assert_eq!(fmt.render("a", 0, 16, 8, 9), "a: x=0 y=16 (8x9) 100%");
    }

    #[test]
    fn test_escaped_percent_is_not_a_placeholder() {
        let fmt = GlyphNameFormat::parse("%%%s-%d%%").unwrap();
        assert_eq!(fmt.render("f", 7), "%f-7%");
    }

    #[test]
    fn test_wrong_order_rejected() {
        match GlyphNameFormat::parse("%d_%s") {
            Err(AtlasError::InvalidSpecifier { found, expected, .. }) => {
                assert_eq!(found, 'd');
                assert_eq!(expected, 's');
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_too_many_rejected() {
        assert!(matches!(
            GlyphNameFormat::parse("%s_%d_%d"),
            Err(AtlasError::TooManySpecifiers(_))
        ));
    }

    #[test]
    fn test_too_few_rejected() {
        assert!(matches!(
            LineFormat::parse("%s %d"),
            Err(AtlasError::TooFewSpecifiers { expected: 5, .. })
        ));
        assert!(matches!(
            GlyphNameFormat::parse("plain"),
            Err(AtlasError::TooFewSpecifiers { expected: 2, .. })
        ));
    }

    #[test]
    fn test_width_flags_rejected() {
        assert!(matches!(
            GlyphNameFormat::parse("%s_%4d"),
            Err(AtlasError::InvalidSpecifier { found: '4', .. })
        ));
    }

    #[test]
    fn test_trailing_percent_rejected() {
        assert!(matches!(
            GlyphNameFormat::parse("%s_%d%"),
            Err(AtlasError::IncompleteSpecifier(_))
        ));
    }
}
