//! Parsing of geometry arguments such as `500,780` and `200x100`

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::layout::{Point, Size};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl ParseError {
    fn syntax(span: Span, message: impl Into<String>, expected: &str) -> Self {
        ParseError::Syntax {
            span,
            message: message.into(),
            expected: vec![expected.to_string()],
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Parse a point written as `X,Y`
pub fn parse_point(source: &str) -> Result<Point, ParseError> {
    let (x, y) = parse_pair(source, &[','], "X,Y")?;
    Ok(Point::new(x, y))
}

/// Parse a size written as `WxH`
pub fn parse_size(source: &str) -> Result<Size, ParseError> {
    let (width, height) = parse_pair(source, &['x', 'X'], "WIDTHxHEIGHT")?;
    Ok(Size::new(width, height))
}

fn parse_pair(source: &str, separators: &[char], form: &str) -> Result<(f64, f64), ParseError> {
    let Some(split) = source.find(separators) else {
        return Err(ParseError::syntax(
            0..source.len(),
            format!("missing '{}' separator", separators[0]),
            form,
        ));
    };

    let first = parse_number(source, 0..split, form)?;
    let second = parse_number(source, split + 1..source.len(), form)?;
    Ok((first, second))
}

fn parse_number(source: &str, span: Span, form: &str) -> Result<f64, ParseError> {
    let text = &source[span.clone()];
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ if trimmed.is_empty() => Err(ParseError::syntax(span, "missing number", form)),
        _ => Err(ParseError::syntax(
            span,
            format!("'{}' is not a finite number", trimmed),
            form,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("500,780"), Ok(Point::new(500.0, 780.0)));
        assert_eq!(parse_point(" 10.5 , -3 "), Ok(Point::new(10.5, -3.0)));
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("200x100"), Ok(Size::new(200.0, 100.0)));
        assert_eq!(parse_size("1000X800"), Ok(Size::new(1000.0, 800.0)));
    }

    #[test]
    fn test_missing_separator() {
        let err = parse_point("500").unwrap_err();
        assert_eq!(err.span(), &(0..3));
        assert!(err.to_string().contains("missing ',' separator"));
    }

    #[test]
    fn test_bad_number_points_at_component() {
        let err = parse_size("200xabc").unwrap_err();
        assert_eq!(err.span(), &(4..7));
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_empty_component() {
        let err = parse_point(",5").unwrap_err();
        assert_eq!(err.span(), &(0..0));
        assert!(err.to_string().contains("missing number"));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(parse_point("inf,0").is_err());
        assert!(parse_size("NaNx1").is_err());
    }

    #[test]
    fn test_format_mentions_expected_form() {
        let source = "200xabc";
        let err = parse_size(source).unwrap_err();
        let report = err.format(source, "--panel");
        assert!(report.contains("WIDTHxHEIGHT"));
    }
}
