#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line containing byte offset `position` in `content`.
///
/// Returns the 1-based line number, the line text (including its newline)
/// and the offset of `position` within that line. An offset equal to the
/// length of `content` resolves to the end of the last line, since that is
/// where the end-of-input token sits.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // `pos == content.len()`: point just past the last line
    let last = content.split_inclusive('\n').last().unwrap_or("");
    Some((line_number.saturating_sub(1).max(1), last.to_string(), last.trim_end_matches('\n').len()))
}

/// Renders `error` against `source` as a caret snippet:
///
/// ```text
/// Error: UnexpectedToken (expected `=`, found `5`)
/// -> input.tiny
///   |
/// 1 | x 5
///   | --^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nx = 1\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 29).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let content = "x = 1\nprint x";

        let (line_number, line, line_pos) =
            super::get_line_at_position(content, content.len() as u32).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "print x");
        assert_eq!(line_pos, 7);

        assert!(super::get_line_at_position(content, 100).is_none());
    }

    #[test]
    fn test_render_error_points_at_token() {
        let source = "x 5\n";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: "=".to_string(),
                found: "5".to_string(),
            },
            Position(2, Rc::new("input.tiny".to_string())),
        );

        let rendered = super::render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedToken (expected `=`, found `5`)");
        assert_eq!(lines[1], "-> input.tiny");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | x 5");
        assert_eq!(lines[4], "  | --^");
    }

    #[test]
    fn test_render_error_out_of_range() {
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "@".to_string(),
            },
            Position(99, Rc::new("input.tiny".to_string())),
        );

        let rendered = super::render_error(&error, "x = 1");
        assert_eq!(rendered, "Error: UnrecognisedToken\n-> input.tiny\n");
    }
}
