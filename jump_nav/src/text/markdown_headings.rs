// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          character::complete::space0,
          combinator::{map_res, rest, verify},
          sequence::{preceded, terminated}};

use crate::{AttributedText, TextRange, TextRangeError};

/// Attribute set by [`attribute_markdown_headings`]. Its value is the heading level.
pub const HEADING_ATTRIBUTE: &str = "heading";

const HEADING_CHAR: char = '#';
const MAX_HEADING_LEVEL: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkdownHeading<'a> {
    pub level: u8,
    pub text: &'a str,
}

/// Scan `text` line by line and set [`HEADING_ATTRIBUTE`] over the text of every ATX
/// heading (`# Title`, `## Subtitle`, ...), with the heading level as the value. The
/// `#` prefix is left unattributed, so that a preview of the range only shows the title.
///
/// # Errors
///
/// Returns an error if an attribute range is rejected by [`AttributedText`], which can
/// only happen if line splitting produced an offset that is not on a char boundary.
pub fn attribute_markdown_headings(text: &str) -> Result<AttributedText<u8>, TextRangeError> {
    let mut acc = AttributedText::new(text);
    let mut line_start = 0;

    for line in text.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        let content = content.strip_suffix('\r').unwrap_or(content);

        if let Ok((_, heading)) = parse_heading_line(content) {
            // The heading text runs to the end of the line.
            let lower_bound = line_start + content.len() - heading.text.len();
            let upper_bound = line_start + content.len();
            acc.set_attribute(
                HEADING_ATTRIBUTE,
                TextRange::try_new(lower_bound, upper_bound)?,
                heading.level,
            )?;
        }

        line_start += line.len();
    }

    Ok(acc)
}

/// Matches a single line (without its line ending) that is a heading.
///
/// # Errors
///
/// Returns a nom parsing error if the line is not a heading, or the heading is blank.
pub fn parse_heading_line(input: &str) -> IResult<&str, MarkdownHeading<'_>> {
    let (input, (level, text)) = (
        parse_heading_tag,
        preceded(space0, verify(rest, |it: &str| !it.trim().is_empty())),
    )
        .parse(input)?;
    Ok((input, MarkdownHeading { level, text }))
}

/// Matches 1 to 6 `#` chars followed by a space, and outputs the level.
fn parse_heading_tag(input: &str) -> IResult<&str, u8> {
    map_res(
        terminated(
            take_while_m_n(1, MAX_HEADING_LEVEL, |it| it == HEADING_CHAR),
            tag(" "),
        ),
        |it: &str| u8::try_from(it.len()),
    )
    .parse(input)
}
