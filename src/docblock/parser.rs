//! Doc comment parsing.
//!
//! The parser strips the `/** ... */` frame and the ` * ` line margins,
//! splits the free text from the tag block at the first `@`-line, and
//! turns each tag into its model form. Tag bodies absorb continuation
//! lines until the next `@`-line. Property tags are the only tags with
//! further structure: `[type] $name [description]`, where the type is
//! the first whitespace-delimited chunk at angle/paren depth zero.
//!
//! Parsing is strict about the frame and about property type
//! expressions, lenient about everything else: an unknown tag or a
//! property tag with no usable `$name` is kept as a [`GenericTag`]
//! rather than failing the block.

use std::sync::Arc;

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::debug;

use crate::base::PropertyName;
use crate::base::{is_ident_continue, is_ident_start};
use crate::typexpr;

use super::error::DocBlockError;
use super::tags::{DocBlock, GenericTag, PropertyKind, PropertyTag, Tag};

/// Stateless docblock parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocBlockParser;

impl DocBlockParser {
    pub fn new() -> DocBlockParser {
        DocBlockParser
    }

    /// Parse a raw `/** ... */` comment into a [`DocBlock`].
    pub fn parse(&self, input: &str) -> Result<DocBlock, DocBlockError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DocBlockError::Empty);
        }
        let opened = trimmed
            .strip_prefix("/**")
            .ok_or(DocBlockError::MissingOpener)?;
        let body = opened
            .strip_suffix("*/")
            .ok_or(DocBlockError::MissingTerminator)?;

        // Offsets stay relative to the raw input so tag spans index into it
        let lead = (input.len() - input.trim_start().len()) as u32;
        let lines = split_lines(body, lead + 3);

        let mut preamble: Vec<&str> = Vec::new();
        let mut raw_tags: Vec<RawTag<'_>> = Vec::new();

        for line in &lines {
            if let Some((name, rest)) = tag_start(line.content) {
                raw_tags.push(RawTag::open(name, rest, line.offset));
            } else if let Some(tag) = raw_tags.last_mut() {
                tag.push_line(line.content, line.offset);
            } else {
                preamble.push(line.content);
            }
        }

        let (summary, description) = split_preamble(&preamble);
        let mut tags = Vec::with_capacity(raw_tags.len());
        for raw in raw_tags {
            tags.push(build_tag(raw)?);
        }

        Ok(DocBlock::new(summary, description, tags, Arc::from(input)))
    }
}

/// A margin-stripped line; `offset` is where `content` starts in the
/// raw input.
struct Line<'a> {
    content: &'a str,
    offset: u32,
}

fn split_lines(body: &str, base: u32) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut offset = base;
    for raw in body.split_inclusive('\n') {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        let content = strip_margin(line);
        lines.push(Line {
            content,
            offset: offset + (line.len() - content.len()) as u32,
        });
        offset += raw.len() as u32;
    }
    lines
}

/// Remove the ` * ` margin: leading whitespace, at most one `*`, at
/// most one space or tab after it. Deeper indentation survives, so
/// indented continuation text keeps its shape.
fn strip_margin(line: &str) -> &str {
    let rest = line.trim_start_matches([' ', '\t']);
    match rest.strip_prefix('*') {
        Some(after) => after.strip_prefix([' ', '\t']).unwrap_or(after),
        None => rest,
    }
}

/// `@name` at the start of a line opens a tag. Returns the name and the
/// remainder of the line.
fn tag_start(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix('@')?;
    let end = rest
        .find(|c: char| !is_tag_name_char(c))
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some((&rest[..end], &rest[end..]))
}

/// Tag names cover the vendor-namespaced forms (`@ORM\Column`) too.
fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '\\'
}

/// A tag while its continuation lines are still being collected.
struct RawTag<'a> {
    name: &'a str,
    body: String,
    /// Offset of the `@`.
    start: u32,
    /// End of the last line that contributed visible text.
    end: u32,
}

impl<'a> RawTag<'a> {
    fn open(name: &'a str, rest: &'a str, at: u32) -> RawTag<'a> {
        let name_end = at + 1 + name.len() as u32;
        let visible = rest.trim_end();
        let end = if visible.trim_start().is_empty() {
            name_end
        } else {
            name_end + visible.len() as u32
        };
        RawTag {
            name,
            body: rest.to_string(),
            start: at,
            end,
        }
    }

    fn push_line(&mut self, content: &str, offset: u32) {
        self.body.push('\n');
        self.body.push_str(content);
        let visible = content.trim_end();
        if !visible.trim_start().is_empty() {
            self.end = offset + visible.len() as u32;
        }
    }
}

fn build_tag(raw: RawTag<'_>) -> Result<Tag, DocBlockError> {
    let span = TextRange::new(TextSize::from(raw.start), TextSize::from(raw.end));

    let Some(kind) = PropertyKind::from_tag_name(raw.name) else {
        return Ok(Tag::Other(GenericTag {
            name: SmolStr::new(raw.name),
            body: raw.body.trim().to_string(),
            span,
        }));
    };

    let Some(parts) = split_property_body(&raw.body) else {
        debug!(tag = raw.name, "property tag without a variable name");
        return Ok(Tag::Other(GenericTag {
            name: SmolStr::new(raw.name),
            body: raw.body.trim().to_string(),
            span,
        }));
    };

    let (type_expr, type_text) = match parts.type_text {
        Some(text) => {
            let expr = typexpr::parse(text).map_err(|source| {
                DocBlockError::InvalidTypeExpression {
                    tag: SmolStr::new(raw.name),
                    source,
                }
            })?;
            (Some(expr), Some(text.to_string()))
        }
        None => (None, None),
    };

    Ok(Tag::Property(PropertyTag {
        kind,
        name: PropertyName::new(parts.name),
        type_expr,
        type_text,
        description: parts.description,
        span,
    }))
}

struct PropertyParts<'a> {
    type_text: Option<&'a str>,
    name: &'a str,
    description: Option<String>,
}

/// Split `[type] $name [description]`. `None` means no usable `$name`,
/// which keeps the tag in its generic form.
fn split_property_body(body: &str) -> Option<PropertyParts<'_>> {
    let body = body.trim();
    let (first, after_first) = split_chunk(body)?;

    let (type_text, name_chunk, rest) = if first.starts_with('$') {
        (None, first, after_first)
    } else {
        let (second, after_second) = split_chunk(after_first)?;
        if !second.starts_with('$') {
            return None;
        }
        (Some(first), second, after_second)
    };

    let name = ident_prefix(&name_chunk[1..]);
    if name.is_empty() {
        return None;
    }

    // Anything glued to the name past its identifier run belongs to the
    // description, as does the rest of the body
    let leftover = &name_chunk[1 + name.len()..];
    let mut description = String::with_capacity(leftover.len() + rest.len());
    description.push_str(leftover);
    description.push_str(rest);
    let description = description.trim();
    let description = (!description.is_empty()).then(|| description.to_string());

    Some(PropertyParts {
        type_text,
        name,
        description,
    })
}

/// First whitespace-delimited chunk at angle/paren depth zero, plus the
/// rest. `array<int, string>` survives as one chunk.
fn split_chunk(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    let mut depth = 0u32;
    for (i, c) in text.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                return Some((&text[..i], &text[i..]));
            }
            _ => {}
        }
    }
    Some((text, ""))
}

/// Longest identifier prefix, empty when the first char cannot start one.
fn ident_prefix(text: &str) -> &str {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if is_ident_start(c) => {}
        _ => return "",
    }
    for (i, c) in chars {
        if !is_ident_continue(c) {
            return &text[..i];
        }
    }
    text
}

/// Free text before the first tag: first paragraph is the summary, the
/// rest is the description.
fn split_preamble(lines: &[&str]) -> (Option<String>, Option<String>) {
    let joined = lines.join("\n");
    let text = joined.trim();
    if text.is_empty() {
        return (None, None);
    }

    let mut summary_lines = Vec::new();
    let mut rest_lines = Vec::new();
    let mut in_rest = false;
    for line in text.lines() {
        if !in_rest && line.trim().is_empty() {
            in_rest = true;
            continue;
        }
        if in_rest {
            rest_lines.push(line);
        } else {
            summary_lines.push(line);
        }
    }

    let summary = summary_lines.join("\n").trim().to_string();
    let summary = (!summary.is_empty()).then_some(summary);
    let description = rest_lines.join("\n").trim().to_string();
    let description = (!description.is_empty()).then_some(description);
    (summary, description)
}
