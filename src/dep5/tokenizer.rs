//! Paragraph tokenizer.
//!
//! Turns one DEP-5 paragraph into a sequence of [`Token`]s, one per field, in
//! source order. A line containing a registered `Label:` starts a new field and
//! completes the one that was open. Any other line continues the open field
//! according to its [`ValueKind`]:
//!
//! - `SingleLine`: never open, the token is emitted straight away
//! - `FormattedText`: trimmed lines joined with `\n`
//! - `LineList`: one entry per non-blank trimmed line
//! - `WhitespaceList`: non-blank lines split on single spaces
//!
//! Lines that match no label while no field is open are ignored.

use std::str::Split;

use super::fields::{self, FieldMatch};
use super::types::{FieldId, FieldValue, Token, ValueKind};

/// Lazily tokenizes a paragraph.
///
/// The iterator is single-pass: lines are scanned only as tokens are
/// requested, and it is exhausted after one traversal.
pub fn tokenize_paragraph(paragraph: &str) -> ParagraphTokens<'_> {
    ParagraphTokens {
        lines: paragraph.trim().split('\n'),
        open: None,
        pending: None,
    }
}

/// Iterator returned by [`tokenize_paragraph`].
#[derive(Debug)]
pub struct ParagraphTokens<'a> {
    lines: Split<'a, char>,
    /// Field whose value may still grow with continuation lines.
    open: Option<OpenField>,
    /// Completed token waiting behind the one just returned.
    pending: Option<Token>,
}

#[derive(Debug)]
struct OpenField {
    field: FieldId,
    kind: ValueKind,
    value: FieldValue,
}

impl OpenField {
    fn continue_with(&mut self, line: &str) {
        let line = line.trim();

        match (self.kind, &mut self.value) {
            (ValueKind::FormattedText, FieldValue::Text(text)) => {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(line);
            }
            (ValueKind::LineList, FieldValue::List(items)) => {
                if !line.is_empty() {
                    items.push(line.to_string());
                }
            }
            (ValueKind::WhitespaceList, FieldValue::List(items)) => {
                if !line.is_empty() {
                    items.extend(split_spaces(line));
                }
            }
            _ => {}
        }
    }

    fn into_token(self) -> Token {
        Token {
            field: self.field,
            value: self.value,
        }
    }
}

/// What a label line produces.
enum Started {
    Complete(Token),
    Open(OpenField),
}

fn start_field(line: &str, found: FieldMatch) -> Started {
    let rest = line[found.colon + 1..].trim();
    let field = found.field;

    let value = match field.kind {
        ValueKind::SingleLine => {
            return Started::Complete(Token {
                field: field.id,
                value: FieldValue::Text(rest.to_string()),
            });
        }
        ValueKind::FormattedText => FieldValue::Text(rest.to_string()),
        ValueKind::LineList => FieldValue::List(vec![rest.to_string()]),
        ValueKind::WhitespaceList => FieldValue::List(split_spaces(rest).collect()),
    };

    Started::Open(OpenField {
        field: field.id,
        kind: field.kind,
        value,
    })
}

fn split_spaces(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(' ')
        .filter(|item| !item.is_empty())
        .map(str::to_string)
}

impl Iterator for ParagraphTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        for line in self.lines.by_ref() {
            let Some(found) = fields::lookup(line) else {
                if let Some(open) = self.open.as_mut() {
                    open.continue_with(line);
                }
                continue;
            };

            let finished = self.open.take().map(OpenField::into_token);

            match start_field(line, found) {
                Started::Complete(token) => {
                    if finished.is_some() {
                        self.pending = Some(token);
                        return finished;
                    }
                    return Some(token);
                }
                Started::Open(open) => {
                    self.open = Some(open);
                    if finished.is_some() {
                        return finished;
                    }
                }
            }
        }

        self.open.take().map(OpenField::into_token)
    }
}
