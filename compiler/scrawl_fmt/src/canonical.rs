//! Token rendering and the content hash.

use std::borrow::Cow;

use scrawl_ir::{fnv1a_32, Token, TokenKind};

use crate::{BeautifyFlags, Emitter, FormatContext};

/// Source text that re-tokenizes to `kind`. `None` for structural tokens.
fn token_text(kind: &TokenKind) -> Option<Cow<'_, str>> {
    let text = match kind {
        TokenKind::Symbol(text) => Cow::Borrowed(text.as_str()),
        TokenKind::Number(value) => Cow::Owned(value.to_string()),
        TokenKind::String(text) if text.contains('\'') => Cow::Owned(format!("\"{text}\"")),
        TokenKind::String(text) => Cow::Owned(format!("'{text}'")),
        TokenKind::Comment(text) if text.is_empty() => Cow::Borrowed("#"),
        TokenKind::Comment(text) => Cow::Owned(format!("# {text}")),
        TokenKind::Operator(op) => Cow::Owned(op.to_string()),
        TokenKind::StartMetaData => Cow::Borrowed("["),
        TokenKind::EndMetaData => Cow::Borrowed("]"),
        TokenKind::StartScope | TokenKind::EndScope | TokenKind::LineDelimiter => return None,
    };
    Some(text)
}

/// Write one token in canonical layout.
pub fn write_token<E: Emitter>(ctx: &mut FormatContext<E>, kind: &TokenKind) {
    match kind {
        TokenKind::StartScope => {
            // Leading spaces on the first line are plain separators, so a
            // scope there has to start after a newline.
            if ctx.line() == 0 && ctx.at_line_start() {
                ctx.newline();
            } else {
                ctx.end_line();
            }
            ctx.indent();
        }
        TokenKind::EndScope => ctx.dedent(),
        TokenKind::LineDelimiter => ctx.end_line(),
        other => {
            if let Some(text) = token_text(other) {
                ctx.emit_word(&text);
            }
            // A comment runs to the end of its line.
            if other.is_comment() {
                ctx.newline();
            }
        }
    }
}

/// Write `tokens` in canonical layout.
///
/// A comment that sat on a line of its own in the source is kept on a line
/// of its own, at the current indentation.
pub fn write_tokens<E: Emitter>(ctx: &mut FormatContext<E>, tokens: &[Token], flags: BeautifyFlags) {
    let discard_comments = flags.contains(BeautifyFlags::DISCARD_COMMENTS);
    let mut previous_line = None;
    for token in tokens {
        if token.kind.is_comment() {
            if discard_comments {
                continue;
            }
            if previous_line.is_some_and(|line| token.position.line > line) {
                ctx.end_line();
            }
        }
        write_token(ctx, &token.kind);
        previous_line = Some(token.position.line);
    }
}

/// Render `tokens` in canonical layout.
pub fn canonicalise(tokens: &[Token], flags: BeautifyFlags) -> String {
    let mut ctx = FormatContext::new();
    write_tokens(&mut ctx, tokens, flags);
    ctx.finish().output()
}

/// FNV-1a hash of the comment-free canonical form.
pub fn content_hash(tokens: &[Token]) -> u32 {
    fnv1a_32(canonicalise(tokens, BeautifyFlags::DISCARD_COMMENTS).as_bytes())
}

#[cfg(test)]
mod tests;
