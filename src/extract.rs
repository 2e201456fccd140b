//! Locates the first balanced JSON object or array inside free-form model
//! output (prose, markdown fences, trailing chatter).

use crate::error::ExtractError;

/// Returns the slice spanning the first top-level `{...}` or `[...]` region.
///
/// Brackets are tracked on a stack. A closer whose type does not match the
/// opener it pops is tolerated: the opener is consumed and the scan goes on.
/// The region ends only when a *matching* pop empties the stack. Closers seen
/// while the stack is empty are ignored. Bracket characters inside JSON
/// string literals are counted like any other.
pub fn extract_json(text: &str) -> Result<&str, ExtractError> {
    let mut start: Option<usize> = None;
    let mut stack: Vec<u8> = Vec::new();

    for (i, ch) in text.bytes().enumerate() {
        match ch {
            b'{' | b'[' => {
                if start.is_none() {
                    start = Some(i);
                }
                stack.push(ch);
            }
            b'}' | b']' => {
                let Some(opening) = stack.pop() else {
                    continue;
                };
                if !closes(opening, ch) {
                    continue;
                }
                if stack.is_empty()
                    && let Some(start) = start
                {
                    return Ok(&text[start..=i]);
                }
            }
            _ => {}
        }
    }

    Err(ExtractError::NoCompleteJson)
}

fn closes(opening: u8, closing: u8) -> bool {
    matches!((opening, closing), (b'{', b'}') | (b'[', b']'))
}
