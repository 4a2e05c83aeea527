//! Line assembly - folds the flat character run back into rows.

use crate::{PicasciiError, Result};

/// Splits `chars` into rows of `width` and terminates each with `\n`.
///
/// A trailing partial row, if `chars.len()` is not a multiple of `width`,
/// is emitted as-is with its own terminator rather than padded or dropped.
pub fn assemble(chars: &[char], width: usize) -> Result<String> {
    if width == 0 {
        return Err(PicasciiError::InvalidDimension { width: 0, height: 0 });
    }
    let rows = chars.len().div_ceil(width);
    let mut out = String::with_capacity(chars.len() + rows);
    for row in chars.chunks(width) {
        out.extend(row);
        out.push('\n');
    }
    Ok(out)
}
