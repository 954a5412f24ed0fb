use crate::error::{Error, Result};
use crate::varint::{read_uvarint, read_varint};

/// Return the decoded length recorded in the block header.
pub fn decoded_len(src: &[u8]) -> Result<usize> {
    header(src).map(|(len, _)| len)
}

/// Decoded length plus the number of bytes the header occupies.
fn header(src: &[u8]) -> Result<(usize, usize)> {
    let (v, n) = read_uvarint(src).ok_or(Error::Corrupt)?;
    if v > isize::MAX as u64 {
        return Err(Error::TooLarge);
    }
    Ok((v as usize, n))
}

/// Decode a block, reusing `dst` as the output buffer.
///
/// `dst` is grown to the decoded length if it is shorter, and is returned
/// truncated to exactly the decoded bytes. Every length and offset in `src`
/// is validated before it is used; a malformed block yields
/// [`Error::Corrupt`] and no decoded bytes.
pub fn decode(mut dst: Vec<u8>, src: &[u8]) -> Result<Vec<u8>> {
    let (dlen, mut s) = header(src)?;
    if dst.len() < dlen {
        dst.resize(dlen, 0);
    }

    let mut d = 0usize;
    while s < src.len() {
        let (n, i) = read_varint(&src[s..]).ok_or(Error::Corrupt)?;
        s += i;

        if n >= 0 {
            // Literal chunk: n + 1 raw bytes follow inline.
            let len = n as u64 + 1;
            if len > (dlen - d) as u64 || len > (src.len() - s) as u64 {
                return Err(Error::Corrupt);
            }
            let len = len as usize;
            dst[d..d + len].copy_from_slice(&src[s..s + len]);
            d += len;
            s += len;
            continue;
        }

        // Copy chunk: -n bytes taken from `offset` positions back.
        let len = n.unsigned_abs();
        let (offset, i) = read_uvarint(&src[s..]).ok_or(Error::Corrupt)?;
        s += i;

        // An offset of zero would read the byte being written; an offset
        // beyond d would read before the start of the output.
        if offset == 0 || offset > d as u64 || len > (dlen - d) as u64 {
            return Err(Error::Corrupt);
        }
        let len = len as usize;
        let offset = offset as usize;

        // Byte-at-a-time forward copy. An offset smaller than the length is
        // legal and repeats the pattern (run-length expansion), which a bulk
        // memmove would not reproduce.
        let end = d + len;
        while d < end {
            dst[d] = dst[d - offset];
            d += 1;
        }
    }

    if d != dlen {
        return Err(Error::Corrupt);
    }
    dst.truncate(dlen);
    Ok(dst)
}
