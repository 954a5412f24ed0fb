use crate::varint::{put_uvarint, put_varint, MAX_VARINT_LEN64};

/// How far back a copy chunk may reference, matching the window ceiling of
/// the snappy reference implementation.
const MAX_OFFSET: usize = 1 << 20;

/// Number of slots in the match-candidate table.
const TABLE_SIZE: usize = 1 << 12;

/// Mixer for the 4-byte hash key, multiplied mod 2^32.
const HASH_MUL: u32 = 0x1e35a7bd;

/// Maximum length of an encoded block, given the uncompressed length.
///
/// The header is at most [`MAX_VARINT_LEN64`] bytes and the body never
/// exceeds the input: the worst case is the whole input as one literal chunk.
pub fn max_encoded_len(src_len: usize) -> usize {
    src_len + MAX_VARINT_LEN64
}

/// Write a literal chunk and return the number of bytes written.
fn emit_literal(dst: &mut [u8], lit: &[u8]) -> usize {
    let n = put_varint(dst, lit.len() as i64 - 1);
    dst[n..n + lit.len()].copy_from_slice(lit);
    n + lit.len()
}

/// Write a copy chunk and return the number of bytes written.
fn emit_copy(dst: &mut [u8], offset: usize, len: usize) -> usize {
    let n = put_varint(dst, -(len as i64));
    n + put_uvarint(&mut dst[n..], offset as u64)
}

/// Encode `src` as a single block, reusing `dst` as the output buffer.
///
/// `dst` is grown to [`max_encoded_len`] of the input if it is shorter, and
/// is returned truncated to the bytes actually written. Encoding cannot
/// fail: every byte sequence has a valid encoded form.
pub fn encode(mut dst: Vec<u8>, src: &[u8]) -> Vec<u8> {
    let max = max_encoded_len(src.len());
    if dst.len() < max {
        dst.resize(max, 0);
    }

    // The block starts with the uvarint-encoded length of the decoded bytes.
    let mut d = put_uvarint(&mut dst, src.len() as u64);

    // Inputs too short to contain a 4-byte match are a single literal chunk.
    if src.len() <= 4 {
        if !src.is_empty() {
            d += emit_literal(&mut dst[d..], src);
        }
        dst.truncate(d);
        return dst;
    }

    // Position 0 doubles as the empty-slot sentinel, so byte 0 of the source
    // is never the target of a match.
    let mut table = [0usize; TABLE_SIZE];
    let mut s = 0; // next candidate start
    let mut lit = 0; // start of the pending literal bytes

    while s + 3 < src.len() {
        let w = u32::from_le_bytes([src[s], src[s + 1], src[s + 2], src[s + 3]]);
        let h = (w.wrapping_mul(HASH_MUL) >> 20) as usize;
        let t = table[h];
        table[h] = s;

        // Only a full 4-byte comparison confirms a match; a colliding or
        // stale slot just costs the probe.
        if t == 0 || s - t >= MAX_OFFSET || src[t..t + 4] != src[s..s + 4] {
            s += 1;
            continue;
        }

        // Match found. Flush any pending literal bytes first.
        if lit != s {
            d += emit_literal(&mut dst[d..], &src[lit..s]);
        }

        // Extend the match as far as it goes. The offset s - t is invariant
        // under the extension; the length is not capped.
        let s0 = s;
        s += 4;
        let mut t = t + 4;
        while s < src.len() && src[s] == src[t] {
            s += 1;
            t += 1;
        }
        d += emit_copy(&mut dst[d..], s - t, s - s0);
        lit = s;
    }

    // Emit any final pending literal bytes.
    if lit != src.len() {
        d += emit_literal(&mut dst[d..], &src[lit..]);
    }
    dst.truncate(d);
    dst
}
