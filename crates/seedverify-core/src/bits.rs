//! Big-endian bit fields over byte buffers.
//!
//! Packed mnemonics store 11-bit word indices back to back, most significant
//! bit first, so a single field can straddle two or three bytes and share
//! bytes with its neighbours. [`write_bits`] ORs a field in without touching
//! neighbouring bits; [`read_bits`] is its inverse.

use crate::constants::BITS_PER_WORD;
use crate::error::BitsError;

const MAX_WIDTH: usize = 16;

fn check_bounds(buffer_len: usize, offset: usize, width: usize) -> Result<(), BitsError> {
    if width > MAX_WIDTH {
        return Err(BitsError::UnsupportedWidth(width));
    }
    let capacity = buffer_len * 8;
    if offset.checked_add(width).is_none_or(|end| end > capacity) {
        return Err(BitsError::OutOfBounds {
            offset,
            width,
            capacity,
        });
    }
    Ok(())
}

/// OR the low `width` bits of `value` into `buffer` starting at bit `offset`.
///
/// Bits of `value` above `width` are discarded. Existing bits in the
/// destination are kept, so the target field should start out zero.
pub fn write_bits(
    buffer: &mut [u8],
    offset: usize,
    width: usize,
    value: u16,
) -> Result<(), BitsError> {
    check_bounds(buffer.len(), offset, width)?;
    let value = u32::from(value) & ((1u32 << width) - 1);
    let mut remaining = width;
    let mut pos = offset;
    while remaining > 0 {
        let room = 8 - pos % 8;
        let take = room.min(remaining);
        let chunk = (value >> (remaining - take)) & ((1u32 << take) - 1);
        buffer[pos / 8] |= (chunk << (room - take)) as u8;
        remaining -= take;
        pos += take;
    }
    Ok(())
}

/// Read `width` bits from `buffer` starting at bit `offset`.
pub fn read_bits(buffer: &[u8], offset: usize, width: usize) -> Result<u16, BitsError> {
    check_bounds(buffer.len(), offset, width)?;
    let mut value = 0u32;
    let mut remaining = width;
    let mut pos = offset;
    while remaining > 0 {
        let room = 8 - pos % 8;
        let take = room.min(remaining);
        let chunk = (u32::from(buffer[pos / 8]) >> (room - take)) & ((1u32 << take) - 1);
        value = (value << take) | chunk;
        remaining -= take;
        pos += take;
    }
    Ok(value as u16)
}

/// Pack word indices as consecutive 11-bit fields from the start of `buffer`.
pub fn pack_indices(buffer: &mut [u8], indices: &[u16]) -> Result<(), BitsError> {
    for (i, &index) in indices.iter().enumerate() {
        write_bits(buffer, i * BITS_PER_WORD, BITS_PER_WORD, index)?;
    }
    Ok(())
}

/// Unpack `count` consecutive 11-bit word indices from the start of `buffer`.
pub fn unpack_indices(buffer: &[u8], count: usize) -> Result<Vec<u16>, BitsError> {
    (0..count)
        .map(|i| read_bits(buffer, i * BITS_PER_WORD, BITS_PER_WORD))
        .collect()
}
