//! MSB-first bit packing for frame payloads.
//!
//! Message layouts are defined in bits, not bytes: a few fields are four or
//! twelve bits wide and share bytes with their neighbours. The writer and
//! reader keep a bit cursor over the payload so the codec can walk a layout
//! field by field without per-message offset bookkeeping.

/// Appends bit-fields to an 8-byte payload, most significant bit first.
///
/// ```
/// use rocketcan::BitWriter;
///
/// let mut w = BitWriter::new();
/// w.push(0x3, 4);
/// w.push(0x123, 12);
/// assert_eq!(w.as_slice(), [0x31, 0x23]);
/// ```
#[derive(Debug)]
pub struct BitWriter {
    buf: [u8; 8],
    /// Bit position of the next write, 0..=64.
    pos: usize,
}

impl BitWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: [0; 8], pos: 0 }
    }

    /// Append the low `bits` bits of `value`. Higher bits are discarded, so
    /// an oversized value is truncated to its field width.
    ///
    /// # Panics
    ///
    /// Panics if the write would run past the 8-byte payload.
    #[inline]
    pub fn push(&mut self, value: u32, bits: u32) {
        debug_assert!(bits <= 32);
        debug_assert!(self.pos + bits as usize <= 64, "payload overflow");

        let mut remaining = bits;
        while remaining > 0 {
            let used = (self.pos % 8) as u32;
            let take = remaining.min(8 - used);
            let chunk = (value >> (remaining - take)) & ((1u32 << take) - 1);
            self.buf[self.pos / 8] |= (chunk as u8) << (8 - used - take);
            self.pos += take as usize;
            remaining -= take;
        }
    }

    /// The bytes written so far, including a partial trailing byte if the
    /// cursor is mid-byte.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.pos.div_ceil(8)]
    }

    #[must_use]
    pub fn finish(self) -> heapless::Vec<u8, 8> {
        // the backing buffer is itself 8 bytes, so this cannot overflow
        unsafe { heapless::Vec::from_slice(self.as_slice()).unwrap_unchecked() }
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads bit-fields from a payload, most significant bit first.
#[derive(Debug)]
pub struct BitReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Read the next `bits` bits, zero-extended.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `bits` bits remain in the payload.
    #[inline]
    pub fn pop(&mut self, bits: u32) -> u32 {
        debug_assert!(bits >= 1);
        debug_assert!(bits <= 32);
        debug_assert!(
            self.pos + bits as usize <= self.buf.len() * 8,
            "read past end of payload"
        );

        let mut value = 0;
        let mut remaining = bits;
        while remaining > 0 {
            let used = (self.pos % 8) as u32;
            let take = remaining.min(8 - used);
            let chunk =
                u32::from(self.buf[self.pos / 8] >> (8 - used - take)) & ((1u32 << take) - 1);
            value = value << take | chunk;
            self.pos += take as usize;
            remaining -= take;
        }
        value
    }

    /// Read the next `bits` bits as a two's-complement signed value.
    #[inline]
    pub fn pop_signed(&mut self, bits: u32) -> i32 {
        let shift = 32 - bits;
        ((self.pop(bits) << shift) as i32) >> shift
    }
}
