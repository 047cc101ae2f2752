//! Static payload schemas.
//!
//! Every message type declares its layout as a table of [`Field`]s; the
//! encode and decode paths in [`crate::Message`] walk the table with a bit
//! cursor. No message type carries hand-written packing code.

/// Upper bound on the number of fields in any layout, timestamp included.
pub const MAX_FIELDS: usize = 8;

/// How a field's raw bits map to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldKind {
    /// Zero-extended integer.
    Unsigned,
    /// Two's-complement integer.
    Signed,
    /// Closed set of named values. Decoding rejects raw bits that map to no
    /// variant.
    Enum,
}

/// One field of a message payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    pub name: &'static str,
    pub bits: u32,
    pub kind: FieldKind,
}

impl Field {
    #[must_use]
    pub const fn unsigned(name: &'static str, bits: u32) -> Self {
        Self {
            name,
            bits,
            kind: FieldKind::Unsigned,
        }
    }

    #[must_use]
    pub const fn signed(name: &'static str, bits: u32) -> Self {
        Self {
            name,
            bits,
            kind: FieldKind::Signed,
        }
    }

    #[must_use]
    pub const fn enumerated(name: &'static str, bits: u32) -> Self {
        Self {
            name,
            bits,
            kind: FieldKind::Enum,
        }
    }
}

/// A message type's payload layout: the leading timestamp plus its fields,
/// in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub fields: &'static [Field],
}

impl Descriptor {
    /// Total layout width in bits.
    #[must_use]
    pub const fn payload_bits(&self) -> u32 {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].bits;
            i += 1;
        }
        total
    }

    /// Payload length in bytes. Every layout in the catalogue is
    /// byte-aligned, so this is exact.
    #[must_use]
    pub const fn payload_len(&self) -> usize {
        self.payload_bits().div_ceil(8) as usize
    }
}
