//! Codec for the fixed catalogue of messages on a rocketry avionics CAN bus.
//!
//! Every message fits a single 8-byte frame. The 11-bit identifier carries
//! the message type in its high six bits and the sending board in the low
//! five, so a frame is fully described by a ([`MsgType`], [`BoardId`],
//! payload) triple. Payloads lead with a millisecond timestamp and pack
//! their fields MSB first; the per-type layouts are plain data (see
//! [`descriptor`]) walked by one bit-level engine, so no message type
//! carries its own packing code.
//!
//! The crate uses no heap allocation whatsoever and runs on the flight
//! boards themselves as well as in ground-side tooling. With the `client`
//! feature (on by default), [`client::Node`] drives a bus connection on top
//! of any [`client::AsyncCan`] driver.

#![no_std]

mod bits;
#[cfg(feature = "client")]
pub mod client;
pub mod descriptor;
mod frame;
mod id;
pub mod messages;
pub mod types;

use descriptor::{Descriptor, FieldKind, MAX_FIELDS};

pub use bits::{BitReader, BitWriter};
pub use frame::CanFrame;
pub use id::{Id, MsgType, BOARD_MASK, TYPE_MASK};
pub use messages::AnyMessage;
pub use types::BoardId;

/// Why a frame failed to decode as a particular message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// The identifier's type bits name a different message type, or none at
    /// all.
    TypeMismatch,
    /// The payload is shorter than the message's fixed layout.
    Truncated { expected: usize, len: usize },
    /// An enumerated field holds a value outside its closed set.
    BadField { field: &'static str, value: u32 },
}

/// A message type from the bus catalogue.
///
/// Implementations supply the identifier base, the layout table and the
/// conversions between the typed struct and raw field values; encoding and
/// decoding are layout-table walks provided here once for everyone.
pub trait Message: Sized {
    /// Identifier base of this message type.
    const MSG_TYPE: MsgType;

    /// Static payload layout, leading timestamp included.
    const DESCRIPTOR: &'static Descriptor;

    /// Write the raw field values into `values` in layout order. Signed
    /// fields store their two's-complement bits.
    ///
    /// # Panics
    ///
    /// Panics if `values` is shorter than the layout's field list.
    fn field_values(&self, values: &mut [u32]);

    /// Rebuild the message from raw field values in layout order, validating
    /// enumerated fields.
    ///
    /// # Panics
    ///
    /// Panics if `values` is shorter than the layout's field list.
    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError>;

    /// Encode into a frame stamped with the sending board's identity.
    ///
    /// This cannot fail: the layout fits a frame by construction, and values
    /// wider than their field are truncated to the field's low-order bits.
    fn encode(&self, board: BoardId) -> CanFrame {
        let mut values = [0; MAX_FIELDS];
        self.field_values(&mut values);

        let mut writer = BitWriter::new();
        for (field, value) in Self::DESCRIPTOR.fields.iter().zip(values) {
            writer.push(value, field.bits);
        }

        CanFrame::new(Id::new(Self::MSG_TYPE, board), writer.finish())
    }

    /// Decode a frame of this message type.
    fn decode(frame: &CanFrame) -> Result<Self, DecodeError> {
        if frame.id.msg_type() != Some(Self::MSG_TYPE) {
            return Err(DecodeError::TypeMismatch);
        }

        let expected = Self::DESCRIPTOR.payload_len();
        if frame.data.len() < expected {
            return Err(DecodeError::Truncated {
                expected,
                len: frame.data.len(),
            });
        }

        let mut reader = BitReader::new(&frame.data);
        let mut values = [0; MAX_FIELDS];
        for (slot, field) in values.iter_mut().zip(Self::DESCRIPTOR.fields) {
            *slot = match field.kind {
                FieldKind::Signed => reader.pop_signed(field.bits) as u32,
                FieldKind::Unsigned | FieldKind::Enum => reader.pop(field.bits),
            };
        }

        Self::from_field_values(&values[..Self::DESCRIPTOR.fields.len()])
    }
}
