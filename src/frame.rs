use crate::{types::BoardId, Id, MsgType};

/// A single bus frame: identifier plus up to eight payload bytes.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CanFrame {
    pub id: Id,
    pub data: heapless::Vec<u8, 8>,
}

impl CanFrame {
    /// Placeholder value for initializing channel buffers.
    pub const DEFAULT: Self = Self {
        id: Id::new(MsgType::GeneralCmd, BoardId::Any),
        data: heapless::Vec::new(),
    };

    #[must_use]
    pub fn new(id: Id, data: heapless::Vec<u8, 8>) -> Self {
        Self { id, data }
    }

    /// Returns `None` if `data` does not fit a frame.
    #[must_use]
    pub fn from_slice(id: Id, data: &[u8]) -> Option<Self> {
        Some(Self {
            id,
            data: heapless::Vec::from_slice(data).ok()?,
        })
    }

    pub fn to_can_frame<T: embedded_can::Frame>(&self) -> T {
        T::new(self.id.as_can_id(), &self.data).unwrap()
    }

    /// Pick a bus frame up off a driver.
    ///
    /// Only standard-identifier data frames carry catalogue traffic; remote
    /// frames and extended identifiers yield `None`.
    pub fn from_can_frame<T: embedded_can::Frame>(frame: &T) -> Option<Self> {
        if frame.is_remote_frame() {
            return None;
        }

        let id = match frame.id() {
            embedded_can::Id::Standard(id) => Id::from_can_id(id),
            embedded_can::Id::Extended(_) => return None,
        };

        Self::from_slice(id, frame.data())
    }
}
