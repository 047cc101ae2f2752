use embedded_can::StandardId;

use crate::types::BoardId;

/// High six bits of an identifier name the message type.
pub const TYPE_MASK: u16 = 0x7e0;
/// Low five bits carry the sending board.
pub const BOARD_MASK: u16 = 0x01f;

/// Message type, i.e. the identifier base. Lower bases win bus arbitration,
/// so commands sit below telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum MsgType {
    GeneralCmd = 0x060,
    ActuatorCmd = 0x0c0,
    AltArmCmd = 0x140,
    ResetCmd = 0x160,
    DebugMsg = 0x180,
    DebugPrintf = 0x1e0,
    DebugRadioCmd = 0x200,
    AltArmStatus = 0x440,
    ActuatorStatus = 0x460,
    GeneralBoardStatus = 0x520,
    SensorTemp = 0x540,
    SensorAltitude = 0x560,
    SensorAcc = 0x580,
    SensorAcc2 = 0x5a0,
    SensorGyro = 0x5e0,
    SensorMag = 0x640,
    SensorAnalog = 0x6a0,
    GpsTimestamp = 0x6c0,
    GpsLatitude = 0x6e0,
    GpsLongitude = 0x700,
    GpsAltitude = 0x720,
    GpsInfo = 0x740,
    FillLvl = 0x780,
    RadiValue = 0x7a0,
    LedsOff = 0x7c0,
    LedsOn = 0x7e0,
}

impl MsgType {
    /// Every message type on the bus, in base order.
    pub const ALL: [Self; 26] = [
        Self::GeneralCmd,
        Self::ActuatorCmd,
        Self::AltArmCmd,
        Self::ResetCmd,
        Self::DebugMsg,
        Self::DebugPrintf,
        Self::DebugRadioCmd,
        Self::AltArmStatus,
        Self::ActuatorStatus,
        Self::GeneralBoardStatus,
        Self::SensorTemp,
        Self::SensorAltitude,
        Self::SensorAcc,
        Self::SensorAcc2,
        Self::SensorGyro,
        Self::SensorMag,
        Self::SensorAnalog,
        Self::GpsTimestamp,
        Self::GpsLatitude,
        Self::GpsLongitude,
        Self::GpsAltitude,
        Self::GpsInfo,
        Self::FillLvl,
        Self::RadiValue,
        Self::LedsOff,
        Self::LedsOn,
    ];

    #[inline]
    #[must_use]
    pub const fn base(self) -> u16 {
        self as u16
    }

    /// Look up a type by its identifier base (the identifier with the board
    /// bits cleared).
    #[must_use]
    pub const fn from_base(base: u16) -> Option<Self> {
        Some(match base {
            0x060 => Self::GeneralCmd,
            0x0c0 => Self::ActuatorCmd,
            0x140 => Self::AltArmCmd,
            0x160 => Self::ResetCmd,
            0x180 => Self::DebugMsg,
            0x1e0 => Self::DebugPrintf,
            0x200 => Self::DebugRadioCmd,
            0x440 => Self::AltArmStatus,
            0x460 => Self::ActuatorStatus,
            0x520 => Self::GeneralBoardStatus,
            0x540 => Self::SensorTemp,
            0x560 => Self::SensorAltitude,
            0x580 => Self::SensorAcc,
            0x5a0 => Self::SensorAcc2,
            0x5e0 => Self::SensorGyro,
            0x640 => Self::SensorMag,
            0x6a0 => Self::SensorAnalog,
            0x6c0 => Self::GpsTimestamp,
            0x6e0 => Self::GpsLatitude,
            0x700 => Self::GpsLongitude,
            0x720 => Self::GpsAltitude,
            0x740 => Self::GpsInfo,
            0x780 => Self::FillLvl,
            0x7a0 => Self::RadiValue,
            0x7c0 => Self::LedsOff,
            0x7e0 => Self::LedsOn,
            _ => return None,
        })
    }
}

/// An 11-bit bus identifier: message type in the high six bits, sending
/// board in the low five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Id(StandardId);

impl Id {
    #[inline]
    #[must_use]
    pub const fn new(msg_type: MsgType, board: BoardId) -> Self {
        // both halves stay inside their masks, so the OR is a valid 11-bit id
        Self(StandardId::new(msg_type as u16 | board as u16).unwrap())
    }

    /// Wrap a standard CAN ID without interpreting it.
    #[inline]
    #[must_use]
    pub const fn from_can_id(can_id: StandardId) -> Self {
        Self(can_id)
    }

    #[inline]
    #[must_use]
    pub const fn as_can_id(self) -> StandardId {
        self.0
    }

    /// The message type named by the type bits, or `None` for identifiers
    /// outside the catalogue.
    #[inline]
    #[must_use]
    pub fn msg_type(self) -> Option<MsgType> {
        MsgType::from_base(self.0.as_raw() & TYPE_MASK)
    }

    /// The sending board, or `None` if the board bits map to no known board.
    /// Unknown senders do not make a frame undecodable.
    #[inline]
    #[must_use]
    pub fn board(self) -> Option<BoardId> {
        BoardId::from_raw(self.board_raw())
    }

    /// The raw board bits.
    #[inline]
    #[must_use]
    pub fn board_raw(self) -> u8 {
        (self.0.as_raw() & BOARD_MASK) as u8
    }

    /// The same identifier with the board bits replaced.
    #[inline]
    #[must_use]
    pub fn with_board(self, board: BoardId) -> Self {
        Self(StandardId::new((self.0.as_raw() & TYPE_MASK) | board as u16).unwrap())
    }
}

impl From<StandardId> for Id {
    fn from(id: StandardId) -> Self {
        Self::from_can_id(id)
    }
}

impl From<Id> for embedded_can::Id {
    fn from(id: Id) -> Self {
        Self::Standard(id.as_can_id())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Id {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Id({:x})", self.0.as_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::{Id, MsgType, BOARD_MASK, TYPE_MASK};
    use crate::types::BoardId;

    #[test]
    fn bases_are_unique_type_slots() {
        for (i, a) in MsgType::ALL.iter().enumerate() {
            assert_eq!(a.base() & !TYPE_MASK, 0, "{a:?} spills out of the type bits");
            for b in &MsgType::ALL[i + 1..] {
                assert_ne!(a.base(), b.base());
            }
        }
    }

    #[test]
    fn base_lookup_round_trips() {
        for t in MsgType::ALL {
            assert_eq!(MsgType::from_base(t.base()), Some(t));
        }
        assert_eq!(MsgType::from_base(0x0a0), None);
        assert_eq!(MsgType::from_base(0x000), None);
    }

    #[test]
    fn compose_and_split() {
        let id = Id::new(MsgType::FillLvl, BoardId::Fill);
        assert_eq!(id.as_can_id().as_raw(), 0x780 | 0x0f);
        assert_eq!(id.msg_type(), Some(MsgType::FillLvl));
        assert_eq!(id.board(), Some(BoardId::Fill));
        assert_eq!(id.board_raw(), 0x0f);
    }

    #[test]
    fn with_board_replaces_only_the_board_bits() {
        let id = Id::new(MsgType::ResetCmd, BoardId::Any).with_board(BoardId::Vent);
        assert_eq!(id.msg_type(), Some(MsgType::ResetCmd));
        assert_eq!(id.board(), Some(BoardId::Vent));
    }

    #[test]
    fn every_board_reads_back_under_every_type() {
        for raw in 0..=BOARD_MASK as u8 {
            if let Some(board) = BoardId::from_raw(raw) {
                for t in MsgType::ALL {
                    let id = Id::new(t, board);
                    assert_eq!(id.msg_type(), Some(t));
                    assert_eq!(id.board(), Some(board));
                    assert_eq!(id.board_raw(), raw);
                }
            }
        }
    }

    #[test]
    fn masks_cover_the_whole_identifier() {
        assert_eq!(TYPE_MASK | BOARD_MASK, 0x7ff);
        assert_eq!(TYPE_MASK & BOARD_MASK, 0);
    }
}
