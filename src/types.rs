//! Closed value sets carried in identifiers and payloads.
//!
//! Each enum mirrors one byte- or nibble-sized slot on the wire. Encoding is
//! `as u8`; decoding goes through `from_raw`, which rejects values outside
//! the set.

/// Five-bit board identity, stamped into the low bits of every identifier.
///
/// `Any` doubles as the placeholder a [`crate::client::NodeHandle`] queues
/// frames with before the node overwrites it, and as the broadcast target of
/// a [`crate::messages::ResetCmd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BoardId {
    Any = 0x00,
    Injector = 0x01,
    InjectorSpare = 0x02,
    Logger = 0x03,
    LoggerSpare = 0x04,
    Radio = 0x05,
    RadioSpare = 0x06,
    Sensor = 0x07,
    SensorSpare = 0x08,
    Usb = 0x09,
    UsbSpare = 0x0a,
    Vent = 0x0b,
    VentSpare = 0x0c,
    Gps = 0x0d,
    GpsSpare = 0x0e,
    Fill = 0x0f,
    FillSpare = 0x10,
    Arming = 0x11,
    ArmingSpare = 0x12,
    Papa = 0x13,
    PapaSpare = 0x14,
    RocketPi = 0x15,
    RocketPi2 = 0x16,
    RocketPiSpare = 0x17,
    RocketPi2Spare = 0x18,
    Sensor2 = 0x19,
    Sensor2Spare = 0x1a,
    Sensor3 = 0x1b,
    Sensor4 = 0x1c,
    Logger2 = 0x1d,
    Rlcs = 0x1e,
}

impl BoardId {
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0x00 => Self::Any,
            0x01 => Self::Injector,
            0x02 => Self::InjectorSpare,
            0x03 => Self::Logger,
            0x04 => Self::LoggerSpare,
            0x05 => Self::Radio,
            0x06 => Self::RadioSpare,
            0x07 => Self::Sensor,
            0x08 => Self::SensorSpare,
            0x09 => Self::Usb,
            0x0a => Self::UsbSpare,
            0x0b => Self::Vent,
            0x0c => Self::VentSpare,
            0x0d => Self::Gps,
            0x0e => Self::GpsSpare,
            0x0f => Self::Fill,
            0x10 => Self::FillSpare,
            0x11 => Self::Arming,
            0x12 => Self::ArmingSpare,
            0x13 => Self::Papa,
            0x14 => Self::PapaSpare,
            0x15 => Self::RocketPi,
            0x16 => Self::RocketPi2,
            0x17 => Self::RocketPiSpare,
            0x18 => Self::RocketPi2Spare,
            0x19 => Self::Sensor2,
            0x1a => Self::Sensor2Spare,
            0x1b => Self::Sensor3,
            0x1c => Self::Sensor4,
            0x1d => Self::Logger2,
            0x1e => Self::Rlcs,
            _ => return None,
        })
    }
}

/// Bus-wide commands carried by [`crate::messages::GeneralCmd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GenCmd {
    BusDownWarning = 0,
}

impl GenCmd {
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::BusDownWarning),
            _ => None,
        }
    }
}

/// Everything on the rocket that can be opened, closed or switched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ActuatorId {
    VentValve = 0,
    InjectorValve = 1,
    MamaBoardActivate = 2,
    Picam = 3,
    Canbus = 4,
}

impl ActuatorId {
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::VentValve,
            1 => Self::InjectorValve,
            2 => Self::MamaBoardActivate,
            3 => Self::Picam,
            4 => Self::Canbus,
            _ => return None,
        })
    }
}

/// Requested or reported actuator position.
///
/// `Illegal` is reported by a board whose limit switches disagree with each
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ActuatorState {
    Open = 0,
    Closed = 1,
    Unknown = 2,
    Illegal = 3,
}

impl ActuatorState {
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Open,
            1 => Self::Closed,
            2 => Self::Unknown,
            3 => Self::Illegal,
            _ => return None,
        })
    }
}

/// Altimeter arming state, a four-bit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ArmState {
    Disarmed = 0,
    Armed = 1,
}

impl ArmState {
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Disarmed),
            1 => Some(Self::Armed),
            _ => None,
        }
    }
}

/// Health report carried by [`crate::messages::GeneralBoardStatus`].
/// `Nominal` means the board has nothing to complain about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BoardStatus {
    Nominal = 0,
    BusOverCurrent = 1,
    BusUnderVoltage = 2,
    BusOverVoltage = 3,
    BattUnderVoltage = 4,
    BattOverVoltage = 5,
    BoardFearedDead = 6,
    NoCanTraffic = 7,
    MissingCriticalBoard = 8,
    RadioSignalLost = 9,
    ActuatorState = 10,
    CannotInitDacs = 11,
    VentPotRange = 12,
    Logging = 13,
    Gps = 14,
    Sensor = 15,
    IllegalCanMsg = 16,
    Segfault = 17,
    UnhandledInterrupt = 18,
    CodingScrewup = 19,
    BattOverCurrent = 20,
}

impl BoardStatus {
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Nominal,
            1 => Self::BusOverCurrent,
            2 => Self::BusUnderVoltage,
            3 => Self::BusOverVoltage,
            4 => Self::BattUnderVoltage,
            5 => Self::BattOverVoltage,
            6 => Self::BoardFearedDead,
            7 => Self::NoCanTraffic,
            8 => Self::MissingCriticalBoard,
            9 => Self::RadioSignalLost,
            10 => Self::ActuatorState,
            11 => Self::CannotInitDacs,
            12 => Self::VentPotRange,
            13 => Self::Logging,
            14 => Self::Gps,
            15 => Self::Sensor,
            16 => Self::IllegalCanMsg,
            17 => Self::Segfault,
            18 => Self::UnhandledInterrupt,
            19 => Self::CodingScrewup,
            20 => Self::BattOverCurrent,
            _ => return None,
        })
    }
}

/// Which analog channel a [`crate::messages::SensorAnalog`] reading belongs
/// to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SensorId {
    Imu1 = 0,
    Imu2 = 1,
    Baro = 2,
    PressureOx = 3,
    PressureCc = 4,
    VentBatt = 5,
    InjBatt = 6,
    ArmBatt1 = 7,
    ArmBatt2 = 8,
    BattCurr = 9,
    BusCurr = 10,
    Velocity = 11,
    Mag1 = 12,
    Mag2 = 13,
    RocketBatt = 14,
    PressurePneumatics = 15,
    VentTemp = 16,
    PicamCurrent = 17,
}

impl SensorId {
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Imu1,
            1 => Self::Imu2,
            2 => Self::Baro,
            3 => Self::PressureOx,
            4 => Self::PressureCc,
            5 => Self::VentBatt,
            6 => Self::InjBatt,
            7 => Self::ArmBatt1,
            8 => Self::ArmBatt2,
            9 => Self::BattCurr,
            10 => Self::BusCurr,
            11 => Self::Velocity,
            12 => Self::Mag1,
            13 => Self::Mag2,
            14 => Self::RocketBatt,
            15 => Self::PressurePneumatics,
            16 => Self::VentTemp,
            17 => Self::PicamCurrent,
            _ => return None,
        })
    }
}

/// Whether the oxidizer fill line is filling or emptying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FillDirection {
    Filling = 0,
    Emptying = 1,
}

impl FillDirection {
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Filling),
            1 => Some(Self::Emptying),
            _ => None,
        }
    }
}

/// Severity of a [`crate::messages::DebugMsg`], a four-bit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DebugLevel {
    None = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debugging = 4,
}

impl DebugLevel {
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::None,
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            4 => Self::Debugging,
            _ => return None,
        })
    }
}
