//! The message catalogue: one struct per message type on the bus.
//!
//! Each type pairs a plain struct with a static [`Descriptor`] naming its
//! wire layout. Payloads lead with a time-since-boot stamp in milliseconds,
//! 16 bits wide for the high-rate sensor messages and 24 bits for everything
//! else; the remaining fields follow MSB first.

use crate::{
    descriptor::{Descriptor, Field},
    types::{
        ActuatorId, ActuatorState, ArmState, BoardId, BoardStatus, DebugLevel, FillDirection,
        GenCmd, SensorId,
    },
    CanFrame, DecodeError, Message, MsgType,
};

/// Command addressed to every board at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GeneralCmd {
    pub time: u32,
    pub command: GenCmd,
}

impl Message for GeneralCmd {
    const MSG_TYPE: MsgType = MsgType::GeneralCmd;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[Field::unsigned("time", 24), Field::enumerated("command", 8)],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = self.command as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            command: GenCmd::from_raw(values[1] as u8).ok_or(DecodeError::BadField {
                field: "command",
                value: values[1],
            })?,
        })
    }
}

/// Ask a board to drive an actuator to a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorCmd {
    pub time: u32,
    pub actuator: ActuatorId,
    pub req_state: ActuatorState,
}

impl Message for ActuatorCmd {
    const MSG_TYPE: MsgType = MsgType::ActuatorCmd;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::enumerated("actuator", 8),
            Field::enumerated("req_state", 8),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = self.actuator as u32;
        values[2] = self.req_state as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            actuator: ActuatorId::from_raw(values[1] as u8).ok_or(DecodeError::BadField {
                field: "actuator",
                value: values[1],
            })?,
            req_state: ActuatorState::from_raw(values[2] as u8).ok_or(DecodeError::BadField {
                field: "req_state",
                value: values[2],
            })?,
        })
    }
}

/// Arm or disarm one of the recovery altimeters.
///
/// The arm state and the altimeter number share a byte, one nibble each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AltArmCmd {
    pub time: u32,
    pub state: ArmState,
    pub altimeter: u8,
}

impl Message for AltArmCmd {
    const MSG_TYPE: MsgType = MsgType::AltArmCmd;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::enumerated("state", 4),
            Field::unsigned("altimeter", 4),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = self.state as u32;
        values[2] = u32::from(self.altimeter);
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            state: ArmState::from_raw(values[1] as u8).ok_or(DecodeError::BadField {
                field: "state",
                value: values[1],
            })?,
            altimeter: values[2] as u8,
        })
    }
}

/// Ask a board to reset itself. `BoardId::Any` resets everyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetCmd {
    pub time: u32,
    pub reset_board: BoardId,
}

impl Message for ResetCmd {
    const MSG_TYPE: MsgType = MsgType::ResetCmd;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::enumerated("reset_board", 8),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = self.reset_board as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            reset_board: BoardId::from_raw(values[1] as u8).ok_or(DecodeError::BadField {
                field: "reset_board",
                value: values[1],
            })?,
        })
    }
}

/// A log line reference: severity, source line number and up to three bytes
/// of raw context.
///
/// The level takes the high nibble of the byte after the timestamp and the
/// 12-bit line number spills from its low nibble into the next byte. Boards
/// with nothing to attach send `data` as zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebugMsg {
    pub time: u32,
    pub level: DebugLevel,
    pub line: u16,
    pub data: [u8; 3],
}

impl Message for DebugMsg {
    const MSG_TYPE: MsgType = MsgType::DebugMsg;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::enumerated("level", 4),
            Field::unsigned("line", 12),
            Field::unsigned("data", 24),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = self.level as u32;
        values[2] = u32::from(self.line);
        values[3] = u32::from_be_bytes([0, self.data[0], self.data[1], self.data[2]]);
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        let [_, a, b, c] = values[3].to_be_bytes();

        Ok(Self {
            time: values[0],
            level: DebugLevel::from_raw(values[1] as u8).ok_or(DecodeError::BadField {
                field: "level",
                value: values[1],
            })?,
            line: values[2] as u16,
            data: [a, b, c],
        })
    }
}

/// Marks printf-style output in a board's serial stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebugPrintf {
    pub time: u32,
}

impl Message for DebugPrintf {
    const MSG_TYPE: MsgType = MsgType::DebugPrintf;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[Field::unsigned("time", 24)],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self { time: values[0] })
    }
}

/// Command relayed from the ground station over the radio link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebugRadioCmd {
    pub time: u32,
}

impl Message for DebugRadioCmd {
    const MSG_TYPE: MsgType = MsgType::DebugRadioCmd;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[Field::unsigned("time", 24)],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self { time: values[0] })
    }
}

/// Arming board report: altimeter arm state plus the voltages on the drogue
/// and main pyro lines, in millivolts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AltArmStatus {
    pub time: u32,
    pub state: ArmState,
    pub altimeter: u8,
    pub drogue_v: u16,
    pub main_v: u16,
}

impl Message for AltArmStatus {
    const MSG_TYPE: MsgType = MsgType::AltArmStatus;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::enumerated("state", 4),
            Field::unsigned("altimeter", 4),
            Field::unsigned("drogue_v", 16),
            Field::unsigned("main_v", 16),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = self.state as u32;
        values[2] = u32::from(self.altimeter);
        values[3] = u32::from(self.drogue_v);
        values[4] = u32::from(self.main_v);
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            state: ArmState::from_raw(values[1] as u8).ok_or(DecodeError::BadField {
                field: "state",
                value: values[1],
            })?,
            altimeter: values[2] as u8,
            drogue_v: values[3] as u16,
            main_v: values[4] as u16,
        })
    }
}

/// Where an actuator is versus where it was told to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorStatus {
    pub time: u32,
    pub actuator: ActuatorId,
    pub cur_state: ActuatorState,
    pub req_state: ActuatorState,
}

impl Message for ActuatorStatus {
    const MSG_TYPE: MsgType = MsgType::ActuatorStatus;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::enumerated("actuator", 8),
            Field::enumerated("cur_state", 8),
            Field::enumerated("req_state", 8),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = self.actuator as u32;
        values[2] = self.cur_state as u32;
        values[3] = self.req_state as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            actuator: ActuatorId::from_raw(values[1] as u8).ok_or(DecodeError::BadField {
                field: "actuator",
                value: values[1],
            })?,
            cur_state: ActuatorState::from_raw(values[2] as u8).ok_or(DecodeError::BadField {
                field: "cur_state",
                value: values[2],
            })?,
            req_state: ActuatorState::from_raw(values[3] as u8).ok_or(DecodeError::BadField {
                field: "req_state",
                value: values[3],
            })?,
        })
    }
}

/// Periodic health report. Every board sends one a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GeneralBoardStatus {
    pub time: u32,
    pub status: BoardStatus,
}

impl Message for GeneralBoardStatus {
    const MSG_TYPE: MsgType = MsgType::GeneralBoardStatus;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[Field::unsigned("time", 24), Field::enumerated("status", 8)],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = self.status as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            status: BoardStatus::from_raw(values[1] as u8).ok_or(DecodeError::BadField {
                field: "status",
                value: values[1],
            })?,
        })
    }
}

/// Temperature reading in millidegrees Celsius from one of a board's
/// numbered probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorTemp {
    pub time: u32,
    pub sensor_id: u8,
    pub temperature: i32,
}

impl Message for SensorTemp {
    const MSG_TYPE: MsgType = MsgType::SensorTemp;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::unsigned("sensor_id", 8),
            Field::signed("temperature", 24),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = u32::from(self.sensor_id);
        values[2] = self.temperature as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            sensor_id: values[1] as u8,
            temperature: values[2] as i32,
        })
    }
}

/// Barometric altitude in feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorAltitude {
    pub time: u32,
    pub altitude: i32,
}

impl Message for SensorAltitude {
    const MSG_TYPE: MsgType = MsgType::SensorAltitude;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[Field::unsigned("time", 24), Field::signed("altitude", 32)],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = self.altitude as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            altitude: values[1] as i32,
        })
    }
}

/// Primary IMU accelerometer axes, raw sensor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorAcc {
    pub time: u16,
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Message for SensorAcc {
    const MSG_TYPE: MsgType = MsgType::SensorAcc;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 16),
            Field::signed("x", 16),
            Field::signed("y", 16),
            Field::signed("z", 16),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = u32::from(self.time);
        values[1] = self.x as u32;
        values[2] = self.y as u32;
        values[3] = self.z as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0] as u16,
            x: values[1] as i16,
            y: values[2] as i16,
            z: values[3] as i16,
        })
    }
}

/// Secondary IMU accelerometer axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorAcc2 {
    pub time: u16,
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Message for SensorAcc2 {
    const MSG_TYPE: MsgType = MsgType::SensorAcc2;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 16),
            Field::signed("x", 16),
            Field::signed("y", 16),
            Field::signed("z", 16),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = u32::from(self.time);
        values[1] = self.x as u32;
        values[2] = self.y as u32;
        values[3] = self.z as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0] as u16,
            x: values[1] as i16,
            y: values[2] as i16,
            z: values[3] as i16,
        })
    }
}

/// Gyroscope axes, raw sensor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorGyro {
    pub time: u16,
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Message for SensorGyro {
    const MSG_TYPE: MsgType = MsgType::SensorGyro;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 16),
            Field::signed("x", 16),
            Field::signed("y", 16),
            Field::signed("z", 16),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = u32::from(self.time);
        values[1] = self.x as u32;
        values[2] = self.y as u32;
        values[3] = self.z as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0] as u16,
            x: values[1] as i16,
            y: values[2] as i16,
            z: values[3] as i16,
        })
    }
}

/// Magnetometer axes, raw sensor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorMag {
    pub time: u16,
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Message for SensorMag {
    const MSG_TYPE: MsgType = MsgType::SensorMag;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 16),
            Field::signed("x", 16),
            Field::signed("y", 16),
            Field::signed("z", 16),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = u32::from(self.time);
        values[1] = self.x as u32;
        values[2] = self.y as u32;
        values[3] = self.z as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0] as u16,
            x: values[1] as i16,
            y: values[2] as i16,
            z: values[3] as i16,
        })
    }
}

/// One reading from a named analog channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorAnalog {
    pub time: u16,
    pub sensor_id: SensorId,
    pub value: i16,
}

impl Message for SensorAnalog {
    const MSG_TYPE: MsgType = MsgType::SensorAnalog;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 16),
            Field::enumerated("sensor_id", 8),
            Field::signed("value", 16),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = u32::from(self.time);
        values[1] = self.sensor_id as u32;
        values[2] = self.value as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0] as u16,
            sensor_id: SensorId::from_raw(values[1] as u8).ok_or(DecodeError::BadField {
                field: "sensor_id",
                value: values[1],
            })?,
            value: values[2] as i16,
        })
    }
}

/// UTC time of the current GPS fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpsTimestamp {
    pub time: u32,
    pub hrs: u8,
    pub mins: u8,
    pub secs: u8,
    pub dsecs: u8,
}

impl Message for GpsTimestamp {
    const MSG_TYPE: MsgType = MsgType::GpsTimestamp;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::unsigned("hrs", 8),
            Field::unsigned("mins", 8),
            Field::unsigned("secs", 8),
            Field::unsigned("dsecs", 8),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = u32::from(self.hrs);
        values[2] = u32::from(self.mins);
        values[3] = u32::from(self.secs);
        values[4] = u32::from(self.dsecs);
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            hrs: values[1] as u8,
            mins: values[2] as u8,
            secs: values[3] as u8,
            dsecs: values[4] as u8,
        })
    }
}

/// Latitude in degrees, minutes and ten-thousandths of a minute.
/// `direction` is the ASCII hemisphere letter straight off the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpsLatitude {
    pub time: u32,
    pub degs: u8,
    pub mins: u8,
    pub dmins: u16,
    pub direction: u8,
}

impl Message for GpsLatitude {
    const MSG_TYPE: MsgType = MsgType::GpsLatitude;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::unsigned("degs", 8),
            Field::unsigned("mins", 8),
            Field::unsigned("dmins", 16),
            Field::unsigned("direction", 8),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = u32::from(self.degs);
        values[2] = u32::from(self.mins);
        values[3] = u32::from(self.dmins);
        values[4] = u32::from(self.direction);
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            degs: values[1] as u8,
            mins: values[2] as u8,
            dmins: values[3] as u16,
            direction: values[4] as u8,
        })
    }
}

/// Longitude, same shape as [`GpsLatitude`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpsLongitude {
    pub time: u32,
    pub degs: u8,
    pub mins: u8,
    pub dmins: u16,
    pub direction: u8,
}

impl Message for GpsLongitude {
    const MSG_TYPE: MsgType = MsgType::GpsLongitude;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::unsigned("degs", 8),
            Field::unsigned("mins", 8),
            Field::unsigned("dmins", 16),
            Field::unsigned("direction", 8),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = u32::from(self.degs);
        values[2] = u32::from(self.mins);
        values[3] = u32::from(self.dmins);
        values[4] = u32::from(self.direction);
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            degs: values[1] as u8,
            mins: values[2] as u8,
            dmins: values[3] as u16,
            direction: values[4] as u8,
        })
    }
}

/// GPS altitude with a decimal part; `unit` is the receiver's ASCII unit
/// letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpsAltitude {
    pub time: u32,
    pub altitude: u16,
    pub daltitude: u8,
    pub unit: u8,
}

impl Message for GpsAltitude {
    const MSG_TYPE: MsgType = MsgType::GpsAltitude;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::unsigned("altitude", 16),
            Field::unsigned("daltitude", 8),
            Field::unsigned("unit", 8),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = u32::from(self.altitude);
        values[2] = u32::from(self.daltitude);
        values[3] = u32::from(self.unit);
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            altitude: values[1] as u16,
            daltitude: values[2] as u8,
            unit: values[3] as u8,
        })
    }
}

/// Fix quality as reported by the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpsInfo {
    pub time: u32,
    pub num_sats: u8,
    pub quality: u8,
}

impl Message for GpsInfo {
    const MSG_TYPE: MsgType = MsgType::GpsInfo;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::unsigned("num_sats", 8),
            Field::unsigned("quality", 8),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = u32::from(self.num_sats);
        values[2] = u32::from(self.quality);
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            num_sats: values[1] as u8,
            quality: values[2] as u8,
        })
    }
}

/// Oxidizer fill level as a percentage, with the direction the level is
/// moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FillLvl {
    pub time: u32,
    pub level: u8,
    pub direction: FillDirection,
}

impl Message for FillLvl {
    const MSG_TYPE: MsgType = MsgType::FillLvl;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::unsigned("level", 8),
            Field::enumerated("direction", 8),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = u32::from(self.level);
        values[2] = self.direction as u32;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            level: values[1] as u8,
            direction: FillDirection::from_raw(values[2] as u8).ok_or(DecodeError::BadField {
                field: "direction",
                value: values[2],
            })?,
        })
    }
}

/// Radiation counter reading from one of the payload dosimeter boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadiValue {
    pub time: u32,
    pub radi_board: u8,
    pub radi: u16,
}

impl Message for RadiValue {
    const MSG_TYPE: MsgType = MsgType::RadiValue;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[
            Field::unsigned("time", 24),
            Field::unsigned("radi_board", 8),
            Field::unsigned("radi", 16),
        ],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
        values[1] = u32::from(self.radi_board);
        values[2] = u32::from(self.radi);
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self {
            time: values[0],
            radi_board: values[1] as u8,
            radi: values[2] as u16,
        })
    }
}

/// Kill every status LED on the bus, for dark-pad operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedsOff {
    pub time: u32,
}

impl Message for LedsOff {
    const MSG_TYPE: MsgType = MsgType::LedsOff;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[Field::unsigned("time", 24)],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self { time: values[0] })
    }
}

/// Turn the status LEDs back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedsOn {
    pub time: u32,
}

impl Message for LedsOn {
    const MSG_TYPE: MsgType = MsgType::LedsOn;
    const DESCRIPTOR: &'static Descriptor = &Descriptor {
        fields: &[Field::unsigned("time", 24)],
    };

    fn field_values(&self, values: &mut [u32]) {
        values[0] = self.time;
    }

    fn from_field_values(values: &[u32]) -> Result<Self, DecodeError> {
        Ok(Self { time: values[0] })
    }
}

/// A decoded frame of whatever type its identifier named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnyMessage {
    GeneralCmd(GeneralCmd),
    ActuatorCmd(ActuatorCmd),
    AltArmCmd(AltArmCmd),
    ResetCmd(ResetCmd),
    DebugMsg(DebugMsg),
    DebugPrintf(DebugPrintf),
    DebugRadioCmd(DebugRadioCmd),
    AltArmStatus(AltArmStatus),
    ActuatorStatus(ActuatorStatus),
    GeneralBoardStatus(GeneralBoardStatus),
    SensorTemp(SensorTemp),
    SensorAltitude(SensorAltitude),
    SensorAcc(SensorAcc),
    SensorAcc2(SensorAcc2),
    SensorGyro(SensorGyro),
    SensorMag(SensorMag),
    SensorAnalog(SensorAnalog),
    GpsTimestamp(GpsTimestamp),
    GpsLatitude(GpsLatitude),
    GpsLongitude(GpsLongitude),
    GpsAltitude(GpsAltitude),
    GpsInfo(GpsInfo),
    FillLvl(FillLvl),
    RadiValue(RadiValue),
    LedsOff(LedsOff),
    LedsOn(LedsOn),
}

impl AnyMessage {
    /// Decode a frame by its identifier's type bits. The sender comes from
    /// [`crate::Id::board`] separately; an unknown sender never blocks
    /// decoding.
    pub fn decode(frame: &CanFrame) -> Result<Self, DecodeError> {
        match frame.id.msg_type() {
            Some(MsgType::GeneralCmd) => GeneralCmd::decode(frame).map(Self::GeneralCmd),
            Some(MsgType::ActuatorCmd) => ActuatorCmd::decode(frame).map(Self::ActuatorCmd),
            Some(MsgType::AltArmCmd) => AltArmCmd::decode(frame).map(Self::AltArmCmd),
            Some(MsgType::ResetCmd) => ResetCmd::decode(frame).map(Self::ResetCmd),
            Some(MsgType::DebugMsg) => DebugMsg::decode(frame).map(Self::DebugMsg),
            Some(MsgType::DebugPrintf) => DebugPrintf::decode(frame).map(Self::DebugPrintf),
            Some(MsgType::DebugRadioCmd) => DebugRadioCmd::decode(frame).map(Self::DebugRadioCmd),
            Some(MsgType::AltArmStatus) => AltArmStatus::decode(frame).map(Self::AltArmStatus),
            Some(MsgType::ActuatorStatus) => {
                ActuatorStatus::decode(frame).map(Self::ActuatorStatus)
            }
            Some(MsgType::GeneralBoardStatus) => {
                GeneralBoardStatus::decode(frame).map(Self::GeneralBoardStatus)
            }
            Some(MsgType::SensorTemp) => SensorTemp::decode(frame).map(Self::SensorTemp),
            Some(MsgType::SensorAltitude) => {
                SensorAltitude::decode(frame).map(Self::SensorAltitude)
            }
            Some(MsgType::SensorAcc) => SensorAcc::decode(frame).map(Self::SensorAcc),
            Some(MsgType::SensorAcc2) => SensorAcc2::decode(frame).map(Self::SensorAcc2),
            Some(MsgType::SensorGyro) => SensorGyro::decode(frame).map(Self::SensorGyro),
            Some(MsgType::SensorMag) => SensorMag::decode(frame).map(Self::SensorMag),
            Some(MsgType::SensorAnalog) => SensorAnalog::decode(frame).map(Self::SensorAnalog),
            Some(MsgType::GpsTimestamp) => GpsTimestamp::decode(frame).map(Self::GpsTimestamp),
            Some(MsgType::GpsLatitude) => GpsLatitude::decode(frame).map(Self::GpsLatitude),
            Some(MsgType::GpsLongitude) => GpsLongitude::decode(frame).map(Self::GpsLongitude),
            Some(MsgType::GpsAltitude) => GpsAltitude::decode(frame).map(Self::GpsAltitude),
            Some(MsgType::GpsInfo) => GpsInfo::decode(frame).map(Self::GpsInfo),
            Some(MsgType::FillLvl) => FillLvl::decode(frame).map(Self::FillLvl),
            Some(MsgType::RadiValue) => RadiValue::decode(frame).map(Self::RadiValue),
            Some(MsgType::LedsOff) => LedsOff::decode(frame).map(Self::LedsOff),
            Some(MsgType::LedsOn) => LedsOn::decode(frame).map(Self::LedsOn),
            None => Err(DecodeError::TypeMismatch),
        }
    }

    /// Encode the contained message under the sending board's identity.
    #[must_use]
    pub fn encode(&self, board: BoardId) -> CanFrame {
        match self {
            Self::GeneralCmd(m) => m.encode(board),
            Self::ActuatorCmd(m) => m.encode(board),
            Self::AltArmCmd(m) => m.encode(board),
            Self::ResetCmd(m) => m.encode(board),
            Self::DebugMsg(m) => m.encode(board),
            Self::DebugPrintf(m) => m.encode(board),
            Self::DebugRadioCmd(m) => m.encode(board),
            Self::AltArmStatus(m) => m.encode(board),
            Self::ActuatorStatus(m) => m.encode(board),
            Self::GeneralBoardStatus(m) => m.encode(board),
            Self::SensorTemp(m) => m.encode(board),
            Self::SensorAltitude(m) => m.encode(board),
            Self::SensorAcc(m) => m.encode(board),
            Self::SensorAcc2(m) => m.encode(board),
            Self::SensorGyro(m) => m.encode(board),
            Self::SensorMag(m) => m.encode(board),
            Self::SensorAnalog(m) => m.encode(board),
            Self::GpsTimestamp(m) => m.encode(board),
            Self::GpsLatitude(m) => m.encode(board),
            Self::GpsLongitude(m) => m.encode(board),
            Self::GpsAltitude(m) => m.encode(board),
            Self::GpsInfo(m) => m.encode(board),
            Self::FillLvl(m) => m.encode(board),
            Self::RadiValue(m) => m.encode(board),
            Self::LedsOff(m) => m.encode(board),
            Self::LedsOn(m) => m.encode(board),
        }
    }

    /// Identifier base of the contained message.
    #[must_use]
    pub fn msg_type(&self) -> MsgType {
        match self {
            Self::GeneralCmd(_) => MsgType::GeneralCmd,
            Self::ActuatorCmd(_) => MsgType::ActuatorCmd,
            Self::AltArmCmd(_) => MsgType::AltArmCmd,
            Self::ResetCmd(_) => MsgType::ResetCmd,
            Self::DebugMsg(_) => MsgType::DebugMsg,
            Self::DebugPrintf(_) => MsgType::DebugPrintf,
            Self::DebugRadioCmd(_) => MsgType::DebugRadioCmd,
            Self::AltArmStatus(_) => MsgType::AltArmStatus,
            Self::ActuatorStatus(_) => MsgType::ActuatorStatus,
            Self::GeneralBoardStatus(_) => MsgType::GeneralBoardStatus,
            Self::SensorTemp(_) => MsgType::SensorTemp,
            Self::SensorAltitude(_) => MsgType::SensorAltitude,
            Self::SensorAcc(_) => MsgType::SensorAcc,
            Self::SensorAcc2(_) => MsgType::SensorAcc2,
            Self::SensorGyro(_) => MsgType::SensorGyro,
            Self::SensorMag(_) => MsgType::SensorMag,
            Self::SensorAnalog(_) => MsgType::SensorAnalog,
            Self::GpsTimestamp(_) => MsgType::GpsTimestamp,
            Self::GpsLatitude(_) => MsgType::GpsLatitude,
            Self::GpsLongitude(_) => MsgType::GpsLongitude,
            Self::GpsAltitude(_) => MsgType::GpsAltitude,
            Self::GpsInfo(_) => MsgType::GpsInfo,
            Self::FillLvl(_) => MsgType::FillLvl,
            Self::RadiValue(_) => MsgType::RadiValue,
            Self::LedsOff(_) => MsgType::LedsOff,
            Self::LedsOn(_) => MsgType::LedsOn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::MAX_FIELDS;

    const ALL_DESCRIPTORS: &[(MsgType, &Descriptor)] = &[
        (MsgType::GeneralCmd, GeneralCmd::DESCRIPTOR),
        (MsgType::ActuatorCmd, ActuatorCmd::DESCRIPTOR),
        (MsgType::AltArmCmd, AltArmCmd::DESCRIPTOR),
        (MsgType::ResetCmd, ResetCmd::DESCRIPTOR),
        (MsgType::DebugMsg, DebugMsg::DESCRIPTOR),
        (MsgType::DebugPrintf, DebugPrintf::DESCRIPTOR),
        (MsgType::DebugRadioCmd, DebugRadioCmd::DESCRIPTOR),
        (MsgType::AltArmStatus, AltArmStatus::DESCRIPTOR),
        (MsgType::ActuatorStatus, ActuatorStatus::DESCRIPTOR),
        (MsgType::GeneralBoardStatus, GeneralBoardStatus::DESCRIPTOR),
        (MsgType::SensorTemp, SensorTemp::DESCRIPTOR),
        (MsgType::SensorAltitude, SensorAltitude::DESCRIPTOR),
        (MsgType::SensorAcc, SensorAcc::DESCRIPTOR),
        (MsgType::SensorAcc2, SensorAcc2::DESCRIPTOR),
        (MsgType::SensorGyro, SensorGyro::DESCRIPTOR),
        (MsgType::SensorMag, SensorMag::DESCRIPTOR),
        (MsgType::SensorAnalog, SensorAnalog::DESCRIPTOR),
        (MsgType::GpsTimestamp, GpsTimestamp::DESCRIPTOR),
        (MsgType::GpsLatitude, GpsLatitude::DESCRIPTOR),
        (MsgType::GpsLongitude, GpsLongitude::DESCRIPTOR),
        (MsgType::GpsAltitude, GpsAltitude::DESCRIPTOR),
        (MsgType::GpsInfo, GpsInfo::DESCRIPTOR),
        (MsgType::FillLvl, FillLvl::DESCRIPTOR),
        (MsgType::RadiValue, RadiValue::DESCRIPTOR),
        (MsgType::LedsOff, LedsOff::DESCRIPTOR),
        (MsgType::LedsOn, LedsOn::DESCRIPTOR),
    ];

    #[test]
    fn every_layout_fits_one_frame() {
        for (msg_type, desc) in ALL_DESCRIPTORS {
            assert_eq!(
                desc.payload_bits() % 8,
                0,
                "{msg_type:?} is not byte aligned"
            );
            assert!(desc.payload_len() <= 8, "{msg_type:?} overflows a frame");
            assert!(desc.fields.len() <= MAX_FIELDS);

            let time = desc.fields[0];
            assert_eq!(time.name, "time");
            assert!(time.bits == 16 || time.bits == 24);
        }
    }

    #[test]
    fn catalogue_is_complete() {
        assert_eq!(ALL_DESCRIPTORS.len(), MsgType::ALL.len());
        for ((a, _), b) in ALL_DESCRIPTORS.iter().zip(MsgType::ALL) {
            assert_eq!(*a, b);
        }
    }

    #[test]
    fn payload_sizes_match_the_wire() {
        assert_eq!(GeneralCmd::DESCRIPTOR.payload_len(), 4);
        assert_eq!(ActuatorCmd::DESCRIPTOR.payload_len(), 5);
        assert_eq!(AltArmCmd::DESCRIPTOR.payload_len(), 4);
        assert_eq!(DebugMsg::DESCRIPTOR.payload_len(), 8);
        assert_eq!(DebugPrintf::DESCRIPTOR.payload_len(), 3);
        assert_eq!(AltArmStatus::DESCRIPTOR.payload_len(), 8);
        assert_eq!(ActuatorStatus::DESCRIPTOR.payload_len(), 6);
        assert_eq!(SensorTemp::DESCRIPTOR.payload_len(), 7);
        assert_eq!(SensorAltitude::DESCRIPTOR.payload_len(), 7);
        assert_eq!(SensorAcc::DESCRIPTOR.payload_len(), 8);
        assert_eq!(SensorAnalog::DESCRIPTOR.payload_len(), 5);
        assert_eq!(GpsTimestamp::DESCRIPTOR.payload_len(), 7);
        assert_eq!(GpsLatitude::DESCRIPTOR.payload_len(), 8);
        assert_eq!(GpsAltitude::DESCRIPTOR.payload_len(), 7);
        assert_eq!(GpsInfo::DESCRIPTOR.payload_len(), 5);
        assert_eq!(FillLvl::DESCRIPTOR.payload_len(), 5);
        assert_eq!(RadiValue::DESCRIPTOR.payload_len(), 6);
        assert_eq!(LedsOn::DESCRIPTOR.payload_len(), 3);
    }

    #[test]
    fn field_values_fit_a_layout_sized_buffer() {
        let msg = FillLvl {
            time: 0x0a0b0c,
            level: 77,
            direction: FillDirection::Filling,
        };

        // three fields need three slots, not the engine's full scratch width
        let mut values = [0; 3];
        msg.field_values(&mut values);
        assert_eq!(values, [0x0a0b0c, 77, FillDirection::Filling as u32]);
        assert_eq!(FillLvl::from_field_values(&values), Ok(msg));
    }
}
