use embedded_can::StandardId;
use rocketcan::{
    messages::*, types::*, CanFrame, DecodeError, Id, Message, MsgType, BOARD_MASK, TYPE_MASK,
};

/// One representative value of every catalogue type.
fn catalogue() -> [AnyMessage; 26] {
    [
        AnyMessage::GeneralCmd(GeneralCmd {
            time: 1,
            command: GenCmd::BusDownWarning,
        }),
        AnyMessage::ActuatorCmd(ActuatorCmd {
            time: 2,
            actuator: ActuatorId::InjectorValve,
            req_state: ActuatorState::Closed,
        }),
        AnyMessage::AltArmCmd(AltArmCmd {
            time: 3,
            state: ArmState::Armed,
            altimeter: 2,
        }),
        AnyMessage::ResetCmd(ResetCmd {
            time: 4,
            reset_board: BoardId::Logger,
        }),
        AnyMessage::DebugMsg(DebugMsg {
            time: 5,
            level: DebugLevel::Warn,
            line: 0x123,
            data: [1, 2, 3],
        }),
        AnyMessage::DebugPrintf(DebugPrintf { time: 6 }),
        AnyMessage::DebugRadioCmd(DebugRadioCmd { time: 7 }),
        AnyMessage::AltArmStatus(AltArmStatus {
            time: 8,
            state: ArmState::Disarmed,
            altimeter: 1,
            drogue_v: 3300,
            main_v: 2900,
        }),
        AnyMessage::ActuatorStatus(ActuatorStatus {
            time: 9,
            actuator: ActuatorId::VentValve,
            cur_state: ActuatorState::Unknown,
            req_state: ActuatorState::Open,
        }),
        AnyMessage::GeneralBoardStatus(GeneralBoardStatus {
            time: 10,
            status: BoardStatus::BattUnderVoltage,
        }),
        AnyMessage::SensorTemp(SensorTemp {
            time: 11,
            sensor_id: 4,
            temperature: -18_000,
        }),
        AnyMessage::SensorAltitude(SensorAltitude {
            time: 12,
            altitude: -15,
        }),
        AnyMessage::SensorAcc(SensorAcc {
            time: 13,
            x: 100,
            y: -50,
            z: 999,
        }),
        AnyMessage::SensorAcc2(SensorAcc2 {
            time: 14,
            x: -1,
            y: 2,
            z: -3,
        }),
        AnyMessage::SensorGyro(SensorGyro {
            time: 15,
            x: 30,
            y: -40,
            z: 50,
        }),
        AnyMessage::SensorMag(SensorMag {
            time: 16,
            x: -300,
            y: 200,
            z: -100,
        }),
        AnyMessage::SensorAnalog(SensorAnalog {
            time: 17,
            sensor_id: SensorId::Baro,
            value: -2048,
        }),
        AnyMessage::GpsTimestamp(GpsTimestamp {
            time: 18,
            hrs: 13,
            mins: 37,
            secs: 59,
            dsecs: 9,
        }),
        AnyMessage::GpsLatitude(GpsLatitude {
            time: 19,
            degs: 43,
            mins: 28,
            dmins: 1234,
            direction: b'N',
        }),
        AnyMessage::GpsLongitude(GpsLongitude {
            time: 20,
            degs: 80,
            mins: 32,
            dmins: 4321,
            direction: b'W',
        }),
        AnyMessage::GpsAltitude(GpsAltitude {
            time: 21,
            altitude: 330,
            daltitude: 5,
            unit: b'M',
        }),
        AnyMessage::GpsInfo(GpsInfo {
            time: 22,
            num_sats: 11,
            quality: 2,
        }),
        AnyMessage::FillLvl(FillLvl {
            time: 23,
            level: 9,
            direction: FillDirection::Emptying,
        }),
        AnyMessage::RadiValue(RadiValue {
            time: 24,
            radi_board: 1,
            radi: 777,
        }),
        AnyMessage::LedsOff(LedsOff { time: 25 }),
        AnyMessage::LedsOn(LedsOn { time: 26 }),
    ]
}

#[test]
fn every_type_round_trips() {
    for msg in catalogue() {
        let frame = msg.encode(BoardId::Sensor);
        assert_eq!(AnyMessage::decode(&frame), Ok(msg), "{:?}", msg.msg_type());
    }
}

#[test]
fn identifiers_carry_type_and_board() {
    for raw in 0..0x20 {
        let Some(board) = BoardId::from_raw(raw) else {
            continue;
        };

        for msg in catalogue() {
            let id = msg.encode(board).id;
            assert_eq!(id.as_can_id().as_raw() & TYPE_MASK, msg.msg_type().base());
            assert_eq!(id.as_can_id().as_raw() & BOARD_MASK, u16::from(raw));
            assert_eq!(id.board(), Some(board));
        }
    }
}

#[test]
fn frames_of_every_other_type_are_rejected() {
    for msg in catalogue() {
        let frame = msg.encode(BoardId::Any);

        if msg.msg_type() == MsgType::FillLvl {
            assert!(FillLvl::decode(&frame).is_ok());
        } else {
            assert_eq!(FillLvl::decode(&frame), Err(DecodeError::TypeMismatch));
        }
    }
}

#[test]
fn unknown_type_bits_are_rejected() {
    // 0x0a0 is a hole in the catalogue
    let id = Id::from_can_id(StandardId::new(0x0a0 | 0x03).unwrap());
    let frame = CanFrame::from_slice(id, &[0, 0, 0, 0]).unwrap();

    assert_eq!(AnyMessage::decode(&frame), Err(DecodeError::TypeMismatch));
}

#[test]
fn truncated_payloads_are_rejected() {
    let full = FillLvl {
        time: 1,
        level: 2,
        direction: FillDirection::Filling,
    }
    .encode(BoardId::Fill);

    for len in 0..full.data.len() {
        let cut = CanFrame::from_slice(full.id, &full.data[..len]).unwrap();
        assert_eq!(
            FillLvl::decode(&cut),
            Err(DecodeError::Truncated { expected: 5, len })
        );
    }

    let full = GpsLatitude {
        time: 2,
        degs: 43,
        mins: 28,
        dmins: 1234,
        direction: b'N',
    }
    .encode(BoardId::Gps);

    for len in 0..full.data.len() {
        let cut = CanFrame::from_slice(full.id, &full.data[..len]).unwrap();
        assert_eq!(
            GpsLatitude::decode(&cut),
            Err(DecodeError::Truncated { expected: 8, len })
        );
    }
}

#[test]
fn trailing_padding_is_ignored() {
    let msg = GpsInfo {
        time: 3,
        num_sats: 7,
        quality: 1,
    };
    let frame = msg.encode(BoardId::Gps);

    let mut padded = [0; 8];
    padded[..frame.data.len()].copy_from_slice(&frame.data);
    let padded = CanFrame::from_slice(frame.id, &padded).unwrap();

    assert_eq!(GpsInfo::decode(&padded), Ok(msg));
}

#[test]
fn fill_level_wire_layout() {
    let msg = FillLvl {
        time: 0x0a0b0c,
        level: 77,
        direction: FillDirection::Filling,
    };
    let frame = msg.encode(BoardId::Fill);

    assert_eq!(frame.data.as_slice(), [0x0a, 0x0b, 0x0c, 77, 0]);
    assert_eq!(FillLvl::decode(&frame), Ok(msg));
}

#[test]
fn accelerometer_wire_layout_keeps_signs() {
    let msg = SensorAcc {
        time: 0x1234,
        x: 100,
        y: -50,
        z: 999,
    };
    let frame = msg.encode(BoardId::Sensor);

    assert_eq!(
        frame.data.as_slice(),
        [0x12, 0x34, 0x00, 0x64, 0xff, 0xce, 0x03, 0xe7]
    );
    assert_eq!(SensorAcc::decode(&frame), Ok(msg));
}

#[test]
fn debug_msg_packs_level_and_line_into_nibbles() {
    let msg = DebugMsg {
        time: 0x000102,
        level: DebugLevel::Info,
        line: 0x123,
        data: [0xaa, 0xbb, 0xcc],
    };
    let frame = msg.encode(BoardId::Usb);

    assert_eq!(
        frame.data.as_slice(),
        [0x00, 0x01, 0x02, 0x31, 0x23, 0xaa, 0xbb, 0xcc]
    );
    assert_eq!(DebugMsg::decode(&frame), Ok(msg));
}

#[test]
fn arm_state_shares_a_byte_with_the_altimeter() {
    let cmd = AltArmCmd {
        time: 7,
        state: ArmState::Armed,
        altimeter: 3,
    };
    assert_eq!(
        cmd.encode(BoardId::Arming).data.as_slice(),
        [0x00, 0x00, 0x07, 0x13]
    );

    let status = AltArmStatus {
        time: 7,
        state: ArmState::Disarmed,
        altimeter: 1,
        drogue_v: 0x0102,
        main_v: 0x0304,
    };
    assert_eq!(
        status.encode(BoardId::Arming).data.as_slice(),
        [0x00, 0x00, 0x07, 0x01, 0x01, 0x02, 0x03, 0x04]
    );
}

#[test]
fn oversized_field_values_are_masked_on_encode() {
    let frame = DebugMsg {
        time: 0,
        level: DebugLevel::Error,
        line: 0x1fff,
        data: [0; 3],
    }
    .encode(BoardId::Any);
    assert_eq!(DebugMsg::decode(&frame).unwrap().line, 0xfff);

    let frame = AltArmCmd {
        time: 0,
        state: ArmState::Armed,
        altimeter: 0x1f,
    }
    .encode(BoardId::Any);
    assert_eq!(AltArmCmd::decode(&frame).unwrap().altimeter, 0xf);
}

#[test]
fn unmapped_enum_values_are_rejected() {
    let mut frame = FillLvl {
        time: 0,
        level: 1,
        direction: FillDirection::Filling,
    }
    .encode(BoardId::Fill);
    frame.data[4] = 9;

    assert_eq!(
        FillLvl::decode(&frame),
        Err(DecodeError::BadField {
            field: "direction",
            value: 9
        })
    );

    let mut frame = GeneralBoardStatus {
        time: 0,
        status: BoardStatus::Nominal,
    }
    .encode(BoardId::Vent);
    frame.data[3] = 21;

    assert_eq!(
        GeneralBoardStatus::decode(&frame),
        Err(DecodeError::BadField {
            field: "status",
            value: 21
        })
    );
}

#[test]
fn frames_from_unknown_boards_still_parse() {
    let mut frame = FillLvl {
        time: 1,
        level: 2,
        direction: FillDirection::Emptying,
    }
    .encode(BoardId::Any);
    // 0x1f maps to no board
    frame.id = Id::from_can_id(StandardId::new(MsgType::FillLvl.base() | 0x1f).unwrap());

    assert_eq!(frame.id.board(), None);
    assert_eq!(frame.id.board_raw(), 0x1f);
    assert!(FillLvl::decode(&frame).is_ok());
}
