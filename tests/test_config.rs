//! Pin configuration semantics: field resolution, boolean coercion, range
//! checks, the LOCK latch, pad-power inversion and best-effort batches.

mod common;

use common::{attach, FAKE};
use tegra234_pinmux::{ConfigParam, Error, GroupConfig, PinConfig};

#[test]
fn pull_round_trips_through_the_register() {
    let (mut pmx, regs) = attach(&FAKE);

    pmx.set_group_config("tst0", &[PinConfig::new(ConfigParam::Pull, 2)])
        .unwrap();
    assert_eq!(regs.get(0, 0x00) >> 2 & 0x3, 2, "pull field sits at bit 2");
    assert_eq!(pmx.get_group_config("tst0", ConfigParam::Pull).unwrap(), 2);
}

#[test]
fn one_bit_fields_coerce_any_nonzero_to_true() {
    let (mut pmx, _regs) = attach(&FAKE);

    // 5 does not fit a 1-bit field, but booleans accept any non-zero value.
    pmx.set_group_config("tst0", &[PinConfig::new(ConfigParam::EnableInput, 5)])
        .unwrap();
    assert_eq!(
        pmx.get_group_config("tst0", ConfigParam::EnableInput).unwrap(),
        1
    );
}

#[test]
fn out_of_range_value_is_rejected_without_a_write() {
    let (mut pmx, regs) = attach(&FAKE);
    regs.clear_writes();

    let err = pmx
        .set_group_config("tst0", &[PinConfig::new(ConfigParam::Pull, 4)])
        .unwrap_err();
    let Error::ConfigBatch { failures } = err else {
        panic!("expected a batch error");
    };
    assert!(matches!(
        failures.as_slice(),
        [(
            ConfigParam::Pull,
            Error::ValueOutOfRange {
                arg: 4,
                width: 2,
                ..
            }
        )]
    ));
    assert!(regs.writes().is_empty());
}

#[test]
fn missing_field_reports_unsupported() {
    let (mut pmx, _regs) = attach(&FAKE);

    // tst1 has neither a pull field nor a drive register.
    assert!(matches!(
        pmx.get_group_config("tst1", ConfigParam::Pull),
        Err(Error::Unsupported {
            group: "tst1",
            param: ConfigParam::Pull
        })
    ));
    assert!(matches!(
        pmx.get_group_config("tst1", ConfigParam::DriveDownStrength),
        Err(Error::Unsupported { .. })
    ));
}

#[test]
fn lock_is_write_once() {
    let (mut pmx, regs) = attach(&FAKE);

    pmx.set_group_config("tst0", &[PinConfig::new(ConfigParam::Lock, 0)])
        .expect("clearing an unset LOCK is fine");
    pmx.set_group_config("tst0", &[PinConfig::new(ConfigParam::Lock, 1)])
        .unwrap();
    assert_eq!(regs.get(0, 0x00) & (1 << 7), 1 << 7);

    regs.clear_writes();
    let err = pmx
        .set_group_config("tst0", &[PinConfig::new(ConfigParam::Lock, 0)])
        .unwrap_err();
    let Error::ConfigBatch { failures } = err else {
        panic!("expected a batch error");
    };
    assert!(matches!(
        failures.as_slice(),
        [(ConfigParam::Lock, Error::LockCannotBeCleared { group: "tst0" })]
    ));
    assert!(
        regs.writes().is_empty(),
        "a rejected LOCK clear must not reach the hardware"
    );

    pmx.set_group_config("tst0", &[PinConfig::new(ConfigParam::Lock, 1)])
        .expect("re-asserting a set LOCK is fine");
}

#[test]
fn pad_power_bit_is_stored_inverted() {
    let (mut pmx, regs) = attach(&FAKE);

    pmx.set_group_config("tst1", &[PinConfig::new(ConfigParam::PadPower, 1)])
        .unwrap();
    assert_eq!(
        regs.get(1, 0x20) & 1,
        0,
        "logical on is a cleared hardware bit"
    );
    assert_eq!(
        pmx.get_group_config("tst1", ConfigParam::PadPower).unwrap(),
        1
    );

    pmx.set_group_config("tst1", &[PinConfig::new(ConfigParam::PadPower, 0)])
        .unwrap();
    assert_eq!(regs.get(1, 0x20) & 1, 1);
    assert_eq!(
        pmx.get_group_config("tst1", ConfigParam::PadPower).unwrap(),
        0
    );
}

#[test]
fn drive_strength_and_slew_use_per_group_widths() {
    let (mut pmx, regs) = attach(&FAKE);

    pmx.set_group_config(
        "tst0",
        &[
            PinConfig::new(ConfigParam::DriveDownStrength, 0x1F),
            PinConfig::new(ConfigParam::DriveUpStrength, 0x0A),
            PinConfig::new(ConfigParam::SlewRateRising, 3),
            PinConfig::new(ConfigParam::SlewRateFalling, 1),
        ],
    )
    .unwrap();
    let drv = regs.get(0, 0x04);
    assert_eq!(drv >> 14 & 0x1F, 0x1F);
    assert_eq!(drv >> 20 & 0x1F, 0x0A);
    assert_eq!(drv >> 28 & 0x3, 3);
    assert_eq!(drv >> 30 & 0x3, 1);

    let err = pmx
        .set_group_config("tst0", &[PinConfig::new(ConfigParam::DriveDownStrength, 0x20)])
        .unwrap_err();
    let Error::ConfigBatch { failures } = err else {
        panic!("expected a batch error");
    };
    assert!(matches!(
        failures.as_slice(),
        [(_, Error::ValueOutOfRange { width: 5, .. })]
    ));
}

#[test]
fn batch_is_best_effort_and_reports_every_failure() {
    let (mut pmx, regs) = attach(&FAKE);

    let err = pmx
        .set_group_config(
            "tst0",
            &[
                PinConfig::new(ConfigParam::Pull, 7),      // out of range
                PinConfig::new(ConfigParam::Tristate, 1),  // fine
                PinConfig::new(ConfigParam::IoReset, 1),   // unsupported
                PinConfig::new(ConfigParam::Schmitt, 1),   // fine
            ],
        )
        .unwrap_err();

    let Error::ConfigBatch { failures } = err else {
        panic!("expected a batch error");
    };
    assert_eq!(failures.len(), 2);
    assert!(matches!(
        failures[0],
        (ConfigParam::Pull, Error::ValueOutOfRange { .. })
    ));
    assert!(matches!(
        failures[1],
        (ConfigParam::IoReset, Error::Unsupported { .. })
    ));

    // Items after the failures were still applied.
    let val = regs.get(0, 0x00);
    assert_eq!(val & (1 << 4), 1 << 4, "tristate applied despite failures");
    assert_eq!(val & (1 << 12), 1 << 12, "schmitt applied despite failures");
}

#[test]
fn apply_muxes_before_configuring() {
    let (mut pmx, regs) = attach(&FAKE);
    regs.clear_writes();

    pmx.apply(&GroupConfig {
        group: "tst0",
        function: Some("delta"),
        configs: &[
            PinConfig::new(ConfigParam::Pull, 1),
            PinConfig::new(ConfigParam::Tristate, 0),
        ],
    })
    .unwrap();

    let val = regs.get(0, 0x00);
    assert_eq!(val & 0x3, 3, "delta sits in slot 3");
    assert_eq!(val >> 2 & 0x3, 1);
    assert_eq!(val & (1 << 4), 0);

    let writes = regs.writes();
    assert_eq!(writes[0].1, 0x00, "the mux write must come first");
}

#[test]
fn apply_without_function_only_configures() {
    let (mut pmx, regs) = attach(&FAKE);

    pmx.apply(&GroupConfig {
        group: "tst1",
        function: None,
        configs: &[PinConfig::new(ConfigParam::Tristate, 1)],
    })
    .unwrap();
    assert_eq!(regs.get(1, 0x10) & (1 << 4), 1 << 4);
}

#[test]
fn register_failure_surfaces_in_the_batch() {
    let (mut pmx, regs) = attach(&FAKE);

    regs.fail_on(0, 0x00);
    let err = pmx
        .set_group_config("tst0", &[PinConfig::new(ConfigParam::Pull, 1)])
        .unwrap_err();
    let Error::ConfigBatch { failures } = err else {
        panic!("expected a batch error");
    };
    assert!(matches!(
        failures.as_slice(),
        [(ConfigParam::Pull, Error::RegisterAccess { bank: 0, offset: 0 })]
    ));
}
