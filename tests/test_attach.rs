//! Attach-time behavior: catalog validation, parked-bit clearing and the
//! debug dump.

mod common;

use common::{attach, FakeRegisters, FAKE, FUNCTIONS, GROUPS, PINS};
use tegra234_pinmux::{ConfigParam, Error, PinConfig, PinController, PinDesc, SocCatalog};

#[test]
fn attach_clears_only_the_parked_bits() {
    let regs = FakeRegisters::new(FAKE.bank_sizes);
    let handle = regs.clone();
    handle.set(0, 0x00, 0xFFFF_FFFF);

    let _pmx = PinController::new(&FAKE, regs).unwrap();

    // tst0 parks bits 5 and 9 of its mux register.
    assert_eq!(handle.get(0, 0x00), 0xFFFF_FFFF & !((1 << 5) | (1 << 9)));
}

#[test]
fn attach_leaves_unparked_groups_alone() {
    let regs = FakeRegisters::new(FAKE.bank_sizes);
    let handle = regs.clone();
    handle.set(1, 0x10, 0xFFFF_FFFF);

    let _pmx = PinController::new(&FAKE, regs).unwrap();
    assert_eq!(handle.get(1, 0x10), 0xFFFF_FFFF);
}

#[test]
fn misordered_pin_table_fails_validation() {
    static BAD: SocCatalog = SocCatalog {
        name: "bad",
        pins: &[
            PinDesc { id: 1, name: "X0" },
            PinDesc { id: 0, name: "X1" },
        ],
        ngpios: 2,
        groups: GROUPS,
        functions: FUNCTIONS,
        bank_sizes: &[0x10, 0x10],
        hsm_in_mux: false,
        schmitt_in_mux: true,
        drvtype_in_mux: true,
        sfsel_in_mux: true,
    };

    let regs = FakeRegisters::new(BAD.bank_sizes);
    assert!(matches!(
        PinController::new(&BAD, regs),
        Err(Error::CatalogMismatch(_))
    ));
}

#[test]
fn register_outside_its_bank_fails_validation() {
    static BAD: SocCatalog = SocCatalog {
        name: "bad",
        pins: PINS,
        ngpios: 3,
        groups: GROUPS,
        functions: FUNCTIONS,
        // tst1's bank-1 registers no longer fit.
        bank_sizes: &[0x10, 0x2],
        hsm_in_mux: false,
        schmitt_in_mux: true,
        drvtype_in_mux: true,
        sfsel_in_mux: true,
    };

    let regs = FakeRegisters::new(BAD.bank_sizes);
    assert!(matches!(
        PinController::new(&BAD, regs),
        Err(Error::CatalogMismatch(_))
    ));
}

#[test]
fn ngpios_cannot_exceed_the_pin_count() {
    static BAD: SocCatalog = SocCatalog {
        name: "bad",
        pins: PINS,
        ngpios: 99,
        groups: GROUPS,
        functions: FUNCTIONS,
        bank_sizes: &[0x10, 0x10],
        hsm_in_mux: false,
        schmitt_in_mux: true,
        drvtype_in_mux: true,
        sfsel_in_mux: true,
    };

    let regs = FakeRegisters::new(BAD.bank_sizes);
    assert!(matches!(
        PinController::new(&BAD, regs),
        Err(Error::CatalogMismatch(_))
    ));
}

#[test]
fn dump_lists_supported_params_with_the_function_by_name() {
    let (mut pmx, _regs) = attach(&FAKE);

    pmx.select_function("gamma", "tst0").unwrap();
    pmx.set_group_config("tst0", &[PinConfig::new(ConfigParam::Pull, 2)])
        .unwrap();

    let dump = pmx.dump_group_config("tst0").unwrap();
    assert!(dump.contains("func=gamma"), "dump was:\n{dump}");
    assert!(dump.contains("pull=2"), "dump was:\n{dump}");
    assert!(dump.contains("tristate=0"), "dump was:\n{dump}");
    assert!(
        !dump.contains("nvidia,"),
        "property names are stripped of the vendor prefix"
    );
}

#[test]
fn dump_skips_unsupported_params() {
    let (mut pmx, _regs) = attach(&FAKE);

    let dump = pmx.dump_group_config("tst1").unwrap();
    assert!(!dump.contains("pull="), "dump was:\n{dump}");
    assert!(dump.contains("pad-power="), "dump was:\n{dump}");
}

#[test]
fn dump_omits_missing_rcv_sel_aliases() {
    let (mut pmx, _regs) = attach(&FAKE);

    // tst0 has no rcv-sel field, so neither alias may appear.
    let dump = pmx.dump_group_config("tst0").unwrap();
    assert!(!dump.contains("rcv-sel="));
    assert!(!dump.contains("io-hv="));
}
