//! Shared test fixtures: an in-memory register file and a small synthetic
//! catalog carrying features the Tegra234 tables leave unused (LOCK latch,
//! pad power, parked bits, slew fields, a multi-pin group).
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tegra234_pinmux::{
    BitSpan, Error, FunctionDesc, PinController, PinDesc, PinGroup, Register, RegisterAccess,
    Result, SocCatalog,
};

/// An array-backed register file. Clones share the same storage, so a test
/// can keep a handle for inspection while the controller owns another.
#[derive(Clone)]
pub struct FakeRegisters {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    banks: Vec<Vec<u32>>,
    writes: Vec<(u32, u32, u32)>,
    fail_on: Option<(u32, u32)>,
}

impl FakeRegisters {
    pub fn new(bank_sizes: &[u32]) -> Self {
        FakeRegisters {
            inner: Rc::new(RefCell::new(Inner {
                banks: bank_sizes.iter().map(|&w| vec![0; w as usize]).collect(),
                writes: Vec::new(),
                fail_on: None,
            })),
        }
    }

    pub fn get(&self, bank: u32, offset: u32) -> u32 {
        self.inner.borrow().banks[bank as usize][(offset / 4) as usize]
    }

    pub fn set(&self, bank: u32, offset: u32, value: u32) {
        self.inner.borrow_mut().banks[bank as usize][(offset / 4) as usize] = value;
    }

    /// Every write issued so far, in order, as `(bank, offset, value)`.
    pub fn writes(&self) -> Vec<(u32, u32, u32)> {
        self.inner.borrow().writes.clone()
    }

    pub fn clear_writes(&self) {
        self.inner.borrow_mut().writes.clear();
    }

    /// Makes every access to the given register fail until cleared.
    pub fn fail_on(&self, bank: u32, offset: u32) {
        self.inner.borrow_mut().fail_on = Some((bank, offset));
    }

    pub fn clear_failure(&self) {
        self.inner.borrow_mut().fail_on = None;
    }
}

impl RegisterAccess for FakeRegisters {
    fn read(&mut self, bank: u32, offset: u32) -> Result<u32> {
        let inner = self.inner.borrow();
        if inner.fail_on == Some((bank, offset)) || offset % 4 != 0 {
            return Err(Error::RegisterAccess { bank, offset });
        }
        inner
            .banks
            .get(bank as usize)
            .and_then(|b| b.get((offset / 4) as usize))
            .copied()
            .ok_or(Error::RegisterAccess { bank, offset })
    }

    fn write(&mut self, bank: u32, offset: u32, value: u32) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_on == Some((bank, offset)) || offset % 4 != 0 {
            return Err(Error::RegisterAccess { bank, offset });
        }
        let slot = inner
            .banks
            .get_mut(bank as usize)
            .and_then(|b| b.get_mut((offset / 4) as usize))
            .ok_or(Error::RegisterAccess { bank, offset })?;
        *slot = value;
        inner.writes.push((bank, offset, value));
        Ok(())
    }
}

// Function indices in the synthetic catalog.
pub const ALPHA: u16 = 0;
pub const BETA: u16 = 1;
pub const GAMMA: u16 = 2;
pub const DELTA: u16 = 3;
/// Never listed in any group's candidates.
pub const OMEGA: u16 = 4;

pub const FUNCTIONS: &[FunctionDesc] = &[
    FunctionDesc { name: "alpha" },
    FunctionDesc { name: "beta" },
    FunctionDesc { name: "gamma" },
    FunctionDesc { name: "delta" },
    FunctionDesc { name: "omega" },
];

pub const PINS: &[PinDesc] = &[
    PinDesc { id: 0, name: "TST0" },
    PinDesc { id: 1, name: "TST1" },
    PinDesc { id: 2, name: "TST2" },
    PinDesc { id: 3, name: "TST3_PAD" },
];

const TST0_REG: Register = Register { bank: 0, offset: 0x00 };
const TST0_DRV: Register = Register { bank: 0, offset: 0x04 };
const PAIR_REG: Register = Register { bank: 0, offset: 0x08 };
const TST3_REG: Register = Register { bank: 0, offset: 0x0c };
const TST1_REG: Register = Register { bank: 1, offset: 0x10 };
const TST1_PAD: Register = Register { bank: 1, offset: 0x20 };

/// `tst0` has the full feature set: all four mux slots distinct, a drive
/// register with strength and slew fields, a LOCK latch and parked bits.
pub const TST0: PinGroup = PinGroup {
    name: "tst0",
    pins: &[0],
    funcs: [ALPHA, BETA, GAMMA, DELTA],
    mux: Some(TST0_REG),
    mux_bit: 0,
    pupd: Some(TST0_REG),
    pupd_bit: 2,
    tri: Some(TST0_REG),
    tri_bit: 4,
    lpbk: Some(TST0_REG),
    lpbk_bit: Some(5),
    einput_bit: Some(6),
    lock_bit: Some(7),
    sfsel_bit: Some(10),
    schmitt_bit: Some(12),
    drvtype_bit: Some(13),
    hsm_bit: Some(2),
    lpmd_bit: Some(8),
    drv: Some(TST0_DRV),
    drvdn: Some(BitSpan { bit: 14, width: 5 }),
    drvup: Some(BitSpan { bit: 20, width: 5 }),
    slwr: Some(BitSpan { bit: 28, width: 2 }),
    slwf: Some(BitSpan { bit: 30, width: 2 }),
    parked_bitmask: (1 << 5) | (1 << 9),
    ..PinGroup::EMPTY
};

/// `tst1` is sparse: no pull, no SFIO bit, no drive register, but a pad
/// power bit. Slot 2 holds `alpha`; slot 3 duplicates it.
pub const TST1: PinGroup = PinGroup {
    name: "tst1",
    pins: &[1],
    funcs: [BETA, GAMMA, ALPHA, ALPHA],
    mux: Some(TST1_REG),
    mux_bit: 0,
    tri: Some(TST1_REG),
    tri_bit: 4,
    einput_bit: Some(6),
    pad: Some(TST1_PAD),
    pad_bit: Some(0),
    ..PinGroup::EMPTY
};

/// Two pins in one group; never eligible for GPIO handoff.
pub const TST_PAIR: PinGroup = PinGroup {
    name: "tst_pair",
    pins: &[0, 1],
    funcs: [ALPHA, BETA, GAMMA, DELTA],
    mux: Some(PAIR_REG),
    mux_bit: 0,
    tri: Some(PAIR_REG),
    tri_bit: 4,
    sfsel_bit: Some(10),
    ..PinGroup::EMPTY
};

/// A calibration-pad style group on the config-only pin.
pub const TST3: PinGroup = PinGroup {
    name: "tst3",
    pins: &[3],
    funcs: [ALPHA, ALPHA, ALPHA, ALPHA],
    mux: Some(TST3_REG),
    mux_bit: 0,
    tri: Some(TST3_REG),
    tri_bit: 4,
    drvtype_bit: Some(13),
    ..PinGroup::EMPTY
};

pub const GROUPS: &[PinGroup] = &[TST0, TST1, TST_PAIR, TST3];

/// Pin 2 intentionally has no owning group; pin 3 is config-only.
pub static FAKE: SocCatalog = SocCatalog {
    name: "fake",
    pins: PINS,
    ngpios: 3,
    groups: GROUPS,
    functions: FUNCTIONS,
    bank_sizes: &[0x10, 0x10],
    hsm_in_mux: false,
    schmitt_in_mux: true,
    drvtype_in_mux: true,
    sfsel_in_mux: true,
};

/// Same tables, but without explicit SFIO/GPIO routing.
pub static FAKE_NO_SFSEL: SocCatalog = SocCatalog {
    name: "fake-no-sfsel",
    pins: PINS,
    ngpios: 3,
    groups: GROUPS,
    functions: FUNCTIONS,
    bank_sizes: &[0x10, 0x10],
    hsm_in_mux: false,
    schmitt_in_mux: true,
    drvtype_in_mux: true,
    sfsel_in_mux: false,
};

/// Attaches a controller to a fresh register file, returning a second handle
/// to the same storage for inspection.
pub fn attach(catalog: &'static SocCatalog) -> (PinController<FakeRegisters>, FakeRegisters) {
    let regs = FakeRegisters::new(catalog.bank_sizes);
    let handle = regs.clone();
    let pmx = PinController::new(catalog, regs).expect("attach should succeed");
    (pmx, handle)
}
