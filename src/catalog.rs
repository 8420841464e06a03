//! The static pin/group/function catalog and per-group register layout.
//!
//! A [`SocCatalog`] is immutable data describing one chip generation: the pin
//! table, the pin groups with their register locations, the function table,
//! and a handful of catalog-wide layout flags. The controller builds the
//! function→groups inverted index from it once, at attach, and never mutates
//! it afterwards.

use crate::config::ConfigParam;
use crate::error::{Error, Result};
use crate::regs::{BitSpan, ConfigField, Register};

/// One physical pin: a small integer id plus its display name.
#[derive(Debug, Clone, Copy)]
pub struct PinDesc {
    pub id: u32,
    pub name: &'static str,
}

/// One mux function: just a name; the list of groups referencing it is
/// derived at attach time by scanning every group's four function slots.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDesc {
    pub name: &'static str,
}

/// A named group of pins sharing one set of configuration registers.
///
/// Register locations are `Option`-typed: `None` means the hardware feature
/// does not exist on this group, and any parameter resolving through it must
/// be reported as unsupported. Most groups contain exactly one pin; only
/// single-pin groups are eligible for GPIO save/restore.
#[derive(Debug, Clone, Copy)]
pub struct PinGroup {
    pub name: &'static str,
    pub pins: &'static [u32],
    /// Exactly four selectable functions, indexed by the 2-bit mux field.
    /// Duplicates mark slots that are effectively unavailable.
    pub funcs: [u16; 4],

    /// Mux (function-select) register; also carries most per-pin config bits.
    pub mux: Option<Register>,
    pub mux_bit: u8,
    pub pupd: Option<Register>,
    pub pupd_bit: u8,
    pub tri: Option<Register>,
    pub tri_bit: u8,
    pub einput_bit: Option<u8>,
    pub odrain_bit: Option<u8>,
    pub lock_bit: Option<u8>,
    pub ioreset_bit: Option<u8>,
    pub rcv_sel_bit: Option<u8>,
    pub lpbk: Option<Register>,
    pub lpbk_bit: Option<u8>,
    pub hsm_bit: Option<u8>,
    pub schmitt_bit: Option<u8>,
    pub lpmd_bit: Option<u8>,
    pub drvtype_bit: Option<u8>,

    /// Drive-strength/slew register, distinct from the mux register.
    pub drv: Option<Register>,
    pub drvdn: Option<BitSpan>,
    pub drvup: Option<BitSpan>,
    pub slwr: Option<BitSpan>,
    pub slwf: Option<BitSpan>,

    pub pad: Option<Register>,
    pub pad_bit: Option<u8>,

    /// SFIO-vs-GPIO routing bit, independent of the mux field.
    pub sfsel_bit: Option<u8>,
    /// Bits parked by the bootloader, cleared once at attach.
    pub parked_bitmask: u32,
}

impl PinGroup {
    /// A group with no registers at all; tables use struct-update syntax on
    /// this to spell out only what a group actually has.
    pub const EMPTY: PinGroup = PinGroup {
        name: "",
        pins: &[],
        funcs: [0; 4],
        mux: None,
        mux_bit: 0,
        pupd: None,
        pupd_bit: 0,
        tri: None,
        tri_bit: 0,
        einput_bit: None,
        odrain_bit: None,
        lock_bit: None,
        ioreset_bit: None,
        rcv_sel_bit: None,
        lpbk: None,
        lpbk_bit: None,
        hsm_bit: None,
        schmitt_bit: None,
        lpmd_bit: None,
        drvtype_bit: None,
        drv: None,
        drvdn: None,
        drvup: None,
        slwr: None,
        slwf: None,
        pad: None,
        pad_bit: None,
        sfsel_bit: None,
        parked_bitmask: 0,
    };

    /// The group's primary register: the mux register when present, else the
    /// drive register. Parked-bit clearing targets this.
    pub fn primary_reg(&self) -> Option<Register> {
        self.mux.or(self.drv)
    }
}

/// Immutable description of one chip generation's pinmux controller.
#[derive(Debug)]
pub struct SocCatalog {
    pub name: &'static str,
    pub pins: &'static [PinDesc],
    /// Pins `0..ngpios` are GPIO-capable; higher ids are config-only pads.
    pub ngpios: u32,
    pub groups: &'static [PinGroup],
    pub functions: &'static [FunctionDesc],
    /// Size of each register bank in 32-bit words, indexed by bank id.
    /// Drives the suspend/resume snapshot.
    pub bank_sizes: &'static [u32],

    /// Whether high-speed-mode lives in the mux register (else drive).
    pub hsm_in_mux: bool,
    /// Whether schmitt lives in the mux register (else drive).
    pub schmitt_in_mux: bool,
    /// Whether drive-type lives in the mux register (else drive).
    pub drvtype_in_mux: bool,
    /// Whether explicit SFIO/GPIO routing exists: selecting a function must
    /// assert the group's SFIO bit, and a GPIO request must clear it.
    pub sfsel_in_mux: bool,
}

impl SocCatalog {
    /// Resolves a parameter to its register bit field on `group`, or `None`
    /// when the group does not implement it. Pure field selection; the only
    /// computation is the bank choice for the three parameters that migrate
    /// between the mux and drive registers across chip generations.
    pub fn config_field(&self, group: &PinGroup, param: ConfigParam) -> Option<ConfigField> {
        let (reg, bit, width) = match param {
            ConfigParam::Pull => (group.pupd, Some(group.pupd_bit), 2),
            ConfigParam::Tristate => (group.tri, Some(group.tri_bit), 1),
            ConfigParam::EnableInput => (group.mux, group.einput_bit, 1),
            ConfigParam::OpenDrain => (group.mux, group.odrain_bit, 1),
            ConfigParam::Lock => (group.mux, group.lock_bit, 1),
            ConfigParam::IoReset => (group.mux, group.ioreset_bit, 1),
            ConfigParam::RcvSel => (group.mux, group.rcv_sel_bit, 1),
            ConfigParam::Loopback => (group.lpbk, group.lpbk_bit, 1),
            ConfigParam::HighSpeedMode => {
                let reg = if self.hsm_in_mux { group.mux } else { group.drv };
                (reg, group.hsm_bit, 1)
            }
            ConfigParam::Schmitt => {
                let reg = if self.schmitt_in_mux {
                    group.mux
                } else {
                    group.drv
                };
                (reg, group.schmitt_bit, 1)
            }
            ConfigParam::LowPowerMode => (group.drv, group.lpmd_bit, 2),
            ConfigParam::DriveDownStrength => return span_field(group.drv, group.drvdn),
            ConfigParam::DriveUpStrength => return span_field(group.drv, group.drvup),
            ConfigParam::SlewRateFalling => return span_field(group.drv, group.slwf),
            ConfigParam::SlewRateRising => return span_field(group.drv, group.slwr),
            ConfigParam::DriveType => {
                let reg = if self.drvtype_in_mux {
                    group.mux
                } else {
                    group.drv
                };
                (reg, group.drvtype_bit, 2)
            }
            ConfigParam::Function => (group.mux, Some(group.mux_bit), 2),
            ConfigParam::PadPower => (group.pad, group.pad_bit, 1),
        };

        let reg = reg?;
        Some(ConfigField {
            bank: reg.bank,
            offset: reg.offset,
            bit: bit?,
            width,
        })
    }

    /// Checks the static tables for internal consistency. Called once at
    /// attach; any violation is fatal.
    pub fn validate(&self) -> Result<()> {
        for (i, pin) in self.pins.iter().enumerate() {
            if pin.id != i as u32 {
                return Err(Error::CatalogMismatch(format!(
                    "pin table out of order: {} has id {} at index {}",
                    pin.name, pin.id, i
                )));
            }
        }
        if self.ngpios as usize > self.pins.len() {
            return Err(Error::CatalogMismatch(format!(
                "ngpios {} exceeds pin count {}",
                self.ngpios,
                self.pins.len()
            )));
        }
        for group in self.groups {
            for &f in &group.funcs {
                if f as usize >= self.functions.len() {
                    return Err(Error::CatalogMismatch(format!(
                        "group {} references function index {} of {}",
                        group.name,
                        f,
                        self.functions.len()
                    )));
                }
            }
            for &pin in group.pins {
                if pin as usize >= self.pins.len() {
                    return Err(Error::CatalogMismatch(format!(
                        "group {} references pin {} of {}",
                        group.name,
                        pin,
                        self.pins.len()
                    )));
                }
            }
            if group.parked_bitmask != 0 && group.primary_reg().is_none() {
                return Err(Error::CatalogMismatch(format!(
                    "group {} has parked bits but no register to clear them in",
                    group.name
                )));
            }
            for reg in [group.mux, group.pupd, group.tri, group.lpbk, group.drv, group.pad]
                .into_iter()
                .flatten()
            {
                let words = self
                    .bank_sizes
                    .get(reg.bank as usize)
                    .copied()
                    .unwrap_or(0);
                if reg.offset / 4 >= words {
                    return Err(Error::CatalogMismatch(format!(
                        "group {} register {:#x} outside bank {}",
                        group.name, reg.offset, reg.bank
                    )));
                }
            }
        }
        Ok(())
    }
}

fn span_field(reg: Option<Register>, span: Option<BitSpan>) -> Option<ConfigField> {
    let reg = reg?;
    let span = span?;
    Some(ConfigField {
        bank: reg.bank,
        offset: reg.offset,
        bit: span.bit,
        width: span.width,
    })
}
