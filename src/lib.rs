//! # tegra234-pinmux
//!
//! A pin-multiplexing and pin-configuration engine for the NVIDIA Tegra234
//! pinmux controller, driven through a caller-supplied register access port.
//!
//! The crate separates three things:
//!
//! *   The **catalog** ([`SocCatalog`]): static tables describing every pin,
//!     pin group, function and register bit location of the chip. The full
//!     Tegra234 catalog ships in [`tegra234::TEGRA234`].
//! *   The **register port** ([`RegisterAccess`]): the only way the engine
//!     touches hardware. A kernel shim backs it with MMIO apertures, a test
//!     harness with a plain array. The engine keeps no mirrored copy of
//!     configuration registers; every operation reads the hardware.
//! *   The **controller** ([`PinController`]): resolves requests ("mux
//!     function `touch` onto group `touch_clk_pcc4`", "set pull-up strength
//!     12") into read-modify-write sequences against the port.
//!
//! ## Features
//!
//! *   Function selection per group (`select_function`), with automatic
//!     SFIO routing on chips that separate SFIO/GPIO selection from the mux
//!     field.
//! *   Pin configuration get/set (`get_group_config`, `set_group_config`),
//!     including the write-once LOCK latch, boolean coercion for 1-bit
//!     fields and the hardware-inverted pad-power bit.
//! *   Batch application of parsed device-tree nodes (`apply`).
//! *   GPIO handoff (`gpio_request` / `gpio_release`) with mux-state
//!     save/restore.
//! *   System suspend/resume via a flat register snapshot.
//! *   A debugfs-style textual dump of a group's live configuration.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use tegra234_pinmux::{PinController, PinConfig, ConfigParam, Result, RegisterAccess};
//! use tegra234_pinmux::tegra234::TEGRA234;
//!
//! struct Mmio { /* aperture mappings */ }
//! # impl RegisterAccess for Mmio {
//! #     fn read(&mut self, _: u32, _: u32) -> Result<u32> { Ok(0) }
//! #     fn write(&mut self, _: u32, _: u32, _: u32) -> Result<()> { Ok(()) }
//! # }
//!
//! fn main() -> Result<()> {
//!     env_logger::init();
//!     let mut pmx = PinController::new(&TEGRA234, Mmio { })?;
//!
//!     pmx.select_function("touch", "touch_clk_pcc4")?;
//!     pmx.set_group_config(
//!         "touch_clk_pcc4",
//!         &[
//!             PinConfig::new(ConfigParam::Pull, 2),
//!             PinConfig::new(ConfigParam::EnableInput, 1),
//!         ],
//!     )?;
//!     Ok(())
//! }
//! ```

use std::fmt::Write as _;
use std::sync::atomic::{fence, Ordering};

use log::{debug, trace, warn};

pub mod catalog;
pub mod config;
pub mod error;
pub mod regs;
pub mod tegra234;

pub use catalog::{FunctionDesc, PinDesc, PinGroup, SocCatalog};
pub use config::{ConfigParam, GroupConfig, PinConfig, PROPERTIES};
pub use error::{Error, Result};
pub use regs::{BitSpan, ConfigField, Register, RegisterAccess};

/// The pinmux controller: a catalog plus a register port.
///
/// All methods take `&mut self`; the controller itself is the serialization
/// point for register access. Wrap it in a lock if multiple owners need it.
pub struct PinController<R: RegisterAccess> {
    regs: R,
    catalog: &'static SocCatalog,
    /// Names of the groups each function can be muxed onto, built once at
    /// attach. Indexed like `catalog.functions`; group order is preserved.
    func_groups: Vec<Vec<&'static str>>,
    /// Saved mux register value per pin, captured at `gpio_request` and
    /// written back at `gpio_release`.
    gpio_conf: Vec<Option<u32>>,
    /// Flat register snapshot taken by `suspend`, bank after bank.
    snapshot: Option<Vec<u32>>,
}

impl<R: RegisterAccess> PinController<R> {
    /// Attaches to the controller described by `catalog`.
    ///
    /// Validates the catalog, builds the function→groups index and clears
    /// any register bits the bootloader left parked.
    pub fn new(catalog: &'static SocCatalog, regs: R) -> Result<Self> {
        catalog.validate()?;

        // Each mux-capable group appears in up to 4 functions' group lists.
        let mut func_groups = vec![Vec::new(); catalog.functions.len()];
        for (fi, groups) in func_groups.iter_mut().enumerate() {
            for group in catalog.groups {
                if group.mux.is_none() {
                    continue;
                }
                if group.funcs.contains(&(fi as u16)) {
                    groups.push(group.name);
                }
            }
        }

        let mut pmx = PinController {
            regs,
            catalog,
            func_groups,
            gpio_conf: vec![None; catalog.pins.len()],
            snapshot: None,
        };
        pmx.clear_parked_bits()?;

        debug!(
            "attached {} pinmux: {} pins, {} groups, {} functions",
            catalog.name,
            catalog.pins.len(),
            catalog.groups.len(),
            catalog.functions.len()
        );
        Ok(pmx)
    }

    /// The catalog this controller was attached with.
    pub fn catalog(&self) -> &'static SocCatalog {
        self.catalog
    }

    /// Names of all pin groups, in catalog order.
    pub fn group_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.catalog.groups.iter().map(|g| g.name)
    }

    /// Names of all functions, in mux-encoding order.
    pub fn function_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.catalog.functions.iter().map(|f| f.name)
    }

    /// The groups `function` can be muxed onto, in catalog group order.
    pub fn function_groups(&self, function: &str) -> Result<&[&'static str]> {
        let fi = self.function_index(function)?;
        Ok(&self.func_groups[fi])
    }

    /// The pins belonging to `group`.
    pub fn group_pins(&self, group: &str) -> Result<&'static [u32]> {
        Ok(self.group(group)?.pins)
    }

    fn group(&self, name: &str) -> Result<&'static PinGroup> {
        self.catalog
            .groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| Error::GroupNotFound(name.to_owned()))
    }

    fn function_index(&self, name: &str) -> Result<usize> {
        self.catalog
            .functions
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| Error::FunctionNotFound(name.to_owned()))
    }

    fn readl(&mut self, bank: u32, offset: u32) -> Result<u32> {
        let val = self.regs.read(bank, offset)?;
        trace!("readl bank {} reg {:#x} = {:#010x}", bank, offset, val);
        Ok(val)
    }

    /// Posted write: the write is followed by a read-back of the same
    /// register so it has completed before the next operation.
    fn writel(&mut self, value: u32, bank: u32, offset: u32) -> Result<()> {
        trace!("writel bank {} reg {:#x} = {:#010x}", bank, offset, value);
        self.regs.write(bank, offset, value)?;
        self.regs.read(bank, offset)?;
        Ok(())
    }

    fn clear_parked_bits(&mut self) -> Result<()> {
        for group in self.catalog.groups {
            if group.parked_bitmask == 0 {
                continue;
            }
            // validate() guarantees a primary register here.
            let Some(reg) = group.primary_reg() else {
                continue;
            };
            let val = self.readl(reg.bank, reg.offset)?;
            self.writel(val & !group.parked_bitmask, reg.bank, reg.offset)?;
            debug!(
                "cleared parked bits {:#x} on group {}",
                group.parked_bitmask, group.name
            );
        }
        Ok(())
    }

    /// Muxes `function` onto `group`.
    ///
    /// The mux field is set to the slot (0..4) of the group's candidate list
    /// holding the function. On chips with explicit SFIO/GPIO routing the
    /// group's SFIO bit is asserted in the same write, putting the pin back
    /// under pinmux control.
    pub fn select_function(&mut self, function: &str, group: &str) -> Result<()> {
        let fi = self.function_index(function)? as u16;
        let g = self.group(group)?;

        let Some(mux) = g.mux else {
            return Err(Error::FunctionNotApplicable {
                group: g.name,
                function: self.catalog.functions[fi as usize].name,
            });
        };
        let Some(slot) = g.funcs.iter().position(|&f| f == fi) else {
            return Err(Error::FunctionNotApplicable {
                group: g.name,
                function: self.catalog.functions[fi as usize].name,
            });
        };

        let mut val = self.readl(mux.bank, mux.offset)?;
        val &= !(0x3 << g.mux_bit);
        val |= (slot as u32) << g.mux_bit;
        if self.catalog.sfsel_in_mux {
            if let Some(bit) = g.sfsel_bit {
                val |= 1 << bit;
            }
        }
        self.writel(val, mux.bank, mux.offset)?;

        debug!("muxed {} onto {} (slot {})", function, group, slot);
        Ok(())
    }

    /// Reads the current value of one configuration parameter on `group`.
    ///
    /// The pad-power bit is stored inverted in hardware; the returned value
    /// is the logical one.
    pub fn get_group_config(&mut self, group: &str, param: ConfigParam) -> Result<u16> {
        let g = self.group(group)?;
        let field = self
            .catalog
            .config_field(g, param)
            .ok_or(Error::Unsupported {
                group: g.name,
                param,
            })?;

        let val = self.readl(field.bank, field.offset)?;
        let mut arg = field.extract(val);
        if param == ConfigParam::PadPower {
            arg = (arg == 0) as u16;
        }
        Ok(arg)
    }

    /// Applies a list of configuration items to `group`, in order.
    ///
    /// Application is best-effort: a failing item is reported but does not
    /// stop the items after it. If anything failed, the collected failures
    /// come back as [`Error::ConfigBatch`].
    pub fn set_group_config(&mut self, group: &str, configs: &[PinConfig]) -> Result<()> {
        let g = self.group(group)?;

        let mut failures = Vec::new();
        for &cfg in configs {
            if let Err(e) = self.apply_one(g, cfg) {
                warn!("config {:?} failed on group {}: {}", cfg.param, group, e);
                failures.push((cfg.param, e));
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::ConfigBatch { failures })
        }
    }

    fn apply_one(&mut self, g: &'static PinGroup, cfg: PinConfig) -> Result<()> {
        let PinConfig { param, mut arg } = cfg;

        // The pad-power bit is active-low in hardware.
        if param == ConfigParam::PadPower {
            arg = (arg == 0) as u16;
        }

        let field = self
            .catalog
            .config_field(g, param)
            .ok_or(Error::Unsupported {
                group: g.name,
                param,
            })?;

        let val = self.readl(field.bank, field.offset)?;

        // LOCK is a write-once latch; refuse the write rather than let it
        // silently not take.
        if param == ConfigParam::Lock && field.extract(val) != 0 && arg == 0 {
            return Err(Error::LockCannotBeCleared { group: g.name });
        }

        // Any non-zero value counts as true for 1-bit fields.
        if field.width == 1 {
            arg = (arg != 0) as u16;
        }

        if u32::from(arg) & !field.mask() != 0 {
            return Err(Error::ValueOutOfRange {
                group: g.name,
                param,
                arg,
                width: field.width,
            });
        }

        self.writel(field.insert(val, arg), field.bank, field.offset)
    }

    /// Applies one parsed configuration node: the mux selection first (when
    /// present), then the config list.
    pub fn apply(&mut self, node: &GroupConfig<'_>) -> Result<()> {
        if let Some(function) = node.function {
            self.select_function(function, node.group)?;
        }
        self.set_group_config(node.group, node.configs)
    }

    fn owning_group(&self, pin: u32) -> Result<&'static PinGroup> {
        // Only single-pin groups can hand a pin over to GPIO.
        self.catalog
            .groups
            .iter()
            .find(|g| g.pins == [pin])
            .ok_or(Error::PinGroupNotFound { pin })
    }

    /// Hands `pin` over to GPIO use.
    ///
    /// The owning group's mux register is saved so `gpio_release` can put
    /// the pin back exactly as it was. On chips with explicit SFIO/GPIO
    /// routing the SFIO bit is cleared, routing the pad to the GPIO
    /// controller.
    pub fn gpio_request(&mut self, pin: u32) -> Result<()> {
        if pin >= self.catalog.ngpios {
            return Err(Error::PinGroupNotFound { pin });
        }
        let g = self.owning_group(pin)?;

        if let Some(mux) = g.mux {
            let val = self.readl(mux.bank, mux.offset)?;
            self.gpio_conf[pin as usize] = Some(val);
        }

        if !self.catalog.sfsel_in_mux {
            return Ok(());
        }
        let (Some(mux), Some(sfsel_bit)) = (g.mux, g.sfsel_bit) else {
            return Err(Error::SfioSelectUnavailable { group: g.name });
        };
        let val = self.readl(mux.bank, mux.offset)?;
        self.writel(val & !(1 << sfsel_bit), mux.bank, mux.offset)?;

        debug!("pin {} ({}) routed to GPIO", pin, g.name);
        Ok(())
    }

    /// Releases `pin` from GPIO use, restoring the mux register saved by
    /// `gpio_request`. A release with no prior request is a no-op beyond the
    /// group lookup.
    pub fn gpio_release(&mut self, pin: u32) -> Result<()> {
        let g = self.owning_group(pin)?;

        if let Some(mux) = g.mux {
            if let Some(saved) = self.gpio_conf[pin as usize].take() {
                self.writel(saved, mux.bank, mux.offset)?;
                debug!("pin {} ({}) returned to pinmux control", pin, g.name);
            }
        }
        Ok(())
    }

    /// Takes a flat snapshot of every register bank, for restore at resume.
    pub fn suspend(&mut self) -> Result<()> {
        let total: u32 = self.catalog.bank_sizes.iter().sum();
        let mut snapshot = Vec::with_capacity(total as usize);
        for (bank, &words) in self.catalog.bank_sizes.iter().enumerate() {
            for word in 0..words {
                snapshot.push(self.regs.read(bank as u32, word * 4)?);
            }
        }
        self.snapshot = Some(snapshot);
        debug!("suspend: saved {} registers", total);
        Ok(())
    }

    /// Writes the suspend snapshot back, bank after bank, then performs a
    /// dummy read and a read barrier so every restore write has completed.
    pub fn resume(&mut self) -> Result<()> {
        let snapshot = self.snapshot.take().ok_or(Error::ResumeWithoutSuspend)?;

        let mut saved = snapshot.iter();
        for (bank, &words) in self.catalog.bank_sizes.iter().enumerate() {
            for word in 0..words {
                // Snapshot length matches bank_sizes by construction.
                let Some(&val) = saved.next() else { break };
                self.regs.write(bank as u32, word * 4, val)?;
            }
        }
        self.regs.read(0, 0)?;
        fence(Ordering::Acquire);

        debug!("resume: restored {} registers", snapshot.len());
        Ok(())
    }

    /// Renders `group`'s live configuration as one `name=value` line per
    /// supported parameter, in property-table order. The function parameter
    /// is rendered as the resolved function name.
    pub fn dump_group_config(&mut self, group: &str) -> Result<String> {
        let g = self.group(group)?;

        let mut out = String::new();
        for &(property, param) in PROPERTIES {
            let Some(field) = self.catalog.config_field(g, param) else {
                continue;
            };
            let val = self.readl(field.bank, field.offset)?;
            let arg = field.extract(val);
            if param == ConfigParam::Function {
                let fi = g.funcs[arg as usize];
                let _ = writeln!(
                    out,
                    "\t{}={}",
                    config::strip_prefix(property),
                    self.catalog.functions[fi as usize].name
                );
            } else {
                let _ = writeln!(out, "\t{}={}", config::strip_prefix(property), arg);
            }
        }
        Ok(out)
    }
}
