//! Dumps the live configuration of every Tegra234 pin group.
//!
//! Backed by an in-memory register file instead of real apertures, so it can
//! run anywhere. Run with `RUST_LOG=trace` to watch the register traffic.

use tegra234_pinmux::tegra234::TEGRA234;
use tegra234_pinmux::{Error, PinController, RegisterAccess, Result};

/// A zero-initialized in-memory register file shaped like the real chip.
struct MemRegs {
    banks: Vec<Vec<u32>>,
}

impl MemRegs {
    fn new(bank_sizes: &[u32]) -> Self {
        MemRegs {
            banks: bank_sizes.iter().map(|&w| vec![0; w as usize]).collect(),
        }
    }
}

impl RegisterAccess for MemRegs {
    fn read(&mut self, bank: u32, offset: u32) -> Result<u32> {
        self.banks
            .get(bank as usize)
            .and_then(|b| b.get((offset / 4) as usize))
            .copied()
            .ok_or(Error::RegisterAccess { bank, offset })
    }

    fn write(&mut self, bank: u32, offset: u32, value: u32) -> Result<()> {
        self.banks
            .get_mut(bank as usize)
            .and_then(|b| b.get_mut((offset / 4) as usize))
            .map(|slot| *slot = value)
            .ok_or(Error::RegisterAccess { bank, offset })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut pmx = PinController::new(&TEGRA234, MemRegs::new(TEGRA234.bank_sizes))?;

    // Mux something recognizable so the dump is not all defaults.
    pmx.select_function("touch", "touch_clk_pcc4")?;

    let names: Vec<_> = pmx.group_names().collect();
    for name in names {
        println!("{}", name);
        print!("{}", pmx.dump_group_config(name)?);
    }
    Ok(())
}
