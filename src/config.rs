//! Configuration parameters and their packed wire encoding.

/// A pin configuration parameter kind.
///
/// Each parameter resolves, per group, to at most one register bit field; a
/// parameter with no field on a given group is reported as unsupported, which
/// is a normal outcome (hardware features vary per group), not an error in
/// the request itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ConfigParam {
    /// Pull-up/pull-down resistor selection (2 bits).
    Pull,
    /// Tristate (high-impedance) the group's output driver.
    Tristate,
    /// Enable the input receiver.
    EnableInput,
    /// Open-drain output mode.
    OpenDrain,
    /// Write-once configuration lock latch.
    Lock,
    /// Deep-sleep I/O reset behavior.
    IoReset,
    /// Receiver voltage select (also known as io-hv).
    RcvSel,
    /// Internal loopback.
    Loopback,
    /// High-speed receiver mode.
    HighSpeedMode,
    /// Schmitt-trigger input hysteresis.
    Schmitt,
    /// Low-power mode select (2 bits).
    LowPowerMode,
    /// Pull-down drive strength.
    DriveDownStrength,
    /// Pull-up drive strength.
    DriveUpStrength,
    /// Falling-edge slew rate.
    SlewRateFalling,
    /// Rising-edge slew rate.
    SlewRateRising,
    /// Drive type select (2 bits).
    DriveType,
    /// The 2-bit function-select (mux) field itself.
    Function,
    /// Pad power state. The stored bit is hardware-inverted; the engine
    /// presents the logical (non-inverted) value.
    PadPower,
}

/// Device-tree property name for each parameter, in the order the debug dump
/// walks them. `nvidia,rcv-sel` and `nvidia,io-hv` are aliases for the same
/// parameter, so both rows appear.
pub const PROPERTIES: &[(&str, ConfigParam)] = &[
    ("nvidia,pull", ConfigParam::Pull),
    ("nvidia,tristate", ConfigParam::Tristate),
    ("nvidia,enable-input", ConfigParam::EnableInput),
    ("nvidia,open-drain", ConfigParam::OpenDrain),
    ("nvidia,lock", ConfigParam::Lock),
    ("nvidia,io-reset", ConfigParam::IoReset),
    ("nvidia,rcv-sel", ConfigParam::RcvSel),
    ("nvidia,io-hv", ConfigParam::RcvSel),
    ("nvidia,loopback", ConfigParam::Loopback),
    ("nvidia,high-speed-mode", ConfigParam::HighSpeedMode),
    ("nvidia,schmitt", ConfigParam::Schmitt),
    ("nvidia,low-power-mode", ConfigParam::LowPowerMode),
    ("nvidia,pull-down-strength", ConfigParam::DriveDownStrength),
    ("nvidia,pull-up-strength", ConfigParam::DriveUpStrength),
    ("nvidia,slew-rate-falling", ConfigParam::SlewRateFalling),
    ("nvidia,slew-rate-rising", ConfigParam::SlewRateRising),
    ("nvidia,drive-type", ConfigParam::DriveType),
    ("nvidia,func", ConfigParam::Function),
    ("nvidia,pad-power", ConfigParam::PadPower),
];

impl ConfigParam {
    /// Looks up the parameter named by a device-tree property, accepting
    /// either the full `nvidia,`-prefixed form or the bare suffix.
    pub fn from_property(property: &str) -> Option<ConfigParam> {
        PROPERTIES
            .iter()
            .find(|(name, _)| *name == property || strip_prefix(name) == property)
            .map(|&(_, param)| param)
    }

    /// The canonical device-tree property naming this parameter.
    pub fn property(self) -> &'static str {
        // PROPERTIES lists the canonical name before any alias.
        PROPERTIES
            .iter()
            .find(|&&(_, param)| param == self)
            .map(|&(name, _)| name)
            .unwrap_or("unknown")
    }

    fn from_raw(raw: u16) -> Option<ConfigParam> {
        PROPERTIES
            .iter()
            .map(|&(_, param)| param)
            .find(|&param| param as u16 == raw)
    }
}

/// Strips the vendor prefix (everything up to and including the first comma)
/// from a property name.
pub(crate) fn strip_prefix(property: &str) -> &str {
    match property.split_once(',') {
        Some((_, suffix)) => suffix,
        None => property,
    }
}

/// A packed `(parameter, argument)` configuration item.
///
/// The wire form is a single `u32` with the parameter in the upper half and
/// the argument in the lower half, so a config list can travel as a flat
/// array of words. Packing and unpacking are exact inverses for any argument
/// that fits the parameter's field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    pub param: ConfigParam,
    pub arg: u16,
}

impl PinConfig {
    pub fn new(param: ConfigParam, arg: u16) -> Self {
        PinConfig { param, arg }
    }

    /// Packs into the flat `u32` wire form.
    pub fn to_raw(self) -> u32 {
        ((self.param as u32) << 16) | self.arg as u32
    }

    /// Unpacks from the flat `u32` wire form. Returns `None` if the upper
    /// half does not name a known parameter.
    pub fn from_raw(raw: u32) -> Option<Self> {
        let param = ConfigParam::from_raw((raw >> 16) as u16)?;
        Some(PinConfig {
            param,
            arg: (raw & 0xFFFF) as u16,
        })
    }
}

/// One resolved pin-group configuration node: the output of device-tree (or
/// equivalent) parsing, ready to be applied. The mux selection, when present,
/// is applied before the config list.
#[derive(Debug, Clone)]
pub struct GroupConfig<'a> {
    /// Name of the target pin group.
    pub group: &'a str,
    /// Function to mux onto the group, if the node requested one.
    pub function: Option<&'a str>,
    /// Configuration items, applied in order (best-effort).
    pub configs: &'a [PinConfig],
}
