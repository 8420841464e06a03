use crate::config::ConfigParam;
use thiserror::Error;

/// Errors that can occur while resolving or applying pin configuration.
///
/// `Unsupported` deserves special mention: not every configuration parameter
/// exists on every pin group, and asking for a missing one is an expected,
/// recoverable outcome — callers probing a group (e.g. the debug dump) should
/// treat it as "skip", not as a malformed request.
#[derive(Error, Debug)]
pub enum Error {
    /// The parameter has no register location on this group.
    #[error("config param {param:?} not supported on group {group}")]
    Unsupported {
        /// Name of the group that was queried.
        group: &'static str,
        /// The parameter that has no register location there.
        param: ConfigParam,
    },
    /// The requested function is not one of the group's four mux candidates,
    /// or the group has no mux register at all.
    #[error("function {function} cannot be muxed onto group {group}")]
    FunctionNotApplicable {
        group: &'static str,
        function: &'static str,
    },
    /// The argument does not fit in the parameter's bit field.
    #[error("value {arg:#x} too big for {width} bit field of {param:?} on group {group}")]
    ValueOutOfRange {
        group: &'static str,
        param: ConfigParam,
        arg: u16,
        width: u8,
    },
    /// The lock bit is a hardware write-once latch; once it reads as set it
    /// can never be written back to zero.
    #[error("LOCK bit on group {group} is set and cannot be cleared")]
    LockCannotBeCleared { group: &'static str },
    /// No single-pin group owns the requested pin. Multi-pin groups are never
    /// GPIO-eligible, so this indicates a catalog defect or a bogus pin id.
    #[error("no single-pin group owns pin {pin}")]
    PinGroupNotFound { pin: u32 },
    /// The catalog requires SFIO/GPIO routing but the owning group carries no
    /// SFIO-select bit.
    #[error("group {group} has no SFIO select bit")]
    SfioSelectUnavailable { group: &'static str },
    /// The register access port failed. Always fatal to the in-progress
    /// operation; retries, if any, are the host's business.
    #[error("register access failed (bank {bank}, offset {offset:#x})")]
    RegisterAccess { bank: u32, offset: u32 },
    /// No group with the given name exists in the catalog.
    #[error("unknown pin group '{0}'")]
    GroupNotFound(String),
    /// No function with the given name exists in the catalog.
    #[error("unknown function '{0}'")]
    FunctionNotFound(String),
    /// Static table sizes or cross-references disagree; the catalog is
    /// unusable and initialization must abort.
    #[error("catalog inconsistency: {0}")]
    CatalogMismatch(String),
    /// Resume was requested but no suspend snapshot exists to restore.
    #[error("no suspend snapshot to restore")]
    ResumeWithoutSuspend,
    /// One or more parameters of a best-effort batch apply failed. Parameters
    /// after a failed one are still applied; each failure is reported here
    /// individually.
    #[error("{} config parameter(s) failed to apply", failures.len())]
    ConfigBatch {
        failures: Vec<(ConfigParam, Error)>,
    },
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
