//! Suspend/resume: flat snapshot and verbatim restore of every bank.

mod common;

use common::{attach, FAKE};
use tegra234_pinmux::Error;

#[test]
fn resume_restores_every_register_verbatim() {
    let (mut pmx, regs) = attach(&FAKE);

    // Scribble a recognizable pattern across both banks.
    for word in 0..0x10u32 {
        regs.set(0, word * 4, 0xA000_0000 | word);
        regs.set(1, word * 4, 0xB000_0000 | word);
    }
    pmx.suspend().unwrap();

    for word in 0..0x10u32 {
        regs.set(0, word * 4, 0);
        regs.set(1, word * 4, 0);
    }
    pmx.resume().unwrap();

    for word in 0..0x10u32 {
        assert_eq!(
            regs.get(0, word * 4),
            0xA000_0000 | word,
            "bank 0 word {word} not restored"
        );
        assert_eq!(
            regs.get(1, word * 4),
            0xB000_0000 | word,
            "bank 1 word {word} not restored"
        );
    }
}

#[test]
fn resume_without_suspend_is_an_error() {
    let (mut pmx, _regs) = attach(&FAKE);
    assert!(matches!(pmx.resume(), Err(Error::ResumeWithoutSuspend)));
}

#[test]
fn snapshot_is_consumed_by_resume() {
    let (mut pmx, _regs) = attach(&FAKE);

    pmx.suspend().unwrap();
    pmx.resume().unwrap();
    assert!(matches!(pmx.resume(), Err(Error::ResumeWithoutSuspend)));
}

#[test]
fn suspend_can_be_retaken() {
    let (mut pmx, regs) = attach(&FAKE);

    regs.set(0, 0x00, 0x11);
    pmx.suspend().unwrap();
    regs.set(0, 0x00, 0x22);
    pmx.suspend().unwrap();

    regs.set(0, 0x00, 0);
    pmx.resume().unwrap();
    assert_eq!(regs.get(0, 0x00), 0x22, "the newer snapshot wins");
}

#[test]
fn suspend_propagates_register_failures() {
    let (mut pmx, regs) = attach(&FAKE);

    regs.fail_on(1, 0x08);
    assert!(matches!(
        pmx.suspend(),
        Err(Error::RegisterAccess { bank: 1, offset: 0x08 })
    ));
    assert!(
        matches!(pmx.resume(), Err(Error::ResumeWithoutSuspend)),
        "a failed suspend must not leave a partial snapshot behind"
    );
}
