//! GPIO handoff: SFIO routing, mux-state save/restore and pin ownership.

mod common;

use common::{attach, FAKE, FAKE_NO_SFSEL};
use tegra234_pinmux::Error;

#[test]
fn request_clears_sfio_and_release_restores_the_mux() {
    let (mut pmx, regs) = attach(&FAKE);

    // Put the group into a recognizable state first.
    pmx.select_function("gamma", "tst0").unwrap();
    let muxed = regs.get(0, 0x00);
    assert_eq!(muxed & (1 << 10), 1 << 10);

    pmx.gpio_request(0).unwrap();
    assert_eq!(
        regs.get(0, 0x00) & (1 << 10),
        0,
        "SFIO select must be cleared for GPIO use"
    );

    // Whatever happens to the register while the pin is a GPIO, release
    // puts back the exact saved value.
    regs.set(0, 0x00, 0xDEAD_BEEF);
    pmx.gpio_release(0).unwrap();
    assert_eq!(regs.get(0, 0x00), muxed);
}

#[test]
fn request_targets_the_single_pin_group() {
    let (mut pmx, regs) = attach(&FAKE);
    regs.clear_writes();

    // Pin 0 also belongs to the two-pin group tst_pair; the handoff must
    // use tst0's register, not tst_pair's.
    pmx.gpio_request(0).unwrap();
    assert!(regs.writes().iter().all(|&(_, offset, _)| offset == 0x00));
}

#[test]
fn unowned_or_out_of_range_pins_are_rejected() {
    let (mut pmx, _regs) = attach(&FAKE);

    assert!(matches!(
        pmx.gpio_request(2),
        Err(Error::PinGroupNotFound { pin: 2 })
    ));
    // Pin 3 has a group, but sits above the GPIO-capable range.
    assert!(matches!(
        pmx.gpio_request(3),
        Err(Error::PinGroupNotFound { pin: 3 })
    ));
    assert!(matches!(
        pmx.gpio_request(99),
        Err(Error::PinGroupNotFound { pin: 99 })
    ));
}

#[test]
fn request_requires_an_sfio_bit_when_the_chip_routes_explicitly() {
    let (mut pmx, _regs) = attach(&FAKE);

    assert!(matches!(
        pmx.gpio_request(1),
        Err(Error::SfioSelectUnavailable { group: "tst1" })
    ));
}

#[test]
fn request_without_explicit_routing_only_saves_state() {
    let (mut pmx, regs) = attach(&FAKE_NO_SFSEL);
    regs.set(1, 0x10, 0x1234);
    regs.clear_writes();

    pmx.gpio_request(1).unwrap();
    assert!(regs.writes().is_empty(), "no SFIO bit to clear on this chip");

    regs.set(1, 0x10, 0);
    pmx.gpio_release(1).unwrap();
    assert_eq!(regs.get(1, 0x10), 0x1234, "saved mux state still restored");
}

#[test]
fn release_without_a_request_is_a_no_op() {
    let (mut pmx, regs) = attach(&FAKE);
    regs.set(0, 0x00, 0x55);
    regs.clear_writes();

    pmx.gpio_release(0).unwrap();
    assert!(regs.writes().is_empty());
    assert_eq!(regs.get(0, 0x00), 0x55);
}

#[test]
fn release_consumes_the_saved_state() {
    let (mut pmx, regs) = attach(&FAKE);

    pmx.gpio_request(0).unwrap();
    pmx.gpio_release(0).unwrap();

    regs.set(0, 0x00, 0x77);
    regs.clear_writes();
    pmx.gpio_release(0).unwrap();
    assert!(
        regs.writes().is_empty(),
        "a second release must not replay the old snapshot"
    );
}
