//! Static catalog for the NVIDIA Tegra234 pinmux controller.
//!
//! Pin, group and function tables transcribed from the Tegra234 TRM register
//! layout. Group order follows the register documentation; pin ids match the
//! GPIO controller's numbering, with the three COMP pads placed after the
//! last GPIO-capable pin.

use crate::catalog::{FunctionDesc, PinDesc, PinGroup, SocCatalog};
use crate::regs::{BitSpan, Register};

/// Pins `0..NUM_GPIOS` are GPIO-capable; the COMP pads above are config-only.
pub const NUM_GPIOS: u32 = 217;

/// Mux-field encodings, one per selectable function. A group's `funcs`
/// array holds four of these, indexed by the 2-bit mux field value.
pub mod mux {
    pub const GP: u16 = 0;
    pub const UARTC: u16 = 1;
    pub const I2C8: u16 = 2;
    pub const SPI2: u16 = 3;
    pub const I2C2: u16 = 4;
    pub const CAN1: u16 = 5;
    pub const CAN0: u16 = 6;
    pub const RSVD0: u16 = 7;
    pub const ETH0: u16 = 8;
    pub const ETH2: u16 = 9;
    pub const ETH1: u16 = 10;
    pub const DP: u16 = 11;
    pub const ETH3: u16 = 12;
    pub const I2C4: u16 = 13;
    pub const I2C7: u16 = 14;
    pub const I2C9: u16 = 15;
    pub const EQOS: u16 = 16;
    pub const PE2: u16 = 17;
    pub const PE1: u16 = 18;
    pub const PE0: u16 = 19;
    pub const PE3: u16 = 20;
    pub const PE4: u16 = 21;
    pub const PE5: u16 = 22;
    pub const PE6: u16 = 23;
    pub const PE10: u16 = 24;
    pub const PE7: u16 = 25;
    pub const PE8: u16 = 26;
    pub const PE9: u16 = 27;
    pub const QSPI0: u16 = 28;
    pub const QSPI1: u16 = 29;
    pub const QSPI: u16 = 30;
    pub const SDMMC1: u16 = 31;
    pub const SCE: u16 = 32;
    pub const SOC: u16 = 33;
    pub const GPIO: u16 = 34;
    pub const HDMI: u16 = 35;
    pub const UFS0: u16 = 36;
    pub const SPI3: u16 = 37;
    pub const SPI1: u16 = 38;
    pub const UARTB: u16 = 39;
    pub const UARTE: u16 = 40;
    pub const USB: u16 = 41;
    pub const EXTPERIPH2: u16 = 42;
    pub const EXTPERIPH1: u16 = 43;
    pub const I2C3: u16 = 44;
    pub const VI0: u16 = 45;
    pub const I2C5: u16 = 46;
    pub const UARTA: u16 = 47;
    pub const UARTD: u16 = 48;
    pub const I2C1: u16 = 49;
    pub const I2S4: u16 = 50;
    pub const I2S6: u16 = 51;
    pub const AUD: u16 = 52;
    pub const SPI5: u16 = 53;
    pub const TOUCH: u16 = 54;
    pub const UARTJ: u16 = 55;
    pub const RSVD1: u16 = 56;
    pub const WDT: u16 = 57;
    pub const TSC: u16 = 58;
    pub const DMIC3: u16 = 59;
    pub const LED: u16 = 60;
    pub const VI0_ALT: u16 = 61;
    pub const I2S5: u16 = 62;
    pub const NV: u16 = 63;
    pub const EXTPERIPH3: u16 = 64;
    pub const EXTPERIPH4: u16 = 65;
    pub const SPI4: u16 = 66;
    pub const CCLA: u16 = 67;
    pub const I2S2: u16 = 68;
    pub const I2S1: u16 = 69;
    pub const I2S8: u16 = 70;
    pub const I2S3: u16 = 71;
    pub const RSVD2: u16 = 72;
    pub const DMIC5: u16 = 73;
    pub const DCA: u16 = 74;
    pub const DISPLAYB: u16 = 75;
    pub const DISPLAYA: u16 = 76;
    pub const VI1: u16 = 77;
    pub const DCB: u16 = 78;
    pub const DMIC1: u16 = 79;
    pub const DMIC4: u16 = 80;
    pub const I2S7: u16 = 81;
    pub const DMIC2: u16 = 82;
    pub const DSPK0: u16 = 83;
    pub const RSVD3: u16 = 84;
    pub const TSC_ALT: u16 = 85;
    pub const ISTCTRL: u16 = 86;
    pub const VI1_ALT: u16 = 87;
    pub const DSPK1: u16 = 88;
    pub const IGPU: u16 = 89;
}

pub const FUNCTIONS: &[FunctionDesc] = &[
    FunctionDesc { name: "gp" },
    FunctionDesc { name: "uartc" },
    FunctionDesc { name: "i2c8" },
    FunctionDesc { name: "spi2" },
    FunctionDesc { name: "i2c2" },
    FunctionDesc { name: "can1" },
    FunctionDesc { name: "can0" },
    FunctionDesc { name: "rsvd0" },
    FunctionDesc { name: "eth0" },
    FunctionDesc { name: "eth2" },
    FunctionDesc { name: "eth1" },
    FunctionDesc { name: "dp" },
    FunctionDesc { name: "eth3" },
    FunctionDesc { name: "i2c4" },
    FunctionDesc { name: "i2c7" },
    FunctionDesc { name: "i2c9" },
    FunctionDesc { name: "eqos" },
    FunctionDesc { name: "pe2" },
    FunctionDesc { name: "pe1" },
    FunctionDesc { name: "pe0" },
    FunctionDesc { name: "pe3" },
    FunctionDesc { name: "pe4" },
    FunctionDesc { name: "pe5" },
    FunctionDesc { name: "pe6" },
    FunctionDesc { name: "pe10" },
    FunctionDesc { name: "pe7" },
    FunctionDesc { name: "pe8" },
    FunctionDesc { name: "pe9" },
    FunctionDesc { name: "qspi0" },
    FunctionDesc { name: "qspi1" },
    FunctionDesc { name: "qspi" },
    FunctionDesc { name: "sdmmc1" },
    FunctionDesc { name: "sce" },
    FunctionDesc { name: "soc" },
    FunctionDesc { name: "gpio" },
    FunctionDesc { name: "hdmi" },
    FunctionDesc { name: "ufs0" },
    FunctionDesc { name: "spi3" },
    FunctionDesc { name: "spi1" },
    FunctionDesc { name: "uartb" },
    FunctionDesc { name: "uarte" },
    FunctionDesc { name: "usb" },
    FunctionDesc { name: "extperiph2" },
    FunctionDesc { name: "extperiph1" },
    FunctionDesc { name: "i2c3" },
    FunctionDesc { name: "vi0" },
    FunctionDesc { name: "i2c5" },
    FunctionDesc { name: "uarta" },
    FunctionDesc { name: "uartd" },
    FunctionDesc { name: "i2c1" },
    FunctionDesc { name: "i2s4" },
    FunctionDesc { name: "i2s6" },
    FunctionDesc { name: "aud" },
    FunctionDesc { name: "spi5" },
    FunctionDesc { name: "touch" },
    FunctionDesc { name: "uartj" },
    FunctionDesc { name: "rsvd1" },
    FunctionDesc { name: "wdt" },
    FunctionDesc { name: "tsc" },
    FunctionDesc { name: "dmic3" },
    FunctionDesc { name: "led" },
    FunctionDesc { name: "vi0_alt" },
    FunctionDesc { name: "i2s5" },
    FunctionDesc { name: "nv" },
    FunctionDesc { name: "extperiph3" },
    FunctionDesc { name: "extperiph4" },
    FunctionDesc { name: "spi4" },
    FunctionDesc { name: "ccla" },
    FunctionDesc { name: "i2s2" },
    FunctionDesc { name: "i2s1" },
    FunctionDesc { name: "i2s8" },
    FunctionDesc { name: "i2s3" },
    FunctionDesc { name: "rsvd2" },
    FunctionDesc { name: "dmic5" },
    FunctionDesc { name: "dca" },
    FunctionDesc { name: "displayb" },
    FunctionDesc { name: "displaya" },
    FunctionDesc { name: "vi1" },
    FunctionDesc { name: "dcb" },
    FunctionDesc { name: "dmic1" },
    FunctionDesc { name: "dmic4" },
    FunctionDesc { name: "i2s7" },
    FunctionDesc { name: "dmic2" },
    FunctionDesc { name: "dspk0" },
    FunctionDesc { name: "rsvd3" },
    FunctionDesc { name: "tsc_alt" },
    FunctionDesc { name: "istctrl" },
    FunctionDesc { name: "vi1_alt" },
    FunctionDesc { name: "dspk1" },
    FunctionDesc { name: "igpu" },
];

pub const PINS: &[PinDesc] = &[
    PinDesc { id: 0, name: "DAP6_SCLK_PA0" },
    PinDesc { id: 1, name: "DAP6_DOUT_PA1" },
    PinDesc { id: 2, name: "DAP6_DIN_PA2" },
    PinDesc { id: 3, name: "DAP6_FS_PA3" },
    PinDesc { id: 4, name: "DAP4_SCLK_PA4" },
    PinDesc { id: 5, name: "DAP4_DOUT_PA5" },
    PinDesc { id: 6, name: "DAP4_DIN_PA6" },
    PinDesc { id: 7, name: "DAP4_FS_PA7" },
    PinDesc { id: 8, name: "SOC_GPIO08_PB0" },
    PinDesc { id: 9, name: "QSPI0_SCK_PC0" },
    PinDesc { id: 10, name: "QSPI0_CS_N_PC1" },
    PinDesc { id: 11, name: "QSPI0_IO0_PC2" },
    PinDesc { id: 12, name: "QSPI0_IO1_PC3" },
    PinDesc { id: 13, name: "QSPI0_IO2_PC4" },
    PinDesc { id: 14, name: "QSPI0_IO3_PC5" },
    PinDesc { id: 15, name: "QSPI1_SCK_PC6" },
    PinDesc { id: 16, name: "QSPI1_CS_N_PC7" },
    PinDesc { id: 17, name: "QSPI1_IO0_PD0" },
    PinDesc { id: 18, name: "QSPI1_IO1_PD1" },
    PinDesc { id: 19, name: "QSPI1_IO2_PD2" },
    PinDesc { id: 20, name: "QSPI1_IO3_PD3" },
    PinDesc { id: 21, name: "EQOS_TXC_PE0" },
    PinDesc { id: 22, name: "EQOS_TD0_PE1" },
    PinDesc { id: 23, name: "EQOS_TD1_PE2" },
    PinDesc { id: 24, name: "EQOS_TD2_PE3" },
    PinDesc { id: 25, name: "EQOS_TD3_PE4" },
    PinDesc { id: 26, name: "EQOS_TX_CTL_PE5" },
    PinDesc { id: 27, name: "EQOS_RD0_PE6" },
    PinDesc { id: 28, name: "EQOS_RD1_PE7" },
    PinDesc { id: 29, name: "EQOS_RD2_PF0" },
    PinDesc { id: 30, name: "EQOS_RD3_PF1" },
    PinDesc { id: 31, name: "EQOS_RX_CTL_PF2" },
    PinDesc { id: 32, name: "EQOS_RXC_PF3" },
    PinDesc { id: 33, name: "EQOS_SMA_MDIO_PF4" },
    PinDesc { id: 34, name: "EQOS_SMA_MDC_PF5" },
    PinDesc { id: 35, name: "SOC_GPIO13_PG0" },
    PinDesc { id: 36, name: "SOC_GPIO14_PG1" },
    PinDesc { id: 37, name: "SOC_GPIO15_PG2" },
    PinDesc { id: 38, name: "SOC_GPIO16_PG3" },
    PinDesc { id: 39, name: "SOC_GPIO17_PG4" },
    PinDesc { id: 40, name: "SOC_GPIO18_PG5" },
    PinDesc { id: 41, name: "SOC_GPIO19_PG6" },
    PinDesc { id: 42, name: "SOC_GPIO20_PG7" },
    PinDesc { id: 43, name: "SOC_GPIO21_PH0" },
    PinDesc { id: 44, name: "SOC_GPIO22_PH1" },
    PinDesc { id: 45, name: "SOC_GPIO06_PH2" },
    PinDesc { id: 46, name: "UART4_TX_PH3" },
    PinDesc { id: 47, name: "UART4_RX_PH4" },
    PinDesc { id: 48, name: "UART4_RTS_PH5" },
    PinDesc { id: 49, name: "UART4_CTS_PH6" },
    PinDesc { id: 50, name: "SOC_GPIO41_PH7" },
    PinDesc { id: 51, name: "SOC_GPIO42_PI0" },
    PinDesc { id: 52, name: "SOC_GPIO43_PI1" },
    PinDesc { id: 53, name: "SOC_GPIO44_PI2" },
    PinDesc { id: 54, name: "GEN1_I2C_SCL_PI3" },
    PinDesc { id: 55, name: "GEN1_I2C_SDA_PI4" },
    PinDesc { id: 56, name: "CPU_PWR_REQ_PI5" },
    PinDesc { id: 57, name: "SOC_GPIO07_PI6" },
    PinDesc { id: 58, name: "SDMMC1_CLK_PJ0" },
    PinDesc { id: 59, name: "SDMMC1_CMD_PJ1" },
    PinDesc { id: 60, name: "SDMMC1_DAT0_PJ2" },
    PinDesc { id: 61, name: "SDMMC1_DAT1_PJ3" },
    PinDesc { id: 62, name: "SDMMC1_DAT2_PJ4" },
    PinDesc { id: 63, name: "SDMMC1_DAT3_PJ5" },
    PinDesc { id: 64, name: "PEX_L0_CLKREQ_N_PK0" },
    PinDesc { id: 65, name: "PEX_L0_RST_N_PK1" },
    PinDesc { id: 66, name: "PEX_L1_CLKREQ_N_PK2" },
    PinDesc { id: 67, name: "PEX_L1_RST_N_PK3" },
    PinDesc { id: 68, name: "PEX_L2_CLKREQ_N_PK4" },
    PinDesc { id: 69, name: "PEX_L2_RST_N_PK5" },
    PinDesc { id: 70, name: "PEX_L3_CLKREQ_N_PK6" },
    PinDesc { id: 71, name: "PEX_L3_RST_N_PK7" },
    PinDesc { id: 72, name: "PEX_L4_CLKREQ_N_PL0" },
    PinDesc { id: 73, name: "PEX_L4_RST_N_PL1" },
    PinDesc { id: 74, name: "PEX_WAKE_N_PL2" },
    PinDesc { id: 75, name: "SOC_GPIO34_PL3" },
    PinDesc { id: 76, name: "DP_AUX_CH0_HPD_PM0" },
    PinDesc { id: 77, name: "DP_AUX_CH1_HPD_PM1" },
    PinDesc { id: 78, name: "DP_AUX_CH2_HPD_PM2" },
    PinDesc { id: 79, name: "DP_AUX_CH3_HPD_PM3" },
    PinDesc { id: 80, name: "SOC_GPIO55_PM4" },
    PinDesc { id: 81, name: "SOC_GPIO36_PM5" },
    PinDesc { id: 82, name: "SOC_GPIO53_PM6" },
    PinDesc { id: 83, name: "SOC_GPIO38_PM7" },
    PinDesc { id: 84, name: "DP_AUX_CH3_N_PN0" },
    PinDesc { id: 85, name: "SOC_GPIO39_PN1" },
    PinDesc { id: 86, name: "SOC_GPIO40_PN2" },
    PinDesc { id: 87, name: "DP_AUX_CH1_P_PN3" },
    PinDesc { id: 88, name: "DP_AUX_CH1_N_PN4" },
    PinDesc { id: 89, name: "DP_AUX_CH2_P_PN5" },
    PinDesc { id: 90, name: "DP_AUX_CH2_N_PN6" },
    PinDesc { id: 91, name: "DP_AUX_CH3_P_PN7" },
    PinDesc { id: 92, name: "EXTPERIPH1_CLK_PP0" },
    PinDesc { id: 93, name: "EXTPERIPH2_CLK_PP1" },
    PinDesc { id: 94, name: "CAM_I2C_SCL_PP2" },
    PinDesc { id: 95, name: "CAM_I2C_SDA_PP3" },
    PinDesc { id: 96, name: "SOC_GPIO23_PP4" },
    PinDesc { id: 97, name: "SOC_GPIO24_PP5" },
    PinDesc { id: 98, name: "SOC_GPIO25_PP6" },
    PinDesc { id: 99, name: "PWR_I2C_SCL_PP7" },
    PinDesc { id: 100, name: "PWR_I2C_SDA_PQ0" },
    PinDesc { id: 101, name: "SOC_GPIO28_PQ1" },
    PinDesc { id: 102, name: "SOC_GPIO29_PQ2" },
    PinDesc { id: 103, name: "SOC_GPIO30_PQ3" },
    PinDesc { id: 104, name: "SOC_GPIO31_PQ4" },
    PinDesc { id: 105, name: "SOC_GPIO32_PQ5" },
    PinDesc { id: 106, name: "SOC_GPIO33_PQ6" },
    PinDesc { id: 107, name: "SOC_GPIO35_PQ7" },
    PinDesc { id: 108, name: "SOC_GPIO37_PR0" },
    PinDesc { id: 109, name: "SOC_GPIO56_PR1" },
    PinDesc { id: 110, name: "UART1_TX_PR2" },
    PinDesc { id: 111, name: "UART1_RX_PR3" },
    PinDesc { id: 112, name: "UART1_RTS_PR4" },
    PinDesc { id: 113, name: "UART1_CTS_PR5" },
    PinDesc { id: 114, name: "CAN2_DOUT_PS0" },
    PinDesc { id: 115, name: "CAN2_DIN_PS1" },
    PinDesc { id: 116, name: "CAN2_STB_PS2" },
    PinDesc { id: 117, name: "CAN2_EN_PS3" },
    PinDesc { id: 118, name: "CAN2_ERR_PS4" },
    PinDesc { id: 119, name: "CAN3_DOUT_PS5" },
    PinDesc { id: 120, name: "CAN3_DIN_PS6" },
    PinDesc { id: 121, name: "CAN3_STB_PS7" },
    PinDesc { id: 122, name: "CAN3_EN_PT0" },
    PinDesc { id: 123, name: "CAN3_ERR_PT1" },
    PinDesc { id: 124, name: "SOC_ERROR_PU0" },
    PinDesc { id: 125, name: "UART7_TX_PU1" },
    PinDesc { id: 126, name: "UART7_RX_PU2" },
    PinDesc { id: 127, name: "SPI7_SCK_PU3" },
    PinDesc { id: 128, name: "SPI7_MISO_PU4" },
    PinDesc { id: 129, name: "SPI7_MOSI_PU5" },
    PinDesc { id: 130, name: "SPI7_CS0_PU6" },
    PinDesc { id: 131, name: "SOC_GPIO51_PU7" },
    PinDesc { id: 132, name: "SOC_GPIO52_PV0" },
    PinDesc { id: 133, name: "SOC_GPIO61_PW0" },
    PinDesc { id: 134, name: "SOC_GPIO62_PW1" },
    PinDesc { id: 135, name: "GPU_PWR_REQ_PX0" },
    PinDesc { id: 136, name: "CV_PWR_REQ_PX1" },
    PinDesc { id: 137, name: "GP_PWM2_PX2" },
    PinDesc { id: 138, name: "GP_PWM3_PX3" },
    PinDesc { id: 139, name: "UART2_TX_PX4" },
    PinDesc { id: 140, name: "UART2_RX_PX5" },
    PinDesc { id: 141, name: "UART2_RTS_PX6" },
    PinDesc { id: 142, name: "UART2_CTS_PX7" },
    PinDesc { id: 143, name: "SPI3_SCK_PY0" },
    PinDesc { id: 144, name: "SPI3_MISO_PY1" },
    PinDesc { id: 145, name: "SPI3_MOSI_PY2" },
    PinDesc { id: 146, name: "SPI3_CS0_PY3" },
    PinDesc { id: 147, name: "SPI3_CS1_PY4" },
    PinDesc { id: 148, name: "UART5_TX_PY5" },
    PinDesc { id: 149, name: "UART5_RX_PY6" },
    PinDesc { id: 150, name: "UART5_RTS_PY7" },
    PinDesc { id: 151, name: "UART5_CTS_PZ0" },
    PinDesc { id: 152, name: "USB_VBUS_EN0_PZ1" },
    PinDesc { id: 153, name: "USB_VBUS_EN1_PZ2" },
    PinDesc { id: 154, name: "SPI1_SCK_PZ3" },
    PinDesc { id: 155, name: "SPI1_MISO_PZ4" },
    PinDesc { id: 156, name: "SPI1_MOSI_PZ5" },
    PinDesc { id: 157, name: "SPI1_CS0_PZ6" },
    PinDesc { id: 158, name: "SPI1_CS1_PZ7" },
    PinDesc { id: 159, name: "CAN0_DOUT_PAA0" },
    PinDesc { id: 160, name: "CAN0_DIN_PAA1" },
    PinDesc { id: 161, name: "CAN1_DOUT_PAA2" },
    PinDesc { id: 162, name: "CAN1_DIN_PAA3" },
    PinDesc { id: 163, name: "CAN0_STB_PAA4" },
    PinDesc { id: 164, name: "CAN0_EN_PAA5" },
    PinDesc { id: 165, name: "SOC_GPIO49_PAA6" },
    PinDesc { id: 166, name: "CAN0_ERR_PAA7" },
    PinDesc { id: 167, name: "SPI5_SCK_PAC0" },
    PinDesc { id: 168, name: "SPI5_MISO_PAC1" },
    PinDesc { id: 169, name: "SPI5_MOSI_PAC2" },
    PinDesc { id: 170, name: "SPI5_CS0_PAC3" },
    PinDesc { id: 171, name: "SOC_GPIO57_PAC4" },
    PinDesc { id: 172, name: "SOC_GPIO58_PAC5" },
    PinDesc { id: 173, name: "SOC_GPIO59_PAC6" },
    PinDesc { id: 174, name: "SOC_GPIO60_PAC7" },
    PinDesc { id: 175, name: "SOC_GPIO45_PAD0" },
    PinDesc { id: 176, name: "SOC_GPIO46_PAD1" },
    PinDesc { id: 177, name: "SOC_GPIO47_PAD2" },
    PinDesc { id: 178, name: "SOC_GPIO48_PAD3" },
    PinDesc { id: 179, name: "UFS0_REF_CLK_PAE0" },
    PinDesc { id: 180, name: "UFS0_RST_N_PAE1" },
    PinDesc { id: 181, name: "PEX_L5_CLKREQ_N_PAF0" },
    PinDesc { id: 182, name: "PEX_L5_RST_N_PAF1" },
    PinDesc { id: 183, name: "PEX_L6_CLKREQ_N_PAF2" },
    PinDesc { id: 184, name: "PEX_L6_RST_N_PAF3" },
    PinDesc { id: 185, name: "PEX_L7_CLKREQ_N_PAG0" },
    PinDesc { id: 186, name: "PEX_L7_RST_N_PAG1" },
    PinDesc { id: 187, name: "PEX_L8_CLKREQ_N_PAG2" },
    PinDesc { id: 188, name: "PEX_L8_RST_N_PAG3" },
    PinDesc { id: 189, name: "PEX_L9_CLKREQ_N_PAG4" },
    PinDesc { id: 190, name: "PEX_L9_RST_N_PAG5" },
    PinDesc { id: 191, name: "PEX_L10_CLKREQ_N_PAG6" },
    PinDesc { id: 192, name: "PEX_L10_RST_N_PAG7" },
    PinDesc { id: 193, name: "CAN1_STB_PBB0" },
    PinDesc { id: 194, name: "CAN1_EN_PBB1" },
    PinDesc { id: 195, name: "SOC_GPIO50_PBB2" },
    PinDesc { id: 196, name: "CAN1_ERR_PBB3" },
    PinDesc { id: 197, name: "SPI2_SCK_PCC0" },
    PinDesc { id: 198, name: "SPI2_MISO_PCC1" },
    PinDesc { id: 199, name: "SPI2_MOSI_PCC2" },
    PinDesc { id: 200, name: "SPI2_CS0_PCC3" },
    PinDesc { id: 201, name: "TOUCH_CLK_PCC4" },
    PinDesc { id: 202, name: "UART3_TX_PCC5" },
    PinDesc { id: 203, name: "UART3_RX_PCC6" },
    PinDesc { id: 204, name: "GEN2_I2C_SCL_PCC7" },
    PinDesc { id: 205, name: "GEN2_I2C_SDA_PDD0" },
    PinDesc { id: 206, name: "GEN8_I2C_SCL_PDD1" },
    PinDesc { id: 207, name: "GEN8_I2C_SDA_PDD2" },
    PinDesc { id: 208, name: "SCE_ERROR_PEE0" },
    PinDesc { id: 209, name: "VCOMP_ALERT_PEE1" },
    PinDesc { id: 210, name: "AO_RETENTION_N_PEE2" },
    PinDesc { id: 211, name: "BATT_OC_PEE3" },
    PinDesc { id: 212, name: "POWER_ON_PEE4" },
    PinDesc { id: 213, name: "SOC_GPIO26_PEE5" },
    PinDesc { id: 214, name: "SOC_GPIO27_PEE6" },
    PinDesc { id: 215, name: "BOOTV_CTL_N_PEE7" },
    PinDesc { id: 216, name: "HDMI_CEC_PGG0" },
    PinDesc { id: 217, name: "EQOS_COMP" },
    PinDesc { id: 218, name: "QSPI_COMP" },
    PinDesc { id: 219, name: "SDMMC1_COMP" },
];

/// A regular Tegra234 group: mux at bit 0, pull at bit 2, tristate at bit 4
/// and drive-type at bit 13 of the mux register, with the per-group loopback,
/// input, SFIO-select and schmitt bit positions passed in.
const fn pingroup(
    name: &'static str,
    pins: &'static [u32],
    funcs: [u16; 4],
    reg: u32,
    bank: u32,
    lpbk_bit: u8,
    einput_bit: u8,
    sfsel_bit: u8,
    schmitt_bit: u8,
) -> PinGroup {
    let r = Register { bank, offset: reg };
    PinGroup {
        name,
        pins,
        funcs,
        mux: Some(r),
        mux_bit: 0,
        pupd: Some(r),
        pupd_bit: 2,
        tri: Some(r),
        tri_bit: 4,
        einput_bit: Some(einput_bit),
        lpbk: Some(r),
        lpbk_bit: Some(lpbk_bit),
        schmitt_bit: Some(schmitt_bit),
        drvtype_bit: Some(13),
        sfsel_bit: Some(sfsel_bit),
        ..PinGroup::EMPTY
    }
}

/// A COMP calibration pad: mux, tristate and drive-type only, no pull and no
/// GPIO routing.
const fn comp_group(
    name: &'static str,
    pins: &'static [u32],
    funcs: [u16; 4],
    reg: u32,
) -> PinGroup {
    let r = Register { bank: 0, offset: reg };
    PinGroup {
        name,
        pins,
        funcs,
        mux: Some(r),
        mux_bit: 0,
        tri: Some(r),
        tri_bit: 4,
        drvtype_bit: Some(13),
        ..PinGroup::EMPTY
    }
}

/// Attaches a group's drive-strength register. Tegra234 has no slew fields;
/// those stay `None`.
const fn drive(
    mut g: PinGroup,
    reg: u32,
    bank: u32,
    drvdn_bit: u8,
    drvdn_width: u8,
    drvup_bit: u8,
    drvup_width: u8,
) -> PinGroup {
    g.drv = Some(Register { bank, offset: reg });
    g.drvdn = Some(BitSpan { bit: drvdn_bit, width: drvdn_width });
    g.drvup = Some(BitSpan { bit: drvup_bit, width: drvup_width });
    g
}

#[rustfmt::skip]
pub const GROUPS: &[PinGroup] = &[
    drive(pingroup("touch_clk_pcc4", &[201], [mux::GP, mux::TOUCH, mux::RSVD2, mux::RSVD3], 0x2000, 1, 7, 6, 10, 12), 0x2004, 1, 12, 5, 20, 5),
    drive(pingroup("uart3_rx_pcc6", &[203], [mux::UARTC, mux::UARTJ, mux::RSVD2, mux::RSVD3], 0x2008, 1, 7, 6, 10, 12), 0x200c, 1, 12, 5, 20, 5),
    drive(pingroup("uart3_tx_pcc5", &[202], [mux::UARTC, mux::UARTJ, mux::RSVD2, mux::RSVD3], 0x2010, 1, 7, 6, 10, 12), 0x2014, 1, 12, 5, 20, 5),
    drive(pingroup("gen8_i2c_sda_pdd2", &[207], [mux::I2C8, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2018, 1, 7, 6, 10, 12), 0x201c, 1, 12, 5, 20, 5),
    drive(pingroup("gen8_i2c_scl_pdd1", &[206], [mux::I2C8, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2020, 1, 7, 6, 10, 12), 0x2024, 1, 12, 5, 20, 5),
    drive(pingroup("spi2_mosi_pcc2", &[199], [mux::SPI2, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2028, 1, 7, 6, 10, 12), 0x202c, 1, 12, 5, 20, 5),
    drive(pingroup("gen2_i2c_scl_pcc7", &[204], [mux::I2C2, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2030, 1, 7, 6, 10, 12), 0x2034, 1, 12, 5, 20, 5),
    drive(pingroup("spi2_cs0_pcc3", &[200], [mux::SPI2, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2038, 1, 7, 6, 10, 12), 0x203c, 1, 12, 5, 20, 5),
    drive(pingroup("gen2_i2c_sda_pdd0", &[205], [mux::I2C2, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2040, 1, 7, 6, 10, 12), 0x2044, 1, 12, 5, 20, 5),
    drive(pingroup("spi2_sck_pcc0", &[197], [mux::SPI2, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2048, 1, 7, 6, 10, 12), 0x204c, 1, 12, 5, 20, 5),
    drive(pingroup("spi2_miso_pcc1", &[198], [mux::SPI2, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2050, 1, 7, 6, 10, 12), 0x2054, 1, 12, 5, 20, 5),
    drive(pingroup("can1_dout_paa2", &[161], [mux::CAN1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x3000, 1, 5, 6, 10, 12), 0x3004, 1, 28, 2, 30, 2),
    drive(pingroup("can1_din_paa3", &[162], [mux::CAN1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x3008, 1, 5, 6, 10, 12), 0x300c, 1, 28, 2, 30, 2),
    drive(pingroup("can0_dout_paa0", &[159], [mux::CAN0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x3010, 1, 5, 6, 10, 12), 0x3014, 1, 28, 2, 30, 2),
    drive(pingroup("can0_din_paa1", &[160], [mux::CAN0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x3018, 1, 5, 6, 10, 12), 0x301c, 1, 28, 2, 30, 2),
    drive(pingroup("can0_stb_paa4", &[163], [mux::RSVD0, mux::WDT, mux::TSC, mux::TSC_ALT], 0x3020, 1, 5, 6, 10, 12), 0x3024, 1, 28, 2, 30, 2),
    drive(pingroup("can0_en_paa5", &[164], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x3028, 1, 5, 6, 10, 12), 0x302c, 1, 28, 2, 30, 2),
    drive(pingroup("soc_gpio49_paa6", &[165], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x3030, 1, 5, 6, 10, 12), 0x3034, 1, 28, 2, 30, 2),
    drive(pingroup("can0_err_paa7", &[166], [mux::RSVD0, mux::TSC, mux::RSVD2, mux::TSC_ALT], 0x3038, 1, 5, 6, 10, 12), 0x303c, 1, 28, 2, 30, 2),
    drive(pingroup("can1_stb_pbb0", &[193], [mux::RSVD0, mux::DMIC3, mux::DMIC5, mux::RSVD3], 0x3040, 1, 5, 6, 10, 12), 0x3044, 1, 28, 2, 30, 2),
    drive(pingroup("can1_en_pbb1", &[194], [mux::RSVD0, mux::DMIC3, mux::DMIC5, mux::RSVD3], 0x3048, 1, 5, 6, 10, 12), 0x304c, 1, 28, 2, 30, 2),
    drive(pingroup("soc_gpio50_pbb2", &[195], [mux::RSVD0, mux::TSC, mux::RSVD2, mux::TSC_ALT], 0x3050, 1, 5, 6, 10, 12), 0x3054, 1, 28, 2, 30, 2),
    drive(pingroup("can1_err_pbb3", &[196], [mux::RSVD0, mux::TSC, mux::RSVD2, mux::TSC_ALT], 0x3058, 1, 5, 6, 10, 12), 0x305c, 1, 28, 2, 30, 2),
    drive(pingroup("soc_gpio08_pb0", &[8], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x5008, 0, 7, 6, 10, 12), 0x500c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio36_pm5", &[81], [mux::ETH0, mux::RSVD1, mux::DCA, mux::RSVD3], 0x10000, 0, 7, 6, 10, 12), 0x10004, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio53_pm6", &[82], [mux::ETH0, mux::RSVD1, mux::DCA, mux::RSVD3], 0x10008, 0, 7, 6, 10, 12), 0x1000c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio55_pm4", &[80], [mux::ETH2, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x10010, 0, 7, 6, 10, 12), 0x10014, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio38_pm7", &[83], [mux::ETH1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x10018, 0, 7, 6, 10, 12), 0x1001c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio39_pn1", &[85], [mux::GP, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x10020, 0, 7, 6, 10, 12), 0x10024, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio40_pn2", &[86], [mux::ETH1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x10028, 0, 7, 6, 10, 12), 0x1002c, 0, 12, 5, 20, 5),
    drive(pingroup("dp_aux_ch0_hpd_pm0", &[76], [mux::DP, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x10030, 0, 7, 6, 10, 12), 0x10034, 0, 12, 5, 20, 5),
    drive(pingroup("dp_aux_ch1_hpd_pm1", &[77], [mux::ETH3, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x10038, 0, 7, 6, 10, 12), 0x1003c, 0, 12, 5, 20, 5),
    drive(pingroup("dp_aux_ch2_hpd_pm2", &[78], [mux::ETH3, mux::RSVD1, mux::DISPLAYB, mux::RSVD3], 0x10040, 0, 7, 6, 10, 12), 0x10044, 0, 12, 5, 20, 5),
    drive(pingroup("dp_aux_ch3_hpd_pm3", &[79], [mux::ETH2, mux::RSVD1, mux::DISPLAYA, mux::RSVD3], 0x10048, 0, 7, 6, 10, 12), 0x1004c, 0, 12, 5, 20, 5),
    drive(pingroup("dp_aux_ch1_p_pn3", &[87], [mux::I2C4, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x10050, 0, 7, 6, 10, 12), 0x10054, 0, 12, 5, 20, 5),
    drive(pingroup("dp_aux_ch1_n_pn4", &[88], [mux::I2C4, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x10058, 0, 7, 6, 10, 12), 0x1005c, 0, 12, 5, 20, 5),
    drive(pingroup("dp_aux_ch2_p_pn5", &[89], [mux::I2C7, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x10060, 0, 7, 6, 10, 12), 0x10064, 0, 12, 5, 20, 5),
    drive(pingroup("dp_aux_ch2_n_pn6", &[90], [mux::I2C7, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x10068, 0, 7, 6, 10, 12), 0x1006c, 0, 12, 5, 20, 5),
    drive(pingroup("dp_aux_ch3_p_pn7", &[91], [mux::I2C9, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x10070, 0, 7, 6, 10, 12), 0x10074, 0, 12, 5, 20, 5),
    drive(pingroup("dp_aux_ch3_n_pn0", &[84], [mux::I2C9, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x10078, 0, 7, 6, 10, 12), 0x1007c, 0, 12, 5, 20, 5),
    pingroup("eqos_td3_pe4", &[25], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15000, 0, 5, 6, 10, 12),
    pingroup("eqos_td2_pe3", &[24], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15008, 0, 5, 6, 10, 12),
    pingroup("eqos_td1_pe2", &[23], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15010, 0, 5, 6, 10, 12),
    pingroup("eqos_td0_pe1", &[22], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15018, 0, 5, 6, 10, 12),
    pingroup("eqos_rd3_pf1", &[30], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15020, 0, 5, 6, 10, 12),
    pingroup("eqos_rd2_pf0", &[29], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15028, 0, 5, 6, 10, 12),
    pingroup("eqos_rd1_pe7", &[28], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15030, 0, 5, 6, 10, 12),
    pingroup("eqos_sma_mdio_pf4", &[33], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15038, 0, 5, 6, 10, 12),
    pingroup("eqos_rd0_pe6", &[27], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15040, 0, 5, 6, 10, 12),
    pingroup("eqos_sma_mdc_pf5", &[34], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15048, 0, 5, 6, 10, 12),
    comp_group("eqos_comp", &[217], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15050),
    pingroup("eqos_txc_pe0", &[21], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15058, 0, 5, 6, 10, 12),
    pingroup("eqos_rxc_pf3", &[32], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15060, 0, 5, 6, 10, 12),
    pingroup("eqos_tx_ctl_pe5", &[26], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15068, 0, 5, 6, 10, 12),
    pingroup("eqos_rx_ctl_pf2", &[31], [mux::EQOS, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x15070, 0, 5, 6, 10, 12),
    drive(pingroup("pex_l2_clkreq_n_pk4", &[68], [mux::PE2, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x7000, 0, 7, 6, 10, 12), 0x7004, 0, 12, 5, 20, 5),
    drive(pingroup("pex_wake_n_pl2", &[74], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x7008, 0, 7, 6, 10, 12), 0x700c, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l1_clkreq_n_pk2", &[66], [mux::PE1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x7010, 0, 7, 6, 10, 12), 0x7014, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l1_rst_n_pk3", &[67], [mux::PE1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x7018, 0, 7, 6, 10, 12), 0x701c, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l0_clkreq_n_pk0", &[64], [mux::PE0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x7020, 0, 7, 6, 10, 12), 0x7024, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l0_rst_n_pk1", &[65], [mux::PE0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x7028, 0, 7, 6, 10, 12), 0x702c, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l2_rst_n_pk5", &[69], [mux::PE2, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x7030, 0, 7, 6, 10, 12), 0x7034, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l3_clkreq_n_pk6", &[70], [mux::PE3, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x7038, 0, 7, 6, 10, 12), 0x703c, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l3_rst_n_pk7", &[71], [mux::PE3, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x7040, 0, 7, 6, 10, 12), 0x7044, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l4_clkreq_n_pl0", &[72], [mux::PE4, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x7048, 0, 7, 6, 10, 12), 0x704c, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l4_rst_n_pl1", &[73], [mux::PE4, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x7050, 0, 7, 6, 10, 12), 0x7054, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio34_pl3", &[75], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x7058, 0, 7, 6, 10, 12), 0x705c, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l5_clkreq_n_paf0", &[181], [mux::PE5, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x14000, 0, 7, 6, 10, 12), 0x14004, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l5_rst_n_paf1", &[182], [mux::PE5, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x14008, 0, 7, 6, 10, 12), 0x1400c, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l6_clkreq_n_paf2", &[183], [mux::PE6, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x14010, 0, 7, 6, 10, 12), 0x14014, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l6_rst_n_paf3", &[184], [mux::PE6, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x14018, 0, 7, 6, 10, 12), 0x1401c, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l10_clkreq_n_pag6", &[191], [mux::PE10, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x19000, 0, 7, 6, 10, 12), 0x19004, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l10_rst_n_pag7", &[192], [mux::PE10, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x19008, 0, 7, 6, 10, 12), 0x1900c, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l7_clkreq_n_pag0", &[185], [mux::PE7, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x19010, 0, 7, 6, 10, 12), 0x19014, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l7_rst_n_pag1", &[186], [mux::PE7, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x19018, 0, 7, 6, 10, 12), 0x1901c, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l8_clkreq_n_pag2", &[187], [mux::PE8, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x19020, 0, 7, 6, 10, 12), 0x19024, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l8_rst_n_pag3", &[188], [mux::PE8, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x19028, 0, 7, 6, 10, 12), 0x1902c, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l9_clkreq_n_pag4", &[189], [mux::PE9, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x19030, 0, 7, 6, 10, 12), 0x19034, 0, 12, 5, 20, 5),
    drive(pingroup("pex_l9_rst_n_pag5", &[190], [mux::PE9, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x19038, 0, 7, 6, 10, 12), 0x1903c, 0, 12, 5, 20, 5),
    pingroup("qspi0_io3_pc5", &[14], [mux::QSPI0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb000, 0, 5, 6, 10, 12),
    pingroup("qspi0_io2_pc4", &[13], [mux::QSPI0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb008, 0, 5, 6, 10, 12),
    pingroup("qspi0_io1_pc3", &[12], [mux::QSPI0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb010, 0, 5, 6, 10, 12),
    pingroup("qspi0_io0_pc2", &[11], [mux::QSPI0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb018, 0, 5, 6, 10, 12),
    pingroup("qspi0_sck_pc0", &[9], [mux::QSPI0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb020, 0, 5, 6, 10, 12),
    pingroup("qspi0_cs_n_pc1", &[10], [mux::QSPI0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb028, 0, 5, 6, 10, 12),
    pingroup("qspi1_io3_pd3", &[20], [mux::QSPI1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb030, 0, 5, 6, 10, 12),
    pingroup("qspi1_io2_pd2", &[19], [mux::QSPI1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb038, 0, 5, 6, 10, 12),
    pingroup("qspi1_io1_pd1", &[18], [mux::QSPI1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb040, 0, 5, 6, 10, 12),
    pingroup("qspi1_io0_pd0", &[17], [mux::QSPI1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb048, 0, 5, 6, 10, 12),
    pingroup("qspi1_sck_pc6", &[15], [mux::QSPI1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb050, 0, 5, 6, 10, 12),
    pingroup("qspi1_cs_n_pc7", &[16], [mux::QSPI1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb058, 0, 5, 6, 10, 12),
    comp_group("qspi_comp", &[218], [mux::QSPI, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xb060),
    drive(pingroup("sdmmc1_clk_pj0", &[58], [mux::SDMMC1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x8000, 0, 5, 6, 10, 12), 0x8004, 0, 28, 2, 30, 2),
    drive(pingroup("sdmmc1_cmd_pj1", &[59], [mux::SDMMC1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x8008, 0, 5, 6, 10, 12), 0x800c, 0, 28, 2, 30, 2),
    comp_group("sdmmc1_comp", &[219], [mux::SDMMC1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x8010),
    drive(pingroup("sdmmc1_dat3_pj5", &[63], [mux::SDMMC1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x8018, 0, 5, 6, 10, 12), 0x801c, 0, 28, 2, 30, 2),
    drive(pingroup("sdmmc1_dat2_pj4", &[62], [mux::SDMMC1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x8020, 0, 5, 6, 10, 12), 0x8024, 0, 28, 2, 30, 2),
    drive(pingroup("sdmmc1_dat1_pj3", &[61], [mux::SDMMC1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x8028, 0, 5, 6, 10, 12), 0x802c, 0, 28, 2, 30, 2),
    drive(pingroup("sdmmc1_dat0_pj2", &[60], [mux::SDMMC1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x8030, 0, 5, 6, 10, 12), 0x8034, 0, 28, 2, 30, 2),
    drive(pingroup("sce_error_pee0", &[208], [mux::SCE, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x1010, 1, 7, 6, 10, 12), 0x1014, 1, 12, 5, 20, 5),
    drive(pingroup("batt_oc_pee3", &[211], [mux::SOC, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x1020, 1, 7, 6, 10, 12), 0x1024, 1, 12, 5, 20, 5),
    drive(pingroup("bootv_ctl_n_pee7", &[215], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x1028, 1, 7, 6, 10, 12), 0x102c, 1, 12, 5, 20, 5),
    drive(pingroup("power_on_pee4", &[212], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x1038, 1, 7, 6, 10, 12), 0x103c, 1, 12, 5, 20, 5),
    drive(pingroup("soc_gpio26_pee5", &[213], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x1040, 1, 7, 6, 10, 12), 0x1044, 1, 12, 5, 20, 5),
    drive(pingroup("soc_gpio27_pee6", &[214], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x1048, 1, 7, 6, 10, 12), 0x104c, 1, 12, 5, 20, 5),
    drive(pingroup("ao_retention_n_pee2", &[210], [mux::GPIO, mux::LED, mux::RSVD2, mux::ISTCTRL], 0x1050, 1, 7, 6, 10, 12), 0x1054, 1, 12, 5, 20, 5),
    drive(pingroup("vcomp_alert_pee1", &[209], [mux::SOC, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x1058, 1, 7, 6, 10, 12), 0x105c, 1, 12, 5, 20, 5),
    drive(pingroup("hdmi_cec_pgg0", &[216], [mux::HDMI, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x1060, 1, 7, 6, 10, 12), 0x1064, 1, 12, 5, 20, 5),
    drive(pingroup("ufs0_rst_n_pae1", &[180], [mux::UFS0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x11000, 0, 5, 6, 10, 12), 0x11004, 0, 12, 5, 24, 5),
    drive(pingroup("ufs0_ref_clk_pae0", &[179], [mux::UFS0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x11008, 0, 5, 6, 10, 12), 0x1100c, 0, 12, 5, 24, 5),
    drive(pingroup("spi3_miso_py1", &[144], [mux::SPI3, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd000, 0, 7, 6, 10, 12), 0xd004, 0, 12, 5, 20, 5),
    drive(pingroup("spi1_cs0_pz6", &[157], [mux::SPI1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd008, 0, 7, 6, 10, 12), 0xd00c, 0, 12, 5, 20, 5),
    drive(pingroup("spi3_cs0_py3", &[146], [mux::SPI3, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd010, 0, 7, 6, 10, 12), 0xd014, 0, 12, 5, 20, 5),
    drive(pingroup("spi1_miso_pz4", &[155], [mux::SPI1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd018, 0, 7, 6, 10, 12), 0xd01c, 0, 12, 5, 20, 5),
    drive(pingroup("spi3_cs1_py4", &[147], [mux::SPI3, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd020, 0, 7, 6, 10, 12), 0xd024, 0, 12, 5, 20, 5),
    drive(pingroup("spi1_sck_pz3", &[154], [mux::SPI1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd028, 0, 7, 6, 10, 12), 0xd02c, 0, 12, 5, 20, 5),
    drive(pingroup("spi3_sck_py0", &[143], [mux::SPI3, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd030, 0, 7, 6, 10, 12), 0xd034, 0, 12, 5, 20, 5),
    drive(pingroup("spi1_cs1_pz7", &[158], [mux::SPI1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd038, 0, 7, 6, 10, 12), 0xd03c, 0, 12, 5, 20, 5),
    drive(pingroup("spi1_mosi_pz5", &[156], [mux::SPI1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd040, 0, 7, 6, 10, 12), 0xd044, 0, 12, 5, 20, 5),
    drive(pingroup("spi3_mosi_py2", &[145], [mux::SPI3, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd048, 0, 7, 6, 10, 12), 0xd04c, 0, 12, 5, 20, 5),
    drive(pingroup("uart2_tx_px4", &[139], [mux::UARTB, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd050, 0, 7, 6, 10, 12), 0xd054, 0, 12, 5, 20, 5),
    drive(pingroup("uart2_rx_px5", &[140], [mux::UARTB, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd058, 0, 7, 6, 10, 12), 0xd05c, 0, 12, 5, 20, 5),
    drive(pingroup("uart2_rts_px6", &[141], [mux::UARTB, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd060, 0, 7, 6, 10, 12), 0xd064, 0, 12, 5, 20, 5),
    drive(pingroup("uart2_cts_px7", &[142], [mux::UARTB, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd068, 0, 7, 6, 10, 12), 0xd06c, 0, 12, 5, 20, 5),
    drive(pingroup("uart5_tx_py5", &[148], [mux::UARTE, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd070, 0, 7, 6, 10, 12), 0xd074, 0, 12, 5, 20, 5),
    drive(pingroup("uart5_rx_py6", &[149], [mux::UARTE, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd078, 0, 7, 6, 10, 12), 0xd07c, 0, 12, 5, 20, 5),
    drive(pingroup("uart5_rts_py7", &[150], [mux::UARTE, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd080, 0, 7, 6, 10, 12), 0xd084, 0, 12, 5, 20, 5),
    drive(pingroup("uart5_cts_pz0", &[151], [mux::UARTE, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd088, 0, 7, 6, 10, 12), 0xd08c, 0, 12, 5, 20, 5),
    drive(pingroup("gpu_pwr_req_px0", &[135], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd090, 0, 7, 6, 10, 12), 0xd094, 0, 12, 5, 20, 5),
    drive(pingroup("gp_pwm3_px3", &[138], [mux::GP, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd098, 0, 7, 6, 10, 12), 0xd09c, 0, 12, 5, 20, 5),
    drive(pingroup("gp_pwm2_px2", &[137], [mux::GP, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd0a0, 0, 7, 6, 10, 12), 0xd0a4, 0, 12, 5, 20, 5),
    drive(pingroup("cv_pwr_req_px1", &[136], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd0a8, 0, 7, 6, 10, 12), 0xd0ac, 0, 12, 5, 20, 5),
    drive(pingroup("usb_vbus_en0_pz1", &[152], [mux::USB, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd0b0, 0, 7, 6, 10, 12), 0xd0b4, 0, 12, 5, 20, 5),
    drive(pingroup("usb_vbus_en1_pz2", &[153], [mux::USB, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xd0b8, 0, 7, 6, 10, 12), 0xd0bc, 0, 12, 5, 20, 5),
    drive(pingroup("extperiph2_clk_pp1", &[93], [mux::EXTPERIPH2, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x0, 0, 7, 6, 10, 12), 0x4, 0, 12, 5, 20, 5),
    drive(pingroup("extperiph1_clk_pp0", &[92], [mux::EXTPERIPH1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x8, 0, 7, 6, 10, 12), 0xc, 0, 12, 5, 20, 5),
    drive(pingroup("cam_i2c_sda_pp3", &[95], [mux::I2C3, mux::VI0, mux::RSVD2, mux::VI1], 0x10, 0, 7, 6, 10, 12), 0x14, 0, 12, 5, 20, 5),
    drive(pingroup("cam_i2c_scl_pp2", &[94], [mux::I2C3, mux::VI0, mux::VI0_ALT, mux::VI1], 0x18, 0, 7, 6, 10, 12), 0x1c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio23_pp4", &[96], [mux::VI0, mux::VI0_ALT, mux::VI1, mux::VI1_ALT], 0x20, 0, 7, 6, 10, 12), 0x24, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio24_pp5", &[97], [mux::VI0, mux::SOC, mux::VI1, mux::VI1_ALT], 0x28, 0, 7, 6, 10, 12), 0x2c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio25_pp6", &[98], [mux::VI0, mux::I2S5, mux::VI1, mux::DMIC1], 0x30, 0, 7, 6, 10, 12), 0x34, 0, 12, 5, 20, 5),
    drive(pingroup("pwr_i2c_scl_pp7", &[99], [mux::I2C5, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x38, 0, 7, 6, 10, 12), 0x3c, 0, 12, 5, 20, 5),
    drive(pingroup("pwr_i2c_sda_pq0", &[100], [mux::I2C5, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x40, 0, 7, 6, 10, 12), 0x44, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio28_pq1", &[101], [mux::VI0, mux::RSVD1, mux::VI1, mux::RSVD3], 0x48, 0, 7, 6, 10, 12), 0x4c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio29_pq2", &[102], [mux::RSVD0, mux::NV, mux::RSVD2, mux::RSVD3], 0x50, 0, 7, 6, 10, 12), 0x54, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio30_pq3", &[103], [mux::RSVD0, mux::WDT, mux::RSVD2, mux::RSVD3], 0x58, 0, 7, 6, 10, 12), 0x5c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio31_pq4", &[104], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x60, 0, 7, 6, 10, 12), 0x64, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio32_pq5", &[105], [mux::RSVD0, mux::EXTPERIPH3, mux::DCB, mux::RSVD3], 0x68, 0, 7, 6, 10, 12), 0x6c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio33_pq6", &[106], [mux::RSVD0, mux::EXTPERIPH4, mux::DCB, mux::RSVD3], 0x70, 0, 7, 6, 10, 12), 0x74, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio35_pq7", &[107], [mux::RSVD0, mux::I2S5, mux::DMIC1, mux::RSVD3], 0x78, 0, 7, 6, 10, 12), 0x7c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio37_pr0", &[108], [mux::GP, mux::I2S5, mux::DMIC4, mux::DSPK1], 0x80, 0, 7, 6, 10, 12), 0x84, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio56_pr1", &[109], [mux::RSVD0, mux::I2S5, mux::DMIC4, mux::DSPK1], 0x88, 0, 7, 6, 10, 12), 0x8c, 0, 12, 5, 20, 5),
    drive(pingroup("uart1_cts_pr5", &[113], [mux::UARTA, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x90, 0, 7, 6, 10, 12), 0x94, 0, 12, 5, 20, 5),
    drive(pingroup("uart1_rts_pr4", &[112], [mux::UARTA, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x98, 0, 7, 6, 10, 12), 0x9c, 0, 12, 5, 20, 5),
    drive(pingroup("uart1_rx_pr3", &[111], [mux::UARTA, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xa0, 0, 7, 6, 10, 12), 0xa4, 0, 12, 5, 20, 5),
    drive(pingroup("uart1_tx_pr2", &[110], [mux::UARTA, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0xa8, 0, 7, 6, 10, 12), 0xac, 0, 12, 5, 20, 5),
    drive(pingroup("cpu_pwr_req_pi5", &[56], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x4000, 0, 7, 6, 10, 12), 0x4004, 0, 12, 5, 20, 5),
    drive(pingroup("uart4_cts_ph6", &[49], [mux::UARTD, mux::RSVD1, mux::I2S7, mux::RSVD3], 0x4008, 0, 7, 6, 10, 12), 0x400c, 0, 12, 5, 20, 5),
    drive(pingroup("uart4_rts_ph5", &[48], [mux::UARTD, mux::SPI4, mux::RSVD2, mux::RSVD3], 0x4010, 0, 7, 6, 10, 12), 0x4014, 0, 12, 5, 20, 5),
    drive(pingroup("uart4_rx_ph4", &[47], [mux::UARTD, mux::RSVD1, mux::I2S7, mux::RSVD3], 0x4018, 0, 7, 6, 10, 12), 0x401c, 0, 12, 5, 20, 5),
    drive(pingroup("uart4_tx_ph3", &[46], [mux::UARTD, mux::SPI4, mux::RSVD2, mux::RSVD3], 0x4020, 0, 7, 6, 10, 12), 0x4024, 0, 12, 5, 20, 5),
    drive(pingroup("gen1_i2c_scl_pi3", &[54], [mux::I2C1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x4028, 0, 7, 6, 10, 12), 0x402c, 0, 12, 5, 20, 5),
    drive(pingroup("gen1_i2c_sda_pi4", &[55], [mux::I2C1, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x4030, 0, 7, 6, 10, 12), 0x4034, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio20_pg7", &[42], [mux::RSVD0, mux::SDMMC1, mux::RSVD2, mux::RSVD3], 0x4038, 0, 7, 6, 10, 12), 0x403c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio21_ph0", &[43], [mux::RSVD0, mux::GP, mux::I2S7, mux::RSVD3], 0x4040, 0, 7, 6, 10, 12), 0x4044, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio22_ph1", &[44], [mux::RSVD0, mux::RSVD1, mux::I2S7, mux::RSVD3], 0x4048, 0, 7, 6, 10, 12), 0x404c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio13_pg0", &[35], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x4050, 0, 7, 6, 10, 12), 0x4054, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio14_pg1", &[36], [mux::RSVD0, mux::SPI4, mux::RSVD2, mux::RSVD3], 0x4058, 0, 7, 6, 10, 12), 0x405c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio15_pg2", &[37], [mux::RSVD0, mux::SPI4, mux::RSVD2, mux::RSVD3], 0x4060, 0, 7, 6, 10, 12), 0x4064, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio16_pg3", &[38], [mux::RSVD0, mux::SPI4, mux::RSVD2, mux::RSVD3], 0x4068, 0, 7, 6, 10, 12), 0x406c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio17_pg4", &[39], [mux::RSVD0, mux::CCLA, mux::RSVD2, mux::RSVD3], 0x4070, 0, 7, 6, 10, 12), 0x4074, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio18_pg5", &[40], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x4078, 0, 7, 6, 10, 12), 0x407c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio19_pg6", &[41], [mux::GP, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x4080, 0, 7, 6, 10, 12), 0x4084, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio41_ph7", &[50], [mux::RSVD0, mux::I2S2, mux::RSVD2, mux::RSVD3], 0x4088, 0, 7, 6, 10, 12), 0x408c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio42_pi0", &[51], [mux::RSVD0, mux::I2S2, mux::RSVD2, mux::RSVD3], 0x4090, 0, 7, 6, 10, 12), 0x4094, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio43_pi1", &[52], [mux::RSVD0, mux::I2S2, mux::RSVD2, mux::RSVD3], 0x4098, 0, 7, 6, 10, 12), 0x409c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio44_pi2", &[53], [mux::RSVD0, mux::I2S2, mux::RSVD2, mux::RSVD3], 0x40a0, 0, 7, 6, 10, 12), 0x40a4, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio06_ph2", &[45], [mux::RSVD0, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x40a8, 0, 7, 6, 10, 12), 0x40ac, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio07_pi6", &[57], [mux::GP, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x40b0, 0, 7, 6, 10, 12), 0x40b4, 0, 12, 5, 20, 5),
    drive(pingroup("dap4_sclk_pa4", &[4], [mux::I2S4, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2000, 0, 7, 6, 10, 12), 0x2004, 0, 12, 5, 20, 5),
    drive(pingroup("dap4_dout_pa5", &[5], [mux::I2S4, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2008, 0, 7, 6, 10, 12), 0x200c, 0, 12, 5, 20, 5),
    drive(pingroup("dap4_din_pa6", &[6], [mux::I2S4, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2010, 0, 7, 6, 10, 12), 0x2014, 0, 12, 5, 20, 5),
    drive(pingroup("dap4_fs_pa7", &[7], [mux::I2S4, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2018, 0, 7, 6, 10, 12), 0x201c, 0, 12, 5, 20, 5),
    drive(pingroup("dap6_sclk_pa0", &[0], [mux::I2S6, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2020, 0, 7, 6, 10, 12), 0x2024, 0, 12, 5, 20, 5),
    drive(pingroup("dap6_dout_pa1", &[1], [mux::I2S6, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2028, 0, 7, 6, 10, 12), 0x202c, 0, 12, 5, 20, 5),
    drive(pingroup("dap6_din_pa2", &[2], [mux::I2S6, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2030, 0, 7, 6, 10, 12), 0x2034, 0, 12, 5, 20, 5),
    drive(pingroup("dap6_fs_pa3", &[3], [mux::I2S6, mux::RSVD1, mux::RSVD2, mux::RSVD3], 0x2038, 0, 7, 6, 10, 12), 0x203c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio45_pad0", &[175], [mux::RSVD0, mux::I2S1, mux::RSVD2, mux::RSVD3], 0x18000, 0, 7, 6, 10, 12), 0x18004, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio46_pad1", &[176], [mux::RSVD0, mux::I2S1, mux::RSVD2, mux::RSVD3], 0x18008, 0, 7, 6, 10, 12), 0x1800c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio47_pad2", &[177], [mux::RSVD0, mux::I2S1, mux::RSVD2, mux::RSVD3], 0x18010, 0, 7, 6, 10, 12), 0x18014, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio48_pad3", &[178], [mux::RSVD0, mux::I2S1, mux::RSVD2, mux::RSVD3], 0x18018, 0, 7, 6, 10, 12), 0x1801c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio57_pac4", &[171], [mux::RSVD0, mux::I2S8, mux::RSVD2, mux::SDMMC1], 0x18020, 0, 7, 6, 10, 12), 0x18024, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio58_pac5", &[172], [mux::RSVD0, mux::I2S8, mux::RSVD2, mux::SDMMC1], 0x18028, 0, 7, 6, 10, 12), 0x1802c, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio59_pac6", &[173], [mux::AUD, mux::I2S8, mux::RSVD2, mux::RSVD3], 0x18030, 0, 7, 6, 10, 12), 0x18034, 0, 12, 5, 20, 5),
    drive(pingroup("soc_gpio60_pac7", &[174], [mux::RSVD0, mux::I2S8, mux::NV, mux::IGPU], 0x18038, 0, 7, 6, 10, 12), 0x1803c, 0, 12, 5, 20, 5),
    drive(pingroup("spi5_cs0_pac3", &[170], [mux::SPI5, mux::I2S3, mux::DMIC2, mux::RSVD3], 0x18040, 0, 7, 6, 10, 12), 0x18044, 0, 12, 5, 20, 5),
    drive(pingroup("spi5_miso_pac1", &[168], [mux::SPI5, mux::I2S3, mux::DSPK0, mux::RSVD3], 0x18048, 0, 7, 6, 10, 12), 0x1804c, 0, 12, 5, 20, 5),
    drive(pingroup("spi5_mosi_pac2", &[169], [mux::SPI5, mux::I2S3, mux::DMIC2, mux::RSVD3], 0x18050, 0, 7, 6, 10, 12), 0x18054, 0, 12, 5, 20, 5),
    drive(pingroup("spi5_sck_pac0", &[167], [mux::SPI5, mux::I2S3, mux::DSPK0, mux::RSVD3], 0x18058, 0, 7, 6, 10, 12), 0x1805c, 0, 12, 5, 20, 5),
];

/// The Tegra234 catalog: two register apertures, schmitt/drive-type/SFIO
/// routing in the mux register, high-speed-mode absent.
pub const TEGRA234: SocCatalog = SocCatalog {
    name: "tegra234",
    pins: PINS,
    ngpios: NUM_GPIOS,
    groups: GROUPS,
    functions: FUNCTIONS,
    bank_sizes: &[0x1A000 / 4, 0x4000 / 4],
    hsm_in_mux: false,
    schmitt_in_mux: true,
    drvtype_in_mux: true,
    sfsel_in_mux: true,
};
