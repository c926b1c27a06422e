//! SSD1306 command set.
//!
//! Register opcodes and the typed commands built from them. Single-byte
//! commands carry their argument in the opcode's low bits; the rest are an
//! opcode followed by one or two argument bytes. Every byte is written to the
//! controller on its own.

/// Contrast control; one argument byte.
pub const SET_CONTRAST: u8 = 0x81;
/// Entire display on; bit 0 ignores RAM contents when set.
pub const SET_ENTIRE_ON: u8 = 0xA4;
/// Normal/inverse display; bit 0 selects inverse.
pub const SET_NORM_INV: u8 = 0xA6;
/// Display off; `| 0x01` turns it on.
pub const SET_DISP: u8 = 0xAE;
/// Memory addressing mode; one argument byte.
pub const SET_MEM_ADDR: u8 = 0x20;
/// Column address window; start and end bytes.
pub const SET_COL_ADDR: u8 = 0x21;
/// Page address window; start and end bytes.
pub const SET_PAGE_ADDR: u8 = 0x22;
/// Display start line in bits 0..=5.
pub const SET_DISP_START_LINE: u8 = 0x40;
/// Segment remap; bit 0 maps column 127 to SEG0.
pub const SET_SEG_REMAP: u8 = 0xA0;
/// Multiplex ratio; one argument byte.
pub const SET_MUX_RATIO: u8 = 0xA8;
/// COM output scan direction; bit 3 scans COM[N-1] to COM0.
pub const SET_COM_OUT_DIR: u8 = 0xC0;
/// Vertical display offset; one argument byte.
pub const SET_DISP_OFFSET: u8 = 0xD3;
/// COM pins hardware configuration; one argument byte.
pub const SET_COM_PIN_CFG: u8 = 0xDA;
/// Display clock divide ratio / oscillator frequency; one argument byte.
pub const SET_DISP_CLK_DIV: u8 = 0xD5;
/// Pre-charge period; one argument byte.
pub const SET_PRECHARGE: u8 = 0xD9;
/// VCOMH deselect level; one argument byte.
pub const SET_VCOM_DESEL: u8 = 0xDB;
/// Charge pump setting; one argument byte.
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Graphic RAM addressing modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AddressingMode {
    /// Column pointer wraps to the next page.
    Horizontal = 0x00,
    /// Page pointer wraps to the next column.
    Vertical = 0x01,
    /// Column pointer wraps within the current page.
    Page = 0x02,
}

/// One controller command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Panel on or off.
    Display(bool),
    /// Graphic RAM addressing mode.
    MemoryAddressingMode(AddressingMode),
    /// RAM row shown on the first panel line (0..=63).
    StartLine(u8),
    /// Map column 127 to SEG0 when `true`.
    SegmentRemap(bool),
    /// Number of active COM lines minus one.
    MultiplexRatio(u8),
    /// Scan COM[N-1] to COM0 when `true`.
    ComScanRemapped(bool),
    /// Vertical shift of the COM lines.
    DisplayOffset(u8),
    /// COM pins hardware configuration.
    ComPinConfig(u8),
    /// Clock divide ratio and oscillator frequency.
    ClockDivide(u8),
    /// Pre-charge period.
    Precharge(u8),
    /// VCOMH deselect level.
    VcomDeselect(u8),
    /// Contrast, 0..=255.
    Contrast(u8),
    /// Light every pixel regardless of RAM when `true`.
    EntireDisplayOn(bool),
    /// Inverse video when `true`.
    Invert(bool),
    /// Charge pump setting.
    ChargePump(u8),
    /// Column window, start and end.
    ColumnAddress(u8, u8),
    /// Page window, start and end.
    PageAddress(u8, u8),
}

impl Command {
    /// Encodes the command as the bytes written to the controller, in order.
    pub fn to_bytes(self) -> Vec<u8> {
        match self {
            Self::Display(on) => vec![SET_DISP | on as u8],
            Self::MemoryAddressingMode(mode) => vec![SET_MEM_ADDR, mode as u8],
            Self::StartLine(line) => vec![SET_DISP_START_LINE | (line & 0x3F)],
            Self::SegmentRemap(remap) => vec![SET_SEG_REMAP | remap as u8],
            Self::MultiplexRatio(ratio) => vec![SET_MUX_RATIO, ratio],
            Self::ComScanRemapped(remap) => vec![SET_COM_OUT_DIR | ((remap as u8) << 3)],
            Self::DisplayOffset(offset) => vec![SET_DISP_OFFSET, offset],
            Self::ComPinConfig(cfg) => vec![SET_COM_PIN_CFG, cfg],
            Self::ClockDivide(div) => vec![SET_DISP_CLK_DIV, div],
            Self::Precharge(period) => vec![SET_PRECHARGE, period],
            Self::VcomDeselect(level) => vec![SET_VCOM_DESEL, level],
            Self::Contrast(level) => vec![SET_CONTRAST, level],
            Self::EntireDisplayOn(on) => vec![SET_ENTIRE_ON | on as u8],
            Self::Invert(invert) => vec![SET_NORM_INV | invert as u8],
            Self::ChargePump(setting) => vec![SET_CHARGE_PUMP, setting],
            Self::ColumnAddress(start, end) => vec![SET_COL_ADDR, start, end],
            Self::PageAddress(start, end) => vec![SET_PAGE_ADDR, start, end],
        }
    }
}

/// One logical step of display initialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitStep {
    /// Commands written byte by byte, in order.
    Commands(Vec<Command>),
    /// Clear the panel to 0 and flush it.
    ClearAndShow,
}

impl InitStep {
    /// Command bytes this step writes; empty for [`InitStep::ClearAndShow`].
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Self::Commands(commands) => commands.iter().flat_map(|c| c.to_bytes()).collect(),
            Self::ClearAndShow => Vec::new(),
        }
    }
}
