/// Errors surfaced by the DMG core.
///
/// The core is a deterministic state machine, so none of these are
/// retryable: `InvalidBios` is fatal at construction, the other two halt
/// the execution loop. Recovery is caller-level `reset` or reconstruction.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// The supplied BIOS image is not exactly 256 bytes.
    #[error("invalid BIOS image: expected 256 bytes, got {0}")]
    InvalidBios(usize),

    /// The fetched opcode has no registered handler. `addr` is the address
    /// the opcode was fetched from; PC has already moved past it.
    #[error("unknown instruction 0x{opcode:02X} at 0x{addr:04X}")]
    UnknownInstruction { opcode: u8, addr: u16 },

    /// A requested span escapes its backing memory region. Byte-level
    /// reads and writes cover the full 16-bit space, so this can only be
    /// produced through `fetch_region`/`fetch_region_mut`.
    #[error("span of {len} bytes at 0x{addr:04X} escapes its memory region")]
    AddressOutOfBounds { addr: u16, len: usize },
}
