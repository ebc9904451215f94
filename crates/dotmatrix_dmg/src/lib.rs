//! DotMatrix DMG: a Game Boy (Sharp LR35902) CPU core.
//!
//! The crate models the fetch/decode/execute pipeline, the register file
//! with its paired 16-bit views, and the segmented memory map including
//! the one-shot BIOS overlay. Timing is reported as T-states per
//! instruction so a host can drive video/audio/timer subsystems in
//! lockstep. Peripherals, cartridge mappers and the outer frame loop are
//! a host concern.

pub mod cpu;
pub mod error;
pub mod machine;
pub mod memory;

pub use cpu::{Cpu, Flags, Mode, Registers, StepTrace};
pub use error::CoreError;
pub use machine::GameBoy;
pub use memory::MemoryMap;
