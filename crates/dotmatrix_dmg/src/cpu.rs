mod helpers;
pub mod isa;
mod regs;


pub use isa::{Instruction, OpcodeFn};
pub use regs::{Flags, Registers};

use crate::error::CoreError;
use crate::memory::{MemoryMap, BOOT_EXIT};

/// Execution state of the core.
///
/// `Halted` is entered through STOP/HALT (the zero-cycle sentinel) or an
/// unrecoverable decode failure, and only `reset` leaves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    Halted,
}

/// Structured record of one executed instruction, handed to the trace
/// hook. `addr` is where the opcode byte was fetched from.
#[derive(Debug)]
pub struct StepTrace<'a> {
    pub addr: u16,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub operands: &'a [u8],
    pub cycles: u32,
}

/// Callback invoked after every executed instruction, when registered.
/// The hot loop does nothing per-step otherwise.
pub type TraceHook = Box<dyn FnMut(&StepTrace)>;

/// Game Boy CPU core.
///
/// Owns the register file, the run/halt state and the T-state
/// accumulator. Memory is supplied per call so a host can own it
/// alongside its other subsystems.
pub struct Cpu {
    pub regs: Registers,
    /// Master interrupt enable. Interrupt delivery itself lives in an
    /// external controller; DI/EI/RETI still maintain the flag.
    pub ime: bool,
    mode: Mode,
    cycles: u64,
    trace: Option<TraceHook>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            mode: Mode::Running,
            cycles: 0,
            trace: None,
        }
    }

    /// Reset to the power-on state: zeroed registers (execution restarts
    /// at 0x0000), cleared cycle accumulator, `Running`. Memory contents
    /// are untouched; that includes the BIOS overlay latch, which is
    /// one-way by design and owned by the memory map.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime = false;
        self.mode = Mode::Running;
        self.cycles = 0;
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Total T-states consumed since construction or the last reset.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.f.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.f.set(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = Flags::empty();
    }

    /// Register a trace hook, replacing any previous one.
    pub fn set_trace_hook(&mut self, hook: TraceHook) {
        self.trace = Some(hook);
    }

    pub fn clear_trace_hook(&mut self) {
        self.trace = None;
    }

    /// Execute a single instruction and return the T-states it consumed.
    ///
    /// Fetches the opcode at PC (advancing it), looks up the descriptor,
    /// fetches the trailing operand bytes (advancing PC past them), and
    /// invokes the handler. A zero-cycle result (STOP/HALT) moves the
    /// core to `Halted`, as does a decode failure: execution state after
    /// a skipped instruction would be undefined relative to hardware, so
    /// the loop never skips. Stepping a halted core returns 0.
    pub fn step(&mut self, mem: &mut MemoryMap) -> Result<u32, CoreError> {
        if self.mode == Mode::Halted {
            return Ok(0);
        }

        // The boot overlay drops out the moment execution reaches
        // cartridge territory, and never comes back.
        if mem.bios_mapped() && self.regs.pc >= BOOT_EXIT {
            mem.disable_bios();
        }

        let addr = self.regs.pc;
        let opcode = mem.read_byte(addr);
        self.regs.pc = self.regs.pc.wrapping_add(1);

        let instr = &isa::BASE[opcode as usize];

        let mut buf = [0u8; 2];
        let count = (instr.length - 1) as usize;
        for slot in buf.iter_mut().take(count) {
            *slot = mem.read_byte(self.regs.pc);
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        let operands = &buf[..count];

        match (instr.exec)(self, mem, opcode, operands) {
            Ok(cycles) => {
                self.cycles += u64::from(cycles);
                if let Some(hook) = self.trace.as_mut() {
                    hook(&StepTrace {
                        addr,
                        opcode,
                        mnemonic: instr.mnemonic,
                        operands,
                        cycles,
                    });
                }
                if cycles == 0 {
                    self.mode = Mode::Halted;
                }
                Ok(cycles)
            }
            Err(err) => {
                if let CoreError::UnknownInstruction { opcode, addr } = err {
                    log::error!(
                        "CPU halted: unknown opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                        opcode = opcode,
                        pc = addr,
                        sp = self.regs.sp,
                        af = self.regs.af(),
                        bc = self.regs.bc(),
                        de = self.regs.de(),
                        hl = self.regs.hl(),
                    );
                }
                self.mode = Mode::Halted;
                Err(err)
            }
        }
    }

    /// Step until the core halts; returns the T-states consumed by this
    /// call. The loop imposes no bound of its own; callers that need one
    /// use [`run_steps`](Self::run_steps).
    pub fn run(&mut self, mem: &mut MemoryMap) -> Result<u64, CoreError> {
        let mut total = 0u64;
        while self.mode == Mode::Running {
            total += u64::from(self.step(mem)?);
        }
        Ok(total)
    }

    /// Step at most `max_steps` instructions, stopping early on halt.
    /// Returns the T-states consumed by this call.
    pub fn run_steps(&mut self, mem: &mut MemoryMap, max_steps: u64) -> Result<u64, CoreError> {
        let mut total = 0u64;
        for _ in 0..max_steps {
            if self.mode != Mode::Running {
                break;
            }
            total += u64::from(self.step(mem)?);
        }
        Ok(total)
    }
}
