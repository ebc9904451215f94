use crate::cpu::{Cpu, TraceHook};
use crate::error::CoreError;
use crate::memory::MemoryMap;

/// High-level DMG machine: the CPU core plus its memory map.
///
/// This is the entry point a host embeds. The host drives `step`
/// repeatedly (or `run`/`run_steps`) and spends the returned T-states on
/// its other subsystems; nothing here loops on its own.
pub struct GameBoy {
    pub cpu: Cpu,
    mem: MemoryMap,
}

impl Default for GameBoy {
    /// A machine with empty memory, mostly useful in tests.
    fn default() -> Self {
        Self {
            cpu: Cpu::new(),
            mem: MemoryMap::default(),
        }
    }
}

impl GameBoy {
    /// Build a machine that boots through the BIOS overlay.
    ///
    /// `bios` must be exactly 256 bytes or construction fails with
    /// [`CoreError::InvalidBios`]; `rom` is copied into the flat 32 KiB
    /// cartridge region. Execution starts at 0x0000 inside the overlay.
    pub fn new(bios: &[u8], rom: &[u8]) -> Result<Self, CoreError> {
        Ok(Self {
            cpu: Cpu::new(),
            mem: MemoryMap::new(bios, rom)?,
        })
    }

    /// Build a machine without a BIOS: execution starts directly in ROM
    /// at 0x0000 and the overlay is never mapped.
    pub fn with_rom(rom: &[u8]) -> Self {
        Self {
            cpu: Cpu::new(),
            mem: MemoryMap::with_rom(rom),
        }
    }

    /// Execute one instruction; see [`Cpu::step`].
    pub fn step(&mut self) -> Result<u32, CoreError> {
        self.cpu.step(&mut self.mem)
    }

    /// Run until the core halts; see [`Cpu::run`].
    pub fn run(&mut self) -> Result<u64, CoreError> {
        self.cpu.run(&mut self.mem)
    }

    /// Run at most `max_steps` instructions; see [`Cpu::run_steps`].
    pub fn run_steps(&mut self, max_steps: u64) -> Result<u64, CoreError> {
        self.cpu.run_steps(&mut self.mem, max_steps)
    }

    /// Reset the CPU (registers, halt state, cycle accumulator). Memory
    /// is left alone: the ROM stays loaded, and a spent BIOS overlay
    /// stays spent.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    pub fn memory(&self) -> &MemoryMap {
        &self.mem
    }

    pub fn memory_mut(&mut self) -> &mut MemoryMap {
        &mut self.mem
    }

    pub fn set_trace_hook(&mut self, hook: TraceHook) {
        self.cpu.set_trace_hook(hook);
    }

    pub fn clear_trace_hook(&mut self) {
        self.cpu.clear_trace_hook();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::cpu::Mode;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// A minimal boot ROM: run up through the overlay on NOPs, then
    /// hand over to the cartridge at 0x0100.
    fn nop_bios() -> Vec<u8> {
        vec![0x00; 256]
    }

    #[test]
    fn boot_rom_runs_then_unmaps_at_0x0100() {
        init_logging();

        // Cartridge: LD B,0x05 at the entry point, then STOP.
        let mut rom = vec![0x00; 0x200];
        rom[0x100] = 0x06;
        rom[0x101] = 0x05;
        rom[0x102] = 0x10;
        rom[0x103] = 0x00;

        let mut gb = GameBoy::new(&nop_bios(), &rom).unwrap();
        assert!(gb.memory().bios_mapped());

        // 256 NOPs walk PC through the whole overlay.
        for _ in 0..256 {
            assert_eq!(gb.step().unwrap(), 4);
        }
        assert_eq!(gb.cpu.regs.pc, 0x0100);
        assert!(gb.memory().bios_mapped());

        // The fetch at 0x0100 unmaps the overlay before reading.
        assert_eq!(gb.step().unwrap(), 8);
        assert!(!gb.memory().bios_mapped());
        assert_eq!(gb.cpu.regs.b, 0x05);

        // STOP parks the machine.
        assert_eq!(gb.step().unwrap(), 0);
        assert_eq!(gb.cpu.mode(), Mode::Halted);
    }

    #[test]
    fn run_accumulates_cycles_until_halt() {
        init_logging();

        // NOP; NOP; STOP -> 4 + 4 + 0 T-states.
        let mut gb = GameBoy::with_rom(&[0x00, 0x00, 0x10, 0x00]);
        let total = gb.run().unwrap();
        assert_eq!(total, 8);
        assert_eq!(gb.cpu.mode(), Mode::Halted);
        assert_eq!(gb.cpu.cycles(), 8);

        // A halted machine makes no further progress without a reset.
        assert_eq!(gb.run_steps(10).unwrap(), 0);

        gb.reset();
        assert_eq!(gb.cpu.mode(), Mode::Running);
        assert_eq!(gb.cpu.cycles(), 0);
        assert_eq!(gb.cpu.regs.pc, 0x0000);
        // ROM is still loaded after reset.
        assert_eq!(gb.run().unwrap(), 8);
    }

    #[test]
    fn trace_hook_sees_structured_step_data() {
        init_logging();

        let seen: Rc<RefCell<Vec<(u16, u8, String, Vec<u8>, u32)>>> =
            Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut gb = GameBoy::with_rom(&[0x06, 0x05, 0x04, 0x10, 0x00]);
        gb.set_trace_hook(Box::new(move |t| {
            sink.borrow_mut().push((
                t.addr,
                t.opcode,
                t.mnemonic.to_string(),
                t.operands.to_vec(),
                t.cycles,
            ));
        }));

        gb.step().unwrap();
        gb.step().unwrap();
        gb.clear_trace_hook();
        gb.step().unwrap();

        let seen = seen.borrow();
        // Only the two traced steps were recorded.
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (0x0000, 0x06, "LD B,d8".into(), vec![0x05], 8));
        assert_eq!(seen[1], (0x0002, 0x04, "INC B".into(), vec![], 4));
    }
}
