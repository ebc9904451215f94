use crate::cpu::{Cpu, Flags};
use crate::error::CoreError;
use crate::memory::MemoryMap;

impl Cpu {
    /// The four unprefixed accumulator rotates: RLCA (0x07), RRCA (0x0F),
    /// RLA (0x17), RRA (0x1F).
    ///
    /// RLCA/RRCA are circular: the bit shifted out becomes the new carry
    /// and re-enters at the opposite end. RLA/RRA rotate through the
    /// carry flag instead. All four clear Z, N and H unconditionally,
    /// unlike their CB-prefixed cousins, which compute Z.
    pub(crate) fn exec_rotate_a(
        &mut self,
        _mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let a = self.regs.a;
        let (result, carry) = match opcode {
            // RLCA
            0x07 => (a.rotate_left(1), a & 0x80 != 0),
            // RRCA
            0x0F => (a.rotate_right(1), a & 0x01 != 0),
            // RLA
            0x17 => {
                let carry_in = if self.regs.f.contains(Flags::C) { 1 } else { 0 };
                ((a << 1) | carry_in, a & 0x80 != 0)
            }
            // RRA
            _ => {
                let carry_in = if self.regs.f.contains(Flags::C) { 0x80 } else { 0 };
                ((a >> 1) | carry_in, a & 0x01 != 0)
            }
        };

        self.regs.a = result;
        self.clear_flags();
        self.set_flag(Flags::C, carry);
        Ok(4)
    }
}
