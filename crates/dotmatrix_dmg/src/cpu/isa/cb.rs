use crate::cpu::{Cpu, Flags};
use crate::error::CoreError;
use crate::memory::MemoryMap;

use super::EXTENDED;

impl Cpu {
    /// PREFIX CB (0xCB): the operand byte selects an entry in the
    /// extended table, which receives it as its own opcode.
    pub(crate) fn exec_cb_prefix(
        &mut self,
        mem: &mut MemoryMap,
        _opcode: u8,
        operands: &[u8],
    ) -> Result<u32, CoreError> {
        let sub = operands[0];
        let instr = &EXTENDED[sub as usize];
        (instr.exec)(self, mem, sub, &[])
    }

    /// Rotates, shifts and SWAP: the 0x00–0x3F quadrant of the extended
    /// page. Bits 3–5 pick the operation, bits 0–2 the target. Unlike the
    /// unprefixed rotate-A forms, these compute Z from the result.
    pub(crate) fn exec_cb_rotshift(
        &mut self,
        mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let target = opcode & 0x07;
        let value = self.read_r8(mem, target);

        let (result, carry) = match (opcode >> 3) & 0x07 {
            // RLC
            0 => (value.rotate_left(1), value & 0x80 != 0),
            // RRC
            1 => (value.rotate_right(1), value & 0x01 != 0),
            // RL
            2 => {
                let carry_in = if self.regs.f.contains(Flags::C) { 1 } else { 0 };
                ((value << 1) | carry_in, value & 0x80 != 0)
            }
            // RR
            3 => {
                let carry_in = if self.regs.f.contains(Flags::C) { 0x80 } else { 0 };
                ((value >> 1) | carry_in, value & 0x01 != 0)
            }
            // SLA
            4 => (value << 1, value & 0x80 != 0),
            // SRA: arithmetic shift keeps the sign bit.
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP
            6 => ((value << 4) | (value >> 4), false),
            // SRL
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::C, carry);
        self.write_r8(mem, target, result);

        Ok(if target == 6 { 16 } else { 8 })
    }

    /// BIT b,r: test a bit; Z reflects the inverse, H is set, C survives.
    pub(crate) fn exec_cb_bit(
        &mut self,
        mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let target = opcode & 0x07;
        let bit = (opcode >> 3) & 0x07;
        let value = self.read_r8(mem, target);

        self.set_flag(Flags::Z, value & (1 << bit) == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, true);

        Ok(if target == 6 { 12 } else { 8 })
    }

    /// RES b,r: clear a bit; no flags.
    pub(crate) fn exec_cb_res(
        &mut self,
        mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let target = opcode & 0x07;
        let bit = (opcode >> 3) & 0x07;
        let value = self.read_r8(mem, target) & !(1 << bit);
        self.write_r8(mem, target, value);
        Ok(if target == 6 { 16 } else { 8 })
    }

    /// SET b,r: set a bit; no flags.
    pub(crate) fn exec_cb_set(
        &mut self,
        mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let target = opcode & 0x07;
        let bit = (opcode >> 3) & 0x07;
        let value = self.read_r8(mem, target) | (1 << bit);
        self.write_r8(mem, target, value);
        Ok(if target == 6 { 16 } else { 8 })
    }
}
