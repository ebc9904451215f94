use crate::cpu::Cpu;
use crate::error::CoreError;
use crate::memory::MemoryMap;

impl Cpu {
    /// INC r for opcodes 0x04/0x0C/../0x3C, including INC (HL) at 0x34.
    /// Carry is unaffected.
    pub(crate) fn exec_inc8(
        &mut self,
        mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let reg = (opcode >> 3) & 0x07;
        let value = self.read_r8(mem, reg);
        let result = self.alu_inc8(value);
        self.write_r8(mem, reg, result);
        Ok(if reg == 6 { 8 } else { 4 })
    }

    /// DEC r for opcodes 0x05/0x0D/../0x3D, including DEC (HL) at 0x35.
    /// Carry is unaffected.
    pub(crate) fn exec_dec8(
        &mut self,
        mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let reg = (opcode >> 3) & 0x07;
        let value = self.read_r8(mem, reg);
        let result = self.alu_dec8(value);
        self.write_r8(mem, reg, result);
        Ok(if reg == 6 { 8 } else { 4 })
    }

    /// INC rr: 16-bit increment, wraps, no flags.
    pub(crate) fn exec_inc16(
        &mut self,
        _mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let rp = (opcode >> 4) & 0x03;
        let value = self.read_rp(rp).wrapping_add(1);
        self.write_rp(rp, value);
        Ok(8)
    }

    /// DEC rr: 16-bit decrement, wraps, no flags.
    pub(crate) fn exec_dec16(
        &mut self,
        _mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let rp = (opcode >> 4) & 0x03;
        let value = self.read_rp(rp).wrapping_sub(1);
        self.write_rp(rp, value);
        Ok(8)
    }
}
