use crate::cpu::helpers::le16;
use crate::cpu::Cpu;
use crate::error::CoreError;
use crate::memory::MemoryMap;

impl Cpu {
    /// JR r8 (0x18): displacement is relative to the address after the
    /// operand, which is where PC already points.
    pub(crate) fn exec_jr(
        &mut self,
        _mem: &mut MemoryMap,
        _opcode: u8,
        operands: &[u8],
    ) -> Result<u32, CoreError> {
        let offset = operands[0] as i8;
        self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
        Ok(12)
    }

    /// JR cc,r8 for 0x20/0x28/0x30/0x38.
    pub(crate) fn exec_jr_cc(
        &mut self,
        _mem: &mut MemoryMap,
        opcode: u8,
        operands: &[u8],
    ) -> Result<u32, CoreError> {
        if self.condition((opcode >> 3) & 0x03) {
            let offset = operands[0] as i8;
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
            Ok(12)
        } else {
            Ok(8)
        }
    }

    /// JP a16 (0xC3).
    pub(crate) fn exec_jp(
        &mut self,
        _mem: &mut MemoryMap,
        _opcode: u8,
        operands: &[u8],
    ) -> Result<u32, CoreError> {
        self.regs.pc = le16(operands);
        Ok(16)
    }

    /// JP cc,a16 for 0xC2/0xCA/0xD2/0xDA.
    pub(crate) fn exec_jp_cc(
        &mut self,
        _mem: &mut MemoryMap,
        opcode: u8,
        operands: &[u8],
    ) -> Result<u32, CoreError> {
        if self.condition((opcode >> 3) & 0x03) {
            self.regs.pc = le16(operands);
            Ok(16)
        } else {
            Ok(12)
        }
    }

    /// JP (HL) (0xE9): jump to the address in HL, not through it.
    pub(crate) fn exec_jp_hl(
        &mut self,
        _mem: &mut MemoryMap,
        _opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        self.regs.pc = self.regs.hl();
        Ok(4)
    }

    /// CALL a16 (0xCD): PC is already past the operands, so it is the
    /// return address.
    pub(crate) fn exec_call(
        &mut self,
        mem: &mut MemoryMap,
        _opcode: u8,
        operands: &[u8],
    ) -> Result<u32, CoreError> {
        let ret = self.regs.pc;
        self.push16(mem, ret);
        self.regs.pc = le16(operands);
        Ok(24)
    }

    /// CALL cc,a16 for 0xC4/0xCC/0xD4/0xDC.
    pub(crate) fn exec_call_cc(
        &mut self,
        mem: &mut MemoryMap,
        opcode: u8,
        operands: &[u8],
    ) -> Result<u32, CoreError> {
        if self.condition((opcode >> 3) & 0x03) {
            let ret = self.regs.pc;
            self.push16(mem, ret);
            self.regs.pc = le16(operands);
            Ok(24)
        } else {
            Ok(12)
        }
    }

    /// RET (0xC9).
    pub(crate) fn exec_ret(
        &mut self,
        mem: &mut MemoryMap,
        _opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        self.regs.pc = self.pop16(mem);
        Ok(16)
    }

    /// RET cc for 0xC0/0xC8/0xD0/0xD8.
    pub(crate) fn exec_ret_cc(
        &mut self,
        mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        if self.condition((opcode >> 3) & 0x03) {
            self.regs.pc = self.pop16(mem);
            Ok(20)
        } else {
            Ok(8)
        }
    }

    /// RETI (0xD9): RET plus interrupt re-enable.
    pub(crate) fn exec_reti(
        &mut self,
        mem: &mut MemoryMap,
        _opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        self.regs.pc = self.pop16(mem);
        self.ime = true;
        Ok(16)
    }

    /// RST nn for 0xC7/0xCF/../0xFF: call to a fixed vector encoded in
    /// bits 3–5 of the opcode.
    pub(crate) fn exec_rst(
        &mut self,
        mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let ret = self.regs.pc;
        self.push16(mem, ret);
        self.regs.pc = (opcode & 0x38) as u16;
        Ok(16)
    }
}
