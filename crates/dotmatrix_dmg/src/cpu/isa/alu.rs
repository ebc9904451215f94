use crate::cpu::{Cpu, Flags};
use crate::error::CoreError;
use crate::memory::MemoryMap;

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = if use_carry && self.regs.f.contains(Flags::C) {
            1u8
        } else {
            0
        };

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = (a as u16) + (value as u16) + (carry_in as u16);
        let result = full as u8;

        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::H, (half & 0x10) != 0);
        self.set_flag(Flags::C, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = if use_carry && self.regs.f.contains(Flags::C) {
            1i16
        } else {
            0
        };

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, half < 0);
        self.set_flag(Flags::C, full < 0);
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::H, true);
        // N and C are already cleared.
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
    }

    /// Compare A with `value`, setting flags as if `A - value` was
    /// performed. A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a;
        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16;
        let full = a as i16 - value as i16;
        let result = full as u8;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, half < 0);
        self.set_flag(Flags::C, full < 0);
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged. H is set exactly when
    /// the low nibble of the pre-increment value was 0xF.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged. H is set exactly when
    /// the low nibble of the pre-decrement value was 0x0.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, (value & 0x0F) == 0);
        result
    }

    /// 16-bit add helper for `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H and C come from bit 11 / bit 15
    /// of the addition, computed from the pre-wrap operands; masking the
    /// wrapped sum cannot recover the original carry.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flags::C, (hl as u32) + (value as u32) > 0xFFFF);

        self.regs.set_hl(result);
    }

    /// 16-bit add helper for instructions that add a signed 8-bit
    /// immediate to a 16-bit base (ADD SP,r8 and LD HL,SP+r8).
    ///
    /// Z and N are cleared; H and C are computed from the low byte.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.set_flag(Flags::Z, false);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(Flags::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// Dispatch one of the eight accumulator operations by index:
    /// 0=ADD, 1=ADC, 2=SUB, 3=SBC, 4=AND, 5=XOR, 6=OR, 7=CP.
    fn alu_apply(&mut self, op: u8, value: u8) {
        match op & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r for opcodes 0x80–0xBF.
    pub(crate) fn exec_alu_r(
        &mut self,
        mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let src = opcode & 0x07;
        let value = self.read_r8(mem, src);
        self.alu_apply((opcode >> 3) & 0x07, value);
        Ok(if src == 6 { 8 } else { 4 })
    }

    /// The d8 immediate forms of the same eight operations.
    pub(crate) fn exec_alu_d8(
        &mut self,
        _mem: &mut MemoryMap,
        opcode: u8,
        operands: &[u8],
    ) -> Result<u32, CoreError> {
        self.alu_apply((opcode >> 3) & 0x07, operands[0]);
        Ok(8)
    }

    /// ADD HL,rr for opcodes 0x09/0x19/0x29/0x39.
    pub(crate) fn exec_add_hl_rr(
        &mut self,
        _mem: &mut MemoryMap,
        opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let value = self.read_rp((opcode >> 4) & 0x03);
        self.alu_add16_hl(value);
        Ok(8)
    }

    /// ADD SP,r8 (0xE8).
    pub(crate) fn exec_add_sp_r8(
        &mut self,
        _mem: &mut MemoryMap,
        _opcode: u8,
        operands: &[u8],
    ) -> Result<u32, CoreError> {
        self.regs.sp = self.alu_add16_signed(self.regs.sp, operands[0]);
        Ok(16)
    }

    /// Decimal adjust accumulator after BCD addition/subtraction (0x27).
    ///
    /// Uses C, H, N, and A to compute a correction value; updates A, Z,
    /// H, C and leaves N unchanged.
    pub(crate) fn exec_daa(
        &mut self,
        _mem: &mut MemoryMap,
        _opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.regs.f.contains(Flags::C) {
            0x60
        } else {
            0x00
        };
        if self.regs.f.contains(Flags::H) {
            adjust |= 0x06;
        }

        if !self.regs.f.contains(Flags::N) {
            // After an addition.
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            // After a subtraction.
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flags::C, adjust >= 0x60);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::Z, a == 0);
        self.regs.a = a;
        Ok(4)
    }

    /// CPL (0x2F): invert A; set N and H, leave Z and C alone.
    pub(crate) fn exec_cpl(
        &mut self,
        _mem: &mut MemoryMap,
        _opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        self.regs.a = !self.regs.a;
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, true);
        Ok(4)
    }

    /// SCF (0x37): set carry; clear N and H.
    pub(crate) fn exec_scf(
        &mut self,
        _mem: &mut MemoryMap,
        _opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::C, true);
        Ok(4)
    }

    /// CCF (0x3F): toggle carry; clear N and H.
    pub(crate) fn exec_ccf(
        &mut self,
        _mem: &mut MemoryMap,
        _opcode: u8,
        _operands: &[u8],
    ) -> Result<u32, CoreError> {
        let carry = self.regs.f.contains(Flags::C);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::C, !carry);
        Ok(4)
    }
}
