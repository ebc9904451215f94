//! Opcode descriptor tables.
//!
//! Two fixed 256-entry tables cover the full 512-entry opcode space: the
//! base page and the 0xCB-prefixed extended page. Both are built once by
//! an explicit builder and are immutable afterwards; lookup is a plain
//! index. Handlers share one uniform signature and never depend on
//! registration order.

mod alu;
mod cb;
mod control;
mod incdec;
mod ld;
mod rotate;
mod stack;
mod system;

use lazy_static::lazy_static;

use crate::error::CoreError;
use crate::memory::MemoryMap;

use super::Cpu;

/// Uniform handler signature: the executing CPU, the memory map, the
/// opcode byte itself (grouped handlers decode their target from it), and
/// the trailing operand bytes. Returns elapsed T-states.
pub type OpcodeFn = fn(&mut Cpu, &mut MemoryMap, u8, &[u8]) -> Result<u32, CoreError>;

/// Mnemonic carried by unregistered slots.
pub(crate) const UNKNOWN_MNEMONIC: &str = "???";

/// Immutable descriptor for one opcode slot.
#[derive(Clone, Copy, Debug)]
pub struct Instruction {
    pub opcode: u8,
    /// Total encoded length in bytes, the opcode itself included (1–3).
    /// Extended-page entries are 1: their prefix byte lives in the base
    /// table's 0xCB descriptor.
    pub length: u8,
    pub mnemonic: &'static str,
    pub exec: OpcodeFn,
}

impl Instruction {
    /// False for the sentinel occupying intentionally-unassigned slots.
    pub fn is_implemented(&self) -> bool {
        self.mnemonic != UNKNOWN_MNEMONIC
    }
}

/// Sentinel handler: every unassigned slot fails loudly instead of
/// silently skipping a byte the real hardware would choke on.
fn exec_unknown(
    cpu: &mut Cpu,
    _mem: &mut MemoryMap,
    opcode: u8,
    _operands: &[u8],
) -> Result<u32, CoreError> {
    // PC has already advanced past the opcode byte.
    Err(CoreError::UnknownInstruction {
        opcode,
        addr: cpu.regs.pc.wrapping_sub(1),
    })
}

/// One-shot table builder: each opcode may be registered exactly once;
/// whatever is left unregistered lands on the sentinel.
struct TableBuilder {
    entries: [Option<Instruction>; 256],
}

impl TableBuilder {
    fn new() -> Self {
        Self {
            entries: [None; 256],
        }
    }

    fn op(&mut self, opcode: u8, length: u8, mnemonic: &'static str, exec: OpcodeFn) {
        assert!((1..=3).contains(&length), "bad length for 0x{opcode:02X}");
        let slot = &mut self.entries[opcode as usize];
        assert!(slot.is_none(), "opcode 0x{opcode:02X} registered twice");
        *slot = Some(Instruction {
            opcode,
            length,
            mnemonic,
            exec,
        });
    }

    fn finish(self) -> [Instruction; 256] {
        std::array::from_fn(|i| {
            self.entries[i].unwrap_or(Instruction {
                opcode: i as u8,
                length: 1,
                mnemonic: UNKNOWN_MNEMONIC,
                exec: exec_unknown,
            })
        })
    }
}

lazy_static! {
    /// The base opcode page. 245 slots are populated; the 11 hardware
    /// opcode holes (0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED,
    /// 0xF4, 0xFC, 0xFD) intentionally stay on the sentinel.
    pub static ref BASE: [Instruction; 256] = base_table();

    /// The 0xCB-prefixed page, generated from the sub-opcode's bit
    /// fields. Fully populated.
    pub static ref EXTENDED: [Instruction; 256] = extended_table();
}

fn base_table() -> [Instruction; 256] {
    let mut t = TableBuilder::new();

    // 0x00–0x0F
    t.op(0x00, 1, "NOP", Cpu::exec_nop);
    t.op(0x01, 3, "LD BC,d16", Cpu::exec_ld_rr_d16);
    t.op(0x02, 1, "LD (BC),A", Cpu::exec_ld_rp_a);
    t.op(0x03, 1, "INC BC", Cpu::exec_inc16);
    t.op(0x04, 1, "INC B", Cpu::exec_inc8);
    t.op(0x05, 1, "DEC B", Cpu::exec_dec8);
    t.op(0x06, 2, "LD B,d8", Cpu::exec_ld_r_d8);
    t.op(0x07, 1, "RLCA", Cpu::exec_rotate_a);
    t.op(0x08, 3, "LD (a16),SP", Cpu::exec_ld_a16_sp);
    t.op(0x09, 1, "ADD HL,BC", Cpu::exec_add_hl_rr);
    t.op(0x0A, 1, "LD A,(BC)", Cpu::exec_ld_a_rp);
    t.op(0x0B, 1, "DEC BC", Cpu::exec_dec16);
    t.op(0x0C, 1, "INC C", Cpu::exec_inc8);
    t.op(0x0D, 1, "DEC C", Cpu::exec_dec8);
    t.op(0x0E, 2, "LD C,d8", Cpu::exec_ld_r_d8);
    t.op(0x0F, 1, "RRCA", Cpu::exec_rotate_a);

    // 0x10–0x1F
    t.op(0x10, 2, "STOP", Cpu::exec_stop);
    t.op(0x11, 3, "LD DE,d16", Cpu::exec_ld_rr_d16);
    t.op(0x12, 1, "LD (DE),A", Cpu::exec_ld_rp_a);
    t.op(0x13, 1, "INC DE", Cpu::exec_inc16);
    t.op(0x14, 1, "INC D", Cpu::exec_inc8);
    t.op(0x15, 1, "DEC D", Cpu::exec_dec8);
    t.op(0x16, 2, "LD D,d8", Cpu::exec_ld_r_d8);
    t.op(0x17, 1, "RLA", Cpu::exec_rotate_a);
    t.op(0x18, 2, "JR r8", Cpu::exec_jr);
    t.op(0x19, 1, "ADD HL,DE", Cpu::exec_add_hl_rr);
    t.op(0x1A, 1, "LD A,(DE)", Cpu::exec_ld_a_rp);
    t.op(0x1B, 1, "DEC DE", Cpu::exec_dec16);
    t.op(0x1C, 1, "INC E", Cpu::exec_inc8);
    t.op(0x1D, 1, "DEC E", Cpu::exec_dec8);
    t.op(0x1E, 2, "LD E,d8", Cpu::exec_ld_r_d8);
    t.op(0x1F, 1, "RRA", Cpu::exec_rotate_a);

    // 0x20–0x2F
    t.op(0x20, 2, "JR NZ,r8", Cpu::exec_jr_cc);
    t.op(0x21, 3, "LD HL,d16", Cpu::exec_ld_rr_d16);
    t.op(0x22, 1, "LD (HL+),A", Cpu::exec_ld_rp_a);
    t.op(0x23, 1, "INC HL", Cpu::exec_inc16);
    t.op(0x24, 1, "INC H", Cpu::exec_inc8);
    t.op(0x25, 1, "DEC H", Cpu::exec_dec8);
    t.op(0x26, 2, "LD H,d8", Cpu::exec_ld_r_d8);
    t.op(0x27, 1, "DAA", Cpu::exec_daa);
    t.op(0x28, 2, "JR Z,r8", Cpu::exec_jr_cc);
    t.op(0x29, 1, "ADD HL,HL", Cpu::exec_add_hl_rr);
    t.op(0x2A, 1, "LD A,(HL+)", Cpu::exec_ld_a_rp);
    t.op(0x2B, 1, "DEC HL", Cpu::exec_dec16);
    t.op(0x2C, 1, "INC L", Cpu::exec_inc8);
    t.op(0x2D, 1, "DEC L", Cpu::exec_dec8);
    t.op(0x2E, 2, "LD L,d8", Cpu::exec_ld_r_d8);
    t.op(0x2F, 1, "CPL", Cpu::exec_cpl);

    // 0x30–0x3F
    t.op(0x30, 2, "JR NC,r8", Cpu::exec_jr_cc);
    t.op(0x31, 3, "LD SP,d16", Cpu::exec_ld_rr_d16);
    t.op(0x32, 1, "LD (HL-),A", Cpu::exec_ld_rp_a);
    t.op(0x33, 1, "INC SP", Cpu::exec_inc16);
    t.op(0x34, 1, "INC (HL)", Cpu::exec_inc8);
    t.op(0x35, 1, "DEC (HL)", Cpu::exec_dec8);
    t.op(0x36, 2, "LD (HL),d8", Cpu::exec_ld_r_d8);
    t.op(0x37, 1, "SCF", Cpu::exec_scf);
    t.op(0x38, 2, "JR C,r8", Cpu::exec_jr_cc);
    t.op(0x39, 1, "ADD HL,SP", Cpu::exec_add_hl_rr);
    t.op(0x3A, 1, "LD A,(HL-)", Cpu::exec_ld_a_rp);
    t.op(0x3B, 1, "DEC SP", Cpu::exec_dec16);
    t.op(0x3C, 1, "INC A", Cpu::exec_inc8);
    t.op(0x3D, 1, "DEC A", Cpu::exec_dec8);
    t.op(0x3E, 2, "LD A,d8", Cpu::exec_ld_r_d8);
    t.op(0x3F, 1, "CCF", Cpu::exec_ccf);

    // 0x40–0x7F: the register transfer block, with HALT in the middle.
    t.op(0x40, 1, "LD B,B", Cpu::exec_ld_r_r);
    t.op(0x41, 1, "LD B,C", Cpu::exec_ld_r_r);
    t.op(0x42, 1, "LD B,D", Cpu::exec_ld_r_r);
    t.op(0x43, 1, "LD B,E", Cpu::exec_ld_r_r);
    t.op(0x44, 1, "LD B,H", Cpu::exec_ld_r_r);
    t.op(0x45, 1, "LD B,L", Cpu::exec_ld_r_r);
    t.op(0x46, 1, "LD B,(HL)", Cpu::exec_ld_r_r);
    t.op(0x47, 1, "LD B,A", Cpu::exec_ld_r_r);
    t.op(0x48, 1, "LD C,B", Cpu::exec_ld_r_r);
    t.op(0x49, 1, "LD C,C", Cpu::exec_ld_r_r);
    t.op(0x4A, 1, "LD C,D", Cpu::exec_ld_r_r);
    t.op(0x4B, 1, "LD C,E", Cpu::exec_ld_r_r);
    t.op(0x4C, 1, "LD C,H", Cpu::exec_ld_r_r);
    t.op(0x4D, 1, "LD C,L", Cpu::exec_ld_r_r);
    t.op(0x4E, 1, "LD C,(HL)", Cpu::exec_ld_r_r);
    t.op(0x4F, 1, "LD C,A", Cpu::exec_ld_r_r);
    t.op(0x50, 1, "LD D,B", Cpu::exec_ld_r_r);
    t.op(0x51, 1, "LD D,C", Cpu::exec_ld_r_r);
    t.op(0x52, 1, "LD D,D", Cpu::exec_ld_r_r);
    t.op(0x53, 1, "LD D,E", Cpu::exec_ld_r_r);
    t.op(0x54, 1, "LD D,H", Cpu::exec_ld_r_r);
    t.op(0x55, 1, "LD D,L", Cpu::exec_ld_r_r);
    t.op(0x56, 1, "LD D,(HL)", Cpu::exec_ld_r_r);
    t.op(0x57, 1, "LD D,A", Cpu::exec_ld_r_r);
    t.op(0x58, 1, "LD E,B", Cpu::exec_ld_r_r);
    t.op(0x59, 1, "LD E,C", Cpu::exec_ld_r_r);
    t.op(0x5A, 1, "LD E,D", Cpu::exec_ld_r_r);
    t.op(0x5B, 1, "LD E,E", Cpu::exec_ld_r_r);
    t.op(0x5C, 1, "LD E,H", Cpu::exec_ld_r_r);
    t.op(0x5D, 1, "LD E,L", Cpu::exec_ld_r_r);
    t.op(0x5E, 1, "LD E,(HL)", Cpu::exec_ld_r_r);
    t.op(0x5F, 1, "LD E,A", Cpu::exec_ld_r_r);
    t.op(0x60, 1, "LD H,B", Cpu::exec_ld_r_r);
    t.op(0x61, 1, "LD H,C", Cpu::exec_ld_r_r);
    t.op(0x62, 1, "LD H,D", Cpu::exec_ld_r_r);
    t.op(0x63, 1, "LD H,E", Cpu::exec_ld_r_r);
    t.op(0x64, 1, "LD H,H", Cpu::exec_ld_r_r);
    t.op(0x65, 1, "LD H,L", Cpu::exec_ld_r_r);
    t.op(0x66, 1, "LD H,(HL)", Cpu::exec_ld_r_r);
    t.op(0x67, 1, "LD H,A", Cpu::exec_ld_r_r);
    t.op(0x68, 1, "LD L,B", Cpu::exec_ld_r_r);
    t.op(0x69, 1, "LD L,C", Cpu::exec_ld_r_r);
    t.op(0x6A, 1, "LD L,D", Cpu::exec_ld_r_r);
    t.op(0x6B, 1, "LD L,E", Cpu::exec_ld_r_r);
    t.op(0x6C, 1, "LD L,H", Cpu::exec_ld_r_r);
    t.op(0x6D, 1, "LD L,L", Cpu::exec_ld_r_r);
    t.op(0x6E, 1, "LD L,(HL)", Cpu::exec_ld_r_r);
    t.op(0x6F, 1, "LD L,A", Cpu::exec_ld_r_r);
    t.op(0x70, 1, "LD (HL),B", Cpu::exec_ld_r_r);
    t.op(0x71, 1, "LD (HL),C", Cpu::exec_ld_r_r);
    t.op(0x72, 1, "LD (HL),D", Cpu::exec_ld_r_r);
    t.op(0x73, 1, "LD (HL),E", Cpu::exec_ld_r_r);
    t.op(0x74, 1, "LD (HL),H", Cpu::exec_ld_r_r);
    t.op(0x75, 1, "LD (HL),L", Cpu::exec_ld_r_r);
    t.op(0x76, 1, "HALT", Cpu::exec_halt);
    t.op(0x77, 1, "LD (HL),A", Cpu::exec_ld_r_r);
    t.op(0x78, 1, "LD A,B", Cpu::exec_ld_r_r);
    t.op(0x79, 1, "LD A,C", Cpu::exec_ld_r_r);
    t.op(0x7A, 1, "LD A,D", Cpu::exec_ld_r_r);
    t.op(0x7B, 1, "LD A,E", Cpu::exec_ld_r_r);
    t.op(0x7C, 1, "LD A,H", Cpu::exec_ld_r_r);
    t.op(0x7D, 1, "LD A,L", Cpu::exec_ld_r_r);
    t.op(0x7E, 1, "LD A,(HL)", Cpu::exec_ld_r_r);
    t.op(0x7F, 1, "LD A,A", Cpu::exec_ld_r_r);

    // 0x80–0xBF: accumulator ALU block.
    t.op(0x80, 1, "ADD A,B", Cpu::exec_alu_r);
    t.op(0x81, 1, "ADD A,C", Cpu::exec_alu_r);
    t.op(0x82, 1, "ADD A,D", Cpu::exec_alu_r);
    t.op(0x83, 1, "ADD A,E", Cpu::exec_alu_r);
    t.op(0x84, 1, "ADD A,H", Cpu::exec_alu_r);
    t.op(0x85, 1, "ADD A,L", Cpu::exec_alu_r);
    t.op(0x86, 1, "ADD A,(HL)", Cpu::exec_alu_r);
    t.op(0x87, 1, "ADD A,A", Cpu::exec_alu_r);
    t.op(0x88, 1, "ADC A,B", Cpu::exec_alu_r);
    t.op(0x89, 1, "ADC A,C", Cpu::exec_alu_r);
    t.op(0x8A, 1, "ADC A,D", Cpu::exec_alu_r);
    t.op(0x8B, 1, "ADC A,E", Cpu::exec_alu_r);
    t.op(0x8C, 1, "ADC A,H", Cpu::exec_alu_r);
    t.op(0x8D, 1, "ADC A,L", Cpu::exec_alu_r);
    t.op(0x8E, 1, "ADC A,(HL)", Cpu::exec_alu_r);
    t.op(0x8F, 1, "ADC A,A", Cpu::exec_alu_r);
    t.op(0x90, 1, "SUB B", Cpu::exec_alu_r);
    t.op(0x91, 1, "SUB C", Cpu::exec_alu_r);
    t.op(0x92, 1, "SUB D", Cpu::exec_alu_r);
    t.op(0x93, 1, "SUB E", Cpu::exec_alu_r);
    t.op(0x94, 1, "SUB H", Cpu::exec_alu_r);
    t.op(0x95, 1, "SUB L", Cpu::exec_alu_r);
    t.op(0x96, 1, "SUB (HL)", Cpu::exec_alu_r);
    t.op(0x97, 1, "SUB A", Cpu::exec_alu_r);
    t.op(0x98, 1, "SBC A,B", Cpu::exec_alu_r);
    t.op(0x99, 1, "SBC A,C", Cpu::exec_alu_r);
    t.op(0x9A, 1, "SBC A,D", Cpu::exec_alu_r);
    t.op(0x9B, 1, "SBC A,E", Cpu::exec_alu_r);
    t.op(0x9C, 1, "SBC A,H", Cpu::exec_alu_r);
    t.op(0x9D, 1, "SBC A,L", Cpu::exec_alu_r);
    t.op(0x9E, 1, "SBC A,(HL)", Cpu::exec_alu_r);
    t.op(0x9F, 1, "SBC A,A", Cpu::exec_alu_r);
    t.op(0xA0, 1, "AND B", Cpu::exec_alu_r);
    t.op(0xA1, 1, "AND C", Cpu::exec_alu_r);
    t.op(0xA2, 1, "AND D", Cpu::exec_alu_r);
    t.op(0xA3, 1, "AND E", Cpu::exec_alu_r);
    t.op(0xA4, 1, "AND H", Cpu::exec_alu_r);
    t.op(0xA5, 1, "AND L", Cpu::exec_alu_r);
    t.op(0xA6, 1, "AND (HL)", Cpu::exec_alu_r);
    t.op(0xA7, 1, "AND A", Cpu::exec_alu_r);
    t.op(0xA8, 1, "XOR B", Cpu::exec_alu_r);
    t.op(0xA9, 1, "XOR C", Cpu::exec_alu_r);
    t.op(0xAA, 1, "XOR D", Cpu::exec_alu_r);
    t.op(0xAB, 1, "XOR E", Cpu::exec_alu_r);
    t.op(0xAC, 1, "XOR H", Cpu::exec_alu_r);
    t.op(0xAD, 1, "XOR L", Cpu::exec_alu_r);
    t.op(0xAE, 1, "XOR (HL)", Cpu::exec_alu_r);
    t.op(0xAF, 1, "XOR A", Cpu::exec_alu_r);
    t.op(0xB0, 1, "OR B", Cpu::exec_alu_r);
    t.op(0xB1, 1, "OR C", Cpu::exec_alu_r);
    t.op(0xB2, 1, "OR D", Cpu::exec_alu_r);
    t.op(0xB3, 1, "OR E", Cpu::exec_alu_r);
    t.op(0xB4, 1, "OR H", Cpu::exec_alu_r);
    t.op(0xB5, 1, "OR L", Cpu::exec_alu_r);
    t.op(0xB6, 1, "OR (HL)", Cpu::exec_alu_r);
    t.op(0xB7, 1, "OR A", Cpu::exec_alu_r);
    t.op(0xB8, 1, "CP B", Cpu::exec_alu_r);
    t.op(0xB9, 1, "CP C", Cpu::exec_alu_r);
    t.op(0xBA, 1, "CP D", Cpu::exec_alu_r);
    t.op(0xBB, 1, "CP E", Cpu::exec_alu_r);
    t.op(0xBC, 1, "CP H", Cpu::exec_alu_r);
    t.op(0xBD, 1, "CP L", Cpu::exec_alu_r);
    t.op(0xBE, 1, "CP (HL)", Cpu::exec_alu_r);
    t.op(0xBF, 1, "CP A", Cpu::exec_alu_r);

    // 0xC0–0xFF: control flow, stack ops, immediates, high-page loads.
    // 0xD3/0xDB/0xDD/0xE3/0xE4/0xEB/0xEC/0xED/0xF4/0xFC/0xFD are
    // hardware holes and stay unregistered.
    t.op(0xC0, 1, "RET NZ", Cpu::exec_ret_cc);
    t.op(0xC1, 1, "POP BC", Cpu::exec_pop);
    t.op(0xC2, 3, "JP NZ,a16", Cpu::exec_jp_cc);
    t.op(0xC3, 3, "JP a16", Cpu::exec_jp);
    t.op(0xC4, 3, "CALL NZ,a16", Cpu::exec_call_cc);
    t.op(0xC5, 1, "PUSH BC", Cpu::exec_push);
    t.op(0xC6, 2, "ADD A,d8", Cpu::exec_alu_d8);
    t.op(0xC7, 1, "RST 00H", Cpu::exec_rst);
    t.op(0xC8, 1, "RET Z", Cpu::exec_ret_cc);
    t.op(0xC9, 1, "RET", Cpu::exec_ret);
    t.op(0xCA, 3, "JP Z,a16", Cpu::exec_jp_cc);
    t.op(0xCB, 2, "PREFIX CB", Cpu::exec_cb_prefix);
    t.op(0xCC, 3, "CALL Z,a16", Cpu::exec_call_cc);
    t.op(0xCD, 3, "CALL a16", Cpu::exec_call);
    t.op(0xCE, 2, "ADC A,d8", Cpu::exec_alu_d8);
    t.op(0xCF, 1, "RST 08H", Cpu::exec_rst);
    t.op(0xD0, 1, "RET NC", Cpu::exec_ret_cc);
    t.op(0xD1, 1, "POP DE", Cpu::exec_pop);
    t.op(0xD2, 3, "JP NC,a16", Cpu::exec_jp_cc);
    t.op(0xD4, 3, "CALL NC,a16", Cpu::exec_call_cc);
    t.op(0xD5, 1, "PUSH DE", Cpu::exec_push);
    t.op(0xD6, 2, "SUB d8", Cpu::exec_alu_d8);
    t.op(0xD7, 1, "RST 10H", Cpu::exec_rst);
    t.op(0xD8, 1, "RET C", Cpu::exec_ret_cc);
    t.op(0xD9, 1, "RETI", Cpu::exec_reti);
    t.op(0xDA, 3, "JP C,a16", Cpu::exec_jp_cc);
    t.op(0xDC, 3, "CALL C,a16", Cpu::exec_call_cc);
    t.op(0xDE, 2, "SBC A,d8", Cpu::exec_alu_d8);
    t.op(0xDF, 1, "RST 18H", Cpu::exec_rst);
    t.op(0xE0, 2, "LDH (a8),A", Cpu::exec_ldh_a8);
    t.op(0xE1, 1, "POP HL", Cpu::exec_pop);
    t.op(0xE2, 1, "LD (C),A", Cpu::exec_ldh_c);
    t.op(0xE5, 1, "PUSH HL", Cpu::exec_push);
    t.op(0xE6, 2, "AND d8", Cpu::exec_alu_d8);
    t.op(0xE7, 1, "RST 20H", Cpu::exec_rst);
    t.op(0xE8, 2, "ADD SP,r8", Cpu::exec_add_sp_r8);
    t.op(0xE9, 1, "JP (HL)", Cpu::exec_jp_hl);
    t.op(0xEA, 3, "LD (a16),A", Cpu::exec_ld_a16_a);
    t.op(0xEE, 2, "XOR d8", Cpu::exec_alu_d8);
    t.op(0xEF, 1, "RST 28H", Cpu::exec_rst);
    t.op(0xF0, 2, "LDH A,(a8)", Cpu::exec_ldh_a8);
    t.op(0xF1, 1, "POP AF", Cpu::exec_pop);
    t.op(0xF2, 1, "LD A,(C)", Cpu::exec_ldh_c);
    t.op(0xF3, 1, "DI", Cpu::exec_di);
    t.op(0xF5, 1, "PUSH AF", Cpu::exec_push);
    t.op(0xF6, 2, "OR d8", Cpu::exec_alu_d8);
    t.op(0xF7, 1, "RST 30H", Cpu::exec_rst);
    t.op(0xF8, 2, "LD HL,SP+r8", Cpu::exec_ld_hl_sp_r8);
    t.op(0xF9, 1, "LD SP,HL", Cpu::exec_ld_sp_hl);
    t.op(0xFA, 3, "LD A,(a16)", Cpu::exec_ld_a16_a);
    t.op(0xFB, 1, "EI", Cpu::exec_ei);
    t.op(0xFE, 2, "CP d8", Cpu::exec_alu_d8);
    t.op(0xFF, 1, "RST 38H", Cpu::exec_rst);

    t.finish()
}

/// The extended page is regular enough to generate: the top two bits pick
/// the quadrant, bits 3–5 the operation (or bit number), bits 0–2 the
/// target register. Group mnemonics stand in for the decoded operand.
fn extended_table() -> [Instruction; 256] {
    std::array::from_fn(|i| {
        let opcode = i as u8;
        let (mnemonic, exec): (&'static str, OpcodeFn) = match opcode >> 6 {
            0 => (
                match (opcode >> 3) & 0x07 {
                    0 => "RLC r8",
                    1 => "RRC r8",
                    2 => "RL r8",
                    3 => "RR r8",
                    4 => "SLA r8",
                    5 => "SRA r8",
                    6 => "SWAP r8",
                    _ => "SRL r8",
                },
                Cpu::exec_cb_rotshift,
            ),
            1 => ("BIT b,r8", Cpu::exec_cb_bit),
            2 => ("RES b,r8", Cpu::exec_cb_res),
            _ => ("SET b,r8", Cpu::exec_cb_set),
        };
        Instruction {
            opcode,
            length: 1,
            mnemonic,
            exec,
        }
    })
}
