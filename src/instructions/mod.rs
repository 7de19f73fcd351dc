//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is implemented as a standalone function that takes a mutable reference
//! to the machine and the opcode byte. By the time a handler runs the opcode byte has
//! already been fetched, so PC points at the first operand byte.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{ExecutionError, Machine, Mnemonic, OPCODE_TABLE};

/// Runs the handler for `opcode`.
///
/// Undocumented opcodes have no instruction identity in the table and stop
/// execution with [`ExecutionError::IllegalOpcode`].
pub(crate) fn execute(machine: &mut Machine, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let Some(instruction) = metadata.instruction else {
        return Err(ExecutionError::IllegalOpcode {
            opcode,
            address: machine.cpu.pc.wrapping_sub(1),
        });
    };

    match instruction {
        Mnemonic::Adc => alu::execute_adc(machine, opcode),
        Mnemonic::And => alu::execute_and(machine, opcode),
        Mnemonic::Asl => shifts::execute_asl(machine, opcode),
        Mnemonic::Bcc => branches::execute_bcc(machine, opcode),
        Mnemonic::Bcs => branches::execute_bcs(machine, opcode),
        Mnemonic::Beq => branches::execute_beq(machine, opcode),
        Mnemonic::Bit => alu::execute_bit(machine, opcode),
        Mnemonic::Bmi => branches::execute_bmi(machine, opcode),
        Mnemonic::Bne => branches::execute_bne(machine, opcode),
        Mnemonic::Bpl => branches::execute_bpl(machine, opcode),
        Mnemonic::Brk => control::execute_brk(machine, opcode),
        Mnemonic::Bvc => branches::execute_bvc(machine, opcode),
        Mnemonic::Bvs => branches::execute_bvs(machine, opcode),
        Mnemonic::Clc => flags::execute_clc(machine, opcode),
        Mnemonic::Cld => flags::execute_cld(machine, opcode),
        Mnemonic::Cli => flags::execute_cli(machine, opcode),
        Mnemonic::Clv => flags::execute_clv(machine, opcode),
        Mnemonic::Cmp => alu::execute_cmp(machine, opcode),
        Mnemonic::Cpx => alu::execute_cpx(machine, opcode),
        Mnemonic::Cpy => alu::execute_cpy(machine, opcode),
        Mnemonic::Dec => inc_dec::execute_dec(machine, opcode),
        Mnemonic::Dex => inc_dec::execute_dex(machine, opcode),
        Mnemonic::Dey => inc_dec::execute_dey(machine, opcode),
        Mnemonic::Eor => alu::execute_eor(machine, opcode),
        Mnemonic::Inc => inc_dec::execute_inc(machine, opcode),
        Mnemonic::Inx => inc_dec::execute_inx(machine, opcode),
        Mnemonic::Iny => inc_dec::execute_iny(machine, opcode),
        Mnemonic::Jmp => control::execute_jmp(machine, opcode),
        Mnemonic::Jsr => control::execute_jsr(machine, opcode),
        Mnemonic::Lda => load_store::execute_lda(machine, opcode),
        Mnemonic::Ldx => load_store::execute_ldx(machine, opcode),
        Mnemonic::Ldy => load_store::execute_ldy(machine, opcode),
        Mnemonic::Lsr => shifts::execute_lsr(machine, opcode),
        Mnemonic::Nop => control::execute_nop(machine, opcode),
        Mnemonic::Ora => alu::execute_ora(machine, opcode),
        Mnemonic::Pha => stack::execute_pha(machine, opcode),
        Mnemonic::Php => stack::execute_php(machine, opcode),
        Mnemonic::Pla => stack::execute_pla(machine, opcode),
        Mnemonic::Plp => stack::execute_plp(machine, opcode),
        Mnemonic::Rol => shifts::execute_rol(machine, opcode),
        Mnemonic::Ror => shifts::execute_ror(machine, opcode),
        Mnemonic::Rti => control::execute_rti(machine, opcode),
        Mnemonic::Rts => control::execute_rts(machine, opcode),
        Mnemonic::Sbc => alu::execute_sbc(machine, opcode),
        Mnemonic::Sec => flags::execute_sec(machine, opcode),
        Mnemonic::Sed => flags::execute_sed(machine, opcode),
        Mnemonic::Sei => flags::execute_sei(machine, opcode),
        Mnemonic::Sta => load_store::execute_sta(machine, opcode),
        Mnemonic::Stx => load_store::execute_stx(machine, opcode),
        Mnemonic::Sty => load_store::execute_sty(machine, opcode),
        Mnemonic::Tax => transfer::execute_tax(machine, opcode),
        Mnemonic::Tay => transfer::execute_tay(machine, opcode),
        Mnemonic::Tsx => transfer::execute_tsx(machine, opcode),
        Mnemonic::Txa => transfer::execute_txa(machine, opcode),
        Mnemonic::Txs => transfer::execute_txs(machine, opcode),
        Mnemonic::Tya => transfer::execute_tya(machine, opcode),
    }
}
