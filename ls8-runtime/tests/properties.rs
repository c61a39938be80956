//! Property tests for machine invariants

use ls8_loader::encode_program;
use ls8_runtime::execute::{pop, push};
use ls8_runtime::{Flags, Memory, VMConfig, VMState, VM};
use ls8_spec::{Instruction, Register, STACK_TOP};
use proptest::prelude::*;

fn general_register() -> impl Strategy<Value = Register> {
    (0usize..7).prop_map(|i| Register::from_index(i).unwrap())
}

fn run_outputs(instructions: &[Instruction]) -> Vec<u8> {
    let program = encode_program(instructions).unwrap();
    let mut vm = VM::new(program, VMConfig::default());
    vm.run().unwrap().outputs
}

proptest! {
    #[test]
    fn test_ldi_prn_echoes_value(reg in general_register(), value in any::<u8>()) {
        let outputs = run_outputs(&[
            Instruction::Ldi { reg, value },
            Instruction::Prn { reg },
            Instruction::Hlt,
        ]);
        prop_assert_eq!(outputs, vec![value]);
    }

    #[test]
    fn test_add_and_mul_wrap(a in any::<u8>(), b in any::<u8>()) {
        let outputs = run_outputs(&[
            Instruction::Ldi { reg: Register::R0, value: a },
            Instruction::Ldi { reg: Register::R1, value: b },
            Instruction::Add { reg_a: Register::R0, reg_b: Register::R1 },
            Instruction::Prn { reg: Register::R0 },
            Instruction::Ldi { reg: Register::R2, value: a },
            Instruction::Mul { reg_a: Register::R2, reg_b: Register::R1 },
            Instruction::Prn { reg: Register::R2 },
            Instruction::Hlt,
        ]);
        let sum = ((a as u16 + b as u16) % 256) as u8;
        let product = ((a as u16 * b as u16) % 256) as u8;
        prop_assert_eq!(outputs, vec![sum, product]);
    }

    #[test]
    fn test_cmp_sets_exactly_one_flag(a in any::<u8>(), b in any::<u8>()) {
        let flags = Flags::compare(a, b);
        let set = [flags.equal, flags.less, flags.greater]
            .iter()
            .filter(|f| **f)
            .count();
        prop_assert_eq!(set, 1);
        prop_assert_eq!(flags.equal, a == b);
        prop_assert_eq!(flags.less, a < b);
    }

    #[test]
    fn test_push_pop_restores_sp(values in proptest::collection::vec(any::<u8>(), 1..32)) {
        let mut state = VMState::new();
        let mut memory = Memory::new();
        state.set_sp(STACK_TOP);

        for &v in &values {
            push(&mut state, &mut memory, v);
        }
        prop_assert_eq!(state.sp(), STACK_TOP.wrapping_sub(values.len() as u8));

        for &v in values.iter().rev() {
            prop_assert_eq!(pop(&mut state, &mut memory), v);
        }
        prop_assert_eq!(state.sp(), STACK_TOP);
    }

    #[test]
    fn test_push_pop_same_register_is_identity(
        reg in general_register(),
        value in any::<u8>(),
        clobber in any::<u8>(),
    ) {
        let program = encode_program(&[
            Instruction::Ldi { reg, value },
            Instruction::Push { reg },
            Instruction::Ldi { reg, value: clobber },
            Instruction::Pop { reg },
            Instruction::Hlt,
        ])
        .unwrap();
        let mut vm = VM::new(program, VMConfig::default());
        vm.run().unwrap();

        prop_assert_eq!(vm.state().read_reg(reg), value);
        prop_assert_eq!(vm.state().sp(), STACK_TOP);
    }

    #[test]
    fn test_straight_line_pc_is_sum_of_lengths(count in 1usize..40) {
        let mut instructions: Vec<Instruction> = (0..count)
            .map(|i| Instruction::Ldi { reg: Register::R0, value: i as u8 })
            .collect();
        instructions.push(Instruction::Hlt);

        let program = encode_program(&instructions).unwrap();
        let mut vm = VM::new(program, VMConfig::default());
        let result = vm.run().unwrap();

        prop_assert_eq!(result.cycles, count as u64 + 1);
        prop_assert_eq!(vm.state().pc as usize, count * 3 + 1);
    }

    #[test]
    fn test_arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let program = ls8_spec::Program::new(bytes).unwrap();
        let config = VMConfig { max_cycles: Some(500), ..VMConfig::default() };
        let mut vm = VM::new(program, config);
        let _ = vm.run();
        prop_assert!(vm.state().is_halted());
    }
}

#[test]
fn test_push_wraps_below_zero() {
    let mut state = VMState::new();
    let mut memory = Memory::new();
    state.set_sp(0);

    push(&mut state, &mut memory, 0xAB);
    assert_eq!(state.sp(), 0xFF);
    assert_eq!(memory.read(0xFF), 0xAB);
    assert_eq!(pop(&mut state, &mut memory), 0xAB);
    assert_eq!(state.sp(), 0);
}
