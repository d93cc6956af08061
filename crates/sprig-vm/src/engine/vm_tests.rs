use sprig_bytecode::{Instruction, Program};
use sprig_compiler::{Op, OpElem, compile_regex};
use sprig_core::{Custom, Native};

use super::{FuelLimits, RuntimeError, ThreadList, Tracer, VM, thompson_vm, vm_step};

fn unit(c: char) -> OpElem<char> {
    OpElem::Unit(c)
}

fn op(op: Op<char>) -> OpElem<char> {
    OpElem::Op(op)
}

fn matches(program: &Program<char>, input: &str) -> bool {
    let items: Vec<char> = input.chars().collect();
    thompson_vm(program, &items, &Native)
}

/// `a b? c`
fn zero_or_one() -> Program<char> {
    compile_regex(&[unit('a'), op(Op::qmark(['b']).unwrap()), unit('c')])
}

#[test]
fn zero_or_one_accepts() {
    let program = zero_or_one();

    assert!(matches(&program, "ac"));
    assert!(matches(&program, "abc"));
    assert!(!matches(&program, "a"));
    assert!(!matches(&program, "ab"));
    assert!(!matches(&program, "abbc"));
}

#[test]
fn zero_or_more_accepts() {
    let program = compile_regex(&[unit('a'), op(Op::star(['b']).unwrap()), unit('c')]);

    assert!(matches(&program, "ac"));
    assert!(matches(&program, "abc"));
    assert!(matches(&program, "abbc"));
    assert!(!matches(&program, "a"));
    assert!(!matches(&program, "ab"));
}

#[test]
fn one_or_more_accepts() {
    let program = compile_regex(&[unit('a'), op(Op::plus(['b']).unwrap()), unit('c')]);

    assert!(matches(&program, "abc"));
    assert!(matches(&program, "abbc"));
    assert!(!matches(&program, "a"));
    assert!(!matches(&program, "ab"));
    assert!(!matches(&program, "ac"));
}

#[test]
fn consecutive_plus_accepts() {
    let program = compile_regex(&[op(Op::plus(['a']).unwrap()), op(Op::plus(['b']).unwrap())]);
    assert_eq!(
        program.instructions(),
        &[
            Instruction::Unit('a'),
            Instruction::Split(0, 2),
            Instruction::Unit('b'),
            Instruction::Split(2, 4),
            Instruction::Match,
        ]
    );

    assert!(matches(&program, "aaaabbb"));
    assert!(!matches(&program, "a"));
    assert!(!matches(&program, "b"));
}

#[test]
fn alternation_accepts() {
    let program = compile_regex(&[unit('a'), op(Op::alt(['b'], ['c']).unwrap()), unit('d')]);

    assert!(matches(&program, "abd"));
    assert!(matches(&program, "acd"));
    assert!(!matches(&program, "a"));
    assert!(!matches(&program, "ab"));
    assert!(!matches(&program, "ac"));
    assert!(!matches(&program, "abcd"));
    assert!(!matches(&program, "ad"));
}

#[test]
fn unit_list_accepts() {
    let program = compile_regex(&[unit('a'), op(Op::lst(['b', 'c']).unwrap()), unit('d')]);

    assert!(matches(&program, "abd"));
    assert!(matches(&program, "acd"));
    assert!(!matches(&program, "a"));
    assert!(!matches(&program, "ab"));
    assert!(!matches(&program, "ac"));
    assert!(!matches(&program, "abcd"));
    assert!(!matches(&program, "ad"));
}

#[test]
fn any_unit_accepts() {
    let program = compile_regex(&[unit('a'), op(Op::dot()), unit('b')]);

    assert!(matches(&program, "aab"));
    assert!(matches(&program, "abb"));
    assert!(matches(&program, "acb"));
    assert!(matches(&program, "azb"));
    assert!(!matches(&program, "a"));
    assert!(!matches(&program, "b"));
    assert!(!matches(&program, "ab"));
    assert!(!matches(&program, "axyzb"));
}

#[test]
fn star_of_alternation_accepts() {
    let body = op(Op::alt(['b'], ['c']).unwrap());
    let program = compile_regex(&[unit('a'), op(Op::star([body]).unwrap()), unit('d')]);

    assert!(matches(&program, "ad"));
    assert!(matches(&program, "abd"));
    assert!(matches(&program, "abbbd"));
    assert!(matches(&program, "acd"));
    assert!(matches(&program, "acccd"));
    assert!(matches(&program, "abcd"));
    assert!(matches(&program, "abcbd"));
    assert!(matches(&program, "acbcd"));
    assert!(!matches(&program, "a"));
    assert!(!matches(&program, "ab"));
    assert!(!matches(&program, "ac"));
}

#[test]
fn alternation_with_star_accepts() {
    let right = op(Op::star(['c']).unwrap());
    let program = compile_regex(&[unit('a'), op(Op::alt(['b'], [right]).unwrap()), unit('d')]);

    assert!(matches(&program, "ad"));
    assert!(matches(&program, "abd"));
    assert!(matches(&program, "acd"));
    assert!(matches(&program, "acccd"));
    assert!(!matches(&program, "a"));
    assert!(!matches(&program, "ab"));
    assert!(!matches(&program, "abbbd"));
    assert!(!matches(&program, "ac"));
    assert!(!matches(&program, "abcd"));
    assert!(!matches(&program, "abcbd"));
    assert!(!matches(&program, "acbcd"));
}

#[test]
fn any_plus_then_unit_accepts() {
    let program = compile_regex(&[op(Op::plus([op(Op::dot())]).unwrap()), unit('P')]);

    assert!(matches(&program, "aP"));
    assert!(matches(&program, "abcdefP"));
    assert!(!matches(&program, "a"));
    assert!(!matches(&program, "P"));
    assert!(!matches(&program, "abcdef"));
}

#[test]
fn repeat_accepts_exact_count() {
    let program = compile_regex(&[op(Op::repeat(['a'], 3).unwrap()), unit('b')]);

    assert!(matches(&program, "aaab"));
    assert!(!matches(&program, "aab"));
    assert!(!matches(&program, "aaaab"));
}

#[test]
fn lazy_quantifier_accepts_same_language() {
    let program = compile_regex(&[unit('a'), op(Op::star(['b']).unwrap().lazy()), unit('c')]);

    assert!(matches(&program, "ac"));
    assert!(matches(&program, "abbc"));
    assert!(!matches(&program, "ab"));
}

#[test]
fn empty_input() {
    let nullable = compile_regex(&[op(Op::star(['a']).unwrap())]);
    let strict = compile_regex(&[unit('a')]);

    assert!(matches(&nullable, ""));
    assert!(!matches(&strict, ""));
}

#[test]
fn trailing_input_is_ignored() {
    let program = zero_or_one();

    assert!(matches(&program, "acxyz"));
    assert!(!matches(&program, "xac"));
}

#[test]
fn custom_equality() {
    let program = zero_or_one();
    let items: Vec<char> = "ABC".chars().collect();
    let ignore_case = |a: &char, b: &char| a.eq_ignore_ascii_case(b);

    assert!(!thompson_vm(&program, &items, &Native));
    assert!(thompson_vm(&program, &items, &ignore_case));

    let bridge = Custom::new(ignore_case, |c: &char, f: &mut std::fmt::Formatter<'_>| {
        write!(f, "{c}")
    });
    assert!(thompson_vm(&program, &items, &bridge));
}

#[test]
fn step_by_step() {
    let program = zero_or_one();
    let start = ThreadList::start(program.len());

    let after_a = vm_step(&program, start.clone(), Some(&'a'), &Native).unwrap();
    assert_eq!(after_a.as_slice(), &[1]);

    let after_c = vm_step(&program, after_a.clone(), Some(&'c'), &Native).unwrap();
    assert_eq!(after_c.as_slice(), &[4]);

    assert!(vm_step(&program, after_c, None, &Native).is_none());

    let dead = vm_step(&program, start, Some(&'x'), &Native).unwrap();
    assert!(dead.is_empty());

    let at_end = vm_step(&program, after_a, None, &Native).unwrap();
    assert!(at_end.is_empty());
}

#[test]
fn any_unit_survives_end_of_input() {
    let program: Program<char> = compile_regex(&[op(Op::dot())]);
    let next = vm_step(&program, ThreadList::start(program.len()), None, &Native).unwrap();
    assert_eq!(next.as_slice(), &[1]);
}

#[test]
#[should_panic(expected = "outside program of length 1")]
fn out_of_range_position_panics() {
    let program: Program<char> = Program::new(vec![Instruction::Jump(7)]);
    matches(&program, "a");
}

#[test]
fn vm_execute() {
    let program = zero_or_one();
    let vm = VM::builder(&program, &Native).build();
    let abc: Vec<char> = "abc".chars().collect();
    let abbc: Vec<char> = "abbc".chars().collect();

    assert_eq!(vm.execute(&abc), Ok(true));
    assert_eq!(vm.execute(abbc.iter()), Ok(false));
    assert_eq!(vm.limits(), FuelLimits::default());
}

#[test]
fn builder_limits() {
    let program = zero_or_one();

    let vm = VM::builder(&program, &Native).exec_fuel(10).build();
    assert_eq!(vm.limits().exec_fuel, 10);

    let vm = VM::builder(&program, &Native)
        .limits(FuelLimits::new().exec_fuel(20))
        .build();
    assert_eq!(vm.limits().exec_fuel, 20);
}

#[test]
fn fuel_exhaustion() {
    // a+b over ten `a`s then `b` visits 32 threads.
    let program = compile_regex(&[op(Op::plus(['a']).unwrap()), unit('b')]);
    let input: Vec<char> = "aaaaaaaaaab".chars().collect();

    let vm = VM::new(&program, &Native, FuelLimits::new().exec_fuel(32));
    assert_eq!(vm.execute(&input), Ok(true));

    let vm = VM::new(&program, &Native, FuelLimits::new().exec_fuel(31));
    assert_eq!(vm.execute(&input), Err(RuntimeError::ExecFuelExhausted(31)));
}

#[test]
fn fuel_error_message() {
    let err = RuntimeError::ExecFuelExhausted(31);
    insta::assert_snapshot!(err, @"runtime execution limit of 31 thread visits exceeded");
}

/// Counts thread visits per input position.
#[derive(Default)]
struct VisitCounter {
    per_step: Vec<usize>,
}

impl Tracer<char> for VisitCounter {
    fn trace_step(&mut self, _position: usize, _item: Option<&char>, _threads: &[usize]) {
        self.per_step.push(0);
    }

    fn trace_instruction(&mut self, _addr: usize, _instr: &Instruction<char>) {
        if let Some(count) = self.per_step.last_mut() {
            *count += 1;
        }
    }

    fn trace_unit_success(&mut self, _addr: usize, _item: Option<&char>) {}

    fn trace_unit_failure(&mut self, _addr: usize, _item: Option<&char>) {}

    fn trace_accept(&mut self, _addr: usize, _position: usize) {}

    fn trace_reject(&mut self, _position: usize) {}
}

#[test]
fn visits_per_step_bounded_by_program() {
    // (a?)*a*b: nested nullable loops would spin forever without deduplication.
    let nested = op(Op::star([op(Op::qmark(['a']).unwrap())]).unwrap());
    let program = compile_regex(&[nested, op(Op::star(['a']).unwrap()), unit('b')]);
    let vm = VM::new(&program, &Native, FuelLimits::default());

    for input in ["aaaaaaaaaaaa", "aaaab"] {
        let items: Vec<char> = input.chars().collect();
        let mut counter = VisitCounter::default();
        let accepted = vm.execute_with(&items, &mut counter).unwrap();

        assert_eq!(accepted, input.ends_with('b'));
        assert_eq!(counter.per_step.len(), items.len() + 1);
        assert!(counter.per_step.iter().all(|&n| n <= program.len()));
    }
}
