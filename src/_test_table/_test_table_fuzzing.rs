//!
//! Here, we have a small toolbox for fuzzing the truth table pipeline.
//! It creates a random binary tree of operations, where each leaf is a random
//! variable and each inner node is one binary operator, possibly negated.
//!
//! Hence, each tree is just a formula. We render the formula into a string,
//! generate its table and check every row against an evaluation which does not
//! go through the parser at all. To get predictable test cases, we use
//! a predefined set of randomness seeds.

use crate::*;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};
use std::convert::TryFrom;
use test_log::test;

const OPS: [BinaryOp; 4] = [BinaryOp::And, BinaryOp::Or, BinaryOp::Xor, BinaryOp::SymDiff];

#[derive(Debug)]
enum OpTree {
    Leaf(Variable),
    Node {
        op: BinaryOp,
        negate: bool,
        left: Box<OpTree>,
        right: Box<OpTree>,
    },
}

impl OpTree {
    /// Create a new random tree of the given height over the first `num_vars` letters.
    fn new_random(height: u8, num_vars: u32, rand: &mut StdRng) -> OpTree {
        if height == 0 {
            let id = rand.next_u32() % num_vars;
            return OpTree::Leaf(Variable::all().nth(id as usize).unwrap());
        }
        let op = OPS[(rand.next_u32() % 4) as usize];
        let negate = rand.next_u32() % 2 == 0;
        let left = OpTree::new_random(height - 1, num_vars, rand);
        let right = OpTree::new_random(height - 1, num_vars, rand);
        OpTree::Node {
            op,
            negate,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Render this tree with a minimal amount of parentheses: a child is only wrapped
    /// when its operator binds looser than its parent (or equal, on the right side).
    fn render(&self, parent: u8, right_side: bool) -> String {
        match self {
            OpTree::Leaf(var) => var.to_string(),
            OpTree::Node {
                op,
                negate,
                left,
                right,
            } => {
                let precedence = op.precedence();
                let inner = format!(
                    "{} {} {}",
                    left.render(precedence, false),
                    op,
                    right.render(precedence, true)
                );
                let needs_group = *negate
                    || precedence < parent
                    || (precedence == parent && right_side);
                match (*negate, needs_group) {
                    (true, _) => format!("~({})", inner),
                    (false, true) => format!("({})", inner),
                    (false, false) => inner,
                }
            }
        }
    }

    /// Evaluate this tree directly in the given assignment.
    fn eval_in(&self, assignment: &Assignment) -> bool {
        match self {
            OpTree::Leaf(var) => assignment.value(*var),
            OpTree::Node {
                op,
                negate,
                left,
                right,
            } => {
                let a = left.eval_in(assignment);
                let b = right.eval_in(assignment);
                let result = match op {
                    BinaryOp::And => a && b,
                    BinaryOp::Or => a || b,
                    BinaryOp::Xor | BinaryOp::SymDiff => a ^ b,
                };
                result != *negate
            }
        }
    }
}

const FUZZ_SEEDS: [u64; 10] = [
    1, 12, 123, 1234, 12345, 123456, 1234567, 12345678, 123456789, 1234567890,
];

fn fuzz_test(num_vars: u32, height: u8, seed: u64) {
    let mut rand = StdRng::seed_from_u64(seed);
    let op_tree = OpTree::new_random(height, num_vars, &mut rand);
    let formula = op_tree.render(0, false);
    let table = generate_table(&formula).unwrap();

    assert_eq!(1usize << table.variables().len(), table.len());
    for row in table.rows() {
        assert_eq!(
            op_tree.eval_in(row.assignment()),
            row.result(),
            "Error in {} for assignment {}",
            formula,
            row.assignment()
        );
    }

    // Full parenthesisation must not change the table.
    let expression = Expression::try_from(formula.as_str()).unwrap();
    let reparsed = generate_table(&expression.to_string()).unwrap();
    assert_eq!(table, reparsed);
}

#[test]
fn fuzz_var_2() {
    for height in 1..7 {
        for seed in FUZZ_SEEDS.iter() {
            fuzz_test(2, height, *seed);
        }
    }
}

#[test]
fn fuzz_var_5() {
    for height in 2..8 {
        for seed in FUZZ_SEEDS.iter() {
            fuzz_test(5, height, *seed);
        }
    }
}

#[test]
fn fuzz_var_10() {
    for height in 4..8 {
        for seed in FUZZ_SEEDS.iter() {
            fuzz_test(10, height, *seed);
        }
    }
}

/// Random expression (from the fuzzing tree) used as operand in the identity checks.
fn random_expression(num_vars: u32, height: u8, seed: u64) -> Expression {
    let mut rand = StdRng::seed_from_u64(seed);
    let tree = OpTree::new_random(height, num_vars, &mut rand);
    Expression::try_from(tree.render(0, false).as_str()).unwrap()
}

fn all_assignments(num_vars: u32) -> AssignmentIterator {
    AssignmentIterator::new(Variable::all().take(num_vars as usize).collect())
}

#[test]
fn fuzz_double_negation() {
    for seed in FUZZ_SEEDS.iter() {
        let x = random_expression(4, 3, *seed);
        let not_not_x = Expression::negation(Expression::negation(x.clone()));
        for assignment in all_assignments(4) {
            assert_eq!(x.eval_in(&assignment), not_not_x.eval_in(&assignment));
        }
    }
}

#[test]
fn fuzz_xor_equals_sym_diff() {
    for seed in FUZZ_SEEDS.iter() {
        let l = random_expression(4, 2, *seed);
        let r = random_expression(4, 3, seed + 1);
        let xor = Expression::binary(BinaryOp::Xor, l.clone(), r.clone());
        let sym_diff = Expression::binary(BinaryOp::SymDiff, l, r);
        for assignment in all_assignments(4) {
            assert_eq!(xor.eval_in(&assignment), sym_diff.eval_in(&assignment));
        }
    }
}

#[test]
fn fuzz_commutativity() {
    for seed in FUZZ_SEEDS.iter() {
        let l = random_expression(4, 2, *seed);
        let r = random_expression(4, 2, seed * 7);
        for op in OPS.iter() {
            let lr = Expression::binary(*op, l.clone(), r.clone());
            let rl = Expression::binary(*op, r.clone(), l.clone());
            for assignment in all_assignments(4) {
                assert_eq!(
                    lr.eval_in(&assignment),
                    rl.eval_in(&assignment),
                    "{} is not commutative",
                    op
                );
            }
        }
    }
}
