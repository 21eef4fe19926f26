use crate::_test_util::{column, mk_table, var};
use crate::*;
use test_log::test;

/// Check that `table` has the expected result column and that its rows count up in binary.
fn assert_table(table: &TruthTable, variables: &str, results: &str) {
    let names: String = table.variables().iter().map(|v| v.name()).collect();
    assert_eq!(variables, names);
    assert_eq!(1usize << variables.len(), table.len());
    assert_eq!(column(results), table.results());
    for (index, row) in table.rows().iter().enumerate() {
        assert_eq!(index as u64, row.assignment().row_index());
        assert_eq!(table.variables(), row.assignment().variables());
    }
}

#[test]
fn scenario_and() {
    let table = mk_table("A ∧ B");
    assert_table(&table, "AB", "FFFT");
    let rows: Vec<(bool, bool, bool)> = table
        .rows()
        .iter()
        .map(|r| {
            let a = r.assignment();
            (a.value(var('A')), a.value(var('B')), r.result())
        })
        .collect();
    assert_eq!(
        vec![
            (false, false, false),
            (false, true, false),
            (true, false, false),
            (true, true, true),
        ],
        rows
    );
}

#[test]
fn scenario_negation_binds_tighter_than_or() {
    assert_table(&mk_table("~A ∨ B"), "AB", "TTFT");
    assert_eq!(mk_table("~A ∨ B"), mk_table("(~A) ∨ B"));
    assert_table(&mk_table("~(A ∨ B)"), "AB", "TFFF");
}

#[test]
fn scenario_xor_of_and() {
    let table = mk_table("A ⊕ (B ∧ C)");
    assert_table(&table, "ABC", "FFFTTTTF");
    let last = table.row(7).unwrap();
    assert!(last.assignment().values().iter().all(|v| *v));
    assert!(!last.result());
}

#[test]
fn scenario_first_and_last_rows() {
    let table = mk_table("Q ∧ (D ∨ M)");
    let first = table.row(0).unwrap().assignment();
    let last = table.row(table.len() - 1).unwrap().assignment();
    assert!(first.values().iter().all(|v| !*v));
    assert!(last.values().iter().all(|v| *v));
    // The alphabetically first variable is the most significant bit.
    assert_eq!(
        Assignment::from_row_index(table.variables().clone(), 4),
        *table.row(4).unwrap().assignment()
    );
    assert!(table.row(4).unwrap().assignment().value(var('D')));
}

#[test]
fn scenario_precedence_matches_explicit_grouping() {
    let pairs = [
        ("A ∧ B ∨ C", "(A ∧ B) ∨ C"),
        ("A ∨ B ∧ C", "A ∨ (B ∧ C)"),
        ("A ⊕ B ∨ C", "(A ⊕ B) ∨ C"),
        ("A ∨ B △ C", "A ∨ (B △ C)"),
        ("A ∧ B ⊕ C ∧ D", "(A ∧ B) ⊕ (C ∧ D)"),
        ("~A ∧ B", "(~A) ∧ B"),
        ("A ⊕ B ⊕ C", "(A ⊕ B) ⊕ C"),
    ];
    for (plain, grouped) in pairs.iter() {
        assert_eq!(mk_table(plain), mk_table(grouped), "{} vs {}", plain, grouped);
    }
    // Grouping can change the meaning.
    assert_ne!(
        mk_table("A ∧ B ∨ C").results(),
        mk_table("A ∧ (B ∨ C)").results()
    );
}

#[test]
fn scenario_xor_and_sym_diff_agree() {
    assert_eq!(
        mk_table("(A ∨ B) ⊕ ~C").results(),
        mk_table("(A ∨ B) △ ~C").results()
    );
}

#[test]
fn scenario_non_sequential_variables() {
    let table = mk_table("Z ∨ K");
    assert_table(&table, "KZ", "FTTT");
}

#[test]
fn scenario_repeated_variable() {
    assert_table(&mk_table("A ∧ A ∧ ~~A"), "A", "FT");
}

#[test]
fn scenario_ascii_aliases() {
    assert_eq!(mk_table("~(A ∧ B) ∨ C ⊕ D"), mk_table("!(A & B) | C ^ D"));
}

#[test]
fn scenario_all_letters() {
    let formula: Vec<String> = Variable::all().map(|v| v.to_string()).collect();
    let formula = formula.join(" ∧ ");
    let table = TruthTableBuilder::new().max_variables(25).build(&formula);
    assert_eq!(
        Err(EngineError::TooManyVariables(TooManyVariablesError::new(26, 25))),
        table
    );
}

#[test]
fn scenario_errors() {
    assert!(matches!(generate_table(""), Err(EngineError::Parse(_))));
    assert!(matches!(generate_table("   "), Err(EngineError::Parse(_))));
    assert!(matches!(generate_table("()"), Err(EngineError::Parse(_))));
    assert!(matches!(generate_table("A ∧"), Err(EngineError::Parse(_))));
    assert!(matches!(generate_table("(A"), Err(EngineError::Parse(_))));
    assert!(matches!(generate_table("A)"), Err(EngineError::Parse(_))));
    assert!(matches!(generate_table("AB"), Err(EngineError::Parse(_))));
    assert!(matches!(generate_table("A ~"), Err(EngineError::Parse(_))));
    assert!(matches!(generate_table("A → B"), Err(EngineError::Lex(_))));
    assert!(matches!(generate_table("A AND b"), Err(EngineError::Lex(_))));
}

#[test]
fn scenario_evaluate_standalone() {
    let (expression, _) = parse(&tokenize("A ∧ (B ∨ C)").unwrap()).unwrap();
    let partial = Assignment::from_values(&[(var('A'), true), (var('B'), true)]);
    assert_eq!(Err(EvalError::new(var('C'))), evaluate(&expression, &partial));
    let full = Assignment::from_values(&[(var('A'), true), (var('B'), false), (var('C'), true)]);
    assert_eq!(Ok(true), evaluate(&expression, &full));
}

#[test]
fn scenario_deeply_nested_formulas() {
    let depth = 10_000;
    let parens = format!("{}A ∧ B{}", "(".repeat(depth), ")".repeat(depth));
    assert_table(&mk_table(&parens), "AB", "FFFT");
    let negations = format!("{}A ∨ B", "~".repeat(depth));
    assert_table(&mk_table(&negations), "AB", "FTTT");
    let negations = format!("{}(A ∨ B)", "~".repeat(depth + 1));
    assert_table(&mk_table(&negations), "AB", "TFFF");
    let chain = vec!["A"; depth].join(" ⊕ ");
    assert_table(&mk_table(&chain), "A", "FF");
}
