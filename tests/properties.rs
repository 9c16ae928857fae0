//! Behavioral properties of parsing, evaluation and truth tables.

use std::collections::HashSet;

use bool_solver::assignment::Assignment;
use bool_solver::parser::ParseErrorKind;
use bool_solver::table::truth_table_with;
use bool_solver::{evaluate, parse, truth_table, Config, Error, Expr, Solver};

// ─── Helpers ───────────────────────────────────────────────────────────────────

/// All assignments over `A` and `B`.
fn assignments() -> Vec<Assignment> {
    let mut result = Vec::new();
    for a in [false, true] {
        for b in [false, true] {
            result.push(Assignment::from([('A', a), ('B', b)]));
        }
    }
    result
}

/// Expressions over `A`, `B`, `0`, `1` with at most `depth` operator levels.
fn expressions(depth: usize) -> Vec<Expr> {
    let mut exprs = vec![
        Expr::var('A'),
        Expr::var('B'),
        Expr::constant(false),
        Expr::constant(true),
    ];
    for _ in 0..depth {
        let prev = exprs.clone();
        for x in prev.iter() {
            exprs.push(!x.clone());
            for y in prev.iter() {
                exprs.push(x.clone() & y.clone());
                exprs.push(x.clone() | y.clone());
            }
        }
    }
    exprs
}

// ─── Precedence ────────────────────────────────────────────────────────────────

#[test]
fn and_binds_tighter_than_or() {
    let implicit = parse("A + B · C").unwrap();
    let explicit = parse("A + (B · C)").unwrap();
    let grouped = parse("(A + B) · C").unwrap();

    assert_eq!(evaluate(&implicit, None), evaluate(&explicit, None));

    let a = Assignment::from([('A', false), ('B', false), ('C', true)]);
    assert!(evaluate(&implicit, Some(&a)));
    assert!(evaluate(&explicit, Some(&a)));
    assert!(!evaluate(&grouped, Some(&a)));
}

#[test]
fn not_binds_tighter_than_and() {
    let e = parse("!A · B").unwrap();
    let a = Assignment::from([('A', false), ('B', true)]);
    assert!(evaluate(&e, Some(&a)));
    let e = parse("!(A · B)").unwrap();
    assert!(evaluate(&e, Some(&a)));
    let a = Assignment::from([('A', true), ('B', true)]);
    assert!(!evaluate(&e, Some(&a)));
}

// ─── Algebraic laws ────────────────────────────────────────────────────────────

#[test]
fn double_negation() {
    for e in expressions(2) {
        let nn = !!e.clone();
        for a in assignments() {
            assert_eq!(nn.eval(&a), e.eval(&a), "!!({}) under {}", e, a);
        }
    }
}

#[test]
fn de_morgan() {
    let exprs = expressions(1);
    for e1 in exprs.iter() {
        for e2 in exprs.iter() {
            let lhs = !(e1.clone() & e2.clone());
            let rhs = !e1.clone() | !e2.clone();
            let lhs_or = !(e1.clone() | e2.clone());
            let rhs_or = !e1.clone() & !e2.clone();
            for a in assignments() {
                assert_eq!(lhs.eval(&a), rhs.eval(&a), "{} vs {} under {}", lhs, rhs, a);
                assert_eq!(lhs_or.eval(&a), rhs_or.eval(&a), "{} vs {} under {}", lhs_or, rhs_or, a);
            }
        }
    }
}

#[test]
fn display_round_trips() {
    for e in expressions(2) {
        let text = e.to_string();
        assert_eq!(parse(&text).unwrap(), e, "round trip of {}", text);
    }
}

// ─── Truth tables ──────────────────────────────────────────────────────────────

#[test]
fn truth_table_has_two_to_the_n_distinct_rows() {
    for (text, n) in [("A", 1), ("A · B", 2), ("A + b · !C", 3), ("(P + q) · (r + S) · t", 5)] {
        let table = truth_table(&parse(text).unwrap()).unwrap();
        assert_eq!(table.variables().len(), n);
        assert_eq!(table.len(), 1 << n, "rows of {}", text);
        let distinct: HashSet<&Assignment> = table.iter().map(|(a, _)| a).collect();
        assert_eq!(distinct.len(), 1 << n);
    }
}

#[test]
fn truth_table_row_order() {
    let table = truth_table(&parse("A · B").unwrap()).unwrap();
    let rows: Vec<(bool, bool, bool)> = table
        .iter()
        .map(|(a, r)| (a.get('A').unwrap(), a.get('B').unwrap(), r))
        .collect();
    assert_eq!(
        rows,
        vec![
            (false, false, false),
            (false, true, false),
            (true, false, false),
            (true, true, true),
        ]
    );
}

#[test]
fn truth_table_columns_follow_first_occurrence() {
    let table = truth_table(&parse("C + A · C + B").unwrap()).unwrap();
    assert_eq!(table.variables().as_slice(), &['C', 'A', 'B']);
    let last = table.rows().last().unwrap();
    assert!(last.assignment.values().all(|v| v));
    let first = &table.rows()[0];
    assert!(first.assignment.values().all(|v| !v));
}

#[test]
fn truth_table_agrees_with_evaluate() {
    let e = parse("!(A + B) + A · !C").unwrap();
    for (a, result) in truth_table(&e).unwrap().iter() {
        assert_eq!(evaluate(&e, Some(a)), result);
    }
}

#[test]
fn constant_expression_has_one_row() {
    let table = truth_table(&parse("1 · 0").unwrap()).unwrap();
    assert_eq!(table.len(), 1);
    let (a, result) = table.iter().next().unwrap();
    assert!(a.is_empty());
    assert!(!result);
}

#[test]
fn truth_table_limit() {
    let e = parse("A+B+C+D+E+F+G+H+I+J+K+L+M+N+O+P+Q+R+S+T+U").unwrap();
    assert_eq!(
        truth_table(&e).unwrap_err(),
        Error::LimitExceeded {
            variables: 21,
            limit: 20
        }
    );
    let small = Config::default().with_max_variables(4);
    assert!(truth_table_with(&parse("A·B·C·D").unwrap(), &small).is_ok());
    assert!(truth_table_with(&parse("A·B·C·D·E").unwrap(), &small).is_err());
}

// ─── Default evaluation ────────────────────────────────────────────────────────

#[test]
fn unbound_variables_default_to_true() {
    let e = parse("A + B").unwrap();
    assert!(evaluate(&e, None));
    assert!(evaluate(&e, Some(&Assignment::new())));
    assert!(Solver::default().evaluate("A · B · !0").unwrap());
}

// ─── Long inputs ───────────────────────────────────────────────────────────────

#[test]
fn long_flat_chains_are_not_nesting() {
    let solver = Solver::default();
    let or_chain = vec!["A"; 300].join(" + ");
    assert!(solver.evaluate(&or_chain).unwrap());

    let and_chain = format!("{} · 0", vec!["A"; 500].join(" · "));
    assert!(!solver.evaluate(&and_chain).unwrap());

    let mixed = format!("{}A", "A·B + B·C + C·A + ".repeat(90));
    let table = solver.truth_table(&mixed).unwrap();
    assert_eq!(table.minterms(), vec![3, 4, 5, 6, 7]);
}

// ─── Syntax errors ─────────────────────────────────────────────────────────────

#[test]
fn missing_close_paren_is_syntax_error() {
    let e = parse("(A · B").unwrap_err();
    assert_eq!(e.kind, ParseErrorKind::UnclosedParen);
    assert!(matches!(Solver::default().evaluate("(A · B"), Err(Error::Syntax(_))));
}

#[test]
fn unrecognized_token_is_syntax_error() {
    // Unknown characters used to be skipped; they are now rejected.
    let e = parse("A $ B").unwrap_err();
    assert_eq!(e.kind, ParseErrorKind::UnexpectedChar('$'));
    assert_eq!(e.position, 2);
    assert!(parse("A & B").is_err());
    assert!(parse("A * B").is_err());
}

#[test]
fn empty_input_is_syntax_error() {
    assert_eq!(parse("").unwrap_err().kind, ParseErrorKind::UnexpectedEnd);
    assert_eq!(parse("A + ").unwrap_err().kind, ParseErrorKind::UnexpectedEnd);
}

#[test]
fn error_messages_are_displayable() {
    let e = Solver::default().evaluate("A + (B").unwrap_err();
    assert_eq!(e.to_string(), "syntax error at position 4: missing closing parenthesis");
    let e = Solver::new(Config::default().with_max_variables(1))
        .truth_table("A + B")
        .unwrap_err();
    assert_eq!(
        e.to_string(),
        "expression has 2 distinct variables, truth table is limited to 1"
    );
}

// ─── Concurrency ───────────────────────────────────────────────────────────────

#[test]
fn independent_evaluations_run_concurrently() {
    let solver = Solver::default();
    std::thread::scope(|s| {
        let handles: Vec<_> = ["A · B", "A + !A", "!A · A", "(A + B) · !C"]
            .into_iter()
            .map(|text| {
                let solver = &solver;
                s.spawn(move || solver.truth_table(text).unwrap().minterms())
            })
            .collect();
        let results: Vec<Vec<u64>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[0], vec![3]);
        assert_eq!(results[1], vec![0, 1]);
        assert_eq!(results[2], Vec::<u64>::new());
        assert_eq!(results[3], vec![2, 4, 6]);
    });
}
