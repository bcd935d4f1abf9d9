use truthtable::{
    analyze, analyze_explained, evaluate::Assignment, explanation::Explanation,
    operator::Operator, types::Variable, Error,
};

fn rows(expression: &str) -> Vec<(Vec<bool>, bool)> {
    analyze(expression)
        .unwrap()
        .table
        .rows
        .into_iter()
        .map(|row| (row.assignment.0.values().copied().collect(), row.value))
        .collect()
}

#[test]
fn conjunction() {
    let analysis = analyze("A & B").unwrap();

    assert_eq!(analysis.variables.to_string(), "{A, B}");
    assert_eq!(analysis.postfix.to_string(), "A B &");
    assert_eq!(
        rows("A & B"),
        vec![
            (vec![false, false], false),
            (vec![false, true], false),
            (vec![true, false], false),
            (vec![true, true], true),
        ]
    );
    assert_eq!(analysis.pdnf.to_string(), "(A & B)");
    assert_eq!(
        analysis.pcnf.to_string(),
        "(A | B) & (A | ~B) & (~A | B)"
    );
}

#[test]
fn implication() {
    let analysis = analyze("A -> B").unwrap();

    assert_eq!(
        rows("A -> B"),
        vec![
            (vec![false, false], true),
            (vec![false, true], true),
            (vec![true, false], false),
            (vec![true, true], true),
        ]
    );
    assert_eq!(
        analysis.pdnf.to_string(),
        "(~A & ~B) | (~A & B) | (A & B)"
    );
    assert_eq!(analysis.pcnf.to_string(), "(~A | B)");
}

#[test]
fn negation() {
    let analysis = analyze("~A").unwrap();

    assert_eq!(
        rows("~A"),
        vec![(vec![false], true), (vec![true], false)]
    );
    assert_eq!(analysis.pdnf.to_string(), "(~A)");
    assert_eq!(analysis.pcnf.to_string(), "(~A)");
}

#[test]
fn variables_are_ordered_lexicographically() {
    let analysis = analyze("Z | (C & A) -> C").unwrap();

    assert_eq!(analysis.variables.to_string(), "{A, C, Z}");
    assert_eq!(
        analysis.table.rows[1].assignment.to_string(),
        "{~A, ~C, Z}"
    );
}

#[test]
fn precedence_matches_explicit_grouping() {
    let test_cases = [
        ("A & B | C", "(A & B) | C"),
        ("A | B & C", "A | (B & C)"),
        ("~A & B", "(~A) & B"),
        ("A | B -> C", "(A | B) -> C"),
        ("A -> B <-> C", "(A -> B) <-> C"),
        ("~A -> B | C & D", "(~A) -> (B | (C & D))"),
    ];

    for (implicit, explicit) in test_cases {
        assert_eq!(rows(implicit), rows(explicit), "{implicit} vs {explicit}");
    }
}

#[test]
fn implication_is_right_associative() {
    let right = rows("A -> (B -> C)");
    let left = rows("(A -> B) -> C");

    assert_eq!(rows("A -> B -> C"), right);
    assert_ne!(rows("A -> B -> C"), left);
}

#[test]
fn equivalence_is_right_associative() {
    assert_eq!(rows("A <-> B <-> C"), rows("A <-> (B <-> C)"));
}

#[test]
fn malformed_input_is_reported() {
    let test_cases = [
        (")A", Error::UnbalancedParentheses),
        ("(A | B", Error::UnbalancedParentheses),
        (
            "A &",
            Error::MissingOperand {
                operator: Operator::Conjunction,
            },
        ),
        ("A B", Error::MissingOperator),
        (
            "A & b",
            Error::InvalidCharacter {
                character: 'b',
                position: 4,
            },
        ),
        (
            "AB1",
            Error::InvalidCharacter {
                character: '1',
                position: 2,
            },
        ),
    ];

    for (expression, expected) in test_cases {
        assert_eq!(analyze(expression), Err(expected), "{expression}");
    }
}

#[test]
fn error_messages_are_readable() {
    let test_cases = [
        (")A", "Unbalanced parentheses"),
        ("A &", "Missing operand for operator '&'"),
        ("A ? B", "Invalid character '?' at position 2"),
    ];

    for (expression, message) in test_cases {
        assert_eq!(analyze(expression).unwrap_err().to_string(), message);
    }
}

#[test]
fn empty_expression_is_vacuous() {
    for expression in ["", "   "] {
        let analysis = analyze(expression).unwrap();

        assert!(analysis.variables.is_empty());
        assert_eq!(analysis.table.rows.len(), 1);
        assert_eq!(analysis.table.rows[0].assignment, Assignment::default());
        assert!(analysis.table.rows[0].value);
        assert_eq!(analysis.postfix.to_string(), "");
        assert_eq!(analysis.pdnf.to_string(), "()");
        assert_eq!(analysis.pcnf.to_string(), "");
    }
}

#[test]
fn vacuous_clause_does_not_parse_back() {
    let analysis = analyze("").unwrap();

    assert_eq!(
        analyze(&analysis.pdnf.to_string()),
        Err(Error::EmptyParentheses)
    );
    assert_eq!(
        analyze("()").unwrap_err().to_string(),
        "Empty parentheses"
    );
}

#[test]
fn explanation_covers_every_stage() {
    colored::control::set_override(false);

    let mut explanation = Explanation::new("A -> B");

    let analysis = analyze_explained("A -> B", &mut explanation).unwrap();
    assert_eq!(analysis, analyze("A -> B").unwrap());

    let rendered = explanation.to_string();

    assert!(rendered.contains("Tokenizing A -> B"));
    assert!(rendered.contains("Variables: {A, B}"));
    assert!(rendered.contains("Postfix: A B ->"));
    assert!(rendered.contains("Row 2: {A, ~B}"));
    assert!(rendered.contains("{A, ~B} is a counter-model: (~A | B)"));
    assert!(rendered.contains("PDNF: (~A & ~B) | (~A & B) | (A & B)"));
}

#[test]
fn repeated_variables_appear_once() {
    let analysis = analyze("B | A & B").unwrap();

    assert_eq!(
        analysis.variables.iter().copied().collect::<Vec<_>>(),
        vec![Variable('A'), Variable('B')]
    );
}
