use sprig_compiler::Op;

use crate::error::PatternError;
use crate::normalize::Normalizer;
use crate::tree::{ForkKind, Tree};
use crate::{and, branch, or, then};

type Pattern = Tree<&'static str>;

fn cnf(tree: Pattern) -> Pattern {
    tree.canonical_nf().into_tree()
}

/// No `Or` below the root, and no fork directly holds a fork of its own kind
/// and scope.
fn assert_canonical(tree: &Pattern) {
    fn walk(tree: &Pattern, is_root: bool) {
        let Some(fork) = tree.as_fork() else {
            let branch = tree.as_branch().unwrap();
            assert!(branch.tail().is_none(), "branch tail survived: {tree:?}");
            return;
        };
        assert!(fork.children().len() > 1, "single-child fork: {tree:?}");
        if fork.kind() == ForkKind::Or {
            assert!(is_root, "`Or` below the root: {tree:?}");
        }
        for child in fork.children() {
            if let Some(inner) = child.as_fork() {
                let mergeable = inner.kind() == fork.kind()
                    && (inner.kind() == ForkKind::Or || inner.loc() == fork.loc());
                assert!(!mergeable, "unmerged nested fork: {tree:?}");
            }
            walk(child, false);
        }
    }
    walk(tree, true);
}

#[test]
fn branch_absorbs_nested_branch() {
    let res = cnf(branch!["A", "B", branch!["C", "D"]]);
    assert_eq!(res, branch!["A", "B", "C", "D"]);
}

#[test]
fn branch_of_only_a_branch() {
    assert_eq!(cnf(branch![branch!["A", "B"]]), branch!["A", "B"]);
}

#[test]
fn branch_distributes_into_and() {
    let res = cnf(branch!["A", and!["B", "C"]]);
    assert_eq!(res, and!(@1; branch!["A", "B"], branch!["A", "C"]));
    assert_eq!(res.loc(), Some(1));
}

#[test]
fn distributed_branch_has_shape_of_and_of_branches() {
    let res = cnf(branch!["A", and!["B", "C"]]);
    let expected = and![branch!["A", "B"], branch!["A", "C"]];
    assert!(res.same_shape(&expected));
    assert_ne!(res, expected);
    assert!(!res.same_shape(&then![branch!["A", "B"], branch!["A", "C"]]));
    assert!(!res.same_shape(&and![branch!["A", "C"], branch!["A", "B"]]));
}

#[test]
fn branch_distributes_into_then() {
    let res = cnf(branch!["A", then!["B", "C"]]);
    assert_eq!(res, then!(@1; branch!["A", "B"], branch!["A", "C"]));
}

#[test]
fn branch_distributes_into_or() {
    let res = cnf(branch!["A", or!["B", "C"]]);
    assert_eq!(res, or![branch!["A", "B"], branch!["A", "C"]]);
    assert_eq!(res.loc(), Some(0));
}

#[test]
fn branch_distributes_into_nested_branches() {
    let res = cnf(branch!["A", and![branch!["B", "C"], branch!["D"]]]);
    assert_eq!(res, and!(@1; branch!["A", "B", "C"], branch!["A", "D"]));
}

#[test]
fn scope_grows_with_chain_length() {
    let res = cnf(branch![
        "A",
        branch!["A", and!["B", branch!["C", and!["D", "E"]]]]
    ]);
    let inner = and!(@3; branch!["A", "A", "C", "D"], branch!["A", "A", "C", "E"]);
    assert_eq!(res, and!(@2; branch!["A", "A", "B"], inner.clone()));
    assert_eq!(inner.loc(), Some(3));
}

#[test]
fn single_child_forks_collapse() {
    assert_eq!(cnf(and![and![branch!["A"], branch!["B"]]]), and!["A", "B"]);
    assert_eq!(cnf(then![then![branch!["A"], branch!["B"]]]), then!["A", "B"]);
    assert_eq!(cnf(or![or![branch!["A"], branch!["B"]]]), or!["A", "B"]);
}

#[test]
fn bare_leaves_become_branches() {
    assert_eq!(cnf(and!["A", "B"]), and![branch!["A"], branch!["B"]]);
    assert_eq!(cnf(and!["A"]), branch!["A"]);
    assert_eq!(cnf(then!["A"]), branch!["A"]);
    assert_eq!(cnf(or!["A"]), branch!["A"]);
}

#[test]
fn same_scope_and_merges() {
    let res = cnf(and![branch!["A"], and![branch!["B"], branch!["C"]]]);
    assert_eq!(res, and!["A", "B", "C"]);
}

#[test]
fn different_scope_and_stays_nested() {
    let res = cnf(and!["A", branch!["B", and!["C", "D"]]]);
    assert_eq!(
        res,
        and!["A", and!(@1; branch!["B", "C"], branch!["B", "D"])]
    );
}

#[test]
fn same_scope_then_merges() {
    let res = cnf(then![branch!["A"], then![branch!["B"], branch!["C"]]]);
    assert_eq!(res, then!["A", "B", "C"]);
}

#[test]
fn different_scope_then_stays_nested() {
    let res = cnf(then!["A", branch!["B", then!["C", "D"]]]);
    assert_eq!(
        res,
        then!["A", then!(@1; branch!["B", "C"], branch!["B", "D"])]
    );
}

#[test]
fn nested_or_merges() {
    let res = cnf(or![branch!["A"], or![branch!["B"], branch!["C"]]]);
    assert_eq!(res, or!["A", "B", "C"]);
}

#[test]
fn nested_or_merges_across_scopes() {
    let res = cnf(or!["A", branch!["B", or!["C", "D"]]]);
    assert_eq!(res, or!["A", branch!["B", "C"], branch!["B", "D"]]);
}

#[test]
fn and_distributes_over_or() {
    let res = cnf(and![branch!["A"], or!["B", "C"]]);
    assert_eq!(res, or![and!["A", "B"], and!["A", "C"]]);
}

#[test]
fn then_distributes_over_or() {
    let res = cnf(then![branch!["A"], or!["B", "C"]]);
    assert_eq!(res, or![then!["A", "B"], then!["A", "C"]]);
}

#[test]
fn chain_of_single_children() {
    let res = cnf(and![or![then![or![and!["A"]]]]]);
    assert_eq!(res, branch!["A"]);
}

#[test]
fn distribution_merges_same_scope_then() {
    let res = cnf(branch!["A", then!["A", then!["B", or!["C", "D"]]]]);
    assert_eq!(
        res,
        or![
            then!(@1; branch!["A", "A"], branch!["A", "B"], branch!["A", "C"]),
            then!(@1; branch!["A", "A"], branch!["A", "B"], branch!["A", "D"]),
        ]
    );
}

#[test]
fn single_arm_or_merges_into_parent() {
    let res = cnf(and!["A", or![and!["B", "C"]]]);
    assert_eq!(res, and!["A", "B", "C"]);
}

#[test]
fn product_of_two_ors() {
    let res = cnf(then![or!["A", "B"], or!["C", "D"]]);
    assert_eq!(
        res,
        or![
            then!["A", "C"],
            then!["A", "D"],
            then!["B", "C"],
            then!["B", "D"],
        ]
    );
}

#[test]
fn operators_ride_along_in_chains() {
    let plus = Op::plus(["x"]).unwrap();
    let res = cnf(branch!["A", plus.clone(), and!["B", "C"]]);
    assert_eq!(
        res,
        and!(@2; branch!["A", plus.clone(), "B"], branch!["A", plus, "C"])
    );
}

fn samples() -> Vec<Pattern> {
    vec![
        branch!["A", "B", branch!["C", "D"]],
        branch!["A", and![branch!["B", "C"], branch!["D"]]],
        and!["A", branch!["B", and!["C", "D"]]],
        or!["A", branch!["B", or!["C", "D"]]],
        branch!["A", then!["A", then!["B", or!["C", "D"]]]],
        branch![
            "A",
            branch!["A", and!["B", branch!["C", and!["D", "E"]]]]
        ],
        and![
            or!["A", or!["B"]],
            branch!["C", or!["D", and!["B", then!["E", or!["A", "F"]]]]]
        ],
        then![or!["A", "B"], or!["C", "D"]],
    ]
}

#[test]
fn single_or_at_root() {
    let tree = and![
        or!["A", or!["B"]],
        branch!["C", or!["D", and!["B", then!["E", or!["A", "F"]]]]]
    ];
    let expected = tree.disjunct_count();
    let canonical = tree.canonical_nf();
    assert_canonical(&canonical);
    assert!(canonical.is_or());
    assert_eq!(canonical.disjuncts().len(), 6);
    assert_eq!(expected, 6);
}

#[test]
fn every_sample_is_canonical() {
    for tree in samples() {
        assert_canonical(&cnf(tree));
    }
}

#[test]
fn normalization_is_idempotent() {
    for tree in samples() {
        let once = cnf(tree);
        let twice = cnf(once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn disjunct_count_predicts_expansion() {
    for tree in samples() {
        let expected = tree.disjunct_count();
        let canonical = tree.canonical_nf();
        assert_eq!(canonical.disjuncts().len(), expected, "{canonical:?}");
    }
}

#[test]
fn disjuncts_of_or_free_tree() {
    let canonical = and!["A", "B"].canonical_nf();
    assert_eq!(canonical.disjuncts(), &[and!["A", "B"]]);
}

#[test]
fn normalizer_enforces_limit() {
    let tree = then![or!["A", "B", "C"], or!["D", "E"]];
    let err = Normalizer::new()
        .max_disjuncts(5)
        .normalize(tree.clone())
        .unwrap_err();
    assert_eq!(
        err,
        PatternError::DisjunctLimitExceeded { count: 6, limit: 5 }
    );
    insta::assert_snapshot!(err, @"pattern expands to 6 disjuncts, limit is 5");

    let canonical = Normalizer::new().max_disjuncts(6).normalize(tree).unwrap();
    assert_eq!(canonical.disjuncts().len(), 6);
}

#[test]
fn normalizer_default_limit() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.get_max_disjuncts(), crate::DEFAULT_MAX_DISJUNCTS);
    let canonical = normalizer.normalize(branch!["A", and!["B", "C"]]).unwrap();
    assert_eq!(*canonical, and!(@1; branch!["A", "B"], branch!["A", "C"]));
}
