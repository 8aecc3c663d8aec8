//! End-to-end formatting of switch statements and case arms.
//!
//! Each test owns its resolver so host shapes pinned here never leak between
//! tests; only the tests named after the global resolver touch the
//! process-wide one, and both settle it with a structured host first.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use jv_fmt::{
    format_node, render_flat, CompatibilityResolver, FormatConfig, FormatError, Formatter,
    HostApiShape, Indent, LanguageLevel, Op, OpsBuilder,
};
use jv_ir::{BinaryOp, HostCapabilities, NodeId, SyntaxTree};
use pretty_assertions::assert_eq;

fn format(tree: &SyntaxTree, root: NodeId) -> Result<Vec<Op>, FormatError> {
    let resolver = CompatibilityResolver::new();
    Formatter::with_resolver(FormatConfig::default(), &resolver).format(tree, root)
}

fn sync(tree: &SyntaxTree, node: NodeId) -> Op {
    Op::Sync {
        node,
        span: tree.span(node),
    }
}

/// `name();`
fn call_stmt(tree: &mut SyntaxTree, name: &str) -> NodeId {
    let callee = tree.ident(name);
    let call = tree.call(callee, &[]);
    tree.expr_stmt(call)
}

// -- Scenarios --

#[test]
fn scenario_two_constant_labels_colon_form() {
    // case 1, 2: foo();
    let mut tree = SyntaxTree::new();
    let one = tree.literal("1");
    let two = tree.literal("2");
    let l1 = tree.constant_label(one);
    let l2 = tree.constant_label(two);
    let stmt = call_stmt(&mut tree, "foo");
    let case = tree.statement_case(&[l1, l2], &[stmt]);

    let ops = format(&tree, case).unwrap();
    assert_eq!(
        ops,
        vec![
            sync(&tree, case),
            Op::ForcedBreak,
            Op::hinted("case", Indent::spaces(2)),
            Op::Space,
            Op::Open(Indent::spaces(4)),
            Op::token("1"),
            Op::token(","),
            Op::Break { fallback: " " },
            Op::token("2"),
            Op::Close,
            Op::token(":"),
            Op::Open(Indent::spaces(2)),
            Op::ForcedBreak,
            Op::token("foo"),
            Op::token("("),
            Op::token(")"),
            Op::token(";"),
            Op::Close,
        ]
    );
}

#[test]
fn scenario_guarded_record_pattern_rule() {
    // case Point(int x, int y) when x == y -> foo()
    let mut tree = SyntaxTree::new();
    let x = tree.binding_pattern("int", "x");
    let y = tree.binding_pattern("int", "y");
    let point = tree.deconstruction("Point", &[x, y], None);
    let label = tree.pattern_label(point, None);
    let gx = tree.ident("x");
    let gy = tree.ident("y");
    let guard = tree.binary(gx, BinaryOp::Eq, gy);
    let callee = tree.ident("foo");
    let body = tree.call(callee, &[]);
    let case = tree.rule_case(&[label], Some(guard), body);

    let ops = format(&tree, case).unwrap();
    assert_eq!(
        ops,
        vec![
            sync(&tree, case),
            Op::ForcedBreak,
            Op::hinted("case", Indent::spaces(2)),
            Op::Space,
            Op::Open(Indent::ZERO),
            Op::token("Point"),
            Op::token("("),
            Op::token("int"),
            Op::Space,
            Op::token("x"),
            Op::token(","),
            Op::FillBreak { fallback: " " },
            Op::token("int"),
            Op::Space,
            Op::token("y"),
            Op::token(")"),
            Op::Close,
            Op::Space,
            Op::token("when"),
            Op::Space,
            Op::token("x"),
            Op::Space,
            Op::token("=="),
            Op::Space,
            Op::token("y"),
            Op::Space,
            Op::token("-"),
            Op::token(">"),
            Op::Space,
            Op::token("foo"),
            Op::token("("),
            Op::token(")"),
            Op::GuessToken(";"),
        ]
    );
}

#[test]
fn scenario_empty_default_colon_form() {
    // default:
    let mut tree = SyntaxTree::new();
    let default = tree.default_label();
    let case = tree.statement_case(&[default], &[]);

    let ops = format(&tree, case).unwrap();
    assert_eq!(
        ops,
        vec![
            sync(&tree, case),
            Op::ForcedBreak,
            Op::hinted("default", Indent::spaces(2)),
            Op::token(":"),
            Op::Open(Indent::spaces(2)),
            Op::Close,
        ]
    );
}

// -- Whole switches --

#[test]
fn switch_with_mixed_arms() {
    let mut tree = SyntaxTree::new();
    let s = tree.binding_pattern("String", "s");
    let string_label = tree.pattern_label(s, None);
    let text = tree.ident("s");
    let string_body = tree.yield_stmt(text);
    let string_block = tree.block(&[string_body]);
    let string_case = tree.rule_case(&[string_label], None, string_block);

    let null = tree.literal("null");
    let null_label = tree.constant_label(null);
    let default = tree.default_label();
    let e = tree.ident("e");
    let throw = tree.throw_stmt(e);
    let fallback = tree.rule_case(&[null_label, default], None, throw);

    let selector = tree.ident("value");
    let switch = tree.switch(selector, &[string_case, fallback]);

    let ops = format(&tree, switch).unwrap();
    assert_eq!(
        render_flat(&ops),
        "switch (value) {\ncase String s -> {\nyield s;\n};\ncase null, default -> throw e;\n}"
    );
}

#[test]
fn statement_arms_render_in_order() {
    let mut tree = SyntaxTree::new();
    let a = tree.literal("A");
    let la = tree.constant_label(a);
    let first = call_stmt(&mut tree, "first");
    let second = call_stmt(&mut tree, "second");
    let case_a = tree.statement_case(&[la], &[first, second]);
    let default = tree.default_label();
    let other = call_stmt(&mut tree, "other");
    let case_default = tree.statement_case(&[default], &[other]);
    let selector = tree.ident("k");
    let switch = tree.switch(selector, &[case_a, case_default]);

    let ops = format(&tree, switch).unwrap();
    assert_eq!(
        render_flat(&ops),
        "switch (k) {\ncase A:\nfirst();\nsecond();\ndefault:\nother();\n}"
    );
}

#[test]
fn unknown_case_kind_fails_whole_format() {
    let mut tree = SyntaxTree::new();
    let one = tree.literal("1");
    let label = tree.constant_label(one);
    let case = tree.unrecognized_case(&[label], "SEALED_MATCH");
    let selector = tree.ident("x");
    let switch = tree.switch(selector, &[case]);

    assert_eq!(
        format(&tree, switch),
        Err(FormatError::UnsupportedCaseKind {
            kind: "SEALED_MATCH".to_owned()
        })
    );

    // The sink sees labels, and nothing of the body, before the failure.
    let resolver = CompatibilityResolver::new();
    let mut builder = OpsBuilder::new();
    let result = Formatter::with_resolver(FormatConfig::default(), &resolver)
        .emit_into(&tree, case, &mut builder);
    assert!(result.is_err());
    assert_eq!(builder.flat_text(), "\ncase 1");
    assert!(!builder.ops().contains(&Op::token(":")));
    assert!(!builder.ops().contains(&Op::token("-")));
}

// -- Host shapes --

#[test]
fn legacy_host_formats_through_expressions() {
    let mut tree = SyntaxTree::with_capabilities(HostCapabilities::LEGACY);
    let one = tree.literal("1");
    let label = tree.constant_label(one);
    let body = tree.literal("\"one\"");
    let case = tree.rule_case(&[label], None, body);
    let default = tree.default_label();
    let zero = tree.literal("0");
    let otherwise = tree.rule_case(&[default], None, zero);
    let selector = tree.ident("n");
    let switch = tree.switch(selector, &[case, otherwise]);

    let resolver = CompatibilityResolver::new();
    let ops = Formatter::with_resolver(FormatConfig::default(), &resolver)
        .format(&tree, switch)
        .unwrap();
    assert_eq!(
        resolver.resolved(),
        Some(&Ok(HostApiShape::LegacyExpressionLabels))
    );
    assert_eq!(
        render_flat(&ops),
        "switch (n) {\ncase 1 -> \"one\";\ndefault -> 0;\n}"
    );
}

#[test]
fn incompatible_host_emits_nothing() {
    let mut tree = SyntaxTree::with_capabilities(HostCapabilities::NONE);
    let selector = tree.ident("x");
    let switch = tree.switch(selector, &[]);

    let resolver = CompatibilityResolver::new();
    let formatter = Formatter::with_resolver(FormatConfig::default(), &resolver);
    let mut builder = OpsBuilder::new();
    assert_eq!(
        formatter.emit_into(&tree, switch, &mut builder),
        Err(FormatError::IncompatibleHostApi)
    );
    assert!(builder.ops().is_empty());

    // The failure stays published, but a later host with labels still formats.
    let mut healthy = SyntaxTree::new();
    let selector = healthy.ident("x");
    let switch = healthy.switch(selector, &[]);
    let ops = formatter.format(&healthy, switch).unwrap();
    assert_eq!(render_flat(&ops), "switch (x) {\n}");
    assert_eq!(
        resolver.resolved(),
        Some(&Err(FormatError::IncompatibleHostApi))
    );
}

#[test]
fn global_resolver_follows_a_later_legacy_host() {
    let mut structured = SyntaxTree::new();
    let default = structured.default_label();
    let zero = structured.literal("0");
    let case = structured.rule_case(&[default], None, zero);
    let selector = structured.ident("x");
    let switch = structured.switch(selector, &[case]);
    format_node(&structured, switch).unwrap();

    let mut legacy = SyntaxTree::with_capabilities(HostCapabilities::LEGACY);
    let one = legacy.literal("1");
    let label = legacy.constant_label(one);
    let two = legacy.literal("2");
    let case = legacy.rule_case(&[label], None, two);
    let selector = legacy.ident("x");
    let switch = legacy.switch(selector, &[case]);

    let formatter = Formatter::new(FormatConfig::default());
    let mut builder = OpsBuilder::new();
    assert_eq!(formatter.emit_into(&legacy, switch, &mut builder), Ok(()));
    assert_eq!(
        render_flat(&builder.into_ops()),
        "switch (x) {\ncase 1 -> 2;\n}"
    );
    assert_eq!(
        CompatibilityResolver::global().resolved(),
        Some(&Ok(HostApiShape::StructuredLabelList))
    );

    // A host with neither accessor is still rejected before any output.
    let mut bare = SyntaxTree::with_capabilities(HostCapabilities::NONE);
    let selector = bare.ident("x");
    let switch = bare.switch(selector, &[]);
    let mut builder = OpsBuilder::new();
    assert_eq!(
        formatter.emit_into(&bare, switch, &mut builder),
        Err(FormatError::IncompatibleHostApi)
    );
    assert!(builder.ops().is_empty());
}

#[test]
fn format_node_uses_global_resolver() {
    jv_fmt::init_tracing();
    jv_fmt::init_tracing();

    let mut tree = SyntaxTree::new();
    let default = tree.default_label();
    let body = tree.literal("0");
    let case = tree.rule_case(&[default], None, body);
    let selector = tree.ident("x");
    let switch = tree.switch(selector, &[case]);

    let ops = format_node(&tree, switch).unwrap();
    assert_eq!(render_flat(&ops), "switch (x) {\ndefault -> 0;\n}");
    assert_eq!(
        CompatibilityResolver::global().resolved(),
        Some(&Ok(HostApiShape::StructuredLabelList))
    );
}

// -- Configuration --

#[test]
fn aosp_style_doubles_every_indent() {
    let mut tree = SyntaxTree::new();
    let a = tree.literal("A");
    let b = tree.literal("B");
    let la = tree.constant_label(a);
    let lb = tree.constant_label(b);
    let stmt = call_stmt(&mut tree, "run");
    let case = tree.statement_case(&[la, lb], &[stmt]);
    let selector = tree.ident("x");
    let switch = tree.switch(selector, &[case]);

    let resolver = CompatibilityResolver::new();
    let ops = Formatter::with_resolver(FormatConfig::aosp(), &resolver)
        .format(&tree, switch)
        .unwrap();

    let opens: Vec<Indent> = ops
        .iter()
        .filter_map(|op| match op {
            Op::Open(indent) => Some(*indent),
            _ => None,
        })
        .collect();
    assert_eq!(
        opens,
        vec![Indent::spaces(4), Indent::spaces(8), Indent::spaces(4)]
    );
    assert!(ops.contains(&Op::hinted("case", Indent::spaces(4))));
    assert!(ops.contains(&Op::hinted("}", Indent::spaces(4))));
}

#[test]
fn language_levels_differ_only_where_overlaid() {
    let mut tree = SyntaxTree::new();
    let a = tree.ident("a");
    let b = tree.ident("b");
    let sum = tree.binary(a, BinaryOp::Add, b);
    let paren = tree.paren(sum);
    let label = tree.constant_label(paren);
    let body = tree.literal("0");
    let case = tree.rule_case(&[label], None, body);

    let resolver = CompatibilityResolver::new();
    let run = |level| {
        Formatter::with_resolver(FormatConfig::with_level(level), &resolver)
            .format(&tree, case)
            .unwrap()
    };

    let java19 = run(LanguageLevel::Java19);
    let java21 = run(LanguageLevel::Java21);
    assert_eq!(render_flat(&java19), render_flat(&java21));
    assert!(java19.contains(&Op::Break { fallback: "" }));
    assert!(!java21.contains(&Op::Break { fallback: "" }));
}

// -- Robustness --

#[test]
fn deeply_nested_switches_do_not_overflow() {
    const DEPTH: usize = 2_000;

    let mut tree = SyntaxTree::new();
    let mut inner = call_stmt(&mut tree, "leaf");
    for _ in 0..DEPTH {
        let default = tree.default_label();
        let block = tree.block(&[inner]);
        let case = tree.rule_case(&[default], None, block);
        let selector = tree.ident("x");
        inner = tree.switch(selector, &[case]);
    }

    let ops = format(&tree, inner).unwrap();
    let switches = ops.iter().filter(|op| **op == Op::token("switch")).count();
    assert_eq!(switches, DEPTH);
    let opens = ops.iter().filter(|op| matches!(op, Op::Open(_))).count();
    let closes = ops.iter().filter(|op| matches!(op, Op::Close)).count();
    assert_eq!(opens, closes);
}
