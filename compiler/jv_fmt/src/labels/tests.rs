use jv_ir::HostCapabilities;
use pretty_assertions::assert_eq;

use super::*;

fn case_of(tree: &SyntaxTree, id: NodeId) -> &CaseNode {
    tree.case_node(id)
        .unwrap_or_else(|| panic!("{id:?} is not a case node"))
}

#[test]
fn structured_single_default_marker() {
    let mut tree = SyntaxTree::new();
    let default = tree.default_label();
    let case = tree.statement_case(&[default], &[]);
    let set = classify(&tree, case_of(&tree, case), HostApiShape::StructuredLabelList);
    assert_eq!(set, Ok(LabelSet::Default));
}

#[test]
fn structured_constants() {
    let mut tree = SyntaxTree::new();
    let one = tree.literal("1");
    let two = tree.literal("2");
    let l1 = tree.constant_label(one);
    let l2 = tree.constant_label(two);
    let case = tree.statement_case(&[l1, l2], &[]);
    let set = classify(&tree, case_of(&tree, case), HostApiShape::StructuredLabelList);
    assert_eq!(set, Ok(LabelSet::ConstantExpressions(&[l1, l2])));
}

#[test]
fn structured_patterns() {
    let mut tree = SyntaxTree::new();
    let x = tree.binding_pattern("int", "x");
    let y = tree.binding_pattern("int", "y");
    let point = tree.deconstruction("Point", &[x, y], None);
    let label = tree.pattern_label(point, None);
    let body = tree.literal("0");
    let case = tree.rule_case(&[label], None, body);
    let set = classify(&tree, case_of(&tree, case), HostApiShape::StructuredLabelList);
    assert_eq!(set, Ok(LabelSet::Patterns(&[label])));
}

#[test]
fn default_marker_among_others_is_not_default() {
    // `case null, default ->`
    let mut tree = SyntaxTree::new();
    let null = tree.literal("null");
    let null_label = tree.constant_label(null);
    let default = tree.default_label();
    let body = tree.literal("0");
    let case = tree.rule_case(&[null_label, default], None, body);
    let set = classify(&tree, case_of(&tree, case), HostApiShape::StructuredLabelList);
    assert_eq!(set, Ok(LabelSet::ConstantExpressions(&[null_label, default])));
}

#[test]
fn mixed_labels_classify_as_patterns() {
    let mut tree = SyntaxTree::new();
    let one = tree.literal("1");
    let constant = tree.constant_label(one);
    let s = tree.binding_pattern("String", "s");
    let pattern = tree.pattern_label(s, None);
    let body = tree.literal("0");
    let case = tree.rule_case(&[constant, pattern], None, body);
    let set = classify(&tree, case_of(&tree, case), HostApiShape::StructuredLabelList);
    assert_eq!(set, Ok(LabelSet::Patterns(&[constant, pattern])));
}

#[test]
fn legacy_empty_is_default() {
    let mut tree = SyntaxTree::with_capabilities(HostCapabilities::LEGACY);
    let default = tree.default_label();
    let case = tree.statement_case(&[default], &[]);
    let set = classify(&tree, case_of(&tree, case), HostApiShape::LegacyExpressionLabels);
    assert_eq!(set, Ok(LabelSet::Default));
}

#[test]
fn legacy_expressions_are_constants() {
    let mut tree = SyntaxTree::with_capabilities(HostCapabilities::LEGACY);
    let a = tree.ident("A");
    let b = tree.ident("B");
    let la = tree.constant_label(a);
    let lb = tree.constant_label(b);
    let case = tree.statement_case(&[la, lb], &[]);
    let set = classify(&tree, case_of(&tree, case), HostApiShape::LegacyExpressionLabels);
    assert_eq!(set, Ok(LabelSet::ConstantExpressions(&[a, b])));
}

#[test]
fn shape_without_matching_accessor_is_incompatible() {
    let mut tree = SyntaxTree::with_capabilities(HostCapabilities::LEGACY);
    let default = tree.default_label();
    let case = tree.statement_case(&[default], &[]);
    let set = classify(&tree, case_of(&tree, case), HostApiShape::StructuredLabelList);
    assert_eq!(set, Err(FormatError::IncompatibleHostApi));
}

#[test]
fn label_set_accessors() {
    let ids = [NodeId::new(3), NodeId::new(4)];
    let set = LabelSet::ConstantExpressions(&ids);
    assert_eq!(set.len(), 2);
    assert!(!set.is_default());
    assert!(LabelSet::Default.is_empty());
    assert_eq!(LabelSet::Patterns(&ids).labels(), &ids);
}
