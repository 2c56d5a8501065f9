use turnstile::{Answer, Arena, Checklist, Condition, Context, Ownership, Registry};

struct Always(Answer);

impl Condition for Always {
    fn evaluate(&self, _checklist: &mut Checklist) -> Answer {
        self.0
    }
}

#[test]
fn teardown_spares_registered_nodes() {
    let mut arena = Arena::new();
    let mut registry = Registry::new();
    let host_a = registry
        .register(&mut arena, "hostA", Box::new(Always(Answer::Matched)))
        .unwrap();
    let host_b = registry
        .register(&mut arena, "hostB", Box::new(Always(Answer::Matched)))
        .unwrap();

    let rule = arena.any_of("rule1");
    arena.parse_line(&registry, rule, "!hostA hostB").unwrap();
    let wrapper = arena.children(rule)[0];
    assert_eq!(arena.ownership(wrapper), Ownership::Anonymous);

    arena.remove_tree(rule);

    // The anonymous negation wrapper went with the tree; the registered
    // leaves survive and stay resolvable by name.
    assert!(!arena.contains(rule));
    assert!(!arena.contains(wrapper));
    assert!(arena.contains(host_a));
    assert!(arena.contains(host_b));
    assert_eq!(registry.resolve("hostA"), Some(host_a));
    assert_eq!(registry.resolve("hostB"), Some(host_b));
}

#[test]
fn surviving_nodes_remain_usable_after_teardown() {
    let mut arena = Arena::new();
    let mut registry = Registry::new();
    let _ = registry
        .register(&mut arena, "hostA", Box::new(Always(Answer::Matched)))
        .unwrap();

    let first = arena.all_of("first");
    arena.parse_line(&registry, first, "!hostA").unwrap();
    arena.remove_tree(first);

    // A replacement tree built after teardown resolves the same leaf.
    let second = arena.any_of("second");
    arena.parse_line(&registry, second, "hostA").unwrap();

    let mut checklist = Checklist::new(Context::new());
    assert_eq!(arena.evaluate(second, &mut checklist), Answer::Matched);
}

#[test]
fn teardown_removes_nested_anonymous_combinators() {
    let mut arena = Arena::new();
    let mut registry = Registry::new();
    let leaf = registry
        .register(&mut arena, "leaf", Box::new(Always(Answer::Matched)))
        .unwrap();

    // An anonymous inner combinator owned by the outer tree.
    let inner = arena.all_of("inner");
    arena.append(inner, leaf);
    let outer = arena.any_of("outer");
    arena.append(outer, inner);

    arena.remove_tree(outer);
    assert!(!arena.contains(outer));
    assert!(!arena.contains(inner));
    assert!(arena.contains(leaf));
}

#[test]
fn teardown_spares_a_registered_inner_combinator() {
    let mut arena = Arena::new();
    let mut registry = Registry::new();
    let leaf = registry
        .register(&mut arena, "leaf", Box::new(Always(Answer::Matched)))
        .unwrap();

    let shared = arena.any_of("shared");
    arena.append(shared, leaf);
    registry.register_node(&mut arena, "shared", shared).unwrap();

    let outer = arena.all_of("outer");
    arena.parse_line(&registry, outer, "shared").unwrap();
    arena.remove_tree(outer);

    assert!(!arena.contains(outer));
    assert!(arena.contains(shared));
    assert_eq!(registry.resolve("shared"), Some(shared));

    // The shared combinator is still evaluable.
    let mut checklist = Checklist::new(Context::new());
    assert_eq!(arena.evaluate(shared, &mut checklist), Answer::Matched);
}
