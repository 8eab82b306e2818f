use ark_editor::{
    ComponentTree, EditorError, Insert, MissingTargetPolicy, MoveOutcome, MovePosition,
};
use ark_model::{ComponentId, ComponentInstance, ComponentType, PropertyMap, PropertyValue};

fn node(id: &str, component_type: ComponentType) -> ComponentInstance {
    ComponentInstance::new(ComponentId::new(id).unwrap(), component_type, PropertyMap::new())
}

/// root
/// ├── a
/// │   └── a1
/// └── b
fn sample_tree() -> ComponentTree {
    let mut tree = ComponentTree::new();
    tree.insert(None, node("root", ComponentType::Container))
        .unwrap();
    tree.insert(Some("root"), node("a", ComponentType::Container))
        .unwrap();
    tree.insert(Some("a"), node("a1", ComponentType::Text))
        .unwrap();
    tree.insert(Some("root"), node("b", ComponentType::Button))
        .unwrap();
    tree
}

fn child_ids(tree: &ComponentTree, id: &str) -> Vec<String> {
    tree.get(id)
        .unwrap()
        .children()
        .map(|child| child.id().to_string())
        .collect()
}

fn root_ids(tree: &ComponentTree) -> Vec<String> {
    tree.roots().map(|root| root.id().to_string()).collect()
}

#[test]
fn insert_appends_in_order() {
    let tree = sample_tree();
    assert_eq!(tree.len(), 4);
    assert_eq!(root_ids(&tree), vec!["root"]);
    assert_eq!(child_ids(&tree, "root"), vec!["a", "b"]);
    assert_eq!(tree.parent_of("a1").map(ComponentId::as_str), Some("a"));
    assert_eq!(tree.parent_of("root"), None);
}

#[test]
fn insert_under_missing_parent_is_silent() {
    let mut tree = sample_tree();
    let before = tree.to_instances();
    let outcome = tree
        .insert(Some("ghost"), node("orphan", ComponentType::Text))
        .unwrap();
    assert_eq!(outcome, Insert::ParentNotFound);
    assert_eq!(tree.to_instances(), before);
}

#[test]
fn insert_rejects_existing_id() {
    let mut tree = sample_tree();
    let err = tree
        .insert(None, node("a1", ComponentType::Image))
        .unwrap_err();
    assert_eq!(err, EditorError::DuplicateId(ComponentId::new("a1").unwrap()));
    assert_eq!(tree.len(), 4);
}

#[test]
fn update_merges_patch() {
    let mut tree = sample_tree();
    let mut initial = PropertyMap::new();
    initial.insert("content".to_string(), PropertyValue::text("old"));
    initial.insert("fontSize".to_string(), PropertyValue::text("16px"));
    assert!(tree.update("a1", initial));

    let mut patch = PropertyMap::new();
    patch.insert("content".to_string(), PropertyValue::text("new"));
    assert!(tree.update("a1", patch));

    let a1 = tree.get("a1").unwrap();
    assert_eq!(a1.property("content"), Some(&PropertyValue::text("new")));
    assert_eq!(a1.property("fontSize"), Some(&PropertyValue::text("16px")));
    assert!(!tree.update("ghost", PropertyMap::new()));
}

#[test]
fn remove_takes_subtree_and_keeps_siblings() {
    let mut tree = sample_tree();
    let removed = tree.remove("a").unwrap();
    assert_eq!(removed.id, "a");
    assert_eq!(removed.children.len(), 1);
    assert_eq!(child_ids(&tree, "root"), vec!["b"]);
    assert!(!tree.contains("a1"));
    assert_eq!(tree.len(), 2);
    assert!(tree.remove("a").is_none());
}

#[test]
fn move_inside_appends_to_target() {
    let mut tree = sample_tree();
    let outcome = tree.move_node(
        "b",
        "a",
        MovePosition::Inside,
        MissingTargetPolicy::Restore,
    );
    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(child_ids(&tree, "a"), vec!["a1", "b"]);
    assert_eq!(child_ids(&tree, "root"), vec!["a"]);
    assert_eq!(tree.len(), 4);
}

#[test]
fn move_before_and_after_place_siblings() {
    let mut tree = sample_tree();
    tree.move_node(
        "a1",
        "a",
        MovePosition::Before,
        MissingTargetPolicy::Restore,
    );
    assert_eq!(child_ids(&tree, "root"), vec!["a1", "a", "b"]);

    tree.move_node(
        "a1",
        "b",
        MovePosition::After,
        MissingTargetPolicy::Restore,
    );
    assert_eq!(child_ids(&tree, "root"), vec!["a", "b", "a1"]);

    tree.move_node(
        "b",
        "root",
        MovePosition::After,
        MissingTargetPolicy::Restore,
    );
    assert_eq!(root_ids(&tree), vec!["root", "b"]);
    assert_eq!(tree.get("b").unwrap().depth(), 0);
}

#[test]
fn move_to_missing_target_follows_policy() {
    let mut tree = sample_tree();
    let before = tree.to_instances();
    assert_eq!(
        tree.move_node(
            "a",
            "ghost",
            MovePosition::Inside,
            MissingTargetPolicy::Restore
        ),
        MoveOutcome::TargetNotFound { dropped: false }
    );
    assert_eq!(tree.to_instances(), before);

    assert_eq!(
        tree.move_node(
            "a",
            "ghost",
            MovePosition::Inside,
            MissingTargetPolicy::Drop
        ),
        MoveOutcome::TargetNotFound { dropped: true }
    );
    assert!(!tree.contains("a"));
    assert!(!tree.contains("a1"));
    assert_eq!(tree.len(), 2);
}

#[test]
fn move_missing_source_changes_nothing() {
    let mut tree = sample_tree();
    let before = tree.to_instances();
    assert_eq!(
        tree.move_node(
            "ghost",
            "a",
            MovePosition::Inside,
            MissingTargetPolicy::Drop
        ),
        MoveOutcome::SourceNotFound
    );
    assert_eq!(tree.to_instances(), before);
}

#[test]
fn depth_first_is_pre_order() {
    let tree = sample_tree();
    let order: Vec<_> = tree
        .depth_first()
        .map(|node| node.id().to_string())
        .collect();
    assert_eq!(order, vec!["root", "a", "a1", "b"]);
}

#[test]
fn snapshots_are_detached_from_later_edits() {
    let mut tree = sample_tree();
    let snapshot = tree.instance("a").unwrap();
    tree.remove("a1");
    assert_eq!(snapshot.count(), 2);
    assert_eq!(tree.instance("a").unwrap().count(), 1);
}

#[test]
fn equality_ignores_slot_layout() {
    let mut reused = sample_tree();
    reused.remove("b");
    reused
        .insert(Some("root"), node("b", ComponentType::Button))
        .unwrap();
    assert_eq!(reused, sample_tree());

    let rebuilt = ComponentTree::from_instances(sample_tree().to_instances()).unwrap();
    assert_eq!(rebuilt, sample_tree());
}

#[test]
fn clear_empties_tree() {
    let mut tree = sample_tree();
    let revision = tree.revision();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.roots().count(), 0);
    assert!(tree.revision() > revision);
}
