use anyhow::Result;
use rowtree::{
    all_children, check_integrity, collapse, is_row_indeterminate, is_selected, is_show,
    row_toggle, visible_rows, CheckedSelection, SelectionState, TreeRow,
};
use tracing_subscriber::EnvFilter;

// Flat row list in the shape a data service would deliver it.
const SAMPLE_ROWS: &str = r#"[
    {"id": 1, "level": 1, "expanded": true, "title": "Engineering"},
    {"id": 2, "parent_id": 1, "level": 2, "expanded": true, "title": "Platform"},
    {"id": 3, "parent_id": 2, "level": 3, "leaf": true, "title": "Build tooling"},
    {"id": 4, "parent_id": 2, "level": 3, "leaf": true, "title": "Release automation"},
    {"id": 5, "parent_id": 1, "level": 2, "title": "Product"},
    {"id": 6, "parent_id": 5, "level": 3, "leaf": true, "title": "Mobile app"},
    {"id": 7, "level": 1, "leaf": true, "title": "Operations"}
]"#;

fn print_tree(rows: &[TreeRow], selection: &SelectionState<u64>) {
    for row in visible_rows(rows) {
        let marker = if is_selected(selection, Some(row)) {
            "[x]"
        } else if is_row_indeterminate(rows, selection, Some(row)) {
            "[-]"
        } else {
            "[ ]"
        };
        let indent = "  ".repeat(row.level.saturating_sub(1) as usize);
        println!("  {indent}{marker} {}", row.title);
    }
}

fn find(rows: &[TreeRow], id: u64) -> &TreeRow {
    rows.iter().find(|r| r.id == id).unwrap()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut rows: Vec<TreeRow> = serde_json::from_str(SAMPLE_ROWS)?;
    check_integrity(&rows)?;

    let mut selection: SelectionState<u64> = SelectionState::new();

    println!("Initial tree:");
    print_tree(&rows, &selection);

    println!("\nToggle 'Build tooling' (parent becomes indeterminate):");
    row_toggle(&rows, &mut selection, Some(find(&rows, 3)));
    print_tree(&rows, &selection);

    println!("\nToggle 'Release automation' (subtree complete, cascades upward):");
    row_toggle(&rows, &mut selection, Some(find(&rows, 4)));
    print_tree(&rows, &selection);

    println!("\nToggle 'Engineering' (everything below follows):");
    row_toggle(&rows, &mut selection, Some(find(&rows, 1)));
    let descendants = all_children(&rows, Some(find(&rows, 1))).len();
    println!("  ({} descendants now checked)", descendants);
    print_tree(&rows, &selection);

    println!("\nCollapse 'Platform' (selection survives, rows hide):");
    let idx = rows.iter().position(|r| r.id == 2).unwrap();
    collapse(Some(&mut rows[idx]), false);
    print_tree(&rows, &selection);
    println!(
        "  hidden 'Build tooling' still checked: {}",
        selection.is_selected(&3)
    );
    println!("  'Build tooling' shown: {}", is_show(&rows, Some(find(&rows, 3))));

    Ok(())
}
