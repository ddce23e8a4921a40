/// Basic Grid Example
///
/// This example demonstrates:
/// - Defining columns with sticky, sortable, and filterable flags
/// - Feeding a record snapshot into a GridController
/// - Searching, filtering, sorting, and row selection
/// - Reading back the derived visible rows

use gridstate::{ColumnDef, FieldValue, GridController, SortOrder};

struct Article {
    id: String,
    title: String,
    status: &'static str,
    tags: Vec<&'static str>,
}

fn main() {
    println!("=== GridState Basic Example ===\n");

    // 1. Describe the view's columns
    let columns = vec![
        ColumnDef::new("select", "", 40.0).sticky().sortable(false).filterable(false),
        ColumnDef::new("title", "Title", 240.0),
        ColumnDef::new("status", "Status", 120.0),
        ColumnDef::new("tags", "Tags", 160.0),
    ];

    let mut grid = GridController::new(
        columns,
        |a: &Article| a.id.clone(),
        |a, column| match column {
            "title" => FieldValue::from(a.title.as_str()),
            "status" => FieldValue::from(a.status),
            "tags" => FieldValue::from(a.tags.clone()),
            _ => FieldValue::Null,
        },
        |a| format!("{} {}", a.title, a.status),
    )
    .unwrap();

    // 2. Load a snapshot of records
    let articles = vec![
        ("1", "Getting started with Rust", "published", vec!["rust", "intro"]),
        ("2", "Advanced lifetimes", "draft", vec!["rust"]),
        ("3", "CSS grid layouts", "published", vec!["css", "layout"]),
        ("4", "Async in practice", "published", vec!["rust", "async"]),
    ];
    grid.set_records(
        articles
            .into_iter()
            .map(|(id, title, status, tags)| Article {
                id: id.to_string(),
                title: title.to_string(),
                status,
                tags,
            })
            .collect(),
    );
    println!("1. Loaded {} articles\n", grid.records().len());

    // 3. Filter to published rust articles
    println!("2. Filtering: status=published, tags contains 'rust'...");
    grid.toggle_filter_value("status", "published");
    grid.toggle_filter_value("tags", "rust");
    for row in grid.visible_rows() {
        println!("   [{}] {} ({})", row.id, row.title, row.status);
    }
    println!();

    // 4. Sort by title descending
    println!("3. Sorting by title, descending...");
    grid.set_sort("title", SortOrder::Descending);
    for row in grid.visible_rows() {
        println!("   [{}] {}", row.id, row.title);
    }
    println!();

    // 5. Select everything on screen
    grid.select_all_visible(true);
    println!(
        "4. Selected all visible rows: {} selected, header checkbox = {}\n",
        grid.selection_count(),
        grid.is_all_visible_selected()
    );

    // 6. Show the filter popover data for the tags column
    println!("5. Distinct tag values (unfiltered counts):");
    for entry in grid.unique_values_for("tags") {
        println!("   {} ({})", entry.value, entry.count);
    }
}
