/// Article Dashboard Example
///
/// This example demonstrates:
/// - Driving a grid from JSON records, the shape a fetch layer returns
/// - Column drag-to-reorder and live resize gestures
/// - Serializing the display state snapshot for debugging

use gridstate::{ColumnDef, FieldValue, GridController, HeaderGesture};

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("=== GridState Article Dashboard ===\n");

    let payload = serde_json::json!([
        { "id": "a1", "title": "Release notes 1.4", "status": "published", "tags": ["release"], "views": 310 },
        { "id": "a2", "title": "Roadmap draft", "status": "draft", "tags": ["planning", "internal"], "views": 12 },
        { "id": "a3", "title": "Postmortem: cache outage", "status": "published", "tags": ["ops", "internal"], "views": 98 }
    ]);
    let records: Vec<serde_json::Value> = payload.as_array().unwrap().clone();

    let mut grid = GridController::new(
        vec![
            ColumnDef::new("select", "", 40.0).sticky().sortable(false).filterable(false),
            ColumnDef::new("actions", "", 80.0).sticky().sortable(false).filterable(false),
            ColumnDef::new("title", "Title", 280.0).with_min_width(120.0),
            ColumnDef::new("status", "Status", 120.0),
            ColumnDef::new("tags", "Tags", 180.0),
            ColumnDef::new("views", "Views", 90.0),
        ],
        |r: &serde_json::Value| r["id"].as_str().unwrap_or_default().to_string(),
        |r, column| FieldValue::from_json(&r[column]),
        |r| format!("{} {}", r["title"].as_str().unwrap_or(""), r["status"].as_str().unwrap_or("")),
    )
    .unwrap();
    grid.set_records(records);

    println!("1. Loaded {} records from JSON\n", grid.records().len());

    // Drag the "views" column (index 5) next to the title (index 2)
    println!("2. Dragging 'views' column toward the front...");
    grid.begin_drag("views");
    grid.drag_column_over(4);
    grid.drag_column_over(3);
    grid.drag_column_over(2);
    grid.release_pointer();
    println!(
        "   Order: {:?}\n",
        grid.columns().iter().map(|c| c.id.as_str()).collect::<Vec<_>>()
    );

    // Live-resize the title column with absolute pointer positions
    println!("3. Resizing 'title' column...");
    grid.begin_resize("title", 600.0);
    grid.resize_to(650.0);
    grid.resize_to(400.0); // would be 80px, clamped to the 120px minimum
    assert!(matches!(grid.gesture(), HeaderGesture::Resizing { .. }));
    grid.release_pointer();
    println!("   Width now {}\n", grid.layout().get("title").unwrap().width);

    // Filter on the internal tag, then dump the display state
    grid.toggle_filter_value("tags", "internal");
    println!("4. Visible after tags=internal: {:?}\n", grid.visible_ids());

    println!("5. Display state snapshot:");
    println!("{}", serde_json::to_string_pretty(&grid.view_state()).unwrap());
}
