use crate::extensions::rank::*;
use pareto_rank::prelude::InfoLogger;
use std::sync::{Arc, Mutex};

/// Creates a table from a slice of rows.
pub fn create_table(rows: &[&[&str]]) -> Table {
    Table::new(rows.iter().map(|row| row.iter().map(|cell| cell.to_string()).collect()).collect())
}

/// Creates a layout with objectives specified by indices and all other values by default.
pub fn create_layout(objectives: &[usize]) -> TableLayout {
    let config = TableConfig {
        objectives: Some(objectives.iter().map(|&idx| ColumnRef::Index(idx)).collect()),
        ..Default::default()
    };

    create_table_layout(&config).unwrap()
}

/// Creates a logger which collects all messages.
pub fn create_collecting_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (logger, messages)
}
