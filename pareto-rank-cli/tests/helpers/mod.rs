
pub mod table;
