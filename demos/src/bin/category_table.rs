//! # category_table
//!
//! Prints the general-category reference table, first as aligned rows and
//! then in its column-oriented JSON form.
//!
//! Run with:
//! ```sh
//! cargo run --bin category_table
//! ```

use anyhow::Result;
use chartype_core::table::char_categories;

fn main() -> Result<()> {
    let table = char_categories();
    let [code_col, full_col, abbr_col] = table.column_names();

    println!("{code_col:>10}  {full_col:<26}  {abbr_col}");
    for row in table.rows() {
        println!("{:>10}  {:<26}  {}", row.code, row.identifier, row.abbreviation);
    }

    println!("\n{}", serde_json::to_string_pretty(table)?);
    Ok(())
}
