//! 会社フィルタ
//!
//! 会社名は列に現れる値そのもので比較する（大文字小文字・空白の正規化なし）。
//! 利用者には distinct_companies の一覧から選ばせる。

use crate::table::Table;

/// 会社列が company と等しい行だけを残す（元の順序を保持）
///
/// 会社列がない場合は空の表を返す。
pub fn filter_by_company(table: &Table, company: &str, company_column: &str) -> Table {
    let Some(col) = table.column_index(company_column) else {
        return table.with_rows(Vec::new());
    };

    let rows = table
        .rows()
        .iter()
        .filter(|row| row.get(col).map(|c| c.to_string() == company).unwrap_or(false))
        .cloned()
        .collect();

    table.with_rows(rows)
}

/// 会社列の値を初出順に重複なしで列挙（空セルは除く）
pub fn distinct_companies(table: &Table, company_column: &str) -> Vec<String> {
    let Some(col) = table.column_index(company_column) else {
        return Vec::new();
    };

    let mut companies: Vec<String> = Vec::new();
    for row in table.rows() {
        let Some(cell) = row.get(col) else { continue };
        if cell.is_empty() {
            continue;
        }
        let name = cell.to_string();
        if !companies.contains(&name) {
            companies.push(name);
        }
    }
    companies
}
