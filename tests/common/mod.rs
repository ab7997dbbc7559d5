//! Shared fixture workbooks for integration tests

#![allow(dead_code)] // each test binary uses a different subset

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

/// One fixture cell
#[derive(Debug, Clone)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Bool(bool),
    Date(f64),
    Empty,
}

pub type Rows = Vec<Vec<Cell>>;

/// Write a workbook with the given sheets, in order
pub fn write_workbook(path: &Path, sheets: &[(&str, Rows)]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name)?;
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    Cell::Text(s) => {
                        worksheet.write_string(r, c, *s)?;
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(r, c, *n)?;
                    }
                    Cell::Bool(b) => {
                        worksheet.write_boolean(r, c, *b)?;
                    }
                    Cell::Date(serial) => {
                        worksheet.write_number_with_format(r, c, *serial, &date_format)?;
                    }
                    Cell::Empty => {}
                }
            }
        }
    }

    workbook.save(path)
}

/// Three sheets S1, S2, S3; each has a `sheet` column holding its own name
pub fn write_three_sheets(path: &Path) {
    let sheet = |name: &'static str| {
        (
            name,
            vec![
                vec![Cell::Text("sheet"), Cell::Text("n")],
                vec![Cell::Text(name), Cell::Number(1.0)],
            ],
        )
    };
    write_workbook(path, &[sheet("S1"), sheet("S2"), sheet("S3")])
        .expect("Failed to write fixture workbook");
}

/// Header A, B, C and `n` data rows
pub fn write_abc(path: &Path, n: usize) {
    let mut rows: Rows = vec![vec![Cell::Text("A"), Cell::Text("B"), Cell::Text("C")]];
    for i in 0..n {
        rows.push(vec![
            Cell::Text("row"),
            Cell::Number(i as f64),
            Cell::Bool(i % 2 == 0),
        ]);
    }
    write_workbook(path, &[("Data", rows)]).expect("Failed to write fixture workbook");
}

/// Population-style sheet with Thai headers and values
pub fn write_thai(path: &Path) {
    let rows = vec![
        vec![
            Cell::Text("จังหวัด"),
            Cell::Text("ชาย"),
            Cell::Text("หญิง"),
            Cell::Text("รวม"),
        ],
        vec![
            Cell::Text("กรุงเทพมหานคร"),
            Cell::Number(380000.0),
            Cell::Number(470000.0),
            Cell::Number(850000.0),
        ],
        vec![
            Cell::Text("เชียงใหม่"),
            Cell::Number(190000.0),
            Cell::Number(230000.0),
            Cell::Number(420000.0),
        ],
    ];
    write_workbook(path, &[("Summary", vec![vec![Cell::Text("x")]]), ("Old people", rows)])
        .expect("Failed to write fixture workbook");
}
