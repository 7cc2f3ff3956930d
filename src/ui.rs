//! Terminal UI utilities.
//!
//! A small box-drawing table for list output. Column widths follow the
//! widest cell; ANSI color codes are measured out via `console` so colored
//! cells line up.

use std::cmp;

use colored::*;
use console::measure_text_width;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn print(&self) {
        if self.headers.is_empty() {
            return;
        }

        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| measure_text_width(h))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = cmp::max(widths[i], measure_text_width(cell));
            }
        }

        let sep = |left: &str, mid: &str, right: &str| {
            let mut s = String::from("  ");
            s.push_str(left);
            for (i, w) in widths.iter().enumerate() {
                s.push_str(&"─".repeat(w + 2));
                s.push_str(if i < widths.len() - 1 { mid } else { right });
            }
            s
        };

        println!("{}", sep("┌", "┬", "┐"));
        print!("  │");
        for (i, header) in self.headers.iter().enumerate() {
            let pad = widths[i] - measure_text_width(header);
            print!(" {}{} │", header.bold(), " ".repeat(pad));
        }
        println!();
        println!("{}", sep("├", "┼", "┤"));
        for row in &self.rows {
            print!("  │");
            for (i, cell) in row.iter().enumerate() {
                let pad = widths[i] - measure_text_width(cell);
                print!(" {}{} │", cell, " ".repeat(pad));
            }
            println!();
        }
        println!("{}", sep("└", "┴", "┘"));
    }
}
