use std::io::{self, Write};

/// Minimal column printer for report tables: auto-sized widths, per-column
/// alignment and padding character (dotted leaders for balance listings).
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub align: Align,
    pub padding: char,
}

impl Column {
    pub fn left() -> Column {
        Column {
            align: Align::Left,
            padding: ' ',
        }
    }

    pub fn right() -> Column {
        Column {
            align: Align::Right,
            padding: ' ',
        }
    }

    pub fn dotted() -> Column {
        Column {
            align: Align::Left,
            padding: '.',
        }
    }
}

pub fn print_rows<W: Write>(
    out: &mut W,
    rows: &[Vec<String>],
    columns: &[Column],
) -> io::Result<()> {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(idx, _)| {
            rows.iter()
                .map(|row| row[idx].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(columns)
            .zip(&widths)
            .map(|((value, column), &width)| pad(value, width, column))
            .collect();
        writeln!(out, "{}", cells.join(" ").trim_end())?;
    }
    Ok(())
}

fn pad(value: &str, width: usize, column: &Column) -> String {
    let fill: String = column
        .padding
        .to_string()
        .repeat(width.saturating_sub(value.chars().count()));
    match column.align {
        Align::Left => format!("{value}{fill}"),
        Align::Right => format!("{fill}{value}"),
    }
}

#[cfg(test)]
mod tests {
    use crate::table::{print_rows, Column};

    fn rows(data: &[[&str; 2]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn dotted_leaders_and_right_alignment() {
        let mut out = Vec::new();
        print_rows(
            &mut out,
            &rows(&[["assets", "-24.00"], ["    bank", "24.00"]]),
            &[Column::dotted(), Column::right()],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "assets.. -24.00\n    bank  24.00\n"
        );
    }
}
