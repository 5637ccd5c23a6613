use anyhow::{bail, Result};

/// A named seed configuration, as (row, column) live cells.
///
/// Coordinates assume the default 30x30 board; cells that fall outside a
/// smaller board are skipped at placement.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(14, 13), (14, 14), (14, 15)],
    },
    Pattern {
        name: "Toad",
        cells: &[(14, 14), (14, 15), (14, 16), (15, 13), (15, 14), (15, 15)],
    },
    Pattern {
        name: "Beacon",
        cells: &[
            (12, 12),
            (12, 13),
            (13, 12),
            (13, 13),
            (14, 14),
            (14, 15),
            (15, 14),
            (15, 15),
        ],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            (8, 10),
            (8, 11),
            (8, 12),
            (8, 16),
            (8, 17),
            (8, 18),
            (10, 8),
            (10, 13),
            (10, 15),
            (10, 20),
            (11, 8),
            (11, 13),
            (11, 15),
            (11, 20),
            (12, 8),
            (12, 13),
            (12, 15),
            (12, 20),
            (13, 10),
            (13, 11),
            (13, 12),
            (13, 16),
            (13, 17),
            (13, 18),
            (15, 10),
            (15, 11),
            (15, 12),
            (15, 16),
            (15, 17),
            (15, 18),
            (16, 8),
            (16, 13),
            (16, 15),
            (16, 20),
            (17, 8),
            (17, 13),
            (17, 15),
            (17, 20),
            (18, 8),
            (18, 13),
            (18, 15),
            (18, 20),
            (20, 10),
            (20, 11),
            (20, 12),
            (20, 16),
            (20, 17),
            (20, 18),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(13, 15), (14, 14), (14, 15), (15, 14), (15, 13)],
    },
];

/// Parses a plaintext `.`/`O` grid into live-cell coordinates.
///
/// Blank lines are skipped; each remaining line is one row, top to bottom,
/// with leading/trailing whitespace ignored. `O`, `o` and `*` mark a live
/// cell, `.` a dead one. Anything else is rejected.
pub fn parse_plaintext(text: &str) -> Result<Vec<(usize, usize)>> {
    let mut live = Vec::new();
    for (row, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        for (column, ch) in line.trim().chars().enumerate() {
            match ch {
                'O' | 'o' | '*' => live.push((row, column)),
                '.' => {}
                _ => bail!("unexpected character {:?} in pattern row {}", ch, row),
            }
        }
    }
    Ok(live)
}

#[cfg(test)]
mod tests {
    use super::parse_plaintext;

    #[test]
    fn parses_rows_top_to_bottom() {
        let live = parse_plaintext(
            "
            .O.
            ..O
            OOO
            ",
        )
        .unwrap();
        assert_eq!(live, vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn rejects_unknown_characters() {
        assert!(parse_plaintext(".Ox").is_err());
    }
}
