use lifegrid::{parse_plaintext, Board};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SEED: u64 = 42;

fn board_from(width: usize, height: usize, text: &str) -> Board {
    Board::with_live_cells(width, height, &parse_plaintext(text).unwrap())
}

fn render(board: &Board) -> String {
    let mut out = String::new();
    board.for_each_cell(|_, column, alive| {
        out.push(if alive { 'O' } else { '.' });
        if column + 1 == board.width() {
            out.push('\n');
        }
    });
    out
}

fn normalize(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| format!("{}\n", l))
        .collect()
}

#[test]
fn all_dead_board_stays_dead() {
    let mut board = Board::new(5, 5);
    board.step();
    assert_eq!(board.population(), 0);
}

#[test]
fn lone_cell_dies_of_isolation() {
    let mut board = Board::with_live_cells(5, 5, &[(2, 2)]);
    board.step();
    assert_eq!(board.population(), 0);
}

#[test]
fn block_is_a_still_life() {
    let start = "
        .....
        .OO..
        .OO..
        .....
        .....
    ";
    let mut board = board_from(5, 5, start);
    board.step();
    assert_eq!(render(&board), normalize(start));
}

#[test]
fn l_tromino_settles_into_a_block() {
    let mut board = board_from(
        5,
        5,
        "
        .....
        .OO..
        .O...
        .....
        .....
        ",
    );
    let block = normalize(
        "
        .....
        .OO..
        .OO..
        .....
        .....
        ",
    );

    board.step();
    assert_eq!(render(&board), block);

    // The block is a fixed point, so generation two is unchanged.
    board.step();
    assert_eq!(render(&board), block);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let horizontal = "
        .....
        .....
        .OOO.
        .....
        .....
    ";
    let vertical = "
        .....
        ..O..
        ..O..
        ..O..
        .....
    ";
    let mut board = board_from(5, 5, horizontal);

    board.step();
    assert_eq!(render(&board), normalize(vertical));

    board.step();
    assert_eq!(render(&board), normalize(horizontal));
}

#[test]
fn blinker_oscillates_across_the_seam() {
    // A vertical blinker straddling the top/bottom edge: the wrapped rows
    // behave exactly like adjacent interior rows.
    let through_seam = "
        ..O..
        ..O..
        .....
        .....
        ..O..
    ";
    let flat_on_top = "
        .OOO.
        .....
        .....
        .....
        .....
    ";
    let mut board = board_from(5, 5, through_seam);

    board.step();
    assert_eq!(render(&board), normalize(flat_on_top));

    board.step();
    assert_eq!(render(&board), normalize(through_seam));
}

#[test]
fn aliased_neighbors_double_count_on_tiny_boards() {
    // On a 1x1 torus the cell is its own 8 neighbors, so a live cell sees
    // n == 8 and dies.
    let mut board = Board::with_live_cells(1, 1, &[(0, 0)]);
    board.step();
    assert_eq!(board.population(), 0);

    // Fully live 2x2: every cell counts 8 live neighbors through aliasing.
    let mut board = Board::with_live_cells(2, 2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    board.step();
    assert_eq!(board.population(), 0);
}

#[test]
fn toggle_out_of_range_is_a_noop() {
    let mut board = board_from(
        5,
        5,
        "
        .....
        .OO..
        .OO..
        .....
        .....
        ",
    );
    let before = render(&board);

    board.toggle_cell(-1, 0);
    board.toggle_cell(0, -1);
    board.toggle_cell(5, 0);
    board.toggle_cell(0, 5);
    board.toggle_cell(100, 100);

    assert_eq!(render(&board), before);
}

#[test]
fn toggle_flips_a_cell_both_ways() {
    let mut board = Board::new(5, 5);
    board.toggle_cell(2, 3);
    assert!(board.get(2, 3));
    board.toggle_cell(2, 3);
    assert!(!board.get(2, 3));
    assert_eq!(board.population(), 0);
}

#[test]
fn with_live_cells_skips_out_of_range_seeds() {
    let board = Board::with_live_cells(5, 5, &[(1, 1), (7, 7), (4, 9)]);
    assert_eq!(board.population(), 1);
    assert!(board.get(1, 1));
}

#[test]
fn step_matches_bruteforce_recount() {
    const N: usize = 16;

    let mut board = Board::new(N, N);
    board.randomize(Some(SEED), 0.3);

    let mut current = vec![vec![false; N]; N];
    board.for_each_cell(|row, column, alive| current[row][column] = alive);

    // Independent recount with its own wraparound arithmetic.
    let mut expected = vec![vec![false; N]; N];
    for (row, expected_row) in expected.iter_mut().enumerate() {
        for (column, slot) in expected_row.iter_mut().enumerate() {
            let mut n = 0;
            for dr in [N - 1, 0, 1] {
                for dc in [N - 1, 0, 1] {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    if current[(row + dr) % N][(column + dc) % N] {
                        n += 1;
                    }
                }
            }
            *slot = if current[row][column] {
                n == 2 || n == 3
            } else {
                n == 3
            };
        }
    }

    board.step();
    let mut got = vec![vec![false; N]; N];
    board.for_each_cell(|row, column, alive| got[row][column] = alive);
    assert_eq!(got, expected);
}

#[test]
fn randomize_is_reproducible_for_a_fixed_seed() {
    let mut a = Board::new(10, 10);
    let mut b = Board::new(10, 10);
    a.randomize(Some(SEED), 0.3);
    b.randomize(Some(SEED), 0.3);
    assert_eq!(render(&a), render(&b));
    assert!(a.population() > 0);

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let first: bool = rng.gen_bool(0.3);
    assert_eq!(a.get(0, 0), first);
}
