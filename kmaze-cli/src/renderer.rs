use hashbrown::HashSet;
use kmaze::{Dims, RunningGame, RunningGameState};

/// Text picture of the game: walls, visited cells, the solution path and the player.
pub fn render(game: &RunningGame) -> String {
    let maze = game.get_maze();
    let Dims(w, h) = maze.size();

    let visited: HashSet<Dims> = game.visited().iter().copied().collect();
    let path: HashSet<Dims> = game.solution().iter().copied().collect();
    let show_player = game.get_search().is_none() && game.get_state() != RunningGameState::Idle;

    let mark = |cell: Dims| {
        if show_player && cell == game.get_player_pos() {
            '@'
        } else if cell == game.get_start_pos() {
            'S'
        } else if cell == game.get_goal_pos() {
            'E'
        } else if path.contains(&cell) {
            '*'
        } else if visited.contains(&cell) {
            '.'
        } else {
            ' '
        }
    };

    let mut out = String::with_capacity(((w * 4 + 2) * (h * 2 + 1)) as usize);

    for y in 0..h {
        for x in 0..w {
            let cell = Dims(x, y);
            out.push('+');
            if y > 0 && maze.is_passage(cell, Dims(x, y - 1)) {
                out.push_str("   ");
            } else {
                out.push_str("---");
            }
        }
        out.push_str("+\n");

        for x in 0..w {
            let cell = Dims(x, y);
            if x > 0 && maze.is_passage(cell, Dims(x - 1, y)) {
                out.push(' ');
            } else {
                out.push('|');
            }
            out.push(' ');
            out.push(mark(cell));
            out.push(' ');
        }
        out.push_str("|\n");
    }

    for _ in 0..w {
        out.push_str("+---");
    }
    out.push_str("+\n");

    out
}

#[cfg(test)]
mod tests {
    use kmaze::{Maze, Wall};

    use super::*;

    fn two_by_two() -> RunningGame {
        // U shape: (0,0) (0,1) (1,1) (1,0)
        let walls = vec![
            Wall::new(Dims(0, 0), Dims(0, 1), 0),
            Wall::new(Dims(0, 1), Dims(1, 1), 0),
            Wall::new(Dims(1, 1), Dims(1, 0), 0),
            Wall::new(Dims(0, 0), Dims(1, 0), 9),
        ];
        let cells = Dims::iter_fill(Dims::ZERO, Dims(2, 2)).collect();
        RunningGame::new(Maze::from_parts(Dims(2, 2), cells, walls).unwrap())
    }

    #[test]
    fn idle_maze() {
        let expected = "\
+---+---+
| S |   |
+   +   +
|     E |
+---+---+
";
        assert_eq!(render(&two_by_two()), expected);
    }

    #[test]
    fn solved_search_shows_path() {
        let mut game = two_by_two();
        game.begin_search(kmaze::SearchMode::BreadthFirst).unwrap();
        while game.advance().unwrap() == kmaze::Step::Continue {}

        let expected = "\
+---+---+
| S |   |
+   +   +
| *   E |
+---+---+
";
        assert_eq!(render(&game), expected);
    }

    #[test]
    fn manual_player() {
        let mut game = two_by_two();
        game.start_manual().unwrap();
        game.move_player(0, 1).unwrap();

        let expected = "\
+---+---+
| S |   |
+   +   +
| @   E |
+---+---+
";
        assert_eq!(render(&game), expected);
    }
}
