use crate::{BoardError, Game, Move};
use log::info;
use std::io::{self, BufRead, Write};

/// Play an interactive two-player Othello game on stdin and stdout.
pub fn play_interactive() -> io::Result<Game> {
    let stdin = io::stdin();
    play_scripted(stdin.lock(), io::stdout())
}

/// Play a game reading one move per line from `input`, re-prompting on
/// unparseable or illegal moves. Returns the final state, which is
/// unfinished if `input` runs out first.
pub fn play_scripted<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<Game> {
    let mut lines = input.lines();
    let mut game = Game::default();

    while !game.is_finished() {
        writeln!(output, "\n{}\n", game)?;
        write!(output, "Enter a move: ")?;
        output.flush()?;

        let input_line = match lines.next() {
            Some(line) => line?,
            None => {
                info!("input closed before the game finished");
                return Ok(game);
            }
        };

        let mv: Move = match input_line.parse() {
            Ok(mv) => mv,
            Err(_) => {
                writeln!(output, "Cannot parse move.")?;
                continue;
            }
        };

        match game.apply_move(mv) {
            Ok(next_state) => game = next_state,
            Err(BoardError::IllegalPass) => {
                writeln!(output, "Cannot pass. Legal moves: {}", game.legal_moves())?;
            }
            Err(_) if game.legal_moves().is_empty() => {
                writeln!(output, "Invalid move. Please enter 'pass'.")?;
            }
            Err(_) => {
                writeln!(output, "Invalid move. Legal moves: {}", game.legal_moves())?;
            }
        }
    }

    writeln!(output, "\n{}\n", game)?;
    match game.winner() {
        Some(winner) => writeln!(output, "Winner: {}.", winner)?,
        None => writeln!(output, "Draw.")?,
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiskCounts, Player};

    fn run(script: &str) -> (Game, String) {
        let mut output = Vec::new();
        let game = play_scripted(script.as_bytes(), &mut output).unwrap();
        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn reprompts_on_bad_input() {
        let (game, output) = run("zz\na1\npass\nd3\n");
        assert!(output.contains("Cannot parse move."));
        assert!(output.contains("Invalid move. Legal moves: [D3, C4, F5, E6]"));
        assert!(output.contains("Cannot pass."));
        assert_eq!(game.active_player, Player::White);
        assert_eq!(game.disk_counts(), DiskCounts { black: 4, white: 1 });
    }

    #[test]
    fn stops_when_input_runs_out() {
        let (game, _) = run("");
        assert_eq!(game, Game::default());
    }

    // Shortest possible game: Black wipes out White in nine moves.
    #[test]
    fn plays_to_the_end() {
        let (game, output) = run("e6\nf4\ne3\nf6\ng5\nd6\ne7\nf5\nc5\n");
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Player::Black));
        assert!(output.ends_with("Winner: Black.\n"));
    }
}
