use std::io::{self, Write};

use slide2048_engine::{Direction, GameSession, TileSeed};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScriptArg {
    /// Seed for tile spawning, as 32 hex digits
    #[clap(long)]
    seed: TileSeed,
    /// Moves to apply in order (up, down, left, right), separated by commas
    #[clap(long, value_delimiter = ',')]
    moves: Vec<Direction>,
}

/// Plays `moves` on a seeded session and prints the grid after each one.
///
/// The high score file is neither read nor written.
pub(crate) fn run(arg: &ScriptArg) -> anyhow::Result<()> {
    play_moves(arg, &mut io::stdout().lock())
}

fn play_moves<W>(arg: &ScriptArg, out: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    let ScriptArg { seed, moves } = arg;

    let mut session = GameSession::with_seed(*seed);
    writeln!(out, "{}", session.grid())?;

    for (i, direction) in moves.iter().copied().enumerate() {
        let outcome = session.apply_move(direction);
        let result = if outcome.effective {
            format!("+{}", outcome.merge_sum)
        } else {
            "no change".to_owned()
        };
        writeln!(out)?;
        writeln!(out, "#{} {}: {result}", i + 1, direction.as_str())?;
        writeln!(out, "{}", session.grid())?;
        if outcome.won {
            writeln!(out, "You win!")?;
        }
        if outcome.game_over {
            writeln!(out, "Game over!")?;
            break;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "score: {}, moves: {}",
        session.stats().score(),
        session.stats().moves()
    )?;
    Ok(())
}
