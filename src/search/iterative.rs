use crate::game::{Game, GameError};
use crate::sync::StopFlag;
use crate::tt::TranspositionTable;

use super::alphabeta::SearchContext;
use super::log::{report, SearchInfo};
use super::{evaluate, SearchClock, SearchLimits, SearchResult, WIN_SCORE};

/// Iterative deepening under `limits`.
///
/// Each completed depth replaces the running result; a depth cut short by
/// the clock is thrown away. A lone legal move is returned without search.
pub(crate) fn iterative_deepening(
    game: &Game,
    limits: &SearchLimits,
    stop: &StopFlag,
) -> Result<SearchResult, GameError> {
    let moves = game.legal_moves()?;
    let Some(&first) = moves.first() else {
        return Err(GameError::NotActive { state: game.state() });
    };

    let root = game.side_to_move();
    let clock = SearchClock::new(limits.time_budget, stop.clone());
    let mut result = SearchResult {
        best_move: first,
        score: evaluate(game, root, 0),
        depth: 0,
        nodes: 0,
        elapsed: clock.elapsed(),
    };
    if moves.len() == 1 {
        crate::debug_log!("single legal move {first}, skipping search");
        return Ok(result);
    }

    let mut tt = TranspositionTable::new();
    let mut ctx = SearchContext::new(root, &clock, &mut tt);

    for depth in 1..=limits.depth_ceiling() {
        match ctx.search_root(game, &moves, depth) {
            Ok(Some((best_move, score))) => {
                result.best_move = best_move;
                result.score = score;
                result.depth = depth;

                let info = SearchInfo {
                    depth,
                    score,
                    nodes: ctx.nodes,
                    elapsed: clock.elapsed(),
                    best_move,
                    tt_entries: ctx.tt_len(),
                };
                report(&info, limits.info_callback.as_ref());

                if score >= WIN_SCORE {
                    break;
                }
            }
            Ok(None) => break,
            Err(_) => {
                crate::debug_log!("search stopped during depth {depth}, keeping depth {}", result.depth);
                break;
            }
        }
    }

    result.nodes = ctx.nodes;
    result.elapsed = clock.elapsed();
    Ok(result)
}
