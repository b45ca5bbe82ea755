use crate::board::{Color, Move};
use crate::game::Game;
use crate::tt::{BoundType, TranspositionTable, TtEntry};

use super::{evaluate, SearchAborted, SearchClock, INF};

/// Per-search state threaded through the recursion.
pub(crate) struct SearchContext<'a> {
    root: Color,
    clock: &'a SearchClock,
    tt: &'a mut TranspositionTable,
    pub(crate) nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(root: Color, clock: &'a SearchClock, tt: &'a mut TranspositionTable) -> Self {
        SearchContext {
            root,
            clock,
            tt,
            nodes: 0,
        }
    }

    pub(crate) fn tt_len(&self) -> usize {
        self.tt.len()
    }

    /// Search every root move to `depth` and return the best one with its
    /// score, or `None` if no move could be played. The root is always a
    /// maximizing node.
    pub(crate) fn search_root(
        &mut self,
        game: &Game,
        moves: &[Move],
        depth: u32,
    ) -> Result<Option<(Move, i32)>, SearchAborted> {
        self.clock.check()?;
        self.nodes += 1;

        let hash = game.hash();
        let ordered = self.order_moves(hash, moves.to_vec());
        let mut alpha = -INF;
        let mut best: Option<(Move, i32)> = None;

        for mv in ordered {
            let Some(child) = play(game, &mv) else {
                continue;
            };
            let score = self.alphabeta(&child, depth - 1, alpha, INF, false)?;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        let Some((best_move, score)) = best else {
            return Ok(None);
        };
        self.tt.store(
            hash,
            TtEntry {
                depth,
                score,
                bound: BoundType::Exact,
                best_move: Some(best_move),
            },
        );
        Ok(Some((best_move, score)))
    }

    /// Minimax with alpha-beta pruning. `maximizing` is true on nodes where
    /// the root side is to move.
    pub(crate) fn alphabeta(
        &mut self,
        game: &Game,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<i32, SearchAborted> {
        self.clock.check()?;
        self.nodes += 1;

        if depth == 0 || !game.state().is_active() {
            return Ok(evaluate(game, self.root, depth));
        }

        let hash = game.hash();
        if let Some(score) = self
            .tt
            .probe(hash)
            .and_then(|entry| entry.cutoff(depth, alpha, beta))
        {
            return Ok(score);
        }

        let Ok(moves) = game.legal_moves() else {
            return Ok(evaluate(game, self.root, depth));
        };
        let (alpha0, beta0) = (alpha, beta);
        let mut best = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mv in self.order_moves(hash, moves) {
            let Some(child) = play(game, &mv) else {
                continue;
            };
            let score = self.alphabeta(&child, depth - 1, alpha, beta, !maximizing)?;
            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        self.tt.store(
            hash,
            TtEntry {
                depth,
                score: best,
                bound: BoundType::classify(best, alpha0, beta0),
                best_move,
            },
        );
        Ok(best)
    }

    /// Put the remembered best move first, keeping generation order otherwise.
    fn order_moves(&self, hash: u64, mut moves: Vec<Move>) -> Vec<Move> {
        if let Some(tt_move) = self.tt.best_move(hash) {
            if let Some(pos) = moves.iter().position(|m| *m == tt_move) {
                moves[..=pos].rotate_right(1);
            }
        }
        moves
    }
}

/// The game after `mv`, on a copy.
#[inline]
fn play(game: &Game, mv: &Move) -> Option<Game> {
    let mut child = game.clone();
    child.apply_move(mv).ok()?;
    Some(child)
}
