use super::*;

/// Uniformly random placement that keeps the 3x3 zone around the first click free of mines.
///
/// Mines are drawn without replacement from the cells outside the safe zone, so dense
/// configurations cost the same as sparse ones.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinePlacer {
    seed: u64,
    safe: Coord2,
}

impl RandomMinePlacer {
    pub fn new(seed: u64, safe: Coord2) -> Self {
        Self { seed, safe }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place_mines(self, board: &Board, config: BoardConfig) -> Board {
        use rand::{SeedableRng, rngs::SmallRng, seq::index};

        if config.size() != board.size() {
            log::warn!(
                "Config size {:?} does not match board size {:?}, using the board",
                config.size(),
                board.size()
            );
        }

        let excluded: Vec<Coord2> = safe_zone(board, self.safe).collect();
        let eligible: Vec<Coord2> = board
            .iter()
            .filter(|cell| !cell.is_mine)
            .map(|cell| (cell.x, cell.y))
            .filter(|coords| !excluded.contains(coords))
            .collect();

        let requested = usize::from(config.mines);
        let amount = if requested > eligible.len() {
            log::warn!(
                "Requested {} mines but only {} cells are outside the safe zone, placing {}",
                requested,
                eligible.len(),
                eligible.len()
            );
            eligible.len()
        } else {
            requested
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed = board.clone();
        for pick in index::sample(&mut rng, eligible.len(), amount) {
            placed.set_mine(eligible[pick]);
        }

        log::debug!(
            "Placed {} mines on a {}x{} board, safe cell {:?}",
            amount,
            board.columns(),
            board.rows(),
            self.safe
        );
        placed
    }
}
