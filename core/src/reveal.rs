use crate::*;

impl Board {
    /// Reveals a hidden cell, cascading through connected zero-count cells.
    ///
    /// Revealed and flagged cells are left alone. The cascade opens the whole empty region plus
    /// its numbered border and never passes through flagged cells.
    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        if !self[coords].is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        self[coords].is_revealed = true;
        if self[coords].is_mine {
            log::debug!("Revealed mine at {:?}", coords);
            return Ok(RevealOutcome::HitMine);
        }

        if self[coords].is_empty_region() {
            self.flood_fill(coords);
        }

        Ok(RevealOutcome::Revealed)
    }

    /// Reveals exactly one cell, mine or not, without cascading.
    pub fn reveal_mine(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self[coords];

        if cell.is_revealed {
            return Ok(RevealOutcome::NoChange);
        }

        cell.is_revealed = true;
        Ok(if cell.is_mine {
            RevealOutcome::HitMine
        } else {
            RevealOutcome::Revealed
        })
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self[coords];

        if cell.is_revealed {
            return Ok(MarkOutcome::NoChange);
        }

        cell.is_flagged = !cell.is_flagged;
        Ok(MarkOutcome::Changed)
    }

    /// Every safe cell is revealed. Mines need not be flagged.
    pub fn check_win_condition(&self) -> bool {
        self.iter().all(|cell| cell.is_mine || cell.is_revealed)
    }

    /// Iterative flood fill from an already revealed empty cell, using `is_revealed` as the
    /// visited mark.
    fn flood_fill(&mut self, start: Coord2) {
        let mut to_visit = vec![start];
        let mut opened = 0usize;

        while let Some(visit_coords) = to_visit.pop() {
            for pos in self.iter_neighbors(visit_coords) {
                let neighbor = &mut self[pos];
                if !neighbor.is_hidden() || neighbor.is_mine {
                    continue;
                }

                neighbor.is_revealed = true;
                opened += 1;
                if neighbor.adjacent_mines == 0 {
                    to_visit.push(pos);
                }
            }
        }

        log::trace!("Flood fill from {:?} opened {} cells", start, opened);
    }
}
