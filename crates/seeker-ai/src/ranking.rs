//! Read-only view over the race's competitors.

use seeker_core::components::Competitor;
use seeker_core::constants::MAX_PLAYERS;
use seeker_core::types::CompetitorId;

/// Competitors in ascending player-slot order.
///
/// Every scan the controller performs goes through this view so that
/// iteration order, and therefore every tie-break, is fixed.
#[derive(Debug, Clone, Copy)]
pub struct Roster<'a> {
    competitors: &'a [Competitor],
}

impl<'a> Roster<'a> {
    pub fn new(competitors: &'a [Competitor]) -> Self {
        debug_assert!(competitors.len() <= MAX_PLAYERS);
        debug_assert!(
            competitors.windows(2).all(|w| w[0].id < w[1].id),
            "roster must be sorted by player slot"
        );
        Self { competitors }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Competitor> {
        self.competitors.iter()
    }

    pub fn get(&self, id: CompetitorId) -> Option<&'a Competitor> {
        self.competitors.iter().find(|c| c.id == id)
    }

    /// Leading competitor still racing: skips absent players, spectators
    /// and finishers. Lowest rank number wins; ties go to the lower slot.
    pub fn best_ranked(&self) -> Option<&'a Competitor> {
        let mut best: Option<&'a Competitor> = None;
        for competitor in self.competitors {
            if !competitor.is_participating() || competitor.exiting {
                continue;
            }
            if best.map_or(true, |b| competitor.rank < b.rank) {
                best = Some(competitor);
            }
        }
        best
    }
}
