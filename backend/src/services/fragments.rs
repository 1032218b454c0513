//! Fragment simplifier.
//!
//! Enumerates every vacant leg as its own [`VacancyFragment`], without any
//! merging. Stitching across seats is left to the narrative generator.

use crate::models::{CoachRecord, VacancyFragment};

/// One fragment per vacant leg, in coach, seat, then leg order. Unbounded.
pub fn simplify_vacancies(chart: &[CoachRecord]) -> Vec<VacancyFragment> {
    let mut fragments = Vec::new();
    for coach in chart {
        for seat in &coach.seats {
            fragments.extend(seat.legs.iter().filter(|leg| leg.is_vacant()).map(|leg| {
                VacancyFragment {
                    coach: coach.name.clone(),
                    seat: seat.berth_number.clone(),
                    from: leg.from.clone(),
                    to: leg.to.clone(),
                }
            }));
        }
    }
    log::debug!("Simplified chart into {} vacancy fragments", fragments.len());
    fragments
}

/// Render fragments as `"<coach>-<seat> (<from>-><to>)"` strings.
pub fn render_fragments(fragments: &[VacancyFragment]) -> Vec<String> {
    fragments.iter().map(ToString::to_string).collect()
}
