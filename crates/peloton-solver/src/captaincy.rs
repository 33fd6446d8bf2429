//! Per-event captaincy assignment.
//!
//! For every event the participating roster members are ranked by that
//! event's projected points; the top three get the captain multipliers and
//! everyone else counts once. A member may captain any number of events.

use peloton_core::{CompetitorId, EventCatalog, EventCode, Multiplier, PelotonError, Points, Result, CAPTAIN_COUNT};

use crate::roster::Roster;

/// One ranked member in one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptaincyEntry {
    /// 1-based rank within the event.
    pub rank: usize,
    pub competitor: CompetitorId,
    pub name: String,
    pub multiplier: Multiplier,
    pub base_points: Points,
    pub boosted_points: Points,
}

/// The ranked participants of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventAssignment {
    pub event: EventCode,
    pub event_name: String,
    /// Empty when no roster member is entered.
    pub entries: Vec<CaptaincyEntry>,
}

impl EventAssignment {
    /// The boosted entries, at most [`CAPTAIN_COUNT`].
    pub fn captains(&self) -> &[CaptaincyEntry] {
        &self.entries[..self.entries.len().min(CAPTAIN_COUNT)]
    }

    pub fn base_total(&self) -> Points {
        self.entries.iter().map(|e| e.base_points).sum()
    }

    pub fn boosted_total(&self) -> Points {
        self.entries.iter().map(|e| e.boosted_points).sum()
    }
}

/// Captaincy for a whole season, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptaincyPlan {
    assignments: Vec<EventAssignment>,
    season_base: Points,
}

impl CaptaincyPlan {
    pub fn assignments(&self) -> &[EventAssignment] {
        &self.assignments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventAssignment> {
        self.assignments.iter()
    }

    pub fn get(&self, code: &str) -> Option<&EventAssignment> {
        self.assignments.iter().find(|a| a.event.as_str() == code)
    }

    /// The roster's unmultiplied projected total.
    pub fn season_base_points(&self) -> Points {
        self.season_base
    }

    /// Every entry's boosted points across every event.
    pub fn season_boosted_points(&self) -> Points {
        self.assignments.iter().map(|a| a.boosted_total()).sum()
    }

    /// Points gained from captaincy.
    pub fn bonus(&self) -> Points {
        self.season_boosted_points() - self.season_base
    }
}

impl<'a> IntoIterator for &'a CaptaincyPlan {
    type Item = &'a EventAssignment;
    type IntoIter = std::slice::Iter<'a, EventAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}

/// Ranks the roster in every catalog event.
///
/// Ties on event points are broken by ascending id.
///
/// # Errors
///
/// [`PelotonError::MalformedCatalog`] if the roster was scored against a
/// different catalog.
///
/// # Examples
///
/// ```
/// use peloton_core::{CompetitorId, Multiplier, Points};
/// use peloton_scoring::score;
/// use peloton_solver::{assign_captaincy, Roster};
/// use peloton_test::three_rider_market;
///
/// let (catalog, riders) = three_rider_market();
/// let table = score(&riders, &catalog).unwrap();
/// let roster = Roster::from_ids(&table, [CompetitorId(1), CompetitorId(2)]).unwrap();
///
/// let plan = assign_captaincy(&roster, &catalog).unwrap();
/// let cobbles = plan.get("cobbles-race").unwrap();
/// assert_eq!(cobbles.entries[0].multiplier, Multiplier::FIRST);
/// assert_eq!(cobbles.entries[0].boosted_points, Points::whole(84));
/// ```
pub fn assign_captaincy(roster: &Roster, catalog: &EventCatalog) -> Result<CaptaincyPlan> {
    if roster.catalog_fingerprint() != catalog.fingerprint() {
        return Err(PelotonError::MalformedCatalog(
            "roster was scored against a different catalog".into(),
        ));
    }

    let assignments = catalog
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let mut entered: Vec<_> = roster
                .iter()
                .filter(|m| m.competitor().participates(event.code.as_str()))
                .map(|m| (m, m.points_at(index)))
                .collect();
            entered.sort_by(|(a, pa), (b, pb)| pb.cmp(pa).then(a.id().cmp(&b.id())));

            let entries = entered
                .into_iter()
                .enumerate()
                .map(|(i, (member, base))| {
                    let multiplier = Multiplier::for_rank(i + 1);
                    CaptaincyEntry {
                        rank: i + 1,
                        competitor: member.id(),
                        name: member.name().to_string(),
                        multiplier,
                        base_points: base,
                        boosted_points: base.boosted(multiplier),
                    }
                })
                .collect();

            EventAssignment {
                event: event.code.clone(),
                event_name: event.name.clone(),
                entries,
            }
        })
        .collect();

    Ok(CaptaincyPlan {
        assignments,
        season_base: roster.total_points(),
    })
}
