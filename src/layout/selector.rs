// Mon Feb 2 2026 - Alex

use crate::facts::{RecordId, TranslationUnitFacts};

/// The 1-based target position the user asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationFilter {
    pub row: u32,
    pub col: u32,
}

impl LocationFilter {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Picks the single best class/struct declaration for a target position.
pub struct DeclarationSelector<'a> {
    facts: &'a TranslationUnitFacts,
}

impl<'a> DeclarationSelector<'a> {
    pub fn new(facts: &'a TranslationUnitFacts) -> Self {
        Self { facts }
    }

    /// Among eligible declarations whose range contains the target, the one
    /// with the latest start position wins: nested declarations start later
    /// than everything that encloses them. An equal start does not replace
    /// the current winner.
    ///
    /// `None` is the not-found outcome, not an error.
    pub fn select_best(&self, filter: LocationFilter) -> Option<RecordId> {
        let mut best: Option<(RecordId, (u32, u32))> = None;

        for decl in &self.facts.decls {
            let Some(record_id) = decl.record else {
                continue;
            };
            let Ok(record) = self.facts.record(record_id) else {
                log::warn!("Declaration references unknown record id {}", record_id.0);
                continue;
            };
            if !record.is_eligible() {
                continue;
            }
            if !decl.range.contains(filter.row, filter.col) {
                continue;
            }

            let start = decl.range.start();
            if best.map_or(true, |(_, best_start)| start > best_start) {
                best = Some((record_id, start));
            }
        }

        best.map(|(record_id, _)| record_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{AbiKind, DeclFacts, RecordFacts, SrcRange, TargetFacts};

    fn unit() -> TranslationUnitFacts {
        TranslationUnitFacts::new(TargetFacts {
            abi: AbiKind::Itanium,
            pointer_size: 8,
            pointer_align: 8,
        })
    }

    fn add(facts: &mut TranslationUnitFacts, record: RecordFacts, range: SrcRange) -> RecordId {
        let id = facts.add_record(record);
        facts.add_decl(DeclFacts::new(Some(id), range));
        id
    }

    #[test]
    fn test_innermost_declaration_wins() {
        let mut facts = unit();
        let outer = add(
            &mut facts,
            RecordFacts::new("Outer", 16, 16, 4),
            SrcRange::new(1, 1, 20, 1),
        );
        let inner = add(
            &mut facts,
            RecordFacts::new("Outer::Inner", 8, 8, 4),
            SrcRange::new(5, 5, 10, 5),
        );

        let selector = DeclarationSelector::new(&facts);
        assert_eq!(selector.select_best(LocationFilter::new(7, 3)), Some(inner));
        assert_eq!(selector.select_best(LocationFilter::new(15, 1)), Some(outer));
    }

    #[test]
    fn test_range_endpoints_are_inclusive() {
        let mut facts = unit();
        let id = add(
            &mut facts,
            RecordFacts::new("Point", 8, 8, 4),
            SrcRange::new(3, 1, 6, 2),
        );

        let selector = DeclarationSelector::new(&facts);
        assert_eq!(selector.select_best(LocationFilter::new(3, 1)), Some(id));
        assert_eq!(selector.select_best(LocationFilter::new(6, 2)), Some(id));
        assert_eq!(selector.select_best(LocationFilter::new(6, 3)), None);
        assert_eq!(selector.select_best(LocationFilter::new(2, 50)), None);
    }

    #[test]
    fn test_ineligible_candidates_are_skipped() {
        let mut facts = unit();
        let range = SrcRange::new(1, 1, 10, 1);
        add(
            &mut facts,
            RecordFacts::new("Dependent", 0, 0, 1).with_dependent(),
            range,
        );
        add(
            &mut facts,
            RecordFacts::new("Broken", 4, 4, 4).with_invalid(),
            range,
        );
        add(
            &mut facts,
            RecordFacts::new("Forward", 0, 0, 1).without_definition(),
            range,
        );
        facts.add_decl(DeclFacts::new(None, range));

        let selector = DeclarationSelector::new(&facts);
        assert_eq!(selector.select_best(LocationFilter::new(5, 1)), None);
    }

    #[test]
    fn test_variable_declaration_selects_its_class_type() {
        let mut facts = unit();
        let class = facts.add_record(RecordFacts::new("Widget", 24, 24, 8));
        facts.add_decl(DeclFacts::new(Some(class), SrcRange::new(1, 1, 5, 2)));
        // The variable `Widget w;` on line 30 carries the same record.
        facts.add_decl(DeclFacts::new(Some(class), SrcRange::new(30, 1, 30, 9)));

        let selector = DeclarationSelector::new(&facts);
        assert_eq!(
            selector.select_best(LocationFilter::new(30, 4)),
            Some(class)
        );
    }

    #[test]
    fn test_equal_start_keeps_first_match() {
        let mut facts = unit();
        let range = SrcRange::new(2, 1, 8, 1);
        let first = add(&mut facts, RecordFacts::new("A", 4, 4, 4), range);
        add(&mut facts, RecordFacts::new("B", 4, 4, 4), range);

        let selector = DeclarationSelector::new(&facts);
        assert_eq!(selector.select_best(LocationFilter::new(4, 1)), Some(first));
    }

    #[test]
    fn test_no_match_outside_every_declaration() {
        let mut facts = unit();
        add(
            &mut facts,
            RecordFacts::new("Point", 8, 8, 4),
            SrcRange::new(1, 1, 4, 2),
        );

        let selector = DeclarationSelector::new(&facts);
        assert_eq!(selector.select_best(LocationFilter::new(100, 1)), None);
    }
}
