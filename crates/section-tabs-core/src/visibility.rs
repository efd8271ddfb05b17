use std::collections::BTreeMap;

/// One list item currently satisfying the viewability thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisibleItemSample {
    pub section_index: usize,
    pub item_index: usize,
}

impl VisibleItemSample {
    pub fn new(section_index: usize, item_index: usize) -> Self {
        Self {
            section_index,
            item_index,
        }
    }
}

/// Pick the section that dominates a batch of visible items.
///
/// The winner has the strictly highest sample count; on a tie the lowest
/// section index wins. An empty batch has no winner and the caller keeps its
/// previous active index.
pub fn compute_winner(batch: &[VisibleItemSample]) -> Option<usize> {
    let mut tally: BTreeMap<usize, usize> = BTreeMap::new();
    for sample in batch {
        *tally.entry(sample.section_index).or_default() += 1;
    }

    // Ascending key order plus a strict comparison keeps the lowest index on ties.
    let mut winner: Option<(usize, usize)> = None;
    for (section, count) in tally {
        match winner {
            Some((_, best)) if best >= count => {}
            _ => winner = Some((section, count)),
        }
    }
    winner.map(|(section, _)| section)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(pairs: &[(usize, usize)]) -> Vec<VisibleItemSample> {
        pairs
            .iter()
            .map(|&(section, item)| VisibleItemSample::new(section, item))
            .collect()
    }

    #[test]
    fn empty_batch_has_no_winner() {
        assert_eq!(compute_winner(&[]), None);
    }

    #[test]
    fn plurality_section_wins() {
        let samples = batch(&[(0, 4), (1, 0), (1, 1), (1, 2), (2, 0)]);
        assert_eq!(compute_winner(&samples), Some(1));
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let samples = batch(&[(3, 0), (3, 1), (1, 5), (1, 6), (2, 0)]);
        assert_eq!(compute_winner(&samples), Some(1));

        let reversed: Vec<_> = samples.iter().rev().copied().collect();
        assert_eq!(compute_winner(&reversed), Some(1));
    }

    #[test]
    fn winner_count_dominates_every_other_section() {
        let samples = batch(&[
            (0, 0),
            (2, 0),
            (2, 1),
            (4, 0),
            (4, 1),
            (4, 2),
            (5, 0),
            (5, 1),
            (5, 2),
        ]);
        let winner = compute_winner(&samples).expect("non-empty batch has a winner");
        let count_of = |section: usize| {
            samples
                .iter()
                .filter(|sample| sample.section_index == section)
                .count()
        };
        for sample in &samples {
            assert!(count_of(winner) >= count_of(sample.section_index));
        }
        assert_eq!(winner, 4);
    }

    #[test]
    fn single_sample_wins() {
        assert_eq!(compute_winner(&batch(&[(6, 2)])), Some(6));
    }
}
