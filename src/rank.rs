use crate::record::{RankedEntry, ScoredRecord};

/// Number of products reported when no other size is configured
pub const DEFAULT_TOP_N: usize = 3;

/// Order records by descending score and keep the best `n`.
///
/// Equal scores keep their input order. Fewer than `n` records are all ranked;
/// an empty input gives an empty ranking.
pub fn rank(scored: &[ScoredRecord], n: usize) -> Vec<RankedEntry> {
    let mut ordered: Vec<&ScoredRecord> = scored.iter().collect();
    // Stable sort; the secondary key makes the input order explicit
    ordered.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.record.input_index.cmp(&b.record.input_index))
    });

    ordered
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, scored)| RankedEntry {
            rank: i + 1,
            scored: scored.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NormalizedRecord, SubScores};

    fn scored(index: usize, score: f64) -> ScoredRecord {
        ScoredRecord {
            record: NormalizedRecord {
                input_index: index,
                title: format!("P{}", index),
                price: Some(1.0),
                url: String::new(),
                rating: Some(1.0),
                rating_count: Some(1),
            },
            parts: SubScores { rating: 0.0, count: 0.0, price: 0.0 },
            score,
        }
    }

    #[test]
    fn test_descending_order_and_truncation() {
        let input = vec![scored(0, 2.0), scored(1, 9.0), scored(2, 5.0), scored(3, 7.0)];
        let ranking = rank(&input, 3);

        let indices: Vec<usize> = ranking.iter().map(|e| e.scored.record.input_index).collect();
        assert_eq!(indices, vec![1, 3, 2]);
        let ranks: Vec<usize> = ranking.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = vec![scored(0, 4.0), scored(1, 6.0), scored(2, 4.0), scored(3, 4.0)];
        let ranking = rank(&input, 4);

        let indices: Vec<usize> = ranking.iter().map(|e| e.scored.record.input_index).collect();
        assert_eq!(indices, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_fewer_records_than_n() {
        let ranking = rank(&[scored(0, 1.0), scored(1, 3.0)], DEFAULT_TOP_N);
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].rank, 1);
        assert_eq!(ranking[1].rank, 2);
    }

    #[test]
    fn test_empty_and_zero_n() {
        assert!(rank(&[], DEFAULT_TOP_N).is_empty());
        assert!(rank(&[scored(0, 1.0)], 0).is_empty());
    }

    #[test]
    fn test_label() {
        let ranking = rank(&[scored(0, 1.0)], 1);
        assert_eq!(ranking[0].label(), "1º");
    }
}
