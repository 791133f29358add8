use crate::libs::hit::HitRecord;
use crate::libs::seqid::IdSplitter;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct BestHit {
    pub subject_id: String,
    pub score: f64,
}

/// Best cross-group hit of every query, in order of first appearance.
#[derive(Debug, Default, Clone)]
pub struct BestHitTable {
    hits: IndexMap<String, BestHit>,
}

impl BestHitTable {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds the table from hits in input order.
    ///
    /// Hits within one group never compete. IDs without a group prefix are
    /// skipped with a warning.
    pub fn from_hits<S: IdSplitter>(hits: &[HitRecord], splitter: &S) -> Self {
        let mut table = Self::new();
        for hit in hits {
            let (q_prefix, s_prefix) = match (
                splitter.prefix(&hit.query_id),
                splitter.prefix(&hit.subject_id),
            ) {
                (Some(q), Some(s)) => (q, s),
                _ => {
                    log::warn!(
                        "Skipping hit with an ID lacking a group prefix: {}\t{}",
                        hit.query_id,
                        hit.subject_id
                    );
                    continue;
                }
            };
            if q_prefix == s_prefix {
                continue;
            }
            table.update(&hit.query_id, &hit.subject_id, hit.score);
        }
        table
    }

    /// Records `subject` as the best hit of `query` if the query is new or
    /// `score` is strictly greater. Ties keep the earlier hit.
    pub fn update(&mut self, query: &str, subject: &str, score: f64) {
        match self.hits.get_mut(query) {
            Some(best) if score > best.score => {
                best.subject_id = subject.to_string();
                best.score = score;
            }
            Some(_) => {}
            None => {
                self.hits.insert(
                    query.to_string(),
                    BestHit {
                        subject_id: subject.to_string(),
                        score,
                    },
                );
            }
        }
    }

    pub fn get(&self, query: &str) -> Option<&BestHit> {
        self.hits.get(query)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BestHit)> {
        self.hits.iter()
    }

    /// `a` and `b` are each other's best hit.
    pub fn is_reciprocal(&self, a: &str, b: &str) -> bool {
        matches!(self.get(a), Some(hit) if hit.subject_id == b)
            && matches!(self.get(b), Some(hit) if hit.subject_id == a)
    }

    /// All reciprocal best hits, each unordered pair once.
    pub fn reciprocal_pairs(&self) -> BTreeSet<RbhPair> {
        let mut pairs = BTreeSet::new();
        for (query, best) in self.iter() {
            if self.is_reciprocal(query, &best.subject_id) {
                pairs.insert(RbhPair::new(query, &best.subject_id));
            }
        }
        pairs
    }
}

/// An unordered pair of IDs, stored with the smaller full ID first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RbhPair {
    first: String,
    second: String,
}

impl RbhPair {
    /// ```
    /// use rbhmap::libs::rbh::RbhPair;
    /// assert_eq!(RbhPair::new("B_1", "A_1"), RbhPair::new("A_1", "B_1"));
    /// assert_eq!(RbhPair::new("B_1", "A_1").first(), "A_1");
    /// ```
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            RbhPair {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            RbhPair {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn ids(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }
}

impl fmt::Display for RbhPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.first, self.second)
    }
}

/// Reciprocal best hits between the two groups found in `hits`.
pub fn find_rbh<S: IdSplitter>(hits: &[HitRecord], splitter: &S) -> BTreeSet<RbhPair> {
    let table = BestHitTable::from_hits(hits, splitter);
    let pairs = table.reciprocal_pairs();
    log::info!(
        "{} queries with a cross-group best hit, {} reciprocal best hits",
        table.len(),
        pairs.len()
    );
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::seqid::Separator;

    fn hit(q: &str, s: &str, score: f64) -> HitRecord {
        HitRecord {
            query_id: q.to_string(),
            subject_id: s.to_string(),
            score,
        }
    }

    #[test]
    fn test_first_max_wins() {
        let hits = vec![
            hit("A_q1", "B_s1", 10.0),
            hit("A_q1", "B_s2", 5.0),
            hit("A_q1", "B_s3", 10.0),
        ];
        let table = BestHitTable::from_hits(&hits, &Separator::default());
        assert_eq!(
            table.get("A_q1"),
            Some(&BestHit {
                subject_id: "B_s1".to_string(),
                score: 10.0
            })
        );

        let hits = vec![hit("A_q1", "B_s2", 5.0), hit("A_q1", "B_s1", 10.0)];
        let table = BestHitTable::from_hits(&hits, &Separator::default());
        assert_eq!(table.get("A_q1").unwrap().subject_id, "B_s1");
    }

    #[test]
    fn test_same_group_ignored() {
        let hits = vec![
            hit("A_1", "A_2", 1000.0),
            hit("A_1", "B_1", 1.0),
            hit("A_2", "A_1", 1000.0),
        ];
        let table = BestHitTable::from_hits(&hits, &Separator::default());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("A_1").unwrap().subject_id, "B_1");
        assert!(table.get("A_2").is_none());
    }

    #[test]
    fn test_missing_prefix_skipped() {
        let hits = vec![hit("A1", "B_1", 99.0), hit("A_1", "B_1", 1.0)];
        let table = BestHitTable::from_hits(&hits, &Separator::default());
        assert_eq!(table.len(), 1);
        assert!(table.get("A1").is_none());
    }

    #[test]
    fn test_find_rbh_example() {
        let hits = vec![
            hit("A_1", "B_1", 50.0),
            hit("B_1", "A_1", 50.0),
            hit("A_2", "B_2", 10.0),
            hit("B_2", "A_3", 20.0),
        ];
        let pairs = find_rbh(&hits, &Separator::default());
        assert_eq!(pairs.len(), 1);
        assert!(pairs.contains(&RbhPair::new("A_1", "B_1")));
        assert!(!pairs.contains(&RbhPair::new("A_2", "B_2")));
    }

    #[test]
    fn test_one_sided_excluded() {
        // B_1 never appears as a query
        let hits = vec![hit("A_1", "B_1", 50.0)];
        let pairs = find_rbh(&hits, &Separator::default());
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_pairs_symmetric_and_bidirectional() {
        let hits = vec![
            hit("B_1", "A_1", 50.0),
            hit("A_1", "B_1", 50.0),
            hit("A_2", "B_2", 30.0),
            hit("B_2", "A_2", 31.0),
            hit("A_3", "B_2", 40.0),
            hit("B_3", "A_1", 60.0),
        ];
        let splitter = Separator::default();
        let table = BestHitTable::from_hits(&hits, &splitter);
        let pairs = table.reciprocal_pairs();

        assert_eq!(pairs.len(), 2);
        for pair in &pairs {
            assert!(pair.first() <= pair.second());
            assert!(!pairs.contains(&RbhPair {
                first: pair.second().to_string(),
                second: pair.first().to_string(),
            }));
            assert!(table.is_reciprocal(pair.first(), pair.second()));
            assert_eq!(table.get(pair.first()).unwrap().subject_id, pair.second());
            assert_eq!(table.get(pair.second()).unwrap().subject_id, pair.first());
        }
        assert!(pairs.contains(&RbhPair::new("A_2", "B_2")));
    }

    #[test]
    fn test_rbh_pair_display() {
        assert_eq!(RbhPair::new("B_x", "A_y").to_string(), "A_y\tB_x");
        assert_eq!(RbhPair::new("B_x", "A_y").ids(), ["A_y", "B_x"]);
    }
}
