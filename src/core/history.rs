use crate::core::PredictionRecord;

/// Append-only log of the predictions made during one session.
#[derive(Debug, Default)]
pub struct History {
    records: Vec<PredictionRecord>,
}

impl History {
    pub(crate) fn push(&mut self, record: PredictionRecord) {
        self.records.push(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest(&self) -> Option<&PredictionRecord> {
        self.records.last()
    }

    pub fn get(&self, idx: usize) -> Option<&PredictionRecord> {
        self.records.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PredictionRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a PredictionRecord;
    type IntoIter = std::slice::Iter<'a, PredictionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SensorVector;

    fn record(rul: f64) -> PredictionRecord {
        PredictionRecord::new(rul, SensorVector::zeros())
    }

    #[test]
    fn default_is_empty_and_latest_none() {
        let h = History::default();
        assert_eq!(h.len(), 0);
        assert!(h.is_empty());
        assert!(h.latest().is_none());
    }

    #[test]
    fn push_appends_in_order() {
        let mut h = History::default();
        h.push(record(100.0));
        h.push(record(20.0));
        h.push(record(55.5));

        assert_eq!(h.len(), 3);
        let ruls: Vec<f64> = h.iter().map(|r| r.rul()).collect();
        assert_eq!(ruls, vec![100.0, 20.0, 55.5]);
        assert_eq!(h.latest().unwrap().rul(), 55.5);
        assert_eq!(h.get(1).unwrap().rul(), 20.0);
        assert!(h.get(3).is_none());
    }
}
