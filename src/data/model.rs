use serde::Deserialize;

// ---------------------------------------------------------------------------
// LabeledPoints – the (3, N) point table plus its label table
// ---------------------------------------------------------------------------

/// N labeled 3D samples: three equal-length coordinate sequences and one
/// label sequence. Labels are expected to be 0 or 1; other values survive
/// loading but fall out of both groups at partition time.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoints {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub labels: Vec<f64>,
}

/// The two rendered point groups, split by label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelGroups {
    /// Points labeled 0 (below the decision surface, "f < 0").
    pub below: Vec<[f64; 3]>,
    /// Points labeled 1 (above the decision surface, "f > 0").
    pub above: Vec<[f64; 3]>,
}

impl LabeledPoints {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the point table is empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The i-th point as an `[x, y, z]` triple.
    pub fn point(&self, i: usize) -> [f64; 3] {
        [self.x[i], self.y[i], self.z[i]]
    }

    /// Split points into the label-0 and label-1 groups.
    ///
    /// Pure: the input is not modified. A point whose label is neither
    /// exactly 0 nor exactly 1 (NaN included) lands in neither group.
    pub fn partition(&self) -> LabelGroups {
        let mut groups = LabelGroups::default();

        for (i, &label) in self.labels.iter().enumerate() {
            if label == 0.0 {
                groups.below.push(self.point(i));
            } else if label == 1.0 {
                groups.above.push(self.point(i));
            }
        }

        let dropped = self.len() - groups.below.len() - groups.above.len();
        if dropped > 0 {
            log::warn!("{dropped} points with labels outside {{0, 1}} are not shown");
        }

        groups
    }
}

// ---------------------------------------------------------------------------
// TrainingLog – per-epoch loss and accuracy
// ---------------------------------------------------------------------------

/// One row of the training log. Field names match the CSV header / JSON keys.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TrainingRecord {
    pub epoch: f64,
    pub loss: f64,
    pub train_accuracy: f64,
}

/// The full training log as three aligned columns, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingLog {
    pub epochs: Vec<f64>,
    pub loss: Vec<f64>,
    pub accuracy: Vec<f64>,
}

impl TrainingLog {
    /// Column-orient a sequence of rows, preserving their order.
    pub fn from_records(records: impl IntoIterator<Item = TrainingRecord>) -> Self {
        let mut log = TrainingLog::default();
        for rec in records {
            log.epochs.push(rec.epoch);
            log.loss.push(rec.loss);
            log.accuracy.push(rec.train_accuracy);
        }
        log
    }

    /// Number of logged epochs.
    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: [[f64; 2]; 3], labels: [f64; 2]) -> LabeledPoints {
        LabeledPoints {
            x: coords[0].to_vec(),
            y: coords[1].to_vec(),
            z: coords[2].to_vec(),
            labels: labels.to_vec(),
        }
    }

    #[test]
    fn partition_splits_by_label() {
        let pts = points([[0.0, 10.0], [0.0, 10.0], [0.0, 10.0]], [0.0, 1.0]);
        let groups = pts.partition();
        assert_eq!(groups.below, vec![[0.0, 0.0, 0.0]]);
        assert_eq!(groups.above, vec![[10.0, 10.0, 10.0]]);
    }

    #[test]
    fn partition_drops_other_labels() {
        let pts = LabeledPoints {
            x: vec![1.0, 2.0, 3.0, 4.0],
            y: vec![1.0, 2.0, 3.0, 4.0],
            z: vec![1.0, 2.0, 3.0, 4.0],
            labels: vec![0.0, 2.0, f64::NAN, 1.0],
        };
        let groups = pts.partition();
        assert_eq!(groups.below.len(), 1);
        assert_eq!(groups.above.len(), 1);
        // Combined size is below N exactly when some label is outside {0, 1}.
        assert!(groups.below.len() + groups.above.len() < pts.len());
    }

    #[test]
    fn partition_is_exhaustive_for_binary_labels() {
        let pts = LabeledPoints {
            x: vec![0.0; 6],
            y: vec![0.0; 6],
            z: vec![0.0; 6],
            labels: vec![0.0, 1.0, 1.0, 0.0, 0.0, 1.0],
        };
        let groups = pts.partition();
        assert_eq!(groups.below.len() + groups.above.len(), pts.len());
        assert_eq!(groups.below.len(), 3);
        assert_eq!(groups.above.len(), 3);
    }

    #[test]
    fn training_log_preserves_record_order() {
        let log = TrainingLog::from_records([
            TrainingRecord { epoch: 0.0, loss: 1.0, train_accuracy: 0.5 },
            TrainingRecord { epoch: 1.0, loss: 0.8, train_accuracy: 0.6 },
        ]);
        assert_eq!(log.len(), 2);
        assert_eq!(log.loss, vec![1.0, 0.8]);
        assert_eq!(log.accuracy, vec![0.5, 0.6]);
        assert_eq!(log.epochs, vec![0.0, 1.0]);
    }
}
