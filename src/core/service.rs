use crate::core::loader::LoadedModel;
use crate::domain::model::{FeatureVector, InputRecord};
use crate::domain::ports::Model;
use crate::utils::error::Result;
use std::sync::Arc;

/// Builds the feature vector in training order and asks the model for a label.
/// Any nonzero label counts as diabetic.
pub fn predict(model: &dyn Model, input: &InputRecord) -> Result<bool> {
    let features = FeatureVector::from(input);
    let label = model.predict(&features)?;
    Ok(label != 0)
}

#[derive(Clone)]
pub struct PredictionService {
    model: Arc<dyn Model>,
}

impl PredictionService {
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self { model }
    }

    pub fn model_kind(&self) -> &str {
        self.model.kind()
    }

    pub fn predict(&self, input: &InputRecord) -> Result<bool> {
        predict(self.model.as_ref(), input)
    }
}

impl From<LoadedModel> for PredictionService {
    fn from(model: LoadedModel) -> Self {
        Self::new(model.shared())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PredictError;
    use std::sync::Mutex;

    struct RecordingModel {
        label: i64,
        seen: Mutex<Vec<[f64; 5]>>,
    }

    impl Model for RecordingModel {
        fn kind(&self) -> &str {
            "recording"
        }

        fn predict(&self, features: &FeatureVector) -> Result<i64> {
            self.seen.lock().unwrap().push(*features.values());
            Ok(self.label)
        }
    }

    struct FailingModel;

    impl Model for FailingModel {
        fn kind(&self) -> &str {
            "failing"
        }

        fn predict(&self, _features: &FeatureVector) -> Result<i64> {
            Err(PredictError::inference("X has 5 features, but model expects 8"))
        }
    }

    fn record() -> InputRecord {
        InputRecord {
            pregnancies: 6,
            glucose: 148.0,
            blood_pressure: 72.0,
            bmi: 33.6,
            age: 50,
        }
    }

    #[test]
    fn test_predict_passes_features_in_training_order() {
        let model = RecordingModel {
            label: 1,
            seen: Mutex::new(Vec::new()),
        };

        assert!(predict(&model, &record()).unwrap());
        assert_eq!(
            model.seen.lock().unwrap().as_slice(),
            &[[6.0, 148.0, 72.0, 33.6, 50.0]]
        );
    }

    #[test]
    fn test_nonzero_label_is_true() {
        for (label, expected) in [(0, false), (1, true), (2, true), (-1, true)] {
            let model = RecordingModel {
                label,
                seen: Mutex::new(Vec::new()),
            };
            assert_eq!(predict(&model, &record()).unwrap(), expected);
        }
    }

    #[test]
    fn test_inference_failure_propagates() {
        let service = PredictionService::new(Arc::new(FailingModel));
        let err = service.predict(&record()).unwrap_err();
        assert!(matches!(err, PredictError::InferenceFailure { .. }));
    }

    #[test]
    fn test_predict_is_idempotent() {
        let model = Arc::new(RecordingModel {
            label: 1,
            seen: Mutex::new(Vec::new()),
        });
        let service = PredictionService::new(model.clone());

        let first = service.predict(&record()).unwrap();
        let second = service.predict(&record()).unwrap();

        assert_eq!(first, second);
        let seen = model.seen.lock().unwrap();
        assert_eq!(seen[0], seen[1]);
    }
}
