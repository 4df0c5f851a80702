use serde::{Deserialize, Deserializer, Serialize};

/// 模型訓練時的特徵順序，任何重排都會讓預測靜默出錯
pub const FEATURE_NAMES: [&str; 5] = ["Pregnancies", "Glucose", "BloodPressure", "BMI", "Age"];

pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// One request's health measurements, as posted to `/predict`.
///
/// Values are not range-checked. Integer fields also accept integral JSON
/// floats such as `6.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "Pregnancies", deserialize_with = "integral")]
    pub pregnancies: i64,
    #[serde(rename = "Glucose")]
    pub glucose: f64,
    #[serde(rename = "BloodPressure")]
    pub blood_pressure: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "Age", deserialize_with = "integral")]
    pub age: i64,
}

fn integral<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(serde::de::Error::custom(format!(
            "expected an integer, found {}",
            value
        ))),
    }
}

/// Single-row model input in `FEATURE_NAMES` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }
}

impl From<&InputRecord> for FeatureVector {
    fn from(record: &InputRecord) -> Self {
        Self([
            record.pregnancies as f64,
            record.glucose,
            record.blood_pressure,
            record.bmi,
            record.age as f64,
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub diabetic: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_keeps_training_order() {
        let record = InputRecord {
            pregnancies: 6,
            glucose: 148.0,
            blood_pressure: 72.0,
            bmi: 33.6,
            age: 50,
        };

        let features = FeatureVector::from(&record);
        assert_eq!(features.values(), &[6.0, 148.0, 72.0, 33.6, 50.0]);
        assert_eq!(
            FEATURE_NAMES,
            ["Pregnancies", "Glucose", "BloodPressure", "BMI", "Age"]
        );
    }

    #[test]
    fn test_parse_input_record_with_coercion() {
        let record: InputRecord = serde_json::from_str(
            r#"{"Pregnancies": 2.0, "Glucose": 120, "BloodPressure": 70, "BMI": 28.1, "Age": 41}"#,
        )
        .unwrap();

        assert_eq!(record.pregnancies, 2);
        assert_eq!(record.glucose, 120.0);
        assert_eq!(record.age, 41);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let record: InputRecord = serde_json::from_str(
            r#"{"Pregnancies": -1, "Glucose": -5.5, "BloodPressure": 0, "BMI": 0, "Age": -3}"#,
        )
        .unwrap();

        assert_eq!(record.pregnancies, -1);
        assert_eq!(record.age, -3);
    }

    #[test]
    fn test_reject_fractional_integer_field() {
        let result: Result<InputRecord, _> = serde_json::from_str(
            r#"{"Pregnancies": 1.5, "Glucose": 85, "BloodPressure": 66, "BMI": 26.6, "Age": 31}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_reject_integer_field_beyond_i64() {
        // 2^63 不能用 i64 表示，不可飽和成 i64::MAX
        let result: Result<InputRecord, _> = serde_json::from_str(
            r#"{"Pregnancies": 1, "Glucose": 85, "BloodPressure": 66, "BMI": 26.6, "Age": 9.223372036854776e18}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_reject_missing_field() {
        let result: Result<InputRecord, _> = serde_json::from_str(
            r#"{"Pregnancies": 1, "Glucose": 85, "BloodPressure": 66, "BMI": 26.6}"#,
        );
        assert!(result.is_err());
    }
}
