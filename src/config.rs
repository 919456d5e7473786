use serde::{Deserialize, Serialize};

/// The slice of a simulation config that drives one evolvable parameter.
///
/// `initial` seeds the value, `rate` is the per-generation mutation
/// probability, `sigma` the Gaussian step size. Richer config documents
/// may carry clamp fields next to these; this record deliberately does
/// not read them (see [`MutableScalar::from_config`]).
///
/// [`MutableScalar::from_config`]: crate::MutableScalar::from_config
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationConfig {
    pub initial: f64,
    pub rate: f64,
    pub sigma: f64,
}

impl MutationConfig {
    /// Pulls the record out of a JSON value. Missing or mistyped keys
    /// surface as the deserializer's error, untranslated.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_the_three_numeric_fields() {
        let config = MutationConfig::from_json(json!({
            "initial": 0.5,
            "rate": 0.01,
            "sigma": 0.25,
        }))
        .unwrap();
        assert_eq!(
            config,
            MutationConfig {
                initial: 0.5,
                rate: 0.01,
                sigma: 0.25,
            }
        );
    }

    #[test]
    fn missing_field_is_a_deserialize_error() {
        let err = MutationConfig::from_json(json!({ "initial": 0.5, "rate": 0.01 }));
        assert!(err.is_err());
    }

    #[test]
    fn mistyped_field_is_a_deserialize_error() {
        let err = MutationConfig::from_json(json!({
            "initial": "half",
            "rate": 0.01,
            "sigma": 0.25,
        }));
        assert!(err.is_err());
    }

    #[test]
    fn clamp_fields_in_richer_documents_are_ignored() {
        let config = MutationConfig::from_json(json!({
            "initial": 2.0,
            "rate": 0.1,
            "sigma": 1.0,
            "clamp min": true,
            "min": -5.0,
            "clamp max": true,
            "max": 5.0,
        }))
        .unwrap();

        let scalar = crate::MutableScalar::from_config(&config);
        assert_eq!(scalar.lower_bound(), None);
        assert_eq!(scalar.upper_bound(), None);
    }
}
