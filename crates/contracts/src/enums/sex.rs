use serde::{Deserialize, Serialize};

/// Пол пользователя, как он записан в seed-данных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_seed_code() {
        let sex: Sex = serde_json::from_str("\"f\"").unwrap();
        assert_eq!(sex, Sex::Female);
        assert!(serde_json::from_str::<Sex>("\"x\"").is_err());
    }
}
