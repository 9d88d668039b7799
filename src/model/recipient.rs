use crate::common::*;

#[doc = "A single entry of the rotation list. Two recipients are equal when both fields match."]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct Recipient {
    #[serde(rename = "name")]
    first_name: String,
    email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_name_field_into_first_name() {
        let recipient: Recipient =
            serde_json::from_str(r#"{"name": "Toto", "email": "toto@test.com"}"#).unwrap();

        assert_eq!(recipient.first_name(), "Toto");
        assert_eq!(recipient.email(), "toto@test.com");
    }

    #[test]
    fn serializes_with_name_and_email_keys() {
        let recipient: Recipient = Recipient::new("Tata".to_string(), "tata@example.com".to_string());
        let value: serde_json::Value = serde_json::to_value(&recipient).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"name": "Tata", "email": "tata@example.com"})
        );
    }

    #[test]
    fn rejects_record_without_email() {
        let result = serde_json::from_str::<Recipient>(r#"{"name": "Titi"}"#);
        assert!(result.is_err());
    }
}
