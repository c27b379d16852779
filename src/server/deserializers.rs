use serde::{Deserialize, Deserializer};

// quiz clients are sloppy about the category id and send it either as a
// number or as a string, accept both
#[derive(Debug, Deserialize)]
#[serde(try_from = "IdRepr")]
pub struct Stri64(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Int(i64),
    Text(String),
}

impl TryFrom<IdRepr> for Stri64 {
    type Error = String;

    fn try_from(value: IdRepr) -> Result<Self, Self::Error> {
        match value {
            IdRepr::Int(v) => Ok(Stri64(v)),
            IdRepr::Text(v) => match v.parse::<i64>() {
                Ok(parsed) => Ok(Stri64(parsed)),
                Err(_) => Err(format!("Wrong value {v}, can not parse to i64")),
            },
        }
    }
}

// wraps the value in an extra Some so that a key carrying an explicit null
// can be told apart from an absent key (pair with #[serde(default)])
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Payload {
        id: Stri64,
    }

    #[test]
    fn id_accepts_numbers_and_numeric_strings() {
        let p: Payload = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(p.id.0, 3);
        let p: Payload = serde_json::from_str(r#"{"id": "3"}"#).unwrap();
        assert_eq!(p.id.0, 3);
    }

    #[test]
    fn id_rejects_garbage_strings() {
        assert!(serde_json::from_str::<Payload>(r#"{"id": "abc"}"#).is_err());
    }
}
