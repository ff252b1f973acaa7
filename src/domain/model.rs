use serde::{Deserialize, Deserializer, Serialize};

/// Envelope returned by `GET /api/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub results: Option<Vec<User>>,
    #[serde(default)]
    pub info: Option<Info>,
}

impl ApiResponse {
    pub fn into_first_user(self) -> Option<User> {
        self.results.and_then(|users| users.into_iter().next())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub seed: Option<String>,
    pub results: Option<u32>,
    pub page: Option<u32>,
    pub version: Option<String>,
}

/// One generated profile. The API omits fields freely (and `inc`/`exc`
/// filters drop whole objects), so everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub gender: Option<String>,
    pub name: Option<Name>,
    pub location: Option<Location>,
    pub email: Option<String>,
    pub login: Option<Login>,
    pub dob: Option<Dob>,
    pub phone: Option<String>,
    pub cell: Option<String>,
    pub picture: Option<Picture>,
    pub nat: Option<String>,
}

impl User {
    pub fn uuid(&self) -> Option<&str> {
        self.login.as_ref().and_then(|l| l.uuid.as_deref())
    }

    /// Lookup key: login uuid, then email, then empty.
    pub fn key(&self) -> &str {
        self.uuid()
            .or(self.email.as_deref())
            .unwrap_or_default()
    }

    pub fn full_name(&self) -> String {
        let first = self.name.as_ref().and_then(|n| n.first.as_deref());
        let last = self.name.as_ref().and_then(|n| n.last.as_deref());
        match (first, last) {
            (Some(f), Some(l)) => format!("{} {}", f, l),
            (Some(f), None) => f.to_string(),
            (None, Some(l)) => l.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub title: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street: Option<Street>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    #[serde(default, deserialize_with = "deserialize_postcode")]
    pub postcode: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub timezone: Option<Timezone>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Street {
    pub number: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timezone {
    pub offset: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Login {
    pub uuid: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dob {
    pub date: Option<String>,
    pub age: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub large: Option<String>,
    pub medium: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPostcode {
    Text(String),
    Number(i64),
}

// randomuser.me sends numeric postcodes for some nationalities and strings for others
fn deserialize_postcode<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawPostcode>::deserialize(deserializer)?.map(|raw| match raw {
        RawPostcode::Text(s) => s,
        RawPostcode::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_api_response() {
        let body = serde_json::json!({
            "results": [{
                "gender": "female",
                "name": {"title": "Miss", "first": "Jennie", "last": "Nichols"},
                "location": {
                    "street": {"number": 8929, "name": "Valwood Pkwy"},
                    "city": "Billings",
                    "state": "Michigan",
                    "country": "United States",
                    "postcode": 63104,
                    "coordinates": {"latitude": "-69.8246", "longitude": "134.8719"},
                    "timezone": {"offset": "+9:30", "description": "Adelaide, Darwin"}
                },
                "email": "jennie.nichols@example.com",
                "login": {"uuid": "7a0eed16-9430-4d68-901f-c0d4c1c3bf00", "username": "yellowpeacock117", "password": "addison"},
                "dob": {"date": "1992-03-08T15:13:16.688Z", "age": 30},
                "registered": {"date": "2007-07-09T05:51:59.390Z", "age": 14},
                "phone": "(272) 790-0888",
                "cell": "(489) 330-2385",
                "id": {"name": "SSN", "value": "405-88-3636"},
                "picture": {
                    "large": "https://randomuser.me/api/portraits/women/75.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/women/75.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/women/75.jpg"
                },
                "nat": "US"
            }],
            "info": {"seed": "56d27f4a53bd5441", "results": 1, "page": 1, "version": "1.4"}
        });

        let response: ApiResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.info.as_ref().unwrap().version.as_deref(), Some("1.4"));

        let user = response.into_first_user().unwrap();
        assert_eq!(user.full_name(), "Jennie Nichols");
        assert_eq!(user.key(), "7a0eed16-9430-4d68-901f-c0d4c1c3bf00");
        assert_eq!(
            user.location.unwrap().postcode.as_deref(),
            Some("63104")
        );
        assert_eq!(user.dob.unwrap().age, Some(30));
    }

    #[test]
    fn test_string_postcode_is_kept_verbatim() {
        let location: Location =
            serde_json::from_value(serde_json::json!({"postcode": "V6M 3E4"})).unwrap();
        assert_eq!(location.postcode.as_deref(), Some("V6M 3E4"));

        let location: Location = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(location.postcode, None);
    }

    #[test]
    fn test_empty_and_missing_results() {
        let empty: ApiResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(empty.into_first_user().is_none());

        let missing: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.into_first_user().is_none());
    }

    #[test]
    fn test_key_falls_back_to_email() {
        let user = User {
            email: Some("a@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(user.key(), "a@example.com");
        assert_eq!(User::default().key(), "");
    }
}
