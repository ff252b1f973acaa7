use crate::domain::model::User;
use crate::utils::error::{RandomUserError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    uuid: &'a str,
    first_name: Option<&'a str>,
    last_name: Option<&'a str>,
    gender: Option<&'a str>,
    email: Option<&'a str>,
    phone: Option<&'a str>,
    cell: Option<&'a str>,
    nat: Option<&'a str>,
    city: Option<&'a str>,
    country: Option<&'a str>,
    postcode: Option<&'a str>,
    age: Option<u32>,
    picture_large: Option<&'a str>,
}

impl<'a> From<&'a User> for CsvRow<'a> {
    fn from(user: &'a User) -> Self {
        let name = user.name.as_ref();
        let location = user.location.as_ref();
        Self {
            uuid: user.key(),
            first_name: name.and_then(|n| n.first.as_deref()),
            last_name: name.and_then(|n| n.last.as_deref()),
            gender: user.gender.as_deref(),
            email: user.email.as_deref(),
            phone: user.phone.as_deref(),
            cell: user.cell.as_deref(),
            nat: user.nat.as_deref(),
            city: location.and_then(|l| l.city.as_deref()),
            country: location.and_then(|l| l.country.as_deref()),
            postcode: location.and_then(|l| l.postcode.as_deref()),
            age: user.dob.as_ref().and_then(|d| d.age),
            picture_large: user.picture.as_ref().and_then(|p| p.large.as_deref()),
        }
    }
}

pub fn users_to_json(users: &[User]) -> Result<String> {
    Ok(serde_json::to_string_pretty(users)?)
}

/// Flat CSV with a header row, even when there are no users.
pub fn users_to_csv(users: &[User]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record([
        "uuid",
        "first_name",
        "last_name",
        "gender",
        "email",
        "phone",
        "cell",
        "nat",
        "city",
        "country",
        "postcode",
        "age",
        "picture_large",
    ])?;
    for user in users {
        writer.serialize(CsvRow::from(user))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RandomUserError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        RandomUserError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
