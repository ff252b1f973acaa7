use crate::core::view_model::UserListUiState;
use crate::domain::model::User;
use crate::domain::options::{Gender, Nationality};
use std::fmt::Write;

pub const NOT_SPECIFIED: &str = "Not specified";
pub const UNKNOWN: &str = "Unknown";
pub const EMPTY_LIST: &str = "The list is empty.\nRun `randomuser generate` to create a user.";

const LABEL_WIDTH: usize = 14;

pub fn render_state(state: &UserListUiState) -> String {
    match state {
        UserListUiState::Idle => EMPTY_LIST.to_string(),
        UserListUiState::Loading => "Loading...".to_string(),
        UserListUiState::Success(users) => render_user_list(users),
        UserListUiState::Error(message) => message.clone(),
    }
}

/// One line per user: name, phone, nationality, uuid.
pub fn render_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return EMPTY_LIST.to_string();
    }

    let rows: Vec<[String; 4]> = users
        .iter()
        .map(|u| {
            [
                non_empty(u.full_name()),
                u.phone.clone().unwrap_or_else(|| "No phone".to_string()),
                u.nat.clone().unwrap_or_default(),
                u.key().to_string(),
            ]
        })
        .collect();

    let name_width = rows.iter().map(|r| r[0].chars().count()).max().unwrap_or(0);
    let phone_width = rows.iter().map(|r| r[1].chars().count()).max().unwrap_or(0);

    rows.iter()
        .map(|[name, phone, nat, key]| {
            format!(
                "{:<nw$}  {:<pw$}  {:<3} {}",
                name,
                phone,
                nat,
                key,
                nw = name_width,
                pw = phone_width
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_user_detail(user: &User) -> String {
    let mut out = String::new();
    let name = user.name.as_ref();
    let dob = user.dob.as_ref();
    let location = user.location.as_ref();
    let picture = user.picture.as_ref();

    let _ = writeln!(out, "{}", non_empty(user.full_name()));

    section(&mut out, "Personal");
    row(&mut out, "First name", name.and_then(|n| n.first.clone()));
    row(&mut out, "Last name", name.and_then(|n| n.last.clone()));
    row(&mut out, "Gender", user.gender.clone());
    row(&mut out, "Age", dob.and_then(|d| d.age).map(|a| a.to_string()));
    row(
        &mut out,
        "Date of birth",
        Some(dob.and_then(|d| d.date.clone()).unwrap_or_else(|| UNKNOWN.to_string())),
    );

    section(&mut out, "Contact");
    row(&mut out, "Email", user.email.clone());
    row(&mut out, "Phone", user.phone.clone());
    row(&mut out, "Cell", user.cell.clone());

    section(&mut out, "Location");
    row(&mut out, "Address", location.and_then(address));
    row(&mut out, "City", location.and_then(|l| l.city.clone()));
    row(&mut out, "State", location.and_then(|l| l.state.clone()));
    row(&mut out, "Country", location.and_then(|l| l.country.clone()));
    row(&mut out, "Postcode", location.and_then(|l| l.postcode.clone()));

    section(&mut out, "Pictures");
    row(&mut out, "Large", picture.and_then(|p| p.large.clone()));
    row(&mut out, "Thumbnail", picture.and_then(|p| p.thumbnail.clone()));

    out.trim_end().to_string()
}

pub fn render_options() -> String {
    let mut out = String::new();
    let genders: Vec<_> = Gender::ALL.iter().map(Gender::as_query).collect();
    let _ = writeln!(out, "Genders: {}", genders.join(", "));
    let _ = writeln!(out, "Nationalities:");
    for nat in Nationality::ALL {
        let marker = if *nat == Nationality::default() { " (default)" } else { "" };
        let _ = writeln!(out, "  {}  {}{}", nat.code(), nat.label(), marker);
    }
    out.trim_end().to_string()
}

fn address(location: &crate::domain::model::Location) -> Option<String> {
    let street = location.street.as_ref()?;
    match (street.number, street.name.as_deref()) {
        (Some(number), Some(name)) => Some(format!("{} {}", number, name)),
        (None, Some(name)) => Some(name.to_string()),
        (Some(number), None) => Some(number.to_string()),
        (None, None) => None,
    }
}

fn non_empty(name: String) -> String {
    if name.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        name
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n[{}]", title);
}

fn row(out: &mut String, label: &str, value: Option<String>) {
    let label = format!("{}:", label);
    let _ = writeln!(
        out,
        "  {:<width$} {}",
        label,
        value.as_deref().unwrap_or(NOT_SPECIFIED),
        width = LABEL_WIDTH
    );
}
