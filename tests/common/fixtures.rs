use scrivener::FieldValues;

/// Fields for the witness warrant scenario used across the suite.
pub fn witness_warrant_fields() -> FieldValues {
    FieldValues::new()
        .with("officerName", "Inspector Sharma of the Fort Station")
        .with("complaintPerson", "Nanavati Shaw")
        .with("complaintAddress", "12 Marine Lines")
        .with("offence", "theft")
        .with("witnessName", "Homi Daruwalla")
        .with("witnessDescription", "shopkeeper of Grant Road")
        .with("arrestDate", "10th April")
        .with("issueDate", "7th April")
}

pub fn search_warrant_fields() -> FieldValues {
    FieldValues::new()
        .with("officerName", "Sub-Inspector Kulkarni")
        .with("offence", "housebreaking")
        .with("thingSpecified", "a sandalwood casket")
        .with("placeSearched", "godown at 4 Cotton Exchange Lane")
        .with("issueDate", "12th June")
}

pub fn deposit_warrant_fields() -> FieldValues {
    FieldValues::new()
        .with("officerName", "Sub-Inspector Kulkarni")
        .with("placeSearched", "warehouse behind Crawford Market")
        .with("suspectedObjects", "stolen bales of cotton")
        .with("issueDate", "19th August")
}

pub fn petition_fields() -> FieldValues {
    FieldValues::new()
        .with("authority", "District Magistrate, Poona")
        .with("petitionerName", "Dinshaw Wadia")
        .with("petitionerAddress", "7 Ridge Road")
        .with("subjectMatter", "the public well on Elm Lane has been closed without notice")
        .with("prayer", "the well be reopened for public use")
        .with("issueDate", "3rd March")
}

pub fn report_fields() -> FieldValues {
    FieldValues::new().with(
        "content",
        "The premises were inspected and found in good order.",
    )
}

/// A report body long enough to force pagination.
pub fn long_report_fields() -> FieldValues {
    let body = "The witness repeated the same account without variation.\n".repeat(150);
    FieldValues::new().with("content", body.trim_end())
}
