//! The built-in catalog: template data for every supported document type.
//!
//! Paragraph wording follows the Criminal Procedure Code schedule forms.
//! Everything here is data; the closing date line and signature block are
//! ordinary paragraph entries.

use crate::definition::TemplateDefinition;
use crate::registry::Registry;
use scrivener_types::DocumentType;

/// Closing line shared by the warrant forms. `{year}` is the assembler's
/// derived field; `{issueDate}` comes from the caller.
const COURT_CLOSING: &str =
    "Given under my hand and the seal of the Court, this {issueDate} day of {year}.";

const SEAL_AND_SIGNATURE: &str = "(Seal)\n\n(Signature)";

pub(crate) fn builtin() -> Registry {
    Registry::new()
        .with(DocumentType::WitnessWarrant, witness_warrant())
        .with(
            DocumentType::SearchWarrantParticularOffence,
            search_warrant_particular_offence(),
        )
        .with(
            DocumentType::SearchWarrantPlaceOfDeposit,
            search_warrant_place_of_deposit(),
        )
        .with(DocumentType::Petition, petition())
        .with(DocumentType::Report, report())
}

fn witness_warrant() -> TemplateDefinition {
    TemplateDefinition::new("Warrant to Bring Up a Witness")
        .require("officerName")
        .require("complaintPerson")
        .require("complaintAddress")
        .require("offence")
        .require("witnessName")
        .require("witnessDescription")
        .require("arrestDate")
        .require("issueDate")
        .paragraph("WARRANT TO BRING UP A WITNESS\n\nTo {officerName}.")
        .paragraph(
            "WHEREAS complaint has been made before me that {complaintPerson} of \
             {complaintAddress} has committed (or is suspected to have committed) the offence \
             of {offence}, and it appears likely that {witnessName}, {witnessDescription}, can \
             give evidence concerning the said complaint; and whereas I have good and \
             sufficient reason to believe that the said {witnessName} will not attend as a \
             witness unless compelled to do so; This is to authorise and require you to arrest \
             the said {witnessName}, and on the {arrestDate} to bring him before this Court, \
             to be examined touching the offence complained of.",
        )
        .paragraph(COURT_CLOSING)
        .paragraph(SEAL_AND_SIGNATURE)
}

fn search_warrant_particular_offence() -> TemplateDefinition {
    TemplateDefinition::new("Warrant to Search After Information of a Particular Offence")
        .require("officerName")
        .require("offence")
        .require("thingSpecified")
        .require("placeSearched")
        .require("issueDate")
        .paragraph("WARRANT TO SEARCH AFTER INFORMATION OF A PARTICULAR OFFENCE\n\nTo {officerName}.")
        .paragraph(
            "WHEREAS information has been laid (or complaint has been made) before me of the \
             commission (or suspected commission) of the offence of {offence}, and it has been \
             made to appear to me that the production of {thingSpecified} is essential to the \
             inquiry now being made (or about to be made) into the said offence; This is to \
             authorise and require you to search for the said {thingSpecified} in the \
             {placeSearched}, and, if found, to produce the same forthwith before this Court, \
             returning this warrant, with an endorsement certifying what you have done under \
             it, immediately upon its execution.",
        )
        .paragraph(COURT_CLOSING)
        .paragraph(SEAL_AND_SIGNATURE)
}

fn search_warrant_place_of_deposit() -> TemplateDefinition {
    TemplateDefinition::new("Warrant to Search a Suspected Place of Deposit")
        .require("officerName")
        .require("placeSearched")
        .require("suspectedObjects")
        .require("issueDate")
        .paragraph("WARRANT TO SEARCH A SUSPECTED PLACE OF DEPOSIT\n\nTo {officerName}.")
        .paragraph(
            "WHEREAS information has been laid before me, and on due inquiry thereupon had, I \
             have been led to believe that the {placeSearched} is used as a place for the \
             deposit of {suspectedObjects}; This is to authorise and require you to enter the \
             said place with such assistance as shall be required, to use, if necessary, \
             reasonable force for that purpose, to search every part of the said place, and to \
             seize and take possession of any {suspectedObjects} found therein, forthwith \
             bringing the same before this Court, to be dealt with according to law.",
        )
        .paragraph(COURT_CLOSING)
        .paragraph(SEAL_AND_SIGNATURE)
}

fn petition() -> TemplateDefinition {
    TemplateDefinition::new("Petition")
        .require("authority")
        .require("petitionerName")
        .require("petitionerAddress")
        .require("subjectMatter")
        .require("prayer")
        .require("issueDate")
        .paragraph("PETITION\n\nTo,\nThe {authority}.")
        .paragraph(
            "The humble petition of {petitionerName}, residing at {petitionerAddress}, most \
             respectfully showeth that {subjectMatter}.",
        )
        .paragraph(
            "Your petitioner therefore prays that {prayer}; and for this act of kindness, \
             your petitioner, as in duty bound, shall ever pray.",
        )
        .paragraph("Dated this {issueDate} day of {year}.")
        .paragraph("(Signature of the Petitioner)")
}

/// Free-content report: one verbatim paragraph, no closing entries.
fn report() -> TemplateDefinition {
    TemplateDefinition::new("Report")
        .require("content")
        .paragraph("{content}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warrant_forms_end_with_closing_and_signature() {
        for definition in [
            witness_warrant(),
            search_warrant_particular_offence(),
            search_warrant_place_of_deposit(),
        ] {
            let sources: Vec<&str> = definition.paragraphs().iter().map(|p| p.source()).collect();
            assert_eq!(sources[sources.len() - 2], COURT_CLOSING);
            assert_eq!(sources[sources.len() - 1], SEAL_AND_SIGNATURE);
        }
    }

    #[test]
    fn witness_warrant_has_four_paragraphs() {
        assert_eq!(witness_warrant().paragraphs().len(), 4);
    }

    #[test]
    fn report_has_no_closing_entries() {
        let report = report();
        assert_eq!(report.paragraphs().len(), 1);
        assert_eq!(report.required_fields(), ["content"]);
    }
}
