//! Enrollment intake record and the mapping from submitted form fields.
//!
//! A submission arrives as a flat map of form keys to values. Presence of a
//! key is the only check made here: required fields that are absent stay
//! `None` (the storage engine rejects them), optional fields that are absent
//! become the empty string. Present-but-empty values are kept as-is.

use std::collections::HashMap;

/// Submitted form fields keyed by input name.
pub type FieldMap = HashMap<String, String>;

/// Form key that carries the selected course. Stored as `course_selected`.
pub const COURSE_FIELD: &str = "course";

/// Columns that must be non-null for the insert to succeed.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "first_name",
    "last_name",
    "address",
    "date_of_birth",
    "place_of_birth",
    "contact_number",
    "gender",
    "citizenship",
    "status",
    "course_selected",
];

/// Collapse decoded form pairs into a [`FieldMap`].
///
/// A repeated key keeps its last value.
pub fn collapse_pairs<I>(pairs: I) -> FieldMap
where
    I: IntoIterator<Item = (String, String)>,
{
    pairs.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Typed record
// ---------------------------------------------------------------------------

/// An enrollment ready to be inserted into the `students` table.
///
/// `date_created` is not part of the record; it is assigned at insert time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEnrollment {
    pub student_type: String,
    pub previous_school: String,
    pub first_name: Option<String>,
    pub middle_name: String,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub contact_number: Option<String>,
    pub gender: Option<String>,
    pub citizenship: Option<String>,
    pub status: Option<String>,
    pub father_name: String,
    pub father_contact: String,
    pub father_occupation: String,
    pub mother_name: String,
    pub mother_contact: String,
    pub mother_occupation: String,
    pub elementary_school: String,
    pub elementary_year: String,
    pub junior_high_school: String,
    pub junior_high_year: String,
    pub senior_high_school: String,
    pub senior_high_year: String,
    pub course_selected: Option<String>,
    pub academic_year: String,
    pub semester: String,
    pub signature: String,
    pub gcash_number: String,
}

impl NewEnrollment {
    /// Build a record from submitted form fields.
    pub fn from_fields(fields: &FieldMap) -> Self {
        let required = |key: &str| fields.get(key).cloned();
        let optional = |key: &str| fields.get(key).cloned().unwrap_or_default();

        Self {
            student_type: optional("student_type"),
            previous_school: optional("previous_school"),
            first_name: required("first_name"),
            middle_name: optional("middle_name"),
            last_name: required("last_name"),
            address: required("address"),
            date_of_birth: required("date_of_birth"),
            place_of_birth: required("place_of_birth"),
            contact_number: required("contact_number"),
            gender: required("gender"),
            citizenship: required("citizenship"),
            status: required("status"),
            father_name: optional("father_name"),
            father_contact: optional("father_contact"),
            father_occupation: optional("father_occupation"),
            mother_name: optional("mother_name"),
            mother_contact: optional("mother_contact"),
            mother_occupation: optional("mother_occupation"),
            elementary_school: optional("elementary_school"),
            elementary_year: optional("elementary_year"),
            junior_high_school: optional("junior_high_school"),
            junior_high_year: optional("junior_high_year"),
            senior_high_school: optional("senior_high_school"),
            senior_high_year: optional("senior_high_year"),
            course_selected: required(COURSE_FIELD),
            academic_year: optional("academic_year"),
            semester: optional("semester"),
            signature: optional("signature"),
            gcash_number: optional("gcash_number"),
        }
    }

    /// Names of required columns that have no value.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let values = [
            &self.first_name,
            &self.last_name,
            &self.address,
            &self.date_of_birth,
            &self.place_of_birth,
            &self.contact_number,
            &self.gender,
            &self.citizenship,
            &self.status,
            &self.course_selected,
        ];

        REQUIRED_COLUMNS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_none())
            .map(|(column, _)| *column)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        collapse_pairs(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    fn complete() -> FieldMap {
        fields(&[
            ("first_name", "Ana"),
            ("last_name", "Cruz"),
            ("address", "123 Rd"),
            ("date_of_birth", "2005-01-01"),
            ("place_of_birth", "Manila"),
            ("contact_number", "09171234567"),
            ("gender", "F"),
            ("citizenship", "Filipino"),
            ("status", "New"),
            ("course", "BSIT"),
        ])
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let map = fields(&[("semester", "1st"), ("semester", "2nd")]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["semester"], "2nd");
    }

    #[test]
    fn course_maps_to_course_selected() {
        let record = NewEnrollment::from_fields(&complete());
        assert_eq!(record.course_selected.as_deref(), Some("BSIT"));
    }

    #[test]
    fn course_selected_key_is_not_read() {
        let mut map = complete();
        map.remove(COURSE_FIELD);
        map.insert("course_selected".into(), "BSCS".into());

        let record = NewEnrollment::from_fields(&map);
        assert_eq!(record.course_selected, None);
    }

    #[test]
    fn absent_optional_fields_default_to_empty() {
        let record = NewEnrollment::from_fields(&complete());
        assert_eq!(record.student_type, "");
        assert_eq!(record.previous_school, "");
        assert_eq!(record.middle_name, "");
        assert_eq!(record.academic_year, "");
        assert_eq!(record.semester, "");
        assert_eq!(record.gcash_number, "");
    }

    #[test]
    fn present_empty_required_field_is_kept() {
        let mut map = complete();
        map.insert("address".into(), String::new());

        let record = NewEnrollment::from_fields(&map);
        assert_eq!(record.address.as_deref(), Some(""));
        assert!(record.missing_required().is_empty());
    }

    #[test]
    fn complete_submission_has_nothing_missing() {
        assert!(NewEnrollment::from_fields(&complete())
            .missing_required()
            .is_empty());
    }

    #[test]
    fn absent_required_fields_are_reported_in_column_order() {
        let mut map = complete();
        map.remove("last_name");
        map.remove(COURSE_FIELD);

        let record = NewEnrollment::from_fields(&map);
        assert_eq!(record.last_name, None);
        assert_eq!(
            record.missing_required(),
            vec!["last_name", "course_selected"]
        );
    }

    #[test]
    fn empty_submission_misses_every_required_column() {
        let record = NewEnrollment::from_fields(&FieldMap::new());
        assert_eq!(record.missing_required(), REQUIRED_COLUMNS.to_vec());
    }

    #[test]
    fn client_supplied_date_created_is_ignored() {
        let mut map = complete();
        map.insert("date_created".into(), "1999-01-01 00:00:00".into());

        let with_date = NewEnrollment::from_fields(&map);
        let without_date = NewEnrollment::from_fields(&complete());
        assert_eq!(with_date, without_date);
    }
}
