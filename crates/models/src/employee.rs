use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::ValidationErrors;
use crate::validation::check_employee;

/// Stored employee record, one element of the persisted JSON array.
///
/// Known fields are read leniently so that one loose record never makes the
/// whole collection unreadable: missing or `null` reads as an empty string,
/// other scalars and nested values keep their JSON text. Keys that are not part
/// of the record are kept in `extra` and written back untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub salutation: String,
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub dob: String,
    #[serde(deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(deserialize_with = "lenient_string")]
    pub qualifications: String,
    #[serde(deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(deserialize_with = "lenient_string")]
    pub country: String,
    #[serde(deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(deserialize_with = "lenient_string")]
    pub password: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Request body for create and update, exactly as the client sent it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeInput {
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub qualifications: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A validated creation payload: every required field is present.
#[derive(Clone, Debug, PartialEq)]
pub struct NewEmployee {
    pub salutation: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub gender: String,
    pub qualifications: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub username: String,
    pub password: String,
    pub extra: Map<String, Value>,
}

/// A validated update payload, shallow-merged over the stored record.
/// `None` leaves the stored value alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeePatch {
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub qualifications: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub extra: Map<String, Value>,
}

impl EmployeeInput {
    /// Client-supplied ids never reach a record.
    fn without_id(mut self) -> Self {
        self.extra.remove("id");
        self
    }

    pub fn into_new(self) -> Result<NewEmployee, ValidationErrors> {
        check_employee(&self)?;
        let input = self.without_id();
        Ok(NewEmployee {
            salutation: input.salutation.unwrap_or_default(),
            first_name: input.first_name.unwrap_or_default(),
            last_name: input.last_name.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            phone: input.phone.unwrap_or_default(),
            dob: input.dob.unwrap_or_default(),
            gender: input.gender.unwrap_or_default(),
            qualifications: input.qualifications.unwrap_or_default(),
            address: input.address.unwrap_or_default(),
            city: input.city.unwrap_or_default(),
            state: input.state.unwrap_or_default(),
            country: input.country.unwrap_or_default(),
            username: input.username.unwrap_or_default(),
            password: input.password.unwrap_or_default(),
            extra: input.extra,
        })
    }

    /// Updates are validated as full replacements, then applied as a merge.
    pub fn into_patch(self) -> Result<EmployeePatch, ValidationErrors> {
        check_employee(&self)?;
        let input = self.without_id();
        Ok(EmployeePatch {
            salutation: input.salutation,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            dob: input.dob,
            gender: input.gender,
            qualifications: input.qualifications,
            address: input.address,
            city: input.city,
            state: input.state,
            country: input.country,
            username: input.username,
            password: input.password,
            extra: input.extra,
        })
    }
}

impl NewEmployee {
    /// Append as a new record under a freshly generated id.
    pub fn insert_into(self, employees: &mut Vec<Employee>) -> String {
        let id = Uuid::new_v4().to_string();
        employees.push(self.into_employee(id.clone()));
        id
    }

    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            salutation: self.salutation,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            dob: self.dob,
            gender: self.gender,
            qualifications: self.qualifications,
            address: self.address,
            city: self.city,
            state: self.state,
            country: self.country,
            username: self.username,
            password: self.password,
            extra: self.extra,
        }
    }
}

fn merge(target: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *target = v;
    }
}

impl EmployeePatch {
    /// Overwrite the fields this patch carries; `id` is never touched.
    pub fn apply_to(self, employee: &mut Employee) {
        merge(&mut employee.salutation, self.salutation);
        merge(&mut employee.first_name, self.first_name);
        merge(&mut employee.last_name, self.last_name);
        merge(&mut employee.email, self.email);
        merge(&mut employee.phone, self.phone);
        merge(&mut employee.dob, self.dob);
        merge(&mut employee.gender, self.gender);
        merge(&mut employee.qualifications, self.qualifications);
        merge(&mut employee.address, self.address);
        merge(&mut employee.city, self.city);
        merge(&mut employee.state, self.state);
        merge(&mut employee.country, self.country);
        merge(&mut employee.username, self.username);
        merge(&mut employee.password, self.password);
        employee.extra.extend(self.extra);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn valid_input() -> EmployeeInput {
        EmployeeInput {
            salutation: Some("Ms".into()),
            first_name: Some("Jane".into()),
            last_name: Some("Doe".into()),
            email: Some("jane@example.com".into()),
            phone: Some("1234567890".into()),
            dob: Some("15-06-1990".into()),
            gender: Some("Female".into()),
            qualifications: Some("MSc".into()),
            address: Some("1 Main St".into()),
            city: Some("A".into()),
            state: Some("S".into()),
            country: Some("C".into()),
            username: Some("jdoe".into()),
            password: Some("secret".into()),
            extra: Map::new(),
        }
    }

    #[test]
    fn input_reads_camel_case_and_keeps_unknown_keys() {
        let input: EmployeeInput = serde_json::from_value(json!({
            "firstName": "Jane",
            "lastName": null,
            "department": "R&D",
            "id": "client-chosen"
        }))
        .unwrap();
        assert_eq!(input.first_name.as_deref(), Some("Jane"));
        assert_eq!(input.last_name, None);
        assert_eq!(input.salutation, None);
        assert_eq!(input.extra.get("department"), Some(&json!("R&D")));
    }

    #[test]
    fn into_new_drops_client_id() {
        let mut input = valid_input();
        input.extra.insert("id".into(), json!("client-chosen"));
        input.extra.insert("department".into(), json!("R&D"));
        let new = input.into_new().unwrap();
        assert!(!new.extra.contains_key("id"));
        assert_eq!(new.extra.get("department"), Some(&json!("R&D")));
    }

    #[test]
    fn into_new_rejects_invalid_input() {
        let mut input = valid_input();
        input.username = None;
        let err = input.into_new().unwrap_err();
        assert_eq!(err.messages(), &["Username is required".to_string()]);
    }

    #[test]
    fn create_assigns_fresh_unique_ids() {
        let mut employees = Vec::new();
        let a = valid_input().into_new().unwrap().insert_into(&mut employees);
        let b = valid_input().into_new().unwrap().insert_into(&mut employees);
        assert_ne!(a, b);
        assert!(!a.is_empty());
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].id, a);
        assert_eq!(employees[0].first_name, "Jane");
    }

    #[test]
    fn update_merges_over_existing_record() {
        let mut stored = valid_input().into_new().unwrap().into_employee("e1".into());
        stored.extra.insert("department".into(), json!("R&D"));
        let mut updated = stored.clone();

        let mut body = valid_input();
        body.city = Some("B".into());
        body.extra.insert("id".into(), json!("hijack"));
        body.extra.insert("badge".into(), json!(7));
        let patch = body.into_patch().unwrap();

        patch.apply_to(&mut updated);

        assert_eq!(updated.id, "e1");
        assert_eq!(updated.city, "B");
        assert_eq!(updated.extra.get("department"), Some(&json!("R&D")));
        assert_eq!(updated.extra.get("badge"), Some(&json!(7)));
        assert!(!updated.extra.contains_key("id"));

        let mut expected = stored;
        expected.city = "B".into();
        expected.extra.insert("badge".into(), json!(7));
        assert_eq!(updated, expected);
    }

    #[test]
    fn patch_with_none_keeps_stored_value() {
        let mut stored = valid_input().into_new().unwrap().into_employee("e1".into());
        EmployeePatch { city: Some("B".into()), ..Default::default() }.apply_to(&mut stored);
        assert_eq!(stored.city, "B");
        assert_eq!(stored.first_name, "Jane");
    }

    #[test]
    fn employee_serializes_with_camel_case_keys() {
        let e = valid_input().into_new().unwrap().into_employee("e1".into());
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["id"], "e1");
        assert_eq!(v["firstName"], "Jane");
        assert_eq!(v["lastName"], "Doe");
        assert!(v.get("first_name").is_none());
    }

    #[test]
    fn stored_record_with_missing_fields_still_reads() {
        let e: Employee = serde_json::from_value(json!({"id": "x", "firstName": "Jo"})).unwrap();
        assert_eq!(e.id, "x");
        assert_eq!(e.first_name, "Jo");
        assert_eq!(e.password, "");
    }

    #[test]
    fn stored_record_with_loose_values_still_reads() {
        let stored: Vec<Employee> = serde_json::from_value(json!([
            {"id": "keep-me", "city": "X"},
            {"id": "other", "city": null, "phone": 1234567890, "gender": true, "address": {"line": 1}}
        ]))
        .unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].city, "X");
        assert_eq!(stored[1].city, "");
        assert_eq!(stored[1].phone, "1234567890");
        assert_eq!(stored[1].gender, "true");
        assert_eq!(stored[1].address, r#"{"line":1}"#);
        assert!(stored[1].extra.is_empty());
    }
}
