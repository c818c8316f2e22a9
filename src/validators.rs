use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Field name mapped to a fixed error message; an empty map means the form
/// may be submitted. Every required field is checked on every call.
pub type ValidationResult = BTreeMap<String, String>;

pub const MESS_OPTIONS: &[&str] = &["SRRC", "Shakthi", "Zenith"];
pub const MEAL_TYPES: &[&str] = &["Veg", "Non-Veg", "Special"];

fn reg_no_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}[A-Z]{3}\d{4}$").expect("valid regex"))
}

fn block_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]+$").expect("valid regex"))
}

fn room_no_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+$").expect("valid regex"))
}

fn contact_number_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{10}$").expect("valid regex"))
}

/// VIT registration number, e.g. `23BCE1701`.
pub fn is_valid_reg_no(reg_no: &str) -> bool {
    reg_no_pattern().is_match(reg_no)
}

/// Hostel block: uppercase letters only.
pub fn is_valid_block(block: &str) -> bool {
    block_pattern().is_match(block)
}

/// Room number: digits only.
pub fn is_valid_room_no(room_no: &str) -> bool {
    room_no_pattern().is_match(room_no)
}

/// Ten-digit phone number.
pub fn is_valid_contact_number(number: &str) -> bool {
    contact_number_pattern().is_match(number)
}

pub fn is_not_empty(s: &str) -> bool {
    !s.trim().is_empty()
}

pub struct ComplaintFields<'a> {
    pub reg_no: &'a str,
    pub block: &'a str,
    pub room_no: &'a str,
    pub name: &'a str,
    pub description: &'a str,
}

pub fn validate_complaint_form(fields: &ComplaintFields<'_>) -> ValidationResult {
    let mut errors = ValidationResult::new();

    if !is_valid_reg_no(fields.reg_no) {
        errors.insert(
            "regNo".to_string(),
            "Invalid registration number (e.g., 23BCE1701)".to_string(),
        );
    }
    if !is_valid_block(fields.block) {
        errors.insert(
            "block".to_string(),
            "Block should contain uppercase letters only".to_string(),
        );
    }
    if !is_valid_room_no(fields.room_no) {
        errors.insert(
            "roomNo".to_string(),
            "Room number should contain digits only".to_string(),
        );
    }
    if !is_not_empty(fields.name) {
        errors.insert("name".to_string(), "Name is required".to_string());
    }
    if !is_not_empty(fields.description) {
        errors.insert(
            "description".to_string(),
            "Description is required".to_string(),
        );
    }

    errors
}

pub struct MessComplaintFields<'a> {
    pub base: ComplaintFields<'a>,
    pub mess: &'a str,
    pub meal_type: &'a str,
}

/// Superset of [`validate_complaint_form`]: the shared fields are checked
/// with the base validator, then the mess-specific selections on top.
pub fn validate_mess_complaint_form(fields: &MessComplaintFields<'_>) -> ValidationResult {
    let mut errors = validate_complaint_form(&fields.base);

    if !is_not_empty(fields.mess) {
        errors.insert("mess".to_string(), "Mess selection is required".to_string());
    } else if !MESS_OPTIONS.contains(&fields.mess) {
        errors.insert(
            "mess".to_string(),
            format!("Mess must be one of: {}", MESS_OPTIONS.join(", ")),
        );
    }

    if !is_not_empty(fields.meal_type) {
        errors.insert(
            "mealType".to_string(),
            "Meal type is required".to_string(),
        );
    } else if !MEAL_TYPES.contains(&fields.meal_type) {
        errors.insert(
            "mealType".to_string(),
            format!("Meal type must be one of: {}", MEAL_TYPES.join(", ")),
        );
    }

    errors
}
