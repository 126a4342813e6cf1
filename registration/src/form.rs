use std::collections::HashMap;

pub const EMAIL_FIELD: &str = "email";

/// Read access to the submitted registration form.
pub trait FormValues {
    fn value(&self, name: &str) -> Option<String>;
}

impl FormValues for HashMap<String, String> {
    fn value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FormValues for [(&str, &str)] {
    fn value(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_values() {
        let mut test_form = HashMap::new();

        test_form.insert(String::from(EMAIL_FIELD), String::from("a@example.com"));

        assert_eq!(test_form.value(EMAIL_FIELD).as_deref(), Some("a@example.com"));
        assert!(test_form.value("password").is_none());

        let test_pairs: &[(&str, &str)] = &[("name", "a"), (EMAIL_FIELD, "b@example.com")];

        assert_eq!(test_pairs.value(EMAIL_FIELD).as_deref(), Some("b@example.com"));
        assert!(test_pairs.value("password").is_none());
    }
}
