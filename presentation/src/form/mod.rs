//! Per-control rendering of form fields.
//!
//! The form engine decides *which* control a parameter gets; this module
//! decides what each control looks like in text. Both the console output and
//! the TUI form pane go through these helpers.

use inspector_domain::{ControlKind, FieldView};

/// Short hint for the kind of input a control accepts
pub fn control_hint(kind: ControlKind) -> &'static str {
    match kind {
        ControlKind::NumericInput => "number",
        ControlKind::BooleanInput => "true/false",
        ControlKind::TextInput => "text",
    }
}

/// Text shown for a field's current draft.
///
/// Boolean controls render as a checkbox read with the field's own boolean
/// vocabulary. An unset draft shows `[-]`, since it is neither true nor
/// false; a draft the vocabulary does not recognize is shown next to `[?]`
/// so the user can see what will be rejected.
pub fn display_value(field: &FieldView<'_>) -> String {
    match field.control {
        ControlKind::BooleanInput => {
            if field.raw.is_empty() {
                return "[-]".to_string();
            }
            match field.booleans.interpret(field.raw) {
                Some(true) => "[x]".to_string(),
                Some(false) => "[ ]".to_string(),
                None => format!("[?] {}", field.raw),
            }
        }
        ControlKind::NumericInput | ControlKind::TextInput => field.raw.to_string(),
    }
}

/// Draft written when a boolean control is toggled
pub fn toggled(field: &FieldView<'_>) -> &'static str {
    match field.booleans.interpret(field.raw) {
        Some(true) => "false",
        _ => "true",
    }
}

/// One-line label: name, required marker and control hint
pub fn field_label(field: &FieldView<'_>) -> String {
    let marker = if field.required { "*" } else { "" };
    format!("{}{} <{}>", field.name, marker, control_hint(field.control))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspector_domain::{BooleanVocabulary, SchemaType};

    fn field<'a>(
        control: ControlKind,
        raw: &'a str,
        booleans: &'a BooleanVocabulary,
    ) -> FieldView<'a> {
        FieldView {
            name: "flag",
            description: None,
            declared_type: SchemaType::Boolean,
            required: true,
            control,
            raw,
            booleans,
        }
    }

    #[test]
    fn test_boolean_display() {
        let words = BooleanVocabulary::default();
        let flag = |raw| display_value(&field(ControlKind::BooleanInput, raw, &words));
        assert_eq!(flag("Yes"), "[x]");
        assert_eq!(flag("off"), "[ ]");
        assert_eq!(flag("maybe"), "[?] maybe");
    }

    #[test]
    fn test_unset_boolean_is_not_shown_as_false() {
        let words = BooleanVocabulary::default();
        let unset = display_value(&field(ControlKind::BooleanInput, "", &words));
        let off = display_value(&field(ControlKind::BooleanInput, "false", &words));
        assert_eq!(unset, "[-]");
        assert_ne!(unset, off);
    }

    #[test]
    fn test_boolean_display_uses_configured_words() {
        let words = BooleanVocabulary::with_extra(["ja"], ["nein"]);
        assert_eq!(display_value(&field(ControlKind::BooleanInput, "ja", &words)), "[x]");
        assert_eq!(display_value(&field(ControlKind::BooleanInput, "Nein", &words)), "[ ]");
    }

    #[test]
    fn test_text_display_is_raw() {
        let words = BooleanVocabulary::default();
        assert_eq!(
            display_value(&field(ControlKind::NumericInput, " 42 ", &words)),
            " 42 "
        );
    }

    #[test]
    fn test_toggle() {
        let words = BooleanVocabulary::default();
        let toggle = |raw| toggled(&field(ControlKind::BooleanInput, raw, &words));
        assert_eq!(toggle(""), "true");
        assert_eq!(toggle("true"), "false");
        assert_eq!(toggle("no"), "true");
        assert_eq!(toggle("garbage"), "true");
    }

    #[test]
    fn test_toggle_uses_configured_words() {
        let words = BooleanVocabulary::with_extra(["ja"], ["nein"]);
        assert_eq!(toggled(&field(ControlKind::BooleanInput, "ja", &words)), "false");
        assert_eq!(toggled(&field(ControlKind::BooleanInput, "nein", &words)), "true");
    }

    #[test]
    fn test_field_label() {
        let words = BooleanVocabulary::default();
        assert_eq!(
            field_label(&field(ControlKind::BooleanInput, "", &words)),
            "flag* <true/false>"
        );
    }
}
