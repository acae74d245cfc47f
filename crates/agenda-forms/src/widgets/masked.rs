//! Masked text inputs for the national-ID fields.

use super::{html_escape, Widget, WidgetAttrs};
use crate::masks::{format_cpf, format_crp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mask {
    Cpf,
    Crp,
}

/// A Bootstrap text input with one of the ID masks baked in.
///
/// The enhancement script reformats these fields on every keystroke; this
/// widget carries the same attributes the script would set (`inputmode`,
/// `maxlength`, `placeholder`, `autocomplete`) and applies the mask to the
/// rendered value, so the server-rendered markup matches the enhanced state.
#[derive(Debug, Clone)]
pub struct MaskedTextInput {
    mask: Mask,
}

impl MaskedTextInput {
    /// A CPF input: numeric, `000.000.000-00`.
    #[must_use]
    pub fn cpf() -> Self {
        Self { mask: Mask::Cpf }
    }

    /// A CRP input: `06/124424 ou 14/05473-7`.
    #[must_use]
    pub fn crp() -> Self {
        Self { mask: Mask::Crp }
    }

    /// Applies this input's mask to a raw value.
    #[must_use]
    pub fn apply(&self, raw: &str) -> String {
        match self.mask {
            Mask::Cpf => format_cpf(raw),
            Mask::Crp => format_crp(raw),
        }
    }

    fn baked_attrs(&self) -> Vec<(&'static str, &'static str)> {
        match self.mask {
            Mask::Cpf => vec![
                ("inputmode", "numeric"),
                ("maxlength", "14"),
                ("placeholder", "000.000.000-00"),
            ],
            Mask::Crp => vec![
                ("inputmode", "text"),
                ("maxlength", "12"),
                ("placeholder", "06/124424 ou 14/05473-7"),
                ("autocomplete", "off"),
            ],
        }
    }
}

impl Widget for MaskedTextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let id = attrs
            .get("id")
            .cloned()
            .unwrap_or_else(|| format!("id_{name}"));

        let mut class = "form-control".to_string();
        if let Some(extra_class) = attrs.get("class") {
            class = format!("{class} {extra_class}");
        }

        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(&self.apply(v))))
            .unwrap_or_default();

        let baked: String = self
            .baked_attrs()
            .iter()
            .filter(|(k, _)| !attrs.attrs.contains_key(*k))
            .map(|(k, v)| format!(r#" {k}="{v}""#))
            .collect();

        let extra_attrs: String = attrs
            .attrs
            .iter()
            .filter(|(k, _)| k.as_str() != "class" && k.as_str() != "id")
            .map(|(k, v)| format!(r#" {k}="{v}""#))
            .collect();

        format!(
            r#"<input type="text" class="{class}" id="{id}" name="{name}"{value_attr}{baked}{extra_attrs}>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_input_carries_script_attributes() {
        let widget = MaskedTextInput::cpf();
        let html = widget.render("cpf", None, &WidgetAttrs::new());
        assert!(html.contains(r#"inputmode="numeric""#));
        assert!(html.contains(r#"maxlength="14""#));
        assert!(html.contains(r#"placeholder="000.000.000-00""#));
    }

    #[test]
    fn crp_input_disables_autocomplete() {
        let widget = MaskedTextInput::crp();
        let html = widget.render("crp", None, &WidgetAttrs::new());
        assert!(html.contains(r#"maxlength="12""#));
        assert!(html.contains(r#"autocomplete="off""#));
    }

    #[test]
    fn value_is_masked_on_render() {
        let widget = MaskedTextInput::cpf();
        let html = widget.render("cpf", Some("12345678901"), &WidgetAttrs::new());
        assert!(html.contains(r#"value="123.456.789-01""#));

        let widget = MaskedTextInput::crp();
        let html = widget.render("crp", Some("06124424"), &WidgetAttrs::new());
        assert!(html.contains(r#"value="06/124424""#));
    }
}
