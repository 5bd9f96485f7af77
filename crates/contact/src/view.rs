use askama::Template;
use strum::VariantArray;

use crate::{ContactForm, FieldName};

struct FieldView<'a> {
    label: &'static str,
    value: &'a str,
    errors: Vec<&'a str>,
}

/// Text rendition of the contact page. Every error of a field is printed
/// on its own line right below that field, in server order.
#[derive(Template)]
#[template(
    ext = "txt",
    source = "{% for field in fields -%}
{{ field.label }}: {{ field.value }}
{%- for error in field.errors %}
  ! {{ error }}
{%- endfor %}
{% endfor -%}
{% if disabled %}[Sending...]{% else %}[Send Message]{% endif %} [Reset]
{% if let Some(status) = status -%}
{{ status }}
{% endif -%}"
)]
struct ContactFormTemplate<'a> {
    fields: Vec<FieldView<'a>>,
    disabled: bool,
    status: Option<&'a str>,
}

impl ContactForm {
    pub fn render(&self) -> askama::Result<String> {
        let fields = FieldName::VARIANTS
            .iter()
            .map(|field| FieldView {
                label: field.as_ref(),
                value: self.draft.get(*field),
                errors: self.errors_for(*field).collect(),
            })
            .collect();

        ContactFormTemplate {
            fields,
            disabled: self.submission.disabled,
            status: self.submission.status.as_ref().map(|s| s.as_ref()),
        }
        .render()
    }
}
