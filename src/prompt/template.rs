//! `{placeholder}` substitution for the fixed poster templates.
//!
//! `{{` and `}}` render as literal braces and a lone `}` passes through.
//! Values are inserted as-is and never scanned again, so titles or base64
//! payloads that contain braces cannot inject placeholders.

use crate::error::PosterError;
use thiserror::Error;

/// Rendering failure. Offsets are byte positions of the opening brace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("no value for placeholder '{name}' at byte {offset}")]
    Undefined { name: String, offset: usize },

    #[error("unclosed placeholder at byte {offset}")]
    Unclosed { offset: usize },

    #[error("empty placeholder at byte {offset}")]
    Empty { offset: usize },
}

impl From<TemplateError> for PosterError {
    fn from(err: TemplateError) -> Self {
        PosterError::Template(err.to_string())
    }
}

/// Substitute every `{name}` in `template` with its value from `values`.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(idx) = rest.find(|c: char| c == '{' || c == '}') {
        let offset = template.len() - rest.len() + idx;
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let close = tail.find('}').ok_or(TemplateError::Unclosed { offset })?;
        let name = tail[1..close].trim();
        if name.is_empty() {
            return Err(TemplateError::Empty { offset });
        }
        let value = values
            .iter()
            .find_map(|(key, value)| (*key == name).then_some(*value))
            .ok_or_else(|| TemplateError::Undefined {
                name: name.to_string(),
                offset,
            })?;
        out.push_str(value);
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_cjk_values() {
        let rendered = render_template(
            "标题：\"{title}\"，按钮：\"{cta}\"",
            &[("title", "AI实战营"), ("cta", "扫码锁定席位")],
        )
        .unwrap();
        assert_eq!(rendered, "标题：\"AI实战营\"，按钮：\"扫码锁定席位\"");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let text = "注意：文字简洁！\n'''";
        assert_eq!(render_template(text, &[]).unwrap(), text);
    }

    #[test]
    fn test_brace_escapes() {
        assert_eq!(render_template("{{json}} }} a } b", &[]).unwrap(), "{json} } a } b");
    }

    #[test]
    fn test_placeholder_name_is_trimmed() {
        assert_eq!(render_template("[{ cta }]", &[("cta", "go")]).unwrap(), "[go]");
    }

    #[test]
    fn test_values_are_inserted_verbatim() {
        let rendered = render_template("{a}|{b}", &[("a", "{b}"), ("b", "}}")]).unwrap();
        assert_eq!(rendered, "{b}|}}");
    }

    #[test]
    fn test_empty_value_leaves_no_gap() {
        assert_eq!(render_template("产品{slogan}\n", &[("slogan", "")]).unwrap(), "产品\n");
    }

    #[test]
    fn test_undefined_placeholder() {
        let err = render_template("标题{title}", &[]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::Undefined {
                name: "title".to_string(),
                offset: 6
            }
        );
    }

    #[test]
    fn test_unclosed_and_empty_placeholders() {
        assert_eq!(
            render_template("x {title", &[("title", "t")]).unwrap_err(),
            TemplateError::Unclosed { offset: 2 }
        );
        assert_eq!(render_template("x {  }", &[]).unwrap_err(), TemplateError::Empty { offset: 2 });
    }

    #[test]
    fn test_converts_into_poster_error() {
        let err: PosterError = TemplateError::Unclosed { offset: 5 }.into();
        assert_eq!(
            err.to_string(),
            "prompt template error: unclosed placeholder at byte 5"
        );
    }
}
