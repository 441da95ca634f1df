//! Integration tests for template rendering behavior

use std::thread;

use component_scaffold::{
    render, MalformedKind, RenderError, SubstitutionContext, Template, TemplateRegistry,
};
use pretty_assertions::assert_eq;

fn ctx(pairs: &[(&str, &str)]) -> SubstitutionContext {
    pairs.iter().copied().collect()
}

#[test]
fn test_hello_world() {
    let out = render("Hello <%= name %>!", &ctx(&[("name", "World")])).expect("Should render");
    assert_eq!(out, "Hello World!");
}

#[test]
fn test_upper_and_lower() {
    let out = render(
        "<%= nameUpper %>/<%= nameLower %>",
        &ctx(&[("nameUpper", "Widget"), ("nameLower", "widget")]),
    )
    .expect("Should render");
    assert_eq!(out, "Widget/widget");
}

#[test]
fn test_no_placeholders_unchanged() {
    let sources = [
        "",
        "plain",
        "function f(a, b) { return a < b ? a % b : b; }\n",
        "  leading and trailing whitespace  \n\n",
        "windows\r\nline\r\nendings",
        "stray closer %> and opener <% and <%- dash",
        "unicode ✓ héllo",
    ];
    for source in sources {
        let out = render(source, &SubstitutionContext::new()).expect("Should render");
        assert_eq!(out, source);
    }
}

#[test]
fn test_output_length_accounts_for_markers() {
    let source = "<%= x %>-<%= x %>-<%=x%>\n<%= x %>";
    let marker_lens = ["<%= x %>".len(), "<%= x %>".len(), "<%=x%>".len(), "<%= x %>".len()];
    let value = "longer value";

    let out = render(source, &ctx(&[("x", value)])).expect("Should render");

    let expected_len = source.len() - marker_lens.iter().sum::<usize>() + marker_lens.len() * value.len();
    assert_eq!(out.len(), expected_len);
    assert_eq!(out.matches(value).count(), 4);
    assert_eq!(out, "longer value-longer value-longer value\nlonger value");
}

#[test]
fn test_deterministic() {
    let template = Template::parse("<%= a %> and <%= b %>, again <%= a %>").expect("Should parse");
    let context = ctx(&[("a", "1"), ("b", "2")]);
    let first = template.render(&context).expect("Should render");
    let second = template.render(&context).expect("Should render");
    assert_eq!(first, second);
    assert_eq!(first, "1 and 2, again 1");
}

#[test]
fn test_missing_identifier() {
    let err = render("before <%= y %> after", &ctx(&[("x", "1")])).unwrap_err();
    match err {
        RenderError::UnknownPlaceholder { name, span, .. } => {
            assert_eq!(name, "y");
            assert_eq!(span, 7..15);
        }
        other => panic!("expected UnknownPlaceholder, got {:?}", other),
    }
}

#[test]
fn test_unterminated_marker() {
    let source = "export default <%= nameUpper";
    let err = render(source, &ctx(&[("nameUpper", "Widget")])).unwrap_err();
    assert_eq!(
        err,
        RenderError::MalformedTemplate {
            span: 15..source.len(),
            kind: MalformedKind::Unterminated,
        }
    );
    assert_eq!(err.char_offset(source), 15);
}

#[test]
fn test_error_report_points_at_marker() {
    let source = "line one\nimport <%= nameUppr %> from 'x';\n";
    let err = render(source, &ctx(&[("nameUpper", "Widget")])).unwrap_err();
    assert_eq!(err.suggestions(), Some(&["nameUpper".to_string()][..]));

    let report = err.format(source, "component.js");
    assert!(report.contains("component.js"));
    assert!(report.contains("nameUppr"));
    assert!(report.contains("did you mean nameUpper?"));
}

#[test]
fn test_concurrent_renders() {
    let template = Template::parse("<%= nameUpper %>:<%= nameLower %>").expect("Should parse");

    let outputs: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let template = &template;
                s.spawn(move || {
                    let context = SubstitutionContext::new()
                        .with("nameUpper", format!("Widget{}", i))
                        .with("nameLower", format!("widget{}", i));
                    template.render(&context)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked").expect("Should render"))
            .collect()
    });

    for (i, out) in outputs.iter().enumerate() {
        assert_eq!(out, &format!("Widget{}:widget{}", i, i));
    }
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_shared_types_are_send_and_sync() {
    assert_send_sync::<Template>();
    assert_send_sync::<SubstitutionContext>();
    assert_send_sync::<TemplateRegistry>();
    assert_send_sync::<RenderError>();
}

#[test]
fn test_unterminated_after_non_ascii_reports_character_offset() {
    let source = "héllo → <%= x";
    let err = render(source, &SubstitutionContext::new()).unwrap_err();
    assert_eq!(err.span().start, 11);
    assert_eq!(err.char_offset(source), 8);
    assert_eq!(
        err.to_string(),
        "malformed template: unterminated placeholder, expected '%>'"
    );
}
