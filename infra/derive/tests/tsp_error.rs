use std::borrow::Cow;
use tsp_derive::tsp_error;

#[tsp_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[test]
fn tsp_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/tsp_error_pass.rs");
}

#[test]
fn from_source_and_context() {
    fn fails() -> Result<(), std::io::Error> {
        Err(std::io::Error::other("boom"))
    }

    let err: DemoError = fails().unwrap_err().into();
    assert!(matches!(err, DemoError::Io { context: None, .. }));

    let err = fails().context("Opening settings").unwrap_err();
    match &err {
        DemoError::Io { context, .. } => assert_eq!(context.as_deref(), Some("Opening settings")),
        other => panic!("unexpected variant: {other:?}"),
    }
    assert!(err.to_string().contains("Opening settings"));
}

#[test]
fn internal_from_strings() {
    let err: DemoError = "logic error".into();
    assert!(matches!(err, DemoError::Internal { .. }));

    let err: DemoError = String::from("dynamic").into();
    assert_eq!(err.to_string(), "Internal error: dynamic");
}

#[test]
fn context_on_result_of_self() {
    let res: Result<(), DemoError> = Err("plain".into());
    let err = res.context("with context").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (with context): plain");
}
