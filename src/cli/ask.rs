//! Ask CLI command handler

use std::io::{self, Write};

use serde::Serialize;
use url::Url;

use crate::api::TripMateClient;
use crate::cli::commands::{AskArgs, OutputFormat};
use crate::error::{Result, TripMateError};
use crate::query::form::BUSY_LABEL;
use crate::query::{prepare_query, QueryForm, QueryHandler, ResponseContent, SubmitStatus};
use crate::render::{markdown_to_text, text_to_plain};

/// Handle the ask command
pub async fn handle_ask(args: AskArgs, endpoint: Url) -> Result<()> {
    let handler = QueryHandler::new(TripMateClient::new(endpoint));
    let mut form = QueryForm::with_input(args.raw_query());

    if prepare_query(&form.input).is_some() {
        eprintln!("{}", BUSY_LABEL);
    }
    let status = handler.submit(&mut form).await;

    if status == SubmitStatus::Skipped {
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", format_content(&form, args.format)?)?;

    match form.content() {
        ResponseContent::Error { detail, .. } => Err(TripMateError::RequestFailed(detail.clone())),
        _ => Ok(()),
    }
}

/// Render the display region in the requested format
pub fn format_content(form: &QueryForm, format: OutputFormat) -> Result<String> {
    let content = form.content();
    let rendered = match (format, content) {
        (_, ResponseContent::Empty) => String::new(),
        (OutputFormat::Html, content) => content.html().trim_end().to_string(),
        (OutputFormat::Text, ResponseContent::Answer { markdown, .. }) => {
            text_to_plain(&markdown_to_text(markdown))
        }
        (OutputFormat::Markdown, ResponseContent::Answer { markdown, .. }) => {
            markdown.trim_end().to_string()
        }
        (OutputFormat::Text | OutputFormat::Markdown, ResponseContent::Error { message, .. }) => {
            message.clone()
        }
        (OutputFormat::Json, content) => serde_json::to_string_pretty(&JsonOutput::new(
            form.input.trim(),
            content,
        ))?,
    };
    Ok(rendered)
}

/// Shape of `--format json`
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    query: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    markdown: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    html: &'a str,
}

impl<'a> JsonOutput<'a> {
    fn new(query: &'a str, content: &'a ResponseContent) -> Self {
        match content {
            ResponseContent::Answer { markdown, html } => Self {
                query,
                ok: true,
                markdown: Some(markdown.as_str()),
                error: None,
                html,
            },
            ResponseContent::Error { message, html, .. } => Self {
                query,
                ok: false,
                markdown: None,
                error: Some(message.as_str()),
                html,
            },
            ResponseContent::Empty => Self {
                query,
                ok: false,
                markdown: None,
                error: None,
                html: "",
            },
        }
    }
}
