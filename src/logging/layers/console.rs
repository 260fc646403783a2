use crate::logging::config::ConsoleOutput;
use std::io;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self as tracing_fmt, format, writer::BoxMakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// Layer type returned by the console builder.
pub type ConsoleFmtLayer<S> =
    tracing_fmt::Layer<S, format::DefaultFields, format::Format<format::Full>, BoxMakeWriter>;

/// Build the console tracing layer for the provided subscriber type.
pub fn console_layer<S>(output: ConsoleOutput) -> ConsoleFmtLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let make_writer = test_capture::writer().unwrap_or_else(|| match output {
        ConsoleOutput::Stdout => BoxMakeWriter::new(io::stdout),
        ConsoleOutput::Stderr => BoxMakeWriter::new(io::stderr),
        ConsoleOutput::None => BoxMakeWriter::new(io::sink),
    });

    tracing_fmt::layer()
        .with_writer(make_writer)
        .with_ansi(false)
        .with_target(true)
}

#[cfg(not(test))]
mod test_capture {
    use tracing_subscriber::fmt::writer::BoxMakeWriter;

    pub(super) fn writer() -> Option<BoxMakeWriter> {
        None
    }
}
